use dioxus::prelude::*;
use filedeck_core::config::Config;

/// Send-safe inputs handed to the component tree at launch.
///
/// The file list store itself is built inside the tree (see `AppService`)
/// because it lives in a `Signal`.
#[derive(Clone)]
pub struct AppServices {
    pub config: Config,
}

/// Hook to access the config from components
pub fn use_config() -> Config {
    use_context::<AppServices>().config
}
