use crate::ui::app_context::{use_config, AppServices};
use crate::ui::app_service::{use_app, AppService};
use dioxus::desktop::{Config as DioxusConfig, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use filedeck_core::config::Config;
use filedeck_ui::FileListView;
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_background_color((0x00, 0x00, 0x00, 0xff))
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("filedeck")
        .with_decorations(true)
        .with_inner_size(LogicalSize::new(960, 720))
}

pub fn launch_app(config: Config) {
    let services = AppServices { config };

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        // AppServices is Send-safe; AppService is created inside the tree
        .with_context_provider(move || Box::new(services.clone()))
        .launch(App);
}

#[component]
fn App() -> Element {
    debug!("Rendering app component");

    let config = use_config();
    let app_service = use_hook(|| AppService::new(&config));
    use_context_provider(|| app_service);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen w-full bg-black relative flex items-center justify-center p-4",
            FileListPage {}
        }
    }
}

#[component]
fn FileListPage() -> Element {
    let app = use_app();

    rsx! {
        FileListView {
            state: app.state,
            on_toggle: move |id| app.toggle_selection(id),
            on_delete: move |id| app.delete_file(id),
            on_select_all: move |_| app.select_all(),
            on_delete_selected: move |_| app.delete_selected(),
            on_add_file: move |_| app.add_file(),
            on_dismiss_error: move |_| app.dismiss_error(),
        }
    }
}
