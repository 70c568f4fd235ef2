use clap::Parser;
use filedeck_core::config::{Config, IdStrategy};
use tracing::{error, info};

mod ui;

/// filedeck - a mock list of uploaded files
#[derive(Parser, Debug)]
#[command(name = "filedeck")]
struct Args {
    /// Simulated round trip for each delete, in milliseconds.
    #[arg(long, env = "FILEDECK_DELETE_LATENCY_MS")]
    latency_ms: Option<u64>,

    /// Use a plain counter for new file ids instead of the wall clock.
    #[arg(long, env = "FILEDECK_SEQUENTIAL_IDS")]
    sequential_ids: bool,

    /// Start with an empty list instead of the sample files.
    #[arg(long, env = "FILEDECK_NO_SEED")]
    no_seed: bool,

    /// Save the effective configuration to ~/.filedeck/config.yaml and exit.
    #[arg(long)]
    write_config: bool,
}

impl Args {
    /// Command-line flags win over the loaded configuration.
    fn apply(&self, config: &mut Config) {
        if let Some(ms) = self.latency_ms {
            config.delete_latency_ms = ms;
        }
        if self.sequential_ids {
            config.id_strategy = IdStrategy::Sequential;
        }
        if self.no_seed {
            config.seed_on_start = false;
        }
    }
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let args = Args::parse();
    configure_logging();

    let mut config = Config::load();
    args.apply(&mut config);
    info!(
        "Config: latency={}ms ids={:?} seed={}",
        config.delete_latency_ms, config.id_strategy, config.seed_on_start
    );

    if args.write_config {
        match config.save_to_config_yaml() {
            Ok(path) => info!("Wrote {}", path.display()),
            Err(e) => {
                error!("Failed to write config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    info!("Starting UI");
    ui::launch_app(config);
    info!("UI quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args =
            Args::try_parse_from(["filedeck", "--latency-ms", "20", "--sequential-ids", "--no-seed"])
                .unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config.delete_latency_ms, 20);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(!config.seed_on_start);
    }

    #[test]
    fn test_latency_env_fallback() {
        std::env::set_var("FILEDECK_DELETE_LATENCY_MS", "75");
        let from_env = Args::try_parse_from(["filedeck"]).unwrap();
        let from_flag = Args::try_parse_from(["filedeck", "--latency-ms", "20"]).unwrap();
        std::env::remove_var("FILEDECK_DELETE_LATENCY_MS");
        let unset = Args::try_parse_from(["filedeck"]).unwrap();

        let mut config = Config::default();
        from_env.apply(&mut config);
        assert_eq!(config.delete_latency_ms, 75);

        from_flag.apply(&mut config);
        assert_eq!(config.delete_latency_ms, 20);

        let mut config = Config::default();
        unset.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
