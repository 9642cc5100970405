mod app_state;
mod cli;
mod props;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use autosize_config::AutosizeConfig;

use crate::props::PropOverrides;

fn main() {
    let args = cli::parse();

    // Config first so its log level can seed the filter
    let loaded = autosize_config::load_config(args.config.as_deref());

    let default_directive = match &loaded {
        Ok(config) => format!("autosize={}", config.logging.level.as_str()),
        Err(_) => "autosize=info".to_string(),
    };
    let log_directive = args.log_level.as_deref().unwrap_or(&default_directive);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "autosize=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("autosize-view v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        AutosizeConfig::default()
    });

    let overrides = PropOverrides {
        iframe: args.iframe,
        no_animation: args.no_animation,
    };

    if args.print_script {
        let props = props::props_from_config(&config.webview, overrides);
        println!(
            "{}",
            props
                .script_template(f64::from(config.window.width))
                .render()
        );
        return;
    }

    let config_path = match args.config.clone() {
        Some(path) => Some(path),
        None => autosize_config::toml_loader::default_config_path().ok(),
    };
    let source = props::resolve_source(args.source.as_deref());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::AutosizeApp::new(config, overrides, source, config_path);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
