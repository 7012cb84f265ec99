mod app_state;
mod cli;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use starfield_config::StarfieldConfig;

const DEFAULT_DIRECTIVE: &str = "starfield=info";

fn main() {
    let args = cli::parse();

    // Loaded before the subscriber so the config's log level can apply.
    let loaded = starfield_config::load_config(args.config.as_deref());

    let log_directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(config)) => format!("starfield={}", config.logging.level),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_string(),
    };
    let directive: Result<Directive, _> = log_directive
        .parse()
        .or_else(|_| DEFAULT_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starfield v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        StarfieldConfig::default()
    });
    if let Some(profile) = args.profile {
        config.device.profile = profile.into();
    }

    if args.print_config {
        println!("{}", starfield_config::config_to_json(&config));
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::StarfieldApp::new(config, args.seed);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
