use anyhow::Result;
use clap::Parser;

use screenflow::analytics::{EventSink, JsonlSink, TracingSink};
use screenflow::app::App;
use screenflow::cli::Cli;
use screenflow::config::Config;
use screenflow::styles::{self, ThemeType};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default())
        .join("screenflow");
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.clone()));

    let file_appender = tracing_appender::rolling::never(&log_dir, "screenflow.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    // Load config; CLI flags override file values
    let config_path = cli.config.unwrap_or_else(Config::default_path);
    let config = Config::load_or_create(&config_path)?;

    let theme_name = cli
        .theme
        .or(config.theme.clone())
        .unwrap_or_else(|| "dark".to_string());
    let theme_type = theme_name.parse::<ThemeType>().unwrap_or_default();
    styles::init_theme(theme_type);

    let event_log = cli.event_log.or(config.event_log.clone());
    let sink: Box<dyn EventSink> = match event_log {
        Some(path) => Box::new(JsonlSink::create(&path)?),
        None => Box::new(TracingSink::new()),
    };

    let mut app = App::new(sink);
    let result = app.run();

    // Flush log buffers on normal exit (panic hook handles panics)
    drop(guard);

    result
}
