use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use daybook::clock::system_clock;
use daybook::commands;
use daybook::config;
use daybook::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Journal day picker", long_about = "Journal day picker\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Day to select on start in YYYY-MM-DD format (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 15-day window around a day
    Window {
        /// Day to select in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Pretend today is this day (YYYY-MM-DD)
        #[arg(short, long)]
        today: Option<String>,
    },
    /// Print the calendar markings for a selection
    Marks {
        /// Day to select in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Pretend today is this day (YYYY-MM-DD)
        #[arg(short, long)]
        today: Option<String>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    print!("{}", daybook::formatting::format_header("Current Configuration:", true, &cfg.display));
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("display_name: {}", cfg.display_name.as_deref().unwrap_or("(none)"));
    println!("greeting_refresh_interval: {} seconds", cfg.greeting_refresh_interval);
    println!("visible_cards: {}", cfg.visible_cards);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!("accent: {:?}", cfg.display.accent);
    println!("today_fg: {:?}{}",
        cfg.display.today_fg(),
        if cfg.display.today_fg.is_none() { " (auto: accent)" } else { "" }
    );
    println!("card_fg: {:?}", cfg.display.card_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run the interactive day picker
async fn run_tui_mode(config: config::Config, date: Option<String>) -> anyhow::Result<()> {
    let initial_date = commands::parse_optional_day(date.as_deref())?;
    tui::run(config, system_clock(), initial_date).await?;
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => {
            handle_config_command();
            Ok(())
        }
        Commands::Window { date, today } => commands::window::run(date, today, &config.display),
        Commands::Marks { date, today } => commands::marks::run(date, today),
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let result = match cli.command {
        None => run_tui_mode(config, cli.date).await,
        Some(command) => execute_command(&config, command),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
