use anyhow::Result;
use clap::{Parser, Subcommand};

use aispend::config::{paths::TrackerPaths, settings::Settings};
use aispend::display::format_service_table;
use aispend::reports::{ProviderBreakdown, SpendingSummary};
use aispend::store::ServiceStore;

#[derive(Parser)]
#[command(
    name = "aispend",
    author = "Kaylee Beyene",
    version,
    about = "Terminal dashboard for AI service expenses",
    long_about = "aispend tracks your recurring and one-time spending on AI \
                  services - subscriptions, usage-based billing, and prepaid \
                  credits - and shows aggregate statistics and charts in an \
                  interactive terminal dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Print the tracked service list
    List,

    /// Print spending statistics
    Stats,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            aispend::tui::run_tui(&settings)?;
        }
        Some(Commands::List) => {
            let store = demo_store(&settings);
            print!("{}", format_service_table(store.services(), &settings));
        }
        Some(Commands::Stats) => {
            let store = demo_store(&settings);
            let summary = SpendingSummary::compute(store.services());
            let breakdown = ProviderBreakdown::compute(store.services());
            println!("{}", summary.format_terminal(&settings.currency_symbol));
            print!("{}", breakdown.format_terminal(&settings.currency_symbol));
        }
        Some(Commands::Config) => {
            println!("aispend Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Seed examples:   {}", settings.seed_examples);
            println!("  Tick rate:       {}ms", settings.tick_rate_ms);
        }
        None => {
            println!("aispend - Terminal dashboard for AI service expenses");
            println!();
            println!("Run 'aispend --help' for usage information.");
            println!("Run 'aispend tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}

/// The session-start snapshot used by the non-interactive commands
///
/// Service records are never persisted, so `list` and `stats` show the same
/// seed snapshot the dashboard starts from.
fn demo_store(settings: &Settings) -> ServiceStore {
    if settings.seed_examples {
        ServiceStore::with_examples()
    } else {
        ServiceStore::new()
    }
}
