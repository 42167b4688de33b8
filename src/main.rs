// 📒 Advisor Book - entry point
//
// advisor-book                 → interactive TUI (default)
// advisor-book exec <command>  → run one command and print the result
// advisor-book import <csv>    → add clients from a CSV file
// advisor-book export <csv>    → write every client to a CSV file

// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use advisor_book::config::{self, LoadOutcome};
use advisor_book::sample::sample_address_book;
use advisor_book::storage::csv_io::{export_csv, import_csv};
use advisor_book::{storage_for, AddressBook, Config, LogicManager, ModelManager};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "advisor-book", version, about = "Client book for financial advisors")]
struct Cli {
    /// Application config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive terminal UI
    Tui,
    /// Run a single command, e.g. `exec list`
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
    /// Add every client in a CSV file, skipping ones already in the book
    Import { csv: PathBuf },
    /// Write all clients to a CSV file
    Export { csv: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, outcome) = Config::load(&cli.config)?;
    init_logging(&config)?;
    report_config(&cli.config, outcome);

    let mut logic = start_logic(&config)?;

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Tui => run_ui_mode(logic),
        Mode::Exec { line } => run_exec(&mut logic, &line.join(" ")),
        Mode::Import { csv } => run_import(&mut logic, &csv),
        Mode::Export { csv } => run_export(&logic, &csv),
    }
}

// ============================================================================
// STARTUP
// ============================================================================

/// Log to the configured file; RUST_LOG wins over the config level
fn init_logging(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(())
}

fn report_config(path: &Path, outcome: LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded => info!(path = %path.display(), "Configuration loaded"),
        LoadOutcome::CreatedDefault => {
            warn!(path = %path.display(), "Config file not found, created with defaults")
        }
        LoadOutcome::Malformed(reason) => {
            warn!(path = %path.display(), %reason, "Config file is malformed, using defaults")
        }
    }
}

fn start_logic(config: &Config) -> Result<LogicManager> {
    info!(version = advisor_book::VERSION, "Starting Advisor Book");

    let prefs = config::load_user_prefs(&config.user_prefs_file_path)?;
    let storage = storage_for(prefs.address_book_file_path());

    let book = match storage.read() {
        Ok(Some(book)) => book,
        Ok(None) => {
            info!(path = %storage.file_path().display(), "No data file found, starting with sample clients");
            sample_address_book()?
        }
        Err(e) => {
            warn!(path = %storage.file_path().display(), error = %format!("{:#}", e), "Data file could not be loaded, starting with an empty book");
            AddressBook::new()
        }
    };

    let model = ModelManager::new(book, prefs);
    Ok(LogicManager::new(model, storage))
}

// ============================================================================
// MODES
// ============================================================================

fn run_exec(logic: &mut LogicManager, line: &str) -> Result<()> {
    match logic.execute(line) {
        Ok(result) => {
            println!("{}", result.feedback_to_user);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run_import(logic: &mut LogicManager, csv_path: &Path) -> Result<()> {
    println!("📂 Importing clients from {}", csv_path.display());

    let persons = import_csv(csv_path)?;
    let total = persons.len();
    let mut added = 0;

    for person in persons {
        if logic.model().has_person(&person) {
            warn!(name = %person.name(), "Skipping duplicate client");
            continue;
        }
        logic.model_mut().add_person(person)?;
        added += 1;
    }

    logic.save()?;
    info!(added, skipped = total - added, "CSV import finished");

    println!("✓ Added {} of {} clients", added, total);
    if added < total {
        println!("✓ Duplicates skipped: {}", total - added);
    }
    println!("✓ Saved to {}", logic.address_book_file_path().display());

    Ok(())
}

fn run_export(logic: &LogicManager, csv_path: &Path) -> Result<()> {
    let book = logic.model().address_book();
    export_csv(csv_path, book)?;
    info!(persons = book.len(), path = %csv_path.display(), "CSV export finished");
    println!("✓ Exported {} clients to {}", book.len(), csv_path.display());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(logic: LogicManager) -> Result<()> {
    let mut app = ui::App::new(logic);
    ui::run_ui(&mut app)?;
    info!("UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_logic: LogicManager) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or run single commands: advisor-book exec list");
    std::process::exit(1);
}
