use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meterbook::audit::{AuditLogger, AuditTrail, EchoAuditSink, MemoryAuditLog};
use meterbook::cli::{run_menu, Console, Session};
use meterbook::config::{MeterPaths, Settings};
use meterbook::display::format_audit_log;
use meterbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "meterbook",
    version,
    about = "Terminal-based utility meter reading journal",
    long_about = "meterbook records monthly heating, hot water and cold water \
                  meter readings. Register, log in, submit one reading per \
                  month for each meter and review the latest values or the \
                  full history. Readings live for the duration of a session; \
                  the audit trail is kept on disk."
)]
struct Cli {
    /// Directory holding config.json and audit.log
    #[arg(long, global = true, env = "METERBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    #[command(alias = "menu")]
    Shell,

    /// Write the default configuration file
    Init,

    /// Show current configuration and paths
    Config,

    /// Print entries from the audit log file
    Audit {
        /// Only show the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let paths = MeterPaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&paths, &settings)?,
        Commands::Init => {
            settings.save(&paths)?;
            println!("Initialized meterbook at: {}", paths.base_dir().display());
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            let logger = AuditLogger::new(paths.audit_log());

            println!("meterbook Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", logger.path().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Audit log to file: {}", settings.audit.enabled);
            println!("  Echo audit:        {}", settings.audit.echo);
            println!("  Audit entries:     {}", logger.entry_count()?);
            println!(
                "  Password hashing:  argon2id m={} t={} p={}",
                settings.password_hashing.memory_cost,
                settings.password_hashing.time_cost,
                settings.password_hashing.parallelism
            );
        }
        Commands::Audit { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            let entries = match limit {
                Some(count) => logger.read_recent(count)?,
                None => logger.read_all()?,
            };
            println!("{}", format_audit_log(&entries).trim_end());
        }
    }

    Ok(())
}

/// Initialize logging with tracing; logs go to stderr
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "meterbook=debug" } else { "meterbook=warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Pick the audit trail described by the settings
fn open_audit_trail(paths: &MeterPaths, settings: &Settings) -> Box<dyn AuditTrail> {
    match (settings.audit.enabled, settings.audit.echo) {
        (true, false) => Box::new(AuditLogger::new(paths.audit_log())),
        (true, true) => Box::new(EchoAuditSink::new(AuditLogger::new(paths.audit_log()))),
        (false, false) => Box::new(MemoryAuditLog::new()),
        (false, true) => Box::new(EchoAuditSink::new(MemoryAuditLog::new())),
    }
}

fn run_shell(paths: &MeterPaths, settings: &Settings) -> Result<()> {
    let storage = Storage::new();
    let audit = open_audit_trail(paths, settings);
    let mut session = Session::new(&storage, settings.password_hashing.clone(), &*audit);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut console =
        Console::new(stdin.lock(), io::stdout().lock()).with_hidden_secrets(interactive);

    console.say("meterbook - utility meter readings")?;
    run_menu(&mut session, &mut console).context("Interactive session failed")?;

    Ok(())
}
