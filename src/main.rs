use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use configuration::{Config, LedgerBackend, LedgerSettings};
use core_types::{Instrument, Outcome, Side, TradeDraft};
use ledger::{CsvLedger, Journal, MemoryLedger};
use rust_decimal::Decimal;
use std::net::IpAddr;
use std::path::PathBuf;
use web_server::DynStore;

mod render;

/// The main entry point for the trade journal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    configuration::init_logging(&config.logging);
    tracing::debug!(
        backend = %config.ledger.backend,
        ledger = %config.ledger.path.display(),
        "Configuration loaded."
    );

    // Execute the appropriate command
    match cli.command {
        Commands::Add(args) => handle_add(args, &config.ledger),
        Commands::Log(args) => handle_log(args, &config.ledger),
        Commands::Summary(args) => handle_summary(args, &config.ledger),
        Commands::Serve(args) => handle_serve(args, config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Log trades by hand and review the statistics of your journal.
#[derive(Parser)]
#[command(name = "journal", author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to read instead of ./journal.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Ledger file, overriding the configured path.
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// Ledger backend, overriding the configured one.
    #[arg(long, global = true, value_enum)]
    backend: Option<LedgerBackend>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.ledger {
            config.ledger.path = path.clone();
        }
        if let Some(backend) = self.backend {
            config.ledger.backend = backend;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Record a closed trade.
    Add(AddArgs),
    /// Show the trade log, newest first.
    Log(LogArgs),
    /// Show total P&L, win rate, average win/loss and the win/loss split.
    Summary(SummaryArgs),
    /// Serve the journal as a JSON API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct AddArgs {
    /// Crypto, Stocks, Forex or Other.
    #[arg(long)]
    instrument: Instrument,

    /// Free-text name of the trade (e.g. "BTC range breakout").
    #[arg(long, default_value = "")]
    name: String,

    /// Long or Short.
    #[arg(long)]
    side: Side,

    #[arg(long)]
    entry: Decimal,

    #[arg(long)]
    exit: Decimal,

    /// Take-profit level. Recorded only.
    #[arg(long, default_value_t = Decimal::ZERO)]
    tp: Decimal,

    /// Stop-loss level. Recorded only.
    #[arg(long, default_value_t = Decimal::ZERO)]
    sl: Decimal,

    /// Reason for entry.
    #[arg(long, default_value = "")]
    rationale: String,

    #[arg(long, default_value = "")]
    strategy: String,

    /// "TP hit", "SL hit" or "Closed manually".
    #[arg(long)]
    outcome: Outcome,

    /// Why it happened.
    #[arg(long, default_value = "")]
    narrative: String,

    /// Trade date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl From<AddArgs> for TradeDraft {
    fn from(args: AddArgs) -> Self {
        TradeDraft {
            date: args.date,
            instrument: args.instrument,
            name: args.name,
            side: args.side,
            entry_price: args.entry,
            exit_price: args.exit,
            take_profit: args.tp,
            stop_loss: args.sl,
            rationale: args.rationale,
            strategy_name: args.strategy,
            outcome: args.outcome,
            narrative: args.narrative,
        }
    }
}

#[derive(Parser)]
struct LogArgs {
    /// Show only the newest N trades.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Parser)]
struct SummaryArgs {
    /// Print the full summary, including the cumulative P&L curve, as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ServeArgs {
    #[arg(long)]
    host: Option<IpAddr>,

    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Opens the configured ledger backend.
fn open_store(settings: &LedgerSettings) -> DynStore {
    match settings.backend {
        LedgerBackend::Csv => Box::new(CsvLedger::new(&settings.path)),
        LedgerBackend::Memory => Box::new(MemoryLedger::new()),
    }
}

fn handle_add(args: AddArgs, settings: &LedgerSettings) -> anyhow::Result<()> {
    if settings.backend == LedgerBackend::Memory {
        tracing::warn!("The memory backend keeps nothing after exit; this trade will not be saved.");
    }

    let mut journal = Journal::new(open_store(settings));
    let today = Local::now().date_naive();
    let record = journal
        .add_trade(TradeDraft::from(args), today)
        .context("Failed to record the trade")?;

    println!(
        "Trade added: {} {} on {} | P&L ${:.2} ({:.2}%)",
        record.side, record.name, record.date, record.pnl_absolute, record.pnl_percent
    );
    Ok(())
}

fn handle_log(args: LogArgs, settings: &LedgerSettings) -> anyhow::Result<()> {
    let journal = Journal::new(open_store(settings));
    let mut trades = journal.recent_trades().context("Failed to read the ledger")?;

    if trades.is_empty() {
        println!("No trades logged yet. Add one with `journal add`.");
        return Ok(());
    }
    if let Some(limit) = args.limit {
        trades.truncate(limit);
    }

    println!("{}", render::trade_log_table(&trades));
    Ok(())
}

fn handle_summary(args: SummaryArgs, settings: &LedgerSettings) -> anyhow::Result<()> {
    let journal = Journal::new(open_store(settings));
    let summary = journal.summary().context("Failed to read the ledger")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.statistics.total_trades == 0 {
        println!("No trades logged yet. Add one with `journal add`.");
        return Ok(());
    }

    println!("{}", render::summary_table(&summary.statistics));
    println!();
    println!("Win vs Loss Distribution");
    println!("{}", render::distribution_table(&summary.distribution));
    Ok(())
}

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!(
        backend = %config.ledger.backend,
        ledger = %config.ledger.path.display(),
        "Starting journal server."
    );
    web_server::run_server(config.server.socket_addr(), open_store(&config.ledger)).await
}
