use clap::Parser;
use miette::{IntoDiagnostic, Result};
use salesbot::application::access::AccessGate;
use salesbot::application::dialog::ChatId;
use salesbot::application::engine::SalesEngine;
use salesbot::domain::ports::{CatalogGatewayBox, LedgerStoreBox};
use salesbot::infrastructure::csv::catalog::CsvCatalog;
use salesbot::infrastructure::csv::ledger::CsvLedger;
use salesbot::interfaces::console;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Product catalog CSV file (name, unit_price, supplier)
    catalog: PathBuf,

    /// Directory holding sales.csv and prepayments.csv
    #[arg(long, default_value = "ledger")]
    ledger_dir: PathBuf,

    /// Shared access code for the conversation gate
    #[arg(long, env = "ACCESS_CODE")]
    access_code: String,
}

/// The single chat identity of the console transport.
const CHAT: ChatId = 0;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    std::fs::create_dir_all(&cli.ledger_dir).into_diagnostic()?;

    let catalog: CatalogGatewayBox = Box::new(CsvCatalog::new(&cli.catalog));
    let ledger: LedgerStoreBox = Box::new(CsvLedger::new(&cli.ledger_dir));
    let mut engine = SalesEngine::new(catalog, ledger, AccessGate::new(cli.access_code));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        let replies = engine
            .dispatch(CHAT, console::parse_line(&line))
            .await
            .into_diagnostic()?;
        for reply in &replies {
            writeln!(stdout, "{}", console::render(reply)).into_diagnostic()?;
        }
        stdout.flush().into_diagnostic()?;
    }

    Ok(())
}
