use clap::Parser;
use kiosk::application::engine::PaymentEngine;
use kiosk::application::session::OrderSession;
use kiosk::application::settings::SettingsOwner;
use kiosk::config::KioskConfig;
use kiosk::domain::catalog::Catalog;
use kiosk::interfaces::csv::menu_reader::MenuReader;
use kiosk::interfaces::csv::session_reader::SessionReader;
use kiosk::interfaces::receipt::{ReceiptFormat, write_receipt};
use kiosk::interfaces::script::ScriptRunner;
use kiosk::interfaces::text::TextRenderer;
use kiosk::logger;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session script CSV file (`action, item, method`)
    input: PathBuf,

    /// Kiosk configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Menu CSV file replacing the built-in menu
    #[arg(long)]
    menu: Option<PathBuf>,

    /// Output format for the final cart
    #[arg(long, value_enum, default_value_t = ReceiptFormat::Csv)]
    format: ReceiptFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => KioskConfig::load(path).into_diagnostic()?,
        None => KioskConfig::default(),
    };

    let catalog = match &cli.menu {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            MenuReader::new(file).catalog().into_diagnostic()?
        }
        None => Catalog::builtin(),
    };
    info!(items = catalog.items().len(), "menu loaded");

    let settings = SettingsOwner::new(config.accessibility);
    let renderer = TextRenderer::new(settings.view());

    let mut engine = PaymentEngine::new(config.payment.gateway());
    if let Some(timeout) = config.payment.timeout() {
        engine = engine.with_timeout(timeout);
    }
    let mut session = OrderSession::new(Arc::new(catalog), engine);

    // Replay the session
    let file = File::open(&cli.input).into_diagnostic()?;
    let steps = SessionReader::new(file).steps();
    let skipped = ScriptRunner::new(&mut session, &settings).run(steps).await;
    if skipped > 0 {
        info!(skipped, "session finished with skipped steps");
    }

    let stdout = io::stdout();
    write_receipt(stdout.lock(), &session, cli.format, &renderer).into_diagnostic()?;

    Ok(())
}
