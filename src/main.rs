//! Estate Pilot — workbench entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Build workbench + assistant
//!   5. Print status and exit

use tracing::info;

use estate_pilot::{chat::Assistant, config, error::AppError, logger, workbench::Workbench};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;

    logger::init(&config.log_level)?;

    info!(
        app_name = %config.app_name,
        log_level = %config.log_level,
        llm_provider = %config.llm.provider,
        "config loaded"
    );

    let workbench = Workbench::new(&config)?;
    let _assistant = Assistant::new(&config)?;

    let (banks, documents, modules) = {
        let state = workbench.state();
        let state = state.lock().await;
        (state.banks.len(), state.documents.len(), state.modules.len())
    };

    info!(banks, documents, modules, "session state seeded");
    println!("✓ Workbench initialized: {banks} institutions, {modules} modules");

    Ok(())
}
