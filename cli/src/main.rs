//! CLI entrypoint for corethink-mcp
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves JSON-RPC on standard input/output.

mod cli;
mod context;
mod tracing_setup;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use context::{AppContext, check_config};
use corethink_infrastructure::ConfigLoader;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    cli.apply_overrides(&mut config);

    let guard = tracing_setup::init(
        cli.verbose,
        config.logging.level.as_deref(),
        config.logging.trace_file.as_deref(),
    );

    check_config(&config)?;

    // === Dependency Injection ===
    let context = AppContext::build(&config)?;
    info!(
        worker = %context.worker.display(),
        tools = context.tool_count,
        timeout_secs = ?config.worker.timeout_secs,
        "Starting corethink-mcp {}",
        config.server.version
    );

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted");
            on_interrupt.cancel();
        }
    });

    context
        .server
        .serve(tokio::io::stdin(), tokio::io::stdout(), cancel.clone())
        .await?;

    info!("Shutdown complete");
    drop(guard);

    // The blocking stdin reader cannot be interrupted and would hold the
    // runtime open.
    if cancel.is_cancelled() {
        std::process::exit(130);
    }
    Ok(())
}
