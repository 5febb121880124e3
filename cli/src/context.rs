//! Application wiring.
//!
//! Everything the server needs is built once here from the final
//! configuration and handed to `main` as one value.

use anyhow::{Context, Result, bail};
use corethink_application::{DispatchBridge, DispatchLogger, NoDispatchLogger, ToolCallRouter};
use corethink_infrastructure::{
    FileConfig, FileResourceReader, JsonlDispatchLogger, McpServer, ProcessLauncher, ServerInfo,
    WorkerCommand, WorkerLocator, build_registry,
};
use std::sync::Arc;
use tracing::{info, warn};

pub struct AppContext {
    pub server: McpServer,
    pub worker: WorkerCommand,
    pub tool_count: usize,
}

impl AppContext {
    pub fn build(config: &FileConfig) -> Result<Self> {
        let worker = WorkerLocator::new(&config.worker.interpreter)
            .locate(&config.worker.candidates)
            .context("Could not locate the reasoning worker")?;

        let registry = build_registry(&config.tools).context("Invalid tool catalog")?;
        let tool_count = registry.len();
        let registry = Arc::new(registry);

        let dispatch_logger: Arc<dyn DispatchLogger> = match &config.logging.dispatch_log {
            Some(path) => match JsonlDispatchLogger::new(path) {
                Some(logger) => {
                    info!("Dispatch log: {}", logger.path().display());
                    Arc::new(logger)
                }
                None => Arc::new(NoDispatchLogger),
            },
            None => Arc::new(NoDispatchLogger),
        };

        let launcher = ProcessLauncher::new(worker.clone())
            .with_working_dir(config.worker.working_dir.clone());
        let bridge = DispatchBridge::new(Arc::new(launcher), config.worker.dispatch_params())
            .with_dispatch_logger(Arc::clone(&dispatch_logger));
        let router = ToolCallRouter::new(registry, bridge).with_dispatch_logger(dispatch_logger);

        let server = McpServer::new(
            ServerInfo::new(&config.server.name, &config.server.version),
            router,
            Arc::new(FileResourceReader::new(&config.resources)),
        );

        Ok(Self {
            server,
            worker,
            tool_count,
        })
    }
}

/// Log warnings; fail with every error at once.
pub fn check_config(config: &FileConfig) -> Result<()> {
    let (errors, warnings): (Vec<_>, Vec<_>) =
        config.validate().into_iter().partition(|issue| issue.is_error());

    for issue in &warnings {
        warn!("Config: {}", issue);
    }

    if !errors.is_empty() {
        let listed: Vec<String> = errors.iter().map(|issue| format!("  - {}", issue)).collect();
        bail!("Invalid configuration:\n{}", listed.join("\n"));
    }
    Ok(())
}
