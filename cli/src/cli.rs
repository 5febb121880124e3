//! CLI argument definitions

use clap::Parser;
use corethink_application::InputDelivery;
use corethink_infrastructure::FileConfig;
use std::path::PathBuf;

/// CLI arguments for corethink-mcp
#[derive(Parser, Debug, Default)]
#[command(name = "corethink-mcp")]
#[command(author, version, about = "MCP server for CoreThink reasoning tools")]
#[command(long_about = r#"
Serves the CoreThink reasoning tools over JSON-RPC on standard input/output.
Every tool call runs the worker once; its output becomes the tool result.

Configuration files are loaded from (in priority order):
1. CORETHINK_* environment variables (e.g. CORETHINK_WORKER__TIMEOUT_SECS=30)
2. --config <path>     Explicit config file
3. ./corethink.toml    Project-level config
4. ~/.config/corethink-mcp/config.toml   Global config

Example:
  corethink-mcp
  corethink-mcp --worker ./worker/cli.py --interpreter python3 --timeout-secs 60
"#)]
pub struct Cli {
    /// Worker to try before the configured candidates
    #[arg(long, value_name = "PATH")]
    pub worker: Option<String>,

    /// Interpreter used to run script workers
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,

    /// Kill a worker that runs longer than this
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Send tool arguments on the worker's standard input instead of --args
    #[arg(long)]
    pub stdin_input: bool,

    /// Append dispatch events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub dispatch_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Command-line flags win over every configuration source.
    pub fn apply_overrides(&self, config: &mut FileConfig) {
        if let Some(worker) = &self.worker {
            config.worker.candidates.insert(0, worker.clone());
        }
        if let Some(interpreter) = &self.interpreter {
            config.worker.interpreter = interpreter.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.worker.timeout_secs = Some(secs);
        }
        if self.stdin_input {
            config.worker.input = InputDelivery::Stdin;
        }
        if let Some(path) = &self.dispatch_log {
            config.logging.dispatch_log = Some(path.clone());
        }
    }
}
