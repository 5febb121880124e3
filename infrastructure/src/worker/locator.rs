//! Worker discovery
//!
//! Resolves the first usable candidate from an ordered list. Script
//! candidates (anything with a path separator or a `.py` suffix) run through
//! the configured interpreter; bare names are looked up on `PATH`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("Worker not found. Searched: {}", searched.join(", "))]
    NotFound { searched: Vec<String> },
}

/// A resolved worker: program plus the arguments that precede the
/// invocation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCommand {
    pub program: PathBuf,
    pub leading_args: Vec<String>,
}

impl WorkerCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    pub fn with_leading_arg(mut self, arg: impl Into<String>) -> Self {
        self.leading_args.push(arg.into());
        self
    }

    /// Human-readable command line, for logs.
    pub fn display(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.leading_args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct WorkerLocator {
    interpreter: String,
    base_dirs: Vec<PathBuf>,
}

impl WorkerLocator {
    /// Relative script candidates are tried against the current directory,
    /// then the directory of the running executable.
    pub fn new(interpreter: impl Into<String>) -> Self {
        let mut base_dirs = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            base_dirs.push(cwd);
        }
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            base_dirs.push(dir);
        }
        Self {
            interpreter: interpreter.into(),
            base_dirs,
        }
    }

    pub fn with_base_dirs(mut self, base_dirs: Vec<PathBuf>) -> Self {
        self.base_dirs = base_dirs;
        self
    }

    pub fn locate(&self, candidates: &[String]) -> Result<WorkerCommand, LocateError> {
        let mut searched = Vec::new();

        for candidate in candidates {
            if is_script(candidate) {
                for path in self.script_paths(candidate) {
                    if path.is_file() {
                        debug!("Found worker script: {}", path.display());
                        return Ok(WorkerCommand::new(&self.interpreter)
                            .with_leading_arg(path.display().to_string()));
                    }
                    searched.push(path.display().to_string());
                }
            } else {
                match which::which(candidate) {
                    Ok(path) => {
                        debug!("Found worker on PATH: {}", path.display());
                        return Ok(WorkerCommand::new(path));
                    }
                    Err(_) => searched.push(format!("{} (PATH)", candidate)),
                }
            }
        }

        Err(LocateError::NotFound { searched })
    }

    fn script_paths(&self, candidate: &str) -> Vec<PathBuf> {
        let path = Path::new(candidate);
        if path.is_absolute() {
            vec![path.to_path_buf()]
        } else {
            self.base_dirs.iter().map(|dir| dir.join(path)).collect()
        }
    }
}

fn is_script(candidate: &str) -> bool {
    candidate.contains('/') || candidate.contains(std::path::MAIN_SEPARATOR) || candidate.ends_with(".py")
}
