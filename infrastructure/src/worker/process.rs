//! Child-process implementation of the unit-of-work port.

use super::locator::WorkerCommand;
use async_trait::async_trait;
use corethink_application::ports::unit_of_work::{
    InputChannel, InputDelivery, LaunchError, OutputChannel, UnitOfWork, WorkLauncher,
    WorkerInvocation,
};
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::{Child, ChildStdin, Command};
use tracing::{debug, trace};

/// Starts one worker process per dispatch.
pub struct ProcessLauncher {
    command: WorkerCommand,
    working_dir: Option<PathBuf>,
}

impl ProcessLauncher {
    pub fn new(command: WorkerCommand) -> Self {
        Self {
            command,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn command(&self) -> &WorkerCommand {
        &self.command
    }
}

#[async_trait]
impl WorkLauncher for ProcessLauncher {
    async fn start(&self, invocation: &WorkerInvocation) -> Result<Box<dyn UnitOfWork>, LaunchError> {
        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.leading_args)
            .args(invocation.command_args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match invocation.delivery {
            InputDelivery::Stdin => cmd.stdin(Stdio::piped()),
            InputDelivery::Arguments => cmd.stdin(Stdio::null()),
        };

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        // Linux: request kernel to send SIGTERM to the worker when we die.
        // kill_on_drop does not cover SIGKILL or OOM kills.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        trace!(
            "Spawning worker: {} --tool {}",
            self.command.display(),
            invocation.worker_tool
        );
        let mut child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            program: self.command.program.display().to_string(),
            source,
        })?;
        debug!(pid = ?child.id(), tool = %invocation.worker_tool, "Worker started");

        let outputs = match (child.stdout.take(), child.stderr.take()) {
            (Some(stdout), Some(stderr)) => {
                Some((Box::new(stdout) as OutputChannel, Box::new(stderr) as OutputChannel))
            }
            _ => None,
        };

        Ok(Box::new(ProcessUnit {
            stdin: child.stdin.take(),
            outputs,
            child,
        }))
    }
}

struct ProcessUnit {
    child: Child,
    stdin: Option<ChildStdin>,
    outputs: Option<(OutputChannel, OutputChannel)>,
}

#[async_trait]
impl UnitOfWork for ProcessUnit {
    fn take_input(&mut self) -> Option<InputChannel> {
        self.stdin
            .take()
            .map(|stdin| Box::new(stdin) as InputChannel)
    }

    fn take_outputs(&mut self) -> Option<(OutputChannel, OutputChannel)> {
        self.outputs.take()
    }

    async fn wait(&mut self) -> io::Result<i32> {
        let status = self.child.wait().await?;
        Ok(exit_code(status))
    }

    async fn terminate(&mut self) -> io::Result<()> {
        self.child.kill().await
    }
}

/// Exit code of a finished process; signal deaths map to `128 + signal`.
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}
