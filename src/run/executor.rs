//! Child process execution and artifact removal

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command as StdCommand, ExitStatus};

/// Exit status of a finished child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStatus {
    /// Exit code, or `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ProcessStatus {
    pub fn from_code(code: i32) -> Self {
        ProcessStatus { code: Some(code) }
    }

    /// A process that ended without an exit code
    pub fn terminated() -> Self {
        ProcessStatus { code: None }
    }

    /// Only an exit code of exactly zero counts as success
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessStatus {
    fn from(status: ExitStatus) -> Self {
        ProcessStatus {
            code: status.code(),
        }
    }
}

/// Launches processes and removes files on behalf of the runner
pub trait Executor {
    /// Run `argv[0]` with the remaining arguments inside `dir` and wait for it
    fn run(&mut self, argv: &[String], dir: &Path) -> Result<ProcessStatus>;

    /// Remove a file or directory tree; a missing path is not an error
    fn remove(&mut self, path: &Path) -> Result<()>;
}

/// Executor backed by real processes and the real filesystem
///
/// Children inherit stdin, stdout and stderr, so compiler diagnostics and
/// test output reach the console directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&mut self, argv: &[String], dir: &Path) -> Result<ProcessStatus> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| Error::config("empty command line"))?;

        let status = StdCommand::new(program)
            .args(args)
            .current_dir(dir)
            .status()
            .map_err(|e| Error::spawn(program.as_str(), e))?;

        Ok(status.into())
    }

    fn remove(&mut self, path: &Path) -> Result<()> {
        let removed = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match removed {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::cleanup(path, e)),
        }
    }
}
