//! The compile, run and clean-up pass

use crate::config::RunConfig;
use crate::error::Result;
use crate::flags::CompileCommand;
use crate::run::executor::{Executor, ProcessStatus};

/// How a build-and-run pass ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The compiler exited non-zero; nothing was run or removed
    CompileFailed { status: ProcessStatus },
    /// The test binary ran and was removed afterwards
    Ran { status: ProcessStatus },
}

impl Outcome {
    /// Status of the last process the pass launched
    pub fn status(&self) -> ProcessStatus {
        match self {
            Outcome::CompileFailed { status } | Outcome::Ran { status } => *status,
        }
    }

    /// Whether the tests were built, ran and exited zero
    pub fn success(&self) -> bool {
        matches!(self, Outcome::Ran { status } if status.success())
    }

    /// Exit code for the runner itself; signal terminations map to 1
    pub fn exit_code(&self) -> i32 {
        self.status().code.unwrap_or(1)
    }
}

/// Run the pass with an already assembled command
pub fn run_command(
    config: &RunConfig,
    command: &CompileCommand,
    executor: &mut dyn Executor,
) -> Result<Outcome> {
    let dir = config.work_directory();

    if config.prints_progress() {
        println!("compiling ...");
        println!("using {}", config.compiler_tokens().join(" "));
        println!("{}", command.argv().join(" "));
    }
    tracing::debug!(argv = ?command.argv(), dir = %dir.display(), "invoking compiler");

    let compiled = executor.run(command.argv(), dir)?;
    if !compiled.success() {
        tracing::warn!(code = ?compiled.code, "compilation failed");
        return Ok(Outcome::CompileFailed { status: compiled });
    }

    if config.prints_progress() {
        println!("compiled successfully ...");
        println!("running tests now ...");
    }

    // Absolute, so a relative working directory is not applied twice once the child has moved into it
    let binary = std::path::absolute(config.binary_path())?;
    tracing::info!(binary = %binary.display(), "running tests");
    let ran = executor.run(&[binary.to_string_lossy().into_owned()], dir);

    // The binary goes away even if it could not be launched
    executor.remove(&binary)?;

    let status = ran?;
    tracing::info!(code = ?status.code, "tests finished");
    Ok(Outcome::Ran { status })
}

/// Resolve the sources, assemble the command and run the pass
pub fn run_with(config: &RunConfig, executor: &mut dyn Executor) -> Result<Outcome> {
    let command = CompileCommand::resolve(config)?;
    run_command(config, &command, executor)
}
