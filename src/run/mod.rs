//! Build-and-run execution module

pub mod executor;
pub mod pipeline;

// Re-export public types
pub use executor::{Executor, ProcessStatus, SystemExecutor};
pub use pipeline::{run_command, run_with, Outcome};

use crate::config::RunConfig;
use crate::error::Result;

/// Compile and run the tests described by `config` using real processes
pub fn run(config: &RunConfig) -> Result<Outcome> {
    run_with(config, &mut SystemExecutor)
}
