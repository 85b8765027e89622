//! # bam-test-runner
//!
//! Compiles a directory of C++ test sources together with a shared harness
//! into a single `tester` binary, runs it, and removes it afterwards.
//!
//! The compiler command line is built from small argument groups over an
//! immutable [`RunConfig`], so it can be inspected without launching anything:
//!
//! ```
//! use bam_test_runner::{CompileCommand, Profile, RunConfig};
//!
//! let config = RunConfig::new(Profile::Current)
//!     .compiler(["clang++"])
//!     .files(["timer"]);
//! let command = CompileCommand::assemble(&config, &["timer_test.cpp".to_string()]);
//!
//! assert_eq!(command.argv()[0], "clang++");
//! assert!(command.argv().contains(&"-stdlib=libc++".to_string()));
//! ```
//!
//! Running the pass launches the compiler and, only if it succeeds, the
//! test binary:
//!
//! ```no_run
//! use bam_test_runner::{run, RunConfig};
//!
//! let config = RunConfig::default().validate().unwrap();
//! let outcome = run(&config).unwrap();
//! std::process::exit(outcome.exit_code());
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod flags;
pub mod run;

pub use config::{Profile, RunConfig};
pub use error::{Error, Result};
pub use flags::CompileCommand;
pub use run::{run, run_with, Executor, Outcome, ProcessStatus, SystemExecutor};
