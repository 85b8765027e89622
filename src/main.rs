//! bam-test-runner command-line entry point

use anyhow::Context;
use bam_test_runner::{run, Profile, RunConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for failures of the runner itself, as opposed to the compiler or tests
const RUNNER_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "bam-test-runner")]
#[command(about = "Compile the C++ tests in a directory against the harness and run them")]
#[command(version)]
struct Cli {
    /// Compiler to use; several tokens form a command prefix
    #[arg(long, num_args = 1..)]
    compiler: Option<Vec<String>>,

    /// Test base names to compile (`timer` means `timer_test.cpp`); none means all
    #[arg(long, num_args = 1..)]
    files: Vec<String>,

    /// Additional compiler options, given without their leading dash
    #[arg(long = "args", num_args = 1..)]
    args: Vec<String>,

    /// Which flavour of defaults to use
    #[arg(long, value_enum, default_value_t = ProfileArg::Current)]
    profile: ProfileArg,

    /// Harness source holding the test entry point
    #[arg(long)]
    harness: Option<String>,

    /// Directory containing the tests
    #[arg(short = 'C', long, default_value = ".")]
    dir: PathBuf,

    /// Do not print progress lines
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// g++, thread support and extra flags, progress output
    Current,
    /// clang++, warnings as errors, silent
    Legacy,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Current => Profile::Current,
            ProfileArg::Legacy => Profile::Legacy,
        }
    }
}

impl Cli {
    fn into_config(self) -> bam_test_runner::Result<RunConfig> {
        let profile = Profile::from(self.profile);
        let mut config = RunConfig::new(profile)
            .files(self.files)
            .extra_args(self.args)
            .work_dir(self.dir);

        if let Some(compiler) = self.compiler {
            config = config.compiler(compiler);
        }
        if let Some(harness) = self.harness {
            config = config.harness(harness);
        }
        if self.quiet {
            config = config.progress(false);
        }

        config.validate()
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with progress lines or test output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    match execute(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(RUNNER_FAILURE)
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.into_config().context("invalid arguments")?;
    let outcome = run(&config).context("test run failed")?;

    let code = u8::try_from(outcome.exit_code()).unwrap_or(1);
    Ok(ExitCode::from(code))
}
