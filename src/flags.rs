//! Compiler argument groups and their assembly
//!
//! Every group is a pure function of the configuration returning an ordered
//! list of arguments. [`CompileCommand::assemble`] concatenates them in the
//! one order the runner uses:
//!
//! 1. compiler tokens
//! 2. language standard and standard library
//! 3. warnings
//! 4. extra flags, when the profile has them
//! 5. preprocessor defines
//! 6. optimization level
//! 7. output name, harness and test sources

use crate::config::{RunConfig, BINARY_NAME, LLVM_COMPILER};
use crate::discovery;
use crate::error::Result;

/// Language standard and, for the LLVM compiler, its standard library
pub fn standard_flags(config: &RunConfig) -> Vec<String> {
    let mut flags = vec!["-std=c++11".to_string()];

    // Exact textual match only; a path such as /usr/bin/clang++ stays on the default library
    if config.compiler_name() == LLVM_COMPILER {
        flags.push("-stdlib=libc++".to_string());
    }

    flags
}

pub fn warning_flags(config: &RunConfig) -> Vec<String> {
    let mut flags: Vec<String> = ["-Wall", "-W", "-Wextra", "-pedantic-errors"]
        .iter()
        .map(|flag| flag.to_string())
        .collect();

    if config.profile().warnings_as_errors() {
        flags.push("-Werror".to_string());
    }

    flags
}

/// Thread support followed by the user's extra flags, each given a dash
pub fn extra_flags(config: &RunConfig) -> Vec<String> {
    if !config.profile().supports_extra_flags() {
        return Vec::new();
    }

    let mut flags = vec!["-pthread".to_string()];
    flags.extend(config.extra_arg_tokens().iter().map(|arg| format!("-{}", arg)));
    flags
}

/// Defines enabling `std::this_thread::yield` and `sleep_for` on older libstdc++
pub fn defines() -> Vec<String> {
    vec![
        "-D_GLIBCXX_USE_SCHED_YIELD".to_string(),
        "-D_GLIBCXX_USE_NANOSLEEP".to_string(),
    ]
}

pub fn optimization() -> Vec<String> {
    vec!["-O2".to_string()]
}

/// Output flag, binary name, the harness and then the test sources
pub fn output_flags(config: &RunConfig, files: &[String]) -> Vec<String> {
    let mut flags = vec![
        "-o".to_string(),
        BINARY_NAME.to_string(),
        config.harness_name().to_string(),
    ];
    flags.extend(files.iter().cloned());
    flags
}

/// A fully assembled compiler command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileCommand {
    argv: Vec<String>,
    compiler_len: usize,
}

impl CompileCommand {
    /// Assemble the command for the given configuration and test sources
    pub fn assemble(config: &RunConfig, files: &[String]) -> Self {
        let compiler_len = config.compiler_tokens().len();
        let mut argv = config.compiler_tokens().to_vec();
        argv.extend(standard_flags(config));
        argv.extend(warning_flags(config));
        argv.extend(extra_flags(config));
        argv.extend(defines());
        argv.extend(optimization());
        argv.extend(output_flags(config, files));

        CompileCommand { argv, compiler_len }
    }

    /// Resolve the test sources (explicit or discovered) and assemble
    pub fn resolve(config: &RunConfig) -> Result<Self> {
        let files = discovery::resolve_files(config)?;
        Ok(Self::assemble(config, &files))
    }

    /// The full argument vector, program first
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Everything after the compiler tokens
    pub fn options(&self) -> &[String] {
        &self.argv[self.compiler_len..]
    }
}
