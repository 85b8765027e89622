//! Invocation configuration and the fixed names the runner relies on

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the test binary produced in the working directory
pub const BINARY_NAME: &str = "tester";

/// Default harness source holding the test entry point
pub const DEFAULT_HARNESS: &str = "test_runner.cpp";

/// Extension every test source carries
pub const SOURCE_EXTENSION: &str = ".cpp";

/// Suffix appended to explicit test names before the extension
pub const TEST_SUFFIX: &str = "_test";

/// The LLVM-family compiler; selecting it exactly enables libc++
pub const LLVM_COMPILER: &str = "clang++";

/// The GCC-family compiler
pub const GCC_COMPILER: &str = "g++";

/// Behavioural profile, covering the two historical flavours of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// GCC by default, thread support plus extra flags, progress output
    #[default]
    Current,
    /// Clang by default, warnings as errors, no extra flags, silent
    Legacy,
}

impl Profile {
    /// Compiler used when none is given on the command line
    pub fn default_compiler(self) -> &'static str {
        match self {
            Profile::Current => GCC_COMPILER,
            Profile::Legacy => LLVM_COMPILER,
        }
    }

    /// Whether every warning is escalated to an error
    pub fn warnings_as_errors(self) -> bool {
        matches!(self, Profile::Legacy)
    }

    /// Whether the extra-flags group (thread support plus `--args`) exists
    pub fn supports_extra_flags(self) -> bool {
        matches!(self, Profile::Current)
    }

    /// Whether progress lines are printed by default
    pub fn prints_progress(self) -> bool {
        matches!(self, Profile::Current)
    }
}

/// Configuration for a single build-and-run pass
///
/// Built once through the consuming setters below and never mutated after
/// [`RunConfig::validate`] has accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    profile: Profile,
    compiler: Vec<String>,
    files: Vec<String>,
    extra_args: Vec<String>,
    work_dir: PathBuf,
    harness: String,
    progress: bool,
}

impl RunConfig {
    /// Create a configuration with the defaults of the given profile
    pub fn new(profile: Profile) -> Self {
        RunConfig {
            profile,
            compiler: vec![profile.default_compiler().to_string()],
            files: Vec::new(),
            extra_args: Vec::new(),
            work_dir: PathBuf::from("."),
            harness: DEFAULT_HARNESS.to_string(),
            progress: profile.prints_progress(),
        }
    }

    /// Set the compiler tokens; the first one is the program to launch
    pub fn compiler<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.compiler = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Set explicit test base names; an empty list means discovery
    pub fn files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set extra compiler flags, given without their leading dash
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the directory tests are discovered, compiled and run in
    pub fn work_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.work_dir = dir.into();
        self
    }

    /// Override the harness file name
    pub fn harness(mut self, name: impl Into<String>) -> Self {
        self.harness = name.into();
        self
    }

    /// Enable or disable progress lines on stdout
    pub fn progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Check the configuration and hand it back unchanged if it is usable
    pub fn validate(self) -> Result<Self> {
        if self.compiler.is_empty() {
            return Err(Error::config("no compiler given"));
        }
        if self.compiler.iter().any(|token| token.is_empty()) {
            return Err(Error::config("compiler tokens must not be empty"));
        }
        if self.harness.is_empty() {
            return Err(Error::config("harness file name must not be empty"));
        }
        if !self.extra_args.is_empty() && !self.profile.supports_extra_flags() {
            return Err(Error::config(format!(
                "extra compiler flags are not supported by the {:?} profile",
                self.profile
            )));
        }
        Ok(self)
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Compiler tokens as given
    pub fn compiler_tokens(&self) -> &[String] {
        &self.compiler
    }

    /// Compiler tokens joined without separator, used for toolchain checks
    pub fn compiler_name(&self) -> String {
        self.compiler.concat()
    }

    pub fn explicit_files(&self) -> &[String] {
        &self.files
    }

    pub fn extra_arg_tokens(&self) -> &[String] {
        &self.extra_args
    }

    pub fn work_directory(&self) -> &Path {
        &self.work_dir
    }

    pub fn harness_name(&self) -> &str {
        &self.harness
    }

    pub fn prints_progress(&self) -> bool {
        self.progress
    }

    /// Path of the test binary inside the working directory
    pub fn binary_path(&self) -> PathBuf {
        self.work_dir.join(BINARY_NAME)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
