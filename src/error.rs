//! Error types for bam-test-runner

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for runner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for runner operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// WalkDir error
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Invalid invocation configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A child process could not be started
    #[error("Failed to launch '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The build artifact could not be removed
    #[error("Failed to remove '{}'", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    /// Create a launch error for the given program
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Error::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a removal error for the given path
    pub fn cleanup(path: &Path, source: std::io::Error) -> Self {
        Error::Cleanup {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn spawn_error_names_program() {
        let err = Error::spawn(
            "no-such-cc",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "Failed to launch 'no-such-cc'");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "not found");
    }

    #[test]
    fn cleanup_error_names_path() {
        let err = Error::cleanup(
            Path::new("work/tester"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("work/tester"));
    }
}
