//! Discovery of test sources in the working directory

use crate::config::{RunConfig, SOURCE_EXTENSION, TEST_SUFFIX};
use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Resolve the test sources to compile for this configuration
///
/// Explicit names win and are never checked against the filesystem;
/// otherwise the working directory is scanned.
pub fn resolve_files(config: &RunConfig) -> Result<Vec<String>> {
    if config.explicit_files().is_empty() {
        discover(config.work_directory(), config.harness_name())
    } else {
        Ok(prepare_files(config.explicit_files()))
    }
}

/// Turn base names into test source file names
pub fn prepare_files(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{}{}{}", name, TEST_SUFFIX, SOURCE_EXTENSION))
        .collect()
}

/// List the sources directly inside `dir`, excluding `harness`
///
/// A name qualifies when it contains the source extension anywhere. The
/// result is sorted so the compiler sees the same order on every platform.
pub fn discover(dir: &Path, harness: &str) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(file_name) = entry.file_name().to_str() {
            if file_name != harness && file_name.contains(SOURCE_EXTENSION) {
                files.push(file_name.to_string());
            }
        }
    }

    files.sort();
    tracing::debug!(dir = %dir.display(), count = files.len(), "discovered test sources");

    Ok(files)
}
