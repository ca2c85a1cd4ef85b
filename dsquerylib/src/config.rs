//! Where the datastore lives when no directory is given explicitly.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the default output directory.
pub const OUTPUT_DIRECTORY_ENV: &str = "DSQUERY_OUTPUT_DIR";

/// Output directory used when nothing else is configured.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";

/// Process configuration for datastore queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Directory holding the datastore files
    pub output_directory: PathBuf,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIRECTORY)
    }
}

impl QueryConfig {
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// Read `DSQUERY_OUTPUT_DIR`, falling back to [`DEFAULT_OUTPUT_DIRECTORY`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(PathBuf::from))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<PathBuf>) -> Self {
        match lookup(OUTPUT_DIRECTORY_ENV) {
            Some(dir) if !dir.as_os_str().is_empty() => Self::new(dir),
            _ => Self::default(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }
}
