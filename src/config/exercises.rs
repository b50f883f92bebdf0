//! Exercise catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Exercise catalog configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExercisesConfig {
    /// Path to the exercise catalog JSON document
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
}

impl ExercisesConfig {
    /// Validate exercise configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalog_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyCatalogPath);
        }
        Ok(())
    }
}

impl Default for ExercisesConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/exercises.json")
}
