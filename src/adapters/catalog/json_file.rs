//! JSON file catalog loader.
//!
//! The catalog document is a JSON object keyed by exercise code:
//!
//! ```json
//! {
//!   "EX01": {
//!     "title": "Order Fulfillment",
//!     "description": "...",
//!     "referenceSolution": "...",
//!     "bpmnDiagram": "...",
//!     "learningObjectives": ["..."],
//!     "expertPersona": {"role": "...", "experience": "...", "style": "..."}
//!   }
//! }
//! ```
//!
//! Loaded once at process start; failures abort startup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::{ExerciseCatalog, ExerciseDefinition};

/// Errors raised while loading the exercise catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog file {0} contains no exercises")]
    Empty(String),
}

/// Loads the exercise catalog from a JSON document.
pub fn load_catalog(path: &Path) -> Result<ExerciseCatalog, CatalogError> {
    let display_path = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: display_path.clone(),
        source,
    })?;

    let exercises: HashMap<String, ExerciseDefinition> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: display_path.clone(),
            source,
        })?;

    if exercises.is_empty() {
        return Err(CatalogError::Empty(display_path));
    }

    tracing::info!(count = exercises.len(), path = %display_path, "exercise catalog loaded");

    Ok(ExerciseCatalog::from_definitions(exercises))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_CATALOG: &str = r#"{
        "EX01": {
            "title": "Order Fulfillment",
            "description": "Orders flow from intake to shipping.",
            "referenceSolution": "First we check inventory...",
            "bpmnDiagram": "<bpmn/>",
            "learningObjectives": ["Identify the happy path"],
            "expertPersona": {
                "role": "Operations Manager",
                "experience": "10 years",
                "style": "direct"
            }
        }
    }"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_catalog() {
        let file = write_temp(VALID_CATALOG);
        let catalog = load_catalog(file.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        let exercise = catalog.get("EX01").unwrap();
        assert_eq!(exercise.title, "Order Fulfillment");
        assert_eq!(exercise.expert_persona.role, "Operations Manager");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_catalog(Path::new("/nonexistent/exercises.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_temp("{not json");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn missing_fields_are_a_parse_error() {
        let file = write_temp(r#"{"EX01": {"title": "only a title"}}"#);
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let file = write_temp("{}");
        let result = load_catalog(file.path());
        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }
}
