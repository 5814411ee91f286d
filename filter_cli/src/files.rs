use std::path::Path;

use filter_core::FilterDocument;
use log::debug;

use crate::errors::CliError;
use crate::ui;

/// Reads and parses a filter definition document.
pub fn load_document(path: &Path) -> Result<FilterDocument, CliError> {
    debug!("Loading filter definitions from '{}'", path.display());

    let source = std::fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to read '{}'", path.display()),
            &e.to_string(),
        );
        CliError::FileError
    })?;

    let document: FilterDocument = serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(
            &format!("Failed to parse '{}'", path.display()),
            &e.to_string(),
        );
        CliError::ParseError
    })?;

    debug!("Loaded {} filter definitions", document.filters.len());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_document() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("filters.json");
        fs::write(
            &path,
            r#"{"filters": [{"name": "title", "type": "string"}]}"#,
        )
        .expect("Failed to write file");

        let document = load_document(&path).unwrap();

        assert_eq!(document.filters.len(), 1);
        assert_eq!(document.filters[0].name, "title");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let result = load_document(&dir.path().join("missing.json"));

        assert_eq!(result.unwrap_err(), CliError::FileError);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("filters.json");
        fs::write(&path, "{ filters: ").expect("Failed to write file");

        let result = load_document(&path);

        assert_eq!(result.unwrap_err(), CliError::ParseError);
    }
}
