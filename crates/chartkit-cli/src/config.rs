//! Dataset schema loading.
//!
//! A schema file is TOML with any subset of the [`DatasetSchema`] keys:
//!
//! ```toml
//! category_field = "Make"
//! value_field = "Cost"
//! placeholders = ["-", "n/a"]
//! ```
//!
//! Missing keys keep their defaults; unknown keys are rejected.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chartkit_model::DatasetSchema;

/// Parses and validates schema TOML.
///
/// # Errors
///
/// Fails on TOML syntax errors, unknown keys and blank column names.
pub fn parse_schema(content: &str) -> Result<DatasetSchema> {
    let schema: DatasetSchema = toml::from_str(content).context("parse schema")?;
    schema.validate().context("validate schema")?;
    Ok(schema)
}

/// Loads the schema at `path`, or the built-in default when `path` is `None`.
///
/// # Errors
///
/// Fails when the file cannot be read or does not hold a valid schema.
pub fn load_schema(path: Option<&Path>) -> Result<DatasetSchema> {
    let Some(path) = path else {
        tracing::debug!("no schema file given, using defaults");
        return Ok(DatasetSchema::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read schema file {}", path.display()))?;
    let schema =
        parse_schema(&content).with_context(|| format!("load schema {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded dataset schema");
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_without_path() {
        assert_eq!(load_schema(None).unwrap(), DatasetSchema::default());
    }

    #[test]
    fn test_partial_override() {
        let schema = parse_schema("category_field = \"Make\"\nplaceholders = [\"-\", \"n/a\"]\n")
            .unwrap();
        assert_eq!(schema.category_field, "Make");
        assert_eq!(schema.time_field, "Year");
        assert_eq!(schema.placeholders, vec!["-".to_string(), "n/a".to_string()]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_schema("colour_field = \"Colour\"\n").is_err());
    }

    #[test]
    fn test_blank_field_rejected() {
        let error = parse_schema("value_field = \"  \"\n").unwrap_err();
        assert!(format!("{error:#}").contains("validate schema"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "secondary_fallback_field = \"Body\"").unwrap();
        let schema = load_schema(Some(file.path())).unwrap();
        assert_eq!(schema.secondary_fallback_field.as_deref(), Some("Body"));
    }

    #[test]
    fn test_missing_file() {
        let error = load_schema(Some(Path::new("/nonexistent/schema.toml"))).unwrap_err();
        assert!(error.to_string().contains("read schema file"));
    }
}
