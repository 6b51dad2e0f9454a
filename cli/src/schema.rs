//! Schema documents
//!
//! A schema document lists entities under an `entities` key, in JSON or TOML:
//!
//! ```json
//! { "entities": [ { "name": "User", "fields": [ { "name": "id", "typeName": "Long" } ] } ] }
//! ```
//!
//! Each entity needs a `name` or a `tableName`; the missing one is derived
//! from the other.

use ddlgen_types::Entity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Entities read from one document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl SchemaDocument {
    /// Load a document, picking the format from the file extension
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SchemaError::Io(path.into(), e))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| SchemaError::Json(path.into(), e))
            }
            Some("toml") => {
                toml::from_str(&content).map_err(|e| SchemaError::Toml(path.into(), e))
            }
            _ => Err(SchemaError::UnsupportedFormat(path.into())),
        }
    }

    /// Load and concatenate several documents, in order
    pub fn load_all(paths: &[PathBuf]) -> Result<Vec<Entity>, SchemaError> {
        let mut entities = Vec::new();
        for path in paths {
            let document = Self::load(path)?;
            tracing::debug!(
                path = %path.display(),
                entities = document.entities.len(),
                "loaded schema document"
            );
            entities.extend(document.entities);
        }
        Ok(entities)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("unsupported schema format {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn json_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        std::fs::write(
            &path,
            r#"{ "entities": [ { "name": "UserAccount", "fields": [
                { "name": "id", "typeName": "Long", "isPrimaryKey": true, "isNullable": false }
            ] } ] }"#,
        )
        .unwrap();

        let doc = SchemaDocument::load(&path).unwrap();
        assert_eq!(doc.entities.len(), 1);
        assert_eq!(doc.entities[0].table_name, "user_account");
        assert!(doc.entities[0].fields[0].primary_key);
        assert!(!doc.entities[0].fields[0].nullable);
    }

    #[test]
    fn toml_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.toml");
        std::fs::write(
            &path,
            r#"
            [[entities]]
            name = "Order"
            tableName = "orders"

            [[entities.fields]]
            name = "total"
            typeName = "BigDecimal"
            precision = 12
            scale = 2
        "#,
        )
        .unwrap();

        let doc = SchemaDocument::load(&path).unwrap();
        let field = &doc.entities[0].fields[0];
        assert_eq!(doc.entities[0].table_name, "orders");
        assert_eq!((field.precision, field.scale), (12, 2));
        assert!(field.nullable);
    }

    #[test]
    fn load_all_keeps_file_order() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.json");
        let b = temp.path().join("b.json");
        std::fs::write(&a, r#"{ "entities": [ { "name": "Beta" } ] }"#).unwrap();
        std::fs::write(&b, r#"{ "entities": [ { "name": "Alpha" } ] }"#).unwrap();

        let entities = SchemaDocument::load_all(&[a, b]).unwrap();
        let names: Vec<_> = entities.iter().map(|e| e.table_name.as_ref()).collect();
        assert_eq!(names, ["beta", "alpha"]);
    }

    #[test]
    fn unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.yaml");
        std::fs::write(&path, "entities: []").unwrap();

        let err = SchemaDocument::load(&path).unwrap_err();
        assert!(matches!(err, SchemaError::UnsupportedFormat(_)));
    }

    #[test]
    fn malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        std::fs::write(&path, "{ \"entities\": [ { } ] }").unwrap();

        let err = SchemaDocument::load(&path).unwrap_err();
        assert!(matches!(err, SchemaError::Json(..)));
    }
}
