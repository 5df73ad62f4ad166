//! Validates JSON examples in documentation against the published schema.

use std::path::Path;

use jsonschema::JSONSchema;
use jsonschema::paths::JSONPointer;
use serde_json::Value;
use tracing::debug;

use crate::error::{CheckError, Result};
use crate::region::Region;

/// Parses the region as JSON and validates it against the schema at
/// `schema_path`. The schema is re-read on every call.
pub async fn verify_json(region: &mut dyn Region, schema_path: &Path) -> Result<()> {
    region.name("verify JSON to conform to JSON-Schema");
    let schema = load_schema(schema_path).await?;
    validate_document(&schema, region.text())
}

pub async fn load_schema(path: &Path) -> Result<Value> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CheckError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|source| CheckError::SchemaParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn validate_document(schema: &Value, text: &str) -> Result<()> {
    let document: Value = serde_json::from_str(text).map_err(CheckError::DocumentParse)?;
    let compiled =
        JSONSchema::compile(schema).map_err(|err| CheckError::SchemaCompile(err.to_string()))?;
    if let Err(errors) = compiled.validate(&document) {
        let violations: Vec<String> = errors
            .map(|err| format!("{}: {}", format_pointer(&err.instance_path), err))
            .collect();
        debug!(violations = violations.len(), "document violates schema");
        return Err(CheckError::SchemaViolation(violations));
    }
    Ok(())
}

fn format_pointer(pointer: &JSONPointer) -> String {
    let text = pointer.to_string();
    if text.is_empty() { "/".into() } else { text }
}
