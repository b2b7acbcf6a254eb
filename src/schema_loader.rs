use anyhow::{Context, Result, anyhow};
use serde_yaml::with::singleton_map_recursive;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::model::Schema;

/// Serialization format of a schema file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

impl SchemaFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if YAML_EXTENSIONS.contains(&extension.as_str()) {
            Ok(SchemaFormat::Yaml)
        } else if JSON_EXTENSIONS.contains(&extension.as_str()) {
            Ok(SchemaFormat::Json)
        } else {
            Err(anyhow!(
                "Unsupported schema file extension for {}: expected .yaml, .yml or .json",
                path.display()
            ))
        }
    }
}

/// Parse schema text in the given format
pub fn parse_schema(contents: &str, format: SchemaFormat) -> Result<Schema> {
    match format {
        // Enum variants are written as single-key maps (`single: {...}`), not YAML tags.
        SchemaFormat::Yaml => {
            singleton_map_recursive::deserialize(serde_yaml::Deserializer::from_str(contents))
                .context("Failed to parse YAML schema")
        }
        SchemaFormat::Json => {
            serde_json::from_str(contents).context("Failed to parse JSON schema")
        }
    }
}

/// Load a schema file, dispatching on its extension
pub fn load_schema_file(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let format = SchemaFormat::from_path(path)?;

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema file: {}", path.display()))?;

    let schema = parse_schema(&contents, format)
        .with_context(|| format!("Invalid schema file: {}", path.display()))?;

    debug!(
        "Loaded {} tables from {}",
        schema.tables.len(),
        path.display()
    );
    Ok(schema)
}
