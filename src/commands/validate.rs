use crate::schema_loader::load_schema_file;
use crate::validation::validate_schema;
use anyhow::{Result, anyhow};
use std::path::Path;

pub fn cmd_validate(schema_path: &Path) -> Result<()> {
    println!("🔍 Validating {}...", schema_path.display());

    let schema = load_schema_file(schema_path)?;
    let errors = validate_schema(&schema);

    if errors.is_empty() {
        println!(
            "✅ {} tables, {} indices: no problems found",
            schema.tables.len(),
            schema.index_count()
        );
        return Ok(());
    }

    for error in &errors {
        println!("❌ {}", error);
    }
    Err(anyhow!(
        "Schema validation failed with {} problem(s)",
        errors.len()
    ))
}
