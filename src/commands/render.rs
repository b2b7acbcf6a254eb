use crate::config::Config;
use crate::model::Schema;
use crate::render::render_schema_with;
use crate::schema_loader::load_schema_file;
use crate::validation::ensure_valid;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Render a schema with the resolved configuration
pub fn render_config(config: &Config, schema: &Schema) -> String {
    render_schema_with(
        schema,
        config.render.naming.strategy(),
        config.render.dialect.dialect(),
        &config.render.options(),
    )
}

pub fn cmd_render(config: &Config, schema_path: &Path, validate: bool) -> Result<()> {
    let schema = load_schema_file(schema_path)?;

    if validate {
        ensure_valid(&schema).context("Schema validation failed")?;
    }

    info!(
        "Rendering {} tables for {}",
        schema.tables.len(),
        config.render.dialect.dialect().name()
    );
    let ddl = render_config(config, &schema);

    match &config.output.path {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(path, &ddl)
                .with_context(|| format!("Failed to write DDL to {}", path.display()))?;
            eprintln!(
                "✅ Wrote {} tables and {} indices to {}",
                schema.tables.len(),
                schema.index_count(),
                path.display()
            );
        }
        None => print!("{}", ddl),
    }

    Ok(())
}
