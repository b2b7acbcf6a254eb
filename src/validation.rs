//! Optional structural checks run before rendering.
//!
//! The renderer itself never validates: a model that breaks these rules renders
//! to whatever text falls out. Run [`validate_schema`] first when the model comes
//! from somewhere untrusted, such as a hand-written schema file.

use std::collections::HashSet;

use tracing::warn;

use crate::model::{AnyColumn, ModelError, PrimaryKey, Schema, Table};

/// Every structural problem found in the schema, in table order.
pub fn validate_schema(schema: &Schema) -> Vec<ModelError> {
    let errors: Vec<ModelError> = schema.tables.iter().flat_map(validate_table).collect();

    for error in &errors {
        warn!("{}", error);
    }

    errors
}

/// Fail with the first problem found.
pub fn ensure_valid(schema: &Schema) -> Result<(), ModelError> {
    match validate_schema(schema).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

pub fn validate_table(table: &Table) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let table_name = || table.name.clone();

    let mut seen = HashSet::new();
    for name in table.column_names() {
        if !seen.insert(name) {
            errors.push(ModelError::DuplicateColumn {
                table: table_name(),
                column: name.to_string(),
            });
        }
    }

    let plain_columns: HashSet<&str> = table.columns.iter().map(AnyColumn::name).collect();

    match &table.primary_key {
        Some(PrimaryKey::Single(column)) => {
            if column.nullable {
                errors.push(ModelError::NullablePrimaryKey {
                    table: table_name(),
                    column: column.name.clone(),
                });
            }
            if plain_columns.contains(column.name.as_str()) {
                errors.push(ModelError::KeyColumnRedeclared {
                    table: table_name(),
                    column: column.name.clone(),
                });
            }
        }
        Some(PrimaryKey::ForeignKeyRef { name, .. }) => {
            if plain_columns.contains(name.as_str()) {
                errors.push(ModelError::KeyColumnRedeclared {
                    table: table_name(),
                    column: name.clone(),
                });
            }
        }
        Some(PrimaryKey::Composite(columns)) => {
            for column in columns {
                if !plain_columns.contains(column.as_str()) {
                    errors.push(ModelError::UnknownPrimaryKeyColumn {
                        table: table_name(),
                        column: column.clone(),
                    });
                }
            }
        }
        None => {}
    }

    for unique in &table.uniques {
        for column in unique {
            if !seen.contains(column.as_str()) {
                errors.push(ModelError::UnknownUniqueColumn {
                    table: table_name(),
                    column: column.clone(),
                });
            }
        }
    }

    for index in &table.indices {
        if index.columns.is_empty() {
            errors.push(ModelError::EmptyIndex {
                table: table_name(),
                index: index.label(),
            });
        }
        for column in index.columns.iter().chain(&index.include) {
            if !seen.contains(column.as_str()) {
                errors.push(ModelError::UnknownIndexColumn {
                    table: table_name(),
                    index: index.label(),
                    column: column.clone(),
                });
            }
        }
    }

    errors
}
