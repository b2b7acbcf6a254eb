use thiserror::Error;

/// Structural problems in a schema model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("no primary key for table {table}")]
    MissingPrimaryKey { table: String },

    #[error("table {table} has a composite primary key and cannot be referenced by a single column")]
    CompositeKeyReference { table: String },

    #[error("table {table}: column {column} is declared more than once")]
    DuplicateColumn { table: String, column: String },

    #[error("table {table}: primary key references unknown column {column}")]
    UnknownPrimaryKeyColumn { table: String, column: String },

    #[error("table {table}: primary key column {column} is also declared as a regular column")]
    KeyColumnRedeclared { table: String, column: String },

    #[error("table {table}: primary key column {column} must not be nullable")]
    NullablePrimaryKey { table: String, column: String },

    #[error("table {table}: unique constraint references unknown column {column}")]
    UnknownUniqueColumn { table: String, column: String },

    #[error("table {table}: index {index} references unknown column {column}")]
    UnknownIndexColumn {
        table: String,
        index: String,
        column: String,
    },

    #[error("table {table}: index {index} has no key columns")]
    EmptyIndex { table: String, index: String },
}
