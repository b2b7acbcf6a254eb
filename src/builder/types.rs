//! Column spec shorthands for common SQL Server types.

use crate::model::{ColumnSpec, Type};

pub fn sql_type(name: impl Into<String>) -> ColumnSpec {
    ColumnSpec::new(Type::new(name))
}

fn dimensioned<const N: usize>(name: &str, dimensions: [String; N]) -> ColumnSpec {
    ColumnSpec::new(Type::with_dimensions(name, dimensions))
}

pub fn int() -> ColumnSpec {
    sql_type("int")
}

pub fn bigint() -> ColumnSpec {
    sql_type("bigint")
}

pub fn boolean() -> ColumnSpec {
    sql_type("bit")
}

pub fn date() -> ColumnSpec {
    sql_type("date")
}

pub fn datetime() -> ColumnSpec {
    sql_type("datetime")
}

pub fn float() -> ColumnSpec {
    sql_type("float")
}

pub fn uniqueidentifier() -> ColumnSpec {
    sql_type("uniqueidentifier")
}

/// `int` generated by the database on insert.
pub fn identity() -> ColumnSpec {
    ColumnSpec {
        identity: true,
        ..int()
    }
}

pub fn varchar(length: u32) -> ColumnSpec {
    dimensioned("varchar", [length.to_string()])
}

pub fn varbinary(length: u32) -> ColumnSpec {
    dimensioned("varbinary", [length.to_string()])
}

pub fn varbinary_max() -> ColumnSpec {
    dimensioned("varbinary", ["max".to_string()])
}

/// Unbounded text, `varchar(max)`.
pub fn text() -> ColumnSpec {
    dimensioned("varchar", ["max".to_string()])
}

pub fn decimal(precision: u32, scale: u32) -> ColumnSpec {
    dimensioned("decimal", [precision.to_string(), scale.to_string()])
}

pub fn time(precision: u32) -> ColumnSpec {
    dimensioned("time", [precision.to_string()])
}

/// Mark a spec as unique.
pub fn unique(spec: ColumnSpec) -> ColumnSpec {
    ColumnSpec {
        unique: true,
        ..spec
    }
}
