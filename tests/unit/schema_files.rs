use anyhow::Result;
use ddlforge::model::ModelError;
use ddlforge::render::{DialectKind, NamingKind, RenderOptions, render_schema_with};
use ddlforge::schema_loader::load_schema_file;
use ddlforge::validation::{ensure_valid, validate_schema};
use std::fs;
use tempfile::TempDir;

const INVENTORY_YAML: &str = r#"
tables:
  - name: warehouses
    comment: Physical storage sites
    primary_key:
      single:
        name: id
        type: { name: int }
        identity: true
    columns:
      - name: code
        type: { name: char, dimensions: ["4"] }
        unique: true
      - name: region
        type: { name: varchar, dimensions: ["20"] }
        nullable: true
        constraints:
          - default: { expression: "'EU'", name: df_region }
  - name: stock
    primary_key:
      composite: [warehouse_id, sku]
    columns:
      - name: warehouse_id
        type: { name: int }
        foreign_key:
          target: warehouses
          type: { name: int }
          cascade_delete: true
      - name: sku
        type: { name: varchar, dimensions: ["32"] }
      - name: quantity
        type: { name: int }
        comment: units on hand
    checks:
      - name: ck_stock_quantity
        condition: quantity >= 0
    indices:
      - columns: [sku]
        include: [quantity]
"#;

fn write_schema(dir: &TempDir, name: &str, contents: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_yaml_schema_renders_for_sqlite() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_schema(&dir, "inventory.yaml", INVENTORY_YAML)?;

    let schema = load_schema_file(&path)?;
    ensure_valid(&schema)?;

    let sql = render_schema_with(
        &schema,
        NamingKind::Default.strategy(),
        DialectKind::Sqlite.dialect(),
        &RenderOptions::default(),
    );

    insta::assert_snapshot!(sql.trim_end(), @r"
-- Physical storage sites
create table warehouses
(
    id     int identity
        constraint pk_warehouses primary key,
    code   char(4) not null
        constraint uq_warehouses_code unique,
    region varchar(20)
        constraint df_region default 'EU'
);

create table stock
(
    warehouse_id int not null
        constraint fk_stock_warehouse references warehouses on delete cascade,
    sku          varchar(32) not null,
    quantity     int not null, -- units on hand
    constraint pk_stock primary key (warehouse_id, sku),
    constraint ck_stock_quantity
        check (quantity >= 0)
);

create index idx_stock_sku on stock (sku) include (quantity);
");

    Ok(())
}

#[test]
fn test_json_and_yaml_load_the_same_model() -> Result<()> {
    let dir = TempDir::new()?;
    let yaml_path = write_schema(&dir, "inventory.yml", INVENTORY_YAML)?;
    let from_yaml = load_schema_file(&yaml_path)?;

    let json_path = write_schema(&dir, "inventory.json", &serde_json::to_string(&from_yaml)?)?;
    let from_json = load_schema_file(&json_path)?;

    assert_eq!(from_yaml, from_json);
    Ok(())
}

#[test]
fn test_validation_reports_every_problem() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_schema(
        &dir,
        "broken.yaml",
        r#"
tables:
  - name: events
    primary_key:
      composite: [id, missing]
    columns:
      - name: id
        type: { name: int }
      - name: id
        type: { name: int }
    indices:
      - name: idx_events_empty
        columns: []
"#,
    )?;

    let schema = load_schema_file(&path)?;
    let errors = validate_schema(&schema);

    assert!(errors.iter().any(|e| matches!(e, ModelError::DuplicateColumn { column, .. } if column == "id")));
    assert!(errors.iter().any(|e| matches!(e, ModelError::UnknownPrimaryKeyColumn { column, .. } if column == "missing")));
    assert!(errors.iter().any(|e| matches!(e, ModelError::EmptyIndex { index, .. } if index == "idx_events_empty")));
    assert!(ensure_valid(&schema).is_err());
    Ok(())
}
