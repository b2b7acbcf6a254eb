//! CLI validate tests

use super::{CliTestHelper, USERS_SCHEMA};
use anyhow::Result;
use predicates::prelude::*;

#[test]
fn test_validate_clean_schema() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write("schema.yaml", USERS_SCHEMA);

    helper
        .command()
        .args(["validate", "--schema", "schema.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 tables, 1 indices: no problems found"));

    Ok(())
}

#[test]
fn test_validate_lists_problems() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write(
        "schema.json",
        r#"{"tables":[{"name":"events",
            "primary_key":{"single":{"name":"id","type":{"name":"int"},"nullable":true}},
            "columns":[{"name":"id","type":{"name":"int"}}],
            "indices":[{"columns":["created_at"]}]}]}"#,
    );

    helper
        .command()
        .args(["validate", "--schema", "schema.json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("primary key column id must not be nullable"))
        .stdout(predicate::str::contains(
            "index (created_at) references unknown column created_at",
        ))
        .stderr(predicate::str::contains("Schema validation failed"));

    Ok(())
}

#[test]
fn test_unknown_schema_extension() -> Result<()> {
    let helper = CliTestHelper::new();
    helper.write("schema.sql", "create table t (id int);");

    helper
        .command()
        .args(["validate", "--schema", "schema.sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported schema file extension"));

    Ok(())
}
