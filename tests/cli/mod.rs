pub mod validate;

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary project directory with a ddlforge command rooted in it
pub struct CliTestHelper {
    pub temp_dir: TempDir,
}

impl CliTestHelper {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ddlforge").expect("Failed to find ddlforge binary");
        cmd.current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("DDLFORGE_DIALECT");
        cmd
    }
}

pub const USERS_SCHEMA: &str = r#"
tables:
  - name: users
    primary_key:
      single:
        name: id
        type: { name: int }
        identity: true
    columns:
      - name: name
        type: { name: varchar, dimensions: ["100"] }
    indices:
      - columns: [name]
        unique: true
"#;
