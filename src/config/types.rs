use clap::Args;
use serde::{Deserialize, Serialize};

use crate::render::{DialectKind, NamingKind, RenderOptions};

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub render: Option<RenderInput>,
    pub output: Option<OutputInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

// Render configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderInput {
    pub dialect: Option<DialectKind>,
    pub naming: Option<NamingKind>,
    pub align_columns: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub dialect: DialectKind,
    pub naming: NamingKind,
    pub align_columns: bool,
}

impl RenderConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            align_columns: self.align_columns,
        }
    }
}

// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputInput {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Destination file; `None` writes to stdout.
    pub path: Option<String>,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[arg(long, value_enum, help = "SQL dialect to render")]
    pub dialect: Option<DialectKind>,

    #[arg(long, value_enum, help = "Constraint naming policy")]
    pub naming: Option<NamingKind>,

    #[arg(long, help = "Do not pad column names to a common width")]
    pub no_align: bool,

    #[arg(long, short = 'o', help = "Write DDL to this file instead of stdout")]
    pub output: Option<String>,
}

// Conversion functions from CLI args to config input
impl From<RenderArgs> for ConfigInput {
    fn from(args: RenderArgs) -> Self {
        let render = if args.dialect.is_some() || args.naming.is_some() || args.no_align {
            Some(RenderInput {
                dialect: args.dialect,
                naming: args.naming,
                align_columns: if args.no_align { Some(false) } else { None },
            })
        } else {
            None
        };

        Self {
            render,
            output: args.output.map(|path| OutputInput { path: Some(path) }),
        }
    }
}
