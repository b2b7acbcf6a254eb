use crate::config::{merge::Merge, types::*};
use crate::constants::DIALECT_ENV_VAR;
use crate::render::DialectKind;
use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;

pub struct ConfigBuilder {
    config_input: ConfigInput,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
        }
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            render: self.resolve_render(&defaults.render)?,
            output: self.resolve_output(&defaults.output),
        })
    }

    fn resolve_render(&self, defaults: &RenderConfig) -> Result<RenderConfig> {
        let render_input = self.config_input.render.as_ref();

        let dialect = match render_input.and_then(|r| r.dialect) {
            Some(dialect) => dialect,
            None => match std::env::var(DIALECT_ENV_VAR) {
                Ok(value) => DialectKind::from_str(&value, true)
                    .map_err(|err| anyhow!(err))
                    .with_context(|| format!("Invalid {} value", DIALECT_ENV_VAR))?,
                Err(_) => defaults.dialect,
            },
        };

        Ok(RenderConfig {
            dialect,
            naming: render_input
                .and_then(|r| r.naming)
                .unwrap_or(defaults.naming),
            align_columns: render_input
                .and_then(|r| r.align_columns)
                .unwrap_or(defaults.align_columns),
        })
    }

    fn resolve_output(&self, defaults: &OutputConfig) -> OutputConfig {
        let output_input = self.config_input.output.as_ref();

        OutputConfig {
            path: output_input
                .and_then(|o| o.path.as_ref())
                .cloned()
                .or_else(|| defaults.path.clone()),
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
