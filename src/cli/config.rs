//! Config command handler.

use crate::config::{generate_example_config, generate_json_schema, load_config};
use crate::error::ShareMenuError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// What the config command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigOutput {
    /// Effective configuration, merged from defaults and the discovered file
    #[default]
    Effective,
    /// JSON Schema of the file format
    Schema,
    /// Commented example file
    Example,
}

fn render(config_path: Option<&Path>, output: ConfigOutput) -> Result<String> {
    match output {
        ConfigOutput::Effective => {
            let (config, loaded_from) = load_config(config_path)?;
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            serde_yaml_ng::to_string(&config).context("failed to serialize config")
        }
        ConfigOutput::Schema => {
            let schema = generate_json_schema().context("failed to generate schema")?;
            Ok(format!("{schema}\n"))
        }
        ConfigOutput::Example => Ok(generate_example_config()),
    }
}

/// Run the config command, writing to `target` when given and to `out`
/// otherwise.
pub fn run_config(
    config_path: Option<&Path>,
    output: ConfigOutput,
    target: Option<&Path>,
    out: &mut impl Write,
) -> Result<i32> {
    let content = render(config_path, output)?;
    match target {
        Some(path) => {
            std::fs::write(path, &content).map_err(|e| ShareMenuError::io(path, e))?;
            eprintln!("Written to {}", path.display());
        }
        None => write!(out, "{content}")?,
    }
    Ok(0)
}
