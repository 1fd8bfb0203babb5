//! Config command handlers

use crate::cli::ConfigInitArgs;
use crate::config::{AnalyzerConfig, ConfigError};
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../rng-analyzer.example.toml");

/// Fill the annotated example with the values given on the command line.
///
/// Comments and layout of the example are kept, and the result must load
/// and validate like a hand-written file would.
pub fn render_config(args: &ConfigInitArgs) -> Result<String, ConfigError> {
    let mut rendered = String::with_capacity(EXAMPLE_CONFIG.len());
    for line in EXAMPLE_CONFIG.lines() {
        match (&args.endpoint, &args.data_dir) {
            (Some(endpoint), _) if line.starts_with("endpoint = ") => {
                rendered.push_str(&format!("endpoint = {}", toml_string(endpoint)));
            }
            (_, Some(dir)) if line.starts_with("# data_dir = ") => {
                let dir = dir.to_string_lossy();
                rendered.push_str(&format!("data_dir = {}", toml_string(&dir)));
            }
            _ => rendered.push_str(line),
        }
        rendered.push('\n');
    }

    let config: AnalyzerConfig = toml::from_str(&rendered).map_err(|e| ConfigError::Parse {
        path: args.output.clone(),
        message: e.to_string(),
    })?;
    config.validate()?;

    Ok(rendered)
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// Handle `rng-analyzer config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    let rendered = render_config(args)?;
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&args.output, rendered)?;

    let mut message = format!("✓ Configuration file created: {}", args.output.display());
    if args.endpoint.is_none() {
        message.push_str("\n  Edit [service].endpoint to point at your classification service.");
    }
    Ok(message)
}
