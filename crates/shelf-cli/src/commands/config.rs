//! Config command handlers

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use shelf_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "storage_path": config.storage_path,
                    "log_file": config.log_file
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.storage_path.display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  storage_path: {}", config.storage_path.display());
            println!(
                "  log_file:     {}",
                config
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    // Save to the CLI-specified path or default
    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    update_file(&save_path, &key, &value)?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

/// Rewrite one key in the config file, leaving environment overrides out
fn update_file(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_file(path).context("Failed to load configuration")?;

    apply(&mut config, key, value)?;

    config
        .save_to_path(path)
        .context("Failed to save configuration")
}

/// Update one key on a loaded configuration
fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "storage_path" => {
            if value.trim().is_empty() {
                bail!("storage_path cannot be empty");
            }
            config.storage_path = value.into();
        }
        "log_file" => {
            config.log_file = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.into())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: storage_path, log_file",
                key
            );
        }
    }

    Ok(())
}
