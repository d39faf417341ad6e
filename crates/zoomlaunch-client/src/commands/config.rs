//! Configuration commands.

use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Dump the effective configuration to stdout.
pub fn dump(config: &ClientConfig, config_path: &Path) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", config_path.display());
    println!("{}", toml_str);
    Ok(())
}

/// Show the configuration and meeting file paths.
pub fn path(config: &ClientConfig, config_path: &Path) -> ClientResult<()> {
    println!("config: {}", config_path.display());
    println!("meetings: {}", config.meetings_path().display());
    Ok(())
}
