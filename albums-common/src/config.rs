//! Configuration loading and bind address resolution

use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

/// Environment variable consulted when no CLI flag is given.
pub const BIND_ADDR_ENV: &str = "ALBUMS_BIND_ADDR";

/// Compiled default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Shape of the optional TOML config file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    bind_addr: Option<String>,
}

/// Bind address resolution, priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file
/// 4. Compiled default (fallback)
pub fn resolve_bind_addr(cli_arg: Option<&str>, config_file: Option<&Path>) -> Result<String> {
    // Priority 1: Command-line argument
    if let Some(addr) = cli_arg {
        return Ok(addr.to_string());
    }

    // Priority 2: Environment variable
    if let Ok(addr) = std::env::var(BIND_ADDR_ENV) {
        if !addr.is_empty() {
            return Ok(addr);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = config_file {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: ConfigFile = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("invalid config file {}: {e}", path.display())))?;
        if let Some(addr) = config.bind_addr {
            return Ok(addr);
        }
    }

    // Priority 4: Compiled default
    Ok(DEFAULT_BIND_ADDR.to_string())
}
