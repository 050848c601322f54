//! CLI command implementations

pub mod check;
pub mod init;
pub mod show;

use anyhow::{Context, Result};
use flowenv_settings::{paths, Configuration};
use std::path::Path;
use tracing::{debug, warn};

/// Load the configuration the commands run against.
///
/// An explicit path must load. The default file is optional: when it is
/// missing or broken the defaults are used.
pub fn resolve_configuration(explicit: Option<&Path>) -> Result<Configuration> {
    if let Some(path) = explicit {
        return Configuration::load_file(path)
            .with_context(|| format!("Failed to load config file {}", path.display()));
    }

    let default_path = paths::default_config_path();
    if !default_path.exists() {
        debug!(path = %default_path.display(), "No config file, using defaults");
        return Ok(Configuration::new());
    }

    match Configuration::load_file(&default_path) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(
                path = %default_path.display(),
                error = %err,
                "Ignoring unreadable config file"
            );
            Ok(Configuration::new())
        }
    }
}
