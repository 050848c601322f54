//! `flowenv init`: write the default settings to disk.

use anyhow::{bail, Context, Result};
use flowenv_settings::EnvironmentSettings;
use std::path::Path;
use tracing::info;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let text = EnvironmentSettings::default().to_configuration().to_toml_string()?;
    std::fs::write(path, text)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    info!(path = %path.display(), "Wrote default settings");

    println!("Wrote {}", path.display());
    Ok(())
}
