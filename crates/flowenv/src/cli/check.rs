//! `flowenv check`: validate a config file.

use anyhow::{Context, Result};
use flowenv_settings::{
    Configuration, EnvironmentSettings, RUNTIME_MODE, TABLE_CATALOG_NAME, TABLE_DATABASE_NAME,
    TABLE_PLANNER,
};
use std::path::Path;
use tracing::info;

/// Keys in `config` that settings resolution does not read.
fn ignored_keys(config: &Configuration) -> Vec<&str> {
    let known = [
        RUNTIME_MODE.key(),
        TABLE_PLANNER.key(),
        TABLE_CATALOG_NAME.key(),
        TABLE_DATABASE_NAME.key(),
    ];
    config
        .keys()
        .filter(|key| !known.iter().any(|k| *k == *key))
        .collect()
}

pub fn run(file: &Path) -> Result<()> {
    let config = Configuration::load_file(file)
        .with_context(|| format!("Failed to load config file {}", file.display()))?;
    let settings = EnvironmentSettings::from_configuration(&config)
        .with_context(|| format!("Invalid settings in {}", file.display()))?;
    info!(path = %file.display(), "Config file is valid");

    println!("OK: {}", file.display());
    println!("  runtime mode: {}", settings.runtime_mode());
    println!("  planner:      {}", settings.planner());
    println!("  catalog:      {}", settings.built_in_catalog_name());
    println!("  database:     {}", settings.built_in_database_name());

    let ignored = ignored_keys(&config);
    if !ignored.is_empty() {
        println!("  passed through: {}", ignored.join(", "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_keys_skip_settings_keys() {
        let config: Configuration = [
            ("execution.runtime-mode", "batch"),
            ("pipeline.name", "nightly"),
            ("table.planner", "blink"),
        ]
        .into_iter()
        .collect();
        assert_eq!(ignored_keys(&config), vec!["pipeline.name"]);
    }
}
