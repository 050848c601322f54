//! `flowenv show`: print the resolved settings.

use anyhow::{Context, Result};
use clap::Args;
use flowenv_settings::{Configuration, EnvironmentSettings, PlannerKind};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Run in batch mode
    #[arg(long, conflicts_with = "streaming")]
    pub batch: bool,

    /// Run in streaming mode
    #[arg(long)]
    pub streaming: bool,

    /// Planner to use (blink, any)
    #[arg(long)]
    pub planner: Option<PlannerKind>,

    /// Built-in catalog name
    #[arg(long)]
    pub catalog: Option<String>,

    /// Built-in database name
    #[arg(long)]
    pub database: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SettingsReport<'a> {
    #[serde(flatten)]
    settings: &'a EnvironmentSettings,
    streaming: bool,
    configuration: Configuration,
    planner_properties: BTreeMap<String, String>,
    executor_properties: BTreeMap<String, String>,
}

impl<'a> SettingsReport<'a> {
    fn new(settings: &'a EnvironmentSettings) -> Self {
        Self {
            settings,
            streaming: settings.is_streaming_mode(),
            configuration: settings.to_configuration(),
            planner_properties: settings.to_planner_properties(),
            executor_properties: settings.to_executor_properties(),
        }
    }
}

/// Settings from `config` with the command line overrides applied.
pub fn resolve_settings(args: &ShowArgs, config: &Configuration) -> Result<EnvironmentSettings> {
    let base = EnvironmentSettings::from_configuration(config)
        .context("Invalid settings in configuration")?;

    let mut builder = base.to_builder();
    if args.batch {
        builder.in_batch_mode();
    } else if args.streaming {
        builder.in_streaming_mode();
    }
    if let Some(planner) = args.planner {
        builder.use_planner_kind(planner);
    }
    if let Some(name) = &args.catalog {
        builder.with_built_in_catalog_name(name.as_str())?;
    }
    if let Some(name) = &args.database {
        builder.with_built_in_database_name(name.as_str())?;
    }
    Ok(builder.build())
}

pub fn run(args: &ShowArgs, config: &Configuration) -> Result<()> {
    let settings = resolve_settings(args, config)?;

    if args.json {
        let report = SettingsReport::new(&settings);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (key, value) in settings.to_configuration().iter() {
        println!("{} = {}", key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let config: Configuration = [
            ("execution.runtime-mode", "batch"),
            ("table.builtin-catalog-name", "lake"),
        ]
        .into_iter()
        .collect();
        let args = ShowArgs {
            streaming: true,
            planner: Some(PlannerKind::Any),
            database: Some("raw".to_string()),
            ..ShowArgs::default()
        };

        let settings = resolve_settings(&args, &config).unwrap();
        assert!(settings.is_streaming_mode());
        assert_eq!(settings.planner(), PlannerKind::Any);
        assert_eq!(settings.built_in_catalog_name(), "lake");
        assert_eq!(settings.built_in_database_name(), "raw");
    }

    #[test]
    fn report_carries_settings_fields() {
        let settings = EnvironmentSettings::new_instance()
            .use_any_planner()
            .in_batch_mode()
            .build();
        let json = serde_json::to_value(SettingsReport::new(&settings)).unwrap();

        assert_eq!(json["runtime_mode"], "BATCH");
        assert_eq!(json["planner"], "ANY");
        assert_eq!(json["streaming"], false);
        assert_eq!(json["built_in_catalog_name"], "default_catalog");
        assert_eq!(json["built_in_database_name"], "default_database");
        assert_eq!(json["configuration"]["execution.runtime-mode"], "BATCH");
        assert!(json["planner_properties"].get("class-name").is_none());
    }

    #[test]
    fn blank_catalog_flag_is_an_error() {
        let args = ShowArgs {
            catalog: Some(String::new()),
            ..ShowArgs::default()
        };
        assert!(resolve_settings(&args, &Configuration::new()).is_err());
    }
}
