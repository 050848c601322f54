//! Execution environment settings.
//!
//! [`EnvironmentSettings`] is an immutable snapshot of the choices that set up
//! a table/execution session: planner, runtime mode, and the names of the
//! built-in catalog and database. [`EnvironmentSettingsBuilder`] accumulates
//! those choices and can be reused; every `build()` takes an independent copy.

use crate::configuration::{
    Configuration, RUNTIME_MODE, TABLE_CATALOG_NAME, TABLE_DATABASE_NAME, TABLE_PLANNER,
};
use crate::defaults::{CLASS_NAME, DEFAULT_BUILTIN_CATALOG, DEFAULT_BUILTIN_DATABASE, STREAMING_MODE};
use crate::error::{ConfigError, Result};
use crate::planner::PlannerKind;
use crate::runtime_mode::RuntimeMode;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Immutable execution environment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentSettings {
    planner: PlannerKind,
    runtime_mode: RuntimeMode,
    built_in_catalog_name: String,
    built_in_database_name: String,
}

impl EnvironmentSettings {
    /// Fresh builder: Blink planner, streaming mode, default catalog and database.
    pub fn new_instance() -> EnvironmentSettingsBuilder {
        EnvironmentSettingsBuilder::new()
    }

    /// Default settings in streaming mode.
    pub fn in_streaming_mode() -> Self {
        Self::new_instance().in_streaming_mode().build()
    }

    /// Default settings in batch mode.
    pub fn in_batch_mode() -> Self {
        Self::new_instance().in_batch_mode().build()
    }

    pub fn is_streaming_mode(&self) -> bool {
        self.runtime_mode.is_streaming()
    }

    pub fn runtime_mode(&self) -> RuntimeMode {
        self.runtime_mode
    }

    pub fn planner(&self) -> PlannerKind {
        self.planner
    }

    pub fn is_blink_planner(&self) -> bool {
        self.planner == PlannerKind::Blink
    }

    pub fn built_in_catalog_name(&self) -> &str {
        &self.built_in_catalog_name
    }

    pub fn built_in_database_name(&self) -> &str {
        &self.built_in_database_name
    }

    /// Builder seeded with these settings, for applying overrides.
    pub fn to_builder(&self) -> EnvironmentSettingsBuilder {
        EnvironmentSettingsBuilder {
            planner: self.planner,
            runtime_mode: self.runtime_mode,
            built_in_catalog_name: self.built_in_catalog_name.clone(),
            built_in_database_name: self.built_in_database_name.clone(),
        }
    }

    /// Properties handed to the planner factory lookup.
    ///
    /// `CLASS_NAME` is only present when the planner kind pins a factory.
    pub fn to_planner_properties(&self) -> BTreeMap<String, String> {
        self.factory_properties(self.planner.planner_factory())
    }

    /// Properties handed to the executor factory lookup.
    pub fn to_executor_properties(&self) -> BTreeMap<String, String> {
        self.factory_properties(self.planner.executor_factory())
    }

    fn factory_properties(&self, factory: Option<&str>) -> BTreeMap<String, String> {
        let mut properties = BTreeMap::new();
        if let Some(class_name) = factory {
            properties.insert(CLASS_NAME.to_string(), class_name.to_string());
        }
        properties.insert(
            STREAMING_MODE.to_string(),
            self.is_streaming_mode().to_string(),
        );
        properties
    }

    /// Project into a configuration mapping.
    pub fn to_configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        config
            .set(&RUNTIME_MODE, self.runtime_mode)
            .set(&TABLE_PLANNER, self.planner)
            .set(&TABLE_CATALOG_NAME, self.built_in_catalog_name.clone())
            .set(&TABLE_DATABASE_NAME, self.built_in_database_name.clone());
        config
    }

    /// Read settings back from a configuration mapping.
    ///
    /// Absent keys take their defaults and unknown keys are ignored. The runtime
    /// mode must resolve to STREAMING or BATCH.
    ///
    /// An unparseable or unsupported mode or planner, and a blank catalog or
    /// database name, are reported as [`ConfigError::InvalidArgument`]. Reading
    /// the same keys through [`Configuration::get`] reports `InvalidValue` instead.
    pub fn from_configuration(config: &Configuration) -> Result<Self> {
        let runtime_mode: RuntimeMode = config
            .get_string(RUNTIME_MODE.key(), RUNTIME_MODE.default_value())
            .parse()?;
        let planner: PlannerKind = config
            .get_string(TABLE_PLANNER.key(), TABLE_PLANNER.default_value())
            .parse()?;

        let mut builder = Self::new_instance();
        builder.use_planner_kind(planner);
        match runtime_mode {
            RuntimeMode::Streaming => builder.in_streaming_mode(),
            RuntimeMode::Batch => builder.in_batch_mode(),
            RuntimeMode::Automatic => {
                return Err(ConfigError::invalid_argument(format!(
                    "Unsupported runtime mode '{}' for '{}': choose STREAMING or BATCH",
                    runtime_mode,
                    RUNTIME_MODE.key()
                )))
            }
        };
        if let Some(name) = config.get_optional_string(TABLE_CATALOG_NAME.key()) {
            builder.with_built_in_catalog_name(name)?;
        }
        if let Some(name) = config.get_optional_string(TABLE_DATABASE_NAME.key()) {
            builder.with_built_in_database_name(name)?;
        }

        let settings = builder.build();
        debug!(
            runtime_mode = %settings.runtime_mode,
            planner = %settings.planner,
            "Resolved environment settings from configuration"
        );
        Ok(settings)
    }
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self::new_instance().build()
    }
}

/// Mutable builder for [`EnvironmentSettings`].
#[derive(Debug, Clone)]
pub struct EnvironmentSettingsBuilder {
    planner: PlannerKind,
    runtime_mode: RuntimeMode,
    built_in_catalog_name: String,
    built_in_database_name: String,
}

impl EnvironmentSettingsBuilder {
    pub fn new() -> Self {
        Self {
            planner: PlannerKind::default(),
            runtime_mode: RuntimeMode::Streaming,
            built_in_catalog_name: DEFAULT_BUILTIN_CATALOG.to_string(),
            built_in_database_name: DEFAULT_BUILTIN_DATABASE.to_string(),
        }
    }

    pub fn use_planner_kind(&mut self, kind: PlannerKind) -> &mut Self {
        self.planner = kind;
        self
    }

    pub fn use_blink_planner(&mut self) -> &mut Self {
        self.use_planner_kind(PlannerKind::Blink)
    }

    /// Do not pin a planner; the engine uses the first one it discovers.
    pub fn use_any_planner(&mut self) -> &mut Self {
        self.use_planner_kind(PlannerKind::Any)
    }

    pub fn in_streaming_mode(&mut self) -> &mut Self {
        self.runtime_mode = RuntimeMode::Streaming;
        self
    }

    pub fn in_batch_mode(&mut self) -> &mut Self {
        self.runtime_mode = RuntimeMode::Batch;
        self
    }

    /// Name of the catalog created at session start. Must not be blank.
    pub fn with_built_in_catalog_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.built_in_catalog_name = non_blank("built-in catalog name", name.into())?;
        Ok(self)
    }

    /// Name of the database created inside the built-in catalog. Must not be blank.
    pub fn with_built_in_database_name(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.built_in_database_name = non_blank("built-in database name", name.into())?;
        Ok(self)
    }

    /// Snapshot the current choices. The builder stays usable.
    pub fn build(&self) -> EnvironmentSettings {
        debug!(
            planner = %self.planner,
            runtime_mode = %self.runtime_mode,
            catalog = %self.built_in_catalog_name,
            database = %self.built_in_database_name,
            "Building environment settings"
        );
        EnvironmentSettings {
            planner: self.planner,
            runtime_mode: self.runtime_mode,
            built_in_catalog_name: self.built_in_catalog_name.clone(),
            built_in_database_name: self.built_in_database_name.clone(),
        }
    }
}

impl Default for EnvironmentSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(what: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid_argument(format!("{} must not be empty", what)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{BLINK_EXECUTOR_FACTORY, BLINK_PLANNER_FACTORY};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn settings_are_shareable_across_threads() {
        assert_send_sync::<EnvironmentSettings>();
    }

    #[test]
    fn defaults_match_new_instance() {
        let settings = EnvironmentSettings::default();
        assert_eq!(settings, EnvironmentSettings::new_instance().build());
        assert!(settings.is_streaming_mode());
        assert!(settings.is_blink_planner());
        assert_eq!(settings.built_in_catalog_name(), DEFAULT_BUILTIN_CATALOG);
        assert_eq!(settings.built_in_database_name(), DEFAULT_BUILTIN_DATABASE);
    }

    #[test]
    fn blank_names_are_rejected_without_touching_builder() {
        let mut builder = EnvironmentSettings::new_instance();
        builder.with_built_in_catalog_name("lake").unwrap();

        let err = builder.with_built_in_catalog_name("   ").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument(_)));
        assert!(builder.with_built_in_database_name("").is_err());

        let settings = builder.build();
        assert_eq!(settings.built_in_catalog_name(), "lake");
        assert_eq!(settings.built_in_database_name(), DEFAULT_BUILTIN_DATABASE);
    }

    #[test]
    fn blink_planner_properties_carry_factory() {
        let settings = EnvironmentSettings::in_batch_mode();
        let planner = settings.to_planner_properties();
        assert_eq!(planner.get(CLASS_NAME).map(String::as_str), Some(BLINK_PLANNER_FACTORY));
        assert_eq!(planner.get(STREAMING_MODE).map(String::as_str), Some("false"));

        let executor = settings.to_executor_properties();
        assert_eq!(executor.get(CLASS_NAME).map(String::as_str), Some(BLINK_EXECUTOR_FACTORY));
    }

    #[test]
    fn any_planner_properties_omit_factory() {
        let settings = EnvironmentSettings::new_instance().use_any_planner().build();
        assert!(!settings.to_planner_properties().contains_key(CLASS_NAME));
        assert!(!settings.to_executor_properties().contains_key(CLASS_NAME));
        assert_eq!(
            settings.to_planner_properties().get(STREAMING_MODE).map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn configuration_carries_every_field() {
        let settings = EnvironmentSettings::new_instance()
            .use_any_planner()
            .in_batch_mode()
            .with_built_in_catalog_name("lake")
            .unwrap()
            .with_built_in_database_name("raw")
            .unwrap()
            .build();
        let config = settings.to_configuration();
        assert_eq!(config.get_optional_string("execution.runtime-mode"), Some("BATCH"));
        assert_eq!(config.get_optional_string("table.planner"), Some("ANY"));
        assert_eq!(config.get_optional_string("table.builtin-catalog-name"), Some("lake"));
        assert_eq!(config.get_optional_string("table.builtin-database-name"), Some("raw"));

        assert_eq!(EnvironmentSettings::from_configuration(&config).unwrap(), settings);
    }

    #[test]
    fn from_configuration_rejects_automatic_mode() {
        let config: Configuration = [("execution.runtime-mode", "automatic")].into_iter().collect();
        assert!(matches!(
            EnvironmentSettings::from_configuration(&config),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_configuration_rejects_unknown_mode() {
        let config: Configuration = [("execution.runtime-mode", "stream")].into_iter().collect();
        assert!(matches!(
            EnvironmentSettings::from_configuration(&config),
            Err(ConfigError::InvalidArgument(_))
        ));
    }

    #[test]
    fn bad_mode_error_depends_on_entry_point() {
        let config: Configuration = [("execution.runtime-mode", "sideways")].into_iter().collect();
        assert!(matches!(
            EnvironmentSettings::from_configuration(&config),
            Err(ConfigError::InvalidArgument(_))
        ));
        assert!(matches!(
            config.get(&RUNTIME_MODE),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn to_builder_applies_overrides_on_top() {
        let base = EnvironmentSettings::in_batch_mode();
        let overridden = base.to_builder().use_any_planner().build();
        assert!(!overridden.is_streaming_mode());
        assert_eq!(overridden.planner(), PlannerKind::Any);
        assert!(base.is_blink_planner());
    }
}
