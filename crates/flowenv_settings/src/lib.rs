//! Execution environment settings for Flowenv sessions.
//!
//! - [`EnvironmentSettings`] / [`EnvironmentSettingsBuilder`]: planner, runtime
//!   mode, and built-in catalog/database names for a session
//! - [`Configuration`]: string-keyed mapping the settings project into and out of
//! - TOML loading of configuration files, with nested tables flattened into
//!   dotted keys (`execution.runtime-mode`)

pub mod configuration;
pub mod defaults;
pub mod error;
pub mod paths;
pub mod planner;
pub mod runtime_mode;
pub mod settings;

pub use configuration::{
    ConfigOption, Configuration, RUNTIME_MODE, TABLE_CATALOG_NAME, TABLE_DATABASE_NAME,
    TABLE_PLANNER,
};
pub use defaults::{DEFAULT_BUILTIN_CATALOG, DEFAULT_BUILTIN_DATABASE};
pub use error::{ConfigError, Result};
pub use planner::PlannerKind;
pub use runtime_mode::RuntimeMode;
pub use settings::{EnvironmentSettings, EnvironmentSettingsBuilder};
