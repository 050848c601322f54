//! Canonical default values shared by settings and configuration.

pub const DEFAULT_BUILTIN_CATALOG: &str = "default_catalog";
pub const DEFAULT_BUILTIN_DATABASE: &str = "default_database";

/// Property key naming the planner/executor factory.
pub const CLASS_NAME: &str = "class-name";
/// Property key carrying the streaming flag as `"true"`/`"false"`.
pub const STREAMING_MODE: &str = "streaming-mode";

pub const BLINK_PLANNER_FACTORY: &str = "flowenv.planner.blink.BlinkPlannerFactory";
pub const BLINK_EXECUTOR_FACTORY: &str = "flowenv.planner.blink.BlinkExecutorFactory";

/// Separator used when a TOML array is flattened into a single value.
pub const LIST_SEPARATOR: &str = ";";
