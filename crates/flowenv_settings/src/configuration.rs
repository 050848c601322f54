//! Generic string-keyed configuration store.
//!
//! Values are kept as text and parsed on access, so a mapping can carry keys
//! this crate knows nothing about. Unknown keys are preserved, never rejected.

use crate::defaults::{DEFAULT_BUILTIN_CATALOG, DEFAULT_BUILTIN_DATABASE, LIST_SEPARATOR};
use crate::error::{ConfigError, Result};
use crate::planner::PlannerKind;
use crate::runtime_mode::RuntimeMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

// ============================================================================
// Typed options
// ============================================================================

/// A configuration key paired with its textual default.
///
/// The default is stored as text so options can be declared as constants and
/// parsed with the same rules as user-supplied values.
pub struct ConfigOption<T> {
    key: &'static str,
    default_value: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> ConfigOption<T> {
    pub const fn new(key: &'static str, default_value: &'static str) -> Self {
        Self {
            key,
            default_value,
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn default_value(&self) -> &'static str {
        self.default_value
    }
}

impl<T> Clone for ConfigOption<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConfigOption<T> {}

impl<T> fmt::Debug for ConfigOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOption")
            .field("key", &self.key)
            .field("default_value", &self.default_value)
            .finish()
    }
}

pub const RUNTIME_MODE: ConfigOption<RuntimeMode> =
    ConfigOption::new("execution.runtime-mode", "STREAMING");
pub const TABLE_PLANNER: ConfigOption<PlannerKind> = ConfigOption::new("table.planner", "BLINK");
pub const TABLE_CATALOG_NAME: ConfigOption<String> =
    ConfigOption::new("table.builtin-catalog-name", DEFAULT_BUILTIN_CATALOG);
pub const TABLE_DATABASE_NAME: ConfigOption<String> =
    ConfigOption::new("table.builtin-database-name", DEFAULT_BUILTIN_DATABASE);

// ============================================================================
// Configuration
// ============================================================================

/// String-keyed configuration mapping with typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: BTreeMap<String, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Value for `key`, or `default` when the key is absent.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_optional_string(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.set_string(key, value.to_string())
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        match self.entries.get(key) {
            None => Ok(default),
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ConfigError::invalid_value(key, raw, "expected true or false")),
            },
        }
    }

    pub fn set_integer(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        self.set_string(key, value.to_string())
    }

    pub fn get_integer(&self, key: &str, default: i64) -> Result<i64> {
        self.get_parsed(key, default)
    }

    pub fn get_float(&self, key: &str, default: f64) -> Result<f64> {
        self.get_parsed(key, default)
    }

    fn get_parsed<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.entries.get(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::invalid_value(key, raw, e.to_string())),
        }
    }

    /// Typed read of `option`, falling back to its default.
    ///
    /// Text that does not parse as `T` is reported as [`ConfigError::InvalidValue`]
    /// naming the key, whatever error `T::from_str` produced.
    pub fn get<T>(&self, option: &ConfigOption<T>) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self
            .get_optional_string(option.key())
            .unwrap_or(option.default_value());
        raw.parse::<T>()
            .map_err(|e| ConfigError::invalid_value(option.key(), raw, e.to_string()))
    }

    pub fn set<T: fmt::Display>(&mut self, option: &ConfigOption<T>, value: T) -> &mut Self {
        self.set_string(option.key(), value.to_string())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, returning whether it was present.
    pub fn remove_config(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy every entry of `other` into this mapping; `other` wins on conflicts.
    pub fn add_all(&mut self, other: &Configuration) -> &mut Self {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }

    // === TOML files ===

    /// Parse TOML text, flattening nested tables into dotted keys.
    ///
    /// `[execution] runtime-mode = "batch"` becomes `execution.runtime-mode = batch`.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        let mut entries = BTreeMap::new();
        flatten_table("", &table, &mut entries)?;
        Ok(Self { entries })
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            path = %path.display(),
            entries = config.len(),
            "Loaded configuration file"
        );
        Ok(config)
    }

    /// Render as a single TOML table of quoted dotted keys.
    pub fn to_toml_string(&self) -> Result<String> {
        let table: toml::Table = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), toml::Value::String(v.clone())))
            .collect();
        Ok(toml::to_string(&table)?)
    }
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten_table(
    prefix: &str,
    table: &toml::Table,
    out: &mut BTreeMap<String, String>,
) -> Result<()> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            toml::Value::Table(nested) => flatten_table(&key, nested, out)?,
            other => {
                let text = value_text(&key, other)?;
                if let Some(existing) = out.get(&key) {
                    return Err(ConfigError::invalid_value(
                        key.clone(),
                        format!("{} / {}", existing, text),
                        "duplicate key after flattening",
                    ));
                }
                out.insert(key, text);
            }
        }
    }
    Ok(())
}

fn value_text(key: &str, value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(d) => Ok(d.to_string()),
        toml::Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    toml::Value::Array(_) | toml::Value::Table(_) => Err(
                        ConfigError::invalid_value(key, item.to_string(), "nested arrays and tables are not supported"),
                    ),
                    scalar => value_text(key, scalar),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(parts.join(LIST_SEPARATOR))
        }
        toml::Value::Table(_) => Err(ConfigError::invalid_value(
            key,
            value.to_string(),
            "expected a scalar value",
        )),
    }
}
