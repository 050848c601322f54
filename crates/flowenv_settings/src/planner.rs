//! Planner selection.
//!
//! The planner itself lives in the host engine; here it is only an opaque
//! choice that decides which factory identifiers are handed over.

use crate::defaults::{BLINK_EXECUTOR_FACTORY, BLINK_PLANNER_FACTORY};
use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlannerKind {
    /// Blink planner (default)
    #[default]
    Blink,
    /// Whatever planner the engine finds first
    Any,
}

impl PlannerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlannerKind::Blink => "BLINK",
            PlannerKind::Any => "ANY",
        }
    }

    /// Planner factory identifier, if this kind pins one.
    pub fn planner_factory(&self) -> Option<&'static str> {
        match self {
            PlannerKind::Blink => Some(BLINK_PLANNER_FACTORY),
            PlannerKind::Any => None,
        }
    }

    /// Executor factory identifier, if this kind pins one.
    pub fn executor_factory(&self) -> Option<&'static str> {
        match self {
            PlannerKind::Blink => Some(BLINK_EXECUTOR_FACTORY),
            PlannerKind::Any => None,
        }
    }
}

impl fmt::Display for PlannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlannerKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BLINK" => Ok(PlannerKind::Blink),
            "ANY" => Ok(PlannerKind::Any),
            _ => Err(ConfigError::invalid_argument(format!(
                "Invalid planner: '{}'. Expected: BLINK or ANY",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blink_pins_factories() {
        assert_eq!(PlannerKind::Blink.planner_factory(), Some(BLINK_PLANNER_FACTORY));
        assert_eq!(PlannerKind::Blink.executor_factory(), Some(BLINK_EXECUTOR_FACTORY));
    }

    #[test]
    fn any_leaves_factories_open() {
        assert_eq!(PlannerKind::Any.planner_factory(), None);
        assert_eq!(PlannerKind::Any.executor_factory(), None);
    }

    #[test]
    fn parse_round_trips_display() {
        for kind in [PlannerKind::Blink, PlannerKind::Any] {
            assert_eq!(kind.to_string().parse::<PlannerKind>().unwrap(), kind);
        }
        assert_eq!("blink".parse::<PlannerKind>().unwrap(), PlannerKind::Blink);
        assert!("old".parse::<PlannerKind>().is_err());
    }
}
