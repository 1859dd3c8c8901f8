pub mod checker;
pub mod config;
pub mod error;
pub mod fslist;

pub use checker::{ArityChecker, Location, Rule, RuleKind, RuleMeta, Violation};
pub use config::{ComposedConfig, PresetOptions, compose};
pub use error::{ArityGuardError, Result};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
