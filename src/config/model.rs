use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checker::{ArityChecker, DEFAULT_MAX_FILES};
use crate::error::Result;

/// Default nesting-depth limit (no nesting allowed).
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Ordered rule table; insertion order is serialization order.
pub type RuleTable = IndexMap<String, RuleSetting>;

/// Severity of a rule setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    Error,
}

/// A rule setting in the host engine's shorthand shape: either a bare
/// severity (`"error"`) or a severity with options (`["error", {...}]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Severity(Severity),
    WithOptions(Severity, serde_json::Value),
}

impl RuleSetting {
    #[must_use]
    pub const fn error() -> Self {
        Self::Severity(Severity::Error)
    }

    #[must_use]
    pub const fn warn() -> Self {
        Self::Severity(Severity::Warn)
    }

    #[must_use]
    pub const fn off() -> Self {
        Self::Severity(Severity::Off)
    }

    #[must_use]
    pub const fn error_with(options: serde_json::Value) -> Self {
        Self::WithOptions(Severity::Error, options)
    }

    /// Severity of this setting, ignoring any options payload.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Severity(severity) | Self::WithOptions(severity, _) => *severity,
        }
    }
}

/// Framework flag enabling an extra rule bundle during composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
}

impl Framework {
    /// Name of the rule bundle this framework pulls in.
    #[must_use]
    pub const fn bundle_name(self) -> &'static str {
        match self {
            Self::React => "react",
        }
    }
}

/// Options accepted by the compose entry point.
///
/// All fields have defaults mirroring the preset's out-of-the-box
/// behavior, so `PresetOptions::default()` composes a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresetOptions {
    /// Glob patterns for files to lint.
    pub files: Vec<String>,

    /// Glob patterns to ignore.
    pub ignores: Vec<String>,

    /// Maximum nesting depth (feeds the `max-depth` rule).
    pub max_depth: usize,

    /// Maximum source files per directory (feeds the arity rule).
    pub max_files_per_dir: usize,

    /// Optional framework flag adding framework-specific rules.
    pub framework: Option<Framework>,

    /// Rule overrides applied last (last wins).
    pub rules: RuleTable,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            files: vec!["src/**/*.ts".to_string(), "**/*.ts".to_string()],
            ignores: vec!["node_modules/".to_string(), "dist/".to_string()],
            max_depth: DEFAULT_MAX_DEPTH,
            max_files_per_dir: DEFAULT_MAX_FILES,
            framework: None,
            rules: RuleTable::new(),
        }
    }
}

/// Composed configuration handed to the host engine.
///
/// Serializes to JSON with deterministic rule order (rule tables are
/// insertion-ordered maps).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComposedConfig {
    pub files: Vec<String>,
    pub ignores: Vec<String>,
    /// Ambient global environments exposed to linted code.
    pub globals: Vec<String>,
    pub rules: RuleTable,
    /// Limit registered for the files-per-directory rule.
    pub max_files_per_dir: usize,
}

impl ComposedConfig {
    /// Serialize for the host engine.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective severity of a rule, if it is configured.
    #[must_use]
    pub fn rule_severity(&self, name: &str) -> Option<Severity> {
        self.rules.get(name).map(RuleSetting::severity)
    }

    /// Build the arity checker registered by this config.
    ///
    /// # Errors
    /// Returns an error if the configured limit is zero.
    pub fn arity_checker(&self) -> Result<ArityChecker> {
        ArityChecker::new(self.max_files_per_dir)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
