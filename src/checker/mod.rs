mod arity;

pub use arity::{ArityChecker, DEFAULT_MAX_FILES, RECOGNIZED_EXTENSIONS};

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Source location of a reported violation.
///
/// Directory-scoped rules always report at the start of the file
/// (line 1, column 0) since no single line is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Location at the start of a file.
    #[must_use]
    pub const fn file_start() -> Self {
        Self { line: 1, column: 0 }
    }
}

/// A single reported rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub location: Location,
    pub message: String,
}

impl Violation {
    /// Create a violation anchored at the start of the file.
    #[must_use]
    pub const fn at_file_start(message: String) -> Self {
        Self {
            location: Location::file_start(),
            message,
        }
    }
}

/// Category of rule, matching the host engine's metadata vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Problem,
    Suggestion,
    Layout,
}

/// Self-description of a rule, surfaced to the host's plugin loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMeta {
    pub kind: RuleKind,
    pub description: String,
    /// Options schema. Empty: all configuration happens at construction.
    pub schema: Vec<serde_json::Value>,
}

/// A lint rule: a capability bundle of describe-self and evaluate-on-file.
///
/// Host integrations adapt this trait to their own plugin-loading
/// convention. `evaluate` never fails; a rule either reports one violation
/// for the file or stays silent.
pub trait Rule {
    /// Describe this rule for the host's metadata surface.
    fn meta(&self) -> RuleMeta;

    /// Evaluate a single file, returning at most one violation.
    fn evaluate(&self, path: &Path) -> Option<Violation>;
}

/// Sink for violations, decoupling rules from the host's reporting layer.
pub trait ReportSink {
    fn report(&mut self, path: &Path, violation: Violation);
}

/// Sink that collects reports into a vector (used by tests and drivers).
#[derive(Debug, Default)]
pub struct VecSink {
    pub reports: Vec<(PathBuf, Violation)>,
}

impl ReportSink for VecSink {
    fn report(&mut self, path: &Path, violation: Violation) {
        self.reports.push((path.to_path_buf(), violation));
    }
}

/// Run a rule over a list of files, forwarding violations to the sink.
///
/// Files are evaluated in the order given; the rule decides per file
/// whether anything is reported.
pub fn run_rule(rule: &dyn Rule, paths: &[PathBuf], sink: &mut dyn ReportSink) {
    for path in paths {
        if let Some(violation) = rule.evaluate(path) {
            sink.report(path, violation);
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
