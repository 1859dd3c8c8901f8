//! Preset composition.
//!
//! Stacks the base rule bundles, derives complexity rules from the
//! options, merges the framework bundle when flagged, and applies user
//! overrides last. The result is a [`ComposedConfig`] the host engine
//! consumes, with the arity rule registered under `max_files_per_dir`.

use serde_json::json;

use crate::error::{ArityGuardError, Result};

use super::bundles::load_bundle;
use super::model::{ComposedConfig, PresetOptions, RuleSetting, RuleTable};

/// Bundles stacked as the preset's base, in merge order.
const BASE_BUNDLES: &[&str] = &["recommended", "strict", "stylistic", "unicorn"];

/// Compose a configuration from the given options.
///
/// Merge order (later wins):
/// 1. Base bundles (`recommended`, `strict`, `stylistic`, `unicorn`)
/// 2. Complexity rules derived from `max_depth`
/// 3. Framework bundle, if `framework` is set
/// 4. User overrides from `rules`
///
/// # Errors
/// Returns an error if any glob pattern in `files`/`ignores` is invalid,
/// or if `max_depth` or `max_files_per_dir` is zero.
pub fn compose(options: PresetOptions) -> Result<ComposedConfig> {
    validate_patterns(&options.files)?;
    validate_patterns(&options.ignores)?;

    if options.max_depth == 0 {
        return Err(ArityGuardError::Config(
            "max_depth must be greater than 0".to_string(),
        ));
    }
    if options.max_files_per_dir == 0 {
        return Err(ArityGuardError::Config(
            "max_files_per_dir must be greater than 0".to_string(),
        ));
    }

    let mut rules = RuleTable::new();
    for bundle in BASE_BUNDLES {
        merge_rules(&mut rules, load_bundle(bundle)?);
    }

    merge_rules(&mut rules, complexity_rules(options.max_depth));

    if let Some(framework) = options.framework {
        merge_rules(&mut rules, load_bundle(framework.bundle_name())?);
    }

    merge_rules(&mut rules, options.rules);

    Ok(ComposedConfig {
        files: options.files,
        ignores: options.ignores,
        globals: vec!["node".to_string(), "browser".to_string()],
        rules,
        max_files_per_dir: options.max_files_per_dir,
    })
}

/// Complexity rules parameterized by the nesting-depth limit.
fn complexity_rules(max_depth: usize) -> RuleTable {
    let mut rules = RuleTable::new();
    rules.insert(
        "@typescript-eslint/no-unused-vars".to_string(),
        RuleSetting::error_with(json!({ "argsIgnorePattern": "^_" })),
    );
    rules.insert(
        "max-depth".to_string(),
        RuleSetting::error_with(json!(max_depth)),
    );
    rules.insert(
        "max-nested-callbacks".to_string(),
        RuleSetting::error_with(json!(3)),
    );
    rules.insert("complexity".to_string(), RuleSetting::error_with(json!(10)));
    rules
}

fn validate_patterns(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        globset::Glob::new(pattern).map_err(|e| ArityGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

/// Merge `incoming` into `target`, later values winning per rule name.
///
/// An existing key keeps its original table position, so merge order
/// does not perturb serialization order.
fn merge_rules(target: &mut RuleTable, incoming: RuleTable) {
    for (name, setting) in incoming {
        target.insert(name, setting);
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
