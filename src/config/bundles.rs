use crate::error::{ArityGuardError, Result};

use super::model::RuleTable;

/// Available rule bundle names.
pub const AVAILABLE_BUNDLES: &[&str] = &["recommended", "strict", "stylistic", "unicorn", "react"];

/// Load a built-in rule bundle by name.
///
/// # Errors
/// Returns an error if the bundle name is unknown.
pub fn load_bundle(name: &str) -> Result<RuleTable> {
    let content = match name {
        "recommended" => BUNDLE_RECOMMENDED,
        "strict" => BUNDLE_STRICT,
        "stylistic" => BUNDLE_STYLISTIC,
        "unicorn" => BUNDLE_UNICORN,
        "react" => BUNDLE_REACT,
        _ => {
            return Err(ArityGuardError::Config(format!(
                "Unknown rule bundle: '{}'. Available bundles: {}",
                name,
                AVAILABLE_BUNDLES.join(", ")
            )));
        }
    };

    toml::from_str(content)
        .map_err(|e| ArityGuardError::Config(format!("Failed to parse bundle '{name}': {e}")))
}

// Base correctness rules, always on.
const BUNDLE_RECOMMENDED: &str = r#"
"no-unused-vars" = "error"
"no-undef" = "error"
"no-dupe-keys" = "error"
"no-duplicate-case" = "error"
"no-unreachable" = "error"
"no-constant-condition" = "error"
"no-empty-pattern" = "error"
"no-self-assign" = "error"
"no-fallthrough" = "error"
"use-isnan" = "error"
"valid-typeof" = "error"
"#;

// Strict typed-language rules.
const BUNDLE_STRICT: &str = r#"
"@typescript-eslint/no-explicit-any" = "error"
"@typescript-eslint/no-non-null-assertion" = "error"
"@typescript-eslint/ban-ts-comment" = "error"
"@typescript-eslint/no-namespace" = "error"
"@typescript-eslint/prefer-as-const" = "error"
"@typescript-eslint/no-extraneous-class" = "error"
"#;

// Stylistic consistency rules.
const BUNDLE_STYLISTIC: &str = r#"
"prefer-const" = "error"
"@typescript-eslint/consistent-type-definitions" = ["error", "interface"]
"@typescript-eslint/array-type" = ["error", { default = "array-simple" }]
"@typescript-eslint/consistent-indexed-object-style" = "error"
"@typescript-eslint/no-inferrable-types" = "error"
"#;

// Opinionated hygiene rules.
const BUNDLE_UNICORN: &str = r#"
"unicorn/filename-case" = ["error", { case = "kebabCase" }]
"unicorn/no-null" = "error"
"unicorn/prefer-node-protocol" = "error"
"unicorn/no-array-for-each" = "error"
"unicorn/explicit-length-check" = "error"
"unicorn/prevent-abbreviations" = "warn"
"#;

// Framework bundle, merged only when the framework flag is set.
const BUNDLE_REACT: &str = r#"
"react/jsx-key" = "error"
"react/no-array-index-key" = "warn"
"react-hooks/rules-of-hooks" = "error"
"react-hooks/exhaustive-deps" = "warn"
"#;

#[cfg(test)]
#[path = "bundles_tests.rs"]
mod tests;
