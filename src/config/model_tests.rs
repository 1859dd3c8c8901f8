use super::*;

#[test]
fn default_files_match_source_layout() {
    let options = PresetOptions::default();
    assert_eq!(options.files, vec!["src/**/*.ts", "**/*.ts"]);
}

#[test]
fn default_ignores_skip_dependency_dirs() {
    let options = PresetOptions::default();
    assert_eq!(options.ignores, vec!["node_modules/", "dist/"]);
}

#[test]
fn default_limits() {
    let options = PresetOptions::default();
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(options.max_files_per_dir, DEFAULT_MAX_FILES);
}

#[test]
fn options_deserialize_from_toml_with_defaults() {
    let options: PresetOptions = toml::from_str(
        r#"
        max_files_per_dir = 5
        framework = "react"
        "#,
    )
    .unwrap();

    assert_eq!(options.max_files_per_dir, 5);
    assert_eq!(options.framework, Some(Framework::React));
    // Unspecified fields fall back to defaults.
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert_eq!(options.files, PresetOptions::default().files);
}

#[test]
fn options_deserialize_rule_overrides() {
    let options: PresetOptions = toml::from_str(
        r#"
        [rules]
        "no-console" = "error"
        "max-depth" = ["warn", 2]
        "#,
    )
    .unwrap();

    assert_eq!(options.rules["no-console"], RuleSetting::error());
    assert_eq!(options.rules["max-depth"].severity(), Severity::Warn);
}

#[test]
fn rule_setting_bare_severity_serializes_as_string() {
    let json = serde_json::to_value(RuleSetting::error()).unwrap();
    assert_eq!(json, serde_json::json!("error"));
}

#[test]
fn rule_setting_with_options_serializes_as_array() {
    let setting = RuleSetting::error_with(serde_json::json!({ "max": 4 }));
    let json = serde_json::to_value(&setting).unwrap();
    assert_eq!(json, serde_json::json!(["error", { "max": 4 }]));
}

#[test]
fn rule_setting_severity_accessor() {
    assert_eq!(RuleSetting::off().severity(), Severity::Off);
    assert_eq!(RuleSetting::warn().severity(), Severity::Warn);
    assert_eq!(
        RuleSetting::error_with(serde_json::json!(1)).severity(),
        Severity::Error
    );
}

#[test]
fn composed_config_rule_severity_lookup() {
    let mut rules = RuleTable::new();
    rules.insert("no-undef".to_string(), RuleSetting::error());
    let config = ComposedConfig {
        files: vec![],
        ignores: vec![],
        globals: vec![],
        rules,
        max_files_per_dir: 10,
    };

    assert_eq!(config.rule_severity("no-undef"), Some(Severity::Error));
    assert_eq!(config.rule_severity("no-console"), None);
}

#[test]
fn composed_config_builds_arity_checker() {
    let config = ComposedConfig {
        files: vec![],
        ignores: vec![],
        globals: vec![],
        rules: RuleTable::new(),
        max_files_per_dir: 4,
    };

    let checker = config.arity_checker().unwrap();
    assert_eq!(checker.max_files(), 4);
}

#[test]
fn framework_bundle_name() {
    assert_eq!(Framework::React.bundle_name(), "react");
}
