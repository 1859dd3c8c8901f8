mod bundles;
mod compose;
mod model;

pub use bundles::{AVAILABLE_BUNDLES, load_bundle};
pub use compose::compose;
pub use model::{
    ComposedConfig, DEFAULT_MAX_DEPTH, Framework, PresetOptions, RuleSetting, RuleTable, Severity,
};
