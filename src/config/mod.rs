mod loader;
mod model;
mod overrides;
mod validation;

pub use loader::{CONFIG_FILE_NAME, FileConfigLoader};
pub use model::{ComparisonOperator, Config, DefaultsConfig, LanguageRules, MetricKind, ThresholdRule};
pub use overrides::AnalysisOverride;
pub use validation::{ThresholdRange, range_for, validate_threshold};
