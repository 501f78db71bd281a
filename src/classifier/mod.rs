mod gitignore;
mod ruleset;

pub use gitignore::read_gitignore_patterns;
pub use ruleset::ClassificationRuleSet;
