//! Configuration for relationship guessing

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::GuessError;
use super::{
    ForeignKeyPattern, Heuristic, PatternHeuristic, PrimaryKeyHeuristic, TableColumnHeuristic,
};
use crate::models::catalog::is_yaml_path;

/// Heuristics that can be selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    /// Same name as a non-generic primary key
    PrimaryKey,
    /// `<singular>_id` referencing `<plural>.id`
    TableColumn,
    /// User supplied name patterns
    Pattern,
}

impl HeuristicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicKind::PrimaryKey => "primary-key",
            HeuristicKind::TableColumn => "table-column",
            HeuristicKind::Pattern => "pattern",
        }
    }
}

impl std::str::FromStr for HeuristicKind {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary-key" => Ok(HeuristicKind::PrimaryKey),
            "table-column" => Ok(HeuristicKind::TableColumn),
            "pattern" => Ok(HeuristicKind::Pattern),
            other => Err(GuessError::Parse(format!("Unknown heuristic: {}", other))),
        }
    }
}

/// Uncompiled pattern rule as it appears in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Regular expression tested against candidate column names
    pub pattern: String,
    /// Table owning the referenced primary key
    pub table: String,
    /// Referenced primary-key column
    pub column: String,
}

/// Configuration for relationship guessing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessConfig {
    /// Heuristics to apply, in order
    #[serde(default = "default_heuristics")]
    pub heuristics: Vec<HeuristicKind>,

    /// Rules for the pattern heuristic
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
}

fn default_heuristics() -> Vec<HeuristicKind> {
    vec![HeuristicKind::PrimaryKey, HeuristicKind::TableColumn]
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            heuristics: default_heuristics(),
            patterns: Vec::new(),
        }
    }
}

impl GuessConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from an empty heuristic list
    pub fn builder() -> GuessConfigBuilder {
        GuessConfigBuilder::default()
    }

    /// Parse a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, GuessError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self, GuessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file; `.yaml` and `.yml` are read as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GuessError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        if is_yaml_path(path) {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Selected heuristic kinds with duplicates removed. Pattern rules imply
    /// the pattern heuristic even when it is not listed.
    pub fn selected(&self) -> Vec<HeuristicKind> {
        let mut kinds: Vec<HeuristicKind> = Vec::with_capacity(self.heuristics.len() + 1);
        for kind in &self.heuristics {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        if !self.patterns.is_empty() && !kinds.contains(&HeuristicKind::Pattern) {
            kinds.push(HeuristicKind::Pattern);
        }
        kinds
    }

    /// Compile the configured heuristics
    ///
    /// Every pattern is compiled here, so a malformed one is reported before
    /// any inference runs.
    pub fn build_heuristics(&self) -> Result<Vec<Box<dyn Heuristic>>, GuessError> {
        let mut heuristics: Vec<Box<dyn Heuristic>> = Vec::new();
        for kind in self.selected() {
            match kind {
                HeuristicKind::PrimaryKey => heuristics.push(Box::new(PrimaryKeyHeuristic::new())),
                HeuristicKind::TableColumn => {
                    heuristics.push(Box::new(TableColumnHeuristic::new()))
                }
                HeuristicKind::Pattern => {
                    if self.patterns.is_empty() {
                        warn!("Pattern heuristic selected without any pattern rules");
                    }
                    let patterns = self
                        .patterns
                        .iter()
                        .map(|rule| ForeignKeyPattern::new(&rule.pattern, &rule.table, &rule.column))
                        .collect::<Result<Vec<_>, _>>()?;
                    heuristics.push(Box::new(PatternHeuristic::new(patterns)));
                }
            }
        }
        Ok(heuristics)
    }
}

/// Builder for GuessConfig
#[derive(Debug)]
pub struct GuessConfigBuilder {
    config: GuessConfig,
}

impl Default for GuessConfigBuilder {
    fn default() -> Self {
        Self {
            config: GuessConfig {
                heuristics: Vec::new(),
                patterns: Vec::new(),
            },
        }
    }
}

impl GuessConfigBuilder {
    /// Append a heuristic
    pub fn heuristic(mut self, kind: HeuristicKind) -> Self {
        self.config.heuristics.push(kind);
        self
    }

    /// Append a pattern rule
    pub fn pattern(
        mut self,
        pattern: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        self.config.patterns.push(PatternRule {
            pattern: pattern.into(),
            table: table.into(),
            column: column.into(),
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> GuessConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuessConfig::default();
        assert_eq!(
            config.selected(),
            vec![HeuristicKind::PrimaryKey, HeuristicKind::TableColumn]
        );
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = GuessConfig::builder()
            .heuristic(HeuristicKind::TableColumn)
            .pattern("^acct_.*", "accounts", "id")
            .build();

        assert_eq!(
            config.selected(),
            vec![HeuristicKind::TableColumn, HeuristicKind::Pattern]
        );
        let heuristics = config.build_heuristics().unwrap();
        let names: Vec<&str> = heuristics.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["table-column", "pattern"]);
    }

    #[test]
    fn test_duplicate_kinds_collapse() {
        let config = GuessConfig::builder()
            .heuristic(HeuristicKind::PrimaryKey)
            .heuristic(HeuristicKind::PrimaryKey)
            .build();
        assert_eq!(config.build_heuristics().unwrap().len(), 1);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
heuristics: [primary-key, pattern]
patterns:
  - pattern: "^acct_.*"
    table: accounts
    column: id
"#;
        let config = GuessConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.heuristics,
            vec![HeuristicKind::PrimaryKey, HeuristicKind::Pattern]
        );
        assert_eq!(config.patterns[0].table, "accounts");
    }

    #[test]
    fn test_missing_heuristics_use_default() {
        let config = GuessConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GuessConfig::default());
    }

    #[test]
    fn test_invalid_pattern_fails_when_building() {
        let config = GuessConfig::builder().pattern("[unclosed", "accounts", "id").build();
        let err = config.build_heuristics().err().unwrap();
        assert!(matches!(err, GuessError::InvalidPattern { .. }));
    }

    #[test]
    fn test_unknown_kind() {
        assert!("fuzzy".parse::<HeuristicKind>().is_err());
        assert_eq!(
            "table-column".parse::<HeuristicKind>().unwrap(),
            HeuristicKind::TableColumn
        );
    }
}
