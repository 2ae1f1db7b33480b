//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default node count up to which `auto` keeps the call-stack search
pub const DEFAULT_RECURSION_LIMIT: usize = 1024;

/// Graph configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Path search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the minimum-cost search walks the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// Recursive below `recursion_limit` nodes, iterative above
    #[default]
    Auto,
    /// Call-stack recursion
    Recursive,
    /// Explicit frame stack
    Iterative,
}

impl SearchStrategy {
    /// Pick a concrete strategy for a graph holding `node_count` nodes
    pub fn resolve(self, node_count: usize, recursion_limit: usize) -> SearchStrategy {
        match self {
            SearchStrategy::Auto if node_count <= recursion_limit => SearchStrategy::Recursive,
            SearchStrategy::Auto => SearchStrategy::Iterative,
            other => other,
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Auto => f.write_str("auto"),
            SearchStrategy::Recursive => f.write_str("recursive"),
            SearchStrategy::Iterative => f.write_str("iterative"),
        }
    }
}

/// Configuration for the path search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search strategy: "auto", "recursive" or "iterative"
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// Largest graph `auto` will search recursively
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            recursion_limit: default_recursion_limit(),
        }
    }
}

/// Configuration for structured logging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive or bare level (e.g. "debug", "linkmesh_core=trace")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,

    /// Shorthand for debug level when `level` is unset
    #[serde(default)]
    pub verbose: bool,
}

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_by_size() {
        assert_eq!(
            SearchStrategy::Auto.resolve(10, 10),
            SearchStrategy::Recursive
        );
        assert_eq!(
            SearchStrategy::Auto.resolve(11, 10),
            SearchStrategy::Iterative
        );
    }

    #[test]
    fn test_explicit_strategy_ignores_size() {
        assert_eq!(
            SearchStrategy::Recursive.resolve(1_000_000, 1),
            SearchStrategy::Recursive
        );
        assert_eq!(
            SearchStrategy::Iterative.resolve(0, 1024),
            SearchStrategy::Iterative
        );
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(SearchStrategy::Auto.to_string(), "auto");
        assert_eq!(SearchStrategy::Iterative.to_string(), "iterative");
    }
}
