//! Error types for linkmesh
//!
//! Only misuse and configuration problems are errors. Absent targets and
//! unreachable destinations are ordinary `bool` / `Option` results on the
//! graph API and never surface here.

mod macros;

use thiserror::Error;

use crate::graph::NodeHandle;

/// Broad classification of a [`GraphError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A handle was used against a store that does not own it
    Misuse,
    /// Configuration could not be parsed or failed validation
    Config,
    /// Generic failure (IO and similar)
    Failure,
}

/// Why a node handle was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleFault {
    /// The handle was minted by a different store
    ForeignStore,
    /// The node the handle referred to has been removed
    Stale,
}

impl std::fmt::Display for HandleFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandleFault::ForeignStore => f.write_str("owned by another store"),
            HandleFault::Stale => f.write_str("node has been removed"),
        }
    }
}

/// Errors that can occur during linkmesh operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid node handle {handle}: {fault}")]
    InvalidHandle {
        handle: NodeHandle,
        fault: HandleFault,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a handle this store cannot resolve
    pub fn invalid_handle(handle: NodeHandle, fault: HandleFault) -> Self {
        GraphError::InvalidHandle { handle, fault }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the class of this error
    pub fn class(&self) -> ErrorClass {
        match self {
            GraphError::InvalidHandle { .. } => ErrorClass::Misuse,
            GraphError::InvalidValue { .. } | GraphError::Toml(_) | GraphError::TomlSer(_) => {
                ErrorClass::Config
            }
            GraphError::Io(_) | GraphError::Other(_) => ErrorClass::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::InvalidHandle {
                fault: HandleFault::ForeignStore,
                ..
            } => "foreign_handle",
            GraphError::InvalidHandle {
                fault: HandleFault::Stale,
                ..
            } => "stale_handle",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::TomlSer(_) => "toml_serialize_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let class = match self.class() {
            ErrorClass::Misuse => "misuse",
            ErrorClass::Config => "config",
            ErrorClass::Failure => "failure",
        };
        let mut error_obj = serde_json::json!({
            "class": class,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::InvalidHandle { handle, .. } = self {
            error_obj["handle"] = serde_json::json!({
                "store": handle.store_id(),
                "index": handle.index(),
                "generation": handle.generation(),
            });
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for linkmesh operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    #[test]
    fn test_invalid_value_message() {
        let err = GraphError::invalid_value("search.recursion_limit", 0);
        assert_eq!(err.to_string(), "invalid search.recursion_limit: 0");
        assert_eq!(err.class(), ErrorClass::Config);
        assert_eq!(err.error_type(), "invalid_value");
    }

    #[test]
    fn test_stale_handle_is_misuse() {
        let mut store = GraphStore::new();
        let node = store.add(1);
        assert!(store.remove(node));

        let err = store.find_path(node, node).unwrap_err();
        assert_eq!(err.class(), ErrorClass::Misuse);
        assert_eq!(err.error_type(), "stale_handle");
        assert!(err.to_string().contains("node has been removed"));
    }

    #[test]
    fn test_to_json_includes_handle() {
        let mut other = GraphStore::new();
        let foreign = other.add("x");
        let store: GraphStore<&str> = GraphStore::new();

        let err = store.find_path(foreign, foreign).unwrap_err();
        let json = err.to_json();
        assert_eq!(json["error"]["class"], "misuse");
        assert_eq!(json["error"]["type"], "foreign_handle");
        assert_eq!(json["error"]["handle"]["index"], 0);
        assert_eq!(json["error"]["handle"]["generation"], 0);
    }
}
