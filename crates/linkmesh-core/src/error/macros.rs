//! Error macros for linkmesh

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a node handle
#[macro_export]
macro_rules! bail_handle {
    ($handle:expr, $fault:expr) => {
        return Err($crate::error::GraphError::invalid_handle($handle, $fault))
    };
}
