//! # Pyglue - Python script-language adapter
//!
//! Glue between a plugin-driven host platform and an embedded Python
//! interpreter.
//!
//! Pyglue provides:
//! - A tagged value model for interpreter-native values and their decoded
//!   host-native counterparts
//! - A generic script-language trait with a pluggable language registry
//! - A Python adapter that decodes interpreter values and generates the
//!   source fragments the host splices into user scripts (parameter
//!   declarations, placeholder assignments, service calls, command
//!   invocations with output extraction)
//! - TOML-backed adapter configuration for well-known service variables

pub mod adapter;
pub mod config;
pub mod host;
pub mod value;

// Re-exports for convenient access
pub use adapter::{InputMap, LanguageRegistry, OutputMap, PythonLanguage, ScriptLanguage, VariableMap, default_registry};
pub use config::AdapterConfig;
pub use host::{CommandService, Context, HostObject, HostType, ModuleService};
pub use value::{HostValue, ScriptObject, ScriptValue};

/// Result type alias for Pyglue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Pyglue operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parameter of type {0} not known to language; use register_parameter() first")]
    UnresolvedParameter(&'static str),

    #[error("No script language registered for: {0}")]
    UnknownLanguage(String),
}
