//! Script Language Adapter Framework
//!
//! Each language implements the [`ScriptLanguage`] trait: decoding
//! interpreter values to host-native values and generating the source
//! fragments the host platform splices into user scripts. The host never
//! sees language-specific logic outside this surface.

pub mod framework;
pub mod python;

pub use framework::{InputMap, LanguageRegistry, OutputMap, ScriptLanguage, VariableMap, default_registry};
pub use python::PythonLanguage;
