//! Core adapter framework
//!
//! Defines the trait and registry that all script language adapters plug
//! into. The host platform talks to languages only through this surface.

use crate::{Error, Result};
use crate::host::HostType;
use crate::value::{HostValue, ScriptValue};
use indexmap::IndexMap;

/// Module-call input arguments: input name to pre-rendered value expression,
/// in declaration order
pub type InputMap = IndexMap<String, String>;

/// Module-call outputs: output slot name to the host variable receiving it
pub type OutputMap = IndexMap<String, String>;

/// Auxiliary value-to-variable mapping for module calls.
///
/// Accepted by `encode_module_call` for contract compatibility; current
/// encodings give it no behavior.
pub type VariableMap = IndexMap<String, String>;

/// Trait for script language adapters
///
/// Each language adapter is responsible for:
/// 1. Identifying itself by name and file extensions
/// 2. Decoding interpreter-native values into host-native values
/// 3. Generating the source fragments the host splices into user scripts
pub trait ScriptLanguage: Send + Sync + std::fmt::Debug {
    /// Get the language name (for display and lookup)
    fn name(&self) -> &str;

    /// Get file extensions this language handles
    fn extensions(&self) -> &[&str];

    /// Check if this language answers to a name or extension
    fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
            || self.extensions().iter().any(|ext| ext.eq_ignore_ascii_case(name))
    }

    /// Decode an interpreter value into a host-native value.
    ///
    /// The default passes the value through unchanged; adapters override
    /// this with their interpreter's conversion rules.
    fn decode(&self, value: ScriptValue) -> HostValue {
        HostValue::Script(value)
    }

    /// Register the script variable name to use for a host type.
    ///
    /// First registration wins; later calls for the same type are ignored.
    fn register_parameter(&mut self, ty: HostType, variable: &str);

    /// Generate a typed input-parameter declaration for a registered type
    fn encode_parameter(&self, ty: HostType) -> Result<String>;

    /// Generate an assignment of a variable to the language's
    /// undefined-value placeholder
    fn encode_unknown_variable(&self, variable: &str) -> String;

    /// Generate an assignment of a variable from a service method call
    fn encode_variable_from_service(
        &self,
        variable: &str,
        service_variable: &str,
        service_method: &str,
    ) -> String;

    /// Generate an invocation of a host module/command, including output
    /// extraction when outputs are requested
    fn encode_module_call(
        &self,
        module: &str,
        process: bool,
        inputs: &InputMap,
        outputs: &OutputMap,
        variables: &VariableMap,
    ) -> Result<String>;
}

/// Registry of script languages
#[derive(Default)]
pub struct LanguageRegistry {
    languages: Vec<Box<dyn ScriptLanguage>>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language
    pub fn register(&mut self, language: impl ScriptLanguage + 'static) {
        self.languages.push(Box::new(language));
    }

    /// Find a language by name or extension
    pub fn find(&self, name: &str) -> Option<&dyn ScriptLanguage> {
        self.languages
            .iter()
            .find(|l| l.matches(name))
            .map(|l| l.as_ref())
    }

    /// Find a language by name or extension, mutably
    pub fn find_mut(&mut self, name: &str) -> Option<&mut (dyn ScriptLanguage + 'static)> {
        self.languages
            .iter_mut()
            .find(|l| l.matches(name))
            .map(|l| l.as_mut())
    }

    /// Look up a language, failing if none is registered for the name
    pub fn language_for(&self, name: &str) -> Result<&dyn ScriptLanguage> {
        self.find(name)
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))
    }

    /// Get all registered languages
    pub fn languages(&self) -> &[Box<dyn ScriptLanguage>] {
        &self.languages
    }
}

/// Create a default registry with all built-in languages
pub fn default_registry() -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    registry.register(super::python::PythonLanguage::new(crate::host::Context::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestLanguage;

    impl ScriptLanguage for TestLanguage {
        fn name(&self) -> &str { "test" }
        fn extensions(&self) -> &[&str] { &["tst"] }
        fn register_parameter(&mut self, _ty: HostType, _variable: &str) {}
        fn encode_parameter(&self, ty: HostType) -> Result<String> {
            Err(Error::UnresolvedParameter(ty.simple_name()))
        }
        fn encode_unknown_variable(&self, variable: &str) -> String {
            variable.to_string()
        }
        fn encode_variable_from_service(&self, variable: &str, _s: &str, _m: &str) -> String {
            variable.to_string()
        }
        fn encode_module_call(
            &self,
            _module: &str,
            _process: bool,
            _inputs: &InputMap,
            _outputs: &OutputMap,
            _variables: &VariableMap,
        ) -> Result<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_registry() {
        let mut registry = LanguageRegistry::new();
        registry.register(TestLanguage);

        assert!(registry.find("test").is_some());
        assert!(registry.find("TST").is_some());
        assert!(registry.find("other").is_none());
    }

    #[test]
    fn test_language_for_unknown() {
        let registry = LanguageRegistry::new();
        let err = registry.language_for("lua").unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage(name) if name == "lua"));
    }

    #[test]
    fn test_default_decode_is_identity() {
        let lang = TestLanguage;
        let value = ScriptValue::Str("opaque".into());
        assert_eq!(lang.decode(value.clone()), HostValue::Script(value));
    }

    #[test]
    fn test_default_registry_has_python() {
        let registry = default_registry();
        assert!(registry.find("Python").is_some());
        assert!(registry.find("py").is_some());
    }
}
