//! Host platform surface - type identifiers, object handles, services
//!
//! The adapter never talks to host services directly; it only references
//! their registered script variables in generated text. The types here model
//! the host side of that contract: a type identifier usable as a registry
//! key, an opaque handle to a host object, marker types for the two services
//! generated scripts call into, and the context the host injects at
//! construction time.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use crate::config::AdapterConfig;

/// Identifies a host type by its `TypeId`, keeping the simple name around
/// for script parameter declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostType {
    id: TypeId,
    name: &'static str,
}

impl HostType {
    /// Get the identifier for a host type
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: simple_name(std::any::type_name::<T>()),
        }
    }

    /// The simple (unqualified) type name, e.g. `Dataset`
    pub fn simple_name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Strip the module path from a fully qualified type name
fn simple_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}

/// An opaque, shared handle to a host-native object.
///
/// This is what decoding an interpreter proxy yields: the host object the
/// interpreter wrapped, typed by [`HostType`] and recoverable through
/// `downcast_ref`. Equality is handle identity, not structural.
#[derive(Clone)]
pub struct HostObject {
    ty: HostType,
    value: Arc<dyn Any + Send + Sync>,
}

impl HostObject {
    /// Wrap a host object into a shared handle
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            ty: HostType::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// The host type of the wrapped object
    pub fn host_type(&self) -> HostType {
        self.ty
    }

    /// Borrow the wrapped object as a concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostObject").field(&self.ty.simple_name()).finish()
    }
}

impl PartialEq for HostObject {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && Arc::ptr_eq(&self.value, &other.value)
    }
}

impl Eq for HostObject {}

/// The host's command execution service.
///
/// Generated scripts reach it through its registered variable and call
/// `run(name, process, key, value, ...)` on it, which returns a future with
/// `get()`. Only the type is used host-side, as a parameter registry key.
#[derive(Debug)]
pub struct CommandService;

/// The host's module coordination service.
///
/// Generated scripts call `waitFor(future)` on it to block until a module
/// finishes, yielding a result object with `getOutput(key)`. Only the type
/// is used host-side, as a parameter registry key.
#[derive(Debug)]
pub struct ModuleService;

/// Handle to the host platform, supplied when an adapter is constructed.
#[derive(Debug, Clone, Default)]
pub struct Context {
    config: AdapterConfig,
}

impl Context {
    /// Create a context with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context carrying an adapter configuration
    pub fn with_config(config: AdapterConfig) -> Self {
        Self { config }
    }

    /// The adapter configuration the host supplied
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dataset;

    #[test]
    fn test_simple_name() {
        assert_eq!(HostType::of::<Dataset>().simple_name(), "Dataset");
        assert_eq!(HostType::of::<CommandService>().simple_name(), "CommandService");
        assert_eq!(HostType::of::<String>().simple_name(), "String");
    }

    #[test]
    fn test_host_type_identity() {
        assert_eq!(HostType::of::<Dataset>(), HostType::of::<Dataset>());
        assert_ne!(HostType::of::<Dataset>(), HostType::of::<CommandService>());
    }

    #[test]
    fn test_host_object_downcast() {
        let obj = HostObject::new(vec![1u8, 2, 3]);
        assert_eq!(obj.host_type(), HostType::of::<Vec<u8>>());
        assert_eq!(obj.downcast_ref::<Vec<u8>>(), Some(&vec![1u8, 2, 3]));
        assert!(obj.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_host_object_identity_equality() {
        let a = HostObject::new(String::from("img"));
        let b = a.clone();
        let c = HostObject::new(String::from("img"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
