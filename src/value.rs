//! Value model - interpreter-native and host-native values
//!
//! The interpreter surfaces every result as one of six value kinds:
//! - `None`: the interpreter's null sentinel
//! - `Bool`, `Int`, `Float`, `Str`: primitive wrappers
//! - `Object`: any non-primitive interpreter object, possibly proxying a
//!   host object
//!
//! Decoding maps these onto [`HostValue`], the host platform's plain value
//! representation. Values with no conversion rule pass through unchanged.

use crate::host::{HostObject, HostType};

/// A value as produced by the embedded Python interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    /// The interpreter's null sentinel (`None`)
    None,
    /// Boolean wrapper
    Bool(bool),
    /// Integer wrapper
    Int(i64),
    /// Floating-point wrapper
    Float(f64),
    /// String wrapper
    Str(String),
    /// Any non-primitive interpreter object
    Object(ScriptObject),
}

impl ScriptValue {
    /// Get the Python-level type name of this value kind
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::None => "NoneType",
            ScriptValue::Bool(_) => "bool",
            ScriptValue::Int(_) => "int",
            ScriptValue::Float(_) => "float",
            ScriptValue::Str(_) => "str",
            ScriptValue::Object(_) => "object",
        }
    }

    /// Render this value as Python literal source text.
    ///
    /// Objects have no literal form (the host references them through
    /// script variables instead) and yield `None` here.
    pub fn to_literal(&self) -> Option<String> {
        match self {
            ScriptValue::None => Some("None".to_string()),
            ScriptValue::Bool(true) => Some("True".to_string()),
            ScriptValue::Bool(false) => Some("False".to_string()),
            ScriptValue::Int(i) => Some(i.to_string()),
            ScriptValue::Float(f) => Some(float_literal(*f)),
            ScriptValue::Str(s) => Some(quote(s)),
            ScriptValue::Object(_) => None,
        }
    }
}

/// Render a float so it reads back as a Python float, not an int
fn float_literal(f: f64) -> String {
    if f.is_nan() {
        "float(\"nan\")".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "float(\"inf\")".to_string()
        } else {
            "float(\"-inf\")".to_string()
        }
    } else {
        format!("{:?}", f)
    }
}

/// Quote and escape a string for splicing into Python source
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// An interpreter-level object, possibly wrapping a host object.
///
/// When the interpreter hands a host object to a script, it wraps it in a
/// proxy. The wrapper remembers the host object it stands for; `to_host`
/// is the interpreter's own foreign-object bridge back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptObject {
    class_name: String,
    host: Option<HostObject>,
}

impl ScriptObject {
    /// Create a plain interpreter object with no host proxy
    pub fn plain(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into(), host: None }
    }

    /// Create an interpreter object proxying a host object
    pub fn wrapping(class_name: impl Into<String>, host: HostObject) -> Self {
        Self { class_name: class_name.into(), host: Some(host) }
    }

    /// The interpreter-side class name of this object
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The host type this object proxies, if it wraps a host object
    pub fn proxy_type(&self) -> Option<HostType> {
        self.host.as_ref().map(HostObject::host_type)
    }

    /// Convert back to the wrapped host object (the interpreter's
    /// foreign-object bridge); `None` for plain interpreter objects
    pub fn to_host(&self) -> Option<HostObject> {
        self.host.clone()
    }
}

/// A decoded, host-native value.
///
/// Interpreter values the adapter does not special-case are carried through
/// unchanged in the `Script` variant.
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Host null
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A host object unwrapped from an interpreter proxy
    Object(HostObject),
    /// An interpreter value passed through unchanged
    Script(ScriptValue),
}

impl HostValue {
    /// Check whether this is the host null
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Get the boolean value, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            HostValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the host object, if this is an unwrapped object
    pub fn as_object(&self) -> Option<&HostObject> {
        match self {
            HostValue::Object(o) => Some(o),
            _ => None,
        }
    }
}
