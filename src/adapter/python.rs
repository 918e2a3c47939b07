//! Python language adapter
//!
//! Decodes interpreter values into host-native values and generates the
//! Python source fragments the host platform splices into user scripts.

use std::collections::HashMap;

use crate::{Error, Result};
use crate::host::{CommandService, Context, HostType, ModuleService};
use crate::value::{HostValue, ScriptValue};
use super::framework::{InputMap, OutputMap, ScriptLanguage, VariableMap};

// Python literal tokens, kept in one place so the encoders cannot drift.
const TRUE_LITERAL: &str = "True";
const FALSE_LITERAL: &str = "False";
const UNKNOWN_PLACEHOLDER: &str = "?";
const PARAMETER_PREFIX: &str = "# @";
const FUTURE_VARIABLE: &str = "modfuture";
const RESULT_VARIABLE: &str = "modres";

/// Python language adapter
#[derive(Debug)]
pub struct PythonLanguage {
    context: Context,
    parameters: HashMap<HostType, String>,
}

impl PythonLanguage {
    /// Create a new Python adapter for a host context.
    ///
    /// The parameter registry starts empty; the host registers every type
    /// it needs before requesting fragments that reference it. Entries are
    /// never evicted - the key space is the host's own plugin set, which is
    /// small and fixed.
    pub fn new(context: Context) -> Self {
        Self {
            context,
            parameters: HashMap::new(),
        }
    }

    /// The host context this adapter was constructed with
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Resolve the script variable registered for a host type
    fn script_parameter(&self, ty: HostType) -> Result<&str> {
        self.parameters
            .get(&ty)
            .map(String::as_str)
            .ok_or(Error::UnresolvedParameter(ty.simple_name()))
    }

    /// Build the command service invocation expression
    fn encode_command_run(&self, command: &str, process: bool, inputs: &InputMap) -> Result<String> {
        let service = self.script_parameter(HostType::of::<CommandService>())?;
        let flag = if process { TRUE_LITERAL } else { FALSE_LITERAL };
        let mut run = format!("{}.run(\"{}\", {}", service, command, flag);
        for (name, value) in inputs {
            run.push_str(&format!(", \"{}\", {}", name, value));
        }
        run.push(')');
        Ok(run)
    }

    /// Build the wait-and-extract block appended after a multi-output call
    fn encode_output_variables(&self, outputs: &OutputMap) -> Result<String> {
        let service = self.script_parameter(HostType::of::<ModuleService>())?;
        let mut block = format!("\n{} = {}.waitFor({})", RESULT_VARIABLE, service, FUTURE_VARIABLE);
        for (slot, variable) in outputs {
            block.push_str(&format!("\n{} = {}.getOutput(\"{}\")", variable, RESULT_VARIABLE, slot));
        }
        Ok(block)
    }
}

impl ScriptLanguage for PythonLanguage {
    fn name(&self) -> &str {
        "Python"
    }

    fn extensions(&self) -> &[&str] {
        &["py"]
    }

    fn decode(&self, value: ScriptValue) -> HostValue {
        match value {
            ScriptValue::None => HostValue::Null,
            ScriptValue::Bool(b) => HostValue::Bool(b),
            ScriptValue::Int(i) => HostValue::Int(i),
            ScriptValue::Float(f) => HostValue::Float(f),
            ScriptValue::Str(s) => HostValue::Str(s),
            ScriptValue::Object(obj) => {
                // Unwrap interpreter objects when they wrap host ones.
                match obj.to_host() {
                    Some(host) => HostValue::Object(host),
                    None => HostValue::Script(ScriptValue::Object(obj)),
                }
            }
        }
    }

    fn register_parameter(&mut self, ty: HostType, variable: &str) {
        if !self.parameters.contains_key(&ty) {
            tracing::debug!("registering script parameter {} -> {}", ty, variable);
            self.parameters.insert(ty, variable.to_string());
        }
    }

    fn encode_parameter(&self, ty: HostType) -> Result<String> {
        let variable = self.script_parameter(ty)?;
        Ok(format!("{}{} {}", PARAMETER_PREFIX, ty.simple_name(), variable))
    }

    fn encode_unknown_variable(&self, variable: &str) -> String {
        format!("{} = {}", variable, UNKNOWN_PLACEHOLDER)
    }

    fn encode_variable_from_service(
        &self,
        variable: &str,
        service_variable: &str,
        service_method: &str,
    ) -> String {
        format!("{} = {}.{}()", variable, service_variable, service_method)
    }

    fn encode_module_call(
        &self,
        module: &str,
        process: bool,
        inputs: &InputMap,
        outputs: &OutputMap,
        _variables: &VariableMap,
    ) -> Result<String> {
        tracing::trace!("encoding module call {} ({} outputs)", module, outputs.len());
        let run = self.encode_command_run(module, process, inputs)?;

        // A single eager get() cannot be reused across several named
        // outputs, so one output extracts inline while two or more go
        // through an explicit waitFor on the module service.
        if outputs.len() == 1 {
            if let Some((slot, variable)) = outputs.iter().next() {
                return Ok(format!("{} = {}.get().getOutput(\"{}\")", variable, run, slot));
            }
        }
        if outputs.len() > 1 {
            let mut script = format!("{} = {}", FUTURE_VARIABLE, run);
            script.push_str(&self.encode_output_variables(outputs)?);
            return Ok(script);
        }
        Ok(run)
    }
}
