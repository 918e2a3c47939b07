use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::adapter::ScriptLanguage;
use crate::host::{CommandService, HostType, ModuleService};

/// Adapter configuration supplied by the host platform.
///
/// Binds script variable names to the well-known services generated
/// fragments reference. Registration is first-write-wins, so applying a
/// config never overrides names the host registered by hand.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdapterConfig {
    /// Variable name bound to the command execution service
    pub command_var: Option<String>,
    /// Variable name bound to the module coordination service
    pub module_var: Option<String>,
}

impl AdapterConfig {
    /// Register the configured service variables with a language
    pub fn apply(&self, language: &mut dyn ScriptLanguage) {
        if let Some(var) = &self.command_var {
            language.register_parameter(HostType::of::<CommandService>(), var);
        }
        if let Some(var) = &self.module_var {
            language.register_parameter(HostType::of::<ModuleService>(), var);
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("pyglue.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<AdapterConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: AdapterConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &AdapterConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::PythonLanguage;
    use crate::host::Context;

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pyglue.toml");
        let config = AdapterConfig {
            command_var: Some("cmd".to_string()),
            module_var: Some("mod".to_string()),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded.command_var.as_deref(), Some("cmd"));
        assert_eq!(loaded.module_var.as_deref(), Some("mod"));
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pyglue.toml");
        let config = AdapterConfig::default();

        write_config(&path, &config, false).unwrap();
        assert!(write_config(&path, &config, false).is_err());
        write_config(&path, &config, true).unwrap();
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }

    #[test]
    fn test_apply_registers_service_variables() {
        let config = AdapterConfig {
            command_var: Some("cmd".to_string()),
            module_var: Some("mod".to_string()),
        };
        let mut lang = PythonLanguage::new(Context::with_config(config.clone()));
        config.apply(&mut lang);

        assert_eq!(
            lang.encode_parameter(HostType::of::<CommandService>()).unwrap(),
            "# @CommandService cmd"
        );
        assert_eq!(
            lang.encode_parameter(HostType::of::<ModuleService>()).unwrap(),
            "# @ModuleService mod"
        );
    }

    #[test]
    fn test_apply_respects_existing_registrations() {
        let config = AdapterConfig {
            command_var: Some("commands".to_string()),
            module_var: None,
        };
        let mut lang = PythonLanguage::new(Context::new());
        lang.register_parameter(HostType::of::<CommandService>(), "cmd");
        config.apply(&mut lang);

        assert_eq!(
            lang.encode_parameter(HostType::of::<CommandService>()).unwrap(),
            "# @CommandService cmd"
        );
    }
}
