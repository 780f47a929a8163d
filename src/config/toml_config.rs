use crate::core::manifest::DEFAULT_REQUIRES_PYTHON;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MigratorError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_relative_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "uv-migrator.toml";
pub const DEFAULT_DESCRIPTION_PREFIX: &str = "ADHD Framework";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MigratorConfig {
    pub project: ProjectConfig,
    pub discovery: DiscoveryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub requires_python: String,
    pub description_prefix: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            requires_python: DEFAULT_REQUIRES_PYTHON.to_string(),
            description_prefix: DEFAULT_DESCRIPTION_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub directories: Vec<ModuleDirectory>,
}

/// A directory whose subdirectories are modules of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDirectory {
    pub path: String,
    pub module_type: String,
}

impl ModuleDirectory {
    pub fn new(path: &str, module_type: &str) -> Self {
        Self {
            path: path.to_string(),
            module_type: module_type.to_string(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            directories: vec![
                ModuleDirectory::new("cores", "core"),
                ModuleDirectory::new("managers", "manager"),
                ModuleDirectory::new("utils", "util"),
                ModuleDirectory::new("plugins", "plugin"),
                ModuleDirectory::new("mcps", "mcp"),
            ],
        }
    }
}

impl MigratorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MigratorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, else `<root>/uv-migrator.toml` if it exists,
    /// else the defaults.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = root.join(CONFIG_FILE);
                if default_path.is_file() {
                    tracing::debug!("Loading configuration from {}", default_path.display());
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MigratorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MigratorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("project.requires_python", &self.project.requires_python)?;
        validate_non_empty_string(
            "project.description_prefix",
            &self.project.description_prefix,
        )?;

        validate_non_empty_list("discovery.directories", &self.discovery.directories)?;
        for directory in &self.discovery.directories {
            validate_relative_path("discovery.directories.path", &directory.path)?;
            validate_non_empty_string("discovery.directories.module_type", &directory.module_type)?;
        }

        Ok(())
    }
}

impl ConfigProvider for MigratorConfig {
    fn requires_python(&self) -> &str {
        &self.project.requires_python
    }

    fn description_prefix(&self) -> &str {
        &self.project.description_prefix
    }
}

impl Validate for MigratorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
