use crate::config::toml_config::ModuleDirectory;
use crate::domain::model::ModuleInfo;
use crate::domain::ports::ModuleRegistry;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Discovers modules as the subdirectories of the configured type directories.
#[derive(Debug, Clone)]
pub struct FsModuleRegistry {
    root: PathBuf,
    directories: Vec<ModuleDirectory>,
}

impl FsModuleRegistry {
    pub fn new(root: impl Into<PathBuf>, directories: Vec<ModuleDirectory>) -> Self {
        Self {
            root: root.into(),
            directories,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self, directory: &ModuleDirectory) -> Result<Vec<ModuleInfo>> {
        let dir = self.root.join(&directory.path);
        if !dir.is_dir() {
            tracing::debug!("Module directory {} not found, skipping", dir.display());
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::warn!("Skipping non UTF-8 directory in {}", dir.display());
                continue;
            };
            if name.starts_with('.') || name == "__pycache__" {
                continue;
            }
            names.push(name);
        }
        names.sort();

        Ok(names
            .into_iter()
            .map(|name| ModuleInfo {
                path: Path::new(&directory.path).join(&name),
                module_type: directory.module_type.clone(),
                name,
            })
            .collect())
    }
}

impl ModuleRegistry for FsModuleRegistry {
    fn list_modules(&self) -> Result<Vec<ModuleInfo>> {
        let mut modules = Vec::new();
        for directory in &self.directories {
            modules.extend(self.scan(directory)?);
        }
        Ok(modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::DiscoveryConfig;
    use tempfile::TempDir;

    #[test]
    fn test_lists_modules_in_directory_then_name_order() {
        let root = TempDir::new().unwrap();
        for dir in [
            "utils/logger_util",
            "cores/yaml_reading_core",
            "cores/config_core",
            "cores/__pycache__",
            "cores/.hidden",
            "managers/session_manager",
        ] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("cores/README.md"), "not a module").unwrap();

        let registry =
            FsModuleRegistry::new(root.path(), DiscoveryConfig::default().directories);
        let modules = registry.list_modules().unwrap();

        let listed: Vec<(&str, &str)> = modules
            .iter()
            .map(|m| (m.name.as_str(), m.module_type.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("config_core", "core"),
                ("yaml_reading_core", "core"),
                ("session_manager", "manager"),
                ("logger_util", "util"),
            ]
        );
        assert_eq!(modules[0].path, PathBuf::from("cores/config_core"));
    }

    #[test]
    fn test_find_module() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("plugins/chart_plugin")).unwrap();
        let registry =
            FsModuleRegistry::new(root.path(), DiscoveryConfig::default().directories);

        let found = registry.find_module("chart_plugin").unwrap().unwrap();
        assert_eq!(found.module_type, "plugin");
        assert!(registry.find_module("nope").unwrap().is_none());
    }

    #[test]
    fn test_empty_root_has_no_modules() {
        let root = TempDir::new().unwrap();
        let registry =
            FsModuleRegistry::new(root.path(), DiscoveryConfig::default().directories);
        assert!(registry.list_modules().unwrap().is_empty());
    }
}
