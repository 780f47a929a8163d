use crate::core::generator::generate_manifest;
use crate::core::manifest::MANIFEST_FILE;
use crate::domain::model::{MigrationOptions, MigrationReport, MigrationResult, ModuleInfo};
use crate::domain::ports::{ConfigProvider, ModuleRegistry};
use crate::utils::error::{MigratorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Drives `init.yaml` -> `pyproject.toml` migration for one module or all of them.
pub struct Migrator<R: ModuleRegistry, C: ConfigProvider> {
    root: PathBuf,
    registry: R,
    config: C,
}

impl<R: ModuleRegistry, C: ConfigProvider> Migrator<R, C> {
    pub fn new(root: impl Into<PathBuf>, registry: R, config: C) -> Self {
        Self {
            root: root.into(),
            registry,
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Never fails; every outcome is captured in the returned result.
    pub fn migrate_module(&self, module_name: &str, options: MigrationOptions) -> MigrationResult {
        match self.registry.find_module(module_name) {
            Ok(Some(module)) => self.migrate(&module, options),
            Ok(None) => MigrationResult::failure(
                module_name,
                MigratorError::ModuleNotFound {
                    name: module_name.to_string(),
                }
                .to_string(),
            ),
            Err(e) => MigrationResult::failure(
                module_name,
                format!("Module discovery failed: {}", e),
            ),
        }
    }

    /// One result per discovered module, in discovery order. Only a failure
    /// to list the modules is returned as an error.
    pub fn migrate_all(
        &self,
        options: MigrationOptions,
        include_cores: bool,
    ) -> Result<MigrationReport> {
        let modules = self.registry.list_modules()?;
        tracing::debug!("Discovered {} modules", modules.len());

        Ok(modules
            .iter()
            .filter(|module| include_cores || module.module_type != "core")
            .map(|module| self.migrate(module, options))
            .collect())
    }

    /// The manifest that would be generated, if generation succeeds.
    pub fn preview(&self, module_name: &str) -> Option<String> {
        let result = self.migrate_module(
            module_name,
            MigrationOptions {
                dry_run: true,
                no_overwrite: false,
            },
        );
        if result.success {
            result.content
        } else {
            None
        }
    }

    fn migrate(&self, module: &ModuleInfo, options: MigrationOptions) -> MigrationResult {
        let module_path = self.root.join(&module.path);
        let manifest_path = module_path.join(MANIFEST_FILE);

        if options.no_overwrite && manifest_path.exists() {
            tracing::info!("Skipping {}: {} exists", module.name, manifest_path.display());
            return MigrationResult::success(
                &module.name,
                "Skipped (pyproject.toml exists)",
                manifest_path,
                None,
            );
        }

        let content = match generate_manifest(&module_path, &self.config) {
            Ok(content) => content,
            Err(e @ MigratorError::DescriptorMissing { .. }) => {
                return MigrationResult::failure(&module.name, format!("Missing init.yaml: {}", e));
            }
            Err(e) => {
                return MigrationResult::failure(&module.name, format!("Migration failed: {}", e));
            }
        };

        if options.dry_run {
            tracing::info!("[DRY RUN] Would generate {}", manifest_path.display());
            return MigrationResult::success(
                &module.name,
                "Dry run - preview only",
                manifest_path,
                Some(content),
            );
        }

        if let Err(e) = fs::write(&manifest_path, &content) {
            return MigrationResult::failure(
                &module.name,
                format!("Migration failed: {}", MigratorError::IoError(e)),
            );
        }
        tracing::info!("Generated {}", manifest_path.display());

        MigrationResult::success(
            &module.name,
            "Generated pyproject.toml",
            manifest_path,
            Some(content),
        )
    }
}
