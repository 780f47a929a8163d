use crate::core::dependencies::classify_requirements;
use crate::core::descriptor::{read_descriptor, read_requirements};
use crate::core::layer::infer_layer;
use crate::core::manifest::{render_manifest, ManifestInput};
use crate::domain::model::{DependencySet, ModuleDescriptor};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MigratorError, Result};
use std::path::Path;

/// `session_manager` -> `session-manager`
pub fn module_name_to_package_name(module_name: &str) -> String {
    module_name.replace('_', "-")
}

/// Descriptor requirements are classified; `requirements.txt` entries are
/// appended afterwards as-is.
pub fn build_dependency_set(
    descriptor: &ModuleDescriptor,
    plain_requirements: Vec<String>,
) -> DependencySet {
    let mut set = classify_requirements(&descriptor.requirements);
    set.extend_plain(plain_requirements);
    set
}

/// Produces the manifest text for the module at `module_path` without
/// touching the filesystem beyond reading its inputs.
pub fn generate_manifest<C: ConfigProvider>(module_path: &Path, config: &C) -> Result<String> {
    let descriptor = read_descriptor(module_path)?;
    let plain_requirements = read_requirements(module_path)?;

    let module_name = module_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| MigratorError::ConfigError {
            message: format!(
                "Module path {} has no usable directory name",
                module_path.display()
            ),
        })?;

    let dependencies = build_dependency_set(&descriptor, plain_requirements);
    let layer = infer_layer(&descriptor.module_type, module_name, &descriptor);
    let package_name = module_name_to_package_name(module_name);
    let description = format!(
        "{} {}: {}",
        config.description_prefix(),
        descriptor.module_type,
        module_name
    );

    tracing::debug!(
        "{}: {} dependencies, {} git sources, layer {}",
        module_name,
        dependencies.dependencies.len(),
        dependencies.sources.len(),
        layer
    );

    Ok(render_manifest(&ManifestInput {
        name: &package_name,
        version: &descriptor.version,
        description: &description,
        requires_python: config.requires_python(),
        layer: &layer,
        dependencies: &dependencies.dependencies,
        sources: &dependencies.sources,
        module_name,
        is_mcp: false,
    }))
}
