use crate::domain::model::{Layer, ModuleDescriptor};

/// Modules that only support development, whatever their type says.
pub const DEV_MODULES: &[&str] = &[
    "module_creator_core",
    "project_creator_core",
    "questionary_core",
    "uv_migrator_core",
];

pub fn default_layer_for_type(module_type: &str) -> Option<Layer> {
    match module_type {
        "core" | "util" => Some(Layer::Foundation),
        "manager" | "plugin" => Some(Layer::Runtime),
        "mcp" => Some(Layer::Dev),
        _ => None,
    }
}

/// First match wins: explicit `layer`, dev-only module, type default, `runtime`.
pub fn infer_layer(module_type: &str, module_name: &str, descriptor: &ModuleDescriptor) -> Layer {
    if let Some(layer) = &descriptor.layer {
        return Layer::from(layer.clone());
    }

    if DEV_MODULES.contains(&module_name) {
        return Layer::Dev;
    }

    default_layer_for_type(module_type).unwrap_or(Layer::Runtime)
}
