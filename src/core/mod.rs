pub mod dependencies;
pub mod descriptor;
pub mod generator;
pub mod layer;
pub mod manifest;
pub mod migrator;

pub use crate::domain::model::{
    DependencySet, Layer, MigrationOptions, MigrationReport, MigrationResult, ModuleDescriptor,
    ModuleInfo,
};
pub use crate::domain::ports::{ConfigProvider, ModuleRegistry};
pub use crate::utils::error::Result;
