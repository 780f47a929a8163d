pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, MigrateTarget};

pub use crate::adapters::FsModuleRegistry;
pub use crate::config::MigratorConfig;
pub use crate::core::{
    dependencies::{classify_requirements, github_url_to_package_name},
    descriptor::{read_descriptor, read_requirements},
    generator::generate_manifest,
    layer::infer_layer,
    manifest::render_manifest,
    migrator::Migrator,
};
pub use crate::domain::model::{MigrationOptions, MigrationReport, MigrationResult};
pub use crate::utils::error::{MigratorError, Result};
