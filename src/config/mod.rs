#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, LogFormat, MigrateArgs, MigrateTarget};
pub use toml_config::{MigratorConfig, ModuleDirectory};
