use crate::domain::model::MigrationOptions;
use crate::utils::error::{MigratorError, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const MIGRATE_USAGE: &str = "uv-migrator migrate <MODULE> [--dry-run] [--no-overwrite]\n       uv-migrator migrate --all [--dry-run] [--no-overwrite]";

#[derive(Debug, Parser)]
#[command(name = "uv-migrator", version)]
#[command(about = "Migrate module init.yaml descriptors to pyproject.toml")]
pub struct Cli {
    /// Project root containing the module directories
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Path to a uv-migrator.toml (default: <root>/uv-migrator.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Migrate init.yaml to pyproject.toml format
    Migrate(MigrateArgs),
    /// Print the pyproject.toml that would be generated for a module
    Preview {
        module: String,
    },
    /// List discovered modules
    List,
}

#[derive(Debug, Clone, Args)]
pub struct MigrateArgs {
    /// Name of the module to migrate
    pub module: Option<String>,

    /// Migrate every discovered module
    #[arg(long)]
    pub all: bool,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Skip modules that already have a pyproject.toml
    #[arg(long)]
    pub no_overwrite: bool,

    /// Leave core modules out of --all
    #[arg(long)]
    pub skip_cores: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrateTarget {
    Module(String),
    All { include_cores: bool },
}

impl MigrateArgs {
    /// Exactly one of a module name or `--all` must be given.
    pub fn target(&self) -> Result<MigrateTarget> {
        match (&self.module, self.all) {
            (Some(_), true) => Err(MigratorError::UserInputConflict {
                message: "Cannot specify both module name and --all".to_string(),
            }),
            (None, false) => Err(MigratorError::UserInputConflict {
                message: "Please specify a module name or use --all".to_string(),
            }),
            (Some(module), false) => Ok(MigrateTarget::Module(module.clone())),
            (None, true) => Ok(MigrateTarget::All {
                include_cores: !self.skip_cores,
            }),
        }
    }

    pub fn options(&self) -> MigrationOptions {
        MigrationOptions {
            dry_run: self.dry_run,
            no_overwrite: self.no_overwrite,
        }
    }
}
