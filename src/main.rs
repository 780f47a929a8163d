use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use uv_migrator::adapters::FsModuleRegistry;
use uv_migrator::config::cli::MIGRATE_USAGE;
use uv_migrator::config::{Cli, Command, LogFormat, MigrateArgs, MigrateTarget, MigratorConfig};
use uv_migrator::core::ModuleRegistry;
use uv_migrator::utils::{logger, validation::Validate};
use uv_migrator::{MigrationOptions, Migrator};

type CliMigrator = Migrator<FsModuleRegistry, MigratorConfig>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose, cli.log_format == LogFormat::Json);
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = MigratorConfig::load(&cli.root, cli.config.as_deref())
        .context("Failed to load uv-migrator configuration")?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return Ok(ExitCode::FAILURE);
    }

    let registry = FsModuleRegistry::new(cli.root.clone(), config.discovery.directories.clone());
    let migrator = Migrator::new(cli.root.clone(), registry, config);

    match cli.command {
        Command::Migrate(args) => migrate(&migrator, &args),
        Command::Preview { module } => preview(&migrator, &module),
        Command::List => list(&migrator),
    }
}

fn migrate(migrator: &CliMigrator, args: &MigrateArgs) -> anyhow::Result<ExitCode> {
    let target = match args.target() {
        Ok(target) => target,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("Usage: {}", MIGRATE_USAGE);
            return Ok(ExitCode::from(2));
        }
    };
    let options = args.options();

    match target {
        MigrateTarget::Module(module_name) => {
            tracing::info!("Migrating module: {}", module_name);
            let result = migrator.migrate_module(&module_name, options);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if result.success {
                match (&result.content, options.dry_run) {
                    (Some(content), true) => print!("{}", content),
                    _ => {
                        println!("✓ {}", result.message);
                        if let Some(path) = &result.output_path {
                            println!("  Output: {}", path.display());
                        }
                    }
                }
            } else {
                tracing::error!("✗ {}", result.message);
                eprintln!("✗ {}", result.message);
            }

            Ok(exit_code(result.success))
        }
        MigrateTarget::All { include_cores } => {
            tracing::info!("Migrating all modules...");
            let report = migrator
                .migrate_all(options, include_cores)
                .context("Module discovery failed")?;
            report.log_summary();

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if !options.dry_run {
                println!("Successfully migrated:");
                for result in report.successful() {
                    if let Some(path) = &result.output_path {
                        println!("  ✓ {} → {}", result.module_name, path.display());
                    }
                }
            }

            Ok(exit_code(report.all_succeeded()))
        }
    }
}

fn preview(migrator: &CliMigrator, module_name: &str) -> anyhow::Result<ExitCode> {
    let result = migrator.migrate_module(
        module_name,
        MigrationOptions {
            dry_run: true,
            no_overwrite: false,
        },
    );

    match (result.success, result.content) {
        (true, Some(content)) => {
            print!("{}", content);
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("✗ {}", result.message);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn list(migrator: &CliMigrator) -> anyhow::Result<ExitCode> {
    let modules = migrator
        .registry()
        .list_modules()
        .context("Module discovery failed")?;

    for module in &modules {
        println!(
            "{:<32} {:<8} {}",
            module.name,
            module.module_type,
            module.path.display()
        );
    }
    tracing::info!("{} modules discovered", modules.len());

    Ok(ExitCode::SUCCESS)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
