use std::fs;
use std::path::Path;
use tempfile::TempDir;
use uv_migrator::config::toml_config::ModuleDirectory;
use uv_migrator::{FsModuleRegistry, MigrationOptions, Migrator, MigratorConfig};

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small monorepo with one module of each interesting shape.
fn create_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write(
        root,
        "cores/uv_migrator_core/init.yaml",
        "version: \"0.1.0\"\ntype: core\nrequirements:\n  - https://github.com/AI-Driven-Highspeed-Development/Logger-Util.git\n",
    );
    write(
        root,
        "managers/session_manager/init.yaml",
        r#"version: "1.4.2"
type: manager
requirements:
  - https://github.com/org/config_manager.git
  - https://notgithub.com/x
  - https://github.com/AI-Driven-Highspeed-Development/Logger-Util.git
"#,
    );
    write(
        root,
        "managers/session_manager/requirements.txt",
        "# runtime deps\nrequests>=2.31\n\npydantic==2.7.0\n",
    );
    write(
        root,
        "plugins/chart_plugin/init.yaml",
        "type: plugin\nlayer: custom\n",
    );
    fs::create_dir_all(root.join("utils/empty_util")).unwrap();

    temp_dir
}

fn migrator(root: &Path) -> Migrator<FsModuleRegistry, MigratorConfig> {
    let config = MigratorConfig::default();
    let registry = FsModuleRegistry::new(root, config.discovery.directories.clone());
    Migrator::new(root, registry, config)
}

#[test]
fn test_end_to_end_single_module() {
    let project = create_project();
    let migrator = migrator(project.path());

    let result = migrator.migrate_module("session_manager", MigrationOptions::default());
    assert!(result.success, "{}", result.message);

    let manifest_path = project
        .path()
        .join("managers/session_manager/pyproject.toml");
    let content = fs::read_to_string(&manifest_path).unwrap();

    let expected = r#"[project]
name = "session-manager"
version = "1.4.2"
description = "ADHD Framework manager: session_manager"
requires-python = ">=3.11"
dependencies = [
    "config-manager",
    "logger-util",
    "requests>=2.31",
    "pydantic==2.7.0",
]

[tool.adhd]
layer = "runtime"

[tool.uv.sources]
config-manager = { workspace = true }
logger-util = { workspace = true }

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.hatch.build.targets.wheel]
only-include = ["."]

[tool.hatch.build.targets.wheel.sources]
"" = "session_manager"
"#;
    assert_eq!(content, expected);
}

#[test]
fn test_generated_manifests_are_valid_toml() {
    let project = create_project();
    let migrator = migrator(project.path());

    let report = migrator
        .migrate_all(
            MigrationOptions {
                dry_run: true,
                no_overwrite: false,
            },
            true,
        )
        .unwrap();

    for result in report.successful() {
        let content = result.content.as_deref().unwrap();
        let table: toml::Table = toml::from_str(content)
            .unwrap_or_else(|e| panic!("{} produced invalid TOML: {}", result.module_name, e));
        assert!(table.contains_key("project"));
        assert!(table.contains_key("build-system"));
    }
}

#[test]
fn test_layers_across_modules() {
    let project = create_project();
    let migrator = migrator(project.path());

    let core = migrator.preview("uv_migrator_core").unwrap();
    assert!(core.contains("layer = \"dev\"\n"));

    let plugin = migrator.preview("chart_plugin").unwrap();
    assert!(plugin.contains("layer = \"custom\"\n"));
    assert!(plugin.contains("dependencies = []\n"));
    assert!(!plugin.contains("[tool.uv.sources]"));
}

#[test]
fn test_batch_reports_every_module_in_discovery_order() {
    let project = create_project();
    let migrator = migrator(project.path());

    let report = migrator
        .migrate_all(MigrationOptions::default(), true)
        .unwrap();

    let names: Vec<&str> = report
        .results()
        .iter()
        .map(|r| r.module_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "uv_migrator_core",
            "session_manager",
            "empty_util",
            "chart_plugin"
        ]
    );

    let failed: Vec<&str> = report.failed().map(|r| r.module_name.as_str()).collect();
    assert_eq!(failed, vec!["empty_util"]);
    assert!(report.failed().all(|r| r.message.contains("Missing init.yaml")));
    assert!(!project.path().join("utils/empty_util/pyproject.toml").exists());
    assert!(project
        .path()
        .join("plugins/chart_plugin/pyproject.toml")
        .exists());
}

#[test]
fn test_no_overwrite_batch_preserves_existing_manifests() {
    let project = create_project();
    let existing = project.path().join("cores/uv_migrator_core/pyproject.toml");
    fs::write(&existing, "[project]\nname = \"hand-made\"\n").unwrap();
    let migrator = migrator(project.path());

    let report = migrator
        .migrate_all(
            MigrationOptions {
                dry_run: false,
                no_overwrite: true,
            },
            true,
        )
        .unwrap();

    assert_eq!(
        fs::read_to_string(&existing).unwrap(),
        "[project]\nname = \"hand-made\"\n"
    );
    let skipped = &report.results()[0];
    assert!(skipped.success);
    assert_eq!(skipped.message, "Skipped (pyproject.toml exists)");
    assert!(skipped.content.is_none());
}

#[test]
fn test_custom_config_changes_discovery_and_header() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "libs/text_util/init.yaml", "type: util\n");

    let config = MigratorConfig::from_toml_str(
        r#"
[project]
requires_python = ">=3.12"
description_prefix = "Acme"

[[discovery.directories]]
path = "libs"
module_type = "util"
"#,
    )
    .unwrap();
    assert_eq!(
        config.discovery.directories,
        vec![ModuleDirectory::new("libs", "util")]
    );

    let registry = FsModuleRegistry::new(root, config.discovery.directories.clone());
    let migrator = Migrator::new(root, registry, config);

    let content = migrator.preview("text_util").unwrap();
    assert!(content.contains("description = \"Acme util: text_util\"\n"));
    assert!(content.contains("requires-python = \">=3.12\"\n"));
}
