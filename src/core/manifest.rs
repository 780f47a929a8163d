//! Rendering of the `pyproject.toml` manifest.

use crate::domain::model::{Layer, NamedSource};

pub const MANIFEST_FILE: &str = "pyproject.toml";
pub const DEFAULT_REQUIRES_PYTHON: &str = ">=3.11";

/// Everything the renderer needs for one module.
#[derive(Debug, Clone)]
pub struct ManifestInput<'a> {
    /// Hyphenated package name.
    pub name: &'a str,
    pub version: &'a str,
    pub description: &'a str,
    pub requires_python: &'a str,
    pub layer: &'a Layer,
    pub dependencies: &'a [String],
    pub sources: &'a [NamedSource],
    /// On-disk (underscored) module directory name, used for the wheel mapping.
    pub module_name: &'a str,
    /// Marks an MCP server module. Nothing in `init.yaml` sets this yet.
    pub is_mcp: bool,
}

pub fn render_manifest(input: &ManifestInput<'_>) -> String {
    let mut lines = vec![
        "[project]".to_string(),
        format!("name = {}", quote(input.name)),
        format!("version = {}", quote(input.version)),
        format!("description = {}", quote(input.description)),
        format!("requires-python = {}", quote(input.requires_python)),
    ];

    if input.dependencies.is_empty() {
        lines.push("dependencies = []".to_string());
    } else {
        lines.push("dependencies = [".to_string());
        lines.extend(
            input
                .dependencies
                .iter()
                .map(|dep| format!("    {},", quote(dep))),
        );
        lines.push("]".to_string());
    }

    lines.push(String::new());
    lines.push("[tool.adhd]".to_string());
    lines.push(format!("layer = {}", quote(input.layer.as_str())));
    if input.is_mcp {
        lines.push("mcp = true".to_string());
    }

    // Git sources resolve to workspace members during local development.
    if !input.sources.is_empty() {
        lines.push(String::new());
        lines.push("[tool.uv.sources]".to_string());
        lines.extend(
            input
                .sources
                .iter()
                .map(|s| format!("{} = {{ workspace = true }}", key(&s.package))),
        );
    }

    lines.extend([
        String::new(),
        "[build-system]".to_string(),
        "requires = [\"hatchling\"]".to_string(),
        "build-backend = \"hatchling.build\"".to_string(),
        String::new(),
        "[tool.hatch.build.targets.wheel]".to_string(),
        "only-include = [\".\"]".to_string(),
        String::new(),
        "[tool.hatch.build.targets.wheel.sources]".to_string(),
        format!("\"\" = {}", quote(input.module_name)),
    ]);

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// TOML basic string.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare {
        name.to_string()
    } else {
        quote(name)
    }
}
