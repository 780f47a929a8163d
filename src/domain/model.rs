use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_VERSION: &str = "0.0.1";
pub const DEFAULT_MODULE_TYPE: &str = "unknown";

/// Typed view of a module's `init.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub version: String,
    pub module_type: String,
    pub requirements: Vec<String>,
    /// Explicit layer override; wins over any inferred layer.
    pub layer: Option<String>,
}

impl Default for ModuleDescriptor {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
            requirements: Vec::new(),
            layer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceRef {
    Git(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSource {
    pub package: String,
    pub source: SourceRef,
}

/// Dependencies split out of a requirement list.
///
/// Every package in `sources` also appears exactly once in `dependencies`,
/// under its derived name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub dependencies: Vec<String>,
    pub sources: Vec<NamedSource>,
}

impl DependencySet {
    pub fn push_plain(&mut self, requirement: String) {
        self.dependencies.push(requirement);
    }

    /// Records a git-sourced package. A repeated package keeps its first
    /// position in `dependencies` and takes the latest source.
    pub fn push_git(&mut self, package: String, url: String) {
        let source = SourceRef::Git(url);
        match self.sources.iter_mut().find(|s| s.package == package) {
            Some(existing) => existing.source = source,
            None => {
                self.dependencies.push(package.clone());
                self.sources.push(NamedSource { package, source });
            }
        }
    }

    /// Appends requirements verbatim, after everything already classified.
    pub fn extend_plain<I: IntoIterator<Item = String>>(&mut self, requirements: I) {
        self.dependencies.extend(requirements);
    }

    pub fn source_for(&self, package: &str) -> Option<&SourceRef> {
        self.sources
            .iter()
            .find(|s| s.package == package)
            .map(|s| &s.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Layer {
    Foundation,
    Runtime,
    Dev,
    /// Verbatim value of an explicit `layer:` key.
    Custom(String),
}

impl Layer {
    pub fn as_str(&self) -> &str {
        match self {
            Layer::Foundation => "foundation",
            Layer::Runtime => "runtime",
            Layer::Dev => "dev",
            Layer::Custom(value) => value,
        }
    }
}

impl From<String> for Layer {
    fn from(value: String) -> Self {
        match value.as_str() {
            "foundation" => Layer::Foundation,
            "runtime" => Layer::Runtime,
            "dev" => Layer::Dev,
            _ => Layer::Custom(value),
        }
    }
}

impl From<Layer> for String {
    fn from(layer: Layer) -> Self {
        layer.as_str().to_string()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module as reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub name: String,
    /// Relative to the project root.
    pub path: PathBuf,
    pub module_type: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationOptions {
    pub dry_run: bool,
    pub no_overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationResult {
    pub module_name: String,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl MigrationResult {
    pub fn failure(module_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            success: false,
            message: message.into(),
            output_path: None,
            content: None,
        }
    }

    pub fn success(
        module_name: impl Into<String>,
        message: impl Into<String>,
        output_path: PathBuf,
        content: Option<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            success: true,
            message: message.into(),
            output_path: Some(output_path),
            content,
        }
    }
}

/// Results of a batch run in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationReport {
    results: Vec<MigrationResult>,
}

impl MigrationReport {
    pub fn new(results: Vec<MigrationResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[MigrationResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn successful(&self) -> impl Iterator<Item = &MigrationResult> {
        self.results.iter().filter(|r| r.success)
    }

    pub fn failed(&self) -> impl Iterator<Item = &MigrationResult> {
        self.results.iter().filter(|r| !r.success)
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }

    pub fn log_summary(&self) {
        let total = self.results.len();
        let success_count = self.successful().count();
        let fail_count = total - success_count;

        tracing::info!("Migration complete: {}/{} successful", success_count, total);

        if fail_count > 0 {
            tracing::warn!("{} modules had issues:", fail_count);
            for result in self.failed() {
                tracing::warn!("  - {}: {}", result.module_name, result.message);
            }
        }
    }
}

impl FromIterator<MigrationResult> for MigrationReport {
    fn from_iter<I: IntoIterator<Item = MigrationResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
