//! Reading the legacy `init.yaml` descriptor and the sibling `requirements.txt`.

use crate::domain::model::{ModuleDescriptor, DEFAULT_MODULE_TYPE, DEFAULT_VERSION};
use crate::utils::error::{MigratorError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DESCRIPTOR_FILE: &str = "init.yaml";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Loads `<module_path>/init.yaml`.
pub fn read_descriptor(module_path: &Path) -> Result<ModuleDescriptor> {
    let path = module_path.join(DESCRIPTOR_FILE);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(MigratorError::DescriptorMissing { path });
        }
        Err(e) => return Err(MigratorError::IoError(e)),
    };

    parse_descriptor(&content, &path)
}

/// Parses descriptor text. `origin` is only used in error messages.
pub fn parse_descriptor(content: &str, origin: &Path) -> Result<ModuleDescriptor> {
    let invalid = |reason: String| MigratorError::DescriptorInvalid {
        path: origin.to_path_buf(),
        reason,
    };

    let value: Value = serde_yaml::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        _ => return Err(invalid("not a valid YAML dict".to_string())),
    };

    let version = optional_string(&mapping, "version").map_err(invalid)?;
    let module_type = optional_string(&mapping, "type").map_err(invalid)?;
    let layer = optional_string(&mapping, "layer").map_err(invalid)?;
    let requirements = string_list(&mapping, "requirements").map_err(invalid)?;

    Ok(ModuleDescriptor {
        version: version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        module_type: module_type.unwrap_or_else(|| DEFAULT_MODULE_TYPE.to_string()),
        requirements,
        layer,
    })
}

// A null value is treated the same as a missing key.
fn optional_string(mapping: &Mapping, key: &str) -> std::result::Result<Option<String>, String> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(format!(
            "'{}' must be a string, found {}",
            key,
            describe(other)
        )),
    }
}

fn string_list(mapping: &Mapping, key: &str) -> std::result::Result<Vec<String>, String> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Sequence(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(format!(
                    "'{}[{}]' must be a string, found {}",
                    key,
                    i,
                    describe(other)
                )),
            })
            .collect(),
        Some(other) => Err(format!(
            "'{}' must be a list of strings, found {}",
            key,
            describe(other)
        )),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Loads `<module_path>/requirements.txt`; a missing file yields no requirements.
pub fn read_requirements(module_path: &Path) -> Result<Vec<String>> {
    let path = module_path.join(REQUIREMENTS_FILE);

    match fs::read_to_string(&path) {
        Ok(content) => Ok(parse_requirements(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(MigratorError::IoError(e)),
    }
}

pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
