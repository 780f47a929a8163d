use crate::domain::model::ModuleInfo;
use crate::utils::error::Result;

/// Source of the module set being migrated.
pub trait ModuleRegistry {
    /// All known modules, in a stable discovery order.
    fn list_modules(&self) -> Result<Vec<ModuleInfo>>;

    fn find_module(&self, name: &str) -> Result<Option<ModuleInfo>> {
        Ok(self.list_modules()?.into_iter().find(|m| m.name == name))
    }
}

pub trait ConfigProvider {
    fn requires_python(&self) -> &str;
    fn description_prefix(&self) -> &str;
}
