use crate::error::ModelError;
use crate::sentinel::ID_EXPORT_PREFIX;

/// A requirements-tool object identifier split into its module path and
/// trailing id, e.g. `SYS/NAV/0042` → (`SYS/NAV`, `0042`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitIdentifier<'a> {
    pub module: &'a str,
    pub id: &'a str,
}

impl<'a> SplitIdentifier<'a> {
    /// Splits `<module-path>/<id>` on the last slash.
    ///
    /// # Errors
    ///
    /// Empty identifiers, identifiers without a module path, and module
    /// paths carrying the `ID : ` export prefix are structural format
    /// violations and fail here.
    pub fn parse(identifier: &'a str) -> Result<Self, ModelError> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyIdentifier);
        }
        let Some((module, id)) = trimmed.rsplit_once('/') else {
            return Err(ModelError::MissingModulePath(trimmed.to_string()));
        };
        if module.starts_with(ID_EXPORT_PREFIX) {
            return Err(ModelError::IdentifierPrefix(trimmed.to_string()));
        }
        Ok(Self { module, id })
    }

    /// Module path flattened for use in an artifact filename.
    pub fn module_filename(&self) -> String {
        self.module.replace('/', "_")
    }
}
