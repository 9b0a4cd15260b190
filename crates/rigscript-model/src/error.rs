use thiserror::Error;

/// Errors raised by the shared data-model types.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("identifier cell is empty")]
    EmptyIdentifier,
    #[error("identifier `{0}` has no module path (expected `<module>/<id>`)")]
    MissingModulePath(String),
    #[error("identifier `{0}` carries an `ID : ` export prefix")]
    IdentifierPrefix(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
