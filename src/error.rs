use crate::declaration::DeclarationKind;
use std::path::PathBuf;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a documentation fix cannot be produced.
///
/// Every variant surfaces to the caller as "no fix offered"; nothing is partially applied.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no documentation is generated for {0} declarations")]
    UnsupportedDeclarationKind(DeclarationKind),

    #[error("`{0}` inherits its documentation")]
    CoveredByInheritDoc(String),

    #[error("`{0}` has no containing type to describe")]
    MissingContainingType(String),

    #[error("parameter `{0}` is not declared")]
    UnknownParameter(String),

    #[error("parameter `{0}` is already documented")]
    ParameterAlreadyDocumented(String),

    #[error("the documentation comment has no element to insert after")]
    EmptyDocumentation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {}: {message}", file.display())]
    Parse { file: PathBuf, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(format!("YAML: {}", err))
    }
}
