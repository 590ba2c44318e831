use thiserror::Error;

/// Failure of a strict string-to-variant lookup on a closed enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("value cannot be empty for {enumeration}")]
    Empty { enumeration: &'static str },
    #[error("cannot create {enumeration} from unrecognized value '{value}'")]
    Unrecognized {
        enumeration: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown shape '{0}'")]
    UnknownShape(String),
    #[error("unknown enumeration '{0}'")]
    UnknownEnum(String),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("could not parse shape JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}
