use thiserror::Error;

/// Errors that can occur while registering or resolving an API definition.
///
/// Every variant is fatal: the build stops at the point of detection and no
/// partial graph is returned. Advisory findings are reported as
/// [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.
#[derive(Error, Debug)]
pub enum ApiGraphError {
    #[error("missing symbol: no {kind} named '{name}'")]
    UnresolvedSymbol { kind: String, name: String },

    #[error("duplicate symbol: {kind} '{name}' is already registered")]
    DuplicateSymbol { kind: String, name: String },

    #[error("unknown value kind '{kind}' (in {context})")]
    UnknownValueKind { kind: String, context: String },

    #[error("malformed value: kind '{kind}' requires field '{field}' (in {context})")]
    MalformedValue {
        kind: String,
        field: String,
        context: String,
    },

    #[error("invalid declaration: {message}")]
    InvalidDeclaration { message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiGraphError {
    pub(crate) fn unresolved(kind: &str, name: impl Into<String>) -> Self {
        ApiGraphError::UnresolvedSymbol {
            kind: kind.to_string(),
            name: name.into(),
        }
    }

    pub(crate) fn duplicate(kind: &str, name: impl Into<String>) -> Self {
        ApiGraphError::DuplicateSymbol {
            kind: kind.to_string(),
            name: name.into(),
        }
    }
}

/// Convenience alias for results using `ApiGraphError`.
pub type Result<T> = std::result::Result<T, ApiGraphError>;
