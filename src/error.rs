//! Error taxonomy (spec.md §7). One `thiserror` enum per component boundary,
//! unified under [`LlrpError`] for the public surface — the same shape as
//! `RayhunterError` in the retrieval pack's `EFForg-rayhunter/bin/src/error.rs`,
//! adapted to this crate's four named components instead of one flat enum.

use thiserror::Error;

/// Raised while loading the [`SpecRegistry`](crate::spec_registry::SpecRegistry).
/// Always fatal — a bad spec artifact is a program-build error, not a
/// runtime condition (spec.md §4.1).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("enum {enum_name:?} referenced by field {field:?} of {owner:?} is not defined")]
    UnresolvedEnumRef { owner: String, field: String, enum_name: String },
    #[error("sub-parameter {referenced:?} listed by {owner:?} is not a registered parameter")]
    UnresolvedParameterRef { owner: String, referenced: String },
    #[error("duplicate {namespace} type number {type_number}: {first:?} and {second:?}")]
    DuplicateTypeNumber { namespace: &'static str, type_number: u32, first: String, second: String },
    #[error("duplicate spec name {0:?}")]
    DuplicateName(String),
}

/// Raised by construction, decode, and pre-encode validation (spec.md §4.4).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{path}: unknown field {field:?}")]
    UnknownField { path: String, field: String },
    #[error("{path}: missing required field {field:?}")]
    MissingField { path: String, field: String },
    #[error("{path}: field {field:?} has the wrong type (expected {expected}, found {found})")]
    TypeMismatch { path: String, field: String, expected: &'static str, found: &'static str },
    #[error("{path}: field {field:?} value {value} is out of range {range}")]
    OutOfRange { path: String, field: String, value: i64, range: String },
    #[error("{path}: field {field:?} value {value} is not a member of enum {enum_name}")]
    UnknownEnumMember { path: String, field: String, value: i64, enum_name: String },
    #[error("{path}: sub-parameter {parameter:?} cardinality violation (expected {expected}, found {found})")]
    CardinalityViolation { path: String, parameter: String, expected: String, found: usize },
    #[error("{path}: choice group {group:?} must have exactly one populated branch, found {found}")]
    ChoiceViolation { path: String, group: String, found: usize },
    #[error("{path}: unknown parameter or message spec {spec_name:?}")]
    UnknownSpec { path: String, spec_name: String },
}

impl ValidationError {
    pub fn path(&self) -> &str {
        match self {
            ValidationError::UnknownField { path, .. }
            | ValidationError::MissingField { path, .. }
            | ValidationError::TypeMismatch { path, .. }
            | ValidationError::OutOfRange { path, .. }
            | ValidationError::UnknownEnumMember { path, .. }
            | ValidationError::CardinalityViolation { path, .. }
            | ValidationError::ChoiceViolation { path, .. }
            | ValidationError::UnknownSpec { path, .. } => path,
        }
    }
}

/// Raised by binary decode (spec.md §4.3).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{0}")]
    Truncated(String),
    #[error("unknown {namespace} type number {type_number}")]
    UnknownType { namespace: &'static str, type_number: u32 },
    #[error("parameter {parameter:?} is not permitted at {path}")]
    UnexpectedParameter { parameter: String, path: String },
    #[error("framing error: {0}")]
    FramingError(String),
    #[error("unsupported LLRP version {0}")]
    UnsupportedVersion(u8),
}

/// Raised by [`Session`](crate::session::Session) operations (spec.md §4.6).
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to connect to {addr}: {source}")]
    ConnectFailed { addr: String, #[source] source: std::io::Error },
    #[error("transact timed out after {0:?}")]
    Timeout(std::time::Duration),
    #[error("session closed, request cancelled")]
    Cancelled,
    #[error("peer closed the connection")]
    PeerClosed,
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Crate-level error unifying every component's error taxonomy, plus the
/// XML codec's dependency-reported failures.
#[derive(Error, Debug)]
pub enum LlrpError {
    #[error(transparent)]
    Spec(#[from] SpecError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LlrpError>;
