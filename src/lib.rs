//! LLRP 1.0.1 codec, validator, and TCP reader session manager.
//!
//! A data-driven catalog of [`spec_types`] entities
//! ([`spec_catalog`], loaded through [`spec_registry::SpecRegistry`])
//! drives one generic binary [`codec`] and one generic [`xml_codec`]
//! instead of hand-written per-message encode/decode functions, with a
//! single [`validator`] enforcing type, range, enum, cardinality, and
//! choice-group rules on every [`message::Message`]/[`message::Parameter`]
//! at construction time. [`session::Session`] drives the request/response
//! lifecycle over `tokio`, including keepalive auto-ack and correlation by
//! message ID.

pub mod bitstream;
pub mod codec;
pub mod error;
pub mod message;
pub mod session;
pub mod session_config;
pub mod spec_catalog;
pub mod spec_registry;
pub mod spec_types;
pub mod validator;
pub mod value;
pub mod xml_codec;

pub use error::{CodecError, LlrpError, Result, SessionError, SpecError, ValidationError};
pub use message::{Item, Message, Parameter};
pub use session::{Session, SessionState};
pub use session_config::SessionConfig;
pub use spec_registry::SpecRegistry;
pub use value::Value;
