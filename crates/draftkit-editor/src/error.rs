//! Error types for the editor crate.
//!
//! Most operations here are total: invalid requests degrade to no-ops so
//! a stored action log can always be replayed. Errors are reserved for the
//! boundaries where foreign data enters, clipboard payloads and files.

use thiserror::Error;

/// Errors produced while decoding a clipboard payload.
#[derive(Error, Debug, Clone)]
pub enum SerializerError {
    /// The payload was not valid JSON or missed required fields.
    #[error("Malformed payload: {reason}")]
    MalformedPayload {
        /// What the JSON decoder complained about.
        reason: String,
    },

    /// The decoded items cannot form a set: duplicate ids, a child claimed
    /// twice, or a group cycle.
    #[error("Payload items do not form a valid item set")]
    InvalidItemSet,

    /// A visual referenced a renderer that is not registered.
    #[error("Unknown renderer: {name}")]
    UnknownRenderer {
        /// The renderer name found in the payload.
        name: String,
    },
}

/// Errors produced while loading documents.
#[derive(Error, Debug, Clone)]
pub enum EditorError {
    /// The file was written by an incompatible format version.
    #[error("Unsupported file version {found}, expected {expected}")]
    UnsupportedVersion {
        /// The version found in the file.
        found: u32,
        /// The version this build writes.
        expected: u32,
    },
}
