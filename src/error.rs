//! Error types for the caesardisk cipher core.

use thiserror::Error;

/// Errors produced by the caesardisk cipher core.
///
/// Out-of-range keys and offsets are *not* errors: they are silently
/// normalized by the correctors in [`crate::correction`], which report the
/// fact through a boolean flag and a `tracing` warning. Only genuine
/// validation and packaging failures surface here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaesarError {
    /// Character index is beyond the end of the alphabet.
    #[error("character index {index} out of range for alphabet of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// Character is not part of the encoding alphabet.
    #[error("character {0:?} not found in alphabet")]
    CharacterNotFound(char),

    /// An offset-requiring mode was given a non-positive offset.
    #[error("sequencer needs a positive non-zero offset: {0}")]
    InvalidOffset(i32),

    /// An offset-requiring mode was given no offset at all.
    #[error("missing Offset parameter for cipher mode {0}")]
    MissingOffset(&'static str),

    /// A cipher mode name could not be parsed.
    #[error("invalid cipher mode name: {0}")]
    InvalidMode(String),

    /// A packaged message was empty.
    #[error("packet is empty")]
    EmptyPacket,

    /// A packaged message is too short to hold timestamp and checksum.
    #[error("corrupted Caesar packet")]
    CorruptPacket,

    /// A packaged message carries a checksum but no payload after it.
    #[error("corrupted Caesar packet has no message")]
    EmptyPayload,

    /// The embedded checksum does not match the payload.
    #[error("ciphered message is altered {expected} != {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
