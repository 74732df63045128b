use thiserror::Error;

/// Errors returned by record operations.
///
/// A failed operation never leaves a partial write behind; the record is
/// byte-for-byte what it was before the call.
#[derive(Error, Debug)]
pub enum MiiError {
    /// A logical value outside the field's declared range.
    #[error("expected value between {min} and {max}, got {value}")]
    OutOfRange {
        /// Smallest accepted value.
        min: u64,
        /// Largest accepted value.
        max: u64,
        /// The rejected value.
        value: u64,
    },

    /// The version field only accepts 0 or 3.
    #[error("version must be 0 or 3, got {0}")]
    InvalidVersion(u64),

    /// A name longer than the 10-character slot.
    #[error("a name can have no more than 10 characters, got {0}")]
    NameTooLong(usize),

    /// The portable text form is not valid base64.
    #[error("not a valid encoded record: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),

    /// The text form decoded to something other than 96 bytes.
    #[error("decoded {0} bytes, a record is exactly 96")]
    WrongLength(usize),
}
