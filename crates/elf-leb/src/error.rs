/// Errors produced while decoding ULEB128 values.
///
/// Every variant is a deterministic function of the input bytes, so none
/// of them are worth retrying against the same buffer. Offsets are byte
/// positions from the start of the buffer handed to the decoder (or, for
/// [`Uleb128Reader`](crate::Uleb128Reader), from the start of the stream).
///
/// ```text
///   LebError
///   ├── MissingArgument      ← argument vector was empty
///   ├── IncompleteSequence   ← input ended before a terminator byte
///   ├── Overflow             ← value needs more than 64 bits
///   ├── TooLong              ← encoding exceeded DecodeConfig::max_len
///   └── ValueTooLarge        ← value does not fit the requested integer type
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LebError {
    /// [`unpack_one`](crate::unpack_one) was called without any buffer.
    #[error("wrong number of arguments (given {given}, expected at least 1)")]
    MissingArgument { given: usize },

    /// The input ran out while the continuation bit was still set.
    ///
    /// `offset` is where the truncated value starts and `consumed` is the
    /// number of bytes scanned from there. An empty buffer reports
    /// `offset: 0, consumed: 0`.
    #[error(
        "ULEB128 sequence at offset {offset} did not contain a terminator ({consumed} bytes scanned)"
    )]
    IncompleteSequence { offset: usize, consumed: usize },

    /// The byte at `offset` carries bits that would land beyond bit 63.
    #[error("ULEB128 value overflows 64 bits at offset {offset}")]
    Overflow { offset: usize },

    /// The value did not terminate within the configured byte limit.
    #[error("ULEB128 encoding exceeded {limit}-byte limit at offset {offset}")]
    TooLong { offset: usize, limit: usize },

    /// A decoded value is too large for the integer type it was read as.
    #[error("ULEB128 value {value} at offset {offset} does not fit in {target}")]
    ValueTooLarge {
        offset: usize,
        value: u64,
        target: &'static str,
    },
}

impl LebError {
    /// Shift every offset carried by this error by `base` bytes.
    ///
    /// Used by the stream reader, which decodes sub-slices but reports
    /// positions relative to the whole stream.
    #[must_use]
    pub(crate) fn rebase(self, base: usize) -> Self {
        match self {
            Self::IncompleteSequence { offset, consumed } => Self::IncompleteSequence {
                offset: offset + base,
                consumed,
            },
            Self::Overflow { offset } => Self::Overflow {
                offset: offset + base,
            },
            Self::TooLong { offset, limit } => Self::TooLong {
                offset: offset + base,
                limit,
            },
            Self::ValueTooLarge {
                offset,
                value,
                target,
            } => Self::ValueTooLarge {
                offset: offset + base,
                value,
                target,
            },
            other @ Self::MissingArgument { .. } => other,
        }
    }

    /// True when more input bytes could turn this failure into a success.
    ///
    /// Streaming callers can use this to wait for more data instead of
    /// treating the stream as corrupt.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteSequence { .. })
    }
}
