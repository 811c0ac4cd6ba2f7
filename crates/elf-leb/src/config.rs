/// Decoder configuration.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────────┐
/// │ Field    │ Purpose                                                  │
/// ├──────────┼──────────────────────────────────────────────────────────┤
/// │ overflow │ Reject values wider than 64 bits, or wrap them silently  │
/// │ max_len  │ Optional cap on the encoded length of a single value     │
/// └──────────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// The default rejects overflow and places no cap on encoded length, so
/// zero-padded encodings of any length are accepted as long as no
/// significant bit is lost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeConfig {
    /// What to do with bits that fall beyond bit 63.
    pub overflow: OverflowPolicy,

    /// Maximum number of bytes one encoded value may occupy.
    /// `None` means unbounded.
    pub max_len: Option<usize>,
}

impl DecodeConfig {
    /// Configuration that discards overflowed high bits instead of failing.
    ///
    /// This matches the classic C decoder, where `(uint64_t)group << shift`
    /// drops whatever does not fit.
    #[must_use]
    pub fn wrapping() -> Self {
        Self {
            overflow: OverflowPolicy::Wrap,
            ..Self::default()
        }
    }

    /// Cap the encoded length of each value at `limit` bytes.
    #[must_use]
    pub fn with_max_len(mut self, limit: usize) -> Self {
        self.max_len = Some(limit);
        self
    }
}

/// Policy for ULEB128 values that do not fit in a `u64`.
///
/// ```text
/// ┌────────┬───────────────────────────────────────────────────────────┐
/// │ Policy │ Behavior                                                  │
/// ├────────┼───────────────────────────────────────────────────────────┤
/// │ Reject │ Fail with LebError::Overflow at the offending byte        │
/// │ Wrap   │ Keep the low 64 bits; higher groups are discarded         │
/// └────────┴───────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    #[default]
    Reject,
    Wrap,
}
