use std::fmt;

use crate::config::DecodeConfig;
use crate::error::LebError;
use crate::uleb128::{MIN_ENCODED_LEN, decode_prefix};

/// One decoded value and where it sat in the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Uleb128Field {
    /// Byte offset of the first encoded byte, from the start of the stream.
    pub offset: usize,

    /// Number of encoded bytes, terminator included.
    pub len: usize,

    /// The decoded value.
    pub value: u64,
}

/// One row of an inspection listing: `0x0003  len=2  value=128 (0x80)`.
impl fmt::Display for Uleb128Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#06x}  len={:<2} value={} ({:#x})",
            self.offset, self.len, self.value, self.value
        )
    }
}

/// Cursor over a buffer of back-to-back ULEB128 values.
///
/// Each read decodes from the current position and moves past the
/// terminator, the same as calling [`decode_one`](crate::decode_one) and
/// feeding its remainder into the next call. The reader only adds offset
/// bookkeeping so errors point at a position in the whole stream.
///
/// ```text
///   buf:    [E5 8E 26][80 01][07][FF ...
///            ^ field 0  ^ 1   ^ 2 ^ offset() after three reads
/// ```
///
/// A failed read leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use elf_leb::Uleb128Reader;
///
/// let mut reader = Uleb128Reader::new(&[0x80, 0x01, 0x07]);
/// assert_eq!(reader.read().unwrap(), 128);
/// assert_eq!(reader.read().unwrap(), 7);
/// assert!(reader.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Uleb128Reader<'a> {
    buf: &'a [u8],
    offset: usize,
    config: DecodeConfig,
    failed: bool,
}

impl<'a> Uleb128Reader<'a> {
    /// Create a reader with the default [`DecodeConfig`].
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, DecodeConfig::default())
    }

    #[must_use]
    pub fn with_config(buf: &'a [u8], config: DecodeConfig) -> Self {
        Self {
            buf,
            offset: 0,
            config,
            failed: false,
        }
    }

    /// Read the next value.
    ///
    /// # Errors
    ///
    /// Any decode error, with offsets relative to the start of the stream.
    pub fn read(&mut self) -> Result<u64, LebError> {
        self.read_field().map(|field| field.value)
    }

    /// Read the next value together with its position and encoded length.
    ///
    /// # Errors
    ///
    /// Any decode error, with offsets relative to the start of the stream.
    pub fn read_field(&mut self) -> Result<Uleb128Field, LebError> {
        let start = self.offset;
        let (value, len) =
            decode_prefix(self.remaining(), &self.config).map_err(|e| e.rebase(start))?;
        debug_assert!(len >= MIN_ENCODED_LEN);
        self.offset += len;
        Ok(Uleb128Field {
            offset: start,
            len,
            value,
        })
    }

    /// Read the next value as a `usize` (a length, count or index).
    ///
    /// # Errors
    ///
    /// [`LebError::ValueTooLarge`] if the value does not fit the target's
    /// pointer width; the cursor does not move in that case either.
    pub fn read_usize(&mut self) -> Result<usize, LebError> {
        self.read_narrow("usize")
    }

    /// Read the next value as a `u32` (DWARF abbreviation codes, tags and
    /// forms all fit one).
    ///
    /// # Errors
    ///
    /// [`LebError::ValueTooLarge`] if the value exceeds `u32::MAX`; the
    /// cursor does not move in that case.
    pub fn read_u32(&mut self) -> Result<u32, LebError> {
        self.read_narrow("u32")
    }

    fn read_narrow<T: TryFrom<u64>>(&mut self, target: &'static str) -> Result<T, LebError> {
        let before = self.offset;
        let field = self.read_field()?;
        T::try_from(field.value).map_err(|_| {
            self.offset = before;
            LebError::ValueTooLarge {
                offset: field.offset,
                value: field.value,
                target,
            }
        })
    }

    /// Byte position of the next read.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The unread suffix of the stream.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.buf.len()
    }
}

/// Yields fields until the buffer is exhausted.
///
/// The first error is yielded once and the iterator then ends, since the
/// cursor cannot make progress past a malformed value.
impl Iterator for Uleb128Reader<'_> {
    type Item = Result<Uleb128Field, LebError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.is_empty() {
            return None;
        }
        let item = self.read_field();
        self.failed = item.is_err();
        Some(item)
    }
}

impl std::iter::FusedIterator for Uleb128Reader<'_> {}

/// Decode every value in `buf`, which must hold only complete ULEB128s.
///
/// # Errors
///
/// The first decode error encountered.
pub fn decode_all(buf: &[u8]) -> Result<Vec<u64>, LebError> {
    Uleb128Reader::new(buf)
        .map(|field| field.map(|f| f.value))
        .collect()
}
