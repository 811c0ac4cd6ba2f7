use crate::config::{DecodeConfig, OverflowPolicy};
use crate::error::LebError;

/// Smallest possible encoded size of a ULEB128 value.
///
/// ULEB128 is never fixed-size; this is only the lower bound.
pub const MIN_ENCODED_LEN: usize = 1;

/// Number of bytes needed to encode any `u64` without padding.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_U64_ENCODED_LEN: usize = 10;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;

/// Decode one ULEB128 value from the front of `buf`.
///
/// # Returns
///
/// `(value, remainder)` where `remainder` borrows `buf` starting at the
/// byte after the terminator. It is empty when the terminator was the
/// last byte.
///
/// # Errors
///
/// - [`LebError::IncompleteSequence`] if `buf` ends (or is empty) before
///   a byte with the MSB clear.
/// - [`LebError::Overflow`] if the value does not fit in 64 bits.
///
/// # Wire format examples
///
/// | Encoded bytes                    | Value                 |
/// |----------------------------------|-----------------------|
/// | `[0x00]`                         | 0                     |
/// | `[0x7F]`                         | 127                   |
/// | `[0x80, 0x01]`                   | 128                   |
/// | `[0xE5, 0x8E, 0x26]`             | 0x98765               |
/// | `[0xFF, 0xFF, 0xFF, 0x7F]`       | 0x0FFF_FFFF           |
/// | `[0x80 x 9, 0x01]`               | 0x8000_0000_0000_0000 |
pub fn decode_one(buf: &[u8]) -> Result<(u64, &[u8]), LebError> {
    decode_one_with(buf, &DecodeConfig::default())
}

/// Decode one ULEB128 value using an explicit [`DecodeConfig`].
///
/// # Errors
///
/// Same as [`decode_one`], plus [`LebError::TooLong`] when
/// `config.max_len` is set and the value has not terminated within it.
/// With [`OverflowPolicy::Wrap`] overflow is never reported.
pub fn decode_one_with<'a>(
    buf: &'a [u8],
    config: &DecodeConfig,
) -> Result<(u64, &'a [u8]), LebError> {
    let (value, consumed) = decode_prefix(buf, config)?;
    Ok((value, &buf[consumed..]))
}

/// Decode the first buffer of an argument vector.
///
/// This is the entry point for callers that forward a variable-length
/// argument list (a scripting bridge, a CLI). Only the first argument is
/// decoded; any further arguments are ignored.
///
/// # Errors
///
/// - [`LebError::MissingArgument`] if `args` is empty. No decoding is
///   attempted.
/// - Anything [`decode_one`] returns for `args[0]`.
pub fn unpack_one<'a>(args: &[&'a [u8]]) -> Result<(u64, &'a [u8]), LebError> {
    unpack_one_with(args, &DecodeConfig::default())
}

/// [`unpack_one`] with an explicit [`DecodeConfig`].
///
/// # Errors
///
/// [`LebError::MissingArgument`] if `args` is empty, otherwise anything
/// [`decode_one_with`] returns for `args[0]`.
pub fn unpack_one_with<'a>(
    args: &[&'a [u8]],
    config: &DecodeConfig,
) -> Result<(u64, &'a [u8]), LebError> {
    let Some(&buf) = args.first() else {
        return Err(LebError::MissingArgument { given: args.len() });
    };
    decode_one_with(buf, config)
}

/// Decode one value and return it with the number of bytes it occupied.
pub(crate) fn decode_prefix(buf: &[u8], config: &DecodeConfig) -> Result<(u64, usize), LebError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if let Some(limit) = config.max_len
            && i >= limit
        {
            return Err(LebError::TooLong { offset: i, limit });
        }

        let group = u64::from(byte & GROUP_MASK);
        match shifted_group(group, shift) {
            Some(bits) => result |= bits,
            None if config.overflow == OverflowPolicy::Reject => {
                return Err(LebError::Overflow { offset: i });
            }
            // Wrap: keep whatever still fits below bit 64.
            None => result |= group.checked_shl(shift).unwrap_or(0),
        }

        if byte & CONTINUATION == 0 {
            return Ok((result, i + 1));
        }

        shift = shift.saturating_add(7);
    }

    Err(LebError::IncompleteSequence {
        offset: 0,
        consumed: buf.len(),
    })
}

/// `group << shift`, or `None` if any set bit of `group` would be lost.
///
/// A zero group never loses bits, so padding bytes past bit 63 are fine.
fn shifted_group(group: u64, shift: u32) -> Option<u64> {
    if group == 0 {
        return Some(0);
    }
    let bits = group.checked_shl(shift)?;
    (bits >> shift == group).then_some(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_zero() {
        assert_eq!(decode_one(&[0x00]).unwrap(), (0, &[][..]));
    }

    #[test]
    fn decode_every_single_byte_value() {
        for b in 0u8..0x80 {
            let one = [b];
            let (value, rest) = decode_one(&one).unwrap();
            assert_eq!(value, u64::from(b));
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn decode_128() {
        // First value requiring 2 bytes
        assert_eq!(decode_one(&[0x80, 0x01]).unwrap(), (128, &[][..]));
    }

    #[test]
    fn decode_four_byte_max() {
        let (value, rest) = decode_one(&[0xFF, 0xFF, 0xFF, 0x7F]).unwrap();
        assert_eq!(value, 0x0FFF_FFFF);
        assert!(rest.is_empty());
    }

    #[test]
    fn decode_three_byte_value() {
        assert_eq!(decode_one(&[0xE5, 0x8E, 0x26]).unwrap().0, 0x98765);
    }

    #[test]
    fn decode_high_bit_only() {
        let buf = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        assert_eq!(decode_one(&buf).unwrap().0, 0x8000_0000_0000_0000);
    }

    #[test]
    fn decode_u64_max() {
        let mut buf = [0xFF; MAX_U64_ENCODED_LEN];
        buf[9] = 0x01;
        assert_eq!(decode_one(&buf).unwrap().0, u64::MAX);
    }

    #[test]
    fn remainder_is_exact_suffix() {
        // Decoder should only consume the value, leaving trailing data alone
        let buf = [0xAC, 0x02, 0xFF, 0x80, 0x00];
        let (value, rest) = decode_one(&buf).unwrap();
        assert_eq!(value, 300);
        assert_eq!(rest, &[0xFF, 0x80, 0x00]);
        assert!(std::ptr::eq(rest, &buf[2..]));
    }

    #[test]
    fn decode_empty_input() {
        assert_eq!(
            decode_one(&[]),
            Err(LebError::IncompleteSequence {
                offset: 0,
                consumed: 0
            })
        );
    }

    #[test]
    fn decode_all_continuation() {
        assert_eq!(
            decode_one(&[0x80, 0x80, 0x80]),
            Err(LebError::IncompleteSequence {
                offset: 0,
                consumed: 3
            })
        );
    }

    #[test]
    fn reject_overflow_in_tenth_byte() {
        // Tenth byte may only contribute bit 63.
        let mut buf = [0xFF; MAX_U64_ENCODED_LEN];
        buf[9] = 0x02;
        assert_eq!(decode_one(&buf), Err(LebError::Overflow { offset: 9 }));
    }

    #[test]
    fn reject_overflow_in_eleventh_byte() {
        let mut buf = [0x80; 11];
        buf[10] = 0x01;
        assert_eq!(decode_one(&buf), Err(LebError::Overflow { offset: 10 }));
    }

    #[test]
    fn zero_padding_past_64_bits_is_accepted() {
        // 1, padded out to 12 bytes with empty continuation groups.
        let mut buf = [0x80; 12];
        buf[0] = 0x81;
        buf[11] = 0x00;
        assert_eq!(decode_one(&buf).unwrap(), (1, &[][..]));
    }

    #[test]
    fn wrap_discards_high_bits() {
        let config = DecodeConfig::wrapping();

        let mut buf = [0xFF; MAX_U64_ENCODED_LEN];
        buf[9] = 0x7F;
        assert_eq!(decode_one_with(&buf, &config).unwrap().0, u64::MAX);

        // 2^70 truncates to zero.
        let mut buf = [0x80; 11];
        buf[10] = 0x01;
        assert_eq!(decode_one_with(&buf, &config).unwrap(), (0, &[][..]));
    }

    #[test]
    fn wrap_still_reports_incomplete() {
        let config = DecodeConfig::wrapping();
        assert_eq!(
            decode_one_with(&[0xFF, 0xFF], &config),
            Err(LebError::IncompleteSequence {
                offset: 0,
                consumed: 2
            })
        );
    }

    #[test]
    fn max_len_limits_encoding() {
        let config = DecodeConfig::default().with_max_len(2);
        assert_eq!(decode_one_with(&[0xFF, 0x7F], &config).unwrap().0, 16383);
        assert_eq!(
            decode_one_with(&[0x80, 0x80, 0x01], &config),
            Err(LebError::TooLong {
                offset: 2,
                limit: 2
            })
        );
    }

    #[test]
    fn unpack_one_without_arguments() {
        assert_eq!(unpack_one(&[]), Err(LebError::MissingArgument { given: 0 }));
    }

    #[test]
    fn unpack_one_with_empty_buffer() {
        let empty: &[u8] = &[];
        assert_eq!(
            unpack_one(&[empty]),
            Err(LebError::IncompleteSequence {
                offset: 0,
                consumed: 0
            })
        );
    }

    #[test]
    fn unpack_one_ignores_extra_arguments() {
        let first: &[u8] = &[0x80, 0x01, 0x05];
        let second: &[u8] = &[0x80];
        assert_eq!(unpack_one(&[first, second]).unwrap(), (128, &[0x05][..]));
    }
}
