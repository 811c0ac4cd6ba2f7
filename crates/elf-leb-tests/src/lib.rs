#![warn(clippy::pedantic)]

//! Byte fixtures shared by the integration tests and benchmarks.
//!
//! Everything here is hand-encoded. The workspace deliberately ships no
//! ULEB128 encoder, so each fixture lists its bytes next to the values
//! they decode to.

/// Known (encoding, value) pairs.
///
/// | Encoded bytes                      | Value                 |
/// |------------------------------------|-----------------------|
/// | `00`                               | 0                     |
/// | `01`                               | 1                     |
/// | `7F`                               | 127                   |
/// | `80 01`                            | 128                   |
/// | `AC 02`                            | 300                   |
/// | `FF 7F`                            | 16383                 |
/// | `80 80 01`                         | 16384                 |
/// | `E5 8E 26`                         | 0x98765               |
/// | `FF FF FF 7F`                      | 0x0FFF_FFFF           |
/// | `FF FF FF FF 0F`                   | `u32::MAX`            |
/// | `80 80 80 80 80 80 80 80 80 01`    | 1 << 63               |
/// | `FF FF FF FF FF FF FF FF FF 01`    | `u64::MAX`            |
pub const KNOWN_VECTORS: &[(&[u8], u64)] = &[
    (&[0x00], 0),
    (&[0x01], 1),
    (&[0x7F], 127),
    (&[0x80, 0x01], 128),
    (&[0xAC, 0x02], 300),
    (&[0xFF, 0x7F], 16383),
    (&[0x80, 0x80, 0x01], 16384),
    (&[0xE5, 0x8E, 0x26], 0x98765),
    (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
    (&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F], 0xFFFF_FFFF),
    (
        &[0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01],
        0x8000_0000_0000_0000,
    ),
    (
        &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01],
        u64::MAX,
    ),
];

/// A `.debug_abbrev` fragment with two abbreviations.
///
/// ```text
/// [1] DW_TAG_compile_unit (0x11), has children
///     DW_AT_producer  (0x25)  DW_FORM_strp       (0x0e)
///     DW_AT_language  (0x13)  DW_FORM_data1      (0x0b)
///     DW_AT_name      (0x03)  DW_FORM_strp       (0x0e)
///     DW_AT_stmt_list (0x10)  DW_FORM_sec_offset (0x17)
///     DW_AT_comp_dir  (0x1b)  DW_FORM_strp       (0x0e)
///     DW_AT_low_pc    (0x11)  DW_FORM_addr       (0x01)
///     DW_AT_high_pc   (0x12)  DW_FORM_data8      (0x07)
/// [2] DW_TAG_subprogram (0x2e), no children
///     DW_AT_GNU_all_call_sites (0x2117, encoded 97 42)  DW_FORM_flag_present (0x19)
/// [0] end of table
/// ```
pub const DEBUG_ABBREV: &[u8] = &[
    0x01, 0x11, 0x01, //
    0x25, 0x0e, 0x13, 0x0b, 0x03, 0x0e, 0x10, 0x17, 0x1b, 0x0e, 0x11, 0x01, 0x12, 0x07, //
    0x00, 0x00, //
    0x02, 0x2e, 0x00, //
    0x97, 0x42, 0x19, //
    0x00, 0x00, //
    0x00,
];

/// Concatenation of every [`KNOWN_VECTORS`] encoding, in order.
#[must_use]
pub fn concatenated_vectors() -> Vec<u8> {
    KNOWN_VECTORS
        .iter()
        .flat_map(|(bytes, _)| bytes.iter().copied())
        .collect()
}
