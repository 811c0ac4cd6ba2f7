//! Walks a `.debug_abbrev` fragment the way a DWARF reader would: every
//! code, tag and attribute/form pair is a ULEB128, and each read starts
//! where the previous one stopped.
//!
//! The `children` flag is a plain byte in DWARF; it is read as a ULEB128
//! too, which is equivalent for the values 0 and 1.

use elf_leb::{LebError, Uleb128Reader};
use elf_leb_tests::DEBUG_ABBREV;

#[derive(Debug, PartialEq, Eq)]
struct Abbrev {
    code: u64,
    tag: u64,
    has_children: bool,
    attrs: Vec<(u64, u64)>,
}

/// Parse abbreviations until the terminating zero code.
///
/// Returns the table and the number of bytes it occupied.
fn parse_table(buf: &[u8]) -> Result<(Vec<Abbrev>, usize), LebError> {
    let mut reader = Uleb128Reader::new(buf);
    let mut table = Vec::new();

    loop {
        let code = reader.read()?;
        if code == 0 {
            return Ok((table, reader.offset()));
        }
        let tag = reader.read()?;
        let has_children = reader.read()? != 0;

        let mut attrs = Vec::new();
        loop {
            let name = reader.read()?;
            let form = reader.read()?;
            if name == 0 && form == 0 {
                break;
            }
            attrs.push((name, form));
        }

        table.push(Abbrev {
            code,
            tag,
            has_children,
            attrs,
        });
    }
}

#[test]
fn parses_both_abbreviations() {
    let (table, consumed) = parse_table(DEBUG_ABBREV).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(consumed, DEBUG_ABBREV.len());

    let cu = &table[0];
    assert_eq!((cu.code, cu.tag, cu.has_children), (1, 0x11, true));
    assert_eq!(
        cu.attrs,
        vec![
            (0x25, 0x0e),
            (0x13, 0x0b),
            (0x03, 0x0e),
            (0x10, 0x17),
            (0x1b, 0x0e),
            (0x11, 0x01),
            (0x12, 0x07),
        ]
    );

    assert_eq!(
        table[1],
        Abbrev {
            code: 2,
            tag: 0x2e,
            has_children: false,
            attrs: vec![(0x2117, 0x19)],
        }
    );
}

#[test]
fn reader_stops_exactly_at_table_end() {
    let mut padded = DEBUG_ABBREV.to_vec();
    padded.extend_from_slice(&[0xDE, 0xAD]);

    let (_, consumed) = parse_table(&padded).unwrap();
    assert_eq!(&padded[consumed..], &[0xDE, 0xAD]);
}

#[test]
fn truncated_table_reports_incomplete() {
    // Cut inside the 2-byte DW_AT_GNU_all_call_sites attribute name.
    let err = parse_table(&DEBUG_ABBREV[..23]).unwrap_err();
    assert_eq!(
        err,
        LebError::IncompleteSequence {
            offset: 22,
            consumed: 1
        }
    );
}
