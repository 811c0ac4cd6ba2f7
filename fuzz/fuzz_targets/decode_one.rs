#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: elf_leb::decode_one on raw bytes.
//
// Catches bugs in:
// - Zero-length input
// - Shift overflow past bit 63
// - Remainder slicing after the terminator
fuzz_target!(|data: &[u8]| {
    match elf_leb::decode_one(data) {
        Ok((_, rest)) => {
            // The remainder is always a strict suffix of the input.
            assert!(rest.len() < data.len());
            assert_eq!(rest, &data[data.len() - rest.len()..]);
        }
        Err(elf_leb::LebError::IncompleteSequence { offset, consumed }) => {
            assert_eq!(offset, 0);
            assert_eq!(consumed, data.len());
            assert!(data.iter().all(|b| b & 0x80 != 0));
        }
        Err(_) => {}
    }
});
