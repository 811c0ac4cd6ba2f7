#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: Uleb128Reader walking arbitrary bytes.
//
// Fields must tile the input from offset 0 with no gaps, and the
// iterator must stop after the first error.
fuzz_target!(|data: &[u8]| {
    let mut expected_offset = 0;
    let mut saw_error = false;

    for field in elf_leb::Uleb128Reader::new(data) {
        assert!(!saw_error, "reader yielded after an error");
        match field {
            Ok(field) => {
                assert_eq!(field.offset, expected_offset);
                assert!(field.len >= elf_leb::uleb128::MIN_ENCODED_LEN);
                expected_offset += field.len;
            }
            Err(_) => saw_error = true,
        }
    }

    assert!(saw_error || expected_offset == data.len());
});
