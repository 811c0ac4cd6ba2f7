#![no_main]

use arbitrary::Arbitrary;
use elf_leb::{DecodeConfig, OverflowPolicy, decode_one_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    bytes: Vec<u8>,
    max_len: Option<u8>,
}

// Fuzz target: Reject and Wrap must agree whenever Reject succeeds, and
// Wrap may only fail where Reject fails for a reason other than overflow.
fuzz_target!(|input: Input| {
    let reject = DecodeConfig {
        overflow: OverflowPolicy::Reject,
        max_len: input.max_len.map(usize::from),
    };
    let wrap = DecodeConfig {
        overflow: OverflowPolicy::Wrap,
        ..reject
    };

    let rejected = decode_one_with(&input.bytes, &reject);
    let wrapped = decode_one_with(&input.bytes, &wrap);

    match (rejected, wrapped) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Ok(_), Err(e)) => panic!("wrap failed where reject succeeded: {e}"),
        (Err(elf_leb::LebError::Overflow { .. }), _) => {}
        (Err(a), Err(b)) => assert_eq!(a, b),
        (Err(e), Ok(_)) => panic!("reject failed without overflow: {e}"),
    }
});
