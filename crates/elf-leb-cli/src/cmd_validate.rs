/// Implementation of `elfleb validate`.
///
/// Decodes a file end to end and reports either a series of success
/// checkmarks (`✓`) or a diagnostic failure line (`✗`). The command exits
/// with code 0 on a valid file and code 1 on any error.
///
/// # Success output
///
/// ```text
/// ✓ Stream: 12 bytes
/// ✓ Values: 5 values decoded
/// ✓ Terminated: last value ends at offset 0x000c
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: value at offset 0x0009 is truncated (3 bytes without a terminator)
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use elf_leb::{DecodeConfig, LebError, Uleb128Reader};

use crate::ValidateArgs;

/// Run the `elfleb validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any value in it fails
/// to decode.
pub fn run(args: &ValidateArgs, config: &DecodeConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match check(&bytes, config) {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(failure) => {
            println!("{failure}");
            Err(anyhow!("validation failed"))
        }
    }
}

/// Decode `bytes` end to end.
///
/// `Ok` carries the `✓` report, `Err` the single `✗` line for the first
/// malformed value.
fn check(bytes: &[u8], config: &DecodeConfig) -> Result<String, String> {
    let mut reader = Uleb128Reader::with_config(bytes, *config);
    let mut count = 0usize;

    while !reader.is_empty() {
        let start = reader.offset();
        if let Err(e) = reader.read() {
            return Err(format!("✗ Error: {}", diagnostic(start, &e)));
        }
        count += 1;
    }

    Ok(format!(
        "✓ Stream: {} byte{}\n\
         ✓ Values: {count} value{} decoded\n\
         ✓ Terminated: last value ends at offset {:#06x}\n",
        bytes.len(),
        if bytes.len() == 1 { "" } else { "s" },
        if count == 1 { "" } else { "s" },
        reader.offset()
    ))
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a [`LebError`] into a one-line diagnostic for the value that
/// started at `start`.
///
/// ```text
/// ┌────────────────────┬───────────────────────────────────────────────┐
/// │ LebError variant   │ Diagnostic                                    │
/// ├────────────────────┼───────────────────────────────────────────────┤
/// │ IncompleteSequence │ "... is truncated (N bytes without ...)"      │
/// │ Overflow           │ "... overflows 64 bits at byte 0xNNNN"        │
/// │ TooLong            │ "... exceeds the N-byte limit"                │
/// │ anything else      │ "<error Display>"                             │
/// └────────────────────┴───────────────────────────────────────────────┘
/// ```
fn diagnostic(start: usize, e: &LebError) -> String {
    match e {
        LebError::IncompleteSequence { consumed, .. } => format!(
            "value at offset {start:#06x} is truncated ({consumed} byte{} without a terminator)",
            if *consumed == 1 { "" } else { "s" }
        ),
        LebError::Overflow { offset } => {
            format!("value at offset {start:#06x} overflows 64 bits at byte {offset:#06x}")
        }
        LebError::TooLong { limit, .. } => {
            format!("value at offset {start:#06x} exceeds the {limit}-byte limit")
        }
        other => other.to_string(),
    }
}
