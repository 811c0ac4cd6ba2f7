/// Implementation of `elfleb inspect`.
///
/// Walks a file of back-to-back ULEB128 values (for example a slice cut
/// out of `.debug_abbrev`) and lists each one with its offset and
/// encoded length.
///
/// # Output format
///
/// ```text
/// 0x0000  len=1  value=1 (0x1)
/// 0x0001  len=1  value=17 (0x11)
/// 0x0002  len=2  value=8467 (0x2113)
/// ---
/// 3 values, 4 of 4 bytes decoded
/// ```
///
/// Offsets are file offsets, including any `--skip`.
use std::fmt::Write;
use std::fs;

use anyhow::{Context, Result, bail};
use elf_leb::{DecodeConfig, Uleb128Field, Uleb128Reader};
use serde::Serialize;

use crate::InspectArgs;

/// JSON shape of one listed value.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct FieldRecord {
    offset: usize,
    len: usize,
    value: u64,
}

impl FieldRecord {
    fn new(field: Uleb128Field, base: usize) -> Self {
        Self {
            offset: field.offset + base,
            len: field.len,
            value: field.value,
        }
    }
}

/// Run the `elfleb inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, `--skip` is past the end
/// of the file, or a value in the listed range is malformed.
pub fn run(args: &InspectArgs, config: &DecodeConfig, verbose: bool) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    if verbose {
        eprintln!(
            "read {} bytes from {}, starting at offset {}",
            bytes.len(),
            args.file.display(),
            args.skip
        );
    }

    let records = collect_records(&bytes, args.skip, args.count, config)
        .with_context(|| format!("cannot inspect {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print!("{}", render_text(&records, args.skip, bytes.len())?);
    }
    Ok(())
}

/// Decode up to `count` values starting at byte `skip`.
///
/// Record offsets are positions in `bytes`, not in the skipped suffix.
fn collect_records(
    bytes: &[u8],
    skip: usize,
    count: Option<usize>,
    config: &DecodeConfig,
) -> Result<Vec<FieldRecord>> {
    if skip > bytes.len() {
        bail!("--skip {skip} is past the end of the input ({} bytes)", bytes.len());
    }

    let limit = count.unwrap_or(usize::MAX);
    let mut records = Vec::new();
    let mut end = skip;

    for field in Uleb128Reader::with_config(&bytes[skip..], *config).take(limit) {
        let field = field.with_context(|| format!("malformed ULEB128 value at offset {end:#x}"))?;
        let record = FieldRecord::new(field, skip);
        end = record.offset + record.len;
        records.push(record);
    }

    Ok(records)
}

/// Text rows followed by a one-line summary.
fn render_text(records: &[FieldRecord], skip: usize, total: usize) -> Result<String> {
    let mut out = String::new();
    for record in records {
        let row = Uleb128Field {
            offset: record.offset,
            len: record.len,
            value: record.value,
        };
        writeln!(out, "{row}")?;
    }

    let decoded = records.last().map_or(0, |r| r.offset + r.len - skip);
    writeln!(out, "---")?;
    writeln!(
        out,
        "{} value{}, {decoded} of {} bytes decoded",
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        total - skip
    )?;
    Ok(out)
}
