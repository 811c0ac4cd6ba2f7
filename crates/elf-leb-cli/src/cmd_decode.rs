/// Implementation of `elfleb decode`.
///
/// Parses each argument as hex, then decodes the first buffer with
/// [`unpack_one_with`]. Any further buffers are ignored, matching the
/// argument-vector contract of the library.
///
/// # Output format
///
/// ```text
/// value:     624485 (0x98765)
/// consumed:  3 bytes
/// remainder: 8001
/// ```
///
/// With `--all`, one row per value in the first buffer:
///
/// ```text
/// 0x0000  len=3  value=624485 (0x98765)
/// 0x0003  len=2  value=128 (0x80)
/// ```
use std::fmt::Write;

use anyhow::{Context, Result};
use elf_leb::{DecodeConfig, Uleb128Reader, unpack_one_with};

use crate::DecodeArgs;

/// Run the `elfleb decode` command.
///
/// # Errors
///
/// Returns an error if an argument is not valid hex, no argument was given,
/// or the first buffer does not start with a complete ULEB128 value.
pub fn run(args: &DecodeArgs, config: &DecodeConfig) -> Result<()> {
    print!("{}", render(args, config)?);
    Ok(())
}

/// Build the command's stdout text.
fn render(args: &DecodeArgs, config: &DecodeConfig) -> Result<String> {
    let buffers = args
        .hex
        .iter()
        .map(|s| parse_hex(s))
        .collect::<Result<Vec<_>>>()?;
    let slices: Vec<&[u8]> = buffers.iter().map(Vec::as_slice).collect();

    let (value, remainder) = unpack_one_with(&slices, config).context("cannot decode input")?;

    let mut out = String::new();

    if !args.all {
        let consumed = slices[0].len() - remainder.len();
        writeln!(out, "value:     {value} ({value:#x})")?;
        writeln!(
            out,
            "consumed:  {consumed} byte{}",
            if consumed == 1 { "" } else { "s" }
        )?;
        if remainder.is_empty() {
            writeln!(out, "remainder: (empty)")?;
        } else {
            writeln!(out, "remainder: {}", hex::encode(remainder))?;
        }
        return Ok(out);
    }

    for field in Uleb128Reader::with_config(slices[0], *config) {
        let field = field.context("cannot decode input")?;
        writeln!(out, "{field}")?;
    }

    Ok(out)
}

/// Parse a hex argument, tolerating a `0x` prefix and separators.
///
/// `"0xE5 8E 26"`, `"e5:8e:26"` and `"e58e26"` all yield `[0xE5, 0x8E, 0x26]`.
fn parse_hex(arg: &str) -> Result<Vec<u8>> {
    let trimmed = arg.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !matches!(c, ' ' | ':' | '_' | ','))
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex argument {arg:?}"))
}
