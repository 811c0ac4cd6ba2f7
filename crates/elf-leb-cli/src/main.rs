/// `elfleb` — decode and inspect ULEB128 values as found in DWARF
/// sections of ELF objects.
///
/// # Command overview
///
/// ```text
/// elfleb <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode a ULEB128 value from hex arguments
///   inspect    List every ULEB128 value in a file of concatenated values
///   validate   Check that a file holds only complete ULEB128 values
///   help       Print help information
///
/// Global options:
///   --wrap           Discard bits beyond 64 instead of failing
///   --max-len <N>    Reject values encoded in more than N bytes
///   -v, --verbose    Print extra diagnostics to stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                     |
/// |------|---------------------------------------------|
/// | 0    | Success                                     |
/// | 1    | Error (I/O failure, malformed input, etc.)  |
///
/// All error details are written to stderr so stdout can be piped cleanly.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use elf_leb::{DecodeConfig, OverflowPolicy};

mod cmd_decode;
mod cmd_inspect;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "elfleb", version, about = "ULEB128 decoder for ELF/DWARF byte streams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Keep the low 64 bits of oversized values instead of failing.
    #[arg(long, global = true)]
    wrap: bool,

    /// Maximum number of bytes a single encoded value may occupy.
    #[arg(long, global = true)]
    max_len: Option<usize>,

    /// Print extra diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    fn decode_config(&self) -> DecodeConfig {
        DecodeConfig {
            overflow: if self.wrap {
                OverflowPolicy::Wrap
            } else {
                OverflowPolicy::Reject
            },
            max_len: self.max_len,
        }
    }
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a ULEB128 value from hex-encoded bytes.
    Decode(DecodeArgs),
    /// List every ULEB128 value in a file of concatenated values.
    Inspect(InspectArgs),
    /// Check that a file holds only complete ULEB128 values.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `elfleb decode`.
///
/// Each argument is a hex string (`"e58e26"`, `"0xE5 8E 26"`). Only the
/// first buffer is decoded; the rest are accepted and ignored. Calling the
/// command with no buffer at all is a usage error.
///
/// ```text
/// ┌───────┬──────────────────────────────────────────────────────┐
/// │ Flag  │ Effect                                               │
/// ├───────┼──────────────────────────────────────────────────────┤
/// │ --all │ Decode every value in the buffer, not just the first │
/// └───────┴──────────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Hex-encoded input buffers.
    pub hex: Vec<String>,

    /// Decode every concatenated value in the first buffer.
    #[arg(long)]
    pub all: bool,
}

/// Arguments for `elfleb inspect`.
///
/// ```text
/// ┌────────────┬───────────────────────────────────────────────┐
/// │ Flag       │ Effect                                        │
/// ├────────────┼───────────────────────────────────────────────┤
/// │ --skip N   │ Start decoding at byte offset N               │
/// │ --count N  │ Stop after N values                           │
/// │ --json     │ Emit a JSON array instead of text rows        │
/// └────────────┴───────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to a file of raw ULEB128 bytes.
    pub file: PathBuf,

    /// Byte offset to start decoding from.
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Maximum number of values to list.
    #[arg(long)]
    pub count: Option<usize>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `elfleb validate`.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to a file of raw ULEB128 bytes.
    pub file: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    let config = cli.decode_config();

    if cli.verbose {
        eprintln!(
            "config: overflow={:?}, max_len={:?}",
            config.overflow, config.max_len
        );
    }

    let result = match &cli.command {
        Commands::Decode(args) => cmd_decode::run(args, &config),
        Commands::Inspect(args) => cmd_inspect::run(args, &config, cli.verbose),
        Commands::Validate(args) => cmd_validate::run(args, &config),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
