//! CLI subcommand implementations for the `uarp` binary.
//!
//! The `uarp` binary provides three subcommands for analyzing SuperBinary
//! firmware assets. CLI argument parsing uses clap derive macros, with the
//! top-level [`app::Cli`] struct and [`app::Commands`] enum defined in
//! [`app`] and shared between `main.rs` and `build.rs` (for man page
//! generation) via `include!()`.
//!
//! Each subcommand module follows the same pattern: an `Options` struct
//! holding the parsed arguments and a `pub fn execute(opts, writer) ->
//! Result<(), UarpError>` entry point. The `writer: &mut dyn Write`
//! parameter allows output to be captured in tests or redirected to a file
//! via the global `--output` flag.
//!
//! # Subcommands
//!
//! | Command | Module | Purpose |
//! |---------|--------|---------|
//! | `uarp info` | [`info`] | Decode an asset and display its header, metadata, and rows |
//! | `uarp extract` | [`extract`] | Write payload bytes out to files, one per row |
//! | `uarp dump` | [`dump`] | Hex dump of raw bytes by row payload or absolute file offset |
//!
//! # Common patterns
//!
//! - **`--json`** — Structured JSON output via `#[derive(Serialize)]`
//!   structs and `serde_json`.
//! - **`--verbose` / `-v`** — Show additional detail such as raw metadata
//!   codes, payload tags, and payload offsets.
//! - **`--color`** (global) — Control colored terminal output (`auto`,
//!   `always`, `never`).
//! - **`--output` / `-o`** (global) — Redirect output to a file instead of
//!   stdout.
//!
//! The `wprintln!` and `wprint!` macros wrap `writeln!`/`write!` to convert
//! `io::Error` into `UarpError`.

pub mod app;
pub mod dump;
pub mod extract;
pub mod info;

/// Write a line to the given writer, converting io::Error to UarpError.
macro_rules! wprintln {
    ($w:expr) => {
        writeln!($w).map_err(|e| $crate::UarpError::Io(e.to_string()))
    };
    ($w:expr, $($arg:tt)*) => {
        writeln!($w, $($arg)*).map_err(|e| $crate::UarpError::Io(e.to_string()))
    };
}

/// Write (without newline) to the given writer, converting io::Error to UarpError.
macro_rules! wprint {
    ($w:expr, $($arg:tt)*) => {
        write!($w, $($arg)*).map_err(|e| $crate::UarpError::Io(e.to_string()))
    };
}

pub(crate) use wprint;
pub(crate) use wprintln;

use crate::UarpError;

/// Read an entire asset file into memory.
///
/// SuperBinary assets are decoded against a single in-memory buffer because
/// every offset in the format is absolute; payload views borrow from the
/// returned bytes.
pub(crate) fn load_asset(path: &str) -> Result<Vec<u8>, UarpError> {
    std::fs::read(path).map_err(|e| UarpError::Io(format!("Cannot read {}: {}", path, e)))
}
