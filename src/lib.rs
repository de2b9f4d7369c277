//! UARP SuperBinary firmware asset analysis toolkit.
//!
//! The `uarp-utils` crate (library name `uarp`) provides Rust types and
//! functions for decoding and inspecting SuperBinary firmware containers,
//! the asset format carried by UARP (Unified Accessory Restore Protocol)
//! firmware updates for accessories.
//!
//! # CLI Reference
//!
//! Install the `uarp` binary and use its subcommands to work with
//! SuperBinary assets from the command line.
//!
//! ## Installation
//!
//! ```text
//! cargo install uarp-utils            # crates.io
//! ```
//!
//! Pre-built binaries for Linux and macOS (x86_64 + aarch64) are available
//! on the [GitHub releases page](https://github.com/ringo380/uarp-utils/releases).
//!
//! ## Subcommands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`uarp info`](cli::app::Commands::Info) | Decode an asset and display header, metadata, and rows |
//! | [`uarp extract`](cli::app::Commands::Extract) | Write payload bytes out to files, one per row |
//! | [`uarp dump`](cli::app::Commands::Dump) | Hex dump of raw bytes by row payload or absolute offset |
//!
//! ## Global options
//!
//! All subcommands accept `--color <auto|always|never>` and `--output <file>`.
//! The info subcommand also accepts `--json` for machine-readable output.
//!
//! See the [`cli`] module for full details.
//!
//! # Library API
//!
//! Add `uarp` as a dependency to use the decoding library directly:
//!
//! ```toml
//! [dependencies]
//! uarp = { package = "uarp-utils", version = "1" }
//! ```
//!
//! ## Quick example
//!
//! ```no_run
//! use uarp::superbinary::table::AssetTable;
//!
//! // Read the whole asset into memory; every offset in the format is
//! // absolute, so decoding works against a single buffer.
//! let asset = std::fs::read("firmware.uarp").unwrap();
//! let table = AssetTable::parse(&asset).unwrap();
//!
//! println!("Asset version: {}", table.version);
//! for row in &table.rows {
//!     println!("{}: {} bytes", row.payload_type, row.payload.len());
//! }
//! ```
//!
//! ## Key entry points
//!
//! | Type / Function | Purpose |
//! |-----------------|---------|
//! | [`AssetTable::parse`](superbinary::table::AssetTable::parse) | Decode a complete SuperBinary asset |
//! | [`Row`](superbinary::row::Row) | Payload rows with zero-copy payload views |
//! | [`Metadata`](superbinary::metadata::Metadata) | Decoded TLV metadata records |
//! | [`MetadataType`](superbinary::metadata_types::MetadataType) | Map 32-bit metadata codes to labels |
//! | [`PayloadType`](superbinary::payload_types::PayloadType) | Map 4-character payload tags to labels |
//! | [`DecodeError`](superbinary::error::DecodeError) | Structural decode failures with section and offset |
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`superbinary::table`] | Asset table header decoding, the top-level entry point |
//! | [`superbinary::row`] | Row directory decoding and payload views |
//! | [`superbinary::metadata`] | TLV metadata section decoding |
//! | [`superbinary::metadata_types`] | Metadata code registry |
//! | [`superbinary::payload_types`] | Payload tag registry |
//! | [`superbinary::reader`] | Cursor-based big-endian reads over asset buffers |
//! | [`superbinary::error`] | Decode error taxonomy |
//! | [`superbinary::constants`] | SuperBinary structure sizes |
//! | [`util::hex`] | Hex dump and field formatting |
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | on | Enables the `uarp` binary (clap argument parsing + colored output). |

#[cfg(feature = "cli")]
pub mod cli;
pub mod superbinary;
pub mod util;

use thiserror::Error;

/// Errors returned by `uarp` operations.
#[derive(Error, Debug)]
pub enum UarpError {
    /// An I/O error occurred (file open, read, or write failure).
    #[error("I/O error: {0}")]
    Io(String),

    /// The asset could not be decoded (truncated or malformed structure).
    #[error("Decode error: {0}")]
    Decode(#[from] superbinary::error::DecodeError),

    /// An invalid argument was supplied (out-of-range row index, bad option, etc.).
    #[error("Invalid argument: {0}")]
    Argument(String),
}
