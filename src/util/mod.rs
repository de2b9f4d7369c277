//! Shared utilities (hex dump and field formatting).

pub mod hex;
