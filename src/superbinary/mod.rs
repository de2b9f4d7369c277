//! UARP SuperBinary binary format decoding.
//!
//! This module contains types and functions for reading the SuperBinary
//! firmware container used by UARP (Unified Accessory Restore Protocol)
//! updates, including the asset table header, TLV metadata sections, the
//! row directory, and the metadata/payload type registries.
//!
//! Start with [`table::AssetTable::parse`] to decode a complete asset, then
//! walk [`table::AssetTable::rows`] to reach each payload and its metadata.

pub mod constants;
pub mod error;
pub mod metadata;
pub mod metadata_types;
pub mod payload_types;
pub mod reader;
pub mod row;
pub mod table;
