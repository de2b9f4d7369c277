//! Row directory decoding.
//!
//! The row directory is an array of fixed 40-byte entries, one per payload
//! carried by the asset. Each entry names the payload's type tag and version
//! and points at the row's own metadata section and payload bytes. Like every
//! SuperBinary offset, those references are absolute positions in the
//! top-level buffer, not positions within the directory.

use serde::Serialize;

use crate::superbinary::constants::{SIZE_PAYLOAD_TAG, SIZE_ROW_ENTRY};
use crate::superbinary::error::{DecodeError, Section};
use crate::superbinary::metadata::{parse_metadata, Metadata};
use crate::superbinary::payload_types::PayloadType;
use crate::superbinary::reader::{section_slice, Reader, Version};

/// A decoded payload row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<'a> {
    /// Payload type, resolved from the entry's 4-character tag.
    pub payload_type: PayloadType,
    /// Version of this payload.
    pub version: Version,
    /// Metadata records belonging to this row, in section order.
    pub metadata: Vec<Metadata>,
    /// The payload bytes, viewed in place within the asset buffer.
    #[serde(skip)]
    pub payload: &'a [u8],
    /// Entry size declared by the directory. Informational.
    pub declared_size: u32,
    /// Absolute offset of the payload within the asset.
    pub payload_offset: u32,
}

/// Decode the row directory at `offset`/`length` within `asset`.
///
/// The directory length must be an exact multiple of the 40-byte entry size;
/// anything else means the directory and the decoder disagree about where
/// entries start, so the decode aborts instead of reading misaligned fields.
pub fn parse_rows(asset: &[u8], offset: u32, length: u32) -> Result<Vec<Row<'_>>, DecodeError> {
    let directory = section_slice(asset, offset, length, Section::RowDirectory)?;

    if directory.len() % SIZE_ROW_ENTRY != 0 {
        return Err(DecodeError::MisalignedRowDirectory {
            length: directory.len(),
        });
    }

    let count = directory.len() / SIZE_ROW_ENTRY;
    let mut reader = Reader::with_base(directory, offset as usize, Section::RowDirectory);
    let mut rows = Vec::with_capacity(count);

    for index in 0..count {
        let declared_size = reader.read_u32()?;

        let mut tag = [0u8; SIZE_PAYLOAD_TAG];
        tag.copy_from_slice(reader.take(SIZE_PAYLOAD_TAG)?);
        let payload_type = PayloadType::from_tag(tag);

        let version = reader.read_version()?;

        let metadata_offset = reader.read_u32()?;
        let metadata_length = reader.read_u32()?;
        let payload_offset = reader.read_u32()?;
        let payload_length = reader.read_u32()?;

        let metadata_raw = section_slice(
            asset,
            metadata_offset,
            metadata_length,
            Section::RowMetadata(index),
        )?;
        let metadata = parse_metadata(
            metadata_raw,
            metadata_offset as usize,
            Section::RowMetadata(index),
        )?;

        let payload =
            section_slice(asset, payload_offset, payload_length, Section::Payload(index))?;

        rows.push(Row {
            payload_type,
            version,
            metadata,
            payload,
            declared_size,
            payload_offset,
        });
    }

    Ok(rows)
}
