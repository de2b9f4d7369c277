//! Top-level asset table decoding.
//!
//! The asset table is the 44-byte header at the front of every SuperBinary
//! buffer. It carries the container format version, the declared sizes, the
//! asset version, and the offset/length pairs locating the global metadata
//! section and the row directory. [`AssetTable::parse`] decodes the header
//! and then walks both referenced sections, producing the fully decoded
//! container in one call.

use serde::Serialize;

use crate::superbinary::error::{DecodeError, Section};
use crate::superbinary::metadata::{parse_metadata, Metadata};
use crate::superbinary::reader::{section_slice, Reader, Version};
use crate::superbinary::row::{parse_rows, Row};

/// A fully decoded SuperBinary asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetTable<'a> {
    /// SuperBinary container format version.
    pub format: u32,
    /// Declared size of the asset header plus its metadata and row sections.
    pub size: u32,
    /// Declared size of the complete asset, payloads included.
    pub binary_size: u32,
    /// Version of the asset as a whole.
    pub version: Version,
    /// Global metadata records, in section order.
    pub metadata: Vec<Metadata>,
    /// Payload rows, in directory order.
    pub rows: Vec<Row<'a>>,
}

impl<'a> AssetTable<'a> {
    /// Decode a SuperBinary asset from `asset`.
    ///
    /// Decoding is all-or-nothing: any structural defect anywhere in the
    /// header, the metadata sections, or the row directory aborts with a
    /// [`DecodeError`] naming the section and offset at fault. On success
    /// every row's payload is a view into `asset` itself; no payload bytes
    /// are copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use uarp::superbinary::error::{DecodeError, Section};
    /// use uarp::superbinary::table::AssetTable;
    ///
    /// let err = AssetTable::parse(&[0u8; 10]).unwrap_err();
    /// assert!(matches!(err, DecodeError::Truncated { section: Section::Header, .. }));
    /// ```
    pub fn parse(asset: &'a [u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(asset, Section::Header);

        let format = reader.read_u32()?;
        let size = reader.read_u32()?;
        let binary_size = reader.read_u32()?;
        let version = reader.read_version()?;
        let metadata_offset = reader.read_u32()?;
        let metadata_length = reader.read_u32()?;
        let row_offset = reader.read_u32()?;
        let row_length = reader.read_u32()?;

        let metadata_raw = section_slice(
            asset,
            metadata_offset,
            metadata_length,
            Section::GlobalMetadata,
        )?;
        let metadata = parse_metadata(
            metadata_raw,
            metadata_offset as usize,
            Section::GlobalMetadata,
        )?;

        let rows = parse_rows(asset, row_offset, row_length)?;

        Ok(AssetTable {
            format,
            size,
            binary_size,
            version,
            metadata,
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superbinary::constants::SIZE_TABLE_HEADER;
    use byteorder::{BigEndian, ByteOrder};

    /// Encode a 44-byte header with zero-length metadata and row sections.
    fn empty_header(format: u32, version: [u32; 4]) -> Vec<u8> {
        let mut buf = vec![0u8; SIZE_TABLE_HEADER];
        BigEndian::write_u32(&mut buf[0..], format);
        BigEndian::write_u32(&mut buf[4..], SIZE_TABLE_HEADER as u32);
        BigEndian::write_u32(&mut buf[8..], SIZE_TABLE_HEADER as u32);
        for (i, part) in version.iter().enumerate() {
            BigEndian::write_u32(&mut buf[12 + i * 4..], *part);
        }
        buf
    }

    #[test]
    fn test_parse_empty_table() {
        let asset = empty_header(2, [7, 0, 2, 19]);
        let table = AssetTable::parse(&asset).unwrap();

        assert_eq!(table.format, 2);
        assert_eq!(table.size, 44);
        assert_eq!(table.binary_size, 44);
        assert_eq!(table.version.to_string(), "7.0.2.19");
        assert!(table.metadata.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_header_truncated() {
        let asset = empty_header(2, [1, 2, 3, 4]);
        let err = AssetTable::parse(&asset[..20]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                section: Section::Header,
                offset: 12,
                needed: 16,
                remaining: 8,
            }
        );
    }

    #[test]
    fn test_global_metadata_out_of_bounds() {
        let mut asset = empty_header(2, [1, 0, 0, 0]);
        BigEndian::write_u32(&mut asset[28..], 44);
        BigEndian::write_u32(&mut asset[32..], 10);

        let err = AssetTable::parse(&asset).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                section: Section::GlobalMetadata,
                offset: 44,
                needed: 10,
                remaining: 0,
            }
        );
    }
}
