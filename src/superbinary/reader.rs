//! Cursor-based big-endian reads over an asset buffer.
//!
//! A [`Reader`] walks a byte slice front to back without copying: [`take`]
//! returns sub-slice views and the integer helpers convert fixed-width
//! big-endian fields. Every reader knows which [`Section`] it is walking and
//! the absolute offset of its slice within the asset, so a short read reports
//! the exact asset position that could not be satisfied.
//!
//! [`take`]: Reader::take

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use serde::{Serialize, Serializer};

use crate::superbinary::constants::SIZE_VERSION;
use crate::superbinary::error::{DecodeError, Section};

/// An asset version: four u32 components rendered dotted, e.g. `1.2.3.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub release: u32,
    pub build: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.release, self.build
        )
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Forward-only cursor over one section of an asset buffer.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    base: usize,
    section: Section,
}

impl<'a> Reader<'a> {
    /// Create a reader over `buf` with positions reported relative to the
    /// buffer itself (base offset 0).
    pub fn new(buf: &'a [u8], section: Section) -> Self {
        Self::with_base(buf, 0, section)
    }

    /// Create a reader over `buf` located at absolute offset `base` within
    /// the asset, so errors carry asset-relative positions.
    pub fn with_base(buf: &'a [u8], base: usize, section: Section) -> Self {
        Reader {
            buf,
            pos: 0,
            base,
            section,
        }
    }

    /// Bytes left between the cursor and the end of the section.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Absolute offset of the cursor within the asset.
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Take the next `length` bytes as a view into the buffer and advance.
    pub fn take(&mut self, length: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < length {
            return Err(DecodeError::Truncated {
                section: self.section,
                offset: self.offset(),
                needed: length,
                remaining: self.remaining(),
            });
        }
        let view = &self.buf[self.pos..self.pos + length];
        self.pos += length;
        Ok(view)
    }

    /// Read a big-endian u16 and advance.
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(BigEndian::read_u16(self.take(2)?))
    }

    /// Read a big-endian u32 and advance.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(BigEndian::read_u32(self.take(4)?))
    }

    /// Read a 16-byte version field (four big-endian u32 components).
    pub fn read_version(&mut self) -> Result<Version, DecodeError> {
        let raw = self.take(SIZE_VERSION)?;
        Ok(Version {
            major: BigEndian::read_u32(&raw[0..]),
            minor: BigEndian::read_u32(&raw[4..]),
            release: BigEndian::read_u32(&raw[8..]),
            build: BigEndian::read_u32(&raw[12..]),
        })
    }
}

/// Resolve an absolute offset/length pair into a view of `asset`.
///
/// Every offset in a SuperBinary, header fields and row directory entries
/// alike, addresses the top-level buffer rather than the enclosing section.
/// The bounds check runs in u64 so adversarial 32-bit values cannot wrap.
pub(crate) fn section_slice(
    asset: &[u8],
    offset: u32,
    length: u32,
    section: Section,
) -> Result<&[u8], DecodeError> {
    let end = u64::from(offset) + u64::from(length);
    if end > asset.len() as u64 {
        return Err(DecodeError::Truncated {
            section,
            offset: offset as usize,
            needed: length as usize,
            remaining: asset.len().saturating_sub(offset as usize),
        });
    }
    Ok(&asset[offset as usize..end as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ByteOrder};

    #[test]
    fn test_take_advances_cursor() {
        let buf = [1u8, 2, 3, 4, 5];
        let mut reader = Reader::new(&buf, Section::Header);
        assert_eq!(reader.take(2).unwrap(), &[1, 2]);
        assert_eq!(reader.remaining(), 3);
        assert_eq!(reader.offset(), 2);
        assert_eq!(reader.take(3).unwrap(), &[3, 4, 5]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_take_past_end_reports_absolute_offset() {
        let buf = [0u8; 6];
        let mut reader = Reader::with_base(&buf, 100, Section::GlobalMetadata);
        reader.take(4).unwrap();
        let err = reader.take(4).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                section: Section::GlobalMetadata,
                offset: 104,
                needed: 4,
                remaining: 2,
            }
        );
    }

    #[test]
    fn test_read_u16_u32_big_endian() {
        let buf = [0x12, 0x34, 0xAA, 0xBB, 0xCC, 0xDD];
        let mut reader = Reader::new(&buf, Section::Header);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0xAABBCCDD);
    }

    #[test]
    fn test_read_version_renders_dotted() {
        let mut buf = [0u8; 16];
        BigEndian::write_u32(&mut buf[0..], 1);
        BigEndian::write_u32(&mut buf[4..], 2);
        BigEndian::write_u32(&mut buf[8..], 3);
        BigEndian::write_u32(&mut buf[12..], 4);

        let mut reader = Reader::new(&buf, Section::Header);
        let version = reader.read_version().unwrap();
        assert_eq!(version.major, 1);
        assert_eq!(version.build, 4);
        assert_eq!(version.to_string(), "1.2.3.4");
    }

    #[test]
    fn test_version_serializes_as_string() {
        let version = Version {
            major: 7,
            minor: 0,
            release: 2,
            build: 19,
        };
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"7.0.2.19\"");
    }

    #[test]
    fn test_section_slice_in_bounds() {
        let asset = [9u8, 8, 7, 6, 5];
        let view = section_slice(&asset, 1, 3, Section::Payload(0)).unwrap();
        assert_eq!(view, &[8, 7, 6]);
    }

    #[test]
    fn test_section_slice_zero_length() {
        let asset = [1u8, 2];
        let view = section_slice(&asset, 2, 0, Section::GlobalMetadata).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_section_slice_out_of_bounds() {
        let asset = [0u8; 10];
        let err = section_slice(&asset, 8, 4, Section::Payload(2)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                section: Section::Payload(2),
                offset: 8,
                needed: 4,
                remaining: 2,
            }
        );
    }

    #[test]
    fn test_section_slice_extreme_values_do_not_wrap() {
        let asset = [0u8; 10];
        let err = section_slice(&asset, u32::MAX, u32::MAX, Section::RowDirectory).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { remaining: 0, .. }));
    }
}
