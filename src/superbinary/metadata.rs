//! Metadata record decoding.
//!
//! A metadata section is a sequence of self-describing records: a 4-byte type
//! code, a 4-byte declared value length, and a 2- or 4-byte big-endian value.
//! Records are decoded in order while at least [`SIZE_METADATA_MIN`] bytes
//! remain; a shorter tail cannot hold another record and is ignored.

use serde::Serialize;

use crate::superbinary::constants::SIZE_METADATA_MIN;
use crate::superbinary::error::{DecodeError, Section};
use crate::superbinary::metadata_types::MetadataType;
use crate::superbinary::reader::Reader;

/// A single decoded metadata record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// The record's type code, resolved against the known-type registry.
    pub kind: MetadataType,
    /// The record value. 2-byte values are widened to u32.
    pub value: u32,
}

/// Decode every metadata record in `data`, preserving order.
///
/// `base` is the absolute offset of `data` within the asset and `section`
/// names the region being decoded; both affect only error positions. Pass
/// base 0 for a standalone buffer.
///
/// A record declaring a value length other than 2 or 4 aborts the decode:
/// the record's true size is unknowable, so continuing would read the rest
/// of the section out of phase and fabricate records.
pub fn parse_metadata(
    data: &[u8],
    base: usize,
    section: Section,
) -> Result<Vec<Metadata>, DecodeError> {
    let mut reader = Reader::with_base(data, base, section);
    let mut records = Vec::new();

    while reader.remaining() >= SIZE_METADATA_MIN {
        let record_offset = reader.offset();
        let kind = MetadataType::from_u32(reader.read_u32()?);
        let length = reader.read_u32()?;

        let value = match length {
            2 => u32::from(reader.read_u16()?),
            4 => reader.read_u32()?,
            _ => {
                return Err(DecodeError::UnsupportedValueLength {
                    section,
                    offset: record_offset,
                    length,
                })
            }
        };

        records.push(Metadata { kind, value });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, ByteOrder};

    fn record_u32(code: u32, value: u32) -> Vec<u8> {
        let mut buf = vec![0u8; 12];
        BigEndian::write_u32(&mut buf[0..], code);
        BigEndian::write_u32(&mut buf[4..], 4);
        BigEndian::write_u32(&mut buf[8..], value);
        buf
    }

    fn record_u16(code: u32, value: u16) -> Vec<u8> {
        let mut buf = vec![0u8; 10];
        BigEndian::write_u32(&mut buf[0..], code);
        BigEndian::write_u32(&mut buf[4..], 2);
        BigEndian::write_u16(&mut buf[8..], value);
        buf
    }

    #[test]
    fn test_parse_u32_record() {
        let data = record_u32(3436347648, 5);
        let records = parse_metadata(&data, 0, Section::GlobalMetadata).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind, MetadataType::PayloadFilepath);
        assert_eq!(records[0].kind.label(), "Payload Filepath");
        assert_eq!(records[0].value, 5);
    }

    #[test]
    fn test_parse_u16_record_widens_value() {
        let data = record_u16(3436347657, 20);
        let records = parse_metadata(&data, 0, Section::GlobalMetadata).unwrap();
        assert_eq!(
            records,
            vec![Metadata {
                kind: MetadataType::MinimumBatteryLevel,
                value: 20,
            }]
        );
    }

    #[test]
    fn test_records_decode_in_order() {
        let mut data = record_u32(3436347652, 1);
        data.extend_from_slice(&record_u16(3436347657, 30));
        data.extend_from_slice(&record_u32(99, 7));

        let records = parse_metadata(&data, 0, Section::GlobalMetadata).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind, MetadataType::UrgentUpdate);
        assert_eq!(records[1].value, 30);
        assert_eq!(records[2].kind, MetadataType::Unknown(99));
        assert_eq!(records[2].kind.label(), "Unknown Metadata Type");
    }

    #[test]
    fn test_exact_minimum_record_parses() {
        // 10 bytes: exactly one record with a 2-byte value
        let data = record_u16(3436347651, 9);
        assert_eq!(data.len(), SIZE_METADATA_MIN);
        let records = parse_metadata(&data, 0, Section::GlobalMetadata).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_short_tail_is_ignored() {
        let mut data = record_u32(3436347648, 1);
        data.extend_from_slice(&[0xAB; 9]);

        let records = parse_metadata(&data, 0, Section::GlobalMetadata).unwrap();
        assert_eq!(records.len(), 1, "9 trailing bytes must not form a record");
    }

    #[test]
    fn test_empty_section_yields_no_records() {
        let records = parse_metadata(&[], 0, Section::GlobalMetadata).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_unsupported_length_aborts() {
        let mut data = vec![0u8; 11];
        BigEndian::write_u32(&mut data[0..], 3436347648);
        BigEndian::write_u32(&mut data[4..], 3); // neither 2 nor 4

        let err = parse_metadata(&data, 200, Section::RowMetadata(1)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedValueLength {
                section: Section::RowMetadata(1),
                offset: 200,
                length: 3,
            }
        );
    }

    #[test]
    fn test_unsupported_length_reports_record_offset() {
        // First record is fine; the second one declares length 0
        let mut data = record_u32(3436347648, 1);
        let mut bad = vec![0u8; 10];
        BigEndian::write_u32(&mut bad[0..], 3436347649);
        BigEndian::write_u32(&mut bad[4..], 0);
        data.extend_from_slice(&bad);

        let err = parse_metadata(&data, 0, Section::GlobalMetadata).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedValueLength {
                section: Section::GlobalMetadata,
                offset: 12,
                length: 0,
            }
        );
    }

    #[test]
    fn test_declared_u32_value_with_short_tail_is_truncated() {
        // 10 bytes remain (enough to enter the loop) but the record declares
        // a 4-byte value and only 2 bytes follow the header
        let mut data = vec![0u8; 10];
        BigEndian::write_u32(&mut data[0..], 3436347648);
        BigEndian::write_u32(&mut data[4..], 4);

        let err = parse_metadata(&data, 44, Section::GlobalMetadata).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated {
                section: Section::GlobalMetadata,
                offset: 52,
                needed: 4,
                remaining: 2,
            }
        );
    }
}
