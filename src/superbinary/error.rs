//! Typed decode failures.
//!
//! Decoding is all-or-nothing: the first structural problem aborts the whole
//! decode with a [`DecodeError`] naming the [`Section`] being walked and the
//! absolute byte position where it occurred. Unknown metadata type codes and
//! payload tags are not errors; they resolve to the registries' unknown
//! variants and decoding continues.

use std::fmt;

use thiserror::Error;

/// The region of a SuperBinary asset being decoded when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The 44-byte table header at the start of the asset.
    Header,
    /// The global metadata section referenced by the header.
    GlobalMetadata,
    /// The row directory referenced by the header.
    RowDirectory,
    /// The metadata section belonging to the row at this index.
    RowMetadata(usize),
    /// The payload belonging to the row at this index.
    Payload(usize),
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "table header"),
            Section::GlobalMetadata => write!(f, "global metadata"),
            Section::RowDirectory => write!(f, "row directory"),
            Section::RowMetadata(index) => write!(f, "row {} metadata", index),
            Section::Payload(index) => write!(f, "row {} payload", index),
        }
    }
}

/// Errors returned when decoding a SuperBinary asset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A read or section reference extended past the end of the asset buffer.
    ///
    /// Raised both by sequential reads that run out of bytes and by
    /// offset/length pairs that resolve outside the buffer.
    #[error("truncated {section} at offset {offset}: needed {needed} bytes, {remaining} remain")]
    Truncated {
        section: Section,
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A metadata record declared a value length other than 2 or 4 bytes.
    ///
    /// The record size cannot be trusted, so the position of the next record
    /// is unknowable and decoding stops rather than desynchronize.
    #[error("unsupported metadata value length {length} in {section} at offset {offset}")]
    UnsupportedValueLength {
        section: Section,
        offset: usize,
        length: u32,
    },

    /// The row directory length is not a multiple of the 40-byte entry size.
    #[error("row directory length {length} is not a multiple of 40 bytes")]
    MisalignedRowDirectory { length: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_display() {
        assert_eq!(format!("{}", Section::Header), "table header");
        assert_eq!(format!("{}", Section::GlobalMetadata), "global metadata");
        assert_eq!(format!("{}", Section::RowMetadata(3)), "row 3 metadata");
        assert_eq!(format!("{}", Section::Payload(0)), "row 0 payload");
    }

    #[test]
    fn test_truncated_message_carries_position() {
        let err = DecodeError::Truncated {
            section: Section::RowDirectory,
            offset: 120,
            needed: 40,
            remaining: 12,
        };
        assert_eq!(
            err.to_string(),
            "truncated row directory at offset 120: needed 40 bytes, 12 remain"
        );
    }

    #[test]
    fn test_misaligned_directory_message() {
        let err = DecodeError::MisalignedRowDirectory { length: 41 };
        assert_eq!(
            err.to_string(),
            "row directory length 41 is not a multiple of 40 bytes"
        );
    }
}
