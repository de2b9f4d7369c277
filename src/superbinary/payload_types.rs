//! UARP payload type tag registry.
//!
//! Maps the 4-character ASCII tag in each row directory entry to a
//! [`PayloadType`] with a descriptive label. Matching is byte-exact and
//! case-sensitive: `"fota"` is not `"FOTA"`.
//!
//! Tags not present in the registry resolve to [`PayloadType::Unknown`],
//! which retains the raw tag bytes; its label is always
//! `"Unknown Payload Type"`.

use std::fmt;

use serde::{Serialize, Serializer};

/// All known UARP payload type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadType {
    /// Firmware Over the Air (FOTA)
    Fota,
    /// PROTO1 (P1FW)
    P1fw,
    /// PROTO2 (P2FW)
    P2fw,
    /// Engineering Validation Test (EVTF)
    Evtf,
    /// Production Validation Test (PVTF)
    Pvtf,
    /// Mainline Production Firmware (MPFW)
    Mpfw,
    /// Storage Firmware (STFW)
    Stfw,
    /// Data Transmit (DTTX)
    Dttx,
    /// Data Receive (DTRX)
    Dtrx,
    /// Test Point (DMTP)
    Dmtp,
    /// USB-C Power Delivery (PDFW)
    Pdfw,
    /// Upload (ULPD)
    Ulpd,
    /// Charge Direction (CHDR)
    Chdr,
    /// A tag not present in the registry; retains the raw bytes.
    Unknown([u8; 4]),
}

impl PayloadType {
    /// Resolve a payload type from the raw 4-byte tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use uarp::superbinary::payload_types::PayloadType;
    ///
    /// assert_eq!(PayloadType::from_tag(*b"FOTA"), PayloadType::Fota);
    /// assert_eq!(PayloadType::from_tag(*b"ZZZZ"), PayloadType::Unknown(*b"ZZZZ"));
    /// ```
    pub fn from_tag(tag: [u8; 4]) -> Self {
        match &tag {
            b"FOTA" => PayloadType::Fota,
            b"P1FW" => PayloadType::P1fw,
            b"P2FW" => PayloadType::P2fw,
            b"EVTF" => PayloadType::Evtf,
            b"PVTF" => PayloadType::Pvtf,
            b"MPFW" => PayloadType::Mpfw,
            b"STFW" => PayloadType::Stfw,
            b"DTTX" => PayloadType::Dttx,
            b"DTRX" => PayloadType::Dtrx,
            b"DMTP" => PayloadType::Dmtp,
            b"PDFW" => PayloadType::Pdfw,
            b"ULPD" => PayloadType::Ulpd,
            b"CHDR" => PayloadType::Chdr,
            _ => PayloadType::Unknown(tag),
        }
    }

    /// Returns the raw 4-byte tag of this payload type.
    pub fn tag(self) -> [u8; 4] {
        match self {
            PayloadType::Fota => *b"FOTA",
            PayloadType::P1fw => *b"P1FW",
            PayloadType::P2fw => *b"P2FW",
            PayloadType::Evtf => *b"EVTF",
            PayloadType::Pvtf => *b"PVTF",
            PayloadType::Mpfw => *b"MPFW",
            PayloadType::Stfw => *b"STFW",
            PayloadType::Dttx => *b"DTTX",
            PayloadType::Dtrx => *b"DTRX",
            PayloadType::Dmtp => *b"DMTP",
            PayloadType::Pdfw => *b"PDFW",
            PayloadType::Ulpd => *b"ULPD",
            PayloadType::Chdr => *b"CHDR",
            PayloadType::Unknown(tag) => tag,
        }
    }

    /// Returns the descriptive label of this payload type.
    ///
    /// # Examples
    ///
    /// ```
    /// use uarp::superbinary::payload_types::PayloadType;
    ///
    /// assert_eq!(PayloadType::Fota.label(), "Firmware Over the Air (FOTA)");
    /// assert_eq!(PayloadType::Unknown(*b"ZZZZ").label(), "Unknown Payload Type");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            PayloadType::Fota => "Firmware Over the Air (FOTA)",
            PayloadType::P1fw => "PROTO1 (P1FW)",
            PayloadType::P2fw => "PROTO2 (P2FW)",
            PayloadType::Evtf => "Engineering Validation Test (EVTF)",
            PayloadType::Pvtf => "Production Validation Test (PVTF)",
            PayloadType::Mpfw => "Mainline Production Firmware (MPFW)",
            PayloadType::Stfw => "Storage Firmware (STFW)",
            PayloadType::Dttx => "Data Transmit (DTTX)",
            PayloadType::Dtrx => "Data Receive (DTRX)",
            PayloadType::Dmtp => "Test Point (DMTP)",
            PayloadType::Pdfw => "USB-C Power Delivery (PDFW)",
            PayloadType::Ulpd => "Upload (ULPD)",
            PayloadType::Chdr => "Charge Direction (CHDR)",
            PayloadType::Unknown(_) => "Unknown Payload Type",
        }
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for PayloadType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(PayloadType::from_tag(*b"FOTA"), PayloadType::Fota);
        assert_eq!(PayloadType::from_tag(*b"MPFW"), PayloadType::Mpfw);
        assert_eq!(PayloadType::from_tag(*b"CHDR"), PayloadType::Chdr);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            PayloadType::from_tag(*b"fota"),
            PayloadType::Unknown(*b"fota")
        );
        assert_eq!(
            PayloadType::from_tag(*b"Fota"),
            PayloadType::Unknown(*b"Fota")
        );
    }

    #[test]
    fn test_unknown_retains_tag() {
        let unknown = PayloadType::from_tag(*b"ZZZZ");
        assert_eq!(unknown, PayloadType::Unknown(*b"ZZZZ"));
        assert_eq!(unknown.tag(), *b"ZZZZ");
        assert_eq!(unknown.label(), "Unknown Payload Type");
    }

    #[test]
    fn test_non_ascii_tag_is_unknown() {
        let tag = [0x00, 0xFF, 0x01, 0x02];
        assert_eq!(PayloadType::from_tag(tag), PayloadType::Unknown(tag));
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(
            format!("{}", PayloadType::Fota),
            "Firmware Over the Air (FOTA)"
        );
        assert_eq!(
            format!("{}", PayloadType::Unknown(*b"ABCD")),
            "Unknown Payload Type"
        );
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&PayloadType::Pdfw).unwrap();
        assert_eq!(json, "\"USB-C Power Delivery (PDFW)\"");
    }

    /// Verify tag() roundtrips through from_tag() for every known type.
    #[test]
    fn test_tag_roundtrip() {
        let types = [
            PayloadType::Fota,
            PayloadType::P1fw,
            PayloadType::P2fw,
            PayloadType::Evtf,
            PayloadType::Pvtf,
            PayloadType::Mpfw,
            PayloadType::Stfw,
            PayloadType::Dttx,
            PayloadType::Dtrx,
            PayloadType::Dmtp,
            PayloadType::Pdfw,
            PayloadType::Ulpd,
            PayloadType::Chdr,
        ];
        for pt in &types {
            assert_eq!(
                PayloadType::from_tag(pt.tag()),
                *pt,
                "roundtrip failed for {:?} (tag {:?})",
                pt,
                pt.tag()
            );
            assert_ne!(pt.label(), "Unknown Payload Type", "label missing for {:?}", pt);
        }
    }
}
