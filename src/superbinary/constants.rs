/// SuperBinary structure constants.
///
/// Fixed sizes of the on-disk SuperBinary layout. All multi-byte fields are
/// big-endian, and all offset fields are absolute positions within the asset.
// Table header (44 bytes total):
// format (4) + size (4) + binary size (4) + version (16)
// + metadata offset/length (8) + row directory offset/length (8)
pub const SIZE_TABLE_HEADER: usize = 44;

// Row directory entry (40 bytes each):
// declared size (4) + payload tag (4) + version (16)
// + metadata offset/length (8) + payload offset/length (8)
pub const SIZE_ROW_ENTRY: usize = 40;

// Version field: four big-endian u32 components
pub const SIZE_VERSION: usize = 16;

// Payload type tag: four ASCII bytes, e.g. "FOTA"
pub const SIZE_PAYLOAD_TAG: usize = 4;

// Metadata record: type code (4) + declared value length (4),
// followed by a 2- or 4-byte value. A section tail shorter than
// SIZE_METADATA_MIN cannot hold another record.
pub const SIZE_METADATA_HEADER: usize = 8;
pub const SIZE_METADATA_MIN: usize = SIZE_METADATA_HEADER + 2;
