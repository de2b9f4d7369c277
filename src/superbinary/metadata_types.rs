//! UARP metadata type code registry.
//!
//! Maps the 4-byte type code at the start of every metadata record to a
//! [`MetadataType`] with a human-readable label. Codes cluster into families:
//! payload attributes, HeySiri models, personalization, host staging policy
//! (including minimum OS versions), and voice assist models.
//!
//! Codes not present in the registry resolve to [`MetadataType::Unknown`],
//! which retains the raw code so nothing read from the asset is lost; its
//! label is always `"Unknown Metadata Type"`.

use std::fmt;

use serde::{Serialize, Serializer};

/// All known UARP metadata type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataType {
    /// Payload Filepath (3436347648)
    PayloadFilepath,
    /// Payload Long Name (3436347649)
    PayloadLongName,
    /// Minimum Required Version (3436347650)
    MinimumRequiredVersion,
    /// Ignore Version (3436347651)
    IgnoreVersion,
    /// Urgent Update (3436347652)
    UrgentUpdate,
    /// Payload Certificate (3436347653)
    PayloadCertificate,
    /// Payload Signature (3436347654)
    PayloadSignature,
    /// Payload Hash (3436347655)
    PayloadHash,
    /// Payload Digest (3436347656)
    PayloadDigest,
    /// Minimum Battery Level (3436347657)
    MinimumBatteryLevel,
    /// Trigger Battery Level (3436347658)
    TriggerBatteryLevel,
    /// Payload Compression ChunkSize (3436347659)
    PayloadCompressionChunkSize,
    /// Payload Compression Algorithm (3436347660)
    PayloadCompressionAlgorithm,
    /// Compressed Headers Payload Index (3436347663)
    CompressedHeadersPayloadIndex,
    /// HeySiri Model Type (1619725824)
    HeySiriModelType,
    /// HeySiri Model Locale (1619725825)
    HeySiriModelLocale,
    /// HeySiri Model Hash (1619725826)
    HeySiriModelHash,
    /// HeySiri Model Role (1619725827)
    HeySiriModelRole,
    /// HeySiri Model Digest (1619725828)
    HeySiriModelDigest,
    /// HeySiri Model Signature (1619725829)
    HeySiriModelSignature,
    /// HeySiri Model Certificate (1619725830)
    HeySiriModelCertificate,
    /// HeySiri Model Engine Version (1619725831)
    HeySiriModelEngineVersion,
    /// HeySiri Model Engine Type (1619725832)
    HeySiriModelEngineType,
    /// Personalization Required (2293403904)
    PersonalizationRequired,
    /// Personalization Payload Tag (2293403905)
    PersonalizationPayloadTag,
    /// Personalization SuperBinary AssetID (2293403906)
    PersonalizationSuperBinaryAssetId,
    /// Personalization Manifest Prefix (2293403907)
    PersonalizationManifestPrefix,
    /// Host Minimum Battery Level (3291140096)
    HostMinimumBatteryLevel,
    /// Host Inactive To Stage Asset (3291140097)
    HostInactiveToStageAsset,
    /// Host Inactive To Apply Asset (3291140098)
    HostInactiveToApplyAsset,
    /// Host Network Delay (3291140099)
    HostNetworkDelay,
    /// Host Reconnect After Apply (3291140100)
    HostReconnectAfterApply,
    /// Minimum iOS Version (3291140101)
    MinimumIosVersion,
    /// Minimum macOS Version (3291140102)
    MinimumMacosVersion,
    /// Minimum tvOS Version (3291140103)
    MinimumTvosVersion,
    /// Minimum watchOS Version (3291140104)
    MinimumWatchosVersion,
    /// Host Trigger Battery Level (3291140105)
    HostTriggerBatteryLevel,
    /// Voice Assist Type (76079616)
    VoiceAssistType,
    /// Voice Assist Locale (76079617)
    VoiceAssistLocale,
    /// Voice Assist Hash (76079618)
    VoiceAssistHash,
    /// Voice Assist Role (76079619)
    VoiceAssistRole,
    /// Voice Assist Digest (76079620)
    VoiceAssistDigest,
    /// Voice Assist Signature (76079621)
    VoiceAssistSignature,
    /// Voice Assist Certificate (76079622)
    VoiceAssistCertificate,
    /// Voice Assist Engine Version (76079623)
    VoiceAssistEngineVersion,
    /// A code not present in the registry; retains the raw value.
    Unknown(u32),
}

impl MetadataType {
    /// Resolve a metadata type from the raw u32 code.
    ///
    /// # Examples
    ///
    /// ```
    /// use uarp::superbinary::metadata_types::MetadataType;
    ///
    /// assert_eq!(MetadataType::from_u32(3436347648), MetadataType::PayloadFilepath);
    /// assert_eq!(MetadataType::from_u32(3436347652), MetadataType::UrgentUpdate);
    ///
    /// // Unrecognized codes keep their raw value
    /// assert_eq!(MetadataType::from_u32(99), MetadataType::Unknown(99));
    /// ```
    pub fn from_u32(code: u32) -> Self {
        match code {
            3436347648 => MetadataType::PayloadFilepath,
            3436347649 => MetadataType::PayloadLongName,
            3436347650 => MetadataType::MinimumRequiredVersion,
            3436347651 => MetadataType::IgnoreVersion,
            3436347652 => MetadataType::UrgentUpdate,
            3436347653 => MetadataType::PayloadCertificate,
            3436347654 => MetadataType::PayloadSignature,
            3436347655 => MetadataType::PayloadHash,
            3436347656 => MetadataType::PayloadDigest,
            3436347657 => MetadataType::MinimumBatteryLevel,
            3436347658 => MetadataType::TriggerBatteryLevel,
            3436347659 => MetadataType::PayloadCompressionChunkSize,
            3436347660 => MetadataType::PayloadCompressionAlgorithm,
            3436347663 => MetadataType::CompressedHeadersPayloadIndex,
            1619725824 => MetadataType::HeySiriModelType,
            1619725825 => MetadataType::HeySiriModelLocale,
            1619725826 => MetadataType::HeySiriModelHash,
            1619725827 => MetadataType::HeySiriModelRole,
            1619725828 => MetadataType::HeySiriModelDigest,
            1619725829 => MetadataType::HeySiriModelSignature,
            1619725830 => MetadataType::HeySiriModelCertificate,
            1619725831 => MetadataType::HeySiriModelEngineVersion,
            1619725832 => MetadataType::HeySiriModelEngineType,
            2293403904 => MetadataType::PersonalizationRequired,
            2293403905 => MetadataType::PersonalizationPayloadTag,
            2293403906 => MetadataType::PersonalizationSuperBinaryAssetId,
            2293403907 => MetadataType::PersonalizationManifestPrefix,
            3291140096 => MetadataType::HostMinimumBatteryLevel,
            3291140097 => MetadataType::HostInactiveToStageAsset,
            3291140098 => MetadataType::HostInactiveToApplyAsset,
            3291140099 => MetadataType::HostNetworkDelay,
            3291140100 => MetadataType::HostReconnectAfterApply,
            3291140101 => MetadataType::MinimumIosVersion,
            3291140102 => MetadataType::MinimumMacosVersion,
            3291140103 => MetadataType::MinimumTvosVersion,
            3291140104 => MetadataType::MinimumWatchosVersion,
            3291140105 => MetadataType::HostTriggerBatteryLevel,
            76079616 => MetadataType::VoiceAssistType,
            76079617 => MetadataType::VoiceAssistLocale,
            76079618 => MetadataType::VoiceAssistHash,
            76079619 => MetadataType::VoiceAssistRole,
            76079620 => MetadataType::VoiceAssistDigest,
            76079621 => MetadataType::VoiceAssistSignature,
            76079622 => MetadataType::VoiceAssistCertificate,
            76079623 => MetadataType::VoiceAssistEngineVersion,
            other => MetadataType::Unknown(other),
        }
    }

    /// Returns the raw u32 code of this metadata type.
    pub fn code(self) -> u32 {
        match self {
            MetadataType::PayloadFilepath => 3436347648,
            MetadataType::PayloadLongName => 3436347649,
            MetadataType::MinimumRequiredVersion => 3436347650,
            MetadataType::IgnoreVersion => 3436347651,
            MetadataType::UrgentUpdate => 3436347652,
            MetadataType::PayloadCertificate => 3436347653,
            MetadataType::PayloadSignature => 3436347654,
            MetadataType::PayloadHash => 3436347655,
            MetadataType::PayloadDigest => 3436347656,
            MetadataType::MinimumBatteryLevel => 3436347657,
            MetadataType::TriggerBatteryLevel => 3436347658,
            MetadataType::PayloadCompressionChunkSize => 3436347659,
            MetadataType::PayloadCompressionAlgorithm => 3436347660,
            MetadataType::CompressedHeadersPayloadIndex => 3436347663,
            MetadataType::HeySiriModelType => 1619725824,
            MetadataType::HeySiriModelLocale => 1619725825,
            MetadataType::HeySiriModelHash => 1619725826,
            MetadataType::HeySiriModelRole => 1619725827,
            MetadataType::HeySiriModelDigest => 1619725828,
            MetadataType::HeySiriModelSignature => 1619725829,
            MetadataType::HeySiriModelCertificate => 1619725830,
            MetadataType::HeySiriModelEngineVersion => 1619725831,
            MetadataType::HeySiriModelEngineType => 1619725832,
            MetadataType::PersonalizationRequired => 2293403904,
            MetadataType::PersonalizationPayloadTag => 2293403905,
            MetadataType::PersonalizationSuperBinaryAssetId => 2293403906,
            MetadataType::PersonalizationManifestPrefix => 2293403907,
            MetadataType::HostMinimumBatteryLevel => 3291140096,
            MetadataType::HostInactiveToStageAsset => 3291140097,
            MetadataType::HostInactiveToApplyAsset => 3291140098,
            MetadataType::HostNetworkDelay => 3291140099,
            MetadataType::HostReconnectAfterApply => 3291140100,
            MetadataType::MinimumIosVersion => 3291140101,
            MetadataType::MinimumMacosVersion => 3291140102,
            MetadataType::MinimumTvosVersion => 3291140103,
            MetadataType::MinimumWatchosVersion => 3291140104,
            MetadataType::HostTriggerBatteryLevel => 3291140105,
            MetadataType::VoiceAssistType => 76079616,
            MetadataType::VoiceAssistLocale => 76079617,
            MetadataType::VoiceAssistHash => 76079618,
            MetadataType::VoiceAssistRole => 76079619,
            MetadataType::VoiceAssistDigest => 76079620,
            MetadataType::VoiceAssistSignature => 76079621,
            MetadataType::VoiceAssistCertificate => 76079622,
            MetadataType::VoiceAssistEngineVersion => 76079623,
            MetadataType::Unknown(code) => code,
        }
    }

    /// Returns the human-readable label of this metadata type.
    ///
    /// # Examples
    ///
    /// ```
    /// use uarp::superbinary::metadata_types::MetadataType;
    ///
    /// assert_eq!(MetadataType::PayloadFilepath.label(), "Payload Filepath");
    /// assert_eq!(MetadataType::Unknown(99).label(), "Unknown Metadata Type");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            MetadataType::PayloadFilepath => "Payload Filepath",
            MetadataType::PayloadLongName => "Payload Long Name",
            MetadataType::MinimumRequiredVersion => "Minimum Required Version",
            MetadataType::IgnoreVersion => "Ignore Version",
            MetadataType::UrgentUpdate => "Urgent Update",
            MetadataType::PayloadCertificate => "Payload Certificate",
            MetadataType::PayloadSignature => "Payload Signature",
            MetadataType::PayloadHash => "Payload Hash",
            MetadataType::PayloadDigest => "Payload Digest",
            MetadataType::MinimumBatteryLevel => "Minimum Battery Level",
            MetadataType::TriggerBatteryLevel => "Trigger Battery Level",
            MetadataType::PayloadCompressionChunkSize => "Payload Compression ChunkSize",
            MetadataType::PayloadCompressionAlgorithm => "Payload Compression Algorithm",
            MetadataType::CompressedHeadersPayloadIndex => "Compressed Headers Payload Index",
            MetadataType::HeySiriModelType => "HeySiri Model Type",
            MetadataType::HeySiriModelLocale => "HeySiri Model Locale",
            MetadataType::HeySiriModelHash => "HeySiri Model Hash",
            MetadataType::HeySiriModelRole => "HeySiri Model Role",
            MetadataType::HeySiriModelDigest => "HeySiri Model Digest",
            MetadataType::HeySiriModelSignature => "HeySiri Model Signature",
            MetadataType::HeySiriModelCertificate => "HeySiri Model Certificate",
            MetadataType::HeySiriModelEngineVersion => "HeySiri Model Engine Version",
            MetadataType::HeySiriModelEngineType => "HeySiri Model Engine Type",
            MetadataType::PersonalizationRequired => "Personalization Required",
            MetadataType::PersonalizationPayloadTag => "Personalization Payload Tag",
            MetadataType::PersonalizationSuperBinaryAssetId => {
                "Personalization SuperBinary AssetID"
            }
            MetadataType::PersonalizationManifestPrefix => "Personalization Manifest Prefix",
            MetadataType::HostMinimumBatteryLevel => "Host Minimum Battery Level",
            MetadataType::HostInactiveToStageAsset => "Host Inactive To Stage Asset",
            MetadataType::HostInactiveToApplyAsset => "Host Inactive To Apply Asset",
            MetadataType::HostNetworkDelay => "Host Network Delay",
            MetadataType::HostReconnectAfterApply => "Host Reconnect After Apply",
            MetadataType::MinimumIosVersion => "Minimum iOS Version",
            MetadataType::MinimumMacosVersion => "Minimum macOS Version",
            MetadataType::MinimumTvosVersion => "Minimum tvOS Version",
            MetadataType::MinimumWatchosVersion => "Minimum watchOS Version",
            MetadataType::HostTriggerBatteryLevel => "Host Trigger Battery Level",
            MetadataType::VoiceAssistType => "Voice Assist Type",
            MetadataType::VoiceAssistLocale => "Voice Assist Locale",
            MetadataType::VoiceAssistHash => "Voice Assist Hash",
            MetadataType::VoiceAssistRole => "Voice Assist Role",
            MetadataType::VoiceAssistDigest => "Voice Assist Digest",
            MetadataType::VoiceAssistSignature => "Voice Assist Signature",
            MetadataType::VoiceAssistCertificate => "Voice Assist Certificate",
            MetadataType::VoiceAssistEngineVersion => "Voice Assist Engine Version",
            MetadataType::Unknown(_) => "Unknown Metadata Type",
        }
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for MetadataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
