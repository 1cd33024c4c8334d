//! Static catalog data standing in for the pre-compiled spec artifact
//! spec.md §4.1/§6 treats as an external build-time collaborator (see
//! DESIGN.md, "Open Question: spec artifact"). [`SpecRegistry::load`]
//! performs the same cross-reference resolution and duplicate-type-number
//! checks spec.md describes for the real loader, just over literal Rust data
//! instead of bytes read from disk.
//!
//! Covers the message/parameter set needed for spec.md's concrete scenarios
//! (S1-S6) plus the GeneralDeviceCapabilities/LLRPCapabilities/
//! RegulatoryCapabilities tree the teacher (`src/params.rs`) already decoded
//! by hand — not the full LLRP 1.0.1 definition set.

use crate::spec_types::*;

pub const IMPINJ_VENDOR_ID: u32 = 25882;

// ---------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------

pub const ENUMS: &[EnumSpec] = &[
    EnumSpec {
        name: "GetReaderCapabilitiesRequestedData",
        underlying_bits: 8,
        open: false,
        members: &[
            ("All", 0),
            ("GeneralDeviceCapabilities", 1),
            ("LLRPCapabilities", 2),
            ("RegulatoryCapabilities", 3),
            ("AirProtocolLLRPCapabilities", 4),
        ],
    },
    EnumSpec {
        name: "GetReaderConfigRequestedData",
        underlying_bits: 8,
        open: false,
        members: &[
            ("All", 0),
            ("Identification", 1),
            ("AntennaProperties", 2),
            ("AntennaConfiguration", 3),
            ("ROReportSpec", 4),
            ("ReaderEventNotificationSpec", 5),
            ("KeepaliveSpec", 6),
            ("GPIPortCurrentState", 7),
            ("GPOWriteData", 8),
            ("EventsAndReports", 9),
        ],
    },
    EnumSpec {
        name: "AirProtocols",
        underlying_bits: 8,
        open: false,
        members: &[("UnspecifiedAirProtocol", 0), ("EPCGlobalClass1Gen2", 1)],
    },
    EnumSpec {
        name: "ROSpecStartTriggerType",
        underlying_bits: 8,
        open: false,
        members: &[("Null", 0), ("Immediate", 1), ("Periodic", 2), ("GPI", 3)],
    },
    EnumSpec {
        name: "ROSpecStopTriggerType",
        underlying_bits: 8,
        open: false,
        members: &[("Null", 0), ("Duration", 1), ("GPIWithTimeout", 2)],
    },
    EnumSpec {
        name: "AISpecStopTriggerType",
        underlying_bits: 8,
        open: false,
        members: &[("Null", 0), ("Duration", 1), ("GPIWithTimeout", 2), ("TagObservation", 3)],
    },
    EnumSpec {
        name: "ROSpecState",
        underlying_bits: 8,
        open: false,
        members: &[("Disabled", 0), ("Inactive", 1), ("Active", 2)],
    },
    EnumSpec {
        name: "ROReportTriggerType",
        underlying_bits: 8,
        open: false,
        members: &[
            ("None", 0),
            ("UponNTagReportsOrAISpecEnd", 1),
            ("UponNTagReportsOrROSpecEnd", 2),
            ("UponNSecondsOrAISpecEnd", 3),
            ("UponNSecondsOrROSpecEnd", 4),
            ("UponNMillisecondsOrAISpecEnd", 5),
            ("UponNMillisecondsOrROSpecEnd", 6),
            ("UponNInventoryRoundsOrROSpecEnd", 7),
        ],
    },
    EnumSpec {
        name: "KeepaliveTriggerType",
        underlying_bits: 8,
        open: false,
        members: &[("Null", 0), ("Periodic", 1)],
    },
    EnumSpec {
        name: "StatusCode",
        underlying_bits: 16,
        open: true,
        members: &[
            ("M_Success", 0),
            ("M_ParameterError", 100),
            ("M_FieldError", 101),
            ("M_UnsupportedMessage", 102),
            ("M_UnexpectedParameter", 103),
            ("M_MissingParameter", 104),
            ("M_DuplicateParameter", 105),
            ("M_OverflowParameter", 106),
            ("M_OverflowField", 107),
            ("M_UnknownParameter", 108),
            ("M_UnknownField", 109),
            ("M_UnsupportedVersion", 110),
            ("R_DeviceError", 401),
        ],
    },
    EnumSpec {
        name: "ConnectionAttemptStatusType",
        underlying_bits: 16,
        open: false,
        members: &[
            ("Success", 0),
            ("FailedReaderInitiatedConnectionAlreadyExists", 1),
            ("FailedClientInitiatedConnectionAlreadyExists", 2),
            ("FailedAnotherConnectionAttempted", 3),
        ],
    },
    EnumSpec {
        name: "IdentificationType",
        underlying_bits: 8,
        open: false,
        members: &[("MACAddress", 0), ("EPC", 1)],
    },
    EnumSpec {
        name: "GPIState",
        underlying_bits: 8,
        open: false,
        members: &[("Low", 0), ("High", 1), ("Unknown", 2)],
    },
    EnumSpec {
        name: "ImpinjInventorySearchMode",
        underlying_bits: 16,
        open: false,
        members: &[("Reserved", 0), ("SingleTarget", 1), ("DualTarget", 2)],
    },
];

// ---------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------

use FieldType::*;

const LLRP_STATUS_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("StatusCode", U16).with_enum("StatusCode"),
    FieldSpec::new("ErrorDescription", Utf8),
];
const LLRP_STATUS_SUBS: &[SubParamRule] = &[
    SubParamRule::new("FieldError", Cardinality::ZeroOrOne),
    SubParamRule::new("ParameterError", Cardinality::ZeroOrOne),
];

const FIELD_ERROR_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("FieldNum", U16), FieldSpec::new("ErrorCode", U16).with_enum("StatusCode")];

const PARAMETER_ERROR_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("ParameterType", U16), FieldSpec::new("ErrorCode", U16).with_enum("StatusCode")];
const PARAMETER_ERROR_SUBS: &[SubParamRule] = &[
    SubParamRule::new("FieldError", Cardinality::ZeroOrMore),
    SubParamRule::new("ParameterError", Cardinality::ZeroOrMore),
];

const UTC_TIMESTAMP_FIELDS: &[FieldSpec] = &[FieldSpec::new("Microseconds", U64)];
const UPTIME_FIELDS: &[FieldSpec] = &[FieldSpec::new("Microseconds", U64)];

const GENERAL_DEVICE_CAPABILITIES_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("MaxNumberOfAntennasSupported", U16),
    FieldSpec::new("DeviceCapabilitiesFlags", U16),
    FieldSpec::new("DeviceManufacturerName", U32),
    FieldSpec::new("ModelName", U32),
    FieldSpec::new("ReaderFirmwareVersion", Utf8),
];
const GENERAL_DEVICE_CAPABILITIES_SUBS: &[SubParamRule] = &[
    SubParamRule::new("MaximumReceiveSensitivity", Cardinality::ZeroOrOne),
    SubParamRule::new("ReceiveSensitivityTableEntry", Cardinality::ZeroOrMore),
    SubParamRule::new("PerAntennaReceiveSensitivityRange", Cardinality::ZeroOrMore),
    SubParamRule::new("PerAntennaAirProtocol", Cardinality::ZeroOrMore),
    SubParamRule::new("GPIOCapabilities", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const MAX_RX_SENSITIVITY_FIELDS: &[FieldSpec] = &[FieldSpec::new("MaximumSensitivityValue", U16)];
const RX_SENSITIVITY_ENTRY_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("Index", U16), FieldSpec::new("ReceiveSensitivityValue", S16)];
const PER_ANTENNA_RX_RANGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AntennaID", U16),
    FieldSpec::new("ReceiveSensitivityIndexMin", U16),
    FieldSpec::new("ReceiveSensitivityIndexMax", U16),
];
const PER_ANTENNA_AIR_PROTOCOL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AntennaID", U16),
    FieldSpec::new("ProtocolIDs", U8).with_array(ArrayKind::LengthPrefixedU16),
];
const GPIO_CAPABILITIES_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("NumGPIs", U16), FieldSpec::new("NumGPOs", U16)];

const LLRP_CAPABILITIES_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("CanDoRFSurvey", U1),
    FieldSpec::new("CanReportBufferFillWarning", U1),
    FieldSpec::new("SupportsClientRequestOpSpec", U1),
    FieldSpec::new("CanDoTagInventoryStateAwareSingulation", U1),
    FieldSpec::new("SupportsEventAndReportHolding", U1),
    FieldSpec::reserved(3),
    FieldSpec::new("MaxPriorityLevelsSupported", U8),
    FieldSpec::new("ClientRequestOpSpecTimeout", U16),
    FieldSpec::new("MaxNumROSpecs", U32),
    FieldSpec::new("MaxNumSpecsPerROSpec", U32),
    FieldSpec::new("MaxNumInventoryParameterSpecsPerAISpec", U32),
    FieldSpec::new("MaxNumAccessSpecs", U32),
    FieldSpec::new("MaxNumOpSpecsPerAccessSpec", U32),
];

const REGULATORY_CAPABILITIES_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("CountryCode", U16), FieldSpec::new("CommunicationsStandard", U16)];
const REGULATORY_CAPABILITIES_SUBS: &[SubParamRule] = &[
    SubParamRule::new("UHFBandCapabilities", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const UHF_BAND_CAPABILITIES_SUBS: &[SubParamRule] = &[
    SubParamRule::new("TransmitPowerLevelTableEntry", Cardinality::ZeroOrMore),
    SubParamRule::new("FrequencyInformation", Cardinality::ZeroOrOne),
    SubParamRule::new("C1G2UHFRFModeTable", Cardinality::ZeroOrOne),
    SubParamRule::new("RFSurveyFrequencyCapabilities", Cardinality::ZeroOrOne),
];

const TX_POWER_ENTRY_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("Index", U16), FieldSpec::new("TransmitPowerValue", U16)];

const FREQUENCY_INFORMATION_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("Hopping", U1), FieldSpec::reserved(7)];
const FREQUENCY_INFORMATION_SUBS: &[SubParamRule] = &[
    SubParamRule::new("FrequencyHopTable", Cardinality::ZeroOrMore),
    SubParamRule::new("FixedFrequencyTable", Cardinality::ZeroOrOne),
];

const FREQUENCY_HOP_TABLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("HopTableID", U16),
    FieldSpec::new("Frequencies", U32).with_array(ArrayKind::LengthPrefixedU16),
];
const FIXED_FREQUENCY_TABLE_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("Frequencies", U32).with_array(ArrayKind::LengthPrefixedU16)];

const RF_SURVEY_FREQUENCY_CAPABILITIES_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("MinimumFrequency", U32), FieldSpec::new("MaximumFrequency", U32)];

const ROSPEC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ROSpecID", U32),
    FieldSpec::new("Priority", U8),
    FieldSpec::new("CurrentState", U8).with_enum("ROSpecState"),
];
const ROSPEC_SUBS: &[SubParamRule] = &[
    SubParamRule::new("ROBoundarySpec", Cardinality::One),
    SubParamRule::new("AISpec", Cardinality::OneOrMore),
    SubParamRule::new("ROReportSpec", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const RO_BOUNDARY_SPEC_SUBS: &[SubParamRule] = &[
    SubParamRule::new("ROSpecStartTrigger", Cardinality::One),
    SubParamRule::new("ROSpecStopTrigger", Cardinality::One),
];

const RO_SPEC_START_TRIGGER_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("ROSpecStartTriggerType", U8).with_enum("ROSpecStartTriggerType")];
const RO_SPEC_START_TRIGGER_SUBS: &[SubParamRule] = &[
    SubParamRule::new("PeriodicTriggerValue", Cardinality::ZeroOrOne),
    SubParamRule::new("GPITriggerValue", Cardinality::ZeroOrOne),
];

const PERIODIC_TRIGGER_VALUE_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("Offset", U32), FieldSpec::new("Period", U32)];
const GPI_TRIGGER_VALUE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("GPIPortNum", U16),
    FieldSpec::new("GPIEvent", U1),
    FieldSpec::new("Timeout", U32),
];

const RO_SPEC_STOP_TRIGGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ROSpecStopTriggerType", U8).with_enum("ROSpecStopTriggerType"),
    FieldSpec::new("DurationTriggerValue", U32).with_default(0),
];
const RO_SPEC_STOP_TRIGGER_SUBS: &[SubParamRule] =
    &[SubParamRule::new("GPITriggerValue", Cardinality::ZeroOrOne)];

const AI_SPEC_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("AntennaIDs", U16).with_array(ArrayKind::LengthPrefixedU16)];
const AI_SPEC_SUBS: &[SubParamRule] = &[
    SubParamRule::new("AISpecStopTrigger", Cardinality::One),
    SubParamRule::new("InventoryParameterSpec", Cardinality::OneOrMore),
    SubParamRule::custom_slot(),
];

const AI_SPEC_STOP_TRIGGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AISpecStopTriggerType", U8).with_enum("AISpecStopTriggerType"),
    FieldSpec::new("DurationTriggerValue", U32).with_default(0),
];
const AI_SPEC_STOP_TRIGGER_SUBS: &[SubParamRule] = &[
    SubParamRule::new("GPITriggerValue", Cardinality::ZeroOrOne),
    SubParamRule::new("TagObservationTrigger", Cardinality::ZeroOrOne),
];

const TAG_OBSERVATION_TRIGGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("TriggerType", U8),
    FieldSpec::new("NumberOfTags", U16),
    FieldSpec::new("NumberOfAttempts", U16),
    FieldSpec::new("T", U16),
    FieldSpec::new("Timeout", U32),
];

const INVENTORY_PARAMETER_SPEC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("InventoryParameterSpecID", U16),
    FieldSpec::new("ProtocolID", U8).with_enum("AirProtocols"),
];
const INVENTORY_PARAMETER_SPEC_SUBS: &[SubParamRule] = &[SubParamRule::custom_slot()];

const RF_SURVEY_SPEC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AntennaID", U16),
    FieldSpec::new("StartFrequency", U32),
    FieldSpec::new("EndFrequency", U32),
];
const RF_SURVEY_SPEC_SUBS: &[SubParamRule] =
    &[SubParamRule::new("RFSurveySpecStopTrigger", Cardinality::One)];

const RF_SURVEY_SPEC_STOP_TRIGGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("StopTriggerType", U8),
    FieldSpec::new("DurationPeriod", U32),
    FieldSpec::new("N", U32),
];

const LOOP_SPEC_FIELDS: &[FieldSpec] = &[FieldSpec::new("LoopCount", U32)];

const RO_REPORT_SPEC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ROReportTrigger", U8).with_enum("ROReportTriggerType"),
    FieldSpec::new("N", U16).with_default(0),
];
const RO_REPORT_SPEC_SUBS: &[SubParamRule] = &[
    SubParamRule::new("TagReportContentSelector", Cardinality::One),
    SubParamRule::custom_slot(),
];

const TAG_REPORT_CONTENT_SELECTOR_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("EnableROSpecID", U1),
    FieldSpec::new("EnableSpecIndex", U1),
    FieldSpec::new("EnableInventoryParameterSpecID", U1),
    FieldSpec::new("EnableAntennaID", U1),
    FieldSpec::new("EnableChannelIndex", U1),
    FieldSpec::new("EnablePeakRSSI", U1),
    FieldSpec::new("EnableFirstSeenTimestamp", U1),
    FieldSpec::new("EnableLastSeenTimestamp", U1),
    FieldSpec::new("EnableTagSeenCount", U1),
    FieldSpec::reserved(7),
];
const TAG_REPORT_CONTENT_SELECTOR_SUBS: &[SubParamRule] = &[SubParamRule::custom_slot()];

const TAG_REPORT_DATA_SUBS: &[SubParamRule] = &[
    SubParamRule::choice("EPCData", "EPCValue"),
    SubParamRule::choice("EPC96", "EPCValue"),
    SubParamRule::new("ROSpecIDParam", Cardinality::ZeroOrOne),
    SubParamRule::new("SpecIndexParam", Cardinality::ZeroOrOne),
    SubParamRule::new("InventoryParameterSpecIDParam", Cardinality::ZeroOrOne),
    SubParamRule::new("AntennaIDParam", Cardinality::ZeroOrOne),
    SubParamRule::new("PeakRSSIParam", Cardinality::ZeroOrOne),
    SubParamRule::new("ChannelIndexParam", Cardinality::ZeroOrOne),
    SubParamRule::new("FirstSeenTimestampParam", Cardinality::ZeroOrOne),
    SubParamRule::new("LastSeenTimestampParam", Cardinality::ZeroOrOne),
    SubParamRule::new("TagSeenCountParam", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const EPC_DATA_FIELDS: &[FieldSpec] = &[FieldSpec::new("EPC", FieldType::BitArray)];
const EPC_96_FIELDS: &[FieldSpec] = &[FieldSpec::new("EPC", U96)];

const ROSPEC_ID_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("ROSpecID", U32)];
const SPEC_INDEX_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("SpecIndex", U16)];
const INVENTORY_PARAMETER_SPEC_ID_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("Value", U16)];
const ANTENNA_ID_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("AntennaID", U16)];
const PEAK_RSSI_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("PeakRSSI", S8)];
const CHANNEL_INDEX_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("ChannelIndex", U16)];
const FIRST_SEEN_TIMESTAMP_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("Microseconds", U64)];
const LAST_SEEN_TIMESTAMP_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("Microseconds", U64)];
const TAG_SEEN_COUNT_PARAM_FIELDS: &[FieldSpec] = &[FieldSpec::new("TagCount", U16)];

const ACCESS_SPEC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AccessSpecID", U32),
    FieldSpec::new("AntennaID", U16),
    FieldSpec::new("ProtocolID", U8).with_enum("AirProtocols"),
    FieldSpec::new("CurrentState", U1),
    FieldSpec::reserved(7),
    FieldSpec::new("ROSpecID", U32),
];
const ACCESS_SPEC_SUBS: &[SubParamRule] = &[
    SubParamRule::new("AccessSpecStopTrigger", Cardinality::One),
    SubParamRule::new("AccessCommand", Cardinality::One),
    SubParamRule::custom_slot(),
];

const ACCESS_SPEC_STOP_TRIGGER_SUBS: &[SubParamRule] = &[
    SubParamRule::choice("OperationCountTrigger", "Trigger"),
    SubParamRule::choice("DurationTrigger", "Trigger"),
];
const OPERATION_COUNT_TRIGGER_FIELDS: &[FieldSpec] = &[FieldSpec::new("OperationCountValue", U16)];
const DURATION_TRIGGER_FIELDS: &[FieldSpec] = &[FieldSpec::new("DurationValue", U32)];

const ACCESS_COMMAND_SUBS: &[SubParamRule] = &[
    SubParamRule::new("ClientRequestOpSpec", Cardinality::OneOrMore),
    SubParamRule::custom_slot(),
];
const CLIENT_REQUEST_OP_SPEC_FIELDS: &[FieldSpec] = &[FieldSpec::new("OpSpecID", U16)];
const CLIENT_REQUEST_RESPONSE_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("OpSpecID", U16), FieldSpec::new("Result", U8)];

const IDENTIFICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("IDType", U8).with_enum("IdentificationType"),
    FieldSpec::new("ReaderID", FieldType::BytesToEnd),
];

const GPO_WRITE_DATA_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("GPOPortNumber", U16), FieldSpec::new("GPOData", U1)];

const KEEPALIVE_SPEC_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("KeepaliveTriggerType", U8).with_enum("KeepaliveTriggerType"),
    FieldSpec::new("TimeInterval", U32).with_default(0),
];

const ANTENNA_PROPERTIES_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AntennaID", U16),
    FieldSpec::new("AntennaConnected", U1),
    FieldSpec::new("AntennaGain", S16),
];

const ANTENNA_CONFIGURATION_FIELDS: &[FieldSpec] = &[FieldSpec::new("AntennaID", U16)];
const ANTENNA_CONFIGURATION_SUBS: &[SubParamRule] = &[
    SubParamRule::new("RFReceiver", Cardinality::ZeroOrOne),
    SubParamRule::new("RFTransmitter", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];
const RF_RECEIVER_FIELDS: &[FieldSpec] = &[FieldSpec::new("ReceiverSensitivity", U16)];
const RF_TRANSMITTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("HopTableID", U16),
    FieldSpec::new("ChannelIndex", U16),
    FieldSpec::new("TransmitPower", U16),
];

const GPI_PORT_CURRENT_STATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("GPIPortNumber", U16),
    FieldSpec::new("GPIConfig", U1),
    FieldSpec::new("GPIState", U8).with_enum("GPIState"),
];

const EVENTS_AND_REPORTS_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("HoldEventsAndReportsUponReconnect", U1)];

const LLRP_CONFIGURATION_STATE_VALUE_FIELDS: &[FieldSpec] = &[FieldSpec::new("Value", U32)];

const READER_EVENT_NOTIFICATION_DATA_SUBS: &[SubParamRule] = &[
    SubParamRule::choice("UTCTimestamp", "TimestampKind"),
    SubParamRule::choice("Uptime", "TimestampKind"),
    SubParamRule::new("ConnectionAttemptEvent", Cardinality::ZeroOrOne),
    SubParamRule::new("ConnectionCloseEvent", Cardinality::ZeroOrOne),
];
const CONNECTION_ATTEMPT_EVENT_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("Status", U16).with_enum("ConnectionAttemptStatusType")];

const C1G2_LLRP_CAPABILITIES_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("SupportsBlockErase", U1),
    FieldSpec::new("SupportsBlockWrite", U1),
    FieldSpec::new("SupportsBlockPermalock", U1),
    FieldSpec::new("SupportsTagRecommissioning", U1),
    FieldSpec::new("SupportsUMIMethod2", U1),
    FieldSpec::new("SupportsXPC", U1),
    FieldSpec::reserved(2),
    FieldSpec::new("MaxNumSelectFiltersPerQuery", U16),
];

const C1G2_UHF_RF_MODE_TABLE_SUBS: &[SubParamRule] =
    &[SubParamRule::new("C1G2UHFRFModeTableEntry", Cardinality::ZeroOrMore)];
const C1G2_UHF_RF_MODE_TABLE_ENTRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("ModeIdentifier", U32),
    FieldSpec::new("DR", U1),
    FieldSpec::new("EPCHagTCConformance", U1),
    FieldSpec::reserved(6),
    FieldSpec::new("M", U8),
    FieldSpec::new("ForwardLinkModulation", U8),
    FieldSpec::new("SpectralMaskIndicator", U8),
    FieldSpec::new("BDR", U32),
    FieldSpec::new("PIE", U32),
    FieldSpec::new("MinTari", U32),
    FieldSpec::new("MaxTari", U32),
    FieldSpec::new("TariStep", U32),
];

pub const PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec { name: "LLRPStatus", encoding: ParamEncoding::Tlv(287), fields: LLRP_STATUS_FIELDS, sub_parameters: LLRP_STATUS_SUBS },
    ParameterSpec { name: "FieldError", encoding: ParamEncoding::Tlv(288), fields: FIELD_ERROR_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ParameterError", encoding: ParamEncoding::Tlv(289), fields: PARAMETER_ERROR_FIELDS, sub_parameters: PARAMETER_ERROR_SUBS },
    ParameterSpec { name: "UTCTimestamp", encoding: ParamEncoding::Tlv(128), fields: UTC_TIMESTAMP_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "Uptime", encoding: ParamEncoding::Tlv(129), fields: UPTIME_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "GeneralDeviceCapabilities", encoding: ParamEncoding::Tlv(137), fields: GENERAL_DEVICE_CAPABILITIES_FIELDS, sub_parameters: GENERAL_DEVICE_CAPABILITIES_SUBS },
    ParameterSpec { name: "MaximumReceiveSensitivity", encoding: ParamEncoding::Tlv(363), fields: MAX_RX_SENSITIVITY_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ReceiveSensitivityTableEntry", encoding: ParamEncoding::Tlv(139), fields: RX_SENSITIVITY_ENTRY_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "PerAntennaReceiveSensitivityRange", encoding: ParamEncoding::Tlv(149), fields: PER_ANTENNA_RX_RANGE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "PerAntennaAirProtocol", encoding: ParamEncoding::Tlv(140), fields: PER_ANTENNA_AIR_PROTOCOL_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "GPIOCapabilities", encoding: ParamEncoding::Tlv(141), fields: GPIO_CAPABILITIES_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "LLRPCapabilities", encoding: ParamEncoding::Tlv(142), fields: LLRP_CAPABILITIES_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "RegulatoryCapabilities", encoding: ParamEncoding::Tlv(143), fields: REGULATORY_CAPABILITIES_FIELDS, sub_parameters: REGULATORY_CAPABILITIES_SUBS },
    ParameterSpec { name: "UHFBandCapabilities", encoding: ParamEncoding::Tlv(144), fields: &[], sub_parameters: UHF_BAND_CAPABILITIES_SUBS },
    ParameterSpec { name: "TransmitPowerLevelTableEntry", encoding: ParamEncoding::Tlv(145), fields: TX_POWER_ENTRY_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "FrequencyInformation", encoding: ParamEncoding::Tlv(146), fields: FREQUENCY_INFORMATION_FIELDS, sub_parameters: FREQUENCY_INFORMATION_SUBS },
    ParameterSpec { name: "FrequencyHopTable", encoding: ParamEncoding::Tlv(147), fields: FREQUENCY_HOP_TABLE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "FixedFrequencyTable", encoding: ParamEncoding::Tlv(148), fields: FIXED_FREQUENCY_TABLE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "RFSurveyFrequencyCapabilities", encoding: ParamEncoding::Tlv(365), fields: RF_SURVEY_FREQUENCY_CAPABILITIES_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ROSpec", encoding: ParamEncoding::Tlv(177), fields: ROSPEC_FIELDS, sub_parameters: ROSPEC_SUBS },
    ParameterSpec { name: "ROBoundarySpec", encoding: ParamEncoding::Tlv(178), fields: &[], sub_parameters: RO_BOUNDARY_SPEC_SUBS },
    ParameterSpec { name: "ROSpecStartTrigger", encoding: ParamEncoding::Tlv(179), fields: RO_SPEC_START_TRIGGER_FIELDS, sub_parameters: RO_SPEC_START_TRIGGER_SUBS },
    ParameterSpec { name: "PeriodicTriggerValue", encoding: ParamEncoding::Tlv(180), fields: PERIODIC_TRIGGER_VALUE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "GPITriggerValue", encoding: ParamEncoding::Tlv(181), fields: GPI_TRIGGER_VALUE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ROSpecStopTrigger", encoding: ParamEncoding::Tlv(182), fields: RO_SPEC_STOP_TRIGGER_FIELDS, sub_parameters: RO_SPEC_STOP_TRIGGER_SUBS },
    ParameterSpec { name: "AISpec", encoding: ParamEncoding::Tlv(183), fields: AI_SPEC_FIELDS, sub_parameters: AI_SPEC_SUBS },
    ParameterSpec { name: "AISpecStopTrigger", encoding: ParamEncoding::Tlv(184), fields: AI_SPEC_STOP_TRIGGER_FIELDS, sub_parameters: AI_SPEC_STOP_TRIGGER_SUBS },
    ParameterSpec { name: "TagObservationTrigger", encoding: ParamEncoding::Tlv(185), fields: TAG_OBSERVATION_TRIGGER_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "InventoryParameterSpec", encoding: ParamEncoding::Tlv(186), fields: INVENTORY_PARAMETER_SPEC_FIELDS, sub_parameters: INVENTORY_PARAMETER_SPEC_SUBS },
    ParameterSpec { name: "RFSurveySpec", encoding: ParamEncoding::Tlv(187), fields: RF_SURVEY_SPEC_FIELDS, sub_parameters: RF_SURVEY_SPEC_SUBS },
    ParameterSpec { name: "RFSurveySpecStopTrigger", encoding: ParamEncoding::Tlv(188), fields: RF_SURVEY_SPEC_STOP_TRIGGER_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "LoopSpec", encoding: ParamEncoding::Tlv(355), fields: LOOP_SPEC_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ROReportSpec", encoding: ParamEncoding::Tlv(237), fields: RO_REPORT_SPEC_FIELDS, sub_parameters: RO_REPORT_SPEC_SUBS },
    ParameterSpec { name: "TagReportContentSelector", encoding: ParamEncoding::Tlv(238), fields: TAG_REPORT_CONTENT_SELECTOR_FIELDS, sub_parameters: TAG_REPORT_CONTENT_SELECTOR_SUBS },
    ParameterSpec { name: "TagReportData", encoding: ParamEncoding::Tlv(240), fields: &[], sub_parameters: TAG_REPORT_DATA_SUBS },
    ParameterSpec { name: "EPCData", encoding: ParamEncoding::Tlv(241), fields: EPC_DATA_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "EPC96", encoding: ParamEncoding::Tv(13), fields: EPC_96_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ROSpecIDParam", encoding: ParamEncoding::Tv(9), fields: ROSPEC_ID_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "SpecIndexParam", encoding: ParamEncoding::Tv(14), fields: SPEC_INDEX_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "InventoryParameterSpecIDParam", encoding: ParamEncoding::Tv(10), fields: INVENTORY_PARAMETER_SPEC_ID_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "AntennaIDParam", encoding: ParamEncoding::Tv(1), fields: ANTENNA_ID_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "PeakRSSIParam", encoding: ParamEncoding::Tv(6), fields: PEAK_RSSI_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ChannelIndexParam", encoding: ParamEncoding::Tv(7), fields: CHANNEL_INDEX_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "FirstSeenTimestampParam", encoding: ParamEncoding::Tv(2), fields: FIRST_SEEN_TIMESTAMP_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "LastSeenTimestampParam", encoding: ParamEncoding::Tv(3), fields: LAST_SEEN_TIMESTAMP_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "TagSeenCountParam", encoding: ParamEncoding::Tv(8), fields: TAG_SEEN_COUNT_PARAM_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "AccessSpec", encoding: ParamEncoding::Tlv(207), fields: ACCESS_SPEC_FIELDS, sub_parameters: ACCESS_SPEC_SUBS },
    ParameterSpec { name: "AccessSpecStopTrigger", encoding: ParamEncoding::Tlv(208), fields: &[], sub_parameters: ACCESS_SPEC_STOP_TRIGGER_SUBS },
    ParameterSpec { name: "OperationCountTrigger", encoding: ParamEncoding::Tlv(290), fields: OPERATION_COUNT_TRIGGER_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "DurationTrigger", encoding: ParamEncoding::Tlv(291), fields: DURATION_TRIGGER_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "AccessCommand", encoding: ParamEncoding::Tlv(209), fields: &[], sub_parameters: ACCESS_COMMAND_SUBS },
    ParameterSpec { name: "ClientRequestOpSpec", encoding: ParamEncoding::Tlv(210), fields: CLIENT_REQUEST_OP_SPEC_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ClientRequestResponse", encoding: ParamEncoding::Tlv(211), fields: CLIENT_REQUEST_RESPONSE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "Identification", encoding: ParamEncoding::Tlv(218), fields: IDENTIFICATION_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "GPOWriteData", encoding: ParamEncoding::Tlv(219), fields: GPO_WRITE_DATA_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "KeepaliveSpec", encoding: ParamEncoding::Tlv(220), fields: KEEPALIVE_SPEC_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "AntennaProperties", encoding: ParamEncoding::Tlv(221), fields: ANTENNA_PROPERTIES_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "AntennaConfiguration", encoding: ParamEncoding::Tlv(222), fields: ANTENNA_CONFIGURATION_FIELDS, sub_parameters: ANTENNA_CONFIGURATION_SUBS },
    ParameterSpec { name: "RFReceiver", encoding: ParamEncoding::Tlv(223), fields: RF_RECEIVER_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "RFTransmitter", encoding: ParamEncoding::Tlv(224), fields: RF_TRANSMITTER_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "GPIPortCurrentState", encoding: ParamEncoding::Tlv(225), fields: GPI_PORT_CURRENT_STATE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "EventsAndReports", encoding: ParamEncoding::Tlv(226), fields: EVENTS_AND_REPORTS_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "LLRPConfigurationStateValue", encoding: ParamEncoding::Tlv(217), fields: LLRP_CONFIGURATION_STATE_VALUE_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ReaderEventNotificationData", encoding: ParamEncoding::Tlv(246), fields: &[], sub_parameters: READER_EVENT_NOTIFICATION_DATA_SUBS },
    ParameterSpec { name: "ConnectionAttemptEvent", encoding: ParamEncoding::Tlv(256), fields: CONNECTION_ATTEMPT_EVENT_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "ConnectionCloseEvent", encoding: ParamEncoding::Tlv(257), fields: &[], sub_parameters: &[] },
    ParameterSpec { name: "C1G2LLRPCapabilities", encoding: ParamEncoding::Tlv(327), fields: C1G2_LLRP_CAPABILITIES_FIELDS, sub_parameters: &[] },
    ParameterSpec { name: "C1G2UHFRFModeTable", encoding: ParamEncoding::Tlv(328), fields: &[], sub_parameters: C1G2_UHF_RF_MODE_TABLE_SUBS },
    ParameterSpec { name: "C1G2UHFRFModeTableEntry", encoding: ParamEncoding::Tlv(329), fields: C1G2_UHF_RF_MODE_TABLE_ENTRY_FIELDS, sub_parameters: &[] },
];

// ---------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------

const GET_READER_CAPABILITIES_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("RequestedData", U8).with_enum("GetReaderCapabilitiesRequestedData")];
const GET_READER_CAPABILITIES_SUBS: &[SubParamRule] = &[SubParamRule::custom_slot()];

const GET_READER_CAPABILITIES_RESPONSE_SUBS: &[SubParamRule] = &[
    SubParamRule::new("LLRPStatus", Cardinality::One),
    SubParamRule::new("GeneralDeviceCapabilities", Cardinality::ZeroOrOne),
    SubParamRule::new("LLRPCapabilities", Cardinality::ZeroOrOne),
    SubParamRule::new("RegulatoryCapabilities", Cardinality::ZeroOrOne),
    SubParamRule::new("C1G2LLRPCapabilities", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const GET_READER_CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("AntennaID", U16).with_default(0),
    FieldSpec::new("GPIPortNum", U16).with_default(0),
    FieldSpec::new("GPOPortNum", U16).with_default(0),
    FieldSpec::new("RequestedData", U8).with_enum("GetReaderConfigRequestedData"),
];

const GET_READER_CONFIG_RESPONSE_SUBS: &[SubParamRule] = &[
    SubParamRule::new("LLRPStatus", Cardinality::One),
    SubParamRule::new("Identification", Cardinality::ZeroOrOne),
    SubParamRule::new("AntennaProperties", Cardinality::ZeroOrMore),
    SubParamRule::new("AntennaConfiguration", Cardinality::ZeroOrMore),
    SubParamRule::new("ROReportSpec", Cardinality::ZeroOrOne),
    SubParamRule::new("KeepaliveSpec", Cardinality::ZeroOrOne),
    SubParamRule::new("EventsAndReports", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const SET_READER_CONFIG_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("ResetToFactoryDefault", U1).with_default(0), FieldSpec::reserved(7)];
const SET_READER_CONFIG_SUBS: &[SubParamRule] = &[
    SubParamRule::new("ROReportSpec", Cardinality::ZeroOrOne),
    SubParamRule::new("AntennaProperties", Cardinality::ZeroOrMore),
    SubParamRule::new("AntennaConfiguration", Cardinality::OneOrMore),
    SubParamRule::new("KeepaliveSpec", Cardinality::ZeroOrOne),
    SubParamRule::new("EventsAndReports", Cardinality::ZeroOrOne),
    SubParamRule::custom_slot(),
];

const LLRP_STATUS_ONLY_SUBS: &[SubParamRule] = &[SubParamRule::new("LLRPStatus", Cardinality::One)];

const ROSPEC_ID_FIELDS: &[FieldSpec] = &[FieldSpec::new("ROSpecID", U32)];
const ADD_ROSPEC_SUBS: &[SubParamRule] = &[SubParamRule::new("ROSpec", Cardinality::One)];
const GET_ROSPECS_RESPONSE_SUBS: &[SubParamRule] = &[
    SubParamRule::new("LLRPStatus", Cardinality::One),
    SubParamRule::new("ROSpec", Cardinality::ZeroOrMore),
];
const RO_ACCESS_REPORT_SUBS: &[SubParamRule] = &[
    SubParamRule::new("TagReportData", Cardinality::ZeroOrMore),
    SubParamRule::custom_slot(),
];
const READER_EVENT_NOTIFICATION_SUBS: &[SubParamRule] =
    &[SubParamRule::new("ReaderEventNotificationData", Cardinality::One)];
const ERROR_MESSAGE_SUBS: &[SubParamRule] = &[SubParamRule::new("LLRPStatus", Cardinality::One)];

const CUSTOM_MESSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("VendorID", U32),
    FieldSpec::new("Subtype", U8),
    FieldSpec::new("Payload", FieldType::BytesToEnd),
];

pub const MESSAGES: &[MessageSpec] = &[
    MessageSpec { name: "GET_READER_CAPABILITIES", type_number: 1, fields: GET_READER_CAPABILITIES_FIELDS, sub_parameters: GET_READER_CAPABILITIES_SUBS, response_for: None },
    MessageSpec { name: "GET_READER_CAPABILITIES_RESPONSE", type_number: 11, fields: &[], sub_parameters: GET_READER_CAPABILITIES_RESPONSE_SUBS, response_for: Some("GET_READER_CAPABILITIES") },
    MessageSpec { name: "GET_READER_CONFIG", type_number: 2, fields: GET_READER_CONFIG_FIELDS, sub_parameters: &[], response_for: None },
    MessageSpec { name: "GET_READER_CONFIG_RESPONSE", type_number: 12, fields: &[], sub_parameters: GET_READER_CONFIG_RESPONSE_SUBS, response_for: Some("GET_READER_CONFIG") },
    MessageSpec { name: "SET_READER_CONFIG", type_number: 3, fields: SET_READER_CONFIG_FIELDS, sub_parameters: SET_READER_CONFIG_SUBS, response_for: None },
    MessageSpec { name: "SET_READER_CONFIG_RESPONSE", type_number: 13, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("SET_READER_CONFIG") },
    MessageSpec { name: "CLOSE_CONNECTION", type_number: 14, fields: &[], sub_parameters: &[], response_for: None },
    MessageSpec { name: "CLOSE_CONNECTION_RESPONSE", type_number: 4, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("CLOSE_CONNECTION") },
    MessageSpec { name: "ADD_ROSPEC", type_number: 20, fields: &[], sub_parameters: ADD_ROSPEC_SUBS, response_for: None },
    MessageSpec { name: "ADD_ROSPEC_RESPONSE", type_number: 30, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("ADD_ROSPEC") },
    MessageSpec { name: "DELETE_ROSPEC", type_number: 21, fields: ROSPEC_ID_FIELDS, sub_parameters: &[], response_for: None },
    MessageSpec { name: "DELETE_ROSPEC_RESPONSE", type_number: 31, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("DELETE_ROSPEC") },
    MessageSpec { name: "START_ROSPEC", type_number: 22, fields: ROSPEC_ID_FIELDS, sub_parameters: &[], response_for: None },
    MessageSpec { name: "START_ROSPEC_RESPONSE", type_number: 32, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("START_ROSPEC") },
    MessageSpec { name: "STOP_ROSPEC", type_number: 23, fields: ROSPEC_ID_FIELDS, sub_parameters: &[], response_for: None },
    MessageSpec { name: "STOP_ROSPEC_RESPONSE", type_number: 33, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("STOP_ROSPEC") },
    MessageSpec { name: "ENABLE_ROSPEC", type_number: 24, fields: ROSPEC_ID_FIELDS, sub_parameters: &[], response_for: None },
    MessageSpec { name: "ENABLE_ROSPEC_RESPONSE", type_number: 34, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("ENABLE_ROSPEC") },
    MessageSpec { name: "DISABLE_ROSPEC", type_number: 25, fields: ROSPEC_ID_FIELDS, sub_parameters: &[], response_for: None },
    MessageSpec { name: "DISABLE_ROSPEC_RESPONSE", type_number: 35, fields: &[], sub_parameters: LLRP_STATUS_ONLY_SUBS, response_for: Some("DISABLE_ROSPEC") },
    MessageSpec { name: "GET_ROSPECS", type_number: 26, fields: &[], sub_parameters: &[], response_for: None },
    MessageSpec { name: "GET_ROSPECS_RESPONSE", type_number: 36, fields: &[], sub_parameters: GET_ROSPECS_RESPONSE_SUBS, response_for: Some("GET_ROSPECS") },
    MessageSpec { name: "GET_REPORT", type_number: 60, fields: &[], sub_parameters: &[], response_for: None },
    MessageSpec { name: "RO_ACCESS_REPORT", type_number: 61, fields: &[], sub_parameters: RO_ACCESS_REPORT_SUBS, response_for: None },
    MessageSpec { name: "KEEPALIVE", type_number: 62, fields: &[], sub_parameters: &[], response_for: None },
    MessageSpec { name: "KEEPALIVE_ACK", type_number: 72, fields: &[], sub_parameters: &[], response_for: None },
    MessageSpec { name: "READER_EVENT_NOTIFICATION", type_number: 63, fields: &[], sub_parameters: READER_EVENT_NOTIFICATION_SUBS, response_for: None },
    MessageSpec { name: "ENABLE_EVENTS_AND_REPORTS", type_number: 64, fields: &[], sub_parameters: &[], response_for: None },
    MessageSpec { name: "ERROR_MESSAGE", type_number: 100, fields: &[], sub_parameters: ERROR_MESSAGE_SUBS, response_for: None },
    MessageSpec { name: "CUSTOM_MESSAGE", type_number: 1023, fields: CUSTOM_MESSAGE_FIELDS, sub_parameters: &[], response_for: None },
];

// ---------------------------------------------------------------------
// Impinj custom extensions (spec.md §6, S6)
// ---------------------------------------------------------------------

const IMPINJ_SEARCH_MODE_FIELDS: &[FieldSpec] =
    &[FieldSpec::new("SearchMode", U16).with_enum("ImpinjInventorySearchMode")];
const IMPINJ_FIXED_FREQUENCY_LIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("FixedFrequencyMode", U16),
    FieldSpec::reserved(16),
    FieldSpec::new("ChannelListIndexes", U16).with_array(ArrayKind::LengthPrefixedU16),
];

pub const CUSTOM_EXTENSIONS: &[CustomExtension] = &[
    CustomExtension { name: "ImpinjSearchMode", vendor_id: IMPINJ_VENDOR_ID, subtype: 23, fields: IMPINJ_SEARCH_MODE_FIELDS },
    CustomExtension { name: "ImpinjFixedFrequencyList", vendor_id: IMPINJ_VENDOR_ID, subtype: 26, fields: IMPINJ_FIXED_FREQUENCY_LIST_FIELDS },
];
