//! SpecModel entities (spec.md §3.1). These are plain data — the same shape
//! `mchesser-llrp-rs`'s `llrp-gen` crate builds as an intermediate
//! representation before code generation (`other_examples/*llrp-rs__llrp-gen-src-repr*`),
//! except here the representation is the end product: the codec, validator
//! and XML layer all walk it directly at runtime instead of generating one
//! Rust type per message.

/// The primitive wire types a [`FieldSpec`] can carry (spec.md §3.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    U1,
    U2,
    U8,
    S8,
    U16,
    S16,
    U32,
    S32,
    U64,
    S64,
    U96,
    Utf8,
    BitArray,
    /// Variable-bit unsigned integer, `bit_width` gives its width (1..64).
    UNv,
    BytesToEnd,
    /// Padding with no semantic value; never surfaced in `field_values`.
    Reserved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
    None,
    Fixed(usize),
    LengthPrefixedU16,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
    /// Present for sub-byte fields (`U1`, `U2`, `UNv`) and `Reserved` padding.
    pub bit_width: Option<u8>,
    pub array: ArrayKind,
    pub enum_ref: Option<&'static str>,
    /// If set, the field may be omitted on construction/decode and this
    /// value is substituted (spec.md §4.4 "Defaults").
    pub default: Option<i64>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        FieldSpec { name, field_type, bit_width: None, array: ArrayKind::None, enum_ref: None, default: None }
    }

    pub const fn with_bits(mut self, bits: u8) -> Self {
        self.bit_width = Some(bits);
        self
    }

    pub const fn with_enum(mut self, enum_name: &'static str) -> Self {
        self.enum_ref = Some(enum_name);
        self
    }

    pub const fn with_array(mut self, array: ArrayKind) -> Self {
        self.array = array;
        self
    }

    pub const fn with_default(mut self, default: i64) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn reserved(bits: u8) -> Self {
        FieldSpec {
            name: "__reserved__",
            field_type: FieldType::Reserved,
            bit_width: Some(bits),
            array: ArrayKind::None,
            enum_ref: None,
            default: None,
        }
    }

    /// Bit width implied by `field_type`, ignoring `array`/`bit_width`
    /// overrides (those are consulted first by the codec).
    pub fn natural_bit_width(&self) -> u32 {
        match self.field_type {
            FieldType::U1 => 1,
            FieldType::U2 => self.bit_width.unwrap_or(2) as u32,
            FieldType::U8 | FieldType::S8 => 8,
            FieldType::U16 | FieldType::S16 => 16,
            FieldType::U32 | FieldType::S32 => 32,
            FieldType::U64 | FieldType::S64 => 64,
            FieldType::U96 => 96,
            FieldType::UNv => self.bit_width.unwrap_or(0) as u32,
            FieldType::Reserved => self.bit_width.unwrap_or(0) as u32,
            FieldType::Utf8 | FieldType::BitArray | FieldType::BytesToEnd => 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EnumSpec {
    pub name: &'static str,
    pub underlying_bits: u8,
    pub members: &'static [(&'static str, i64)],
    /// Open enums accept integers outside `members` through the Validator
    /// (spec.md §4.3 "Enumerated fields decode... open enum").
    pub open: bool,
}

impl EnumSpec {
    pub fn name_for(&self, value: i64) -> Option<&'static str> {
        self.members.iter().find(|(_, v)| *v == value).map(|(n, _)| *n)
    }

    pub fn value_for(&self, name: &str) -> Option<i64> {
        self.members.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.open || self.members.iter().any(|(_, v)| *v == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    ZeroOrOne,
    OneOrMore,
    ZeroOrMore,
}

impl Cardinality {
    pub fn satisfied_by(&self, count: usize) -> bool {
        match self {
            Cardinality::One => count == 1,
            Cardinality::ZeroOrOne => count <= 1,
            Cardinality::OneOrMore => count >= 1,
            Cardinality::ZeroOrMore => true,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Cardinality::One => "exactly one",
            Cardinality::ZeroOrOne => "zero or one",
            Cardinality::OneOrMore => "one or more",
            Cardinality::ZeroOrMore => "zero or more",
        }
    }
}

/// Sentinel `parameter_name` meaning "any registered `CustomExtension` is
/// permitted here" — LLRP's recurring "Custom Extension Point List" slot.
/// Real custom parameters are distinguished on the wire by `(vendor_id,
/// subtype)`, not by a single type number, so they can't be named
/// individually in a `sub_parameters` list the way ordinary parameters are.
pub const CUSTOM_SLOT: &str = "__CUSTOM__";

#[derive(Debug, Clone, Copy)]
pub struct SubParamRule {
    pub parameter_name: &'static str,
    pub cardinality: Cardinality,
    /// Sub-parameters sharing a `choice_group` name are mutually exclusive:
    /// exactly one must be populated (spec.md §3.1, §4.4).
    pub choice_group: Option<&'static str>,
}

impl SubParamRule {
    pub const fn new(parameter_name: &'static str, cardinality: Cardinality) -> Self {
        SubParamRule { parameter_name, cardinality, choice_group: None }
    }

    pub const fn choice(parameter_name: &'static str, group: &'static str) -> Self {
        SubParamRule { parameter_name, cardinality: Cardinality::ZeroOrOne, choice_group: Some(group) }
    }

    pub const fn custom_slot() -> Self {
        SubParamRule::new(CUSTOM_SLOT, Cardinality::ZeroOrMore)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamEncoding {
    /// Type-Value, type number 1..127, no length field.
    Tv(u8),
    /// Type-Length-Value, type number >= 128.
    Tlv(u16),
}

impl ParamEncoding {
    pub fn type_number(&self) -> u16 {
        match self {
            ParamEncoding::Tv(t) => *t as u16,
            ParamEncoding::Tlv(t) => *t,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub encoding: ParamEncoding,
    pub fields: &'static [FieldSpec],
    pub sub_parameters: &'static [SubParamRule],
}

#[derive(Debug, Clone, Copy)]
pub struct MessageSpec {
    pub name: &'static str,
    pub type_number: u16,
    pub fields: &'static [FieldSpec],
    pub sub_parameters: &'static [SubParamRule],
    /// Name of the request `MessageSpec` this one replies to, if any.
    pub response_for: Option<&'static str>,
}

/// A vendor (custom) extension, registered under the `CUSTOM` TLV type
/// (1023) and discriminated by `(vendor_id, subtype)` rather than a type
/// number of its own (spec.md §3.1, §6).
#[derive(Debug, Clone, Copy)]
pub struct CustomExtension {
    pub name: &'static str,
    pub vendor_id: u32,
    pub subtype: u32,
    pub fields: &'static [FieldSpec],
}

/// The TLV type number LLRP reserves for vendor-specific parameters and
/// messages (spec.md §4.3, §6).
pub const CUSTOM_TYPE_NUMBER: u16 = 1023;
