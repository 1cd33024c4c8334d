//! Tagged runtime values held by a [`Message`](crate::message::Message) or
//! [`Parameter`](crate::message::Parameter).
//!
//! LLRP fields come in a handful of semantic shapes (unsigned/signed
//! integers of varying width, booleans, strings, fixed-width EPCs, bit
//! arrays). Keeping them in one tagged enum rather than one Rust type per
//! field lets the codec and validator be generic over the [`SpecModel`]
//! instead of generated per-message code. Booleans are a separate variant
//! from any integer so that `TypeMismatch` can reject `1`/`0` standing in
//! for `true`/`false`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    S8(i8),
    S16(i16),
    S32(i32),
    S64(i64),
    /// A 96-bit EPC, always exactly 12 bytes.
    U96([u8; 12]),
    Bytes(Vec<u8>),
    Utf8(String),
    /// An explicit-length bit array (`u1v` in the LLRP type system). `bits`
    /// may be fewer than `data.len() * 8`; trailing bits in the last byte
    /// beyond `bits` are ignored.
    BitArray { bits: usize, data: Vec<u8> },
    U16Array(Vec<u16>),
    U32Array(Vec<u32>),
    /// An enumerated field. `enum_name` identifies the `EnumSpec` so the
    /// validator can check membership and the XML codec can emit the
    /// symbolic name instead of the integer.
    Enum { enum_name: &'static str, value: i64 },
}

impl Value {
    /// Type name used in `ValidationError::TypeMismatch` messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::U8(_) => "u8",
            Value::U16(_) => "u16",
            Value::U32(_) => "u32",
            Value::U64(_) => "u64",
            Value::S8(_) => "s8",
            Value::S16(_) => "s16",
            Value::S32(_) => "s32",
            Value::S64(_) => "s64",
            Value::U96(_) => "u96",
            Value::Bytes(_) => "bytes",
            Value::Utf8(_) => "utf8",
            Value::BitArray { .. } => "bit_array",
            Value::U16Array(_) => "u16_array",
            Value::U32Array(_) => "u32_array",
            Value::Enum { .. } => "enum",
        }
    }

    /// Integer view of any numeric or enum value, used by range/enum checks.
    /// Returns `None` for non-integer variants (bytes, strings, bit arrays,
    /// bool).
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::U8(v) => Some(v as i64),
            Value::U16(v) => Some(v as i64),
            Value::U32(v) => Some(v as i64),
            Value::U64(v) => Some(v as i64),
            Value::S8(v) => Some(v as i64),
            Value::S16(v) => Some(v as i64),
            Value::S32(v) => Some(v as i64),
            Value::S64(v) => Some(v),
            Value::Enum { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Value::U32(v) => Some(v),
            Value::Enum { value, .. } => u32::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match *self {
            Value::U16(v) => Some(v),
            Value::Enum { value, .. } => u16::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::U96(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::S8(v) => write!(f, "{v}"),
            Value::S16(v) => write!(f, "{v}"),
            Value::S32(v) => write!(f, "{v}"),
            Value::S64(v) => write!(f, "{v}"),
            Value::U96(b) => write!(f, "{}", hex(b)),
            Value::Bytes(b) => write!(f, "{}", hex(b)),
            Value::Utf8(s) => write!(f, "{s}"),
            Value::BitArray { bits, data } => write!(f, "bits({bits})={}", hex(data)),
            Value::U16Array(v) => write!(f, "{v:?}"),
            Value::U32Array(v) => write!(f, "{v:?}"),
            Value::Enum { enum_name, value } => write!(f, "{enum_name}({value})"),
        }
    }
}

/// Lowercase hex, no separators — matches how the teacher's `TagReportData`
/// and `EPCData` display EPCs.
pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join("")
}
