//! Binary wire codec (spec.md §4.3): the 10-byte LLRP framing header, TV/TLV
//! parameter packing, and CUSTOM (vendor_id, subtype) dispatch. Generalizes
//! the teacher's hand-written `LlrpMessage::encode`/`decode` and
//! `parse_parameters` (`llrp.rs`, `params.rs`) into one pair of functions
//! driven entirely by the `SpecRegistry` instead of one code path per
//! message/parameter type.

use bytes::Bytes;

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{CodecError, LlrpError, Result};
use crate::message::{Item, Message, Parameter};
use crate::spec_registry::SpecRegistry;
use crate::spec_types::{ArrayKind, FieldSpec, FieldType, ParamEncoding, SubParamRule, CUSTOM_SLOT, CUSTOM_TYPE_NUMBER};
use crate::validator;
use crate::value::Value;

const LLRP_VERSION: u8 = 1;
const FRAME_HEADER_LEN: usize = 10;
const TLV_HEADER_LEN: usize = 4;

// ---------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------

pub fn encode_binary(registry: &SpecRegistry, msg: &Message) -> Result<Vec<u8>> {
    let spec = registry
        .message(msg.spec_name)
        .ok_or_else(|| CodecError::UnknownType { namespace: "message", type_number: 0 })?;

    let mut bw = BitWriter::new();
    encode_fields(&mut bw, spec.fields, &msg.field_values)?;
    let ordered = validator::reorder_for_encode(spec.sub_parameters, &msg.sub_items);
    let mut body = bw.finish();
    for item in ordered {
        body.extend_from_slice(&encode_item(registry, item)?);
    }

    let total_len = FRAME_HEADER_LEN + body.len();
    let mut out = Vec::with_capacity(total_len);
    let type_and_version: u16 = ((LLRP_VERSION as u16 & 0x7) << 10) | (spec.type_number & 0x3FF);
    out.extend_from_slice(&type_and_version.to_be_bytes());
    out.extend_from_slice(&(total_len as u32).to_be_bytes());
    out.extend_from_slice(&msg.message_id.to_be_bytes());
    out.extend_from_slice(&body);
    Ok(out)
}

fn encode_item(registry: &SpecRegistry, item: &Item) -> Result<Vec<u8>> {
    match item {
        Item::Parameter(p) => encode_parameter(registry, p),
        Item::Custom { name, vendor_id, subtype, field_values } => {
            let ext = registry
                .custom_extension_by_name(name)
                .ok_or_else(|| CodecError::UnknownType { namespace: "custom extension", type_number: 0 })?;
            let mut bw = BitWriter::new();
            encode_fields(&mut bw, ext.fields, field_values)?;
            let payload = bw.finish();
            Ok(encode_custom_header_and_payload(*vendor_id, *subtype, &payload))
        }
        Item::OpaqueCustom { vendor_id, subtype, raw_bytes } => {
            Ok(encode_custom_header_and_payload(*vendor_id, *subtype, raw_bytes))
        }
    }
}

fn encode_parameter(registry: &SpecRegistry, param: &Parameter) -> Result<Vec<u8>> {
    let spec = registry
        .parameter(param.spec_name)
        .ok_or_else(|| CodecError::UnknownType { namespace: "parameter", type_number: 0 })?;

    let mut bw = BitWriter::new();
    encode_fields(&mut bw, spec.fields, &param.field_values)?;
    let ordered = validator::reorder_for_encode(spec.sub_parameters, &param.sub_items);
    let mut body = bw.finish();
    for item in ordered {
        body.extend_from_slice(&encode_item(registry, item)?);
    }

    match spec.encoding {
        ParamEncoding::Tv(type_num) => {
            let mut out = Vec::with_capacity(1 + body.len());
            out.push(0x80 | (type_num & 0x7F));
            out.extend_from_slice(&body);
            Ok(out)
        }
        ParamEncoding::Tlv(type_num) => {
            let total_len = TLV_HEADER_LEN + body.len();
            let mut out = Vec::with_capacity(total_len);
            out.extend_from_slice(&(type_num & 0x3FF).to_be_bytes());
            out.extend_from_slice(&(total_len as u16).to_be_bytes());
            out.extend_from_slice(&body);
            Ok(out)
        }
    }
}

fn encode_custom_header_and_payload(vendor_id: u32, subtype: u32, payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(8 + payload.len());
    body.extend_from_slice(&vendor_id.to_be_bytes());
    body.extend_from_slice(&(subtype as u32).to_be_bytes());
    body.extend_from_slice(payload);
    let total_len = TLV_HEADER_LEN + body.len();
    let mut out = Vec::with_capacity(total_len);
    out.extend_from_slice(&(CUSTOM_TYPE_NUMBER & 0x3FF).to_be_bytes());
    out.extend_from_slice(&(total_len as u16).to_be_bytes());
    out.extend_from_slice(&body);
    out
}

fn encode_fields(
    bw: &mut BitWriter,
    fields: &'static [FieldSpec],
    values: &std::collections::BTreeMap<&'static str, Value>,
) -> Result<()> {
    for field in fields {
        if matches!(field.field_type, FieldType::Reserved) {
            bw.write_uint(0, field.natural_bit_width());
            continue;
        }
        let value = values.get(field.name);
        if !matches!(field.array, ArrayKind::None) {
            encode_array_field(bw, field, value)?;
            continue;
        }
        match (field.field_type, value) {
            (FieldType::U1, Some(Value::Bool(b))) => bw.write_uint(*b as u64, 1),
            (FieldType::U1, Some(Value::Enum { value, .. })) => bw.write_uint(*value as u64, 1),
            (FieldType::U2, Some(v)) => bw.write_uint(value_as_u64(v)?, field.bit_width.unwrap_or(2) as u32),
            (FieldType::U8, Some(v)) => bw.write_uint(value_as_u64(v)?, 8),
            (FieldType::S8, Some(Value::S8(v))) => bw.write_sint(*v as i64, 8),
            (FieldType::U16, Some(v)) => bw.write_uint(value_as_u64(v)?, 16),
            (FieldType::S16, Some(Value::S16(v))) => bw.write_sint(*v as i64, 16),
            (FieldType::U32, Some(v)) => bw.write_uint(value_as_u64(v)?, 32),
            (FieldType::S32, Some(Value::S32(v))) => bw.write_sint(*v as i64, 32),
            (FieldType::U64, Some(v)) => bw.write_uint(value_as_u64(v)?, 64),
            (FieldType::S64, Some(Value::S64(v))) => bw.write_sint(*v, 64),
            (FieldType::UNv, Some(v)) => bw.write_uint(value_as_u64(v)?, field.bit_width.unwrap_or(0) as u32),
            (FieldType::U96, Some(Value::U96(bytes))) => {
                bw.align_to_octet();
                bw.write_bytes(bytes);
            }
            (FieldType::Utf8, Some(Value::Utf8(s))) => {
                bw.write_uint(s.len() as u64, 16);
                bw.align_to_octet();
                bw.write_bytes(s.as_bytes());
            }
            (FieldType::BitArray, Some(Value::BitArray { bits, data })) => {
                bw.write_uint(*bits as u64, 16);
                bw.align_to_octet();
                let nbytes = (*bits + 7) / 8;
                bw.write_bytes(&data[..nbytes.min(data.len())]);
            }
            (FieldType::BytesToEnd, Some(Value::Bytes(b))) => {
                bw.align_to_octet();
                bw.write_bytes(b);
            }
            (_, None) => {
                if let Some(default) = field.default {
                    bw.write_uint(default as u64, field.natural_bit_width().max(1));
                } else {
                    return Err(CodecError::FramingError(format!("missing value for field {}", field.name)).into());
                }
            }
            (_, Some(_)) => {
                return Err(CodecError::FramingError(format!("unsupported value for field {}", field.name)).into());
            }
        }
    }
    Ok(())
}

fn value_as_u64(value: &Value) -> Result<u64> {
    value
        .as_i64()
        .map(|v| v as u64)
        .ok_or_else(|| CodecError::FramingError("expected integer value".to_string()).into())
}

fn encode_array_field(bw: &mut BitWriter, field: &FieldSpec, value: Option<&Value>) -> Result<()> {
    match (field.array, field.field_type, value) {
        (ArrayKind::LengthPrefixedU16, FieldType::U16, Some(Value::U16Array(items))) => {
            bw.write_uint(items.len() as u64, 16);
            bw.align_to_octet();
            for v in items {
                bw.write_uint(*v as u64, 16);
            }
        }
        (ArrayKind::LengthPrefixedU16, FieldType::U32, Some(Value::U32Array(items))) => {
            bw.write_uint(items.len() as u64, 16);
            bw.align_to_octet();
            for v in items {
                bw.write_uint(*v as u64, 32);
            }
        }
        (ArrayKind::LengthPrefixedU16, FieldType::U8, Some(Value::Bytes(items))) => {
            bw.write_uint(items.len() as u64, 16);
            bw.align_to_octet();
            bw.write_bytes(items);
        }
        (ArrayKind::Fixed(n), _, Some(Value::Bytes(items))) => {
            bw.align_to_octet();
            bw.write_bytes(&items[..n.min(items.len())]);
        }
        (_, _, None) => {
            return Err(CodecError::FramingError(format!("missing value for array field {}", field.name)).into());
        }
        _ => return Err(CodecError::FramingError(format!("unsupported array encoding for field {}", field.name)).into()),
    }
    Ok(())
}

// ---------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------

pub fn decode_binary(registry: &SpecRegistry, bytes: &[u8]) -> Result<Message> {
    if bytes.len() < FRAME_HEADER_LEN {
        return Err(CodecError::Truncated("message shorter than the 10-byte frame header".to_string()).into());
    }
    let type_and_version = u16::from_be_bytes([bytes[0], bytes[1]]);
    let version = ((type_and_version >> 10) & 0x7) as u8;
    if version != LLRP_VERSION {
        return Err(CodecError::UnsupportedVersion(version).into());
    }
    let type_number = type_and_version & 0x3FF;
    let total_len = u32::from_be_bytes([bytes[2], bytes[3], bytes[4], bytes[5]]) as usize;
    if total_len != bytes.len() {
        return Err(CodecError::FramingError(format!(
            "declared length {total_len} does not match buffer length {}",
            bytes.len()
        ))
        .into());
    }
    let message_id = u32::from_be_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);

    let spec = registry
        .message_by_type_number(type_number)
        .ok_or(CodecError::UnknownType { namespace: "message", type_number: type_number as u32 })?;

    let mut br = BitReader::new(Bytes::copy_from_slice(&bytes[FRAME_HEADER_LEN..]));
    let field_values = decode_fields(&mut br, spec.fields)?;
    br.align_to_octet();
    let sub_items = decode_sub_items(registry, &mut br, spec.sub_parameters, spec.name)?;

    Message::new(registry, spec.name, message_id, field_values, sub_items).map_err(LlrpError::from)
}

/// Decodes sub-items until the reader runs dry, rejecting any that
/// `allowed` doesn't list at `path` (spec.md §4.3 "a decoder that finds a
/// parameter it doesn't expect at the current position raises
/// UNEXPECTED_PARAMETER").
fn decode_sub_items(registry: &SpecRegistry, br: &mut BitReader, allowed: &'static [SubParamRule], path: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    while br.remaining_bits() >= 8 {
        let item = decode_item(registry, br, path)?;
        check_permitted(allowed, &item, path)?;
        items.push(item);
    }
    Ok(items)
}

/// Same as [`decode_sub_items`], but stops once `total_bits` of a parent
/// TLV's declared body have been consumed instead of draining the whole
/// reader — the bound a nested parameter's own `Length` imposes.
fn decode_bounded_sub_items(
    registry: &SpecRegistry,
    br: &mut BitReader,
    allowed: &'static [SubParamRule],
    path: &str,
    total_bits: usize,
) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut remaining = total_bits;
    while remaining >= 8 {
        let before = br.bit_pos();
        let item = decode_item(registry, br, path)?;
        check_permitted(allowed, &item, path)?;
        let consumed = br.bit_pos() - before;
        remaining = remaining
            .checked_sub(consumed)
            .ok_or_else(|| CodecError::Truncated(format!("a sub-parameter under {path} overran its parent's declared length")))?;
        items.push(item);
    }
    Ok(items)
}

fn check_permitted(allowed: &'static [SubParamRule], item: &Item, path: &str) -> Result<()> {
    let permitted = match item {
        Item::Parameter(p) => allowed.iter().any(|r| r.parameter_name == p.spec_name),
        Item::Custom { .. } | Item::OpaqueCustom { .. } => allowed.iter().any(|r| r.parameter_name == CUSTOM_SLOT),
    };
    if permitted {
        return Ok(());
    }
    let parameter = match item {
        Item::Parameter(p) => p.spec_name.to_string(),
        Item::Custom { name, .. } => name.to_string(),
        Item::OpaqueCustom { .. } => "<opaque custom parameter>".to_string(),
    };
    Err(CodecError::UnexpectedParameter { parameter, path: path.to_string() }.into())
}

fn decode_item(registry: &SpecRegistry, br: &mut BitReader, path: &str) -> Result<Item> {
    br.require_octet_aligned()?;
    let peek = br.read_uint(8)? as u8;
    if peek & 0x80 != 0 {
        let type_num = peek & 0x7F;
        let spec = registry
            .parameter_by_type_number(type_num as u16)
            .ok_or(CodecError::UnknownType { namespace: "tv parameter", type_number: type_num as u32 })?;
        let field_values = decode_fields(br, spec.fields)?;
        let param = Parameter::new(registry, spec.name, field_values, Vec::new())?;
        Ok(Item::Parameter(param))
    } else {
        let second_byte = br.read_uint(8)? as u8;
        let type_num = (((peek as u16) << 8) | second_byte as u16) & 0x3FF;
        let len_hi = br.read_uint(8)? as u8;
        let len_lo = br.read_uint(8)? as u8;
        let total_len = u16::from_be_bytes([len_hi, len_lo]) as usize;
        let body_len = total_len
            .checked_sub(TLV_HEADER_LEN)
            .ok_or_else(|| CodecError::FramingError(format!("TLV length {total_len} shorter than header")))?;

        if type_num == CUSTOM_TYPE_NUMBER {
            decode_custom_item(registry, br, body_len)
        } else {
            let spec = registry
                .parameter_by_type_number(type_num)
                .ok_or(CodecError::UnknownType { namespace: "tlv parameter", type_number: type_num as u32 })?;
            let own_path = format!("{path}/{}", spec.name);
            let body_start = br.bit_pos();
            let field_values = decode_fields(br, spec.fields)?;
            br.align_to_octet();
            let consumed_bits = br.bit_pos() - body_start;
            let remaining_body_bits = (body_len * 8).checked_sub(consumed_bits).ok_or_else(|| {
                CodecError::Truncated(format!("parameter {} declared length shorter than its fixed fields", spec.name))
            })?;
            let sub_items = decode_bounded_sub_items(registry, br, spec.sub_parameters, &own_path, remaining_body_bits)?;
            let param = Parameter::new(registry, spec.name, field_values, sub_items)?;
            Ok(Item::Parameter(param))
        }
    }
}

fn decode_custom_item(registry: &SpecRegistry, br: &mut BitReader, body_len: usize) -> Result<Item> {
    if body_len < 8 {
        return Err(CodecError::Truncated("CUSTOM parameter shorter than vendor/subtype header".to_string()).into());
    }
    let vendor_id = br.read_uint(32)? as u32;
    let subtype = br.read_uint(32)? as u32;
    let payload_len = body_len - 8;
    match registry.custom_extension(vendor_id, subtype) {
        Some(ext) => {
            let field_values = decode_fields(br, ext.fields)?;
            let item = Item::new_custom(registry, ext.name, vendor_id, subtype, field_values)?;
            Ok(item)
        }
        None => {
            let raw = br.read_bytes(payload_len)?;
            Ok(Item::OpaqueCustom { vendor_id, subtype, raw_bytes: raw.to_vec() })
        }
    }
}

fn decode_fields(
    br: &mut BitReader,
    fields: &'static [FieldSpec],
) -> Result<std::collections::BTreeMap<&'static str, Value>> {
    let mut values = std::collections::BTreeMap::new();
    for field in fields {
        if matches!(field.field_type, FieldType::Reserved) {
            br.read_uint(field.natural_bit_width())?;
            continue;
        }
        if !matches!(field.array, ArrayKind::None) {
            values.insert(field.name, decode_array_field(br, field)?);
            continue;
        }
        let value = match field.field_type {
            FieldType::U1 => {
                let raw = br.read_uint(1)?;
                wrap_enum_or(field, raw as i64, || Value::Bool(raw != 0))
            }
            FieldType::U2 => {
                let raw = br.read_uint(field.bit_width.unwrap_or(2) as u32)?;
                wrap_enum_or(field, raw as i64, || Value::U8(raw as u8))
            }
            FieldType::U8 => {
                let raw = br.read_uint(8)?;
                wrap_enum_or(field, raw as i64, || Value::U8(raw as u8))
            }
            FieldType::S8 => Value::S8(br.read_sint(8)? as i8),
            FieldType::U16 => {
                let raw = br.read_uint(16)?;
                wrap_enum_or(field, raw as i64, || Value::U16(raw as u16))
            }
            FieldType::S16 => Value::S16(br.read_sint(16)? as i16),
            FieldType::U32 => {
                let raw = br.read_uint(32)?;
                wrap_enum_or(field, raw as i64, || Value::U32(raw as u32))
            }
            FieldType::S32 => Value::S32(br.read_sint(32)? as i32),
            FieldType::U64 => {
                let raw = br.read_uint(64)?;
                wrap_enum_or(field, raw as i64, || Value::U64(raw))
            }
            FieldType::S64 => Value::S64(br.read_sint(64)?),
            FieldType::UNv => {
                let bits = field.bit_width.unwrap_or(0) as u32;
                Value::U64(br.read_uint(bits)?)
            }
            FieldType::U96 => {
                br.require_octet_aligned()?;
                let bytes = br.read_bytes(12)?;
                let mut arr = [0u8; 12];
                arr.copy_from_slice(&bytes);
                Value::U96(arr)
            }
            FieldType::Utf8 => {
                let len = br.read_uint(16)? as usize;
                br.require_octet_aligned()?;
                let bytes = br.read_bytes(len)?;
                Value::Utf8(String::from_utf8(bytes.to_vec()).map_err(|e| CodecError::FramingError(e.to_string()))?)
            }
            FieldType::BitArray => {
                let bits = br.read_uint(16)? as usize;
                br.require_octet_aligned()?;
                let nbytes = (bits + 7) / 8;
                let bytes = br.read_bytes(nbytes)?;
                Value::BitArray { bits, data: bytes.to_vec() }
            }
            FieldType::BytesToEnd => {
                br.require_octet_aligned()?;
                Value::Bytes(br.read_remaining_bytes()?.to_vec())
            }
            FieldType::Reserved => unreachable!("handled above"),
        };
        values.insert(field.name, value);
    }
    Ok(values)
}

fn wrap_enum_or(field: &FieldSpec, raw: i64, fallback: impl FnOnce() -> Value) -> Value {
    match field.enum_ref {
        Some(enum_name) => Value::Enum { enum_name, value: raw },
        None => fallback(),
    }
}

fn decode_array_field(br: &mut BitReader, field: &FieldSpec) -> Result<Value> {
    match (field.array, field.field_type) {
        (ArrayKind::LengthPrefixedU16, FieldType::U16) => {
            let count = br.read_uint(16)? as usize;
            br.require_octet_aligned()?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(br.read_uint(16)? as u16);
            }
            Ok(Value::U16Array(items))
        }
        (ArrayKind::LengthPrefixedU16, FieldType::U32) => {
            let count = br.read_uint(16)? as usize;
            br.require_octet_aligned()?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(br.read_uint(32)? as u32);
            }
            Ok(Value::U32Array(items))
        }
        (ArrayKind::LengthPrefixedU16, FieldType::U8) => {
            let count = br.read_uint(16)? as usize;
            br.require_octet_aligned()?;
            let bytes = br.read_bytes(count)?;
            Ok(Value::Bytes(bytes.to_vec()))
        }
        (ArrayKind::Fixed(n), _) => {
            br.require_octet_aligned()?;
            let bytes = br.read_bytes(n)?;
            Ok(Value::Bytes(bytes.to_vec()))
        }
        _ => Err(CodecError::FramingError(format!("unsupported array decoding for field {}", field.name)).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec_registry::SpecRegistry;
    use std::collections::BTreeMap;

    fn registry() -> SpecRegistry {
        SpecRegistry::load().unwrap()
    }

    #[test]
    fn round_trips_keepalive_message() {
        let registry = registry();
        let msg = Message::new(&registry, "KEEPALIVE", 7, BTreeMap::new(), Vec::new()).unwrap();
        let bytes = encode_binary(&registry, &msg).unwrap();
        let decoded = decode_binary(&registry, &bytes).unwrap();
        assert_eq!(decoded.spec_name, "KEEPALIVE");
        assert_eq!(decoded.message_id, 7);
    }

    #[test]
    fn round_trips_delete_rospec_with_fields() {
        let registry = registry();
        let mut fields = BTreeMap::new();
        fields.insert("ROSpecID", Value::U32(42));
        let msg = Message::new(&registry, "DELETE_ROSPEC", 1, fields, Vec::new()).unwrap();
        let bytes = encode_binary(&registry, &msg).unwrap();
        let decoded = decode_binary(&registry, &bytes).unwrap();
        assert_eq!(decoded.field("ROSpecID"), Some(&Value::U32(42)));
    }

    #[test]
    fn round_trips_nested_rospec_with_tv_sub_parameter() {
        let registry = registry();
        let antenna_id = Parameter::single(&registry, "AntennaIDParam", Value::U16(1)).unwrap();
        let mut fields = BTreeMap::new();
        fields.insert("TagCount", Value::U16(3));
        let tag_count = Parameter::new(&registry, "TagSeenCountParam", fields, Vec::new()).unwrap();
        let mut epc_fields = BTreeMap::new();
        epc_fields.insert("EPC", Value::U96([0xAB; 12]));
        let epc96 = Parameter::new(&registry, "EPC96", epc_fields, Vec::new()).unwrap();
        let tag_report = Parameter::new(
            &registry,
            "TagReportData",
            BTreeMap::new(),
            vec![Item::Parameter(epc96), Item::Parameter(antenna_id), Item::Parameter(tag_count)],
        )
        .unwrap();
        let msg = Message::new(
            &registry,
            "RO_ACCESS_REPORT",
            99,
            BTreeMap::new(),
            vec![Item::Parameter(tag_report)],
        )
        .unwrap();
        let bytes = encode_binary(&registry, &msg).unwrap();
        let decoded = decode_binary(&registry, &bytes).unwrap();
        let reports = decoded.sub_parameters("TagReportData");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].sub_parameter("AntennaIDParam").unwrap().field("AntennaID"), Some(&Value::U16(1)));
    }

    #[test]
    fn round_trips_set_reader_config_with_nested_antenna_configuration() {
        let registry = registry();
        let receiver = Parameter::single(&registry, "RFReceiver", Value::U16(10)).unwrap();
        let mut transmitter_fields = BTreeMap::new();
        transmitter_fields.insert("HopTableID", Value::U16(1));
        transmitter_fields.insert("ChannelIndex", Value::U16(0));
        transmitter_fields.insert("TransmitPower", Value::U16(30));
        let transmitter = Parameter::new(&registry, "RFTransmitter", transmitter_fields, Vec::new()).unwrap();
        let mut antenna_fields = BTreeMap::new();
        antenna_fields.insert("AntennaID", Value::U16(1));
        let antenna_config = Parameter::new(
            &registry,
            "AntennaConfiguration",
            antenna_fields,
            vec![Item::Parameter(receiver), Item::Parameter(transmitter)],
        )
        .unwrap();

        let mut fields = BTreeMap::new();
        fields.insert("ResetToFactoryDefault", Value::Bool(false));
        let msg =
            Message::new(&registry, "SET_READER_CONFIG", 5, fields, vec![Item::Parameter(antenna_config)]).unwrap();
        let bytes = encode_binary(&registry, &msg).unwrap();
        let decoded = decode_binary(&registry, &bytes).unwrap();

        let decoded_antenna = decoded.sub_parameter("AntennaConfiguration").unwrap();
        assert_eq!(decoded_antenna.field("AntennaID"), Some(&Value::U16(1)));
        assert_eq!(decoded_antenna.sub_parameter("RFReceiver").unwrap().field("ReceiverSensitivity"), Some(&Value::U16(10)));
        assert_eq!(decoded_antenna.sub_parameter("RFTransmitter").unwrap().field("TransmitPower"), Some(&Value::U16(30)));
    }

    #[test]
    fn round_trips_access_spec_with_sub_parameters() {
        let registry = registry();
        let stop_trigger = Parameter::single(&registry, "OperationCountTrigger", Value::U16(1)).unwrap();
        let access_stop_trigger =
            Parameter::new(&registry, "AccessSpecStopTrigger", BTreeMap::new(), vec![Item::Parameter(stop_trigger)])
                .unwrap();
        let op_spec = Parameter::single(&registry, "ClientRequestOpSpec", Value::U16(1)).unwrap();
        let access_command =
            Parameter::new(&registry, "AccessCommand", BTreeMap::new(), vec![Item::Parameter(op_spec)]).unwrap();

        let mut fields = BTreeMap::new();
        fields.insert("AccessSpecID", Value::U32(1));
        fields.insert("AntennaID", Value::U16(0));
        fields.insert("ProtocolID", Value::Enum { enum_name: "AirProtocols", value: 1 });
        fields.insert("CurrentState", Value::Bool(false));
        fields.insert("ROSpecID", Value::U32(1));
        let access_spec = Parameter::new(
            &registry,
            "AccessSpec",
            fields,
            vec![Item::Parameter(access_stop_trigger), Item::Parameter(access_command)],
        )
        .unwrap();

        let bytes = encode_item(&registry, &Item::Parameter(access_spec)).unwrap();
        let mut br = BitReader::new(Bytes::from(bytes));
        let decoded = decode_item(&registry, &mut br, "test").unwrap();
        let decoded_spec = decoded.as_parameter().unwrap();
        assert_eq!(decoded_spec.field("ROSpecID"), Some(&Value::U32(1)));
        assert!(decoded_spec.sub_parameter("AccessCommand").unwrap().sub_parameter("ClientRequestOpSpec").is_some());
    }

    #[test]
    fn decode_rejects_sub_parameter_not_permitted_at_its_position() {
        let registry = registry();
        let antenna_id = Parameter::single(&registry, "AntennaIDParam", Value::U16(1)).unwrap();
        let bytes = encode_item(&registry, &Item::Parameter(antenna_id)).unwrap();
        let mut br = BitReader::new(Bytes::from(bytes));
        // KEEPALIVE's sub_parameters list is empty, so any decoded item is unexpected here.
        let err = decode_sub_items(&registry, &mut br, registry.message("KEEPALIVE").unwrap().sub_parameters, "KEEPALIVE")
            .unwrap_err();
        assert!(matches!(err, LlrpError::Codec(CodecError::UnexpectedParameter { .. })));
    }

    #[test]
    fn decodes_unknown_custom_parameter_opaquely() {
        let registry = registry();
        let raw = encode_custom_header_and_payload(0xDEADBEEF, 255, &[1, 2, 3, 4]);
        let mut padded = Vec::new();
        padded.extend_from_slice(&raw);
        let mut br = BitReader::new(Bytes::from(padded));
        let item = decode_item(&registry, &mut br, "test").unwrap();
        match item {
            Item::OpaqueCustom { vendor_id, subtype, raw_bytes } => {
                assert_eq!(vendor_id, 0xDEADBEEF);
                assert_eq!(subtype, 255);
                assert_eq!(raw_bytes, vec![1, 2, 3, 4]);
            }
            _ => panic!("expected opaque custom item"),
        }
    }
}
