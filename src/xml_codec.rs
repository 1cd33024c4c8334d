//! Human-readable XML form of the same `Message`/`Parameter` tree the binary
//! `Codec` produces (spec.md §4.5). One element per parameter/message, one
//! attribute per field, enum fields written as their symbolic name, choice
//! groups as whichever branch is actually populated. No shared code with
//! `codec.rs` beyond the `Message` tree and `SpecRegistry` — cross-format
//! equivalence holds because both walk the same validated tree, not because
//! one format defers to the other (spec.md §9).
//!
//! Grounded on the XML-mirrors-wire-spec shape of `Rusty-Engine-rustyfix`
//! (a FIX protocol codec in the retrieval pack), built on `quick-xml` the
//! way that crate builds on its own XML dependency.

use std::collections::BTreeMap;
use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{CodecError, LlrpError, Result, ValidationError};
use crate::message::{Item, Message, Parameter};
use crate::spec_registry::SpecRegistry;
use crate::spec_types::{ArrayKind, FieldSpec, FieldType};
use crate::value::{hex, Value};

const CUSTOM_ELEMENT: &str = "Custom";
const OPAQUE_CUSTOM_ELEMENT: &str = "OpaqueCustom";
const MESSAGE_ID_ATTR: &str = "MessageID";
const VENDOR_ID_ATTR: &str = "VendorID";
const SUBTYPE_ATTR: &str = "Subtype";
const NAME_ATTR: &str = "Name";
const PAYLOAD_ATTR: &str = "Payload";

// ---------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------

pub fn encode_xml(registry: &SpecRegistry, msg: &Message) -> Result<String> {
    let spec = registry
        .message(msg.spec_name)
        .ok_or_else(|| ValidationError::UnknownSpec { path: msg.spec_name.to_string(), spec_name: msg.spec_name.to_string() })?;

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    let mut start = BytesStart::new(spec.name);
    start.push_attribute((MESSAGE_ID_ATTR, msg.message_id.to_string().as_str()));
    for field in spec.fields {
        push_field_attr(registry, &mut start, field, msg.field_values.get(field.name))?;
    }
    writer.write_event(Event::Start(start)).map_err(LlrpError::Xml)?;
    for item in &msg.sub_items {
        write_item(&mut writer, registry, item)?;
    }
    writer.write_event(Event::End(quick_xml::events::BytesEnd::new(spec.name))).map_err(LlrpError::Xml)?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| LlrpError::Utf8(e.utf8_error()))
}

fn write_item(writer: &mut Writer<Cursor<Vec<u8>>>, registry: &SpecRegistry, item: &Item) -> Result<()> {
    match item {
        Item::Parameter(p) => write_parameter(writer, registry, p),
        Item::Custom { name, vendor_id, subtype, field_values } => {
            let ext = registry
                .custom_extension_by_name(name)
                .ok_or_else(|| ValidationError::UnknownSpec { path: name.to_string(), spec_name: name.to_string() })?;
            let mut start = BytesStart::new(CUSTOM_ELEMENT);
            start.push_attribute((NAME_ATTR, *name));
            start.push_attribute((VENDOR_ID_ATTR, vendor_id.to_string().as_str()));
            start.push_attribute((SUBTYPE_ATTR, subtype.to_string().as_str()));
            for field in ext.fields {
                push_field_attr(registry, &mut start, field, field_values.get(field.name))?;
            }
            writer.write_event(Event::Empty(start)).map_err(LlrpError::Xml)?;
            Ok(())
        }
        Item::OpaqueCustom { vendor_id, subtype, raw_bytes } => {
            let mut start = BytesStart::new(OPAQUE_CUSTOM_ELEMENT);
            start.push_attribute((VENDOR_ID_ATTR, vendor_id.to_string().as_str()));
            start.push_attribute((SUBTYPE_ATTR, subtype.to_string().as_str()));
            start.push_attribute((PAYLOAD_ATTR, hex(raw_bytes).as_str()));
            writer.write_event(Event::Empty(start)).map_err(LlrpError::Xml)?;
            Ok(())
        }
    }
}

fn write_parameter(writer: &mut Writer<Cursor<Vec<u8>>>, registry: &SpecRegistry, param: &Parameter) -> Result<()> {
    let spec = registry
        .parameter(param.spec_name)
        .ok_or_else(|| ValidationError::UnknownSpec { path: param.spec_name.to_string(), spec_name: param.spec_name.to_string() })?;
    let mut start = BytesStart::new(spec.name);
    for field in spec.fields {
        push_field_attr(registry, &mut start, field, param.field_values.get(field.name))?;
    }
    if param.sub_items.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(LlrpError::Xml)?;
    } else {
        writer.write_event(Event::Start(start)).map_err(LlrpError::Xml)?;
        for item in &param.sub_items {
            write_item(writer, registry, item)?;
        }
        writer.write_event(Event::End(quick_xml::events::BytesEnd::new(spec.name))).map_err(LlrpError::Xml)?;
    }
    Ok(())
}

fn push_field_attr(registry: &SpecRegistry, start: &mut BytesStart, field: &FieldSpec, value: Option<&Value>) -> Result<()> {
    if matches!(field.field_type, FieldType::Reserved) {
        return Ok(());
    }
    let Some(value) = value else { return Ok(()) };
    let rendered = value_to_attr(registry, value)?;
    start.push_attribute((field.name, rendered.as_str()));
    Ok(())
}

/// Renders a field value as an XML attribute string. Enumerated fields
/// (spec.md §4.5) emit their symbolic member name, never the bare integer;
/// an out-of-range value on an open enum falls back to the integer since no
/// symbolic name exists for it.
fn value_to_attr(registry: &SpecRegistry, value: &Value) -> Result<String> {
    Ok(match value {
        Value::Bool(b) => b.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::S8(v) => v.to_string(),
        Value::S16(v) => v.to_string(),
        Value::S32(v) => v.to_string(),
        Value::S64(v) => v.to_string(),
        Value::U96(b) => hex(b),
        Value::Bytes(b) => hex(b),
        Value::Utf8(s) => s.clone(),
        Value::BitArray { bits, data } => format!("{bits}:{}", hex(data)),
        Value::U16Array(items) => items.iter().map(u16::to_string).collect::<Vec<_>>().join(","),
        Value::U32Array(items) => items.iter().map(u32::to_string).collect::<Vec<_>>().join(","),
        Value::Enum { enum_name, value } => registry
            .enum_spec(enum_name)
            .and_then(|spec| spec.name_for(*value))
            .map(|name| name.to_string())
            .unwrap_or_else(|| value.to_string()),
    })
}

// ---------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------

pub fn decode_xml(registry: &SpecRegistry, xml: &str) -> Result<Message> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf).map_err(LlrpError::Xml)? {
            Event::Start(start) => {
                let name = element_local_name(&start);
                let spec_name = registry
                    .message(&name)
                    .map(|m| m.name)
                    .ok_or_else(|| ValidationError::UnknownSpec { path: name.clone(), spec_name: name.clone() })?;
                let spec = registry.message(spec_name).unwrap();
                let attrs = collect_attrs(&start)?;
                let message_id: u32 = attrs
                    .get(MESSAGE_ID_ATTR)
                    .ok_or_else(|| CodecError::FramingError("message element missing MessageID".to_string()))?
                    .parse()
                    .map_err(|_| CodecError::FramingError("MessageID is not a valid u32".to_string()))?;
                let field_values = parse_fields(registry, spec.fields, &attrs)?;
                let sub_items = read_children(&mut reader, registry, spec.name)?;
                return Message::new(registry, spec.name, message_id, field_values, sub_items).map_err(LlrpError::from);
            }
            Event::Eof => {
                return Err(CodecError::FramingError("XML document has no message element".to_string()).into());
            }
            _ => {}
        }
        buf.clear();
    }
}

fn read_children(reader: &mut Reader<&[u8]>, registry: &SpecRegistry, closing: &str) -> Result<Vec<Item>> {
    let mut items = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(LlrpError::Xml)? {
            Event::Start(start) => {
                let name = element_local_name(&start);
                let attrs = collect_attrs(&start)?;
                items.push(read_parameter_body(reader, registry, &name, attrs, false)?);
            }
            Event::Empty(start) => {
                let name = element_local_name(&start);
                let attrs = collect_attrs(&start)?;
                items.push(read_parameter_body(reader, registry, &name, attrs, true)?);
            }
            Event::End(end) => {
                if element_local_name_bytes(end.name().as_ref()) == closing {
                    return Ok(items);
                }
            }
            Event::Eof => {
                return Err(CodecError::FramingError(format!("unexpected end of document inside {closing}")).into());
            }
            _ => {}
        }
        buf.clear();
    }
}

fn read_parameter_body(
    reader: &mut Reader<&[u8]>,
    registry: &SpecRegistry,
    name: &str,
    attrs: BTreeMap<String, String>,
    is_empty: bool,
) -> Result<Item> {
    if name == CUSTOM_ELEMENT {
        let ext_name = attrs.get(NAME_ATTR).ok_or_else(|| CodecError::FramingError("Custom element missing Name".to_string()))?;
        let vendor_id: u32 = attrs
            .get(VENDOR_ID_ATTR)
            .ok_or_else(|| CodecError::FramingError("Custom element missing VendorID".to_string()))?
            .parse()
            .map_err(|_| CodecError::FramingError("VendorID is not a valid u32".to_string()))?;
        let subtype: u32 = attrs
            .get(SUBTYPE_ATTR)
            .ok_or_else(|| CodecError::FramingError("Custom element missing Subtype".to_string()))?
            .parse()
            .map_err(|_| CodecError::FramingError("Subtype is not a valid u32".to_string()))?;
        let ext = registry
            .custom_extension_by_name(ext_name)
            .ok_or_else(|| ValidationError::UnknownSpec { path: ext_name.clone(), spec_name: ext_name.clone() })?;
        let field_values = parse_fields(registry, ext.fields, &attrs)?;
        if !is_empty {
            skip_to_end(reader, name)?;
        }
        let name_static = ext.name;
        return Item::new_custom(registry, name_static, vendor_id, subtype, field_values).map_err(LlrpError::from);
    }
    if name == OPAQUE_CUSTOM_ELEMENT {
        let vendor_id: u32 = attrs
            .get(VENDOR_ID_ATTR)
            .ok_or_else(|| CodecError::FramingError("OpaqueCustom element missing VendorID".to_string()))?
            .parse()
            .map_err(|_| CodecError::FramingError("VendorID is not a valid u32".to_string()))?;
        let subtype: u32 = attrs
            .get(SUBTYPE_ATTR)
            .ok_or_else(|| CodecError::FramingError("OpaqueCustom element missing Subtype".to_string()))?
            .parse()
            .map_err(|_| CodecError::FramingError("Subtype is not a valid u32".to_string()))?;
        let payload = attrs.get(PAYLOAD_ATTR).map(String::as_str).unwrap_or("");
        let raw_bytes = parse_hex(payload)?;
        if !is_empty {
            skip_to_end(reader, name)?;
        }
        return Ok(Item::OpaqueCustom { vendor_id, subtype, raw_bytes });
    }

    let spec = registry
        .parameter(name)
        .ok_or_else(|| ValidationError::UnknownSpec { path: name.to_string(), spec_name: name.to_string() })?;
    let field_values = parse_fields(registry, spec.fields, &attrs)?;
    let sub_items = if is_empty { Vec::new() } else { read_children(reader, registry, spec.name)? };
    Parameter::new(registry, spec.name, field_values, sub_items).map(Item::Parameter).map_err(LlrpError::from)
}

fn skip_to_end(reader: &mut Reader<&[u8]>, name: &str) -> Result<()> {
    let mut depth = 1;
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf).map_err(LlrpError::Xml)? {
            Event::Start(s) if element_local_name(&s) == name => depth += 1,
            Event::End(e) if element_local_name_bytes(e.name().as_ref()) == name => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => return Err(CodecError::FramingError(format!("unexpected EOF skipping {name}")).into()),
            _ => {}
        }
        buf.clear();
    }
}

fn element_local_name(start: &BytesStart) -> String {
    element_local_name_bytes(start.name().as_ref())
}

fn element_local_name_bytes(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_string()
}

fn collect_attrs(start: &BytesStart) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(LlrpError::XmlAttr)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value().map_err(LlrpError::Xml)?.to_string();
        map.insert(key, value);
    }
    Ok(map)
}

fn parse_fields(
    registry: &SpecRegistry,
    fields: &'static [FieldSpec],
    attrs: &BTreeMap<String, String>,
) -> Result<BTreeMap<&'static str, Value>> {
    let mut values = BTreeMap::new();
    for field in fields {
        if matches!(field.field_type, FieldType::Reserved) {
            continue;
        }
        let Some(raw) = attrs.get(field.name) else { continue };
        let value = parse_field_value(registry, field, raw)?;
        values.insert(field.name, value);
    }
    Ok(values)
}

/// Parses an enumerated field's XML attribute. spec.md §4.5 says enum fields
/// are emitted as symbolic names, so the symbolic form is tried first; a
/// bare integer is still accepted (e.g. an open enum's out-of-range member,
/// which has no symbolic name to begin with).
fn parse_field_value(registry: &SpecRegistry, field: &FieldSpec, raw: &str) -> Result<Value> {
    if !matches!(field.array, ArrayKind::None) {
        return parse_array_value(field, raw);
    }
    if let Some(enum_name) = field.enum_ref {
        let espec = registry.enum_spec(enum_name);
        let value = espec
            .and_then(|s| s.value_for(raw))
            .or_else(|| raw.parse::<i64>().ok())
            .ok_or_else(|| CodecError::FramingError(format!("field {} is not a valid enum member", field.name)))?;
        return Ok(Value::Enum { enum_name, value });
    }
    Ok(match field.field_type {
        FieldType::U1 => Value::Bool(raw == "true" || raw == "1"),
        FieldType::U2 | FieldType::U8 => Value::U8(parse_int(field, raw)?),
        FieldType::S8 => Value::S8(parse_int(field, raw)?),
        FieldType::U16 => Value::U16(parse_int(field, raw)?),
        FieldType::S16 => Value::S16(parse_int(field, raw)?),
        FieldType::U32 => Value::U32(parse_int(field, raw)?),
        FieldType::S32 => Value::S32(parse_int(field, raw)?),
        FieldType::U64 | FieldType::UNv => Value::U64(parse_int(field, raw)?),
        FieldType::S64 => Value::S64(parse_int(field, raw)?),
        FieldType::U96 => {
            let bytes = parse_hex(raw)?;
            if bytes.len() != 12 {
                return Err(CodecError::FramingError(format!("field {} expects 12 bytes of hex", field.name)).into());
            }
            let mut arr = [0u8; 12];
            arr.copy_from_slice(&bytes);
            Value::U96(arr)
        }
        FieldType::Utf8 => Value::Utf8(raw.to_string()),
        FieldType::BitArray => {
            let (bits_str, hex_str) = raw.split_once(':').ok_or_else(|| {
                CodecError::FramingError(format!("field {} expects \"bits:hex\"", field.name))
            })?;
            let bits: usize = bits_str.parse().map_err(|_| CodecError::FramingError(format!("field {} has non-numeric bit count", field.name)))?;
            Value::BitArray { bits, data: parse_hex(hex_str)? }
        }
        FieldType::BytesToEnd => Value::Bytes(parse_hex(raw)?),
        FieldType::Reserved => unreachable!("filtered out above"),
    })
}

fn parse_array_value(field: &FieldSpec, raw: &str) -> Result<Value> {
    match field.field_type {
        FieldType::U16 => {
            let items = if raw.is_empty() {
                Vec::new()
            } else {
                raw.split(',')
                    .map(|s| s.trim().parse::<u16>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|_| CodecError::FramingError(format!("field {} has a non-numeric element", field.name)))?
            };
            Ok(Value::U16Array(items))
        }
        FieldType::U32 => {
            let items = if raw.is_empty() {
                Vec::new()
            } else {
                raw.split(',')
                    .map(|s| s.trim().parse::<u32>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|_| CodecError::FramingError(format!("field {} has a non-numeric element", field.name)))?
            };
            Ok(Value::U32Array(items))
        }
        FieldType::U8 => Ok(Value::Bytes(parse_hex(raw)?)),
        _ => Err(CodecError::FramingError(format!("unsupported array field type for {}", field.name)).into()),
    }
}

fn parse_int<T>(field: &FieldSpec, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    raw.parse().map_err(|_| CodecError::FramingError(format!("field {} is not a valid integer", field.name)).into())
}

fn parse_hex(raw: &str) -> Result<Vec<u8>> {
    if raw.len() % 2 != 0 {
        return Err(CodecError::FramingError("hex string has odd length".to_string()).into());
    }
    (0..raw.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&raw[i..i + 2], 16))
        .collect::<std::result::Result<Vec<u8>, _>>()
        .map_err(|_| CodecError::FramingError("invalid hex digit".to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec_registry::SpecRegistry;
    use std::collections::BTreeMap;

    #[test]
    fn round_trips_delete_rospec_through_xml() {
        let registry = SpecRegistry::load().unwrap();
        let mut fields = BTreeMap::new();
        fields.insert("ROSpecID", Value::U32(7));
        let msg = Message::new(&registry, "DELETE_ROSPEC", 3, fields, Vec::new()).unwrap();
        let xml = encode_xml(&registry, &msg).unwrap();
        let decoded = decode_xml(&registry, &xml).unwrap();
        assert_eq!(decoded.field("ROSpecID"), Some(&Value::U32(7)));
        assert_eq!(decoded.message_id, 3);
    }

    #[test]
    fn round_trips_nested_parameter_through_xml() {
        let registry = SpecRegistry::load().unwrap();
        let antenna_id = Parameter::single(&registry, "AntennaIDParam", Value::U16(2)).unwrap();
        let mut epc_fields = BTreeMap::new();
        epc_fields.insert("EPC", Value::U96([0x11; 12]));
        let epc96 = Parameter::new(&registry, "EPC96", epc_fields, Vec::new()).unwrap();
        let tag_report = Parameter::new(
            &registry,
            "TagReportData",
            BTreeMap::new(),
            vec![Item::Parameter(epc96), Item::Parameter(antenna_id)],
        )
        .unwrap();
        let msg = Message::new(&registry, "RO_ACCESS_REPORT", 5, BTreeMap::new(), vec![Item::Parameter(tag_report)]).unwrap();
        let xml = encode_xml(&registry, &msg).unwrap();
        let decoded = decode_xml(&registry, &xml).unwrap();
        let report = decoded.sub_parameter("TagReportData").unwrap();
        assert_eq!(report.sub_parameter("AntennaIDParam").unwrap().field("AntennaID"), Some(&Value::U16(2)));
    }

    #[test]
    fn round_trips_custom_extension_through_xml() {
        let registry = SpecRegistry::load().unwrap();
        let mut fields = BTreeMap::new();
        fields.insert("SearchMode", Value::Enum { enum_name: "ImpinjInventorySearchMode", value: 1 });
        let item = Item::new_custom(&registry, "ImpinjSearchMode", crate::spec_catalog::IMPINJ_VENDOR_ID, 23, fields).unwrap();
        let mut req_fields = BTreeMap::new();
        req_fields.insert("RequestedData", Value::Enum { enum_name: "GetReaderCapabilitiesRequestedData", value: 0 });
        let msg = Message::new(&registry, "GET_READER_CAPABILITIES", 1, req_fields, vec![item]).unwrap();
        let xml = encode_xml(&registry, &msg).unwrap();
        let decoded = decode_xml(&registry, &xml).unwrap();
        match &decoded.sub_items[0] {
            Item::Custom { field_values, .. } => {
                assert_eq!(field_values.get("SearchMode"), Some(&Value::Enum { enum_name: "ImpinjInventorySearchMode", value: 1 }));
            }
            _ => panic!("expected custom item"),
        }
    }

    /// spec.md §8: a 96-bit EPC is exactly 12 bytes of hex; 11 or 13 bytes
    /// fail rather than silently truncating or zero-padding.
    #[test]
    fn epc96_rejects_hex_of_the_wrong_length() {
        let field = FieldSpec::new("EPC", FieldType::U96);
        let twelve_bytes = "11".repeat(12);
        match parse_field_value_for_test(&field, &twelve_bytes) {
            Ok(Value::U96(bytes)) => assert_eq!(bytes, [0x11; 12]),
            other => panic!("expected a 12-byte U96, got {other:?}"),
        }
        assert!(parse_field_value_for_test(&field, &"11".repeat(11)).is_err());
        assert!(parse_field_value_for_test(&field, &"11".repeat(13)).is_err());
    }

    fn parse_field_value_for_test(field: &FieldSpec, raw: &str) -> Result<Value> {
        let registry = SpecRegistry::load().unwrap();
        parse_field_value(&registry, field, raw)
    }
}
