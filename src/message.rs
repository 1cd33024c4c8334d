//! The runtime parameter/message tree (spec.md §3.2) — what `Codec` and
//! `XmlCodec` both produce and consume, and what `Session` exchanges over
//! the wire. Every constructor runs the [`Validator`](crate::validator)
//! before returning, so a `Message`/`Parameter` that exists is, by
//! construction, valid against its `SpecRegistry` entry.

use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::spec_registry::SpecRegistry;
use crate::spec_types::CUSTOM_SLOT;
use crate::validator;
use crate::value::Value;

/// A sub-parameter slot: either a parameter matched against a registered
/// `ParameterSpec`, or a custom (vendor, subtype) extension the registry
/// doesn't recognize and which the codec therefore preserves as raw bytes
/// rather than rejecting (spec.md §4.3 "unknown CUSTOM parameters pass
/// through opaquely").
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Parameter(Parameter),
    /// A recognized vendor extension (spec.md §6) — validated against its
    /// `CustomExtension` field list, but not a `ParameterSpec`, since it has
    /// no type number of its own: it's discriminated by `(vendor_id,
    /// subtype)` under the `CUSTOM` parameter, not by a registry name.
    Custom { name: &'static str, vendor_id: u32, subtype: u32, field_values: BTreeMap<&'static str, Value> },
    /// A CUSTOM parameter whose `(vendor_id, subtype)` the registry doesn't
    /// recognize, preserved as raw bytes rather than rejected.
    OpaqueCustom { vendor_id: u32, subtype: u32, raw_bytes: Vec<u8> },
}

impl Item {
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Item::Parameter(p) => Some(p),
            Item::Custom { .. } | Item::OpaqueCustom { .. } => None,
        }
    }

    fn spec_name_for_cardinality(&self) -> &'static str {
        match self {
            Item::Parameter(p) => p.spec_name,
            Item::Custom { .. } | Item::OpaqueCustom { .. } => CUSTOM_SLOT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub spec_name: &'static str,
    pub field_values: BTreeMap<&'static str, Value>,
    pub sub_items: Vec<Item>,
}

impl Parameter {
    pub fn new(
        registry: &SpecRegistry,
        spec_name: &'static str,
        field_values: BTreeMap<&'static str, Value>,
        sub_items: Vec<Item>,
    ) -> Result<Parameter, ValidationError> {
        let param = Parameter { spec_name, field_values, sub_items };
        validator::validate_parameter(registry, &param, spec_name)?;
        Ok(param)
    }

    /// Builds a parameter with exactly one field, populated positionally —
    /// the "single-field convenience" constructor spec.md §3.2 calls out
    /// for parameters like `AntennaIDParam` or `PeakRSSIParam` that carry
    /// nothing but one value.
    pub fn single(
        registry: &SpecRegistry,
        spec_name: &'static str,
        value: Value,
    ) -> Result<Parameter, ValidationError> {
        let spec = registry.parameter(spec_name).ok_or_else(|| ValidationError::UnknownSpec {
            path: spec_name.to_string(),
            spec_name: spec_name.to_string(),
        })?;
        let field_name = spec.fields.first().map(|f| f.name).ok_or_else(|| ValidationError::UnknownField {
            path: spec_name.to_string(),
            field: "<none>".to_string(),
        })?;
        let mut field_values = BTreeMap::new();
        field_values.insert(field_name, value);
        Parameter::new(registry, spec_name, field_values, Vec::new())
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.field_values.get(name)
    }

    pub fn sub_parameters(&self, name: &str) -> Vec<&Parameter> {
        self.sub_items
            .iter()
            .filter_map(Item::as_parameter)
            .filter(|p| p.spec_name == name)
            .collect()
    }

    pub fn sub_parameter(&self, name: &str) -> Option<&Parameter> {
        self.sub_parameters(name).into_iter().next()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub spec_name: &'static str,
    pub message_id: u32,
    pub field_values: BTreeMap<&'static str, Value>,
    pub sub_items: Vec<Item>,
}

impl Message {
    pub fn new(
        registry: &SpecRegistry,
        spec_name: &'static str,
        message_id: u32,
        field_values: BTreeMap<&'static str, Value>,
        sub_items: Vec<Item>,
    ) -> Result<Message, ValidationError> {
        let msg = Message { spec_name, message_id, field_values, sub_items };
        validator::validate_message(registry, &msg)?;
        Ok(msg)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.field_values.get(name)
    }

    pub fn sub_parameters(&self, name: &str) -> Vec<&Parameter> {
        self.sub_items
            .iter()
            .filter_map(Item::as_parameter)
            .filter(|p| p.spec_name == name)
            .collect()
    }

    pub fn sub_parameter(&self, name: &str) -> Option<&Parameter> {
        self.sub_parameters(name).into_iter().next()
    }

    pub fn type_number(&self, registry: &SpecRegistry) -> Option<u16> {
        registry.message(self.spec_name).map(|m| m.type_number)
    }
}

impl Item {
    /// Builds a [`Item::Custom`], validating `field_values` against the
    /// named `CustomExtension`'s field list.
    pub fn new_custom(
        registry: &SpecRegistry,
        name: &'static str,
        vendor_id: u32,
        subtype: u32,
        field_values: BTreeMap<&'static str, Value>,
    ) -> Result<Item, ValidationError> {
        let ext = registry
            .custom_extension_by_name(name)
            .ok_or_else(|| ValidationError::UnknownSpec { path: name.to_string(), spec_name: name.to_string() })?;
        validator::validate_custom(registry, ext, &field_values, name)?;
        Ok(Item::Custom { name, vendor_id, subtype, field_values })
    }
}

/// Counts occurrences of `name` (or, for the custom slot, of any
/// `OpaqueCustom` item) among `items` — shared by the validator's
/// cardinality/choice checks.
pub(crate) fn count_matching(items: &[Item], name: &str) -> usize {
    if name == CUSTOM_SLOT {
        items.iter().filter(|it| matches!(it, Item::OpaqueCustom { .. } | Item::Custom { .. })).count()
    } else {
        items.iter().filter(|it| it.spec_name_for_cardinality() == name).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec_registry::SpecRegistry;

    #[test]
    fn single_field_convenience_builds_antenna_id_param() {
        let registry = SpecRegistry::load().unwrap();
        let p = Parameter::single(&registry, "AntennaIDParam", Value::U16(1)).unwrap();
        assert_eq!(p.field("AntennaID"), Some(&Value::U16(1)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let registry = SpecRegistry::load().unwrap();
        let mut fields = BTreeMap::new();
        fields.insert("NotAField", Value::U16(1));
        let err = Parameter::new(&registry, "AntennaIDParam", fields, Vec::new()).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
    }
}
