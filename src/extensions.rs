//! Reading protobuf extension fields out of encoded messages.
//!
//! prost drops unknown fields while decoding, so extensions are read from the raw bytes instead. A
//! registry knows which field numbers of `M` are extensions and how they are encoded. None of the
//! Gloo API messages declare extension ranges, so nothing is registered out of the box.

use bytes::{Buf, Bytes};
use prost::{
    encoding::{decode_key, decode_varint, skip_field, DecodeContext, WireType},
    DecodeError, Message,
};
use std::{collections::BTreeMap, marker::PhantomData};

#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    #[error("decoding extension bytes")]
    Decode(#[from] DecodeError),
    #[error("field {0} is already registered as an extension")]
    AlreadyRegistered(u32),
    #[error("field {0} is not a registered extension")]
    NotRegistered(u32),
    #[error("group encoded extensions are not supported (field {0})")]
    Group(u32),
    #[error("extension {name} (field {field}) expected wire type {expected:?}, found {found:?}")]
    WireTypeMismatch {
        field: u32,
        name: &'static str,
        expected: WireType,
        found: WireType,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtensionField {
    pub name: &'static str,
    pub wire_type: WireType,
}

/// Raw value of one extension occurrence. Interpreting it (zigzag, float bits, nested message) is
/// up to the caller, who registered the field and knows its type.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtensionValue {
    Varint(u64),
    Fixed64(u64),
    Fixed32(u32),
    LengthDelimited(Bytes),
}

impl ExtensionValue {
    pub fn decode_message<T: Message + Default>(&self) -> Result<T, DecodeError> {
        match self {
            ExtensionValue::LengthDelimited(bytes) => T::decode(bytes.clone()),
            other => Err(DecodeError::new(format!("{:?} cannot hold a message", other))),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExtensionValue::LengthDelimited(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExtensionEntry {
    pub field: u32,
    pub name: &'static str,
    pub value: ExtensionValue,
}

/// Extension fields known for messages of type `M`, keyed by field number.
#[derive(Debug)]
pub struct ExtensionRegistry<M> {
    fields: BTreeMap<u32, ExtensionField>,
    _message: PhantomData<fn() -> M>,
}

impl<M> Default for ExtensionRegistry<M> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            _message: PhantomData,
        }
    }
}

impl<M: Message> ExtensionRegistry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, field: u32, name: &'static str, wire_type: WireType) -> Result<(), ExtensionError> {
        if matches!(wire_type, WireType::StartGroup | WireType::EndGroup) {
            return Err(ExtensionError::Group(field));
        }
        if self.fields.contains_key(&field) {
            return Err(ExtensionError::AlreadyRegistered(field));
        }

        self.fields.insert(field, ExtensionField { name, wire_type });
        Ok(())
    }

    pub fn field(&self, field: u32) -> Option<&ExtensionField> {
        self.fields.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All registered extension occurrences in `bytes`, in wire order. Other fields are skipped.
    pub fn read(&self, mut bytes: impl Buf) -> Result<Vec<ExtensionEntry>, ExtensionError> {
        let mut entries = vec![];

        while bytes.has_remaining() {
            let (tag, wire_type) = decode_key(&mut bytes)?;

            let Some(field) = self.fields.get(&tag) else {
                skip_field(wire_type, tag, &mut bytes, DecodeContext::default())?;
                continue;
            };

            if field.wire_type != wire_type {
                return Err(ExtensionError::WireTypeMismatch {
                    field: tag,
                    name: field.name,
                    expected: field.wire_type,
                    found: wire_type,
                });
            }

            entries.push(ExtensionEntry {
                field: tag,
                name: field.name,
                value: read_value(wire_type, &mut bytes)?,
            });
        }

        Ok(entries)
    }

    /// Last occurrence of a registered extension, matching how a non-repeated field is decoded.
    pub fn get(&self, bytes: impl Buf, field: u32) -> Result<Option<ExtensionValue>, ExtensionError> {
        if !self.fields.contains_key(&field) {
            return Err(ExtensionError::NotRegistered(field));
        }

        Ok(self
            .read(bytes)?
            .into_iter()
            .filter(|entry| entry.field == field)
            .last()
            .map(|entry| entry.value))
    }
}

fn read_value(wire_type: WireType, bytes: &mut impl Buf) -> Result<ExtensionValue, DecodeError> {
    match wire_type {
        WireType::Varint => Ok(ExtensionValue::Varint(decode_varint(bytes)?)),
        WireType::SixtyFourBit => {
            if bytes.remaining() < 8 {
                return Err(DecodeError::new("buffer underflow"));
            }
            Ok(ExtensionValue::Fixed64(bytes.get_u64_le()))
        }
        WireType::ThirtyTwoBit => {
            if bytes.remaining() < 4 {
                return Err(DecodeError::new("buffer underflow"));
            }
            Ok(ExtensionValue::Fixed32(bytes.get_u32_le()))
        }
        WireType::LengthDelimited => {
            let len = decode_varint(bytes)?;
            if len > bytes.remaining() as u64 {
                return Err(DecodeError::new("buffer underflow"));
            }
            Ok(ExtensionValue::LengthDelimited(bytes.copy_to_bytes(len as usize)))
        }
        WireType::StartGroup | WireType::EndGroup => Err(DecodeError::new("unexpected group wire type")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{ObjectMeta, ResourceYaml};
    use crate::message::MessageExt;
    use anyhow::Result;
    use prost::encoding::{encode_key, encode_varint};

    fn with_extensions() -> Vec<u8> {
        let mut bytes = ObjectMeta {
            name: "my-gw".into(),
            ..Default::default()
        }
        .serialize_binary();

        encode_key(1000, WireType::Varint, &mut bytes);
        encode_varint(7, &mut bytes);

        let nested = ResourceYaml { yaml: "kind: Gateway".into() }.serialize_binary();
        encode_key(1001, WireType::LengthDelimited, &mut bytes);
        encode_varint(nested.len() as u64, &mut bytes);
        bytes.extend_from_slice(&nested);

        encode_key(1000, WireType::Varint, &mut bytes);
        encode_varint(9, &mut bytes);

        bytes
    }

    #[test]
    fn nothing_registered_by_default() -> Result<()> {
        let registry = ExtensionRegistry::<ObjectMeta>::new();
        assert!(registry.is_empty());
        assert!(registry.read(with_extensions().as_slice())?.is_empty());
        Ok(())
    }

    #[test]
    fn reads_registered_fields_and_skips_the_rest() -> Result<()> {
        let bytes = with_extensions();

        // the message itself still decodes, extensions are dropped as unknown fields
        assert_eq!(ObjectMeta::deserialize_binary(bytes.as_slice())?.name, "my-gw");

        let mut registry = ExtensionRegistry::<ObjectMeta>::new();
        registry.register(1000, "priority", WireType::Varint)?;
        registry.register(1001, "source", WireType::LengthDelimited)?;

        let entries = registry.read(bytes.as_slice())?;
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "priority");
        assert_eq!(entries[0].value, ExtensionValue::Varint(7));

        let source: ResourceYaml = entries[1].value.decode_message()?;
        assert_eq!(source.yaml, "kind: Gateway");

        assert_eq!(registry.get(bytes.as_slice(), 1000)?, Some(ExtensionValue::Varint(9)));
        Ok(())
    }

    #[test]
    fn registration_errors() -> Result<()> {
        let mut registry = ExtensionRegistry::<ObjectMeta>::new();
        registry.register(1000, "priority", WireType::Varint)?;

        assert!(matches!(
            registry.register(1000, "again", WireType::Varint),
            Err(ExtensionError::AlreadyRegistered(1000))
        ));
        assert!(matches!(registry.register(1002, "grouped", WireType::StartGroup), Err(ExtensionError::Group(1002))));
        assert!(matches!(registry.get(&[][..], 5), Err(ExtensionError::NotRegistered(5))));
        Ok(())
    }

    #[test]
    fn wire_type_mismatch() -> Result<()> {
        let mut registry = ExtensionRegistry::<ObjectMeta>::new();
        registry.register(1001, "source", WireType::ThirtyTwoBit)?;

        let err = registry.read(with_extensions().as_slice()).unwrap_err();
        assert!(matches!(
            err,
            ExtensionError::WireTypeMismatch {
                field: 1001,
                found: WireType::LengthDelimited,
                ..
            }
        ));
        Ok(())
    }
}
