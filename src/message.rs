//! Codec helpers shared by every generated message.

use bytes::{Buf, BufMut};
use prost::{DecodeError, EncodeError, Message};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub trait MessageExt: Message + Default + Sized {
    fn serialize_binary(&self) -> Vec<u8> {
        self.encode_to_vec()
    }

    /// Decodes a whole buffer. Truncated or mismatched input is an error, never a partial value.
    fn deserialize_binary(bytes: impl Buf) -> Result<Self, DecodeError> {
        Self::decode(bytes)
    }

    /// Appends the message with a varint length prefix, for embedding into a larger buffer.
    fn serialize_binary_to_writer(&self, writer: &mut impl BufMut) -> Result<(), EncodeError> {
        self.encode_length_delimited(writer)
    }

    /// Reads one length prefixed message and advances `reader` past it.
    fn deserialize_binary_from_reader(reader: &mut impl Buf) -> Result<Self, DecodeError> {
        Self::decode_length_delimited(reader)
    }

    /// Plain data projection of the message. Map fields come out as `[key, value]` pairs.
    fn to_object(&self) -> serde_json::Result<Value>
    where
        Self: Serialize,
    {
        serde_json::to_value(self)
    }

    fn from_object(value: Value) -> serde_json::Result<Self>
    where
        Self: DeserializeOwned,
    {
        serde_json::from_value(value)
    }
}

impl<M: Message + Default> MessageExt for M {}

/// Strict enum check. Decoding keeps unknown enum numbers as plain `i32`s, this rejects them.
pub fn check_enum<E>(value: i32) -> Result<E, DecodeError>
where
    E: TryFrom<i32, Error = DecodeError>,
{
    E::try_from(value)
}

/// `map<K, V>` fields as a sequence of `[key, value]` pairs sorted by key. Reading pairs back keeps
/// the last value for a repeated key, as protobuf does on the wire.
pub mod map_entries {
    use itertools::Itertools;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::{collections::HashMap, hash::Hash};

    pub fn serialize<K, V, S>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize + Ord,
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map.iter().sorted_by(|(a, _), (b, _)| a.cmp(b)))
    }

    pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
    where
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Ok(Vec::<(K, V)>::deserialize(deserializer)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::ObjectMeta;
    use crate::gateway::{GatewaySpec, HttpGateway};
    use crate::edge::status_filter::State;
    use anyhow::Result;
    use serde_json::json;

    fn meta() -> ObjectMeta {
        ObjectMeta {
            name: "my-gw".into(),
            namespace: "gloo-system".into(),
            labels: [("tier", "edge"), ("app", "gloo")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn binary_round_trip() -> Result<()> {
        let meta = meta();
        let back = ObjectMeta::deserialize_binary(meta.serialize_binary().as_slice())?;
        assert_eq!(back, meta);
        Ok(())
    }

    #[test]
    fn truncated_input_is_rejected() {
        let bytes = meta().serialize_binary();
        assert!(ObjectMeta::deserialize_binary(&bytes[..bytes.len() - 1]).is_err());
    }

    #[test]
    fn length_delimited_messages_share_a_buffer() -> Result<()> {
        let first = meta();
        let second = ObjectMeta {
            name: "other".into(),
            ..Default::default()
        };

        let mut buf = vec![];
        first.serialize_binary_to_writer(&mut buf)?;
        second.serialize_binary_to_writer(&mut buf)?;

        let mut reader = buf.as_slice();
        assert_eq!(ObjectMeta::deserialize_binary_from_reader(&mut reader)?, first);
        assert_eq!(ObjectMeta::deserialize_binary_from_reader(&mut reader)?, second);
        assert!(reader.is_empty());
        Ok(())
    }

    #[test]
    fn maps_project_to_sorted_pairs() -> Result<()> {
        let object = meta().to_object()?;
        assert_eq!(object["labels"], json!([["app", "gloo"], ["tier", "edge"]]));
        assert_eq!(object["name"], "my-gw");
        assert_eq!(object["resourceVersion"], "");

        assert_eq!(ObjectMeta::from_object(object)?, meta());
        Ok(())
    }

    #[test]
    fn repeated_map_keys_keep_the_last_value() -> Result<()> {
        let meta = ObjectMeta::from_object(json!({"labels": [["app", "a"], ["app", "b"]]}))?;
        assert_eq!(meta.labels.len(), 1);
        assert_eq!(meta.labels["app"], "b");
        Ok(())
    }

    #[test]
    fn presence_survives_the_object_form() -> Result<()> {
        let spec = GatewaySpec {
            ssl: Some(false),
            bind_port: 8080,
            gateway_type: Some(crate::gateway::gateway_spec::GatewayType::HttpGateway(HttpGateway::default())),
            ..Default::default()
        };

        let back = GatewaySpec::from_object(spec.to_object()?)?;
        assert_eq!(back.ssl, Some(false));
        assert_eq!(back, spec);
        Ok(())
    }

    #[test]
    fn strict_enum_check() {
        assert_eq!(check_enum::<State>(2).ok(), Some(State::Rejected));
        assert!(check_enum::<State>(42).is_err());
    }
}
