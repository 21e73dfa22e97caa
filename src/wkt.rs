//! serde bridges for the `google.protobuf` well-known types. prost-types ships them without serde
//! support, so generated fields of these types point their `#[serde(with)]` here.
//!
//! `Duration` and `Timestamp` use their protobuf JSON strings (`"1.5s"`,
//! `"2023-06-01T10:00:00Z"`), `Struct` becomes a plain JSON object. `Any` stays packed as
//! `{"typeUrl", "value"}` with base64 bytes, since nothing here knows the packed types.

use itertools::Itertools;
use prost_types::{value::Kind, Any, ListValue, Struct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};
use serde_with::{base64::Base64, serde_as};
use std::collections::HashMap;

pub mod option_duration {
    use prost_types::Duration;
    use serde::{Deserializer, Serializer};
    use serde_with::{As, DisplayFromStr};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        As::<Option<DisplayFromStr>>::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        As::<Option<DisplayFromStr>>::deserialize(deserializer)
    }
}

pub mod option_timestamp {
    use prost_types::Timestamp;
    use serde::{Deserializer, Serializer};
    use serde_with::{As, DisplayFromStr};

    pub fn serialize<S: Serializer>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error> {
        As::<Option<DisplayFromStr>>::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timestamp>, D::Error> {
        As::<Option<DisplayFromStr>>::deserialize(deserializer)
    }
}

pub mod option_struct {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Struct>, serializer: S) -> Result<S::Ok, S::Error> {
        value.as_ref().map(struct_to_json).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Struct>, D::Error> {
        Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.map(json_to_struct))
    }
}

/// For `Struct` members of a oneof, which are not wrapped in an `Option`.
pub mod struct_value {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Struct, serializer: S) -> Result<S::Ok, S::Error> {
        struct_to_json(value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Struct, D::Error> {
        Ok(json_to_struct(Map::deserialize(deserializer)?))
    }
}

/// `map<string, google.protobuf.Struct>` as sorted `[key, object]` pairs.
pub mod struct_map_entries {
    use super::*;

    pub fn serialize<S: Serializer>(map: &HashMap<String, Struct>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            map.iter()
                .sorted_by(|(a, _), (b, _)| a.cmp(b))
                .map(|(key, value)| (key, struct_to_json(value))),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<HashMap<String, Struct>, D::Error> {
        Ok(Vec::<(String, Map<String, Value>)>::deserialize(deserializer)?
            .into_iter()
            .map(|(key, value)| (key, json_to_struct(value)))
            .collect())
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct AnyObject {
    type_url: String,
    #[serde_as(as = "Base64")]
    value: Vec<u8>,
}

impl From<&Any> for AnyObject {
    fn from(any: &Any) -> Self {
        Self {
            type_url: any.type_url.clone(),
            value: any.value.clone(),
        }
    }
}

impl From<AnyObject> for Any {
    fn from(object: AnyObject) -> Self {
        Self {
            type_url: object.type_url,
            value: object.value,
        }
    }
}

pub mod option_any {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Any>, serializer: S) -> Result<S::Ok, S::Error> {
        value.as_ref().map(AnyObject::from).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Any>, D::Error> {
        Ok(Option::<AnyObject>::deserialize(deserializer)?.map(Any::from))
    }
}

/// For `Any` members of a oneof.
pub mod any {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Any, serializer: S) -> Result<S::Ok, S::Error> {
        AnyObject::from(value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Any, D::Error> {
        Ok(AnyObject::deserialize(deserializer)?.into())
    }
}

pub fn struct_to_json(value: &Struct) -> Map<String, Value> {
    value
        .fields
        .iter()
        .map(|(key, value)| (key.clone(), value_to_json(value)))
        .collect()
}

pub fn value_to_json(value: &prost_types::Value) -> Value {
    match &value.kind {
        None | Some(Kind::NullValue(_)) => Value::Null,
        // NaN and infinities have no JSON form
        Some(Kind::NumberValue(number)) => Number::from_f64(*number).map(Value::Number).unwrap_or(Value::Null),
        Some(Kind::StringValue(string)) => Value::String(string.clone()),
        Some(Kind::BoolValue(boolean)) => Value::Bool(*boolean),
        Some(Kind::StructValue(nested)) => Value::Object(struct_to_json(nested)),
        Some(Kind::ListValue(list)) => Value::Array(list.values.iter().map(value_to_json).collect()),
    }
}

pub fn json_to_struct(object: Map<String, Value>) -> Struct {
    Struct {
        fields: object.into_iter().map(|(key, value)| (key, json_to_value(value))).collect(),
    }
}

pub fn json_to_value(value: Value) -> prost_types::Value {
    let kind = match value {
        Value::Null => Kind::NullValue(prost_types::NullValue::NullValue as i32),
        Value::Bool(boolean) => Kind::BoolValue(boolean),
        Value::Number(number) => Kind::NumberValue(number.as_f64().unwrap_or_default()),
        Value::String(string) => Kind::StringValue(string),
        Value::Array(values) => Kind::ListValue(ListValue {
            values: values.into_iter().map(json_to_value).collect(),
        }),
        Value::Object(object) => Kind::StructValue(json_to_struct(object)),
    };

    prost_types::Value { kind: Some(kind) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use prost_types::{Duration, Timestamp};
    use serde_json::json;

    #[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
    #[serde(default)]
    struct Holder {
        #[serde(with = "option_duration")]
        timeout: Option<Duration>,
        #[serde(with = "option_timestamp")]
        created: Option<Timestamp>,
        #[serde(with = "option_struct")]
        details: Option<Struct>,
        #[serde(with = "struct_map_entries")]
        metadata: HashMap<String, Struct>,
        #[serde(with = "option_any")]
        config: Option<Any>,
    }

    #[test]
    fn well_known_types_use_protobuf_json() -> Result<()> {
        let details = json_to_struct(
            json!({"reason": "conflict", "count": 2.0, "tags": ["a", null], "nested": {"ok": true}})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        );

        let holder = Holder {
            timeout: Some(Duration { seconds: 1, nanos: 500_000_000 }),
            created: Some(Timestamp { seconds: 1_685_613_600, nanos: 0 }),
            details: Some(details.clone()),
            metadata: HashMap::from([("b".to_string(), Struct::default()), ("a".to_string(), details)]),
            config: Some(Any {
                type_url: "type.googleapis.com/google.protobuf.StringValue".into(),
                value: vec![0x0a, 0x02, b'o', b'k'],
            }),
        };

        let value = serde_json::to_value(&holder)?;
        assert_eq!(value["timeout"], "1.500s");
        assert_eq!(value["created"], "2023-06-01T10:00:00Z");
        assert_eq!(value["details"]["tags"], json!(["a", null]));
        assert_eq!(value["details"]["nested"]["ok"], true);
        assert_eq!(value["metadata"][0][0], "a");
        assert_eq!(value["metadata"][1], json!(["b", {}]));
        assert_eq!(
            value["config"],
            json!({"typeUrl": "type.googleapis.com/google.protobuf.StringValue", "value": "CgJvaw=="})
        );

        let back: Holder = serde_json::from_value(value)?;
        assert_eq!(back, holder);

        Ok(())
    }

    #[test]
    fn absent_fields_stay_unset() -> Result<()> {
        let holder: Holder = serde_json::from_value(json!({}))?;
        assert_eq!(holder, Holder::default());
        assert_eq!(serde_json::to_value(&holder)?["timeout"], Value::Null);
        Ok(())
    }

    #[test]
    fn non_finite_numbers_become_null() {
        let value = prost_types::Value {
            kind: Some(Kind::NumberValue(f64::NAN)),
        };
        assert_eq!(value_to_json(&value), Value::Null);
    }
}
