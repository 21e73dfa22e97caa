#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Selector {
    #[prost(string, repeated, tag = "1")]
    pub namespaces: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(map = "string, string", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(message, repeated, tag = "3")]
    pub expressions: ::prost::alloc::vec::Vec<selector::Expression>,
}
/// Nested message and enum types in `Selector`.
pub mod selector {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Expression {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(enumeration = "expression::Operator", tag = "2")]
        pub operator: i32,
        #[prost(string, repeated, tag = "3")]
        pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    /// Nested message and enum types in `Expression`.
    pub mod expression {
        /// Selector expression operator, while the set-based syntax differs from Kubernetes (kubernetes:
        /// `key: !mylabel`, gloo: `key: mylabel, operator: "!"` | kubernetes: `key: mylabel`, gloo: `key:
        /// mylabel, operator: exists`), the functionality remains the same.
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Operator {
            Equals = 0,
            DoubleEquals = 1,
            NotEquals = 2,
            In = 3,
            NotIn = 4,
            Exists = 5,
            DoesNotExist = 6,
            GreaterThan = 7,
            LessThan = 8,
        }
        impl Operator {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Operator::Equals => "Equals",
                    Operator::DoubleEquals => "DoubleEquals",
                    Operator::NotEquals => "NotEquals",
                    Operator::In => "In",
                    Operator::NotIn => "NotIn",
                    Operator::Exists => "Exists",
                    Operator::DoesNotExist => "DoesNotExist",
                    Operator::GreaterThan => "GreaterThan",
                    Operator::LessThan => "LessThan",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "Equals" => Some(Self::Equals),
                    "DoubleEquals" => Some(Self::DoubleEquals),
                    "NotEquals" => Some(Self::NotEquals),
                    "In" => Some(Self::In),
                    "NotIn" => Some(Self::NotIn),
                    "Exists" => Some(Self::Exists),
                    "DoesNotExist" => Some(Self::DoesNotExist),
                    "GreaterThan" => Some(Self::GreaterThan),
                    "LessThan" => Some(Self::LessThan),
                    _ => None,
                }
            }
        }
    }
}
