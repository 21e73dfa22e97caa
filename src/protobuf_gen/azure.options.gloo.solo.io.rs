#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    #[prost(string, tag = "1")]
    pub function_app_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub secret_ref: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    #[prost(message, repeated, tag = "3")]
    pub functions: ::prost::alloc::vec::Vec<upstream_spec::FunctionSpec>,
}
/// Nested message and enum types in `UpstreamSpec`.
pub mod upstream_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct FunctionSpec {
        #[prost(string, tag = "1")]
        pub function_name: ::prost::alloc::string::String,
        #[prost(enumeration = "function_spec::AuthLevel", tag = "2")]
        pub auth_level: i32,
    }
    /// Nested message and enum types in `FunctionSpec`.
    pub mod function_spec {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum AuthLevel {
            Anonymous = 0,
            Function = 1,
            Admin = 2,
        }
        impl AuthLevel {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    AuthLevel::Anonymous => "Anonymous",
                    AuthLevel::Function => "Function",
                    AuthLevel::Admin => "Admin",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "Anonymous" => Some(Self::Anonymous),
                    "Function" => Some(Self::Function),
                    "Admin" => Some(Self::Admin),
                    _ => None,
                }
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestinationSpec {
    #[prost(string, tag = "1")]
    pub function_name: ::prost::alloc::string::String,
}
