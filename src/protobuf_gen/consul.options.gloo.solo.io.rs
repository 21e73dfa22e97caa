#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryOptions {
    /// Whether to use the agent cache for Consul queries. Defaults to true.
    #[prost(message, optional, tag = "1")]
    pub use_cache: ::core::option::Option<bool>,
}
/// Consistency modes for Consul queries.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ConsulConsistencyModes {
    DefaultMode = 0,
    StaleMode = 1,
    ConsistentMode = 2,
}
impl ConsulConsistencyModes {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ConsulConsistencyModes::DefaultMode => "DefaultMode",
            ConsulConsistencyModes::StaleMode => "StaleMode",
            ConsulConsistencyModes::ConsistentMode => "ConsistentMode",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "DefaultMode" => Some(Self::DefaultMode),
            "StaleMode" => Some(Self::StaleMode),
            "ConsistentMode" => Some(Self::ConsistentMode),
            _ => None,
        }
    }
}
/// Upstream Spec for Consul Upstreams
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub service_tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "3")]
    pub subset_tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "4")]
    pub instance_tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "5")]
    pub instance_blacklist_tags: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "6")]
    pub service_spec: ::core::option::Option<
        super::super::super::super::super::gloo::solo::io::ServiceSpec,
    >,
    #[prost(bool, tag = "7")]
    pub connect_enabled: bool,
    #[prost(string, repeated, tag = "8")]
    pub data_centers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "ConsulConsistencyModes", tag = "9")]
    pub consistency_mode: i32,
    #[prost(message, optional, tag = "10")]
    pub query_options: ::core::option::Option<QueryOptions>,
}
