/// Target clusters and namespaces of a federated resource.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Placement {
    #[prost(string, repeated, tag = "1")]
    pub namespaces: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "2")]
    pub clusters: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Placement outcome of a federated resource, per cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PlacementStatus {
    /// Placement state, keyed by cluster name.
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub clusters: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        placement_status::Cluster,
    >,
    #[prost(enumeration = "placement_status::State", tag = "2")]
    pub state: i32,
    #[prost(string, tag = "3")]
    pub message: ::prost::alloc::string::String,
    #[prost(int64, tag = "4")]
    pub observed_generation: i64,
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_timestamp")]
    pub processing_time: ::core::option::Option<::prost_types::Timestamp>,
    /// Name of the controller which wrote this status.
    #[prost(string, tag = "6")]
    pub written_by: ::prost::alloc::string::String,
}
/// Nested message and enum types in `PlacementStatus`.
pub mod placement_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Cluster {
        #[prost(map = "string, message", tag = "1")]
        #[serde(with = "crate::message::map_entries")]
        pub namespaces: ::std::collections::HashMap<
            ::prost::alloc::string::String,
            Namespace,
        >,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Namespace {
        #[prost(enumeration = "State", tag = "1")]
        pub state: i32,
        #[prost(string, tag = "2")]
        pub message: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        Unknown = 0,
        Placed = 1,
        Failed = 2,
        Stale = 3,
        Invalid = 4,
        Pending = 5,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Unknown => "UNKNOWN",
                State::Placed => "PLACED",
                State::Failed => "FAILED",
                State::Stale => "STALE",
                State::Invalid => "INVALID",
                State::Pending => "PENDING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNKNOWN" => Some(Self::Unknown),
                "PLACED" => Some(Self::Placed),
                "FAILED" => Some(Self::Failed),
                "STALE" => Some(Self::Stale),
                "INVALID" => Some(Self::Invalid),
                "PENDING" => Some(Self::Pending),
                _ => None,
            }
        }
    }
}
