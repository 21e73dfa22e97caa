/// Kubernetes object metadata as returned by the API server.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ObjectMeta {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub namespace: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub uid: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub resource_version: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_timestamp")]
    pub creation_timestamp: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(map = "string, string", tag = "6")]
    #[serde(with = "crate::message::map_entries")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(map = "string, string", tag = "7")]
    #[serde(with = "crate::message::map_entries")]
    pub annotations: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// The cluster the object lives in. Empty for objects on the management cluster.
    #[prost(string, tag = "8")]
    pub cluster_name: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceYaml {
    #[prost(string, tag = "1")]
    pub yaml: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pagination {
    /// Maximum number of results to return. Zero means no limit.
    #[prost(int32, tag = "1")]
    pub limit: i32,
    /// Number of results to skip.
    #[prost(int32, tag = "2")]
    pub offset: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatusFilter {
    #[prost(enumeration = "status_filter::State", tag = "1")]
    pub state: i32,
}
/// Nested message and enum types in `StatusFilter`.
pub mod status_filter {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        Pending = 0,
        Accepted = 1,
        Rejected = 2,
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "PENDING",
                State::Accepted => "ACCEPTED",
                State::Rejected => "REJECTED",
                State::Warning => "WARNING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "ACCEPTED" => Some(Self::Accepted),
                "REJECTED" => Some(Self::Rejected),
                "WARNING" => Some(Self::Warning),
                _ => None,
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SortOptions {
    #[prost(bool, tag = "1")]
    pub descending: bool,
    #[prost(enumeration = "sort_options::SortKey", tag = "2")]
    pub sort_key: i32,
}
/// Nested message and enum types in `SortOptions`.
pub mod sort_options {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum SortKey {
        Name = 0,
        Namespace = 1,
        Status = 2,
    }
    impl SortKey {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                SortKey::Name => "NAME",
                SortKey::Namespace => "NAMESPACE",
                SortKey::Status => "STATUS",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "NAME" => Some(Self::Name),
                "NAMESPACE" => Some(Self::Namespace),
                "STATUS" => Some(Self::Status),
                _ => None,
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Gateway {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<ObjectMeta>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::GatewaySpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::GatewayStatus,
    >,
    /// The Gloo instance the gateway belongs to.
    #[prost(message, optional, tag = "4")]
    pub gloo_instance: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchableHttpGateway {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<ObjectMeta>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::MatchableHttpGatewaySpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::MatchableHttpGatewayStatus,
    >,
    #[prost(message, optional, tag = "4")]
    pub gloo_instance: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchableTcpGateway {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<ObjectMeta>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::MatchableTcpGatewaySpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::MatchableTcpGatewayStatus,
    >,
    #[prost(message, optional, tag = "4")]
    pub gloo_instance: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualService {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<ObjectMeta>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::VirtualServiceSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::VirtualServiceStatus,
    >,
    #[prost(message, optional, tag = "4")]
    pub gloo_instance: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteTable {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<ObjectMeta>,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::RouteTableSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::super::super::gateway::solo::io::RouteTableStatus,
    >,
    #[prost(message, optional, tag = "4")]
    pub gloo_instance: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListGatewaysRequest {
    /// Only list resources belonging to this Gloo instance. Lists across all instances when unset.
    #[prost(message, optional, tag = "1")]
    pub gloo_instance_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<Pagination>,
    /// Case-insensitive substring filter over name and namespace.
    #[prost(string, tag = "3")]
    pub query_string: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub status_filter: ::core::option::Option<StatusFilter>,
    #[prost(message, optional, tag = "5")]
    pub sort_options: ::core::option::Option<SortOptions>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListGatewaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub gateways: ::prost::alloc::vec::Vec<Gateway>,
    /// Number of matching resources before pagination.
    #[prost(int32, tag = "2")]
    pub total: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetGatewayYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub gateway_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetGatewayYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<ResourceYaml>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetGatewayDetailsRequest {
    #[prost(message, optional, tag = "1")]
    pub gateway_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetGatewayDetailsResponse {
    #[prost(message, optional, tag = "1")]
    pub gateway: ::core::option::Option<Gateway>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMatchableHttpGatewaysRequest {
    /// Only list resources belonging to this Gloo instance. Lists across all instances when unset.
    #[prost(message, optional, tag = "1")]
    pub gloo_instance_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<Pagination>,
    /// Case-insensitive substring filter over name and namespace.
    #[prost(string, tag = "3")]
    pub query_string: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub status_filter: ::core::option::Option<StatusFilter>,
    #[prost(message, optional, tag = "5")]
    pub sort_options: ::core::option::Option<SortOptions>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMatchableHttpGatewaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub matchable_http_gateways: ::prost::alloc::vec::Vec<MatchableHttpGateway>,
    /// Number of matching resources before pagination.
    #[prost(int32, tag = "2")]
    pub total: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableHttpGatewayYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub matchable_http_gateway_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableHttpGatewayYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<ResourceYaml>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableHttpGatewayDetailsRequest {
    #[prost(message, optional, tag = "1")]
    pub matchable_http_gateway_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableHttpGatewayDetailsResponse {
    #[prost(message, optional, tag = "1")]
    pub matchable_http_gateway: ::core::option::Option<MatchableHttpGateway>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMatchableTcpGatewaysRequest {
    /// Only list resources belonging to this Gloo instance. Lists across all instances when unset.
    #[prost(message, optional, tag = "1")]
    pub gloo_instance_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<Pagination>,
    /// Case-insensitive substring filter over name and namespace.
    #[prost(string, tag = "3")]
    pub query_string: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub status_filter: ::core::option::Option<StatusFilter>,
    #[prost(message, optional, tag = "5")]
    pub sort_options: ::core::option::Option<SortOptions>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListMatchableTcpGatewaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub matchable_tcp_gateways: ::prost::alloc::vec::Vec<MatchableTcpGateway>,
    /// Number of matching resources before pagination.
    #[prost(int32, tag = "2")]
    pub total: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableTcpGatewayYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub matchable_tcp_gateway_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableTcpGatewayYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<ResourceYaml>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableTcpGatewayDetailsRequest {
    #[prost(message, optional, tag = "1")]
    pub matchable_tcp_gateway_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetMatchableTcpGatewayDetailsResponse {
    #[prost(message, optional, tag = "1")]
    pub matchable_tcp_gateway: ::core::option::Option<MatchableTcpGateway>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListVirtualServicesRequest {
    /// Only list resources belonging to this Gloo instance. Lists across all instances when unset.
    #[prost(message, optional, tag = "1")]
    pub gloo_instance_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<Pagination>,
    /// Case-insensitive substring filter over name and namespace.
    #[prost(string, tag = "3")]
    pub query_string: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub status_filter: ::core::option::Option<StatusFilter>,
    #[prost(message, optional, tag = "5")]
    pub sort_options: ::core::option::Option<SortOptions>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListVirtualServicesResponse {
    #[prost(message, repeated, tag = "1")]
    pub virtual_services: ::prost::alloc::vec::Vec<VirtualService>,
    /// Number of matching resources before pagination.
    #[prost(int32, tag = "2")]
    pub total: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVirtualServiceYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub virtual_service_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVirtualServiceYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<ResourceYaml>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVirtualServiceDetailsRequest {
    #[prost(message, optional, tag = "1")]
    pub virtual_service_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetVirtualServiceDetailsResponse {
    #[prost(message, optional, tag = "1")]
    pub virtual_service: ::core::option::Option<VirtualService>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRouteTablesRequest {
    /// Only list resources belonging to this Gloo instance. Lists across all instances when unset.
    #[prost(message, optional, tag = "1")]
    pub gloo_instance_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<Pagination>,
    /// Case-insensitive substring filter over name and namespace.
    #[prost(string, tag = "3")]
    pub query_string: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub status_filter: ::core::option::Option<StatusFilter>,
    #[prost(message, optional, tag = "5")]
    pub sort_options: ::core::option::Option<SortOptions>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRouteTablesResponse {
    #[prost(message, repeated, tag = "1")]
    pub route_tables: ::prost::alloc::vec::Vec<RouteTable>,
    /// Number of matching resources before pagination.
    #[prost(int32, tag = "2")]
    pub total: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRouteTableYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub route_table_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRouteTableYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<ResourceYaml>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRouteTableDetailsRequest {
    #[prost(message, optional, tag = "1")]
    pub route_table_ref: ::core::option::Option<
        super::super::super::super::super::core::skv2::solo::io::ClusterObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRouteTableDetailsResponse {
    #[prost(message, optional, tag = "1")]
    pub route_table: ::core::option::Option<RouteTable>,
}
/// Method descriptors for `rpc.edge.gloo.solo.io.GatewayResourceApi`.
pub mod gateway_resource_api_methods {
    use crate::grpc_web::MethodDescriptor;
    pub const SERVICE_NAME: &str = "rpc.edge.gloo.solo.io.GatewayResourceApi";
    pub const LIST_GATEWAYS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListGateways",
        request_type: "rpc.edge.gloo.solo.io.ListGatewaysRequest",
        response_type: "rpc.edge.gloo.solo.io.ListGatewaysResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_GATEWAY_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetGatewayYaml",
        request_type: "rpc.edge.gloo.solo.io.GetGatewayYamlRequest",
        response_type: "rpc.edge.gloo.solo.io.GetGatewayYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_GATEWAY_DETAILS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetGatewayDetails",
        request_type: "rpc.edge.gloo.solo.io.GetGatewayDetailsRequest",
        response_type: "rpc.edge.gloo.solo.io.GetGatewayDetailsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_MATCHABLE_HTTP_GATEWAYS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListMatchableHttpGateways",
        request_type: "rpc.edge.gloo.solo.io.ListMatchableHttpGatewaysRequest",
        response_type: "rpc.edge.gloo.solo.io.ListMatchableHttpGatewaysResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_MATCHABLE_HTTP_GATEWAY_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetMatchableHttpGatewayYaml",
        request_type: "rpc.edge.gloo.solo.io.GetMatchableHttpGatewayYamlRequest",
        response_type: "rpc.edge.gloo.solo.io.GetMatchableHttpGatewayYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_MATCHABLE_HTTP_GATEWAY_DETAILS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetMatchableHttpGatewayDetails",
        request_type: "rpc.edge.gloo.solo.io.GetMatchableHttpGatewayDetailsRequest",
        response_type: "rpc.edge.gloo.solo.io.GetMatchableHttpGatewayDetailsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_MATCHABLE_TCP_GATEWAYS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListMatchableTcpGateways",
        request_type: "rpc.edge.gloo.solo.io.ListMatchableTcpGatewaysRequest",
        response_type: "rpc.edge.gloo.solo.io.ListMatchableTcpGatewaysResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_MATCHABLE_TCP_GATEWAY_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetMatchableTcpGatewayYaml",
        request_type: "rpc.edge.gloo.solo.io.GetMatchableTcpGatewayYamlRequest",
        response_type: "rpc.edge.gloo.solo.io.GetMatchableTcpGatewayYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_MATCHABLE_TCP_GATEWAY_DETAILS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetMatchableTcpGatewayDetails",
        request_type: "rpc.edge.gloo.solo.io.GetMatchableTcpGatewayDetailsRequest",
        response_type: "rpc.edge.gloo.solo.io.GetMatchableTcpGatewayDetailsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_VIRTUAL_SERVICES: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListVirtualServices",
        request_type: "rpc.edge.gloo.solo.io.ListVirtualServicesRequest",
        response_type: "rpc.edge.gloo.solo.io.ListVirtualServicesResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_VIRTUAL_SERVICE_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetVirtualServiceYaml",
        request_type: "rpc.edge.gloo.solo.io.GetVirtualServiceYamlRequest",
        response_type: "rpc.edge.gloo.solo.io.GetVirtualServiceYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_VIRTUAL_SERVICE_DETAILS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetVirtualServiceDetails",
        request_type: "rpc.edge.gloo.solo.io.GetVirtualServiceDetailsRequest",
        response_type: "rpc.edge.gloo.solo.io.GetVirtualServiceDetailsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_ROUTE_TABLES: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListRouteTables",
        request_type: "rpc.edge.gloo.solo.io.ListRouteTablesRequest",
        response_type: "rpc.edge.gloo.solo.io.ListRouteTablesResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_ROUTE_TABLE_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetRouteTableYaml",
        request_type: "rpc.edge.gloo.solo.io.GetRouteTableYamlRequest",
        response_type: "rpc.edge.gloo.solo.io.GetRouteTableYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_ROUTE_TABLE_DETAILS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetRouteTableDetails",
        request_type: "rpc.edge.gloo.solo.io.GetRouteTableDetailsRequest",
        response_type: "rpc.edge.gloo.solo.io.GetRouteTableDetailsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const METHODS: &[&MethodDescriptor] = &[
        &LIST_GATEWAYS,
        &GET_GATEWAY_YAML,
        &GET_GATEWAY_DETAILS,
        &LIST_MATCHABLE_HTTP_GATEWAYS,
        &GET_MATCHABLE_HTTP_GATEWAY_YAML,
        &GET_MATCHABLE_HTTP_GATEWAY_DETAILS,
        &LIST_MATCHABLE_TCP_GATEWAYS,
        &GET_MATCHABLE_TCP_GATEWAY_YAML,
        &GET_MATCHABLE_TCP_GATEWAY_DETAILS,
        &LIST_VIRTUAL_SERVICES,
        &GET_VIRTUAL_SERVICE_YAML,
        &GET_VIRTUAL_SERVICE_DETAILS,
        &LIST_ROUTE_TABLES,
        &GET_ROUTE_TABLE_YAML,
        &GET_ROUTE_TABLE_DETAILS,
    ];
}
/// Generated client implementations.
pub mod gateway_resource_api_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct GatewayResourceApiClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> GatewayResourceApiClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> GatewayResourceApiClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            GatewayResourceApiClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /// Lists Gateways in all Gloo instances, or in the given instance.
        pub async fn list_gateways(
            &mut self,
            request: impl tonic::IntoRequest<super::ListGatewaysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListGatewaysResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/ListGateways",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "ListGateways",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single Gateway.
        pub async fn get_gateway_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetGatewayYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetGatewayYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetGatewayYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetGatewayYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets a single Gateway with its status.
        pub async fn get_gateway_details(
            &mut self,
            request: impl tonic::IntoRequest<super::GetGatewayDetailsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetGatewayDetailsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetGatewayDetails",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetGatewayDetails",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists MatchableHttpGateways in all Gloo instances, or in the given instance.
        pub async fn list_matchable_http_gateways(
            &mut self,
            request: impl tonic::IntoRequest<super::ListMatchableHttpGatewaysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListMatchableHttpGatewaysResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/ListMatchableHttpGateways",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "ListMatchableHttpGateways",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single MatchableHttpGateway.
        pub async fn get_matchable_http_gateway_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMatchableHttpGatewayYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetMatchableHttpGatewayYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetMatchableHttpGatewayYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetMatchableHttpGatewayYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets a single MatchableHttpGateway with its status.
        pub async fn get_matchable_http_gateway_details(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMatchableHttpGatewayDetailsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetMatchableHttpGatewayDetailsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetMatchableHttpGatewayDetails",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetMatchableHttpGatewayDetails",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists MatchableTcpGateways in all Gloo instances, or in the given instance.
        pub async fn list_matchable_tcp_gateways(
            &mut self,
            request: impl tonic::IntoRequest<super::ListMatchableTcpGatewaysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListMatchableTcpGatewaysResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/ListMatchableTcpGateways",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "ListMatchableTcpGateways",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single MatchableTcpGateway.
        pub async fn get_matchable_tcp_gateway_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMatchableTcpGatewayYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetMatchableTcpGatewayYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetMatchableTcpGatewayYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetMatchableTcpGatewayYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets a single MatchableTcpGateway with its status.
        pub async fn get_matchable_tcp_gateway_details(
            &mut self,
            request: impl tonic::IntoRequest<super::GetMatchableTcpGatewayDetailsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetMatchableTcpGatewayDetailsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetMatchableTcpGatewayDetails",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetMatchableTcpGatewayDetails",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists VirtualServices in all Gloo instances, or in the given instance.
        pub async fn list_virtual_services(
            &mut self,
            request: impl tonic::IntoRequest<super::ListVirtualServicesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListVirtualServicesResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/ListVirtualServices",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "ListVirtualServices",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single VirtualService.
        pub async fn get_virtual_service_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetVirtualServiceYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetVirtualServiceYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetVirtualServiceYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetVirtualServiceYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets a single VirtualService with its status.
        pub async fn get_virtual_service_details(
            &mut self,
            request: impl tonic::IntoRequest<super::GetVirtualServiceDetailsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetVirtualServiceDetailsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetVirtualServiceDetails",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetVirtualServiceDetails",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists RouteTables in all Gloo instances, or in the given instance.
        pub async fn list_route_tables(
            &mut self,
            request: impl tonic::IntoRequest<super::ListRouteTablesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListRouteTablesResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/ListRouteTables",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "ListRouteTables",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single RouteTable.
        pub async fn get_route_table_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetRouteTableYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetRouteTableYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetRouteTableYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetRouteTableYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets a single RouteTable with its status.
        pub async fn get_route_table_details(
            &mut self,
            request: impl tonic::IntoRequest<super::GetRouteTableDetailsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetRouteTableDetailsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetRouteTableDetails",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "rpc.edge.gloo.solo.io.GatewayResourceApi",
                        "GetRouteTableDetails",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
    }
}
