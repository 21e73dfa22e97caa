/// Specifies the route’s hashing policy if the upstream cluster uses a hashing load balancer.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteActionHashConfig {
    #[prost(message, repeated, tag = "1")]
    pub hash_policies: ::prost::alloc::vec::Vec<HashPolicy>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Cookie {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub ttl: ::core::option::Option<::prost_types::Duration>,
    #[prost(string, tag = "3")]
    pub path: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HashPolicy {
    #[prost(bool, tag = "2")]
    pub terminal: bool,
    #[prost(oneof = "hash_policy::KeyType", tags = "1, 5, 6")]
    pub key_type: ::core::option::Option<hash_policy::KeyType>,
}
/// Nested message and enum types in `HashPolicy`.
pub mod hash_policy {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum KeyType {
        /// Use a given header's value as a component of the hashing load balancer's policy
        #[prost(string, tag = "1")]
        Header(::prost::alloc::string::String),
        #[prost(message, tag = "5")]
        Cookie(super::Cookie),
        /// Use the request's source IP address as a component of the hashing load balancer's policy
        #[prost(bool, tag = "6")]
        SourceIp(bool),
    }
}
