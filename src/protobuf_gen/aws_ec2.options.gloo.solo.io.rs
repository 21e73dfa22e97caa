/// Upstream Spec for AWS Lambda Upstreams
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    #[prost(string, tag = "1")]
    pub region: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub secret_ref: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    #[prost(message, repeated, tag = "3")]
    pub filters: ::prost::alloc::vec::Vec<TagFilter>,
    #[prost(bool, tag = "4")]
    pub public_ip: bool,
    #[prost(uint32, tag = "5")]
    pub port: u32,
    #[prost(string, tag = "7")]
    pub role_arn: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TagFilter {
    #[prost(oneof = "tag_filter::Spec", tags = "1, 2")]
    pub spec: ::core::option::Option<tag_filter::Spec>,
}
/// Nested message and enum types in `TagFilter`.
pub mod tag_filter {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct KvPair {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub value: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Spec {
        /// Select instances that have a tag with the given key.
        #[prost(string, tag = "1")]
        Key(::prost::alloc::string::String),
        /// Select instances that have a tag with the given key and value.
        #[prost(message, tag = "2")]
        KvPair(KvPair),
    }
}
