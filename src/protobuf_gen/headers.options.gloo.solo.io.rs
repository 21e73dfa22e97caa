#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderManipulation {
    /// Specifies a list of HTTP headers that should be added to each request handled by this route or
    /// virtual host.
    #[prost(message, repeated, tag = "1")]
    pub request_headers_to_add: ::prost::alloc::vec::Vec<HeaderValueOption>,
    #[prost(string, repeated, tag = "2")]
    pub request_headers_to_remove: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(message, repeated, tag = "3")]
    pub response_headers_to_add: ::prost::alloc::vec::Vec<HeaderValueOption>,
    #[prost(string, repeated, tag = "4")]
    pub response_headers_to_remove: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderValueOption {
    #[prost(message, optional, tag = "2")]
    pub append: ::core::option::Option<bool>,
    #[prost(oneof = "header_value_option::HeaderOption", tags = "1, 3")]
    pub header_option: ::core::option::Option<header_value_option::HeaderOption>,
}
/// Nested message and enum types in `HeaderValueOption`.
pub mod header_value_option {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HeaderOption {
        #[prost(message, tag = "1")]
        Header(super::HeaderValue),
        /// Reference to a secret whose keys and values will be added as headers.
        #[prost(message, tag = "3")]
        HeaderSecretRef(
            super::super::super::super::super::super::core::solo::io::ResourceRef,
        ),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderValue {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}
