/// Settings for the caching filter.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Settings {
    /// The upstream of the caching server.
    #[prost(message, optional, tag = "1")]
    pub caching_service_ref: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    /// Vary headers that responses may be cached on.
    #[prost(message, repeated, tag = "2")]
    pub allowed_vary_headers: ::prost::alloc::vec::Vec<
        super::super::super::super::super::solo::io::envoy::r#type::matcher::v3::StringMatcher,
    >,
    /// Timeout for calls to the caching server.
    #[prost(message, optional, tag = "3")]
    #[serde(with = "crate::wkt::option_duration")]
    pub timeout: ::core::option::Option<::prost_types::Duration>,
    /// Responses larger than this are not cached.
    #[prost(message, optional, tag = "4")]
    pub max_payload_size: ::core::option::Option<u32>,
}
