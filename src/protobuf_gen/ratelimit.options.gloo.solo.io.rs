/// Basic rate-limiting API
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IngressRateLimit {
    #[prost(message, optional, tag = "1")]
    pub authorized_limits: ::core::option::Option<
        super::super::super::super::api::solo::io::RateLimit,
    >,
    #[prost(message, optional, tag = "2")]
    pub anonymous_limits: ::core::option::Option<
        super::super::super::super::api::solo::io::RateLimit,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Settings {
    #[prost(message, optional, tag = "1")]
    pub ratelimit_server_ref: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub request_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(bool, tag = "3")]
    pub deny_on_fail: bool,
    /// Set this to true to return Envoy's X-RateLimit headers to the downstream.
    #[prost(bool, tag = "4")]
    pub enable_x_ratelimit_headers: bool,
    /// Set this is set to true if you would like to rate limit traffic before applying external auth
    /// to it.
    #[prost(bool, tag = "9")]
    pub rate_limit_before_auth: bool,
    #[prost(oneof = "settings::ServiceType", tags = "10")]
    pub service_type: ::core::option::Option<settings::ServiceType>,
}
/// Nested message and enum types in `Settings`.
pub mod settings {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ServiceType {
        /// Use the gRPC transport for the rate limit service (default).
        #[prost(message, tag = "10")]
        GrpcService(super::GrpcService),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrpcService {
    /// The authority header sent on requests to the rate limit server.
    #[prost(string, tag = "1")]
    pub authority: ::prost::alloc::string::String,
}
/// API based on Envoy's rate-limit service API.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceSettings {
    #[prost(message, repeated, tag = "1")]
    pub descriptors: ::prost::alloc::vec::Vec<
        super::super::super::super::api::solo::io::Descriptor,
    >,
    #[prost(message, repeated, tag = "2")]
    pub set_descriptors: ::prost::alloc::vec::Vec<
        super::super::super::super::api::solo::io::SetDescriptor,
    >,
}
/// A list of references to `RateLimitConfig` resources.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimitConfigRefs {
    #[prost(message, repeated, tag = "1")]
    pub refs: ::prost::alloc::vec::Vec<RateLimitConfigRef>,
}
/// A reference to a `RateLimitConfig` resource.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimitConfigRef {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub namespace: ::prost::alloc::string::String,
}
/// Use this field if you want to inline the Envoy rate limits for this VirtualHost.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimitVhostExtension {
    /// Define individual rate limits here. Each rate limit will be evaluated, if any rate limit would
    /// be throttled, the entire request returns a 429 (gets throttled)
    #[prost(message, repeated, tag = "1")]
    pub rate_limits: ::prost::alloc::vec::Vec<
        super::super::super::super::api::solo::io::RateLimitActions,
    >,
}
/// Use this field if you want to inline the Envoy rate limits for this Route.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimitRouteExtension {
    /// Whether or not to include rate limits as defined on the VirtualHost in addition to rate limits
    /// on the Route.
    #[prost(bool, tag = "1")]
    pub include_vh_rate_limits: bool,
    #[prost(message, repeated, tag = "2")]
    pub rate_limits: ::prost::alloc::vec::Vec<
        super::super::super::super::api::solo::io::RateLimitActions,
    >,
}
