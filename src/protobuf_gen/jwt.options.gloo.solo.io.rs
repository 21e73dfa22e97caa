#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JwtStagedVhostExtension {
    /// Jwt configuration for the filter before ext auth.
    #[prost(message, optional, tag = "1")]
    pub before_ext_auth: ::core::option::Option<VhostExtension>,
    /// Jwt configuration for the filter after ext auth.
    #[prost(message, optional, tag = "2")]
    pub after_ext_auth: ::core::option::Option<VhostExtension>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JwtStagedRouteExtension {
    #[prost(message, optional, tag = "1")]
    pub before_ext_auth: ::core::option::Option<RouteExtension>,
    #[prost(message, optional, tag = "2")]
    pub after_ext_auth: ::core::option::Option<RouteExtension>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VhostExtension {
    /// Map of JWT provider name to Provider.
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub providers: ::std::collections::HashMap<::prost::alloc::string::String, Provider>,
    /// Allow pass through of JWT requests for this virtual host, even if JWT token is missing or JWT
    /// auth failed.
    #[prost(bool, tag = "5")]
    pub allow_missing_or_failed_jwt: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteExtension {
    /// Disable JWT checks on this route.
    #[prost(bool, tag = "1")]
    pub disable: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Provider {
    /// The source for the keys to validate JWTs.
    #[prost(message, optional, tag = "1")]
    pub jwks: ::core::option::Option<Jwks>,
    /// An incoming JWT must have an 'aud' claim and it must be in this list.
    #[prost(string, repeated, tag = "2")]
    pub audiences: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Issuer of the JWT. the 'iss' claim of the JWT must match this.
    #[prost(string, tag = "3")]
    pub issuer: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub token_source: ::core::option::Option<TokenSource>,
    /// Should the token forwarded upstream. if false, the header containing the token will be removed.
    #[prost(bool, tag = "5")]
    pub keep_token: bool,
    /// What claims should be copied to upstream headers.
    #[prost(message, repeated, tag = "6")]
    pub claims_to_headers: ::prost::alloc::vec::Vec<ClaimToHeader>,
    #[prost(message, optional, tag = "8")]
    pub clock_skew_seconds: ::core::option::Option<u32>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Jwks {
    #[prost(oneof = "jwks::Jwks", tags = "1, 2")]
    pub jwks: ::core::option::Option<jwks::Jwks>,
}
/// Nested message and enum types in `Jwks`.
pub mod jwks {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Jwks {
        /// Use a remote JWKS server
        #[prost(message, tag = "1")]
        Remote(super::RemoteJwks),
        /// Use an inline JWKS
        #[prost(message, tag = "2")]
        Local(super::LocalJwks),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoteJwks {
    /// The url used when accessing the upstream for Json Web Key Set.
    #[prost(string, tag = "1")]
    pub url: ::prost::alloc::string::String,
    /// The Upstream representing the Json Web Key Set server
    #[prost(message, optional, tag = "2")]
    pub upstream_ref: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    #[prost(message, optional, tag = "4")]
    #[serde(with = "crate::wkt::option_duration")]
    pub cache_duration: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub async_fetch: ::core::option::Option<JwksAsyncFetch>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JwksAsyncFetch {
    #[prost(bool, tag = "1")]
    pub fast_listener: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LocalJwks {
    /// Inline key. this can be json web key, key-set or PEM format.
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
}
/// Describes the location of a JWT token
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenSource {
    /// Try to retrieve token from these headers
    #[prost(message, repeated, tag = "1")]
    pub headers: ::prost::alloc::vec::Vec<token_source::HeaderSource>,
    /// Try to retrieve token from these query params
    #[prost(string, repeated, tag = "2")]
    pub query_params: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Nested message and enum types in `TokenSource`.
pub mod token_source {
    /// Describes how to retrieve a JWT from a header
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HeaderSource {
        /// The name of the header. for example, "authorization"
        #[prost(string, tag = "1")]
        pub header: ::prost::alloc::string::String,
        /// Prefix before the token. for example, "Bearer "
        #[prost(string, tag = "2")]
        pub prefix: ::prost::alloc::string::String,
    }
}
/// Allows copying verified claims to headers sent upstream
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClaimToHeader {
    #[prost(string, tag = "1")]
    pub claim: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub header: ::prost::alloc::string::String,
    /// If the header exists, append to it (true), or overwrite it (false).
    #[prost(bool, tag = "4")]
    pub append: bool,
}
