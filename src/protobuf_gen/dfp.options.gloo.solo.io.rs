/// Configuration for the dynamic forward proxy HTTP filter.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterConfig {
    #[prost(message, optional, tag = "1")]
    pub dns_cache_config: ::core::option::Option<DnsCacheConfig>,
    #[prost(bool, tag = "2")]
    pub save_upstream_address: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DnsResolverOptions {
    /// Use TCP for all DNS queries instead of the default protocol UDP.
    #[prost(bool, tag = "1")]
    pub use_tcp_for_dns_lookups: bool,
    /// Do not use the default search domains; only query hostnames as-is or as FQDN.
    #[prost(bool, tag = "2")]
    pub no_default_search_domain: bool,
}
/// Configuration for the c-ares DNS resolver.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CaresDnsResolverConfig {
    /// A list of DNS resolver addresses.
    #[prost(message, repeated, tag = "1")]
    pub resolvers: ::prost::alloc::vec::Vec<
        super::super::super::super::super::solo::io::envoy::config::core::v3::Address,
    >,
    #[prost(message, optional, tag = "2")]
    pub dns_resolver_options: ::core::option::Option<DnsResolverOptions>,
}
/// Configuration for the Apple DNS resolver.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppleDnsResolverConfig {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RefreshRate {
    /// Specifies the base interval between refreshes. This parameter is required and must be greater
    /// than zero and less than max_interval.
    #[prost(message, optional, tag = "1")]
    #[serde(with = "crate::wkt::option_duration")]
    pub base_interval: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub max_interval: ::core::option::Option<::prost_types::Duration>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DnsCacheCircuitBreakers {
    /// The maximum number of pending requests that Envoy will allow to the resolver. Defaults to 1024.
    #[prost(message, optional, tag = "1")]
    pub max_pending_requests: ::core::option::Option<u32>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DnsCacheConfig {
    #[prost(enumeration = "DnsLookupFamily", tag = "2")]
    pub dns_lookup_family: i32,
    #[prost(message, optional, tag = "3")]
    #[serde(with = "crate::wkt::option_duration")]
    pub dns_refresh_rate: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "4")]
    #[serde(with = "crate::wkt::option_duration")]
    pub host_ttl: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub max_hosts: ::core::option::Option<u32>,
    /// If the DNS failure refresh rate is specified, it is used as the cache refresh rate when DNS
    /// queries fail.
    #[prost(message, optional, tag = "6")]
    pub dns_failure_refresh_rate: ::core::option::Option<RefreshRate>,
    #[prost(message, optional, tag = "7")]
    pub dns_cache_circuit_breaker: ::core::option::Option<DnsCacheCircuitBreakers>,
    /// Hostnames that should be preresolved into the cache upon creation.
    #[prost(message, repeated, tag = "10")]
    pub preresolve_hostnames: ::prost::alloc::vec::Vec<
        super::super::super::super::super::solo::io::envoy::config::core::v3::SocketAddress,
    >,
    #[prost(message, optional, tag = "11")]
    #[serde(with = "crate::wkt::option_duration")]
    pub dns_query_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(oneof = "dns_cache_config::DnsCacheType", tags = "8, 9")]
    pub dns_cache_type: ::core::option::Option<dns_cache_config::DnsCacheType>,
}
/// Nested message and enum types in `DnsCacheConfig`.
pub mod dns_cache_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum DnsCacheType {
        #[prost(message, tag = "8")]
        CaresDns(super::CaresDnsResolverConfig),
        #[prost(message, tag = "9")]
        AppleDns(super::AppleDnsResolverConfig),
    }
}
/// Per route Configuration for the dynamic forward proxy HTTP filter.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PerRouteConfig {
    #[prost(oneof = "per_route_config::HostRewriteSpecifier", tags = "1, 2")]
    pub host_rewrite_specifier: ::core::option::Option<
        per_route_config::HostRewriteSpecifier,
    >,
}
/// Nested message and enum types in `PerRouteConfig`.
pub mod per_route_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HostRewriteSpecifier {
        /// Indicates that before DNS lookup, the host header will be swapped with this value.
        #[prost(string, tag = "1")]
        HostRewrite(::prost::alloc::string::String),
        /// Indicates that before DNS lookup, the host header will be swapped with the value of this
        /// header.
        #[prost(string, tag = "2")]
        AutoHostRewriteHeader(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DnsLookupFamily {
    V4Preferred = 0,
    V4Only = 1,
    V6Only = 2,
    Auto = 3,
    All = 4,
}
impl DnsLookupFamily {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DnsLookupFamily::V4Preferred => "V4_PREFERRED",
            DnsLookupFamily::V4Only => "V4_ONLY",
            DnsLookupFamily::V6Only => "V6_ONLY",
            DnsLookupFamily::Auto => "AUTO",
            DnsLookupFamily::All => "ALL",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "V4_PREFERRED" => Some(Self::V4Preferred),
            "V4_ONLY" => Some(Self::V4Only),
            "V6_ONLY" => Some(Self::V6Only),
            "AUTO" => Some(Self::Auto),
            "ALL" => Some(Self::All),
            _ => None,
        }
    }
}
