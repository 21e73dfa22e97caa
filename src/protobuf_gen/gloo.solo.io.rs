#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Extensions {
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::wkt::struct_map_entries")]
    pub configs: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost_types::Struct,
    >,
}
/// Optional, feature-specific configuration that lives on gateways. Each ListenerOption object
/// contains configuration for a specific feature.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListenerOptions {
    /// Configuration for access logging in a filter like the HttpConnectionManager.
    #[prost(message, optional, tag = "1")]
    pub access_logging_service: ::core::option::Option<
        super::super::super::als::options::gloo::solo::io::AccessLoggingService,
    >,
    /// Extensions will be passed along from Listeners, Gateways, VirtualServices, Routes, and Route
    /// tables to the underlying Proxy, making them useful for controllers, validation tools, etc.
    #[prost(message, optional, tag = "2")]
    pub extensions: ::core::option::Option<Extensions>,
    /// Soft limit on size of the listener's new connection read and write buffers.
    #[prost(message, optional, tag = "3")]
    pub per_connection_buffer_limit_bytes: ::core::option::Option<u32>,
    #[prost(message, repeated, tag = "4")]
    pub socket_options: ::prost::alloc::vec::Vec<
        super::super::super::solo::io::envoy::config::core::v3::SocketOption,
    >,
    /// Enable ProxyProtocol support for this listener.
    #[prost(message, optional, tag = "5")]
    pub proxy_protocol: ::core::option::Option<
        super::super::super::proxy_protocol::options::gloo::solo::io::ProxyProtocol,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteConfigurationOptions {
    /// The maximum bytes of the response direct response body size.
    #[prost(message, optional, tag = "1")]
    pub max_direct_response_body_size_bytes: ::core::option::Option<u32>,
}
/// Optional, feature-specific configuration that lives on http listeners
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpListenerOptions {
    #[prost(message, optional, tag = "1")]
    pub grpc_web: ::core::option::Option<
        super::super::super::grpc_web::options::gloo::solo::io::GrpcWeb,
    >,
    #[prost(message, optional, tag = "2")]
    pub http_connection_manager_settings: ::core::option::Option<
        super::super::super::hcm::options::gloo::solo::io::HttpConnectionManagerSettings,
    >,
    /// Enable the health check endpoint for this listener.
    #[prost(message, optional, tag = "4")]
    pub health_check: ::core::option::Option<
        super::super::super::healthcheck::options::gloo::solo::io::HealthCheck,
    >,
    #[prost(message, optional, tag = "3")]
    pub extensions: ::core::option::Option<Extensions>,
    /// Enterprise-only: Config for Web Application Firewall (WAF), supporting the popular ModSecurity
    /// 3.0 ruleset
    #[prost(message, optional, tag = "5")]
    pub waf: ::core::option::Option<
        super::super::super::waf::options::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Config for data loss prevention
    #[prost(message, optional, tag = "6")]
    pub dlp: ::core::option::Option<
        super::super::super::dlp::options::gloo::solo::io::FilterConfig,
    >,
    /// Enterprise-only: WASM related configuration \[experimental!\]
    #[prost(message, optional, tag = "7")]
    pub wasm: ::core::option::Option<
        super::super::super::wasm::options::gloo::solo::io::PluginSource,
    >,
    /// Enterprise-only: External auth related settings
    #[prost(message, optional, tag = "10")]
    pub extauth: ::core::option::Option<
        super::super::super::enterprise::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Settings for the rate limiting server itself
    #[prost(message, optional, tag = "11")]
    pub ratelimit_server: ::core::option::Option<
        super::super::super::ratelimit::options::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Settings for the caching server itself
    #[prost(message, optional, tag = "17")]
    pub caching: ::core::option::Option<
        super::super::super::caching::options::gloo::solo::io::Settings,
    >,
    #[prost(message, optional, tag = "8")]
    pub gzip: ::core::option::Option<
        super::super::super::solo::io::envoy::config::filter::http::gzip::v2::Gzip,
    >,
    #[prost(message, optional, tag = "9")]
    pub proxy_latency: ::core::option::Option<
        super::super::super::envoy::config::filter::http::proxylatency::v2::ProxyLatency,
    >,
    #[prost(message, optional, tag = "12")]
    pub buffer: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::buffer::v3::Buffer,
    >,
    #[prost(message, optional, tag = "15")]
    pub csrf: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::csrf::v3::CsrfPolicy,
    >,
    #[prost(message, optional, tag = "13")]
    pub grpc_json_transcoder: ::core::option::Option<
        super::super::super::grpc_json::options::gloo::solo::io::GrpcJsonTranscoder,
    >,
    /// Enterprise-only: Set to true to disable the Envoy filter to sanitize the cluster header.
    #[prost(message, optional, tag = "14")]
    pub sanitize_cluster_header: ::core::option::Option<bool>,
    /// Enterprise-only: Whether the leftmost X-Forwarded-For address should be used.
    #[prost(message, optional, tag = "16")]
    pub leftmost_xff_address: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "28")]
    pub dynamic_forward_proxy: ::core::option::Option<
        super::super::super::dfp::options::gloo::solo::io::FilterConfig,
    >,
}
/// Optional, feature-specific configuration that lives on tcp listeners
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TcpListenerOptions {
    #[prost(message, optional, tag = "3")]
    pub tcp_proxy_settings: ::core::option::Option<
        super::super::super::tcp::options::gloo::solo::io::TcpProxySettings,
    >,
}
/// Optional, feature-specific configuration that lives on virtual hosts. Each VirtualHostOptions
/// object contains configuration for a specific feature.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualHostOptions {
    #[prost(message, optional, tag = "1")]
    pub extensions: ::core::option::Option<Extensions>,
    #[prost(message, optional, tag = "5")]
    pub retries: ::core::option::Option<
        super::super::super::retries::options::gloo::solo::io::RetryPolicy,
    >,
    #[prost(message, optional, tag = "10")]
    pub stats: ::core::option::Option<
        super::super::super::stats::options::gloo::solo::io::Stats,
    >,
    /// Append/Remove headers on Requests or Responses on all routes contained in this Virtual Host.
    #[prost(message, optional, tag = "2")]
    pub header_manipulation: ::core::option::Option<
        super::super::super::headers::options::gloo::solo::io::HeaderManipulation,
    >,
    /// Defines a CORS policy for the virtual host.
    #[prost(message, optional, tag = "3")]
    pub cors: ::core::option::Option<
        super::super::super::cors::options::gloo::solo::io::CorsPolicy,
    >,
    /// Transformations to apply. Note: this field is superseded by `staged_transformations`.
    #[prost(message, optional, tag = "4")]
    pub transformations: ::core::option::Option<
        super::super::super::transformation::options::gloo::solo::io::Transformations,
    >,
    /// Enterprise-only: Config for GlooE rate-limiting using simplified (gloo-specific) API
    #[prost(message, optional, tag = "6")]
    pub ratelimit_basic: ::core::option::Option<
        super::super::super::ratelimit::options::gloo::solo::io::IngressRateLimit,
    >,
    /// Enterprise-only: Config for Web Application Firewall (WAF), supporting the popular ModSecurity
    /// 3.0 ruleset
    #[prost(message, optional, tag = "8")]
    pub waf: ::core::option::Option<
        super::super::super::waf::options::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Config for RBAC (currently only supports RBAC based on JWT claims)
    #[prost(message, optional, tag = "11")]
    pub rbac: ::core::option::Option<
        super::super::super::rbac::options::gloo::solo::io::ExtensionSettings,
    >,
    /// Enterprise-only: Authentication configuration
    #[prost(message, optional, tag = "12")]
    pub extauth: ::core::option::Option<
        super::super::super::enterprise::gloo::solo::io::ExtAuthExtension,
    >,
    /// Enterprise-only: Config for data loss prevention
    #[prost(message, optional, tag = "13")]
    pub dlp: ::core::option::Option<
        super::super::super::dlp::options::gloo::solo::io::Config,
    >,
    #[prost(message, optional, tag = "14")]
    pub buffer_per_route: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::buffer::v3::BufferPerRoute,
    >,
    /// IncludeRequestAttemptCount decides whether the x-envoy-attempt-count header should be included
    /// in the upstream request.
    #[prost(message, optional, tag = "15")]
    pub include_request_attempt_count: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "16")]
    pub include_attempt_count_in_response: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "17")]
    pub staged_transformations: ::core::option::Option<
        super::super::super::transformation::options::gloo::solo::io::TransformationStages,
    >,
    #[prost(message, optional, tag = "18")]
    pub csrf: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::csrf::v3::CsrfPolicy,
    >,
    #[prost(oneof = "virtual_host_options::RateLimitEarlyConfigType", tags = "72, 73")]
    pub rate_limit_early_config_type: ::core::option::Option<
        virtual_host_options::RateLimitEarlyConfigType,
    >,
    #[prost(oneof = "virtual_host_options::RateLimitConfigType", tags = "70, 71")]
    pub rate_limit_config_type: ::core::option::Option<
        virtual_host_options::RateLimitConfigType,
    >,
    #[prost(oneof = "virtual_host_options::RateLimitRegularConfigType", tags = "74, 75")]
    pub rate_limit_regular_config_type: ::core::option::Option<
        virtual_host_options::RateLimitRegularConfigType,
    >,
    #[prost(oneof = "virtual_host_options::JwtConfig", tags = "9, 19")]
    pub jwt_config: ::core::option::Option<virtual_host_options::JwtConfig>,
}
/// Nested message and enum types in `VirtualHostOptions`.
pub mod virtual_host_options {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RateLimitEarlyConfigType {
        #[prost(message, tag = "72")]
        RatelimitEarly(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitVhostExtension,
        ),
        #[prost(message, tag = "73")]
        RateLimitEarlyConfigs(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitConfigRefs,
        ),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RateLimitConfigType {
        /// Enterprise-only: Partial config for GlooE rate-limiting based on Envoy's rate-limit service.
        #[prost(message, tag = "70")]
        Ratelimit(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitVhostExtension,
        ),
        /// Enterprise-only: References to RateLimitConfig resources.
        #[prost(message, tag = "71")]
        RateLimitConfigs(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitConfigRefs,
        ),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RateLimitRegularConfigType {
        #[prost(message, tag = "74")]
        RatelimitRegular(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitVhostExtension,
        ),
        #[prost(message, tag = "75")]
        RateLimitRegularConfigs(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitConfigRefs,
        ),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum JwtConfig {
        /// Enterprise-only: Config for reading and verifying JWTs. Copy verifiable information from JWTs
        /// into other headers to make routing decisions or combine with RBAC for fine-grained access
        /// control.
        #[prost(message, tag = "9")]
        Jwt(super::super::super::super::jwt::options::gloo::solo::io::VhostExtension),
        /// Enterprise-only: Config for reading and verifying JWTs. Copy verifiable information from JWTs
        /// into other headers to make routing decisions or combine with RBAC for fine-grained access
        /// control.
        #[prost(message, tag = "19")]
        JwtStaged(
            super::super::super::super::jwt::options::gloo::solo::io::JwtStagedVhostExtension,
        ),
    }
}
/// Optional, feature-specific configuration that lives on routes. Each RouteOptions object contains
/// configuration for a specific feature.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteOptions {
    /// Transformations to apply. Note: this field is superseded by `staged_transformations`.
    #[prost(message, optional, tag = "1")]
    pub transformations: ::core::option::Option<
        super::super::super::transformation::options::gloo::solo::io::Transformations,
    >,
    #[prost(message, optional, tag = "2")]
    pub faults: ::core::option::Option<
        super::super::super::fault::options::gloo::solo::io::RouteFaults,
    >,
    /// For requests matched on this route, rewrite the HTTP request path to the provided value before
    /// forwarding upstream
    #[prost(message, optional, tag = "3")]
    pub prefix_rewrite: ::core::option::Option<::prost::alloc::string::String>,
    /// Specifies the upstream timeout for the route. If not specified, the default is 15s.
    #[prost(message, optional, tag = "4")]
    #[serde(with = "crate::wkt::option_duration")]
    pub timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub retries: ::core::option::Option<
        super::super::super::retries::options::gloo::solo::io::RetryPolicy,
    >,
    #[prost(message, optional, tag = "6")]
    pub extensions: ::core::option::Option<Extensions>,
    /// Defines route-specific tracing configuration.
    #[prost(message, optional, tag = "7")]
    pub tracing: ::core::option::Option<
        super::super::super::tracing::options::gloo::solo::io::RouteTracingSettings,
    >,
    /// Specifies traffic shadowing configuration for the route.
    #[prost(message, optional, tag = "8")]
    pub shadowing: ::core::option::Option<
        super::super::super::shadowing::options::gloo::solo::io::RouteShadowing,
    >,
    /// Append/Remove headers on Requests or Responses on this Route.
    #[prost(message, optional, tag = "9")]
    pub header_manipulation: ::core::option::Option<
        super::super::super::headers::options::gloo::solo::io::HeaderManipulation,
    >,
    /// Defines a CORS policy for the route.
    #[prost(message, optional, tag = "11")]
    pub cors: ::core::option::Option<
        super::super::super::cors::options::gloo::solo::io::CorsPolicy,
    >,
    /// For routes served by a hashing load balancer, this defines the input to the hash key.
    #[prost(message, optional, tag = "12")]
    pub lb_hash: ::core::option::Option<
        super::super::super::lbhash::options::gloo::solo::io::RouteActionHashConfig,
    >,
    /// Route configuration for protocol upgrade requests.
    #[prost(message, repeated, tag = "21")]
    pub upgrades: ::prost::alloc::vec::Vec<
        super::super::super::protocol_upgrade::options::gloo::solo::io::ProtocolUpgradeConfig,
    >,
    /// Enterprise-only: Config for GlooE rate-limiting using simplified (gloo-specific) API
    #[prost(message, optional, tag = "13")]
    pub ratelimit_basic: ::core::option::Option<
        super::super::super::ratelimit::options::gloo::solo::io::IngressRateLimit,
    >,
    /// Enterprise-only: Config for Web Application Firewall (WAF), supporting the popular ModSecurity
    /// 3.0 ruleset
    #[prost(message, optional, tag = "15")]
    pub waf: ::core::option::Option<
        super::super::super::waf::options::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Config for RBAC (currently only supports RBAC based on JWT claims)
    #[prost(message, optional, tag = "17")]
    pub rbac: ::core::option::Option<
        super::super::super::rbac::options::gloo::solo::io::ExtensionSettings,
    >,
    /// Enterprise-only: Authentication configuration
    #[prost(message, optional, tag = "18")]
    pub extauth: ::core::option::Option<
        super::super::super::enterprise::gloo::solo::io::ExtAuthExtension,
    >,
    /// Enterprise-only: Config for data loss prevention
    #[prost(message, optional, tag = "20")]
    pub dlp: ::core::option::Option<
        super::super::super::dlp::options::gloo::solo::io::Config,
    >,
    #[prost(message, optional, tag = "22")]
    pub buffer_per_route: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::buffer::v3::BufferPerRoute,
    >,
    #[prost(message, optional, tag = "23")]
    pub staged_transformations: ::core::option::Option<
        super::super::super::transformation::options::gloo::solo::io::TransformationStages,
    >,
    #[prost(message, optional, tag = "24")]
    pub csrf: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::csrf::v3::CsrfPolicy,
    >,
    /// Arbitrary metadata, keyed by filter namespace, forwarded to the route's dynamic metadata.
    #[prost(map = "string, message", tag = "26")]
    #[serde(with = "crate::wkt::struct_map_entries")]
    pub envoy_metadata: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost_types::Struct,
    >,
    /// For requests matched on this route, rewrite the HTTP request path according to the provided
    /// regex pattern before forwarding upstream
    #[prost(message, optional, tag = "27")]
    pub regex_rewrite: ::core::option::Option<
        super::super::super::solo::io::envoy::r#type::matcher::v3::RegexMatchAndSubstitute,
    >,
    #[prost(oneof = "route_options::HostRewriteType", tags = "10, 19")]
    pub host_rewrite_type: ::core::option::Option<route_options::HostRewriteType>,
    #[prost(oneof = "route_options::RateLimitEarlyConfigType", tags = "142, 143")]
    pub rate_limit_early_config_type: ::core::option::Option<
        route_options::RateLimitEarlyConfigType,
    >,
    #[prost(oneof = "route_options::RateLimitConfigType", tags = "140, 141")]
    pub rate_limit_config_type: ::core::option::Option<
        route_options::RateLimitConfigType,
    >,
    #[prost(oneof = "route_options::RateLimitRegularConfigType", tags = "144, 145")]
    pub rate_limit_regular_config_type: ::core::option::Option<
        route_options::RateLimitRegularConfigType,
    >,
    #[prost(oneof = "route_options::JwtConfig", tags = "16, 25")]
    pub jwt_config: ::core::option::Option<route_options::JwtConfig>,
}
/// Nested message and enum types in `RouteOptions`.
pub mod route_options {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HostRewriteType {
        /// For requests matched on this route, rewrite the Host header before forwarding upstream
        #[prost(string, tag = "10")]
        HostRewrite(::prost::alloc::string::String),
        /// Enable/Disable auto host re-write. Indicates that the host header will be swapped with the
        /// hostname of the upstream host.
        #[prost(message, tag = "19")]
        AutoHostRewrite(bool),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RateLimitEarlyConfigType {
        #[prost(message, tag = "142")]
        RatelimitEarly(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitRouteExtension,
        ),
        #[prost(message, tag = "143")]
        RateLimitEarlyConfigs(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitConfigRefs,
        ),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RateLimitConfigType {
        /// Enterprise-only: Partial config for GlooE rate-limiting based on Envoy's rate-limit service.
        #[prost(message, tag = "140")]
        Ratelimit(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitRouteExtension,
        ),
        /// Enterprise-only: References to RateLimitConfig resources.
        #[prost(message, tag = "141")]
        RateLimitConfigs(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitConfigRefs,
        ),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum RateLimitRegularConfigType {
        #[prost(message, tag = "144")]
        RatelimitRegular(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitRouteExtension,
        ),
        #[prost(message, tag = "145")]
        RateLimitRegularConfigs(
            super::super::super::super::ratelimit::options::gloo::solo::io::RateLimitConfigRefs,
        ),
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum JwtConfig {
        /// Enterprise-only: Config for reading and verifying JWTs.
        #[prost(message, tag = "16")]
        Jwt(super::super::super::super::jwt::options::gloo::solo::io::RouteExtension),
        /// Enterprise-only: Config for reading and verifying JWTs, split into stages before and after
        /// ext auth.
        #[prost(message, tag = "25")]
        JwtStaged(
            super::super::super::super::jwt::options::gloo::solo::io::JwtStagedRouteExtension,
        ),
    }
}
/// Configuration for Destinations that are tied to the underlying service spec.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestinationSpec {
    #[prost(oneof = "destination_spec::DestinationType", tags = "1, 2, 3, 4")]
    pub destination_type: ::core::option::Option<destination_spec::DestinationType>,
}
/// Nested message and enum types in `DestinationSpec`.
pub mod destination_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum DestinationType {
        #[prost(message, tag = "1")]
        Aws(super::super::super::super::aws::options::gloo::solo::io::DestinationSpec),
        #[prost(message, tag = "2")]
        Azure(
            super::super::super::super::azure::options::gloo::solo::io::DestinationSpec,
        ),
        #[prost(message, tag = "3")]
        Rest(super::super::super::super::rest::options::gloo::solo::io::DestinationSpec),
        #[prost(message, tag = "4")]
        Grpc(super::super::super::super::grpc::options::gloo::solo::io::DestinationSpec),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WeightedDestinationOptions {
    /// Append/Remove headers on Requests or Responses to/from this Weighted Destination.
    #[prost(message, optional, tag = "1")]
    pub header_manipulation: ::core::option::Option<
        super::super::super::headers::options::gloo::solo::io::HeaderManipulation,
    >,
    /// Transformations to apply. Note: this field is superseded by `staged_transformations`.
    #[prost(message, optional, tag = "2")]
    pub transformations: ::core::option::Option<
        super::super::super::transformation::options::gloo::solo::io::Transformations,
    >,
    #[prost(message, optional, tag = "3")]
    pub extensions: ::core::option::Option<Extensions>,
    /// Enterprise-only: Authentication configuration
    #[prost(message, optional, tag = "4")]
    pub extauth: ::core::option::Option<
        super::super::super::enterprise::gloo::solo::io::ExtAuthExtension,
    >,
    #[prost(message, optional, tag = "5")]
    pub buffer_per_route: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::buffer::v3::BufferPerRoute,
    >,
    #[prost(message, optional, tag = "6")]
    pub staged_transformations: ::core::option::Option<
        super::super::super::transformation::options::gloo::solo::io::TransformationStages,
    >,
    #[prost(message, optional, tag = "7")]
    pub csrf: ::core::option::Option<
        super::super::super::solo::io::envoy::extensions::filters::http::csrf::v3::CsrfPolicy,
    >,
}
/// SslConfig contains the options necessary to configure a virtual host or listener to use TLS
/// termination
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SslConfig {
    /// optional. the SNI domains that should be considered for TLS connection
    #[prost(string, repeated, tag = "3")]
    pub sni_domains: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "5")]
    pub verify_subject_alt_name: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "6")]
    pub parameters: ::core::option::Option<SslParameters>,
    /// Set Application Level Protocol Negotiation
    #[prost(string, repeated, tag = "7")]
    pub alpn_protocols: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "8")]
    pub one_way_tls: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "9")]
    pub disable_tls_session_resumption: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "10")]
    #[serde(with = "crate::wkt::option_duration")]
    pub transport_socket_connect_timeout: ::core::option::Option<
        ::prost_types::Duration,
    >,
    #[prost(oneof = "ssl_config::SslSecrets", tags = "1, 2, 4")]
    pub ssl_secrets: ::core::option::Option<ssl_config::SslSecrets>,
}
/// Nested message and enum types in `SslConfig`.
pub mod ssl_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum SslSecrets {
        #[prost(message, tag = "1")]
        SecretRef(super::super::super::super::core::solo::io::ResourceRef),
        #[prost(message, tag = "2")]
        SslFiles(super::SslFiles),
        #[prost(message, tag = "4")]
        Sds(super::SdsConfig),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SslFiles {
    #[prost(string, tag = "1")]
    pub tls_cert: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub tls_key: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub root_ca: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub ocsp_staple: ::prost::alloc::string::String,
}
/// SslConfig contains the options necessary to configure an upstream to use TLS origination
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSslConfig {
    /// optional. the SNI domain to use when establishing the TLS connection
    #[prost(string, tag = "4")]
    pub sni: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "5")]
    pub verify_subject_alt_name: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "7")]
    pub parameters: ::core::option::Option<SslParameters>,
    #[prost(string, repeated, tag = "8")]
    pub alpn_protocols: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "10")]
    pub allow_renegotiation: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "11")]
    pub one_way_tls: ::core::option::Option<bool>,
    #[prost(oneof = "upstream_ssl_config::SslSecrets", tags = "1, 2, 3")]
    pub ssl_secrets: ::core::option::Option<upstream_ssl_config::SslSecrets>,
}
/// Nested message and enum types in `UpstreamSslConfig`.
pub mod upstream_ssl_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum SslSecrets {
        #[prost(message, tag = "1")]
        SecretRef(super::super::super::super::core::solo::io::ResourceRef),
        #[prost(message, tag = "2")]
        SslFiles(super::SslFiles),
        #[prost(message, tag = "3")]
        Sds(super::SdsConfig),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SdsConfig {
    #[prost(string, tag = "1")]
    pub target_uri: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub certificates_secret_name: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub validation_context_name: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub cluster_name: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SslParameters {
    #[prost(enumeration = "ssl_parameters::ProtocolVersion", tag = "1")]
    pub minimum_protocol_version: i32,
    #[prost(enumeration = "ssl_parameters::ProtocolVersion", tag = "2")]
    pub maximum_protocol_version: i32,
    #[prost(string, repeated, tag = "3")]
    pub cipher_suites: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "4")]
    pub ecdh_curves: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Nested message and enum types in `SslParameters`.
pub mod ssl_parameters {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ProtocolVersion {
        /// Envoy will choose the optimal TLS version.
        TlsAuto = 0,
        TlSv10 = 1,
        TlSv11 = 2,
        TlSv12 = 3,
        TlSv13 = 4,
    }
    impl ProtocolVersion {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ProtocolVersion::TlsAuto => "TLS_AUTO",
                ProtocolVersion::TlSv10 => "TLSv1_0",
                ProtocolVersion::TlSv11 => "TLSv1_1",
                ProtocolVersion::TlSv12 => "TLSv1_2",
                ProtocolVersion::TlSv13 => "TLSv1_3",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "TLS_AUTO" => Some(Self::TlsAuto),
                "TLSv1_0" => Some(Self::TlSv10),
                "TLSv1_1" => Some(Self::TlSv11),
                "TLSv1_2" => Some(Self::TlSv12),
                "TLSv1_3" => Some(Self::TlSv13),
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
pub struct Subset {
    /// An list of labels to match on in the subset. These are treated as an exact match.
    #[prost(map = "string, string", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub values: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
}
/// A Proxy is a container for the entire set of configuration that will to be applied to one or
/// more Proxy instances.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProxySpec {
    /// Define here each listener the proxy should create.
    #[prost(message, repeated, tag = "2")]
    pub listeners: ::prost::alloc::vec::Vec<Listener>,
    /// Compressed form of the listeners, written when the gateway compresses proxy specs.
    #[prost(string, tag = "3")]
    pub compressed_spec: ::prost::alloc::string::String,
}
/// Listeners define the address:port where the proxy will listen for incoming connections.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Listener {
    /// the name of the listener. names must be unique for each listener within a proxy
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// the bind address for the listener.
    #[prost(string, tag = "2")]
    pub bind_address: ::prost::alloc::string::String,
    /// the port to bind on
    #[prost(uint32, tag = "3")]
    pub bind_port: u32,
    /// SSL Config is optional for the listener. If provided, the listener will serve TLS for
    /// connections on this port.
    #[prost(message, repeated, tag = "6")]
    pub ssl_configurations: ::prost::alloc::vec::Vec<SslConfig>,
    /// Enable ProxyProtocol support for this listener.
    #[prost(message, optional, tag = "7")]
    pub use_proxy_proto: ::core::option::Option<bool>,
    /// top level options
    #[prost(message, optional, tag = "8")]
    pub options: ::core::option::Option<ListenerOptions>,
    /// Metadata for the individual listener.
    #[prost(message, optional, tag = "9")]
    #[serde(with = "crate::wkt::option_struct")]
    pub metadata: ::core::option::Option<::prost_types::Struct>,
    /// Additional arbitrary network Filters that will be inserted directly into xDS.
    #[prost(message, optional, tag = "10")]
    pub route_options: ::core::option::Option<RouteConfigurationOptions>,
    /// The type of listener to create.
    #[prost(oneof = "listener::ListenerType", tags = "4, 5, 11, 13")]
    pub listener_type: ::core::option::Option<listener::ListenerType>,
}
/// Nested message and enum types in `Listener`.
pub mod listener {
    /// The type of listener to create.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ListenerType {
        /// The HTTP Listener is currently the only supported listener type.
        #[prost(message, tag = "4")]
        HttpListener(super::HttpListener),
        /// The TCP Listener serves TCP traffic.
        #[prost(message, tag = "5")]
        TcpListener(super::TcpListener),
        /// The Hybrid Listener contains multiple sub-listeners selected by connection properties.
        #[prost(message, tag = "11")]
        HybridListener(super::HybridListener),
        /// The Aggregate Listener contains a set of HttpFilterChains and TcpListeners.
        #[prost(message, tag = "13")]
        AggregateListener(super::AggregateListener),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TcpListener {
    /// List of filter chains to match on for this listener
    #[prost(message, repeated, tag = "1")]
    pub tcp_hosts: ::prost::alloc::vec::Vec<TcpHost>,
    /// Options contains top-level configuration to be applied to a listener.
    #[prost(message, optional, tag = "8")]
    pub options: ::core::option::Option<TcpListenerOptions>,
    /// prefix for addressing envoy stats
    #[prost(string, tag = "3")]
    pub stat_prefix: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TcpHost {
    /// the logical name of the tcp host. names must be unique for each tcp host within a listener
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// Name of the destinations the gateway can route to.
    #[prost(message, optional, tag = "2")]
    pub destination: ::core::option::Option<tcp_host::TcpAction>,
    /// If provided, the Gateway will serve TLS/SSL traffic for this set of routes.
    #[prost(message, optional, tag = "3")]
    pub ssl_config: ::core::option::Option<SslConfig>,
}
/// Nested message and enum types in `TcpHost`.
pub mod tcp_host {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TcpAction {
        #[prost(oneof = "tcp_action::Destination", tags = "1, 2, 3, 4")]
        pub destination: ::core::option::Option<tcp_action::Destination>,
    }
    /// Nested message and enum types in `TcpAction`.
    pub mod tcp_action {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Destination {
            /// Use SingleDestination to route to a single upstream
            #[prost(message, tag = "1")]
            Single(super::super::Destination),
            /// Use MultiDestination to load balance requests between multiple upstreams (by weight)
            #[prost(message, tag = "2")]
            Multi(super::super::MultiDestination),
            /// Use a reference to an upstream group for routing.
            #[prost(message, tag = "3")]
            UpstreamGroup(
                super::super::super::super::super::core::solo::io::ResourceRef,
            ),
            /// Forward the request to a cluster name matching the TLS SNI name
            #[prost(message, tag = "4")]
            ForwardSniClusterName(()),
        }
    }
}
/// Use this listener to configure proxy behavior for any HTTP-level features including defining
/// routes (via virtual hosts).
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpListener {
    /// the set of virtual hosts that will be accessible by clients connecting to this listener.
    #[prost(message, repeated, tag = "1")]
    pub virtual_hosts: ::prost::alloc::vec::Vec<VirtualHost>,
    /// Options contains top-level configuration to be applied to a listener.
    #[prost(message, optional, tag = "2")]
    pub options: ::core::option::Option<HttpListenerOptions>,
    /// prefix for addressing envoy stats
    #[prost(string, tag = "3")]
    pub stat_prefix: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HybridListener {
    /// MatchedListeners have a unique match criteria to select connections.
    #[prost(message, repeated, tag = "1")]
    pub matched_listeners: ::prost::alloc::vec::Vec<MatchedListener>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchedListener {
    /// Matchers are used to define unique matching criteria for each MatchedListener
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<Matcher>,
    /// The type of listener to use for this matcher.
    #[prost(oneof = "matched_listener::ListenerType", tags = "2, 3")]
    pub listener_type: ::core::option::Option<matched_listener::ListenerType>,
}
/// Nested message and enum types in `MatchedListener`.
pub mod matched_listener {
    /// The type of listener to use for this matcher.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ListenerType {
        #[prost(message, tag = "2")]
        HttpListener(super::HttpListener),
        #[prost(message, tag = "3")]
        TcpListener(super::TcpListener),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Matcher {
    /// Gloo use SNI domains as matching criteria for Gateway selection.
    #[prost(message, optional, tag = "1")]
    pub ssl_config: ::core::option::Option<SslConfig>,
    /// Source addresses to match.
    #[prost(message, repeated, tag = "2")]
    pub source_prefix_ranges: ::prost::alloc::vec::Vec<
        super::super::super::solo::io::envoy::config::core::v3::CidrRange,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateListener {
    /// The set of HTTP resources (VirtualHosts and HttpListenerOptions) referenced by HttpFilterChains.
    #[prost(message, optional, tag = "1")]
    pub http_resources: ::core::option::Option<aggregate_listener::HttpResources>,
    /// The set of HttpFilterChains to create on this listener.
    #[prost(message, repeated, tag = "2")]
    pub http_filter_chains: ::prost::alloc::vec::Vec<
        aggregate_listener::HttpFilterChain,
    >,
    /// The set of TcpListeners to create on this listener.
    #[prost(message, repeated, tag = "3")]
    pub tcp_listeners: ::prost::alloc::vec::Vec<MatchedTcpListener>,
}
/// Nested message and enum types in `AggregateListener`.
pub mod aggregate_listener {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HttpResources {
        #[prost(map = "string, message", tag = "1")]
        #[serde(with = "crate::message::map_entries")]
        pub virtual_hosts: ::std::collections::HashMap<
            ::prost::alloc::string::String,
            super::VirtualHost,
        >,
        #[prost(map = "string, message", tag = "2")]
        #[serde(with = "crate::message::map_entries")]
        pub http_options: ::std::collections::HashMap<
            ::prost::alloc::string::String,
            super::HttpListenerOptions,
        >,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HttpFilterChain {
        #[prost(message, optional, tag = "1")]
        pub matcher: ::core::option::Option<super::Matcher>,
        #[prost(string, tag = "2")]
        pub http_options_ref: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "3")]
        pub virtual_host_refs: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchedTcpListener {
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<Matcher>,
    #[prost(message, optional, tag = "2")]
    pub tcp_listener: ::core::option::Option<TcpListener>,
}
/// Virtual Hosts group an ordered list of routes under one or more domains.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualHost {
    /// the logical name of the virtual host. names must be unique for each virtual host within a
    /// listener
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The list of domains (i.e.: matching the `Host` header of a request) that belong to this virtual
    /// host.
    #[prost(string, repeated, tag = "2")]
    pub domains: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// The list of HTTP routes define routing actions to be taken for incoming HTTP requests whose
    /// host header matches this virtual host.
    #[prost(message, repeated, tag = "3")]
    pub routes: ::prost::alloc::vec::Vec<Route>,
    /// Virtual host options contain additional configuration to be applied to all traffic served by
    /// the Virtual Host.
    #[prost(message, optional, tag = "4")]
    pub options: ::core::option::Option<VirtualHostOptions>,
    /// Metadata for the individual virtual host.
    #[prost(message, optional, tag = "6")]
    #[serde(with = "crate::wkt::option_struct")]
    pub metadata: ::core::option::Option<::prost_types::Struct>,
}
/// Routes declare the entry points on virtual hosts and the action to take for matched requests.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    /// Matchers contain parameters for matching requests (i.e., based on HTTP path, headers, etc.)
    #[prost(message, repeated, tag = "1")]
    pub matchers: ::prost::alloc::vec::Vec<
        super::super::super::matchers::core::gloo::solo::io::Matcher,
    >,
    /// Route Options extend the behavior of routes.
    #[prost(message, optional, tag = "5")]
    pub options: ::core::option::Option<RouteOptions>,
    /// Metadata for the individual route.
    #[prost(message, optional, tag = "6")]
    #[serde(with = "crate::wkt::option_struct")]
    pub metadata: ::core::option::Option<::prost_types::Struct>,
    /// The name provides a convenience for users to be able to refer to a route by name.
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
    /// The Route Action Defines what action the proxy should take when a request matches the route.
    #[prost(oneof = "route::Action", tags = "2, 3, 4, 8, 9")]
    pub action: ::core::option::Option<route::Action>,
}
/// Nested message and enum types in `Route`.
pub mod route {
    /// The Route Action Defines what action the proxy should take when a request matches the route.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Action {
        /// This action is the primary action to be selected for most routes.
        #[prost(message, tag = "2")]
        RouteAction(super::RouteAction),
        /// Redirect actions tell the proxy to return a redirect response to the downstream client
        #[prost(message, tag = "3")]
        RedirectAction(super::RedirectAction),
        /// Return an arbitrary HTTP response directly, without proxying.
        #[prost(message, tag = "4")]
        DirectResponseAction(super::DirectResponseAction),
        /// Deprecated, enterprise-only: Use GraphQLApi instead.
        #[prost(message, tag = "8")]
        GraphqlSchemaRef(super::super::super::super::core::skv2::solo::io::ObjectRef),
        /// Enterprise-only: A GraphQL schema to execute against.
        #[prost(message, tag = "9")]
        GraphqlApiRef(super::super::super::super::core::skv2::solo::io::ObjectRef),
    }
}
/// RouteActions are used to route matched requests to upstreams.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteAction {
    /// Defines the destination upstream for routing
    #[prost(oneof = "route_action::Destination", tags = "1, 2, 3, 4")]
    pub destination: ::core::option::Option<route_action::Destination>,
}
/// Nested message and enum types in `RouteAction`.
pub mod route_action {
    /// Defines the destination upstream for routing
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Destination {
        /// Use SingleDestination to route to a single upstream
        #[prost(message, tag = "1")]
        Single(super::Destination),
        /// Use MultiDestination to load balance requests between multiple upstreams (by weight)
        #[prost(message, tag = "2")]
        Multi(super::MultiDestination),
        /// Use a reference to an upstream group for routing.
        #[prost(message, tag = "3")]
        UpstreamGroup(super::super::super::super::core::solo::io::ResourceRef),
        /// Envoy will determine the cluster to route to by reading the value of the HTTP header named
        /// by cluster_header from the request headers.
        #[prost(string, tag = "4")]
        ClusterHeader(::prost::alloc::string::String),
    }
}
/// Destinations define routable destinations for proxied requests.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Destination {
    /// Some upstreams utilize options which require or permit additional configuration on routes
    /// targeting them.
    #[prost(message, optional, tag = "2")]
    pub destination_spec: ::core::option::Option<DestinationSpec>,
    /// If specified, traffic will only be routed to a subset of the upstream.
    #[prost(message, optional, tag = "3")]
    pub subset: ::core::option::Option<Subset>,
    /// The type of the destination
    #[prost(oneof = "destination::DestinationType", tags = "10, 11, 12")]
    pub destination_type: ::core::option::Option<destination::DestinationType>,
}
/// Nested message and enum types in `Destination`.
pub mod destination {
    /// The type of the destination
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum DestinationType {
        /// Route requests to a Gloo upstream
        #[prost(message, tag = "10")]
        Upstream(super::super::super::super::core::solo::io::ResourceRef),
        /// Route requests to a kubernetes service
        #[prost(message, tag = "11")]
        Kube(super::KubernetesServiceDestination),
        /// Route requests to a consul service
        #[prost(message, tag = "12")]
        Consul(super::ConsulServiceDestination),
    }
}
/// Identifies a port on a kubernetes service to route traffic to.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KubernetesServiceDestination {
    /// The target service
    #[prost(message, optional, tag = "1")]
    pub r#ref: ::core::option::Option<super::super::super::core::solo::io::ResourceRef>,
    /// The port attribute of the service
    #[prost(uint32, tag = "2")]
    pub port: u32,
}
/// Identifies a [Consul](<https://www.consul.io/>) service to route traffic to.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsulServiceDestination {
    /// The name of the target service. This field is required.
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    /// If provided, load balance traffic only between services matching all the given tags.
    #[prost(string, repeated, tag = "2")]
    pub tags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// If provided, load balance traffic only between services running in the given data centers.
    #[prost(string, repeated, tag = "3")]
    pub data_centers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// MultiDestination is a container for a set of weighted destinations.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MultiDestination {
    /// This list must contain at least one destination or the listener housing this route will be
    /// invalid.
    #[prost(message, repeated, tag = "1")]
    pub destinations: ::prost::alloc::vec::Vec<WeightedDestination>,
}
/// WeightedDestination attaches a weight to a single destination.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WeightedDestination {
    #[prost(message, optional, tag = "1")]
    pub destination: ::core::option::Option<Destination>,
    /// Weight must be greater than zero.
    #[prost(uint32, tag = "2")]
    pub weight: u32,
    /// Apply configuration to traffic that is sent to this weighted destination
    #[prost(message, optional, tag = "3")]
    pub options: ::core::option::Option<WeightedDestinationOptions>,
}
/// Notice: RedirectAction is copied directly from
/// <https://github.com/envoyproxy/envoy/blob/master/api/envoy/api/v2/route/route.proto>
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RedirectAction {
    /// The host portion of the URL will be swapped with this value.
    #[prost(string, tag = "1")]
    pub host_redirect: ::prost::alloc::string::String,
    /// The HTTP status code to use in the redirect response.
    #[prost(enumeration = "redirect_action::RedirectResponseCode", tag = "3")]
    pub response_code: i32,
    /// The scheme portion of the URL will be swapped with "https".
    #[prost(bool, tag = "4")]
    pub https_redirect: bool,
    /// Indicates that during redirection, the query portion of the URL will be removed.
    #[prost(bool, tag = "6")]
    pub strip_query: bool,
    #[prost(oneof = "redirect_action::PathRewriteSpecifier", tags = "2, 5")]
    pub path_rewrite_specifier: ::core::option::Option<
        redirect_action::PathRewriteSpecifier,
    >,
}
/// Nested message and enum types in `RedirectAction`.
pub mod redirect_action {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum RedirectResponseCode {
        /// Moved Permanently HTTP Status Code - 301.
        MovedPermanently = 0,
        /// Found HTTP Status Code - 302.
        Found = 1,
        /// See Other HTTP Status Code - 303.
        SeeOther = 2,
        /// Temporary Redirect HTTP Status Code - 307.
        TemporaryRedirect = 3,
        /// Permanent Redirect HTTP Status Code - 308.
        PermanentRedirect = 4,
    }
    impl RedirectResponseCode {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                RedirectResponseCode::MovedPermanently => "MOVED_PERMANENTLY",
                RedirectResponseCode::Found => "FOUND",
                RedirectResponseCode::SeeOther => "SEE_OTHER",
                RedirectResponseCode::TemporaryRedirect => "TEMPORARY_REDIRECT",
                RedirectResponseCode::PermanentRedirect => "PERMANENT_REDIRECT",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "MOVED_PERMANENTLY" => Some(Self::MovedPermanently),
                "FOUND" => Some(Self::Found),
                "SEE_OTHER" => Some(Self::SeeOther),
                "TEMPORARY_REDIRECT" => Some(Self::TemporaryRedirect),
                "PERMANENT_REDIRECT" => Some(Self::PermanentRedirect),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PathRewriteSpecifier {
        /// The path portion of the URL will be swapped with this value.
        #[prost(string, tag = "2")]
        PathRedirect(::prost::alloc::string::String),
        /// Indicates that during redirection, the matched prefix (or path) should be swapped with this
        /// value.
        #[prost(string, tag = "5")]
        PrefixRewrite(::prost::alloc::string::String),
    }
}
/// DirectResponseAction is copied directly from
/// <https://github.com/envoyproxy/envoy/blob/master/api/envoy/api/v2/route/route.proto>
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DirectResponseAction {
    /// Specifies the HTTP response status to be returned.
    #[prost(uint32, tag = "1")]
    pub status: u32,
    /// Specifies the content of the response body.
    #[prost(string, tag = "2")]
    pub body: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProxyStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "proxy_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ProxyStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `ProxyStatus`.
pub mod proxy_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "Pending",
                State::Accepted => "Accepted",
                State::Rejected => "Rejected",
                State::Warning => "Warning",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "Pending" => Some(Self::Pending),
                "Accepted" => Some(Self::Accepted),
                "Rejected" => Some(Self::Rejected),
                "Warning" => Some(Self::Warning),
                _ => None,
            }
        }
    }
}
/// CircuitBreakerConfig contains the options for customizing circuit breaking behavior.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CircuitBreakerConfig {
    #[prost(message, optional, tag = "1")]
    pub max_connections: ::core::option::Option<u32>,
    #[prost(message, optional, tag = "2")]
    pub max_pending_requests: ::core::option::Option<u32>,
    #[prost(message, optional, tag = "3")]
    pub max_requests: ::core::option::Option<u32>,
    #[prost(message, optional, tag = "4")]
    pub max_retries: ::core::option::Option<u32>,
}
/// Fine tune the settings for connections to an upstream
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectionConfig {
    /// Maximum requests for a single upstream connection (unspecified or zero = no limit)
    #[prost(uint32, tag = "1")]
    pub max_requests_per_connection: u32,
    /// The timeout for new network connections to hosts in the cluster
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub connect_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "3")]
    pub tcp_keepalive: ::core::option::Option<connection_config::TcpKeepAlive>,
    #[prost(message, optional, tag = "4")]
    pub per_connection_buffer_limit_bytes: ::core::option::Option<u32>,
    #[prost(message, optional, tag = "5")]
    pub common_http_protocol_options: ::core::option::Option<
        connection_config::HttpProtocolOptions,
    >,
}
/// Nested message and enum types in `ConnectionConfig`.
pub mod connection_config {
    /// If set then set SO_KEEPALIVE on the socket to enable TCP Keepalives.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TcpKeepAlive {
        #[prost(uint32, tag = "1")]
        pub keepalive_probes: u32,
        #[prost(message, optional, tag = "2")]
        #[serde(with = "crate::wkt::option_duration")]
        pub keepalive_time: ::core::option::Option<::prost_types::Duration>,
        #[prost(message, optional, tag = "3")]
        #[serde(with = "crate::wkt::option_duration")]
        pub keepalive_interval: ::core::option::Option<::prost_types::Duration>,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HttpProtocolOptions {
        #[prost(message, optional, tag = "1")]
        #[serde(with = "crate::wkt::option_duration")]
        pub idle_timeout: ::core::option::Option<::prost_types::Duration>,
        #[prost(uint32, tag = "2")]
        pub max_headers_count: u32,
        #[prost(message, optional, tag = "3")]
        #[serde(with = "crate::wkt::option_duration")]
        pub max_stream_duration: ::core::option::Option<::prost_types::Duration>,
        #[prost(enumeration = "http_protocol_options::HeadersWithUnderscoresAction", tag = "4")]
        pub headers_with_underscores_action: i32,
    }
    /// Nested message and enum types in `HttpProtocolOptions`.
    pub mod http_protocol_options {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum HeadersWithUnderscoresAction {
            Allow = 0,
            RejectRequest = 1,
            DropHeader = 2,
        }
        impl HeadersWithUnderscoresAction {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    HeadersWithUnderscoresAction::Allow => "ALLOW",
                    HeadersWithUnderscoresAction::RejectRequest => "REJECT_REQUEST",
                    HeadersWithUnderscoresAction::DropHeader => "DROP_HEADER",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "ALLOW" => Some(Self::Allow),
                    "REJECT_REQUEST" => Some(Self::RejectRequest),
                    "DROP_HEADER" => Some(Self::DropHeader),
                    _ => None,
                }
            }
        }
    }
}
/// Failover configuration for an upstream.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Failover {
    #[prost(message, repeated, tag = "1")]
    pub prioritized_localities: ::prost::alloc::vec::Vec<failover::PrioritizedLocality>,
}
/// Nested message and enum types in `Failover`.
pub mod failover {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct PrioritizedLocality {
        #[prost(message, repeated, tag = "2")]
        pub locality_endpoints: ::prost::alloc::vec::Vec<super::LocalityLbEndpoints>,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LocalityLbEndpoints {
    #[prost(message, optional, tag = "1")]
    pub locality: ::core::option::Option<Locality>,
    #[prost(message, repeated, tag = "2")]
    pub lb_endpoints: ::prost::alloc::vec::Vec<LbEndpoint>,
    #[prost(message, optional, tag = "3")]
    pub load_balancing_weight: ::core::option::Option<u32>,
}
/// An Endpoint that Envoy can route traffic to.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LbEndpoint {
    #[prost(string, tag = "1")]
    pub address: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub port: u32,
    #[prost(message, optional, tag = "4")]
    pub upstream_ssl_config: ::core::option::Option<UpstreamSslConfig>,
    #[prost(message, optional, tag = "5")]
    pub load_balancing_weight: ::core::option::Option<u32>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Locality {
    #[prost(string, tag = "1")]
    pub region: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub zone: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub sub_zone: ::prost::alloc::string::String,
}
/// LoadBalancerConfig is the settings for the load balancer used to send requests to the Upstream
/// endpoints.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoadBalancerConfig {
    /// Configures envoy's panic threshold Percent between 0-100. Once the number of non health hosts
    /// reaches this percentage, envoy disregards health information.
    #[prost(message, optional, tag = "1")]
    pub healthy_panic_threshold: ::core::option::Option<f64>,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub update_merge_window: ::core::option::Option<::prost_types::Duration>,
    #[prost(oneof = "load_balancer_config::Type", tags = "3, 4, 5")]
    pub r#type: ::core::option::Option<load_balancer_config::Type>,
}
/// Nested message and enum types in `LoadBalancerConfig`.
pub mod load_balancer_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RoundRobin {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct LeastRequest {
        #[prost(uint32, tag = "1")]
        pub choice_count: u32,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Random {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Type {
        #[prost(message, tag = "3")]
        RoundRobin(RoundRobin),
        #[prost(message, tag = "4")]
        LeastRequest(LeastRequest),
        #[prost(message, tag = "5")]
        Random(Random),
    }
}
/// Describes APIs and application-level information for services.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceSpec {
    #[prost(oneof = "service_spec::PluginType", tags = "1, 2")]
    pub plugin_type: ::core::option::Option<service_spec::PluginType>,
}
/// Nested message and enum types in `ServiceSpec`.
pub mod service_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PluginType {
        #[prost(message, tag = "1")]
        Rest(super::super::super::super::rest::options::gloo::solo::io::ServiceSpec),
        #[prost(message, tag = "2")]
        Grpc(super::super::super::super::grpc::options::gloo::solo::io::ServiceSpec),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SubsetSpec {
    #[prost(message, repeated, tag = "1")]
    pub selectors: ::prost::alloc::vec::Vec<Selector>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Selector {
    #[prost(string, repeated, tag = "1")]
    pub keys: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Upstreams represent destination for routing HTTP requests. Upstreams can be compared to
/// [clusters](<https://www.envoyproxy.io/docs/envoy/latest/api-v3/config/cluster/v3/cluster.proto>)
/// in Envoy terminology.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    /// Upstreams and their configuration can be automatically by Gloo Discovery if this upstream is
    /// created or modified by Discovery, metadata about the operation will be placed here.
    #[prost(message, optional, tag = "1")]
    pub discovery_metadata: ::core::option::Option<DiscoveryMetadata>,
    #[prost(message, optional, tag = "2")]
    pub ssl_config: ::core::option::Option<UpstreamSslConfig>,
    /// Circuit breakers for this upstream. if not set, the defaults ones from the Gloo settings will
    /// be used.
    #[prost(message, optional, tag = "3")]
    pub circuit_breakers: ::core::option::Option<CircuitBreakerConfig>,
    #[prost(message, optional, tag = "4")]
    pub load_balancer_config: ::core::option::Option<LoadBalancerConfig>,
    #[prost(message, optional, tag = "5")]
    pub connection_config: ::core::option::Option<ConnectionConfig>,
    #[prost(message, repeated, tag = "6")]
    pub health_checks: ::prost::alloc::vec::Vec<
        super::super::super::solo::io::envoy::config::core::v3::HealthCheck,
    >,
    #[prost(message, optional, tag = "7")]
    pub outlier_detection: ::core::option::Option<
        super::super::super::solo::io::envoy::config::core::v3::OutlierDetection,
    >,
    /// Use http2 when communicating with this upstream.
    #[prost(message, optional, tag = "8")]
    pub use_http2: ::core::option::Option<bool>,
    /// Failover endpoints for this upstream.
    #[prost(message, optional, tag = "18")]
    pub failover: ::core::option::Option<Failover>,
    /// Initial stream window size, see
    /// <https://www.envoyproxy.io/docs/envoy/latest/api-v3/config/core/v3/protocol.proto#envoy-v3-api-field-config-core-v3-http2protocoloptions-initial-stream-window-size>
    #[prost(message, optional, tag = "19")]
    pub initial_stream_window_size: ::core::option::Option<u32>,
    /// Initial connection window size.
    #[prost(message, optional, tag = "20")]
    pub initial_connection_window_size: ::core::option::Option<u32>,
    /// Maximum concurrent streams.
    #[prost(message, optional, tag = "24")]
    pub max_concurrent_streams: ::core::option::Option<u32>,
    /// Tells envoy that the upstream is an HTTP proxy (e.g., another proxy in a DMZ) and that envoy
    /// should use the HTTP CONNECT method to tunnel to the given hostname.
    #[prost(message, optional, tag = "21")]
    pub http_proxy_hostname: ::core::option::Option<::prost::alloc::string::String>,
    /// If set to true, Envoy will ignore the health value of a host when processing its removal from
    /// service discovery.
    #[prost(message, optional, tag = "22")]
    pub ignore_health_on_host_removal: ::core::option::Option<bool>,
    /// Note to developers: new Upstream plugins must be added to this oneof field to be usable by
    /// Gloo. (plugins currently need to be compiled into Gloo)
    #[prost(oneof = "upstream_spec::UpstreamType", tags = "11, 12, 13, 14, 15, 16, 17")]
    pub upstream_type: ::core::option::Option<upstream_spec::UpstreamType>,
}
/// Nested message and enum types in `UpstreamSpec`.
pub mod upstream_spec {
    /// Note to developers: new Upstream plugins must be added to this oneof field to be usable by
    /// Gloo. (plugins currently need to be compiled into Gloo)
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum UpstreamType {
        #[prost(message, tag = "11")]
        Kube(
            super::super::super::super::kubernetes::options::gloo::solo::io::UpstreamSpec,
        ),
        #[prost(message, tag = "12")]
        Static(
            super::super::super::super::static_upstream::options::gloo::solo::io::UpstreamSpec,
        ),
        #[prost(message, tag = "13")]
        Pipe(super::super::super::super::pipe::options::gloo::solo::io::UpstreamSpec),
        #[prost(message, tag = "14")]
        Aws(super::super::super::super::aws::options::gloo::solo::io::UpstreamSpec),
        #[prost(message, tag = "15")]
        Azure(super::super::super::super::azure::options::gloo::solo::io::UpstreamSpec),
        #[prost(message, tag = "16")]
        Consul(
            super::super::super::super::consul::options::gloo::solo::io::UpstreamSpec,
        ),
        #[prost(message, tag = "17")]
        AwsEc2(
            super::super::super::super::aws_ec2::options::gloo::solo::io::UpstreamSpec,
        ),
    }
}
/// created by discovery services
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DiscoveryMetadata {
    /// Labels inherited from the original upstream (e.g. Kubernetes labels)
    #[prost(map = "string, string", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "upstream_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        UpstreamStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `UpstreamStatus`.
pub mod upstream_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
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
pub struct UpstreamNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        UpstreamStatus,
    >,
}
/// Upstream groups define a set of weighted destinations that can be referenced by routes.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamGroupSpec {
    /// The destinations that are part of this upstream group.
    #[prost(message, repeated, tag = "1")]
    pub destinations: ::prost::alloc::vec::Vec<WeightedDestination>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamGroupStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "upstream_group_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        UpstreamGroupStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `UpstreamGroupStatus`.
pub mod upstream_group_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
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
pub struct UpstreamGroupNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        UpstreamGroupStatus,
    >,
}
/// Represents global settings for all the Gloo components.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SettingsSpec {
    /// This is the namespace to which Gloo controllers will write their own resources, e.g.
    /// discovered Upstreams or default Gateways.
    #[prost(string, tag = "1")]
    pub discovery_namespace: ::prost::alloc::string::String,
    /// Use this setting to restrict the namespaces that Gloo controllers take into consideration when
    /// watching for resources.
    #[prost(string, repeated, tag = "2")]
    pub watch_namespaces: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// How frequently to resync watches, etc
    #[prost(message, optional, tag = "12")]
    #[serde(with = "crate::wkt::option_duration")]
    pub refresh_rate: ::core::option::Option<::prost_types::Duration>,
    /// Enable serving debug data on port 9090
    #[prost(bool, tag = "13")]
    pub dev_mode: bool,
    /// Enable automatic linkerd upstream header addition for easier routing to linkerd services
    #[prost(bool, tag = "17")]
    pub linkerd: bool,
    /// Configuration options for the Clusteringress Controller (for Knative).
    #[prost(message, optional, tag = "18")]
    pub knative: ::core::option::Option<settings_spec::KnativeOptions>,
    /// Options for configuring Gloo's Discovery service
    #[prost(message, optional, tag = "19")]
    pub discovery: ::core::option::Option<settings_spec::DiscoveryOptions>,
    /// Options for configuring `gloo`, the core Gloo controller, which serves dynamic configuration
    /// to Envoy
    #[prost(message, optional, tag = "24")]
    pub gloo: ::core::option::Option<GlooOptions>,
    /// Options for configuring `gateway`, the Gateway Controller
    #[prost(message, optional, tag = "25")]
    pub gateway: ::core::option::Option<GatewayOptions>,
    /// Options to configure Gloo's integration with [HashiCorp Consul](<https://www.consul.io/>).
    #[prost(message, optional, tag = "20")]
    pub consul: ::core::option::Option<settings_spec::ConsulConfiguration>,
    /// Options for configuring Gloo's upstream discovery from Consul.
    #[prost(message, optional, tag = "30")]
    pub consul_discovery: ::core::option::Option<
        settings_spec::ConsulUpstreamDiscoveryConfiguration,
    >,
    /// Options to configure Gloo's integration with [Kubernetes](<https://www.kubernetes.io/>).
    #[prost(message, optional, tag = "22")]
    pub kubernetes: ::core::option::Option<settings_spec::KubernetesConfiguration>,
    /// Settings for extensions
    #[prost(message, optional, tag = "16")]
    pub extensions: ::core::option::Option<Extensions>,
    /// Enterprise-only: Partial config for GlooE's rate-limiting service, based on Envoy's rate-limit
    /// service.
    #[prost(message, optional, tag = "26")]
    pub ratelimit: ::core::option::Option<
        super::super::super::ratelimit::options::gloo::solo::io::ServiceSettings,
    >,
    /// Enterprise-only: Settings for the rate limiting server itself
    #[prost(message, optional, tag = "27")]
    pub ratelimit_server: ::core::option::Option<
        super::super::super::ratelimit::options::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Settings for RBAC across all Gloo resources (VirtualServices, Routes, etc.)
    #[prost(message, optional, tag = "28")]
    pub rbac: ::core::option::Option<
        super::super::super::rbac::options::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: External auth related settings
    #[prost(message, optional, tag = "29")]
    pub extauth: ::core::option::Option<
        super::super::super::enterprise::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: External auth settings keyed by the name referenced from auth configs.
    #[prost(map = "string, message", tag = "33")]
    #[serde(with = "crate::message::map_entries")]
    pub named_extauth: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        super::super::super::enterprise::gloo::solo::io::Settings,
    >,
    /// Enterprise-only: Settings for the caching server itself
    #[prost(message, optional, tag = "36")]
    pub caching_server: ::core::option::Option<
        super::super::super::caching::options::gloo::solo::io::Settings,
    >,
    /// Metrics and dashboards.
    #[prost(message, optional, tag = "31")]
    pub observability_options: ::core::option::Option<
        settings_spec::ObservabilityOptions,
    >,
    /// Defaults applied to all upstreams.
    #[prost(message, optional, tag = "32")]
    pub upstream_options: ::core::option::Option<UpstreamOptions>,
    /// Enterprise-only: Settings for the Gloo Edge Enterprise Console (UI)
    #[prost(message, optional, tag = "35")]
    pub console_options: ::core::option::Option<ConsoleOptions>,
    /// Enterprise-only: GraphQL settings
    #[prost(message, optional, tag = "37")]
    pub graphql_options: ::core::option::Option<GraphqlOptions>,
    /// This setting determines where Gloo controllers will store its resources
    #[prost(oneof = "settings_spec::ConfigSource", tags = "4, 5, 21")]
    pub config_source: ::core::option::Option<settings_spec::ConfigSource>,
    /// Determines where Gloo will read secrets from.
    #[prost(oneof = "settings_spec::SecretSource", tags = "6, 7, 8")]
    pub secret_source: ::core::option::Option<settings_spec::SecretSource>,
    /// Where to read artifacts from.
    #[prost(oneof = "settings_spec::ArtifactSource", tags = "9, 10, 23")]
    pub artifact_source: ::core::option::Option<settings_spec::ArtifactSource>,
}
/// Nested message and enum types in `SettingsSpec`.
pub mod settings_spec {
    /// Source backed by Kubernetes custom resources.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct KubernetesCrds {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct KubernetesSecrets {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct VaultSecrets {
        /// the Token used to authenticate to Vault
        #[prost(string, tag = "1")]
        pub token: ::prost::alloc::string::String,
        /// address is the address of the Vault server.
        #[prost(string, tag = "2")]
        pub address: ::prost::alloc::string::String,
        /// caCert is the path to a PEM-encoded CA cert file to use to verify the Vault server SSL
        /// certificate.
        #[prost(string, tag = "3")]
        pub ca_cert: ::prost::alloc::string::String,
        /// caPath is the path to a directory of PEM-encoded CA cert files to verify the Vault server SSL
        /// certificate.
        #[prost(string, tag = "4")]
        pub ca_path: ::prost::alloc::string::String,
        /// clientCert is the path to the certificate for Vault communication
        #[prost(string, tag = "5")]
        pub client_cert: ::prost::alloc::string::String,
        /// clientKey is the path to the private key for Vault communication
        #[prost(string, tag = "6")]
        pub client_key: ::prost::alloc::string::String,
        /// tlsServerName, if set, is used to set the SNI host when connecting via TLS.
        #[prost(string, tag = "7")]
        pub tls_server_name: ::prost::alloc::string::String,
        /// Insecure enables or disables SSL verification
        #[prost(message, optional, tag = "8")]
        pub insecure: ::core::option::Option<bool>,
        /// all keys stored in Vault will begin with this Vault this can be used to run multiple
        /// instances of Gloo against the same Vault cluster defaults to `secret`.
        #[prost(string, tag = "9")]
        pub root_key: ::prost::alloc::string::String,
        /// Optional: The name of a Vault Secrets Engine to which Vault should route traffic.
        #[prost(string, tag = "10")]
        pub path_prefix: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ConsulKv {
        /// all keys stored in Consul will begin with this prefix this can be used to run multiple
        /// instances of Gloo against the same Consul cluster defaults to `gloo`
        #[prost(string, tag = "1")]
        pub root_key: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct KubernetesConfigmaps {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Directory {
        #[prost(string, tag = "1")]
        pub directory: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct KnativeOptions {
        /// Address of the clusteringress proxy.
        #[prost(string, tag = "1")]
        pub cluster_ingress_proxy_address: ::prost::alloc::string::String,
        /// Address of the externally-facing knative proxy.
        #[prost(string, tag = "2")]
        pub knative_external_proxy_address: ::prost::alloc::string::String,
        /// Address of the internally-facing knative proxy.
        #[prost(string, tag = "3")]
        pub knative_internal_proxy_address: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DiscoveryOptions {
        #[prost(enumeration = "discovery_options::FdsMode", tag = "1")]
        pub fds_mode: i32,
        #[prost(message, optional, tag = "2")]
        pub uds_options: ::core::option::Option<discovery_options::UdsOptions>,
    }
    /// Nested message and enum types in `DiscoveryOptions`.
    pub mod discovery_options {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct UdsOptions {
            /// Enable upstream discovery service. Defaults to true.
            #[prost(message, optional, tag = "1")]
            pub enabled: ::core::option::Option<bool>,
            /// Map of labels to watch. Only services which match all of the selectors specified here
            /// will be discovered by UDS.
            #[prost(map = "string, string", tag = "2")]
            #[serde(with = "crate::message::map_entries")]
            pub watch_labels: ::std::collections::HashMap<
                ::prost::alloc::string::String,
                ::prost::alloc::string::String,
            >,
        }
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum FdsMode {
            /// In BLACKLIST mode, FDS will poll any Upstream it finds without the explicit opt-out label.
            Blacklist = 0,
            /// In WHITELIST mode, FDS will only poll Upstreams with the opt-in label.
            Whitelist = 1,
            /// In DISABLED mode, FDS will not run.
            Disabled = 2,
        }
        impl FdsMode {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    FdsMode::Blacklist => "BLACKLIST",
                    FdsMode::Whitelist => "WHITELIST",
                    FdsMode::Disabled => "DISABLED",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "BLACKLIST" => Some(Self::Blacklist),
                    "WHITELIST" => Some(Self::Whitelist),
                    "DISABLED" => Some(Self::Disabled),
                    _ => None,
                }
            }
        }
    }
    /// Settings specific to the Consul integration.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ConsulConfiguration {
        /// The address of the Consul HTTP server.
        #[prost(string, tag = "1")]
        pub address: ::prost::alloc::string::String,
        /// Datacenter to use.
        #[prost(string, tag = "2")]
        pub datacenter: ::prost::alloc::string::String,
        /// Username to use for HTTP Basic Authentication
        #[prost(string, tag = "3")]
        pub username: ::prost::alloc::string::String,
        /// Password to use for HTTP Basic Authentication
        #[prost(string, tag = "4")]
        pub password: ::prost::alloc::string::String,
        /// Token is used to provide a per-request ACL token which overrides the agent's default token.
        #[prost(string, tag = "5")]
        pub token: ::prost::alloc::string::String,
        /// Path to a CA file
        #[prost(string, tag = "6")]
        pub ca_file: ::prost::alloc::string::String,
        /// Path to a directory of CA files
        #[prost(string, tag = "7")]
        pub ca_path: ::prost::alloc::string::String,
        /// Path to a client certificate file
        #[prost(string, tag = "8")]
        pub cert_file: ::prost::alloc::string::String,
        /// Path to a client key file
        #[prost(string, tag = "9")]
        pub key_file: ::prost::alloc::string::String,
        /// If set to true, the Consul client will skip TLS verification.
        #[prost(message, optional, tag = "10")]
        pub insecure_skip_verify: ::core::option::Option<bool>,
        /// Wait time for a blocking query.
        #[prost(message, optional, tag = "11")]
        #[serde(with = "crate::wkt::option_duration")]
        pub wait_time: ::core::option::Option<::prost_types::Duration>,
        /// Enable Service Discovery via Consul.
        #[prost(message, optional, tag = "12")]
        pub service_discovery: ::core::option::Option<
            consul_configuration::ServiceDiscoveryOptions,
        >,
        /// The address of the Consul HTTP endpoint used for health checks.
        #[prost(string, tag = "13")]
        pub http_address: ::prost::alloc::string::String,
        /// The address of the DNS server used to resolve hostnames in the Consul service address.
        #[prost(string, tag = "14")]
        pub dns_address: ::prost::alloc::string::String,
        /// The polling interval for the DNS server.
        #[prost(message, optional, tag = "15")]
        #[serde(with = "crate::wkt::option_duration")]
        pub dns_polling_interval: ::core::option::Option<::prost_types::Duration>,
    }
    /// Nested message and enum types in `ConsulConfiguration`.
    pub mod consul_configuration {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct ServiceDiscoveryOptions {
            /// Use this parameter to restrict the data centers that will be considered when discovering
            /// and routing to services.
            #[prost(string, repeated, tag = "1")]
            pub data_centers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        }
    }
    /// Settings for Gloo's upstream discovery from Consul.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ConsulUpstreamDiscoveryConfiguration {
        /// Use TLS tagging to create TLS upstreams for services carrying the tag.
        #[prost(bool, tag = "1")]
        pub use_tls_tagging: bool,
        #[prost(string, tag = "2")]
        pub tls_tag_name: ::prost::alloc::string::String,
        /// The reference for the root CA resource used by the TLS upstreams.
        #[prost(message, optional, tag = "3")]
        pub root_ca: ::core::option::Option<
            super::super::super::super::core::solo::io::ResourceRef,
        >,
        /// Create separate plaintext and TLS upstreams for services that carry the TLS tag.
        #[prost(bool, tag = "4")]
        pub split_tls_services: bool,
        #[prost(enumeration = "super::super::super::super::consul::options::gloo::solo::io::ConsulConsistencyModes", tag = "5")]
        pub consistency_mode: i32,
        #[prost(message, optional, tag = "6")]
        pub query_options: ::core::option::Option<
            super::super::super::super::consul::options::gloo::solo::io::QueryOptions,
        >,
    }
    /// Kubernetes client settings.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct KubernetesConfiguration {
        #[prost(message, optional, tag = "1")]
        pub rate_limits: ::core::option::Option<kubernetes_configuration::RateLimits>,
    }
    /// Nested message and enum types in `KubernetesConfiguration`.
    pub mod kubernetes_configuration {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct RateLimits {
            /// The maximum queries-per-second Gloo can make to the Kubernetes API Server.
            #[prost(float, tag = "1")]
            pub qps: f32,
            /// Maximum burst for throttle.
            #[prost(uint32, tag = "2")]
            pub burst: u32,
        }
    }
    /// Provides settings related to the observability pod's interactions with grafana
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ObservabilityOptions {
        #[prost(message, optional, tag = "1")]
        pub grafana_integration: ::core::option::Option<
            observability_options::GrafanaIntegration,
        >,
        /// Labels to attach to config status metrics, keyed by resource kind.
        #[prost(map = "string, message", tag = "2")]
        #[serde(with = "crate::message::map_entries")]
        pub config_status_metric_labels: ::std::collections::HashMap<
            ::prost::alloc::string::String,
            observability_options::MetricLabels,
        >,
    }
    /// Nested message and enum types in `ObservabilityOptions`.
    pub mod observability_options {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct GrafanaIntegration {
            #[prost(message, optional, tag = "1")]
            pub default_dashboard_folder_id: ::core::option::Option<u32>,
        }
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MetricLabels {
            /// Maps a metric label to a JSON path into the resource.
            #[prost(map = "string, string", tag = "1")]
            #[serde(with = "crate::message::map_entries")]
            pub label_to_path: ::std::collections::HashMap<
                ::prost::alloc::string::String,
                ::prost::alloc::string::String,
            >,
        }
    }
    /// This setting determines where Gloo controllers will store its resources
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ConfigSource {
        #[prost(message, tag = "4")]
        KubernetesConfigSource(KubernetesCrds),
        #[prost(message, tag = "5")]
        DirectoryConfigSource(Directory),
        #[prost(message, tag = "21")]
        ConsulKvSource(ConsulKv),
    }
    /// Determines where Gloo will read secrets from.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum SecretSource {
        #[prost(message, tag = "6")]
        KubernetesSecretSource(KubernetesSecrets),
        #[prost(message, tag = "7")]
        VaultSecretSource(VaultSecrets),
        #[prost(message, tag = "8")]
        DirectorySecretSource(Directory),
    }
    /// Where to read artifacts from.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ArtifactSource {
        #[prost(message, tag = "9")]
        KubernetesArtifactSource(KubernetesConfigmaps),
        #[prost(message, tag = "10")]
        DirectoryArtifactSource(Directory),
        #[prost(message, tag = "23")]
        ConsulKvArtifactSource(ConsulKv),
    }
}
/// Settings for the `gloo` (Envoy xDS server) controller.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GlooOptions {
    /// Where the `gloo` xDS server should bind. Defaults to `0.0.0.0:9977`
    #[prost(string, tag = "1")]
    pub xds_bind_addr: ::prost::alloc::string::String,
    /// Where the `gloo` validation server should bind. Defaults to `0.0.0.0:9988`
    #[prost(string, tag = "2")]
    pub validation_bind_addr: ::prost::alloc::string::String,
    /// Default circuit breaker configuration to use for upstream requests, when not provided by
    /// specific upstream.
    #[prost(message, optional, tag = "3")]
    pub circuit_breakers: ::core::option::Option<CircuitBreakerConfig>,
    /// Timeout to get initial snapshot of resources.
    #[prost(message, optional, tag = "4")]
    #[serde(with = "crate::wkt::option_duration")]
    pub endpoints_warming_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub aws_options: ::core::option::Option<gloo_options::AwsOptions>,
    /// Policy for how Gloo should handle invalid routes.
    #[prost(message, optional, tag = "6")]
    pub invalid_config_policy: ::core::option::Option<gloo_options::InvalidConfigPolicy>,
    /// Gloo will not discover kubernetes services as destinations when this is set.
    #[prost(bool, tag = "7")]
    pub disable_kubernetes_destinations: bool,
    /// Disable the grpc-web filter on all listeners.
    #[prost(message, optional, tag = "8")]
    pub disable_grpc_web: ::core::option::Option<bool>,
    /// Set this option to determine the state of an Envoy listener when the corresponding Proxy
    /// resource has no routes.
    #[prost(message, optional, tag = "9")]
    pub disable_proxy_garbage_collection: ::core::option::Option<bool>,
    /// Set this option to specify the default max program size for regexes.
    #[prost(message, optional, tag = "10")]
    pub regex_max_program_size: ::core::option::Option<u32>,
    /// Where the `gloo` REST xDS server should bind.
    #[prost(string, tag = "11")]
    pub rest_xds_bind_addr: ::prost::alloc::string::String,
    /// Whether or not to use rest xds for all EDS by default.
    #[prost(message, optional, tag = "12")]
    pub enable_rest_eds: ::core::option::Option<bool>,
    /// The polling interval for the DNS server if upstream failover is configured.
    #[prost(message, optional, tag = "13")]
    #[serde(with = "crate::wkt::option_duration")]
    pub failover_upstream_dns_polling_interval: ::core::option::Option<
        ::prost_types::Duration,
    >,
    /// If set to true, Gloo removes HTTP filters that are not used by any route.
    #[prost(message, optional, tag = "14")]
    pub remove_unused_filters: ::core::option::Option<bool>,
    /// Where the `gloo` proxy debug server should bind.
    #[prost(string, tag = "15")]
    pub proxy_debug_bind_addr: ::prost::alloc::string::String,
}
/// Nested message and enum types in `GlooOptions`.
pub mod gloo_options {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct AwsOptions {
        /// Send downstream path and method as `x-envoy-original-path` and `x-envoy-original-method`
        /// headers on the request to AWS lambda.
        #[prost(message, optional, tag = "3")]
        pub propagate_original_routing: ::core::option::Option<bool>,
        /// Sets cadence for refreshing credentials for Service Account.
        #[prost(message, optional, tag = "4")]
        #[serde(with = "crate::wkt::option_duration")]
        pub credential_refresh_delay: ::core::option::Option<::prost_types::Duration>,
        #[prost(oneof = "aws_options::CredentialsFetcher", tags = "1, 2")]
        pub credentials_fetcher: ::core::option::Option<aws_options::CredentialsFetcher>,
    }
    /// Nested message and enum types in `AWSOptions`.
    pub mod aws_options {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum CredentialsFetcher {
            /// Enable credential discovery via IAM.
            #[prost(bool, tag = "1")]
            EnableCredentialsDiscovey(bool),
            /// Use projected service account token, and role arn to create temporary credentials.
            #[prost(message, tag = "2")]
            ServiceAccountCredentials(
                super::super::super::super::super::envoy::config::filter::http::aws_lambda::v2::aws_lambda_config::ServiceAccountCredentials,
            ),
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct InvalidConfigPolicy {
        /// Rather than pausing configuration updates, in the event of an invalid Route defined on a
        /// virtual service or route table, Gloo Edge will serve the route with a predefined direct
        /// response action.
        #[prost(bool, tag = "1")]
        pub replace_invalid_routes: bool,
        /// Response code for the direct response.
        #[prost(uint32, tag = "2")]
        pub invalid_route_response_code: u32,
        /// Response body for the direct response.
        #[prost(string, tag = "3")]
        pub invalid_route_response_body: ::prost::alloc::string::String,
    }
}
/// Settings for the Gateway controller.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GatewayOptions {
    /// Address of the `gloo` config validation server. Defaults to `gloo:9988`.
    #[prost(string, tag = "1")]
    pub validation_server_addr: ::prost::alloc::string::String,
    /// If provided, the Gateway will perform Dry Run validation on Gateways, Virtual Services, and
    /// Route Tables.
    #[prost(message, optional, tag = "3")]
    pub validation: ::core::option::Option<gateway_options::ValidationOptions>,
    /// When true, Gloo controllers will read Gateways from all namespaces.
    #[prost(bool, tag = "4")]
    pub read_gateways_from_all_namespaces: bool,
    /// Deprecated. This setting is ignored.
    #[prost(bool, tag = "5")]
    pub always_sort_route_table_routes: bool,
    /// Compress the Proxy spec before writing it.
    #[prost(bool, tag = "6")]
    pub compressed_proxy_spec: bool,
    /// Default configuration to use for VirtualServices, when not provided by specific virtual
    /// service.
    #[prost(message, optional, tag = "7")]
    pub virtual_service_options: ::core::option::Option<VirtualServiceOptions>,
    /// Persist Proxy resources to the storage layer.
    #[prost(message, optional, tag = "8")]
    pub persist_proxy_spec: ::core::option::Option<bool>,
    /// Enables the gateway controller to automatically create delegated gateways.
    #[prost(message, optional, tag = "9")]
    pub enable_gateway_controller: ::core::option::Option<bool>,
    /// Group virtual hosts by their SSL configuration into separate filter chains.
    #[prost(message, optional, tag = "10")]
    pub isolate_virtual_hosts_by_ssl_config: ::core::option::Option<bool>,
}
/// Nested message and enum types in `GatewayOptions`.
pub mod gateway_options {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ValidationOptions {
        /// Address of the `gloo` proxy validation grpc server.
        #[prost(string, tag = "2")]
        pub proxy_validation_server_addr: ::prost::alloc::string::String,
        /// Path to TLS Certificate for Kubernetes Validating webhook.
        #[prost(string, tag = "3")]
        pub validation_webhook_tls_cert: ::prost::alloc::string::String,
        /// Path to TLS Private Key for Kubernetes Validating webhook.
        #[prost(string, tag = "4")]
        pub validation_webhook_tls_key: ::prost::alloc::string::String,
        /// When Gateway cannot communicate with Gloo (e.g. Gloo is offline), resources will be
        /// rejected by default.
        #[prost(bool, tag = "5")]
        pub ignore_gloo_validation_failure: bool,
        /// Always accept resources even if validation produced an error.
        #[prost(message, optional, tag = "6")]
        pub always_accept: ::core::option::Option<bool>,
        /// Accept resources if validation produced a warning (defaults to true).
        #[prost(message, optional, tag = "7")]
        pub allow_warnings: ::core::option::Option<bool>,
        /// Warn on missing gateways or failed route-table selections.
        #[prost(message, optional, tag = "8")]
        pub warn_route_short_circuiting: ::core::option::Option<bool>,
        /// Skip transformation validation in the data plane.
        #[prost(message, optional, tag = "9")]
        pub disable_transformation_validation: ::core::option::Option<bool>,
        /// Maximum grpc message size of the validation server.
        #[prost(message, optional, tag = "10")]
        pub validation_server_grpc_max_size_bytes: ::core::option::Option<i32>,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualServiceOptions {
    /// Default value for one_way_tls on virtual services.
    #[prost(message, optional, tag = "1")]
    pub one_way_tls: ::core::option::Option<bool>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamOptions {
    /// Default ssl parameter configuration to use for upstreams.
    #[prost(message, optional, tag = "1")]
    pub ssl_parameters: ::core::option::Option<SslParameters>,
    /// Annotations applied to all upstreams.
    #[prost(map = "string, string", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub global_annotations: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConsoleOptions {
    /// If set to true, the UI cannot be used to edit resources.
    #[prost(message, optional, tag = "1")]
    pub read_only: ::core::option::Option<bool>,
    /// Whether the API explorer is enabled.
    #[prost(message, optional, tag = "2")]
    pub api_explorer_enabled: ::core::option::Option<bool>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GraphqlOptions {
    #[prost(message, optional, tag = "1")]
    pub schema_change_validation_options: ::core::option::Option<
        graphql_options::SchemaChangeValidationOptions,
    >,
}
/// Nested message and enum types in `GraphqlOptions`.
pub mod graphql_options {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SchemaChangeValidationOptions {
        /// Reject schema updates that contain breaking changes.
        #[prost(message, optional, tag = "1")]
        pub reject_breaking_changes: ::core::option::Option<bool>,
        #[prost(enumeration = "schema_change_validation_options::ProcessingRule", repeated, tag = "2")]
        pub processing_rules: ::prost::alloc::vec::Vec<i32>,
    }
    /// Nested message and enum types in `SchemaChangeValidationOptions`.
    pub mod schema_change_validation_options {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum ProcessingRule {
            RuleUnspecified = 0,
            RuleDangerousToBreaking = 1,
            RuleDeprecatedFieldRemovalDangerous = 2,
            RuleIgnoreDescriptionChanges = 3,
            RuleIgnoreUnreachable = 4,
        }
        impl ProcessingRule {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    ProcessingRule::RuleUnspecified => "RULE_UNSPECIFIED",
                    ProcessingRule::RuleDangerousToBreaking => "RULE_DANGEROUS_TO_BREAKING",
                    ProcessingRule::RuleDeprecatedFieldRemovalDangerous => "RULE_DEPRECATED_FIELD_REMOVAL_DANGEROUS",
                    ProcessingRule::RuleIgnoreDescriptionChanges => "RULE_IGNORE_DESCRIPTION_CHANGES",
                    ProcessingRule::RuleIgnoreUnreachable => "RULE_IGNORE_UNREACHABLE",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "RULE_UNSPECIFIED" => Some(Self::RuleUnspecified),
                    "RULE_DANGEROUS_TO_BREAKING" => Some(Self::RuleDangerousToBreaking),
                    "RULE_DEPRECATED_FIELD_REMOVAL_DANGEROUS" => Some(Self::RuleDeprecatedFieldRemovalDangerous),
                    "RULE_IGNORE_DESCRIPTION_CHANGES" => Some(Self::RuleIgnoreDescriptionChanges),
                    "RULE_IGNORE_UNREACHABLE" => Some(Self::RuleIgnoreUnreachable),
                    _ => None,
                }
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SettingsStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "settings_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        SettingsStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `SettingsStatus`.
pub mod settings_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
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
pub struct SettingsNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        SettingsStatus,
    >,
}
