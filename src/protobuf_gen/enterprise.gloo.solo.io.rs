/// Global external auth settings
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Settings {
    /// The upstream to ask about auth decisions
    #[prost(message, optional, tag = "1")]
    pub extauthz_server_ref: ::core::option::Option<
        super::super::super::super::core::solo::io::ResourceRef,
    >,
    /// If the auth server trusted id of the user, it will be set in this header.
    #[prost(string, tag = "3")]
    pub user_id_header: ::prost::alloc::string::String,
    /// Timeout for the ext auth service to respond. Defaults to 200ms
    #[prost(message, optional, tag = "4")]
    #[serde(with = "crate::wkt::option_duration")]
    pub request_timeout: ::core::option::Option<::prost_types::Duration>,
    /// In case of a failure or timeout querying the auth server, normally a request is denied.
    #[prost(bool, tag = "5")]
    pub failure_mode_allow: bool,
    #[prost(message, optional, tag = "6")]
    pub request_body: ::core::option::Option<BufferSettings>,
    #[prost(bool, tag = "7")]
    pub clear_route_cache: bool,
    #[prost(uint32, tag = "8")]
    pub status_on_error: u32,
    /// Transport protocol version used between Envoy and the auth server.
    #[prost(enumeration = "settings::ApiVersion", tag = "9")]
    pub transport_api_version: i32,
    #[prost(string, tag = "10")]
    pub stat_prefix: ::prost::alloc::string::String,
    #[prost(oneof = "settings::ServiceType", tags = "2, 11")]
    pub service_type: ::core::option::Option<settings::ServiceType>,
}
/// Nested message and enum types in `Settings`.
pub mod settings {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ApiVersion {
        V3 = 0,
    }
    impl ApiVersion {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ApiVersion::V3 => "V3",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "V3" => Some(Self::V3),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ServiceType {
        /// If this is set, communication to the upstream will be via HTTP and not GRPC.
        #[prost(message, tag = "2")]
        HttpService(super::HttpService),
        /// If this is set, communication to the upstream will be via GRPC and not HTTP (default).
        #[prost(message, tag = "11")]
        GrpcService(super::GrpcService),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrpcService {
    #[prost(string, tag = "1")]
    pub authority: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpService {
    /// Sets a prefix to the value of authorization request header path.
    #[prost(string, tag = "1")]
    pub path_prefix: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub request: ::core::option::Option<http_service::Request>,
    #[prost(message, optional, tag = "3")]
    pub response: ::core::option::Option<http_service::Response>,
}
/// Nested message and enum types in `HttpService`.
pub mod http_service {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Request {
        /// These headers will be copied from the incoming request to the request going to the auth
        /// server.
        #[prost(string, repeated, tag = "1")]
        pub allowed_headers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
        #[prost(map = "string, string", tag = "2")]
        #[serde(with = "crate::message::map_entries")]
        pub headers_to_add: ::std::collections::HashMap<
            ::prost::alloc::string::String,
            ::prost::alloc::string::String,
        >,
        #[prost(string, repeated, tag = "3")]
        pub allowed_headers_regex: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Response {
        #[prost(string, repeated, tag = "1")]
        pub allowed_upstream_headers: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
        #[prost(string, repeated, tag = "2")]
        pub allowed_client_headers: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
        #[prost(string, repeated, tag = "3")]
        pub allowed_upstream_headers_to_append: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BufferSettings {
    #[prost(uint32, tag = "1")]
    pub max_request_bytes: u32,
    #[prost(bool, tag = "2")]
    pub allow_partial_message: bool,
    #[prost(bool, tag = "3")]
    pub pack_as_bytes: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExtAuthExtension {
    #[prost(oneof = "ext_auth_extension::Spec", tags = "1, 2, 3")]
    pub spec: ::core::option::Option<ext_auth_extension::Spec>,
}
/// Nested message and enum types in `ExtAuthExtension`.
pub mod ext_auth_extension {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Spec {
        /// Set to true to disable auth on the virtual host/route.
        #[prost(bool, tag = "1")]
        Disable(bool),
        /// A reference to an AuthConfig.
        #[prost(message, tag = "2")]
        ConfigRef(super::super::super::super::super::core::solo::io::ResourceRef),
        /// Use this field if you are running your own custom extauth server.
        #[prost(message, tag = "3")]
        CustomAuth(super::CustomAuth),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomAuth {
    /// When a request matches the virtual host, route, or weighted destination on which this
    /// configuration is defined, Gloo will send it to the external auth server with these context
    /// extensions.
    #[prost(map = "string, string", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub context_extensions: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}
