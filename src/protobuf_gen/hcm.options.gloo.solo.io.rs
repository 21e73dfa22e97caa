/// Contains various settings for Envoy's http connection manager.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpConnectionManagerSettings {
    #[prost(bool, tag = "1")]
    pub skip_xff_append: bool,
    #[prost(string, tag = "2")]
    pub via: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub xff_num_trusted_hops: u32,
    #[prost(message, optional, tag = "4")]
    pub use_remote_address: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "5")]
    pub generate_request_id: ::core::option::Option<bool>,
    #[prost(bool, tag = "6")]
    pub proxy_100_continue: bool,
    #[prost(message, optional, tag = "7")]
    #[serde(with = "crate::wkt::option_duration")]
    pub stream_idle_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "8")]
    #[serde(with = "crate::wkt::option_duration")]
    pub idle_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "9")]
    pub max_request_headers_kb: ::core::option::Option<u32>,
    #[prost(message, optional, tag = "10")]
    #[serde(with = "crate::wkt::option_duration")]
    pub request_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "11")]
    #[serde(with = "crate::wkt::option_duration")]
    pub request_headers_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "12")]
    #[serde(with = "crate::wkt::option_duration")]
    pub drain_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "13")]
    #[serde(with = "crate::wkt::option_duration")]
    pub delayed_close_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(string, tag = "14")]
    pub server_name: ::prost::alloc::string::String,
    #[prost(bool, tag = "15")]
    pub strip_any_host_port: bool,
    #[prost(bool, tag = "16")]
    pub accept_http_10: bool,
    #[prost(string, tag = "17")]
    pub default_host_for_http_10: ::prost::alloc::string::String,
    #[prost(bool, tag = "18")]
    pub allow_chunked_length: bool,
    #[prost(bool, tag = "19")]
    pub enable_trailers: bool,
    #[prost(message, optional, tag = "23")]
    pub tracing: ::core::option::Option<
        super::super::super::super::super::tracing::options::gloo::solo::io::ListenerTracingSettings,
    >,
    #[prost(enumeration = "http_connection_manager_settings::ForwardClientCertDetails", tag = "24")]
    pub forward_client_cert_details: i32,
    #[prost(message, optional, tag = "25")]
    pub set_current_client_cert_details: ::core::option::Option<
        http_connection_manager_settings::SetCurrentClientCertDetails,
    >,
    #[prost(bool, tag = "26")]
    pub preserve_external_request_id: bool,
    #[prost(message, repeated, tag = "27")]
    pub upgrades: ::prost::alloc::vec::Vec<
        super::super::super::super::super::protocol_upgrade::options::gloo::solo::io::ProtocolUpgradeConfig,
    >,
    #[prost(message, optional, tag = "28")]
    #[serde(with = "crate::wkt::option_duration")]
    pub max_connection_duration: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "29")]
    #[serde(with = "crate::wkt::option_duration")]
    pub max_stream_duration: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "30")]
    pub max_headers_count: ::core::option::Option<u32>,
    #[prost(enumeration = "http_connection_manager_settings::HeadersWithUnderscoreAction", tag = "32")]
    pub headers_with_underscores_action: i32,
    #[prost(message, optional, tag = "33")]
    pub max_requests_per_connection: ::core::option::Option<u32>,
    #[prost(enumeration = "http_connection_manager_settings::ServerHeaderTransformation", tag = "34")]
    pub server_header_transformation: i32,
    #[prost(enumeration = "http_connection_manager_settings::PathWithEscapedSlashesAction", tag = "35")]
    pub path_with_escaped_slashes_action: i32,
    #[prost(enumeration = "http_connection_manager_settings::CodecType", tag = "36")]
    pub codec_type: i32,
    #[prost(bool, tag = "37")]
    pub merge_slashes: bool,
    #[prost(message, optional, tag = "38")]
    pub normalize_path: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "39")]
    pub uuid_request_id_config: ::core::option::Option<
        http_connection_manager_settings::UuidRequestIdConfigSettings,
    >,
    #[prost(oneof = "http_connection_manager_settings::HeaderFormat", tags = "22, 31")]
    pub header_format: ::core::option::Option<
        http_connection_manager_settings::HeaderFormat,
    >,
}
/// Nested message and enum types in `HttpConnectionManagerSettings`.
pub mod http_connection_manager_settings {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SetCurrentClientCertDetails {
        #[prost(message, optional, tag = "1")]
        pub subject: ::core::option::Option<bool>,
        #[prost(bool, tag = "2")]
        pub cert: bool,
        #[prost(bool, tag = "3")]
        pub chain: bool,
        #[prost(bool, tag = "4")]
        pub dns: bool,
        #[prost(bool, tag = "5")]
        pub uri: bool,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct UuidRequestIdConfigSettings {
        #[prost(message, optional, tag = "1")]
        pub pack_trace_reason: ::core::option::Option<bool>,
        #[prost(message, optional, tag = "2")]
        pub use_request_id_for_trace_sampling: ::core::option::Option<bool>,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ForwardClientCertDetails {
        Sanitize = 0,
        ForwardOnly = 1,
        AppendForward = 2,
        SanitizeSet = 3,
        AlwaysForwardOnly = 4,
    }
    impl ForwardClientCertDetails {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ForwardClientCertDetails::Sanitize => "SANITIZE",
                ForwardClientCertDetails::ForwardOnly => "FORWARD_ONLY",
                ForwardClientCertDetails::AppendForward => "APPEND_FORWARD",
                ForwardClientCertDetails::SanitizeSet => "SANITIZE_SET",
                ForwardClientCertDetails::AlwaysForwardOnly => "ALWAYS_FORWARD_ONLY",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "SANITIZE" => Some(Self::Sanitize),
                "FORWARD_ONLY" => Some(Self::ForwardOnly),
                "APPEND_FORWARD" => Some(Self::AppendForward),
                "SANITIZE_SET" => Some(Self::SanitizeSet),
                "ALWAYS_FORWARD_ONLY" => Some(Self::AlwaysForwardOnly),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ServerHeaderTransformation {
        Overwrite = 0,
        AppendIfAbsent = 1,
        PassThrough = 2,
    }
    impl ServerHeaderTransformation {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ServerHeaderTransformation::Overwrite => "OVERWRITE",
                ServerHeaderTransformation::AppendIfAbsent => "APPEND_IF_ABSENT",
                ServerHeaderTransformation::PassThrough => "PASS_THROUGH",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OVERWRITE" => Some(Self::Overwrite),
                "APPEND_IF_ABSENT" => Some(Self::AppendIfAbsent),
                "PASS_THROUGH" => Some(Self::PassThrough),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum HeadersWithUnderscoreAction {
        Allow = 0,
        RejectClientRequest = 1,
        DropHeader = 2,
    }
    impl HeadersWithUnderscoreAction {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                HeadersWithUnderscoreAction::Allow => "ALLOW",
                HeadersWithUnderscoreAction::RejectClientRequest => "REJECT_CLIENT_REQUEST",
                HeadersWithUnderscoreAction::DropHeader => "DROP_HEADER",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ALLOW" => Some(Self::Allow),
                "REJECT_CLIENT_REQUEST" => Some(Self::RejectClientRequest),
                "DROP_HEADER" => Some(Self::DropHeader),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum PathWithEscapedSlashesAction {
        ImplementationSpecificDefault = 0,
        KeepUnchanged = 1,
        RejectRequest = 2,
        UnescapeAndRedirect = 3,
        UnescapeAndForward = 4,
    }
    impl PathWithEscapedSlashesAction {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                PathWithEscapedSlashesAction::ImplementationSpecificDefault => "IMPLEMENTATION_SPECIFIC_DEFAULT",
                PathWithEscapedSlashesAction::KeepUnchanged => "KEEP_UNCHANGED",
                PathWithEscapedSlashesAction::RejectRequest => "REJECT_REQUEST",
                PathWithEscapedSlashesAction::UnescapeAndRedirect => "UNESCAPE_AND_REDIRECT",
                PathWithEscapedSlashesAction::UnescapeAndForward => "UNESCAPE_AND_FORWARD",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "IMPLEMENTATION_SPECIFIC_DEFAULT" => Some(Self::ImplementationSpecificDefault),
                "KEEP_UNCHANGED" => Some(Self::KeepUnchanged),
                "REJECT_REQUEST" => Some(Self::RejectRequest),
                "UNESCAPE_AND_REDIRECT" => Some(Self::UnescapeAndRedirect),
                "UNESCAPE_AND_FORWARD" => Some(Self::UnescapeAndForward),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum CodecType {
        Auto = 0,
        Http1 = 1,
        Http2 = 2,
    }
    impl CodecType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                CodecType::Auto => "AUTO",
                CodecType::Http1 => "HTTP1",
                CodecType::Http2 => "HTTP2",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "AUTO" => Some(Self::Auto),
                "HTTP1" => Some(Self::Http1),
                "HTTP2" => Some(Self::Http2),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum HeaderFormat {
        #[prost(bool, tag = "22")]
        ProperCaseHeaderKeyFormat(bool),
        #[prost(bool, tag = "31")]
        PreserveCaseHeaderKeyFormat(bool),
    }
}
