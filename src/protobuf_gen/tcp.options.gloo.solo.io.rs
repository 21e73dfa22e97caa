/// Contains various settings for Envoy's tcp proxy filter.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TcpProxySettings {
    #[prost(message, optional, tag = "1")]
    pub max_connect_attempts: ::core::option::Option<u32>,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub idle_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "12")]
    pub tunneling_config: ::core::option::Option<tcp_proxy_settings::TunnelingConfig>,
    #[prost(message, optional, tag = "15")]
    #[serde(with = "crate::wkt::option_duration")]
    pub access_log_flush_interval: ::core::option::Option<::prost_types::Duration>,
}
/// Nested message and enum types in `TcpProxySettings`.
pub mod tcp_proxy_settings {
    /// Configuration for tunneling TCP over other transports or application layers.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct TunnelingConfig {
        #[prost(string, tag = "1")]
        pub hostname: ::prost::alloc::string::String,
    }
}
