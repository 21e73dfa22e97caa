/// Static upstreams are used to route request to services listening at fixed IP/Host & Port pairs.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    #[prost(message, repeated, tag = "1")]
    pub hosts: ::prost::alloc::vec::Vec<Host>,
    #[prost(message, optional, tag = "3")]
    pub use_tls: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "5")]
    pub service_spec: ::core::option::Option<
        super::super::super::super::super::gloo::solo::io::ServiceSpec,
    >,
    #[prost(message, optional, tag = "6")]
    pub auto_sni_rewrite: ::core::option::Option<bool>,
}
/// Represents a single instance of an upstream
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Host {
    /// Address (hostname or IP)
    #[prost(string, tag = "1")]
    pub addr: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub port: u32,
    #[prost(message, optional, tag = "3")]
    pub health_check_config: ::core::option::Option<host::HealthCheckConfig>,
    #[prost(string, tag = "4")]
    pub sni_addr: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "5")]
    pub load_balancing_weight: ::core::option::Option<u32>,
}
/// Nested message and enum types in `Host`.
pub mod host {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HealthCheckConfig {
        #[prost(string, tag = "1")]
        pub path: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub method: ::prost::alloc::string::String,
    }
}
