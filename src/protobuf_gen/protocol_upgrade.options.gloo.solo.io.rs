#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtocolUpgradeConfig {
    #[prost(oneof = "protocol_upgrade_config::UpgradeType", tags = "1, 2")]
    pub upgrade_type: ::core::option::Option<protocol_upgrade_config::UpgradeType>,
}
/// Nested message and enum types in `ProtocolUpgradeConfig`.
pub mod protocol_upgrade_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ProtocolUpgradeSpec {
        /// Whether the upgrade should be enabled. If left unset, Envoy will enable it by default.
        #[prost(message, optional, tag = "1")]
        pub enabled: ::core::option::Option<bool>,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum UpgradeType {
        /// Specify configuration for Websocket upgrade requests.
        #[prost(message, tag = "1")]
        Websocket(ProtocolUpgradeSpec),
        /// Specify configuration for HTTP CONNECT requests.
        #[prost(message, tag = "2")]
        Connect(ProtocolUpgradeSpec),
    }
}
