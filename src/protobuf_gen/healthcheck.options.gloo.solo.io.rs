/// Add this config to a Listener/Gateway to Enable Envoy Health Checks on that port
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthCheck {
    /// match health check requests using this exact path
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
}
