/// GrpcWeb support is enabled be default. Use this config to disable it.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrpcWeb {
    #[prost(bool, tag = "1")]
    pub disable: bool,
}
