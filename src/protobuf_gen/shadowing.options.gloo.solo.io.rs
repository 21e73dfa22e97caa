/// Specifies traffic shadowing configuration for the associated route.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteShadowing {
    /// The upstream to which the shadowed traffic should be sent.
    #[prost(message, optional, tag = "1")]
    pub upstream: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    /// This should be a value between 0.0 and 100.0, with up to 6 significant digits.
    #[prost(float, tag = "2")]
    pub percentage: f32,
}
