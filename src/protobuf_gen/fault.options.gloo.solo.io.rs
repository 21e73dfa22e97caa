#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteAbort {
    /// Percentage of requests that should be aborted, defaulting to 0.
    #[prost(float, tag = "1")]
    pub percentage: f32,
    /// This should be a standard HTTP status, i.e. 503.
    #[prost(uint32, tag = "2")]
    pub http_status: u32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteDelay {
    #[prost(float, tag = "1")]
    pub percentage: f32,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub fixed_delay: ::core::option::Option<::prost_types::Duration>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteFaults {
    #[prost(message, optional, tag = "1")]
    pub abort: ::core::option::Option<RouteAbort>,
    #[prost(message, optional, tag = "2")]
    pub delay: ::core::option::Option<RouteDelay>,
}
