/// Retry Policy applied at the Route and/or Virtual Hosts levels.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RetryPolicy {
    /// Specifies the conditions under which retry takes place.
    #[prost(string, tag = "1")]
    pub retry_on: ::prost::alloc::string::String,
    #[prost(uint32, tag = "2")]
    pub num_retries: u32,
    #[prost(message, optional, tag = "3")]
    #[serde(with = "crate::wkt::option_duration")]
    pub per_try_timeout: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "4")]
    pub retry_back_off: ::core::option::Option<RetryBackOff>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RetryBackOff {
    #[prost(message, optional, tag = "1")]
    #[serde(with = "crate::wkt::option_duration")]
    pub base_interval: ::core::option::Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "2")]
    #[serde(with = "crate::wkt::option_duration")]
    pub max_interval: ::core::option::Option<::prost_types::Duration>,
}
