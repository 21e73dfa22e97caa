#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Buffer {
    /// The maximum request size that the filter will buffer before the connection manager will stop
    /// buffering and return a 413 response.
    #[prost(message, optional, tag = "1")]
    pub max_request_bytes: ::core::option::Option<u32>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BufferPerRoute {
    #[prost(oneof = "buffer_per_route::Override", tags = "2, 3")]
    pub r#override: ::core::option::Option<buffer_per_route::Override>,
}
/// Nested message and enum types in `BufferPerRoute`.
pub mod buffer_per_route {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Override {
        /// Disable the buffer filter for this particular vhost or route.
        #[prost(bool, tag = "2")]
        Disabled(bool),
        /// Override the global configuration of the filter with this new config.
        #[prost(message, tag = "3")]
        Buffer(super::Buffer),
    }
}
