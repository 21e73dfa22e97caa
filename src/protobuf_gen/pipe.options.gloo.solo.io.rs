/// Pipe upstreams are used to route request to services listening at a Unix Domain Socket.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub service_spec: ::core::option::Option<
        super::super::super::super::super::gloo::solo::io::ServiceSpec,
    >,
}
