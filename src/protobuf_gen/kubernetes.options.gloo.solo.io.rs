/// Kubernetes Upstreams represent a set of one or more addressable pods for a Kubernetes Service.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    #[prost(string, tag = "1")]
    pub service_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub service_namespace: ::prost::alloc::string::String,
    #[prost(uint32, tag = "3")]
    pub service_port: u32,
    #[prost(map = "string, string", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub selector: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "5")]
    pub service_spec: ::core::option::Option<
        super::super::super::super::super::gloo::solo::io::ServiceSpec,
    >,
    #[prost(message, optional, tag = "6")]
    pub subset_spec: ::core::option::Option<
        super::super::super::super::super::gloo::solo::io::SubsetSpec,
    >,
}
