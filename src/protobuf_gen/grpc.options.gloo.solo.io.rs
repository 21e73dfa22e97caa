/// Service spec describing GRPC upstreams. This will usually be filled automatically via function
/// discovery (if the upstream supports reflection).
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceSpec {
    /// Descriptors that contain information of the services listed below.
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "::serde_with::As::<::serde_with::base64::Base64>")]
    pub descriptors: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "2")]
    pub grpc_services: ::prost::alloc::vec::Vec<service_spec::GrpcService>,
}
/// Nested message and enum types in `ServiceSpec`.
pub mod service_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GrpcService {
        #[prost(string, tag = "1")]
        pub package_name: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub service_name: ::prost::alloc::string::String,
        #[prost(string, repeated, tag = "3")]
        pub function_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
}
/// This is only for upstream with Grpc service spec.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestinationSpec {
    #[prost(string, tag = "1")]
    pub package: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub service: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub function: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub parameters: ::core::option::Option<
        super::super::super::super::super::rest::options::gloo::solo::io::Parameters,
    >,
}
