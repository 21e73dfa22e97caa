#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServiceSpec {
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub transformations: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        super::super::super::super::super::transformation::options::gloo::solo::io::TransformationTemplate,
    >,
    #[prost(message, optional, tag = "2")]
    pub swagger_info: ::core::option::Option<service_spec::SwaggerInfo>,
}
/// Nested message and enum types in `ServiceSpec`.
pub mod service_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SwaggerInfo {
        #[prost(oneof = "swagger_info::SwaggerSpec", tags = "1, 2")]
        pub swagger_spec: ::core::option::Option<swagger_info::SwaggerSpec>,
    }
    /// Nested message and enum types in `SwaggerInfo`.
    pub mod swagger_info {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum SwaggerSpec {
            #[prost(string, tag = "1")]
            Url(::prost::alloc::string::String),
            #[prost(string, tag = "2")]
            Inline(::prost::alloc::string::String),
        }
    }
}
/// This is only for upstream with REST service spec
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestinationSpec {
    #[prost(string, tag = "1")]
    pub function_name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub parameters: ::core::option::Option<Parameters>,
    #[prost(message, optional, tag = "3")]
    pub response_transformation: ::core::option::Option<
        super::super::super::super::super::transformation::options::gloo::solo::io::TransformationTemplate,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Parameters {
    /// headers that will be used to extract data for processing output templates
    #[prost(map = "string, string", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub headers: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// part of the (or the entire) path that will be used extract data for processing output
    /// templates
    #[prost(message, optional, tag = "2")]
    pub path: ::core::option::Option<::prost::alloc::string::String>,
}
