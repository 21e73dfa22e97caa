/// Upstream Spec for AWS Lambda Upstreams
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpstreamSpec {
    /// The AWS Region where the desired Lambda Functions exist
    #[prost(string, tag = "1")]
    pub region: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub secret_ref: ::core::option::Option<
        super::super::super::super::super::core::solo::io::ResourceRef,
    >,
    #[prost(message, repeated, tag = "3")]
    pub lambda_functions: ::prost::alloc::vec::Vec<LambdaFunctionSpec>,
    #[prost(string, tag = "4")]
    pub role_arn: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub aws_account_id: ::prost::alloc::string::String,
}
/// Each Lambda Function Spec contains data necessary for Gloo to invoke Lambda functions
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LambdaFunctionSpec {
    #[prost(string, tag = "1")]
    pub logical_name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub lambda_function_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub qualifier: ::prost::alloc::string::String,
}
/// Each Lambda Function Spec contains data necessary for Gloo to invoke Lambda functions.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DestinationSpec {
    #[prost(string, tag = "1")]
    pub logical_name: ::prost::alloc::string::String,
    #[prost(enumeration = "destination_spec::InvocationStyle", tag = "2")]
    pub invocation_style: i32,
    #[prost(bool, tag = "5")]
    pub response_transformation: bool,
    #[prost(bool, tag = "6")]
    pub unwrap_as_alb: bool,
}
/// Nested message and enum types in `DestinationSpec`.
pub mod destination_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum InvocationStyle {
        Sync = 0,
        Async = 1,
    }
    impl InvocationStyle {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                InvocationStyle::Sync => "SYNC",
                InvocationStyle::Async => "ASYNC",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "SYNC" => Some(Self::Sync),
                "ASYNC" => Some(Self::Async),
                _ => None,
            }
        }
    }
}
