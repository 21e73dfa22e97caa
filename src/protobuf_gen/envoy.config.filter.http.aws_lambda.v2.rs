/// Filter config for the AWS Lambda filter.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AwsLambdaConfig {
    /// How often the credentials are refreshed.
    #[prost(message, optional, tag = "3")]
    #[serde(with = "crate::wkt::option_duration")]
    pub credential_refresh_delay: ::core::option::Option<::prost_types::Duration>,
    /// Send downstream path and method as headers to the lambda.
    #[prost(message, optional, tag = "4")]
    pub propagate_original_routing: ::core::option::Option<bool>,
    #[prost(oneof = "aws_lambda_config::CredentialsFetcher", tags = "1, 2")]
    pub credentials_fetcher: ::core::option::Option<
        aws_lambda_config::CredentialsFetcher,
    >,
}
/// Nested message and enum types in `AWSLambdaConfig`.
pub mod aws_lambda_config {
    /// In order to specify the aws sts endpoint, both the cluster and uri must be set.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ServiceAccountCredentials {
        /// The name of the envoy cluster which represents the desired aws sts endpoint.
        #[prost(string, tag = "1")]
        pub cluster: ::prost::alloc::string::String,
        /// The fully qualified uri of the aws sts endpoint.
        #[prost(string, tag = "2")]
        pub uri: ::prost::alloc::string::String,
        /// Timeout for the request.
        #[prost(message, optional, tag = "3")]
        #[serde(with = "crate::wkt::option_duration")]
        pub timeout: ::core::option::Option<::prost_types::Duration>,
        /// The regional sts endpoint to use.
        #[prost(string, tag = "4")]
        pub region: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CredentialsFetcher {
        /// Use the default credentials chain of the environment.
        #[prost(message, tag = "1")]
        UseDefaultCredentials(bool),
        /// Use projected service account token, and role arn to create temporary credentials.
        #[prost(message, tag = "2")]
        ServiceAccountCredentials(ServiceAccountCredentials),
    }
}
