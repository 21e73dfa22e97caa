/// Contains various settings for Envoy's access logging service.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessLoggingService {
    #[prost(message, repeated, tag = "1")]
    pub access_log: ::prost::alloc::vec::Vec<AccessLog>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessLog {
    #[prost(message, optional, tag = "4")]
    pub filter: ::core::option::Option<AccessLogFilter>,
    #[prost(oneof = "access_log::OutputDestination", tags = "2, 3")]
    pub output_destination: ::core::option::Option<access_log::OutputDestination>,
}
/// Nested message and enum types in `AccessLog`.
pub mod access_log {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum OutputDestination {
        /// Output access logs to local file
        #[prost(message, tag = "2")]
        FileSink(super::FileSink),
        /// Send access logs to gRPC service
        #[prost(message, tag = "3")]
        GrpcService(super::GrpcService),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FileSink {
    /// the file path to which the file access logging service will sink
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
    #[prost(oneof = "file_sink::OutputFormat", tags = "2, 3")]
    pub output_format: ::core::option::Option<file_sink::OutputFormat>,
}
/// Nested message and enum types in `FileSink`.
pub mod file_sink {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum OutputFormat {
        /// the format string by which envoy will format the log lines
        #[prost(string, tag = "2")]
        StringFormat(::prost::alloc::string::String),
        /// the format object by which to envoy will emit the logs in a structured way.
        #[prost(message, tag = "3")]
        #[serde(with = "crate::wkt::struct_value")]
        JsonFormat(::prost_types::Struct),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrpcService {
    /// name of log stream
    #[prost(string, tag = "1")]
    pub log_name: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "4")]
    pub additional_request_headers_to_log: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(string, repeated, tag = "5")]
    pub additional_response_headers_to_log: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(string, repeated, tag = "6")]
    pub additional_response_trailers_to_log: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(oneof = "grpc_service::ServiceRef", tags = "2")]
    pub service_ref: ::core::option::Option<grpc_service::ServiceRef>,
}
/// Nested message and enum types in `GrpcService`.
pub mod grpc_service {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ServiceRef {
        #[prost(string, tag = "2")]
        StaticClusterName(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccessLogFilter {
    #[prost(oneof = "access_log_filter::FilterSpecifier", tags = "1, 2, 3, 4, 5, 6, 7, 8, 9, 10")]
    pub filter_specifier: ::core::option::Option<access_log_filter::FilterSpecifier>,
}
/// Nested message and enum types in `AccessLogFilter`.
pub mod access_log_filter {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum FilterSpecifier {
        #[prost(message, tag = "1")]
        StatusCodeFilter(super::StatusCodeFilter),
        #[prost(message, tag = "2")]
        DurationFilter(super::DurationFilter),
        #[prost(message, tag = "3")]
        NotHealthCheckFilter(super::NotHealthCheckFilter),
        #[prost(message, tag = "4")]
        TraceableFilter(super::TraceableFilter),
        #[prost(message, tag = "5")]
        RuntimeFilter(super::RuntimeFilter),
        #[prost(message, tag = "6")]
        AndFilter(super::AndFilter),
        #[prost(message, tag = "7")]
        OrFilter(super::OrFilter),
        #[prost(message, tag = "8")]
        HeaderFilter(super::HeaderFilter),
        #[prost(message, tag = "9")]
        ResponseFlagFilter(super::ResponseFlagFilter),
        #[prost(message, tag = "10")]
        GrpcStatusFilter(super::GrpcStatusFilter),
    }
}
/// Filter on an integer comparison.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComparisonFilter {
    #[prost(enumeration = "comparison_filter::Op", tag = "1")]
    pub op: i32,
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<
        super::super::super::super::super::solo::io::envoy::config::core::v3::RuntimeUInt32,
    >,
}
/// Nested message and enum types in `ComparisonFilter`.
pub mod comparison_filter {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Op {
        /// =
        Eq = 0,
        /// >=
        Ge = 1,
        /// <=
        Le = 2,
    }
    impl Op {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Op::Eq => "EQ",
                Op::Ge => "GE",
                Op::Le => "LE",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "EQ" => Some(Self::Eq),
                "GE" => Some(Self::Ge),
                "LE" => Some(Self::Le),
                _ => None,
            }
        }
    }
}
/// Filters on HTTP response/status code.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StatusCodeFilter {
    #[prost(message, optional, tag = "1")]
    pub comparison: ::core::option::Option<ComparisonFilter>,
}
/// Filters on total request duration in milliseconds.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DurationFilter {
    #[prost(message, optional, tag = "1")]
    pub comparison: ::core::option::Option<ComparisonFilter>,
}
/// Filters for requests that are not health check requests.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotHealthCheckFilter {}
/// Filters for requests that are traceable.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TraceableFilter {}
/// Filters for random sampling of requests.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RuntimeFilter {
    #[prost(string, tag = "1")]
    pub runtime_key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub percent_sampled: ::core::option::Option<
        super::super::super::super::super::solo::io::envoy::r#type::v3::FractionalPercent,
    >,
    #[prost(bool, tag = "3")]
    pub use_independent_randomness: bool,
}
/// Performs a logical “and” operation on the result of each filter in filters.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AndFilter {
    #[prost(message, repeated, tag = "1")]
    pub filters: ::prost::alloc::vec::Vec<AccessLogFilter>,
}
/// Performs a logical “or” operation on the result of each individual filter.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OrFilter {
    #[prost(message, repeated, tag = "2")]
    pub filters: ::prost::alloc::vec::Vec<AccessLogFilter>,
}
/// Filters requests based on the presence or value of a request header.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderFilter {
    #[prost(message, optional, tag = "1")]
    pub header: ::core::option::Option<
        super::super::super::super::super::matchers::core::gloo::solo::io::HeaderMatcher,
    >,
}
/// Filters requests that received responses with an Envoy response flag set.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseFlagFilter {
    #[prost(string, repeated, tag = "1")]
    pub flags: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// Filters gRPC requests based on their response status.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GrpcStatusFilter {
    #[prost(enumeration = "grpc_status_filter::Status", repeated, tag = "1")]
    pub statuses: ::prost::alloc::vec::Vec<i32>,
    #[prost(bool, tag = "2")]
    pub exclude: bool,
}
/// Nested message and enum types in `GrpcStatusFilter`.
pub mod grpc_status_filter {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Status {
        Ok = 0,
        Canceled = 1,
        Unknown = 2,
        InvalidArgument = 3,
        DeadlineExceeded = 4,
        NotFound = 5,
        AlreadyExists = 6,
        PermissionDenied = 7,
        ResourceExhausted = 8,
        FailedPrecondition = 9,
        Aborted = 10,
        OutOfRange = 11,
        Unimplemented = 12,
        Internal = 13,
        Unavailable = 14,
        DataLoss = 15,
        Unauthenticated = 16,
    }
    impl Status {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Status::Ok => "OK",
                Status::Canceled => "CANCELED",
                Status::Unknown => "UNKNOWN",
                Status::InvalidArgument => "INVALID_ARGUMENT",
                Status::DeadlineExceeded => "DEADLINE_EXCEEDED",
                Status::NotFound => "NOT_FOUND",
                Status::AlreadyExists => "ALREADY_EXISTS",
                Status::PermissionDenied => "PERMISSION_DENIED",
                Status::ResourceExhausted => "RESOURCE_EXHAUSTED",
                Status::FailedPrecondition => "FAILED_PRECONDITION",
                Status::Aborted => "ABORTED",
                Status::OutOfRange => "OUT_OF_RANGE",
                Status::Unimplemented => "UNIMPLEMENTED",
                Status::Internal => "INTERNAL",
                Status::Unavailable => "UNAVAILABLE",
                Status::DataLoss => "DATA_LOSS",
                Status::Unauthenticated => "UNAUTHENTICATED",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "OK" => Some(Self::Ok),
                "CANCELED" => Some(Self::Canceled),
                "UNKNOWN" => Some(Self::Unknown),
                "INVALID_ARGUMENT" => Some(Self::InvalidArgument),
                "DEADLINE_EXCEEDED" => Some(Self::DeadlineExceeded),
                "NOT_FOUND" => Some(Self::NotFound),
                "ALREADY_EXISTS" => Some(Self::AlreadyExists),
                "PERMISSION_DENIED" => Some(Self::PermissionDenied),
                "RESOURCE_EXHAUSTED" => Some(Self::ResourceExhausted),
                "FAILED_PRECONDITION" => Some(Self::FailedPrecondition),
                "ABORTED" => Some(Self::Aborted),
                "OUT_OF_RANGE" => Some(Self::OutOfRange),
                "UNIMPLEMENTED" => Some(Self::Unimplemented),
                "INTERNAL" => Some(Self::Internal),
                "UNAVAILABLE" => Some(Self::Unavailable),
                "DATA_LOSS" => Some(Self::DataLoss),
                "UNAUTHENTICATED" => Some(Self::Unauthenticated),
                _ => None,
            }
        }
    }
}
