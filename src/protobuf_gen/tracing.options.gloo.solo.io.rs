/// Contains settings for configuring Envoy's tracing capabilities at the listener level.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListenerTracingSettings {
    #[prost(message, repeated, tag = "1")]
    pub request_headers_for_tags: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    #[prost(message, optional, tag = "2")]
    pub verbose: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "3")]
    pub trace_percentages: ::core::option::Option<TracePercentages>,
    #[prost(message, repeated, tag = "6")]
    pub environment_variables_for_tags: ::prost::alloc::vec::Vec<
        TracingTagEnvironmentVariable,
    >,
    #[prost(message, repeated, tag = "7")]
    pub literals_for_tags: ::prost::alloc::vec::Vec<TracingTagLiteral>,
    #[prost(oneof = "listener_tracing_settings::ProviderConfig", tags = "4, 5, 8, 9")]
    pub provider_config: ::core::option::Option<
        listener_tracing_settings::ProviderConfig,
    >,
}
/// Nested message and enum types in `ListenerTracingSettings`.
pub mod listener_tracing_settings {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ProviderConfig {
        #[prost(message, tag = "4")]
        ZipkinConfig(super::ZipkinConfig),
        #[prost(message, tag = "5")]
        DatadogConfig(super::DatadogConfig),
        #[prost(message, tag = "8")]
        OpenTelemetryConfig(super::OpenTelemetryConfig),
        #[prost(message, tag = "9")]
        OpenCensusConfig(super::OpenCensusConfig),
    }
}
/// Contains settings for configuring Envoy's tracing capabilities at the route level.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteTracingSettings {
    #[prost(string, tag = "1")]
    pub route_descriptor: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub trace_percentages: ::core::option::Option<TracePercentages>,
    #[prost(message, optional, tag = "3")]
    pub propagate: ::core::option::Option<bool>,
}
/// Requests can produce traces by random sampling or when the `x-client-trace-id` header is
/// provided.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracePercentages {
    #[prost(message, optional, tag = "1")]
    pub client_sample_percentage: ::core::option::Option<f32>,
    #[prost(message, optional, tag = "2")]
    pub random_sample_percentage: ::core::option::Option<f32>,
    #[prost(message, optional, tag = "3")]
    pub overall_sample_percentage: ::core::option::Option<f32>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ZipkinConfig {
    #[prost(string, tag = "3")]
    pub collector_endpoint: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub trace_id_128bit: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "5")]
    pub shared_span_context: ::core::option::Option<bool>,
    #[prost(oneof = "zipkin_config::CollectorCluster", tags = "1, 2")]
    pub collector_cluster: ::core::option::Option<zipkin_config::CollectorCluster>,
}
/// Nested message and enum types in `ZipkinConfig`.
pub mod zipkin_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CollectorCluster {
        #[prost(message, tag = "1")]
        CollectorUpstreamRef(
            super::super::super::super::super::super::core::solo::io::ResourceRef,
        ),
        #[prost(string, tag = "2")]
        ClusterName(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DatadogConfig {
    #[prost(message, optional, tag = "3")]
    pub service_name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(oneof = "datadog_config::CollectorCluster", tags = "1, 2")]
    pub collector_cluster: ::core::option::Option<datadog_config::CollectorCluster>,
}
/// Nested message and enum types in `DatadogConfig`.
pub mod datadog_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CollectorCluster {
        #[prost(message, tag = "1")]
        CollectorUpstreamRef(
            super::super::super::super::super::super::core::solo::io::ResourceRef,
        ),
        #[prost(string, tag = "2")]
        ClusterName(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenTelemetryConfig {
    #[prost(oneof = "open_telemetry_config::CollectorCluster", tags = "1, 2")]
    pub collector_cluster: ::core::option::Option<
        open_telemetry_config::CollectorCluster,
    >,
}
/// Nested message and enum types in `OpenTelemetryConfig`.
pub mod open_telemetry_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CollectorCluster {
        /// The upstream to use for submitting traces to the OpenTelemetry agent.
        #[prost(message, tag = "1")]
        CollectorUpstreamRef(
            super::super::super::super::super::super::core::solo::io::ResourceRef,
        ),
        #[prost(string, tag = "2")]
        ClusterName(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenCensusConfig {
    /// Configures tracing, e.g. the sampler and max number of annotations for each span.
    #[prost(message, optional, tag = "1")]
    pub trace_config: ::core::option::Option<TraceConfig>,
    /// Propagation formats accepted on incoming requests.
    #[prost(enumeration = "open_census_config::TraceContext", repeated, tag = "4")]
    pub incoming_trace_context: ::prost::alloc::vec::Vec<i32>,
    #[prost(enumeration = "open_census_config::TraceContext", repeated, tag = "5")]
    pub outgoing_trace_context: ::prost::alloc::vec::Vec<i32>,
    #[prost(oneof = "open_census_config::CollectorAddress", tags = "2, 3")]
    pub collector_address: ::core::option::Option<open_census_config::CollectorAddress>,
}
/// Nested message and enum types in `OpenCensusConfig`.
pub mod open_census_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum TraceContext {
        None = 0,
        TraceContext = 1,
        GrpcTraceBin = 2,
        CloudTraceContext = 3,
        B3 = 4,
    }
    impl TraceContext {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                TraceContext::None => "NONE",
                TraceContext::TraceContext => "TRACE_CONTEXT",
                TraceContext::GrpcTraceBin => "GRPC_TRACE_BIN",
                TraceContext::CloudTraceContext => "CLOUD_TRACE_CONTEXT",
                TraceContext::B3 => "B3",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "NONE" => Some(Self::None),
                "TRACE_CONTEXT" => Some(Self::TraceContext),
                "GRPC_TRACE_BIN" => Some(Self::GrpcTraceBin),
                "CLOUD_TRACE_CONTEXT" => Some(Self::CloudTraceContext),
                "B3" => Some(Self::B3),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CollectorAddress {
        /// Address of the OpenCensus agent HTTP endpoint.
        #[prost(string, tag = "2")]
        HttpAddress(::prost::alloc::string::String),
        #[prost(message, tag = "3")]
        GrpcAddress(super::OpenCensusGrpcAddress),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenCensusGrpcAddress {
    /// URI of the OpenCensus agent gRPC endpoint.
    #[prost(string, tag = "1")]
    pub target_uri: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub stat_prefix: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TraceConfig {
    /// The global default max number of attributes per span.
    #[prost(uint32, tag = "4")]
    pub max_number_of_attributes: u32,
    #[prost(uint32, tag = "5")]
    pub max_number_of_annotations: u32,
    #[prost(uint32, tag = "6")]
    pub max_number_of_message_events: u32,
    #[prost(uint32, tag = "7")]
    pub max_number_of_links: u32,
    #[prost(oneof = "trace_config::Sampler", tags = "1, 2, 3")]
    pub sampler: ::core::option::Option<trace_config::Sampler>,
}
/// Nested message and enum types in `TraceConfig`.
pub mod trace_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sampler {
        #[prost(message, tag = "1")]
        ProbabilitySampler(super::ProbabilitySampler),
        #[prost(message, tag = "2")]
        ConstantSampler(super::ConstantSampler),
        #[prost(message, tag = "3")]
        RateLimitingSampler(super::RateLimitingSampler),
    }
}
/// Sampler that tries to uniformly sample traces with a given probability.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProbabilitySampler {
    #[prost(double, tag = "1")]
    pub sampling_probability: f64,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConstantSampler {
    #[prost(enumeration = "constant_sampler::ConstantDecision", tag = "1")]
    pub decision: i32,
}
/// Nested message and enum types in `ConstantSampler`.
pub mod constant_sampler {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ConstantDecision {
        AlwaysOff = 0,
        AlwaysOn = 1,
        AlwaysParent = 2,
    }
    impl ConstantDecision {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ConstantDecision::AlwaysOff => "ALWAYS_OFF",
                ConstantDecision::AlwaysOn => "ALWAYS_ON",
                ConstantDecision::AlwaysParent => "ALWAYS_PARENT",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ALWAYS_OFF" => Some(Self::AlwaysOff),
                "ALWAYS_ON" => Some(Self::AlwaysOn),
                "ALWAYS_PARENT" => Some(Self::AlwaysParent),
                _ => None,
            }
        }
    }
}
/// Sampler that tries to sample with a rate per time window.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimitingSampler {
    #[prost(int64, tag = "1")]
    pub qps: i64,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingTagEnvironmentVariable {
    #[prost(message, optional, tag = "1")]
    pub tag: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub name: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "3")]
    pub default_value: ::core::option::Option<::prost::alloc::string::String>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TracingTagLiteral {
    #[prost(message, optional, tag = "1")]
    pub tag: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<::prost::alloc::string::String>,
}
