/// Configure the proxy latency filter. This filter measures the latency incurred by the filter chain
/// in a histogram.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProxyLatency {
    #[prost(enumeration = "proxy_latency::Measurement", tag = "1")]
    pub request: i32,
    #[prost(bool, tag = "2")]
    pub measure_request_internally: bool,
    #[prost(enumeration = "proxy_latency::Measurement", tag = "3")]
    pub response: i32,
    #[prost(bool, tag = "4")]
    pub measure_response_internally: bool,
    #[prost(message, optional, tag = "5")]
    pub charge_cluster_stat: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "6")]
    pub charge_listener_stat: ::core::option::Option<bool>,
    #[prost(bool, tag = "7")]
    pub emit_dynamic_metadata: bool,
}
/// Nested message and enum types in `ProxyLatency`.
pub mod proxy_latency {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Measurement {
        /// Count from the last byte of the incoming request\response to the first byte of the outgoing
        /// request\response.
        LastIncomingFirstOutgoing = 0,
        FirstIncomingFirstOutgoing = 1,
        LastIncomingLastOutgoing = 2,
        FirstIncomingLastOutgoing = 3,
    }
    impl Measurement {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Measurement::LastIncomingFirstOutgoing => "LAST_INCOMING_FIRST_OUTGOING",
                Measurement::FirstIncomingFirstOutgoing => "FIRST_INCOMING_FIRST_OUTGOING",
                Measurement::LastIncomingLastOutgoing => "LAST_INCOMING_LAST_OUTGOING",
                Measurement::FirstIncomingLastOutgoing => "FIRST_INCOMING_LAST_OUTGOING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "LAST_INCOMING_FIRST_OUTGOING" => Some(Self::LastIncomingFirstOutgoing),
                "FIRST_INCOMING_FIRST_OUTGOING" => Some(Self::FirstIncomingFirstOutgoing),
                "LAST_INCOMING_LAST_OUTGOING" => Some(Self::LastIncomingLastOutgoing),
                "FIRST_INCOMING_LAST_OUTGOING" => Some(Self::FirstIncomingLastOutgoing),
                _ => None,
            }
        }
    }
}
