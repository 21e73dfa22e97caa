/// A descriptor is a list of key/value pairs that the rate limit server uses to select the correct
/// rate limit to use when limiting.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Descriptor {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub rate_limit: ::core::option::Option<RateLimit>,
    /// Nested descriptors.
    #[prost(message, repeated, tag = "4")]
    pub descriptors: ::prost::alloc::vec::Vec<Descriptor>,
    /// Higher weights take precedence over lower weights when several descriptors match.
    #[prost(uint32, tag = "5")]
    pub weight: u32,
    /// Apply this descriptor even when a higher weighted descriptor matched.
    #[prost(bool, tag = "6")]
    pub always_apply: bool,
}
/// Matches a set of descriptors regardless of their order.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetDescriptor {
    #[prost(message, repeated, tag = "1")]
    pub simple_descriptors: ::prost::alloc::vec::Vec<SimpleDescriptor>,
    #[prost(message, optional, tag = "2")]
    pub rate_limit: ::core::option::Option<RateLimit>,
    #[prost(bool, tag = "3")]
    pub always_apply: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleDescriptor {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}
/// A RateLimit is a rate limit for a single descriptor.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimit {
    #[prost(enumeration = "rate_limit::Unit", tag = "1")]
    pub unit: i32,
    #[prost(uint32, tag = "2")]
    pub requests_per_unit: u32,
}
/// Nested message and enum types in `RateLimit`.
pub mod rate_limit {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Unit {
        Unknown = 0,
        Second = 1,
        Minute = 2,
        Hour = 3,
        Day = 4,
    }
    impl Unit {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Unit::Unknown => "UNKNOWN",
                Unit::Second => "SECOND",
                Unit::Minute => "MINUTE",
                Unit::Hour => "HOUR",
                Unit::Day => "DAY",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "UNKNOWN" => Some(Self::Unknown),
                "SECOND" => Some(Self::Second),
                "MINUTE" => Some(Self::Minute),
                "HOUR" => Some(Self::Hour),
                "DAY" => Some(Self::Day),
                _ => None,
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RateLimitActions {
    #[prost(message, repeated, tag = "1")]
    pub actions: ::prost::alloc::vec::Vec<Action>,
    #[prost(message, repeated, tag = "2")]
    pub set_actions: ::prost::alloc::vec::Vec<Action>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(oneof = "action::ActionSpecifier", tags = "1, 2, 3, 4, 5, 6, 8")]
    pub action_specifier: ::core::option::Option<action::ActionSpecifier>,
}
/// Nested message and enum types in `Action`.
pub mod action {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SourceCluster {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DestinationCluster {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RequestHeaders {
        /// The header name to be queried from the request headers.
        #[prost(string, tag = "1")]
        pub header_name: ::prost::alloc::string::String,
        /// The key to use in the descriptor entry.
        #[prost(string, tag = "2")]
        pub descriptor_key: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct RemoteAddress {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct GenericKey {
        /// The value to use in the descriptor entry.
        #[prost(string, tag = "1")]
        pub descriptor_value: ::prost::alloc::string::String,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HeaderValueMatch {
        #[prost(string, tag = "1")]
        pub descriptor_value: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub expect_match: ::core::option::Option<bool>,
        #[prost(message, repeated, tag = "3")]
        pub headers: ::prost::alloc::vec::Vec<header_value_match::HeaderMatcher>,
    }
    /// Nested message and enum types in `HeaderValueMatch`.
    pub mod header_value_match {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct HeaderMatcher {
            #[prost(string, tag = "1")]
            pub name: ::prost::alloc::string::String,
            #[prost(bool, tag = "8")]
            pub invert_match: bool,
            #[prost(oneof = "header_matcher::HeaderMatchSpecifier", tags = "4, 5, 6, 7, 9, 10")]
            pub header_match_specifier: ::core::option::Option<
                header_matcher::HeaderMatchSpecifier,
            >,
        }
        /// Nested message and enum types in `HeaderMatcher`.
        pub mod header_matcher {
            /// Half-open interval [start, end).
            #[derive(serde::Serialize, serde::Deserialize)]
            #[serde(rename_all = "camelCase")]
            #[serde(default)]
            #[allow(clippy::derive_partial_eq_without_eq)]
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct Int64Range {
                #[prost(int64, tag = "1")]
                pub start: i64,
                #[prost(int64, tag = "2")]
                pub end: i64,
            }
            #[derive(serde::Serialize, serde::Deserialize)]
            #[serde(rename_all = "camelCase")]
            #[allow(clippy::derive_partial_eq_without_eq)]
            #[derive(Clone, PartialEq, ::prost::Oneof)]
            pub enum HeaderMatchSpecifier {
                #[prost(string, tag = "4")]
                ExactMatch(::prost::alloc::string::String),
                #[prost(string, tag = "5")]
                RegexMatch(::prost::alloc::string::String),
                #[prost(message, tag = "6")]
                RangeMatch(Int64Range),
                #[prost(bool, tag = "7")]
                PresentMatch(bool),
                #[prost(string, tag = "9")]
                PrefixMatch(::prost::alloc::string::String),
                #[prost(string, tag = "10")]
                SuffixMatch(::prost::alloc::string::String),
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct MetaData {
        /// The key to use in the descriptor entry.
        #[prost(string, tag = "1")]
        pub descriptor_key: ::prost::alloc::string::String,
        /// Metadata struct that defines the key and path to retrieve the string value.
        #[prost(message, optional, tag = "2")]
        pub metadata_key: ::core::option::Option<meta_data::MetadataKey>,
        /// Used when no value is present at the metadata key.
        #[prost(string, tag = "3")]
        pub default_value: ::prost::alloc::string::String,
        #[prost(enumeration = "meta_data::Source", tag = "4")]
        pub source: i32,
    }
    /// Nested message and enum types in `MetaData`.
    pub mod meta_data {
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[serde(default)]
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Message)]
        pub struct MetadataKey {
            /// The key name of the metadata from which to retrieve the Struct.
            #[prost(string, tag = "1")]
            pub key: ::prost::alloc::string::String,
            #[prost(message, repeated, tag = "2")]
            pub path: ::prost::alloc::vec::Vec<metadata_key::PathSegment>,
        }
        /// Nested message and enum types in `MetadataKey`.
        pub mod metadata_key {
            #[derive(serde::Serialize, serde::Deserialize)]
            #[serde(rename_all = "camelCase")]
            #[serde(default)]
            #[allow(clippy::derive_partial_eq_without_eq)]
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct PathSegment {
                #[prost(oneof = "path_segment::Segment", tags = "1")]
                pub segment: ::core::option::Option<path_segment::Segment>,
            }
            /// Nested message and enum types in `PathSegment`.
            pub mod path_segment {
                #[derive(serde::Serialize, serde::Deserialize)]
                #[serde(rename_all = "camelCase")]
                #[allow(clippy::derive_partial_eq_without_eq)]
                #[derive(Clone, PartialEq, ::prost::Oneof)]
                pub enum Segment {
                    #[prost(string, tag = "1")]
                    Key(::prost::alloc::string::String),
                }
            }
        }
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Source {
            Dynamic = 0,
            RouteEntry = 1,
        }
        impl Source {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Source::Dynamic => "DYNAMIC",
                    Source::RouteEntry => "ROUTE_ENTRY",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "DYNAMIC" => Some(Self::Dynamic),
                    "ROUTE_ENTRY" => Some(Self::RouteEntry),
                    _ => None,
                }
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum ActionSpecifier {
        /// Rate limit on source cluster.
        #[prost(message, tag = "1")]
        SourceCluster(SourceCluster),
        /// Rate limit on destination cluster.
        #[prost(message, tag = "2")]
        DestinationCluster(DestinationCluster),
        /// Rate limit on request headers.
        #[prost(message, tag = "3")]
        RequestHeaders(RequestHeaders),
        /// Rate limit on remote address.
        #[prost(message, tag = "4")]
        RemoteAddress(RemoteAddress),
        /// Rate limit on a generic key.
        #[prost(message, tag = "5")]
        GenericKey(GenericKey),
        /// Rate limit on the existence of request headers.
        #[prost(message, tag = "6")]
        HeaderValueMatch(HeaderValueMatch),
        /// Rate limit on dynamic or route metadata.
        #[prost(message, tag = "8")]
        Metadata(MetaData),
    }
}
