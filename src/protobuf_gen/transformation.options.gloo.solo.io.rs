#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResponseMatch {
    /// Response headers to match on.
    #[prost(message, repeated, tag = "1")]
    pub matchers: ::prost::alloc::vec::Vec<
        super::super::super::super::super::matchers::core::gloo::solo::io::HeaderMatcher,
    >,
    /// Response code detail to match on.
    #[prost(string, tag = "2")]
    pub response_code_details: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub response_transformation: ::core::option::Option<Transformation>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestMatch {
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<
        super::super::super::super::super::matchers::core::gloo::solo::io::Matcher,
    >,
    /// Should we clear the route cache if a transformation was matched.
    #[prost(bool, tag = "2")]
    pub clear_route_cache: bool,
    #[prost(message, optional, tag = "3")]
    pub request_transformation: ::core::option::Option<Transformation>,
    #[prost(message, optional, tag = "4")]
    pub response_transformation: ::core::option::Option<Transformation>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transformations {
    /// Apply a transformation to requests.
    #[prost(message, optional, tag = "1")]
    pub request_transformation: ::core::option::Option<Transformation>,
    /// Clear the route cache if the request transformation was applied.
    #[prost(bool, tag = "3")]
    pub clear_route_cache: bool,
    /// Apply a transformation to responses.
    #[prost(message, optional, tag = "2")]
    pub response_transformation: ::core::option::Option<Transformation>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestResponseTransformations {
    #[prost(message, repeated, tag = "1")]
    pub request_transforms: ::prost::alloc::vec::Vec<RequestMatch>,
    #[prost(message, repeated, tag = "2")]
    pub response_transforms: ::prost::alloc::vec::Vec<ResponseMatch>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformationStages {
    /// Early transformations happen before most other options (Like Auth and Rate Limit).
    #[prost(message, optional, tag = "1")]
    pub early: ::core::option::Option<RequestResponseTransformations>,
    /// Regular transformations happen after Auth and Rate limit decisions has been made.
    #[prost(message, optional, tag = "2")]
    pub regular: ::core::option::Option<RequestResponseTransformations>,
    /// Inherit transformation config from parent.
    #[prost(bool, tag = "3")]
    pub inherit_transformation: bool,
    #[prost(message, optional, tag = "4")]
    pub log_request_response_info: ::core::option::Option<bool>,
    #[prost(message, optional, tag = "5")]
    pub escape_characters: ::core::option::Option<bool>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transformation {
    /// Logs request/response sensitive information when enabled.
    #[prost(bool, tag = "4")]
    pub log_request_response_info: bool,
    #[prost(oneof = "transformation::TransformationType", tags = "1, 2, 3")]
    pub transformation_type: ::core::option::Option<transformation::TransformationType>,
}
/// Nested message and enum types in `Transformation`.
pub mod transformation {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum TransformationType {
        #[prost(message, tag = "1")]
        TransformationTemplate(super::TransformationTemplate),
        #[prost(message, tag = "2")]
        HeaderBodyTransform(super::HeaderBodyTransform),
        #[prost(message, tag = "3")]
        XsltTransformation(super::XsltTransformation),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Extraction {
    /// The regex field specifies the regular expression used for matching against the source
    /// content.
    #[prost(string, tag = "2")]
    pub regex: ::prost::alloc::string::String,
    /// If your regex contains capturing groups, use this field to determine which group should be
    /// selected.
    #[prost(uint32, tag = "3")]
    pub subgroup: u32,
    #[prost(oneof = "extraction::Source", tags = "1, 4")]
    pub source: ::core::option::Option<extraction::Source>,
}
/// Nested message and enum types in `Extraction`.
pub mod extraction {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Source {
        /// Extract information from headers
        #[prost(string, tag = "1")]
        Header(::prost::alloc::string::String),
        /// Extract information from the request/response body
        #[prost(message, tag = "4")]
        Body(super::Passthrough),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformationTemplate {
    /// If set to true, use JSON pointer notation (e.g. "time/start") instead of dot notation (e.g.
    /// "time.start") to access JSON elements.
    #[prost(bool, tag = "1")]
    pub advanced_templates: bool,
    #[prost(map = "string, message", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub extractors: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        Extraction,
    >,
    #[prost(map = "string, message", tag = "3")]
    #[serde(with = "crate::message::map_entries")]
    pub headers: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        InjaTemplate,
    >,
    #[prost(message, repeated, tag = "10")]
    pub headers_to_append: ::prost::alloc::vec::Vec<
        transformation_template::HeaderToAppend,
    >,
    #[prost(string, repeated, tag = "11")]
    pub headers_to_remove: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(enumeration = "transformation_template::RequestBodyParse", tag = "7")]
    pub parse_body_behavior: i32,
    #[prost(bool, tag = "8")]
    pub ignore_error_on_parse: bool,
    #[prost(message, repeated, tag = "9")]
    pub dynamic_metadata_values: ::prost::alloc::vec::Vec<
        transformation_template::DynamicMetadataValue,
    >,
    #[prost(message, optional, tag = "12")]
    pub escape_characters: ::core::option::Option<bool>,
    #[prost(oneof = "transformation_template::BodyTransformation", tags = "4, 5, 6")]
    pub body_transformation: ::core::option::Option<
        transformation_template::BodyTransformation,
    >,
}
/// Nested message and enum types in `TransformationTemplate`.
pub mod transformation_template {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct HeaderToAppend {
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "2")]
        pub value: ::core::option::Option<super::InjaTemplate>,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct DynamicMetadataValue {
        #[prost(string, tag = "1")]
        pub metadata_namespace: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub key: ::prost::alloc::string::String,
        #[prost(message, optional, tag = "3")]
        pub value: ::core::option::Option<super::InjaTemplate>,
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum RequestBodyParse {
        ParseAsJson = 0,
        DontParse = 1,
    }
    impl RequestBodyParse {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                RequestBodyParse::ParseAsJson => "ParseAsJson",
                RequestBodyParse::DontParse => "DontParse",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "ParseAsJson" => Some(Self::ParseAsJson),
                "DontParse" => Some(Self::DontParse),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum BodyTransformation {
        #[prost(message, tag = "4")]
        Body(super::InjaTemplate),
        #[prost(message, tag = "5")]
        Passthrough(super::Passthrough),
        #[prost(message, tag = "6")]
        MergeExtractorsToBody(super::MergeExtractorsToBody),
    }
}
/// Defines an [Inja template](<https://github.com/pantor/inja>) that will be rendered by Gloo.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InjaTemplate {
    #[prost(string, tag = "1")]
    pub text: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Passthrough {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MergeExtractorsToBody {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderBodyTransform {
    /// When transforming a request, setting this to true will additionally add "queryString",
    /// "queryStringParameters", "multiValueQueryStringParameters", "httpMethod", "path", and
    /// "multiValueHeaders" to the body
    #[prost(bool, tag = "1")]
    pub add_request_metadata: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct XsltTransformation {
    #[prost(string, tag = "1")]
    pub xslt: ::prost::alloc::string::String,
    #[prost(bool, tag = "2")]
    pub set_content_type: bool,
    #[prost(bool, tag = "3")]
    pub non_xml_transform: bool,
}
