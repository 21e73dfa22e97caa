/// Parameters for matching routes to requests received by a Gloo-managed proxy
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Matcher {
    #[prost(message, optional, tag = "4")]
    pub case_sensitive: ::core::option::Option<bool>,
    #[prost(message, repeated, tag = "6")]
    pub headers: ::prost::alloc::vec::Vec<HeaderMatcher>,
    #[prost(message, repeated, tag = "7")]
    pub query_parameters: ::prost::alloc::vec::Vec<QueryParameterMatcher>,
    /// HTTP Method/Verb(s) to match on. If none specified, the matcher will ignore the HTTP Method
    #[prost(string, repeated, tag = "8")]
    pub methods: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(oneof = "matcher::PathSpecifier", tags = "1, 2, 3, 10")]
    pub path_specifier: ::core::option::Option<matcher::PathSpecifier>,
}
/// Nested message and enum types in `Matcher`.
pub mod matcher {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ConnectMatcher {}
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum PathSpecifier {
        /// If specified, the route is a prefix rule meaning that the prefix must match the beginning of
        /// the :path header.
        #[prost(string, tag = "1")]
        Prefix(::prost::alloc::string::String),
        /// If specified, the route is an exact path rule meaning that the path must exactly match the
        /// :path header once the query string is removed.
        #[prost(string, tag = "2")]
        Exact(::prost::alloc::string::String),
        /// If specified, the route is a regular expression rule meaning that the regex must match the
        /// :path header once the query string is removed.
        #[prost(string, tag = "3")]
        Regex(::prost::alloc::string::String),
        /// If this is used as the matcher, the matcher will only match CONNECT requests.
        #[prost(message, tag = "10")]
        ConnectMatcher(ConnectMatcher),
    }
}
/// Internally, Gloo always uses the HTTP/2 :authority header to represent the HTTP/1 Host header.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderMatcher {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub regex: bool,
    #[prost(bool, tag = "4")]
    pub invert_match: bool,
}
/// Query parameter matching treats the query string of a request's :path header as an ampersand-
/// separated list of keys and/or key=value elements.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryParameterMatcher {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
    #[prost(bool, tag = "3")]
    pub regex: bool,
}
