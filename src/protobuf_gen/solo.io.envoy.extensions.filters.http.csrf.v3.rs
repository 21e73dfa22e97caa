/// CSRF filter config.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CsrfPolicy {
    /// Specifies the % of requests for which the CSRF filter is enabled.
    #[prost(message, optional, tag = "1")]
    pub filter_enabled: ::core::option::Option<
        super::super::super::super::super::config::core::v3::RuntimeFractionalPercent,
    >,
    /// Specifies that CSRF policies will be evaluated and tracked, but not enforced.
    #[prost(message, optional, tag = "2")]
    pub shadow_enabled: ::core::option::Option<
        super::super::super::super::super::config::core::v3::RuntimeFractionalPercent,
    >,
    /// Specifies additional source origins that will be allowed in addition to the destination
    /// origin.
    #[prost(message, repeated, tag = "3")]
    pub additional_origins: ::prost::alloc::vec::Vec<
        super::super::super::super::super::r#type::matcher::v3::StringMatcher,
    >,
}
