#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CorsPolicy {
    /// Specifies the origins that will be allowed to make CORS requests.
    #[prost(string, repeated, tag = "1")]
    pub allow_origin: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "2")]
    pub allow_origin_regex: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "3")]
    pub allow_methods: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "4")]
    pub allow_headers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, repeated, tag = "5")]
    pub expose_headers: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Specifies the content for the *access-control-max-age* header.
    #[prost(string, tag = "6")]
    pub max_age: ::prost::alloc::string::String,
    #[prost(bool, tag = "7")]
    pub allow_credentials: bool,
    /// Optional, only applies to route-specific CORS Policies, defaults to false.
    #[prost(bool, tag = "8")]
    pub disable_for_route: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CorsPolicyMergeSettings {
    #[prost(enumeration = "cors_policy_merge_settings::MergeStrategy", tag = "1")]
    pub expose_headers: i32,
}
/// Nested message and enum types in `CorsPolicyMergeSettings`.
pub mod cors_policy_merge_settings {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum MergeStrategy {
        Default = 0,
        Union = 1,
    }
    impl MergeStrategy {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                MergeStrategy::Default => "DEFAULT",
                MergeStrategy::Union => "UNION",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "DEFAULT" => Some(Self::Default),
                "UNION" => Some(Self::Union),
                _ => None,
            }
        }
    }
}
