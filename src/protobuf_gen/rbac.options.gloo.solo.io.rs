/// Global RBAC settings
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Settings {
    /// Require RBAC for all virtual hosts.
    #[prost(bool, tag = "1")]
    pub require_rbac: bool,
}
/// RBAC settings for Virtual Hosts and Routes.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExtensionSettings {
    /// Disable RBAC checks on this resource (default false).
    #[prost(bool, tag = "1")]
    pub disable: bool,
    /// Named policies to apply.
    #[prost(map = "string, message", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub policies: ::std::collections::HashMap<::prost::alloc::string::String, Policy>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Policy {
    /// Principals in this policy.
    #[prost(message, repeated, tag = "1")]
    pub principals: ::prost::alloc::vec::Vec<Principal>,
    /// List of permissions that the principals have access to.
    #[prost(message, optional, tag = "2")]
    pub permissions: ::core::option::Option<Permissions>,
    /// Allow elements of a principal's claims to be nested objects or arrays.
    #[prost(message, optional, tag = "3")]
    pub nested_claim_delimiter: ::core::option::Option<policy::NestedClaimDelimiter>,
}
/// Nested message and enum types in `Policy`.
pub mod policy {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct NestedClaimDelimiter {
        #[prost(string, tag = "1")]
        pub delimiter: ::prost::alloc::string::String,
    }
}
/// An RBAC principal - the identity entity (usually a user or a service account).
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Principal {
    #[prost(message, optional, tag = "1")]
    pub jwt_principal: ::core::option::Option<JwtPrincipal>,
}
/// A JWT principal. To use this, JWT option MUST be enabled.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct JwtPrincipal {
    /// Set of claims that make up this principal.
    #[prost(map = "string, string", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub claims: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Verify that the JWT came from a specific provider.
    #[prost(string, tag = "2")]
    pub provider: ::prost::alloc::string::String,
    #[prost(enumeration = "jwt_principal::ClaimMatcher", tag = "3")]
    pub matcher: i32,
}
/// Nested message and enum types in `JWTPrincipal`.
pub mod jwt_principal {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ClaimMatcher {
        ExactString = 0,
        Boolean = 1,
        ListContains = 2,
    }
    impl ClaimMatcher {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ClaimMatcher::ExactString => "EXACT_STRING",
                ClaimMatcher::Boolean => "BOOLEAN",
                ClaimMatcher::ListContains => "LIST_CONTAINS",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "EXACT_STRING" => Some(Self::ExactString),
                "BOOLEAN" => Some(Self::Boolean),
                "LIST_CONTAINS" => Some(Self::ListContains),
                _ => None,
            }
        }
    }
}
/// What permissions should be granted. An empty field means allow-all.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Permissions {
    /// Paths that have this prefix will be allowed.
    #[prost(string, tag = "1")]
    pub path_prefix: ::prost::alloc::string::String,
    /// What http methods (GET, POST, ...) are allowed.
    #[prost(string, repeated, tag = "2")]
    pub methods: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
