#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Settings {
    /// Disable waf on this resource (if omitted defaults to false).
    #[prost(bool, tag = "1")]
    pub disabled: bool,
    #[prost(string, tag = "2")]
    pub custom_intervention_message: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "3")]
    pub core_rule_set: ::core::option::Option<CoreRuleSet>,
    #[prost(message, repeated, tag = "4")]
    pub rule_sets: ::prost::alloc::vec::Vec<RuleSet>,
    #[prost(message, optional, tag = "5")]
    pub audit_logging: ::core::option::Option<AuditLogging>,
    #[prost(bool, tag = "6")]
    pub request_headers_only: bool,
    #[prost(bool, tag = "7")]
    pub response_headers_only: bool,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RuleSet {
    #[prost(string, tag = "1")]
    pub rule_str: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "2")]
    pub files: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(string, tag = "3")]
    pub directory: ::prost::alloc::string::String,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CoreRuleSet {
    #[prost(oneof = "core_rule_set::CustomSettingsType", tags = "2, 3")]
    pub custom_settings_type: ::core::option::Option<core_rule_set::CustomSettingsType>,
}
/// Nested message and enum types in `CoreRuleSet`.
pub mod core_rule_set {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum CustomSettingsType {
        /// String representing the core rule set custom config options
        #[prost(string, tag = "2")]
        CustomSettingsString(::prost::alloc::string::String),
        /// String representing a path to a file with core rule set custom config options
        #[prost(string, tag = "3")]
        CustomSettingsFile(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AuditLogging {
    #[prost(enumeration = "audit_logging::AuditLogAction", tag = "1")]
    pub action: i32,
    #[prost(enumeration = "audit_logging::AuditLogLocation", tag = "2")]
    pub location: i32,
}
/// Nested message and enum types in `AuditLogging`.
pub mod audit_logging {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum AuditLogAction {
        Never = 0,
        RelevantOnly = 1,
        Always = 2,
    }
    impl AuditLogAction {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                AuditLogAction::Never => "NEVER",
                AuditLogAction::RelevantOnly => "RELEVANT_ONLY",
                AuditLogAction::Always => "ALWAYS",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "NEVER" => Some(Self::Never),
                "RELEVANT_ONLY" => Some(Self::RelevantOnly),
                "ALWAYS" => Some(Self::Always),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum AuditLogLocation {
        FilterState = 0,
        DynamicMetadata = 1,
    }
    impl AuditLogLocation {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                AuditLogLocation::FilterState => "FILTER_STATE",
                AuditLogLocation::DynamicMetadata => "DYNAMIC_METADATA",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "FILTER_STATE" => Some(Self::FilterState),
                "DYNAMIC_METADATA" => Some(Self::DynamicMetadata),
                _ => None,
            }
        }
    }
}
