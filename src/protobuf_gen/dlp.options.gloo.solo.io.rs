/// Listener level config for dlp filter
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterConfig {
    #[prost(message, repeated, tag = "1")]
    pub dlp_rules: ::prost::alloc::vec::Vec<DlpRule>,
    #[prost(enumeration = "filter_config::EnableFor", tag = "2")]
    pub enabled_for: i32,
}
/// Nested message and enum types in `FilterConfig`.
pub mod filter_config {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum EnableFor {
        ResponseBody = 0,
        AccessLogs = 1,
        All = 2,
    }
    impl EnableFor {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                EnableFor::ResponseBody => "RESPONSE_BODY",
                EnableFor::AccessLogs => "ACCESS_LOGS",
                EnableFor::All => "ALL",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "RESPONSE_BODY" => Some(Self::ResponseBody),
                "ACCESS_LOGS" => Some(Self::AccessLogs),
                "ALL" => Some(Self::All),
                _ => None,
            }
        }
    }
}
/// Rule which applies to a given route
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DlpRule {
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<
        super::super::super::super::super::matchers::core::gloo::solo::io::Matcher,
    >,
    #[prost(message, repeated, tag = "2")]
    pub actions: ::prost::alloc::vec::Vec<Action>,
}
/// Route/Virtual host level config for dlp filter
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Config {
    #[prost(message, repeated, tag = "1")]
    pub actions: ::prost::alloc::vec::Vec<Action>,
    #[prost(enumeration = "filter_config::EnableFor", tag = "2")]
    pub enabled_for: i32,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    #[prost(enumeration = "action::ActionType", tag = "1")]
    pub action_type: i32,
    #[prost(message, optional, tag = "2")]
    pub custom_action: ::core::option::Option<CustomAction>,
    /// Shadow represents whether the action should be taken, or just recorded.
    #[prost(bool, tag = "3")]
    pub shadow: bool,
}
/// Nested message and enum types in `Action`.
pub mod action {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum ActionType {
        Custom = 0,
        Ssn = 1,
        Mastercard = 2,
        Visa = 3,
        Amex = 4,
        Discover = 5,
        Jcb = 6,
        DinersClub = 7,
        CreditCardTrackers = 8,
        AllCreditCards = 9,
    }
    impl ActionType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                ActionType::Custom => "CUSTOM",
                ActionType::Ssn => "SSN",
                ActionType::Mastercard => "MASTERCARD",
                ActionType::Visa => "VISA",
                ActionType::Amex => "AMEX",
                ActionType::Discover => "DISCOVER",
                ActionType::Jcb => "JCB",
                ActionType::DinersClub => "DINERS_CLUB",
                ActionType::CreditCardTrackers => "CREDIT_CARD_TRACKERS",
                ActionType::AllCreditCards => "ALL_CREDIT_CARDS",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "CUSTOM" => Some(Self::Custom),
                "SSN" => Some(Self::Ssn),
                "MASTERCARD" => Some(Self::Mastercard),
                "VISA" => Some(Self::Visa),
                "AMEX" => Some(Self::Amex),
                "DISCOVER" => Some(Self::Discover),
                "JCB" => Some(Self::Jcb),
                "DINERS_CLUB" => Some(Self::DinersClub),
                "CREDIT_CARD_TRACKERS" => Some(Self::CreditCardTrackers),
                "ALL_CREDIT_CARDS" => Some(Self::AllCreditCards),
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
pub struct CustomAction {
    /// The name of the custom action.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The regex strings which are applied to the string in order to mask the sensitive data.
    #[prost(string, repeated, tag = "2")]
    pub regex: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// The masking character for the sensitive data.
    #[prost(string, tag = "3")]
    pub mask_char: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "4")]
    pub percent: ::core::option::Option<f32>,
}
