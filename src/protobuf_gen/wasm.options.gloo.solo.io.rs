/// Options config for WASM filters
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PluginSource {
    /// List of WASM filters to be added into the filter chain
    #[prost(message, repeated, tag = "1")]
    pub filters: ::prost::alloc::vec::Vec<WasmFilter>,
}
/// This message defines a single Envoy WASM filter to be placed into the HTTP filter chain.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WasmFilter {
    /// the stage in the filter chain where this filter should be placed
    #[prost(message, optional, tag = "3")]
    pub filter_stage: ::core::option::Option<FilterStage>,
    /// the name of the filter, used for logging
    #[prost(string, tag = "4")]
    pub name: ::prost::alloc::string::String,
    /// the root_id of the filter which should be run, if this value is incorrect, or empty the filter
    /// will crash
    #[prost(string, tag = "5")]
    pub root_id: ::prost::alloc::string::String,
    #[prost(enumeration = "wasm_filter::VmType", tag = "6")]
    pub vm_type: i32,
    #[prost(bool, tag = "7")]
    pub fail_open: bool,
    #[prost(oneof = "wasm_filter::Src", tags = "2, 8")]
    pub src: ::core::option::Option<wasm_filter::Src>,
}
/// Nested message and enum types in `WasmFilter`.
pub mod wasm_filter {
    /// represents the different types of WASM VMs available with which envoy can run the WASM filter
    /// module
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum VmType {
        V8 = 0,
        Wavm = 1,
    }
    impl VmType {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                VmType::V8 => "V8",
                VmType::Wavm => "WAVM",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "V8" => Some(Self::V8),
                "WAVM" => Some(Self::Wavm),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Src {
        /// name of image which houses the compiled wasm filter
        #[prost(string, tag = "2")]
        Image(::prost::alloc::string::String),
        /// path from which to load wasm filter from disk
        #[prost(string, tag = "8")]
        FilePath(::prost::alloc::string::String),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilterStage {
    #[prost(enumeration = "filter_stage::Stage", tag = "1")]
    pub stage: i32,
    #[prost(enumeration = "filter_stage::Predicate", tag = "2")]
    pub predicate: i32,
}
/// Nested message and enum types in `FilterStage`.
pub mod filter_stage {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Stage {
        FaultStage = 0,
        CorsStage = 1,
        WafStage = 2,
        AuthNStage = 3,
        AuthZStage = 4,
        RateLimitStage = 5,
        AcceptedStage = 6,
        OutAuthStage = 7,
        RouteStage = 8,
    }
    impl Stage {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Stage::FaultStage => "FaultStage",
                Stage::CorsStage => "CorsStage",
                Stage::WafStage => "WafStage",
                Stage::AuthNStage => "AuthNStage",
                Stage::AuthZStage => "AuthZStage",
                Stage::RateLimitStage => "RateLimitStage",
                Stage::AcceptedStage => "AcceptedStage",
                Stage::OutAuthStage => "OutAuthStage",
                Stage::RouteStage => "RouteStage",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "FaultStage" => Some(Self::FaultStage),
                "CorsStage" => Some(Self::CorsStage),
                "WafStage" => Some(Self::WafStage),
                "AuthNStage" => Some(Self::AuthNStage),
                "AuthZStage" => Some(Self::AuthZStage),
                "RateLimitStage" => Some(Self::RateLimitStage),
                "AcceptedStage" => Some(Self::AcceptedStage),
                "OutAuthStage" => Some(Self::OutAuthStage),
                "RouteStage" => Some(Self::RouteStage),
                _ => None,
            }
        }
    }
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Predicate {
        During = 0,
        Before = 1,
        After = 2,
    }
    impl Predicate {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Predicate::During => "During",
                Predicate::Before => "Before",
                Predicate::After => "After",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "During" => Some(Self::During),
                "Before" => Some(Self::Before),
                "After" => Some(Self::After),
                _ => None,
            }
        }
    }
}
