/// A upstream that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedUpstreamSpec {
    /// Template for the upstream to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_upstream_spec::Template>,
    /// Clusters and namespaces the upstream is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedUpstreamSpec`.
pub mod federated_upstream_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gloo::solo::io::UpstreamSpec,
        >,
        #[prost(message, optional, tag = "2")]
        pub metadata: ::core::option::Option<
            super::super::super::super::solo::io::TemplateMetadata,
        >,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedUpstreamStatus {
    /// The placement status written by the federation controller.
    #[prost(message, optional, tag = "1")]
    pub placement_status: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::PlacementStatus,
    >,
    /// Placement status keyed by the namespace of the controller that wrote it.
    #[prost(map = "string, message", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub namespaced_placement_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        super::super::super::super::multicluster::solo::io::PlacementStatus,
    >,
}
/// A upstream group that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedUpstreamGroupSpec {
    /// Template for the upstream group to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_upstream_group_spec::Template>,
    /// Clusters and namespaces the upstream group is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedUpstreamGroupSpec`.
pub mod federated_upstream_group_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gloo::solo::io::UpstreamGroupSpec,
        >,
        #[prost(message, optional, tag = "2")]
        pub metadata: ::core::option::Option<
            super::super::super::super::solo::io::TemplateMetadata,
        >,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedUpstreamGroupStatus {
    /// The placement status written by the federation controller.
    #[prost(message, optional, tag = "1")]
    pub placement_status: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::PlacementStatus,
    >,
    /// Placement status keyed by the namespace of the controller that wrote it.
    #[prost(map = "string, message", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub namespaced_placement_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        super::super::super::super::multicluster::solo::io::PlacementStatus,
    >,
}
/// A settings object that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedSettingsSpec {
    /// Template for the settings object to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_settings_spec::Template>,
    /// Clusters and namespaces the settings object is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedSettingsSpec`.
pub mod federated_settings_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gloo::solo::io::SettingsSpec,
        >,
        #[prost(message, optional, tag = "2")]
        pub metadata: ::core::option::Option<
            super::super::super::super::solo::io::TemplateMetadata,
        >,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedSettingsStatus {
    /// The placement status written by the federation controller.
    #[prost(message, optional, tag = "1")]
    pub placement_status: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::PlacementStatus,
    >,
    /// Placement status keyed by the namespace of the controller that wrote it.
    #[prost(map = "string, message", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub namespaced_placement_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        super::super::super::super::multicluster::solo::io::PlacementStatus,
    >,
}
