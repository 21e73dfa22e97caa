/// A gateway that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedGatewaySpec {
    /// Template for the gateway to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_gateway_spec::Template>,
    /// Clusters and namespaces the gateway is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedGatewaySpec`.
pub mod federated_gateway_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gateway::solo::io::GatewaySpec,
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
pub struct FederatedGatewayStatus {
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
/// A matchable HTTP gateway that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedMatchableHttpGatewaySpec {
    /// Template for the matchable HTTP gateway to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<
        federated_matchable_http_gateway_spec::Template,
    >,
    /// Clusters and namespaces the matchable HTTP gateway is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedMatchableHttpGatewaySpec`.
pub mod federated_matchable_http_gateway_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gateway::solo::io::MatchableHttpGatewaySpec,
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
pub struct FederatedMatchableHttpGatewayStatus {
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
/// A matchable TCP gateway that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedMatchableTcpGatewaySpec {
    /// Template for the matchable TCP gateway to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_matchable_tcp_gateway_spec::Template>,
    /// Clusters and namespaces the matchable TCP gateway is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedMatchableTcpGatewaySpec`.
pub mod federated_matchable_tcp_gateway_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gateway::solo::io::MatchableTcpGatewaySpec,
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
pub struct FederatedMatchableTcpGatewayStatus {
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
/// A virtual service that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedVirtualServiceSpec {
    /// Template for the virtual service to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_virtual_service_spec::Template>,
    /// Clusters and namespaces the virtual service is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedVirtualServiceSpec`.
pub mod federated_virtual_service_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gateway::solo::io::VirtualServiceSpec,
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
pub struct FederatedVirtualServiceStatus {
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
/// A route table that is placed into every selected cluster and namespace.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedRouteTableSpec {
    /// Template for the route table to place.
    #[prost(message, optional, tag = "1")]
    pub template: ::core::option::Option<federated_route_table_spec::Template>,
    /// Clusters and namespaces the route table is placed into.
    #[prost(message, optional, tag = "2")]
    pub placement: ::core::option::Option<
        super::super::super::super::multicluster::solo::io::Placement,
    >,
}
/// Nested message and enum types in `FederatedRouteTableSpec`.
pub mod federated_route_table_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Template {
        #[prost(message, optional, tag = "1")]
        pub spec: ::core::option::Option<
            super::super::super::super::super::gateway::solo::io::RouteTableSpec,
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
pub struct FederatedRouteTableStatus {
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
