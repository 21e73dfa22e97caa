/// A Gateway describes a single Listener (bind address:port) and the routing configuration to
/// upstreams that are reachable via a specific port on the Gateway Proxy itself.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GatewaySpec {
    /// if set to false, only use virtual services without ssl configured.
    /// if set to true, only use virtual services with ssl configured.
    #[prost(message, optional, tag = "1")]
    pub ssl: ::core::option::Option<bool>,
    /// the bind address the gateway should serve traffic on
    #[prost(string, tag = "3")]
    pub bind_address: ::prost::alloc::string::String,
    /// bind ports must not conflict across gateways for a single proxy
    #[prost(uint32, tag = "4")]
    pub bind_port: u32,
    /// top level optional configuration for all routes on the gateway
    #[prost(message, optional, tag = "5")]
    pub options: ::core::option::Option<
        super::super::super::gloo::solo::io::ListenerOptions,
    >,
    /// Enable ProxyProtocol support for this listener.
    #[prost(message, optional, tag = "8")]
    pub use_proxy_proto: ::core::option::Option<bool>,
    /// Names of the [`Proxy`](<https://gloo.solo.io/api/github.com/solo-io/gloo/projects/gloo/api/v1/proxy.proto.sk/>)
    /// resources to generate from this gateway. If other gateways exist which point to the same
    /// proxy, Gloo will join them together.
    #[prost(string, repeated, tag = "12")]
    pub proxy_names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Route configuration options that live under Envoy's
    /// [RouteConfigurationOptions](<https://www.envoyproxy.io/docs/envoy/latest/api-v3/config/route/v3/route.proto#config-route-v3-routeconfiguration>)
    #[prost(message, optional, tag = "13")]
    pub route_options: ::core::option::Option<
        super::super::super::gloo::solo::io::RouteConfigurationOptions,
    >,
    /// The type of gateway being created
    /// HttpGateway creates a listener with an http_connection_manager
    /// TcpGateway creates a listener with a tcp proxy filter
    /// HybridGateway creates a listener with any number of filter chains that each may have either an
    /// http_connection_manager or a tcp proxy filter
    #[prost(oneof = "gateway_spec::GatewayType", tags = "9, 10, 11")]
    pub gateway_type: ::core::option::Option<gateway_spec::GatewayType>,
}
/// Nested message and enum types in `GatewaySpec`.
pub mod gateway_spec {
    /// The type of gateway being created
    /// HttpGateway creates a listener with an http_connection_manager
    /// TcpGateway creates a listener with a tcp proxy filter
    /// HybridGateway creates a listener with any number of filter chains that each may have either an
    /// http_connection_manager or a tcp proxy filter
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum GatewayType {
        #[prost(message, tag = "9")]
        HttpGateway(super::HttpGateway),
        #[prost(message, tag = "10")]
        TcpGateway(super::TcpGateway),
        #[prost(message, tag = "11")]
        HybridGateway(super::HybridGateway),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HttpGateway {
    /// Names & namespace refs of the virtual services which contain the actual routes for the gateway.
    /// If the list is empty, all virtual services in all namespaces that Gloo watches will apply,
    /// with accordance to `ssl` flag on `Gateway` above.
    /// The default namespace matching behavior can be overridden via `virtual_service_namespaces`
    /// flag below.
    /// Only one of `virtualServices`, `virtualServiceExpressions` or `virtualServiceSelector` should
    /// be provided. If more than one is provided only one will be checked with priority
    /// virtualServiceExpressions, virtualServiceSelector, virtualServices
    #[prost(message, repeated, tag = "1")]
    pub virtual_services: ::prost::alloc::vec::Vec<
        super::super::super::core::solo::io::ResourceRef,
    >,
    /// Select virtual services by their label. If `virtual_service_namespaces` is provided below,
    /// this will apply only to virtual services in the namespaces specified.
    #[prost(map = "string, string", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub virtual_service_selector: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Select virtual services using expressions. If `virtual_service_namespaces` is provided below,
    /// this will apply only to virtual services in the namespaces specified.
    #[prost(message, optional, tag = "9")]
    pub virtual_service_expressions: ::core::option::Option<
        VirtualServiceSelectorExpressions,
    >,
    /// Restrict the search by providing a list of valid search namespaces here.
    /// Setting '*' will search all namespaces, equivalent to omitting this value.
    #[prost(string, repeated, tag = "3")]
    pub virtual_service_namespaces: ::prost::alloc::vec::Vec<
        ::prost::alloc::string::String,
    >,
    /// HTTP Gateway configuration
    #[prost(message, optional, tag = "8")]
    pub options: ::core::option::Option<
        super::super::super::gloo::solo::io::HttpListenerOptions,
    >,
}
/// Expressions to define which virtual services to select
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualServiceSelectorExpressions {
    /// Expressions allow for more flexible virtual service label matching, such as equality-based
    /// requirements, set-based requirements, or a combination of both.
    #[prost(message, repeated, tag = "3")]
    pub expressions: ::prost::alloc::vec::Vec<
        virtual_service_selector_expressions::Expression,
    >,
}
/// Nested message and enum types in `VirtualServiceSelectorExpressions`.
pub mod virtual_service_selector_expressions {
    /// Expressions allow for more flexible virtual service label matching, such as equality-based
    /// requirements, set-based requirements, or a combination of both.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Expression {
        /// Kubernetes label key, must conform to Kubernetes syntax requirements
        /// <https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/#syntax-and-character-set>
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        /// The operator can only be in, notin, =, ==, !=, exists, ! (DoesNotExist), gt (GreaterThan),
        /// lt (LessThan).
        #[prost(enumeration = "expression::Operator", tag = "2")]
        pub operator: i32,
        #[prost(string, repeated, tag = "3")]
        pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    /// Nested message and enum types in `Expression`.
    pub mod expression {
        /// Virtual Service Selector expression operator, while the set-based syntax differs from
        /// Kubernetes (kubernetes: `key: !mylabel`, gloo: `key: mylabel, operator: "!"` | kubernetes:
        /// `key: mylabel`, gloo: `key: mylabel, operator: exists`), the functionality remains the same.
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Operator {
            /// =
            Equals = 0,
            /// ==
            DoubleEquals = 1,
            /// !=
            NotEquals = 2,
            /// in
            In = 3,
            /// notin
            NotIn = 4,
            /// exists
            Exists = 5,
            /// !
            DoesNotExist = 6,
            /// gt
            GreaterThan = 7,
            /// lt
            LessThan = 8,
        }
        impl Operator {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Operator::Equals => "Equals",
                    Operator::DoubleEquals => "DoubleEquals",
                    Operator::NotEquals => "NotEquals",
                    Operator::In => "In",
                    Operator::NotIn => "NotIn",
                    Operator::Exists => "Exists",
                    Operator::DoesNotExist => "DoesNotExist",
                    Operator::GreaterThan => "GreaterThan",
                    Operator::LessThan => "LessThan",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "Equals" => Some(Self::Equals),
                    "DoubleEquals" => Some(Self::DoubleEquals),
                    "NotEquals" => Some(Self::NotEquals),
                    "In" => Some(Self::In),
                    "NotIn" => Some(Self::NotIn),
                    "Exists" => Some(Self::Exists),
                    "DoesNotExist" => Some(Self::DoesNotExist),
                    "GreaterThan" => Some(Self::GreaterThan),
                    "LessThan" => Some(Self::LessThan),
                    _ => None,
                }
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TcpGateway {
    /// TCP hosts that the gateway can route to
    #[prost(message, repeated, tag = "1")]
    pub tcp_hosts: ::prost::alloc::vec::Vec<
        super::super::super::gloo::solo::io::TcpHost,
    >,
    /// TCP Gateway configuration
    #[prost(message, optional, tag = "8")]
    pub options: ::core::option::Option<
        super::super::super::gloo::solo::io::TcpListenerOptions,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HybridGateway {
    /// MatchedGateways can be used to configure both HttpGateways and TcpGateways on the same port.
    #[prost(message, repeated, tag = "1")]
    pub matched_gateways: ::prost::alloc::vec::Vec<MatchedGateway>,
    /// Delegate HTTP filter chains to MatchableHttpGateway resources.
    #[prost(message, optional, tag = "2")]
    pub delegated_http_gateways: ::core::option::Option<DelegatedHttpGateway>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DelegatedHttpGateway {
    /// Used as a meta modifier to the HttpGateway options.
    #[prost(bool, tag = "1")]
    pub prevent_child_overrides: bool,
    /// Used as the base HTTP Connection Manager settings that matchable gateways inherit.
    #[prost(message, optional, tag = "2")]
    pub http_connection_manager_settings: ::core::option::Option<
        super::super::super::hcm::options::gloo::solo::io::HttpConnectionManagerSettings,
    >,
    /// Used as the base SslConfig that matchable gateways inherit.
    #[prost(message, optional, tag = "5")]
    pub ssl_config: ::core::option::Option<
        super::super::super::gloo::solo::io::SslConfig,
    >,
    #[prost(oneof = "delegated_http_gateway::SelectionType", tags = "3, 4")]
    pub selection_type: ::core::option::Option<delegated_http_gateway::SelectionType>,
}
/// Nested message and enum types in `DelegatedHttpGateway`.
pub mod delegated_http_gateway {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum SelectionType {
        /// Delegate to the resource with the given `name` and `namespace.
        #[prost(message, tag = "3")]
        Ref(super::super::super::super::core::solo::io::ResourceRef),
        /// Delegate to the MatchableHTTPGateways that match the given selector.
        #[prost(message, tag = "4")]
        Selector(super::super::super::super::selectors::core::gloo::solo::io::Selector),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchedGateway {
    /// Matchers are used to define unique matching criteria for each MatchedGateway
    /// Each MatchedGateway within a HybridGateway must have a unique Matcher
    /// If multiple MatchedGateways have the same Matcher, a rejection will occur
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<Matcher>,
    /// The type of gateway being created
    #[prost(oneof = "matched_gateway::GatewayType", tags = "2, 3")]
    pub gateway_type: ::core::option::Option<matched_gateway::GatewayType>,
}
/// Nested message and enum types in `MatchedGateway`.
pub mod matched_gateway {
    /// The type of gateway being created
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum GatewayType {
        #[prost(message, tag = "2")]
        HttpGateway(super::HttpGateway),
        #[prost(message, tag = "3")]
        TcpGateway(super::TcpGateway),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Matcher {
    /// Gloo use SNI domains as matching criteria for Gateway selection.
    /// The other ssl_config properties will be applied to the outputFilterChain's transport socket.
    /// SslConfig from VirtualServices will be ignored in a MatchedGateway.
    #[prost(message, optional, tag = "1")]
    pub ssl_config: ::core::option::Option<
        super::super::super::gloo::solo::io::SslConfig,
    >,
    /// CidrRange specifies an IP Address and a prefix length to construct the subnet mask for a CIDR
    /// range. See <https://www.envoyproxy.io/docs/envoy/latest/api-v3/config/core/v3/address.proto#envoy-v3-api-msg-config-core-v3-cidrrange>
    #[prost(message, repeated, tag = "2")]
    pub source_prefix_ranges: ::prost::alloc::vec::Vec<
        super::super::super::solo::io::envoy::config::core::v3::CidrRange,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GatewayStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "gateway_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources. If the resource is pending or
    /// accepted, this field will be empty
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        GatewayStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `GatewayStatus`.
pub mod gateway_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        /// Rejected resources may be propagated to the xDS server depending on their severity
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
        /// Resources with Warnings may be partially accepted by a controller, depending on the
        /// implementation
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "PENDING",
                State::Accepted => "ACCEPTED",
                State::Rejected => "REJECTED",
                State::Warning => "WARNING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "ACCEPTED" => Some(Self::Accepted),
                "REJECTED" => Some(Self::Rejected),
                "WARNING" => Some(Self::Warning),
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
pub struct GatewayNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        GatewayStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchableHttpGatewaySpec {
    /// Matchers are used to define unique matching criteria for each MatchableHttpGateway
    /// Each MatchableHttpGateway within a HybridGateway must have a unique Matcher
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<matchable_http_gateway_spec::Matcher>,
    /// HttpGateway creates a listener with an http_connection_manager
    #[prost(message, optional, tag = "2")]
    pub http_gateway: ::core::option::Option<HttpGateway>,
}
/// Nested message and enum types in `MatchableHttpGatewaySpec`.
pub mod matchable_http_gateway_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Matcher {
        /// CidrRange specifies an IP Address and a prefix length to construct the subnet mask for a
        /// CIDR range.
        #[prost(message, repeated, tag = "1")]
        pub source_prefix_ranges: ::prost::alloc::vec::Vec<
            super::super::super::super::solo::io::envoy::config::core::v3::CidrRange,
        >,
        /// Ssl configuration applied to the FilterChain.
        #[prost(message, optional, tag = "2")]
        pub ssl_config: ::core::option::Option<
            super::super::super::super::gloo::solo::io::SslConfig,
        >,
        /// Cipher suites that are passed through to the upstream without TLS termination.
        #[prost(string, repeated, tag = "3")]
        pub passthrough_cipher_suites: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchableHttpGatewayStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "matchable_http_gateway_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        MatchableHttpGatewayStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `MatchableHttpGatewayStatus`.
pub mod matchable_http_gateway_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "PENDING",
                State::Accepted => "ACCEPTED",
                State::Rejected => "REJECTED",
                State::Warning => "WARNING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "ACCEPTED" => Some(Self::Accepted),
                "REJECTED" => Some(Self::Rejected),
                "WARNING" => Some(Self::Warning),
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
pub struct MatchableHttpGatewayNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        MatchableHttpGatewayStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchableTcpGatewaySpec {
    /// Matchers are used to define unique matching criteria for each MatchableTcpGateway
    /// Each MatchableTcpGateway within a HybridGateway must have a unique Matcher
    #[prost(message, optional, tag = "1")]
    pub matcher: ::core::option::Option<matchable_tcp_gateway_spec::Matcher>,
    /// TcpGateway creates a listener with a tcp proxy filter
    #[prost(message, optional, tag = "2")]
    pub tcp_gateway: ::core::option::Option<TcpGateway>,
}
/// Nested message and enum types in `MatchableTcpGatewaySpec`.
pub mod matchable_tcp_gateway_spec {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Matcher {
        /// CidrRange specifies an IP Address and a prefix length to construct the subnet mask for a
        /// CIDR range.
        #[prost(message, repeated, tag = "1")]
        pub source_prefix_ranges: ::prost::alloc::vec::Vec<
            super::super::super::super::solo::io::envoy::config::core::v3::CidrRange,
        >,
        /// Ssl configuration applied to the FilterChain.
        #[prost(message, optional, tag = "2")]
        pub ssl_config: ::core::option::Option<
            super::super::super::super::gloo::solo::io::SslConfig,
        >,
        /// Cipher suites that are passed through to the upstream without TLS termination.
        #[prost(string, repeated, tag = "3")]
        pub passthrough_cipher_suites: ::prost::alloc::vec::Vec<
            ::prost::alloc::string::String,
        >,
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MatchableTcpGatewayStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "matchable_tcp_gateway_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        MatchableTcpGatewayStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `MatchableTcpGatewayStatus`.
pub mod matchable_tcp_gateway_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "PENDING",
                State::Accepted => "ACCEPTED",
                State::Rejected => "REJECTED",
                State::Warning => "WARNING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "ACCEPTED" => Some(Self::Accepted),
                "REJECTED" => Some(Self::Rejected),
                "WARNING" => Some(Self::Warning),
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
pub struct MatchableTcpGatewayNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        MatchableTcpGatewayStatus,
    >,
}
/// The **VirtualService** is the root routing object for the Gloo Gateway.
/// A virtual service describes the set of routes to match for a set of domains.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualServiceSpec {
    /// The VirtualHost contains the The list of HTTP routes define routing actions to be taken for
    /// incoming HTTP requests whose host header matches this virtual host.
    #[prost(message, optional, tag = "1")]
    pub virtual_host: ::core::option::Option<VirtualHost>,
    /// If provided, the Gateway will serve TLS/SSL traffic for this set of routes
    #[prost(message, optional, tag = "2")]
    pub ssl_config: ::core::option::Option<
        super::super::super::gloo::solo::io::SslConfig,
    >,
    /// Display only, optional descriptive name.
    /// Unlike metadata.name, DisplayName can be any string and can be changed after creating the
    /// resource.
    #[prost(string, tag = "3")]
    pub display_name: ::prost::alloc::string::String,
}
/// Virtual Hosts serve an ordered list of routes for a set of domains.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualHost {
    /// The list of domains (i.e.: matching the `Host` header of a request) that belong to this virtual
    /// host.
    #[prost(string, repeated, tag = "2")]
    pub domains: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// The list of HTTP routes define routing actions to be taken for incoming HTTP requests whose
    /// host header matches this virtual host.
    #[prost(message, repeated, tag = "3")]
    pub routes: ::prost::alloc::vec::Vec<Route>,
    /// Virtual host options contain additional configuration to be applied to all traffic served by
    /// the Virtual Host.
    #[prost(message, optional, tag = "4")]
    pub options: ::core::option::Option<
        super::super::super::gloo::solo::io::VirtualHostOptions,
    >,
    /// Delegate the VirtualHost options to an external VirtualHostOption Resource.
    #[prost(message, optional, tag = "5")]
    pub options_config_refs: ::core::option::Option<DelegateOptionsRefs>,
}
/// A route specifies how to match a request and what action to take when the request is matched.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    /// Matchers contain parameters for matching requests (i.e., based on HTTP path, headers, etc.).
    #[prost(message, repeated, tag = "1")]
    pub matchers: ::prost::alloc::vec::Vec<
        super::super::super::matchers::core::gloo::solo::io::Matcher,
    >,
    /// Whether this route as a child should inherit headers, methods, and query parameter matchers
    /// from the parent.
    #[prost(message, optional, tag = "8")]
    pub inheritable_matchers: ::core::option::Option<bool>,
    /// Whether this route as a child should inherit path matchers (i.e., path itself, case-sensitive
    /// setting) from the parent.
    #[prost(message, optional, tag = "9")]
    pub inheritable_path_matchers: ::core::option::Option<bool>,
    /// Route Options extend the behavior of routes.
    #[prost(message, optional, tag = "6")]
    pub options: ::core::option::Option<
        super::super::super::gloo::solo::io::RouteOptions,
    >,
    /// The name provides a convenience for users to be able to refer to a route by name.
    #[prost(string, tag = "7")]
    pub name: ::prost::alloc::string::String,
    /// Delegate the Route options to an external RouteOption Resource.
    #[prost(message, optional, tag = "10")]
    pub options_config_refs: ::core::option::Option<DelegateOptionsRefs>,
    /// The Route Action Defines what action the proxy should take when a request matches the route.
    #[prost(oneof = "route::Action", tags = "2, 3, 4, 5, 11")]
    pub action: ::core::option::Option<route::Action>,
}
/// Nested message and enum types in `Route`.
pub mod route {
    /// The Route Action Defines what action the proxy should take when a request matches the route.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Action {
        /// This action is the primary action to be selected for most routes.
        #[prost(message, tag = "2")]
        RouteAction(super::super::super::super::gloo::solo::io::RouteAction),
        /// Redirect actions tell the proxy to return a redirect response to the downstream client.
        #[prost(message, tag = "3")]
        RedirectAction(super::super::super::super::gloo::solo::io::RedirectAction),
        /// Return an arbitrary HTTP response directly, without proxying.
        #[prost(message, tag = "4")]
        DirectResponseAction(
            super::super::super::super::gloo::solo::io::DirectResponseAction,
        ),
        /// Delegate routing actions for the given matcher to one or more RouteTables.
        #[prost(message, tag = "5")]
        DelegateAction(super::DelegateAction),
        /// Enterprise-only: A GraphQLApi to execute against.
        #[prost(message, tag = "11")]
        GraphqlApiRef(super::super::super::super::core::skv2::solo::io::ObjectRef),
    }
}
/// DelegateActions are used to delegate routing decisions to Route Tables.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DelegateAction {
    /// The name of the Route Table to delegate to.
    /// Deprecated: these fields have been added for backwards-compatibility. Please use the `ref`
    /// field.
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
    /// The namespace of the Route Table to delegate to.
    /// Deprecated: these fields have been added for backwards-compatibility. Please use the `ref`
    /// field.
    #[prost(string, tag = "2")]
    pub namespace: ::prost::alloc::string::String,
    #[prost(oneof = "delegate_action::DelegationType", tags = "3, 4")]
    pub delegation_type: ::core::option::Option<delegate_action::DelegationType>,
}
/// Nested message and enum types in `DelegateAction`.
pub mod delegate_action {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum DelegationType {
        /// Delegate to the Route Table resource with the given `name` and `namespace.
        #[prost(message, tag = "3")]
        Ref(super::super::super::super::core::solo::io::ResourceRef),
        /// Delegate to the Route Tables that match the given selector.
        #[prost(message, tag = "4")]
        Selector(super::RouteTableSelector),
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DelegateOptionsRefs {
    /// List of resource refs to Option CRs
    #[prost(message, repeated, tag = "1")]
    pub delegate_options: ::prost::alloc::vec::Vec<
        super::super::super::core::solo::io::ResourceRef,
    >,
}
/// Select route tables for delegation by namespace, labels, or both.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteTableSelector {
    /// Delegate to Route Tables in these namespaces. If omitted, Gloo will only select Route Tables in
    /// the same namespace as the resource (Virtual Service or Route Table) that owns this selector.
    #[prost(string, repeated, tag = "1")]
    pub namespaces: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    /// Delegate to Route Tables whose labels match the ones specified here.
    #[prost(map = "string, string", tag = "2")]
    #[serde(with = "crate::message::map_entries")]
    pub labels: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        ::prost::alloc::string::String,
    >,
    /// Expressions allow for more flexible Route Tables label matching.
    #[prost(message, repeated, tag = "3")]
    pub expressions: ::prost::alloc::vec::Vec<route_table_selector::Expression>,
}
/// Nested message and enum types in `RouteTableSelector`.
pub mod route_table_selector {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[serde(default)]
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Expression {
        /// Kubernetes label key, must conform to Kubernetes syntax requirements
        #[prost(string, tag = "1")]
        pub key: ::prost::alloc::string::String,
        /// The operator can only be in, notin, =, ==, !=, exists, ! (DoesNotExist), gt (GreaterThan),
        /// lt (LessThan).
        #[prost(enumeration = "expression::Operator", tag = "2")]
        pub operator: i32,
        #[prost(string, repeated, tag = "3")]
        pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    }
    /// Nested message and enum types in `Expression`.
    pub mod expression {
        /// Route Table Selector expression operator, while the set-based syntax differs from
        /// Kubernetes, the functionality remains the same.
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
        #[repr(i32)]
        pub enum Operator {
            /// =
            Equals = 0,
            /// ==
            DoubleEquals = 1,
            /// !=
            NotEquals = 2,
            /// in
            In = 3,
            /// notin
            NotIn = 4,
            /// exists
            Exists = 5,
            /// !
            DoesNotExist = 6,
            /// gt
            GreaterThan = 7,
            /// lt
            LessThan = 8,
        }
        impl Operator {
            /// String value of the enum field names used in the ProtoBuf definition.
            ///
            /// The values are not transformed in any way and thus are considered stable
            /// (if the ProtoBuf definition does not change) and safe for programmatic use.
            pub fn as_str_name(&self) -> &'static str {
                match self {
                    Operator::Equals => "Equals",
                    Operator::DoubleEquals => "DoubleEquals",
                    Operator::NotEquals => "NotEquals",
                    Operator::In => "In",
                    Operator::NotIn => "NotIn",
                    Operator::Exists => "Exists",
                    Operator::DoesNotExist => "DoesNotExist",
                    Operator::GreaterThan => "GreaterThan",
                    Operator::LessThan => "LessThan",
                }
            }
            /// Creates an enum from field names used in the ProtoBuf definition.
            pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
                match value {
                    "Equals" => Some(Self::Equals),
                    "DoubleEquals" => Some(Self::DoubleEquals),
                    "NotEquals" => Some(Self::NotEquals),
                    "In" => Some(Self::In),
                    "NotIn" => Some(Self::NotIn),
                    "Exists" => Some(Self::Exists),
                    "DoesNotExist" => Some(Self::DoesNotExist),
                    "GreaterThan" => Some(Self::GreaterThan),
                    "LessThan" => Some(Self::LessThan),
                    _ => None,
                }
            }
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VirtualServiceStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "virtual_service_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        VirtualServiceStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `VirtualServiceStatus`.
pub mod virtual_service_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "PENDING",
                State::Accepted => "ACCEPTED",
                State::Rejected => "REJECTED",
                State::Warning => "WARNING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "ACCEPTED" => Some(Self::Accepted),
                "REJECTED" => Some(Self::Rejected),
                "WARNING" => Some(Self::Warning),
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
pub struct VirtualServiceNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        VirtualServiceStatus,
    >,
}
/// The **RouteTable** is a child routing object for the Gloo Gateway.
/// A **RouteTable** gets built into the complete routing configuration when it is referenced by a
/// `delegateAction`, either in a parent VirtualService or another RouteTable.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteTableSpec {
    /// The list of routes for the route table
    #[prost(message, repeated, tag = "1")]
    pub routes: ::prost::alloc::vec::Vec<Route>,
    /// When a delegated route defines a `RouteTableSelector` that matches multiple route tables, Gloo
    /// will inspect this field to determine the order in which the route tables are to be evaluated.
    #[prost(message, optional, tag = "2")]
    pub weight: ::core::option::Option<i32>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteTableStatus {
    /// State is the enum indicating the state of the resource
    #[prost(enumeration = "route_table_status::State", tag = "1")]
    pub state: i32,
    /// Reason is a description of the error for Rejected resources.
    #[prost(string, tag = "2")]
    pub reason: ::prost::alloc::string::String,
    /// Reference to the reporter who wrote this status
    #[prost(string, tag = "3")]
    pub reported_by: ::prost::alloc::string::String,
    /// Reference to statuses (by resource-ref string: "Kind.Namespace.Name") of subresources of the
    /// parent resource
    #[prost(map = "string, message", tag = "4")]
    #[serde(with = "crate::message::map_entries")]
    pub subresource_statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        RouteTableStatus,
    >,
    /// Opaque details about status results
    #[prost(message, optional, tag = "5")]
    #[serde(with = "crate::wkt::option_struct")]
    pub details: ::core::option::Option<::prost_types::Struct>,
}
/// Nested message and enum types in `RouteTableStatus`.
pub mod route_table_status {
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum State {
        /// Pending status indicates the resource has not yet been validated
        Pending = 0,
        /// Accepted indicates the resource has been validated
        Accepted = 1,
        /// Rejected indicates an invalid configuration by the user
        Rejected = 2,
        /// Warning indicates a partially invalid configuration by the user
        Warning = 3,
    }
    impl State {
        /// String value of the enum field names used in the ProtoBuf definition.
        ///
        /// The values are not transformed in any way and thus are considered stable
        /// (if the ProtoBuf definition does not change) and safe for programmatic use.
        pub fn as_str_name(&self) -> &'static str {
            match self {
                State::Pending => "PENDING",
                State::Accepted => "ACCEPTED",
                State::Rejected => "REJECTED",
                State::Warning => "WARNING",
            }
        }
        /// Creates an enum from field names used in the ProtoBuf definition.
        pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
            match value {
                "PENDING" => Some(Self::Pending),
                "ACCEPTED" => Some(Self::Accepted),
                "REJECTED" => Some(Self::Rejected),
                "WARNING" => Some(Self::Warning),
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
pub struct RouteTableNamespacedStatuses {
    /// Mapping from namespace to the status written by that namespace's controller
    #[prost(map = "string, message", tag = "1")]
    #[serde(with = "crate::message::map_entries")]
    pub statuses: ::std::collections::HashMap<
        ::prost::alloc::string::String,
        RouteTableStatus,
    >,
}
