#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedGateway {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedGatewaySpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedGatewayStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedGatewaysRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedGatewaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_gateways: ::prost::alloc::vec::Vec<FederatedGateway>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedGatewayYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_gateway_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedGatewayYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedMatchableHttpGateway {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedMatchableHttpGatewaySpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedMatchableHttpGatewayStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedMatchableHttpGatewaysRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedMatchableHttpGatewaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_matchable_http_gateways: ::prost::alloc::vec::Vec<
        FederatedMatchableHttpGateway,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedMatchableHttpGatewayYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_matchable_http_gateway_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedMatchableHttpGatewayYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedMatchableTcpGateway {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedMatchableTcpGatewaySpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedMatchableTcpGatewayStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedMatchableTcpGatewaysRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedMatchableTcpGatewaysResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_matchable_tcp_gateways: ::prost::alloc::vec::Vec<
        FederatedMatchableTcpGateway,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedMatchableTcpGatewayYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_matchable_tcp_gateway_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedMatchableTcpGatewayYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedVirtualService {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedVirtualServiceSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedVirtualServiceStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedVirtualServicesRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedVirtualServicesResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_virtual_services: ::prost::alloc::vec::Vec<FederatedVirtualService>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedVirtualServiceYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_virtual_service_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedVirtualServiceYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedRouteTable {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedRouteTableSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gateway::solo::io::FederatedRouteTableStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedRouteTablesRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedRouteTablesResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_route_tables: ::prost::alloc::vec::Vec<FederatedRouteTable>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedRouteTableYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_route_table_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedRouteTableYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
/// Method descriptors for `fed.rpc.solo.io.FederatedGatewayResourceApi`.
pub mod federated_gateway_resource_api_methods {
    use crate::grpc_web::MethodDescriptor;
    pub const SERVICE_NAME: &str = "fed.rpc.solo.io.FederatedGatewayResourceApi";
    pub const LIST_FEDERATED_GATEWAYS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedGateways",
        request_type: "fed.rpc.solo.io.ListFederatedGatewaysRequest",
        response_type: "fed.rpc.solo.io.ListFederatedGatewaysResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_GATEWAY_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedGatewayYaml",
        request_type: "fed.rpc.solo.io.GetFederatedGatewayYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedGatewayYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_FEDERATED_MATCHABLE_HTTP_GATEWAYS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedMatchableHttpGateways",
        request_type: "fed.rpc.solo.io.ListFederatedMatchableHttpGatewaysRequest",
        response_type: "fed.rpc.solo.io.ListFederatedMatchableHttpGatewaysResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_MATCHABLE_HTTP_GATEWAY_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedMatchableHttpGatewayYaml",
        request_type: "fed.rpc.solo.io.GetFederatedMatchableHttpGatewayYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedMatchableHttpGatewayYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_FEDERATED_MATCHABLE_TCP_GATEWAYS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedMatchableTcpGateways",
        request_type: "fed.rpc.solo.io.ListFederatedMatchableTcpGatewaysRequest",
        response_type: "fed.rpc.solo.io.ListFederatedMatchableTcpGatewaysResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_MATCHABLE_TCP_GATEWAY_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedMatchableTcpGatewayYaml",
        request_type: "fed.rpc.solo.io.GetFederatedMatchableTcpGatewayYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedMatchableTcpGatewayYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_FEDERATED_VIRTUAL_SERVICES: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedVirtualServices",
        request_type: "fed.rpc.solo.io.ListFederatedVirtualServicesRequest",
        response_type: "fed.rpc.solo.io.ListFederatedVirtualServicesResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_VIRTUAL_SERVICE_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedVirtualServiceYaml",
        request_type: "fed.rpc.solo.io.GetFederatedVirtualServiceYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedVirtualServiceYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_FEDERATED_ROUTE_TABLES: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedRouteTables",
        request_type: "fed.rpc.solo.io.ListFederatedRouteTablesRequest",
        response_type: "fed.rpc.solo.io.ListFederatedRouteTablesResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_ROUTE_TABLE_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedRouteTableYaml",
        request_type: "fed.rpc.solo.io.GetFederatedRouteTableYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedRouteTableYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const METHODS: &[&MethodDescriptor] = &[
        &LIST_FEDERATED_GATEWAYS,
        &GET_FEDERATED_GATEWAY_YAML,
        &LIST_FEDERATED_MATCHABLE_HTTP_GATEWAYS,
        &GET_FEDERATED_MATCHABLE_HTTP_GATEWAY_YAML,
        &LIST_FEDERATED_MATCHABLE_TCP_GATEWAYS,
        &GET_FEDERATED_MATCHABLE_TCP_GATEWAY_YAML,
        &LIST_FEDERATED_VIRTUAL_SERVICES,
        &GET_FEDERATED_VIRTUAL_SERVICE_YAML,
        &LIST_FEDERATED_ROUTE_TABLES,
        &GET_FEDERATED_ROUTE_TABLE_YAML,
    ];
}
/// Generated client implementations.
pub mod federated_gateway_resource_api_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct FederatedGatewayResourceApiClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> FederatedGatewayResourceApiClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> FederatedGatewayResourceApiClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            FederatedGatewayResourceApiClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /// Lists FederatedGateways on the management cluster.
        pub async fn list_federated_gateways(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedGatewaysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedGatewaysResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/ListFederatedGateways",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "ListFederatedGateways",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedGateway.
        pub async fn get_federated_gateway_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedGatewayYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedGatewayYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/GetFederatedGatewayYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "GetFederatedGatewayYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists FederatedMatchableHttpGateways on the management cluster.
        pub async fn list_federated_matchable_http_gateways(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedMatchableHttpGatewaysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedMatchableHttpGatewaysResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/ListFederatedMatchableHttpGateways",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "ListFederatedMatchableHttpGateways",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedMatchableHttpGateway.
        pub async fn get_federated_matchable_http_gateway_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedMatchableHttpGatewayYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedMatchableHttpGatewayYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/GetFederatedMatchableHttpGatewayYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "GetFederatedMatchableHttpGatewayYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists FederatedMatchableTcpGateways on the management cluster.
        pub async fn list_federated_matchable_tcp_gateways(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedMatchableTcpGatewaysRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedMatchableTcpGatewaysResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/ListFederatedMatchableTcpGateways",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "ListFederatedMatchableTcpGateways",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedMatchableTcpGateway.
        pub async fn get_federated_matchable_tcp_gateway_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedMatchableTcpGatewayYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedMatchableTcpGatewayYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/GetFederatedMatchableTcpGatewayYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "GetFederatedMatchableTcpGatewayYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists FederatedVirtualServices on the management cluster.
        pub async fn list_federated_virtual_services(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedVirtualServicesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedVirtualServicesResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/ListFederatedVirtualServices",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "ListFederatedVirtualServices",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedVirtualService.
        pub async fn get_federated_virtual_service_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedVirtualServiceYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedVirtualServiceYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/GetFederatedVirtualServiceYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "GetFederatedVirtualServiceYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists FederatedRouteTables on the management cluster.
        pub async fn list_federated_route_tables(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedRouteTablesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedRouteTablesResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/ListFederatedRouteTables",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "ListFederatedRouteTables",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedRouteTable.
        pub async fn get_federated_route_table_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedRouteTableYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedRouteTableYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGatewayResourceApi/GetFederatedRouteTableYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGatewayResourceApi",
                        "GetFederatedRouteTableYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
    }
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedUpstream {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gloo::solo::io::FederatedUpstreamSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gloo::solo::io::FederatedUpstreamStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedUpstreamsRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedUpstreamsResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_upstreams: ::prost::alloc::vec::Vec<FederatedUpstream>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedUpstreamYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_upstream_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedUpstreamYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedUpstreamGroup {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gloo::solo::io::FederatedUpstreamGroupSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gloo::solo::io::FederatedUpstreamGroupStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedUpstreamGroupsRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedUpstreamGroupsResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_upstream_groups: ::prost::alloc::vec::Vec<FederatedUpstreamGroup>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedUpstreamGroupYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_upstream_group_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedUpstreamGroupYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FederatedSettings {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ObjectMeta,
    >,
    #[prost(message, optional, tag = "2")]
    pub spec: ::core::option::Option<
        super::super::super::gloo::solo::io::FederatedSettingsSpec,
    >,
    #[prost(message, optional, tag = "3")]
    pub status: ::core::option::Option<
        super::super::super::gloo::solo::io::FederatedSettingsStatus,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedSettingsRequest {}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListFederatedSettingsResponse {
    #[prost(message, repeated, tag = "1")]
    pub federated_settings: ::prost::alloc::vec::Vec<FederatedSettings>,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedSettingsYamlRequest {
    #[prost(message, optional, tag = "1")]
    pub federated_settings_ref: ::core::option::Option<
        super::super::super::super::core::skv2::solo::io::ObjectRef,
    >,
}
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFederatedSettingsYamlResponse {
    #[prost(message, optional, tag = "1")]
    pub yaml_data: ::core::option::Option<
        super::super::super::super::rpc::edge::gloo::solo::io::ResourceYaml,
    >,
}
/// Method descriptors for `fed.rpc.solo.io.FederatedGlooResourceApi`.
pub mod federated_gloo_resource_api_methods {
    use crate::grpc_web::MethodDescriptor;
    pub const SERVICE_NAME: &str = "fed.rpc.solo.io.FederatedGlooResourceApi";
    pub const LIST_FEDERATED_UPSTREAMS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedUpstreams",
        request_type: "fed.rpc.solo.io.ListFederatedUpstreamsRequest",
        response_type: "fed.rpc.solo.io.ListFederatedUpstreamsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_UPSTREAM_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedUpstreamYaml",
        request_type: "fed.rpc.solo.io.GetFederatedUpstreamYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedUpstreamYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_FEDERATED_UPSTREAM_GROUPS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedUpstreamGroups",
        request_type: "fed.rpc.solo.io.ListFederatedUpstreamGroupsRequest",
        response_type: "fed.rpc.solo.io.ListFederatedUpstreamGroupsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_UPSTREAM_GROUP_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedUpstreamGroupYaml",
        request_type: "fed.rpc.solo.io.GetFederatedUpstreamGroupYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedUpstreamGroupYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const LIST_FEDERATED_SETTINGS: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "ListFederatedSettings",
        request_type: "fed.rpc.solo.io.ListFederatedSettingsRequest",
        response_type: "fed.rpc.solo.io.ListFederatedSettingsResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const GET_FEDERATED_SETTINGS_YAML: MethodDescriptor = MethodDescriptor {
        service_name: SERVICE_NAME,
        method_name: "GetFederatedSettingsYaml",
        request_type: "fed.rpc.solo.io.GetFederatedSettingsYamlRequest",
        response_type: "fed.rpc.solo.io.GetFederatedSettingsYamlResponse",
        request_stream: false,
        response_stream: false,
    };
    pub const METHODS: &[&MethodDescriptor] = &[
        &LIST_FEDERATED_UPSTREAMS,
        &GET_FEDERATED_UPSTREAM_YAML,
        &LIST_FEDERATED_UPSTREAM_GROUPS,
        &GET_FEDERATED_UPSTREAM_GROUP_YAML,
        &LIST_FEDERATED_SETTINGS,
        &GET_FEDERATED_SETTINGS_YAML,
    ];
}
/// Generated client implementations.
pub mod federated_gloo_resource_api_client {
    #![allow(unused_variables, dead_code, missing_docs, clippy::let_unit_value)]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct FederatedGlooResourceApiClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl<T> FederatedGlooResourceApiClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> FederatedGlooResourceApiClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::BoxBody>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::BoxBody>,
            >>::Error: Into<StdError> + Send + Sync,
        {
            FederatedGlooResourceApiClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /// Lists FederatedUpstreams on the management cluster.
        pub async fn list_federated_upstreams(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedUpstreamsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedUpstreamsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGlooResourceApi/ListFederatedUpstreams",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGlooResourceApi",
                        "ListFederatedUpstreams",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedUpstream.
        pub async fn get_federated_upstream_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedUpstreamYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedUpstreamYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGlooResourceApi/GetFederatedUpstreamYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGlooResourceApi",
                        "GetFederatedUpstreamYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists FederatedUpstreamGroups on the management cluster.
        pub async fn list_federated_upstream_groups(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedUpstreamGroupsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedUpstreamGroupsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGlooResourceApi/ListFederatedUpstreamGroups",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGlooResourceApi",
                        "ListFederatedUpstreamGroups",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedUpstreamGroup.
        pub async fn get_federated_upstream_group_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedUpstreamGroupYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedUpstreamGroupYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGlooResourceApi/GetFederatedUpstreamGroupYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGlooResourceApi",
                        "GetFederatedUpstreamGroupYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Lists FederatedSettings on the management cluster.
        pub async fn list_federated_settings(
            &mut self,
            request: impl tonic::IntoRequest<super::ListFederatedSettingsRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListFederatedSettingsResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGlooResourceApi/ListFederatedSettings",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGlooResourceApi",
                        "ListFederatedSettings",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
        /// Gets the raw YAML of a single FederatedSettings.
        pub async fn get_federated_settings_yaml(
            &mut self,
            request: impl tonic::IntoRequest<super::GetFederatedSettingsYamlRequest>,
        ) -> std::result::Result<
            tonic::Response<super::GetFederatedSettingsYamlResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::new(
                        tonic::Code::Unknown,
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/fed.rpc.solo.io.FederatedGlooResourceApi/GetFederatedSettingsYaml",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new(
                        "fed.rpc.solo.io.FederatedGlooResourceApi",
                        "GetFederatedSettingsYaml",
                    ),
                );
            self.inner.unary(req, path, codec).await
        }
    }
}
