use crate::config::{
    cli::{Command, ResourceKind},
    GlooApiConfig,
};
use anyhow::{bail, ensure, Context, Result};
use gloo_api::{
    edge,
    fed_rpc,
    grpc_web::{self, BoxedChannel, Status},
    skv2::{ClusterObjectRef, ObjectRef},
    FederatedGatewayResourceApiClient, FederatedGlooResourceApiClient, GatewayResourceApiClient, MessageExt,
};
use http::{header::HeaderName, HeaderMap, HeaderValue, Uri};
use log::{info, warn};
use std::{collections::BTreeMap, future::Future, time::Duration};
use tonic::metadata::MetadataMap;
use tower::util::BoxCloneService;

#[derive(Clone)]
pub(crate) struct RunTime {
    start: std::time::Instant,
    end: std::time::Instant,
}

impl RunTime {
    pub(crate) fn since_start(start: std::time::Instant) -> Self {
        Self {
            start,
            end: std::time::Instant::now(),
        }
    }
}

impl serde::Serialize for RunTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let duration = self.end - self.start;
        serializer.serialize_str(&format!("{}.{:03}s", duration.as_secs(), duration.subsec_millis()))
    }
}

/// One client per API service, all on clones of a single channel
pub(crate) struct Clients {
    pub(crate) edge: GatewayResourceApiClient<BoxedChannel>,
    pub(crate) federated_gateway: FederatedGatewayResourceApiClient<BoxedChannel>,
    pub(crate) federated_gloo: FederatedGlooResourceApiClient<BoxedChannel>,
}

impl Clients {
    pub(crate) fn new(channel: BoxedChannel, endpoint: &str) -> Result<Self> {
        let origin: Uri = endpoint.parse().context(format!("endpoint {} is not a valid URI", endpoint))?;

        Ok(Self {
            edge: GatewayResourceApiClient::with_origin(channel.clone(), origin.clone()),
            federated_gateway: FederatedGatewayResourceApiClient::with_origin(channel.clone(), origin.clone()),
            federated_gloo: FederatedGlooResourceApiClient::with_origin(channel, origin),
        })
    }
}

pub(crate) async fn run(config: &GlooApiConfig) -> Result<String> {
    let clients = Clients::new(BoxCloneService::new(grpc_web::channel()), &config.endpoint)?;
    let metadata = metadata(&config.headers).context("building request metadata")?;
    let timeout = config.timeout_seconds.map(Duration::from_secs);

    info!("running {:?} against {}", config.command, config.endpoint);

    execute(&clients, &config.command, &metadata, timeout).await
}

/// Headers the gRPC-web layers set themselves. tonic drops some of them from caller metadata and
/// overwrites the rest, so asking for them is an error instead.
const RESERVED_HEADERS: &[&str] = &["content-type", "te", "user-agent", "x-grpc-web"];

pub(crate) fn metadata(headers: &BTreeMap<String, String>) -> Result<MetadataMap> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            let header_name = HeaderName::from_bytes(name.as_bytes()).context(format!("invalid header name {}", name))?;
            ensure!(
                !RESERVED_HEADERS.contains(&header_name.as_str()) && !header_name.as_str().starts_with("grpc-"),
                "header {} is reserved for the gRPC-web protocol",
                header_name
            );

            Ok((
                header_name,
                HeaderValue::from_str(value).context(format!("invalid value for header {}", name))?,
            ))
        })
        .collect::<Result<HeaderMap>>()?;

    Ok(MetadataMap::from_headers(headers))
}

/// Awaits one RPC, bounded by `timeout` when given
async fn call<T>(timeout: Option<Duration>, method: &str, rpc: impl Future<Output = Result<tonic::Response<T>, Status>>) -> Result<T> {
    let result = match timeout {
        Some(timeout) => tokio::time::timeout(timeout, rpc)
            .await
            .context(format!("{} timed out after {:?}", method, timeout))?,
        None => rpc.await,
    };

    Ok(result.context(format!("calling {}", method))?.into_inner())
}

fn request<M>(message: M, metadata: &MetadataMap) -> tonic::Request<M> {
    let mut request = tonic::Request::new(message);
    *request.metadata_mut() = metadata.clone();
    request
}

macro_rules! rpc {
    ($timeout:expr, $client:expr, $method:ident, $request:expr, $metadata:expr) => {
        call($timeout, stringify!($method), $client.clone().$method(request($request, $metadata))).await
    };
}

pub(crate) async fn execute(
    clients: &Clients,
    command: &Command,
    metadata: &MetadataMap,
    timeout: Option<Duration>,
) -> Result<String> {
    match command {
        Command::List { kind } => list(clients, *kind, metadata, timeout).await,
        Command::Yaml {
            kind,
            name,
            namespace,
            cluster,
        } => yaml(clients, *kind, name, namespace, cluster.as_deref(), metadata, timeout).await,
        Command::Details {
            kind,
            name,
            namespace,
            cluster,
        } => details(clients, *kind, name, namespace, cluster, metadata, timeout).await,
    }
}

async fn list(clients: &Clients, kind: ResourceKind, metadata: &MetadataMap, timeout: Option<Duration>) -> Result<String> {
    let edge_api = &clients.edge;
    let federated_gateway_api = &clients.federated_gateway;
    let federated_gloo_api = &clients.federated_gloo;

    let object = match kind {
        ResourceKind::Gateways => rpc!(timeout, edge_api, list_gateways, edge::ListGatewaysRequest::default(), metadata)?.to_object(),
        ResourceKind::MatchableHttpGateways => rpc!(
            timeout,
            edge_api,
            list_matchable_http_gateways,
            edge::ListMatchableHttpGatewaysRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::MatchableTcpGateways => rpc!(
            timeout,
            edge_api,
            list_matchable_tcp_gateways,
            edge::ListMatchableTcpGatewaysRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::VirtualServices => {
            rpc!(timeout, edge_api, list_virtual_services, edge::ListVirtualServicesRequest::default(), metadata)?.to_object()
        }
        ResourceKind::RouteTables => rpc!(timeout, edge_api, list_route_tables, edge::ListRouteTablesRequest::default(), metadata)?.to_object(),
        ResourceKind::FederatedGateways => rpc!(
            timeout,
            federated_gateway_api,
            list_federated_gateways,
            fed_rpc::ListFederatedGatewaysRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedMatchableHttpGateways => rpc!(
            timeout,
            federated_gateway_api,
            list_federated_matchable_http_gateways,
            fed_rpc::ListFederatedMatchableHttpGatewaysRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedMatchableTcpGateways => rpc!(
            timeout,
            federated_gateway_api,
            list_federated_matchable_tcp_gateways,
            fed_rpc::ListFederatedMatchableTcpGatewaysRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedVirtualServices => rpc!(
            timeout,
            federated_gateway_api,
            list_federated_virtual_services,
            fed_rpc::ListFederatedVirtualServicesRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedRouteTables => rpc!(
            timeout,
            federated_gateway_api,
            list_federated_route_tables,
            fed_rpc::ListFederatedRouteTablesRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedUpstreams => rpc!(
            timeout,
            federated_gloo_api,
            list_federated_upstreams,
            fed_rpc::ListFederatedUpstreamsRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedUpstreamGroups => rpc!(
            timeout,
            federated_gloo_api,
            list_federated_upstream_groups,
            fed_rpc::ListFederatedUpstreamGroupsRequest::default(),
            metadata
        )?
        .to_object(),
        ResourceKind::FederatedSettings => rpc!(
            timeout,
            federated_gloo_api,
            list_federated_settings,
            fed_rpc::ListFederatedSettingsRequest::default(),
            metadata
        )?
        .to_object(),
    }
    .context(format!("converting {} to plain data", kind))?;

    serde_yaml::to_string(&object).context("serializing to YAML")
}

#[allow(clippy::too_many_arguments)]
async fn yaml(
    clients: &Clients,
    kind: ResourceKind,
    name: &str,
    namespace: &str,
    cluster: Option<&str>,
    metadata: &MetadataMap,
    timeout: Option<Duration>,
) -> Result<String> {
    let edge_api = &clients.edge;
    let federated_gateway_api = &clients.federated_gateway;
    let federated_gloo_api = &clients.federated_gloo;

    if kind.is_federated() && cluster.is_some() {
        warn!("--cluster is ignored for federated kind {}", kind);
    }

    let edge_ref = || {
        Some(ClusterObjectRef {
            name: name.to_string(),
            namespace: namespace.to_string(),
            cluster_name: cluster.unwrap_or_default().to_string(),
        })
    };
    let fed_ref = || {
        Some(ObjectRef {
            name: name.to_string(),
            namespace: namespace.to_string(),
        })
    };

    let yaml_data = match kind {
        ResourceKind::Gateways => {
            rpc!(timeout, edge_api, get_gateway_yaml, edge::GetGatewayYamlRequest { gateway_ref: edge_ref() }, metadata)?.yaml_data
        }
        ResourceKind::MatchableHttpGateways => {
            rpc!(
                timeout,
                edge_api,
                get_matchable_http_gateway_yaml,
                edge::GetMatchableHttpGatewayYamlRequest {
                    matchable_http_gateway_ref: edge_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::MatchableTcpGateways => {
            rpc!(
                timeout,
                edge_api,
                get_matchable_tcp_gateway_yaml,
                edge::GetMatchableTcpGatewayYamlRequest {
                    matchable_tcp_gateway_ref: edge_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::VirtualServices => {
            rpc!(
                timeout,
                edge_api,
                get_virtual_service_yaml,
                edge::GetVirtualServiceYamlRequest {
                    virtual_service_ref: edge_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::RouteTables => {
            rpc!(
                timeout,
                edge_api,
                get_route_table_yaml,
                edge::GetRouteTableYamlRequest { route_table_ref: edge_ref() },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedGateways => {
            rpc!(
                timeout,
                federated_gateway_api,
                get_federated_gateway_yaml,
                fed_rpc::GetFederatedGatewayYamlRequest {
                    federated_gateway_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedMatchableHttpGateways => {
            rpc!(
                timeout,
                federated_gateway_api,
                get_federated_matchable_http_gateway_yaml,
                fed_rpc::GetFederatedMatchableHttpGatewayYamlRequest {
                    federated_matchable_http_gateway_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedMatchableTcpGateways => {
            rpc!(
                timeout,
                federated_gateway_api,
                get_federated_matchable_tcp_gateway_yaml,
                fed_rpc::GetFederatedMatchableTcpGatewayYamlRequest {
                    federated_matchable_tcp_gateway_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedVirtualServices => {
            rpc!(
                timeout,
                federated_gateway_api,
                get_federated_virtual_service_yaml,
                fed_rpc::GetFederatedVirtualServiceYamlRequest {
                    federated_virtual_service_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedRouteTables => {
            rpc!(
                timeout,
                federated_gateway_api,
                get_federated_route_table_yaml,
                fed_rpc::GetFederatedRouteTableYamlRequest {
                    federated_route_table_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedUpstreams => {
            rpc!(
                timeout,
                federated_gloo_api,
                get_federated_upstream_yaml,
                fed_rpc::GetFederatedUpstreamYamlRequest {
                    federated_upstream_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedUpstreamGroups => {
            rpc!(
                timeout,
                federated_gloo_api,
                get_federated_upstream_group_yaml,
                fed_rpc::GetFederatedUpstreamGroupYamlRequest {
                    federated_upstream_group_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
        ResourceKind::FederatedSettings => {
            rpc!(
                timeout,
                federated_gloo_api,
                get_federated_settings_yaml,
                fed_rpc::GetFederatedSettingsYamlRequest {
                    federated_settings_ref: fed_ref()
                },
                metadata
            )?
            .yaml_data
        }
    };

    Ok(yaml_data
        .context(format!("server returned no YAML for {} {}/{}", kind, namespace, name))?
        .yaml)
}

#[allow(clippy::too_many_arguments)]
async fn details(
    clients: &Clients,
    kind: ResourceKind,
    name: &str,
    namespace: &str,
    cluster: &str,
    metadata: &MetadataMap,
    timeout: Option<Duration>,
) -> Result<String> {
    let edge_api = &clients.edge;

    let resource_ref = Some(ClusterObjectRef {
        name: name.to_string(),
        namespace: namespace.to_string(),
        cluster_name: cluster.to_string(),
    });

    let object = match kind {
        ResourceKind::Gateways => rpc!(
            timeout,
            edge_api,
            get_gateway_details,
            edge::GetGatewayDetailsRequest { gateway_ref: resource_ref },
            metadata
        )?
        .to_object(),
        ResourceKind::MatchableHttpGateways => rpc!(
            timeout,
            edge_api,
            get_matchable_http_gateway_details,
            edge::GetMatchableHttpGatewayDetailsRequest {
                matchable_http_gateway_ref: resource_ref
            },
            metadata
        )?
        .to_object(),
        ResourceKind::MatchableTcpGateways => rpc!(
            timeout,
            edge_api,
            get_matchable_tcp_gateway_details,
            edge::GetMatchableTcpGatewayDetailsRequest {
                matchable_tcp_gateway_ref: resource_ref
            },
            metadata
        )?
        .to_object(),
        ResourceKind::VirtualServices => rpc!(
            timeout,
            edge_api,
            get_virtual_service_details,
            edge::GetVirtualServiceDetailsRequest {
                virtual_service_ref: resource_ref
            },
            metadata
        )?
        .to_object(),
        ResourceKind::RouteTables => rpc!(
            timeout,
            edge_api,
            get_route_table_details,
            edge::GetRouteTableDetailsRequest {
                route_table_ref: resource_ref
            },
            metadata
        )?
        .to_object(),
        federated => bail!("details is not available for {}", federated),
    }
    .context(format!("converting {} {}/{} to plain data", kind, namespace, name))?;

    serde_yaml::to_string(&object).context("serializing to YAML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use gloo_api::{
        edge::{GetGatewayYamlRequest, GetGatewayYamlResponse, ResourceYaml},
        fed_rpc::{FederatedSettings, GetFederatedUpstreamYamlRequest, ListFederatedSettingsResponse},
        grpc_web::grpc_web,
    };
    use http::{Request, Response};
    use hyper::Body;
    use prost::Message;
    use std::{
        convert::Infallible,
        pin::Pin,
        sync::{Arc, Mutex},
        task::{Context, Poll},
    };
    use tonic::{body::BoxBody, Code};
    use tonic_web::GrpcWebCall;
    use tower::Service;

    /// What the server saw of one call: path, headers and the raw body
    type Seen = (String, HeaderMap, Bytes);

    /// Answers every call with the same encoded message, recording the requests
    #[derive(Clone)]
    struct Canned {
        reply: Arc<Vec<u8>>,
        seen: Arc<Mutex<Vec<Seen>>>,
    }

    impl Canned {
        fn new(reply: impl Message) -> Self {
            Self {
                reply: Arc::new(reply.encode_to_vec()),
                seen: Arc::new(Mutex::new(vec![])),
            }
        }

        fn clients(&self, endpoint: &str) -> Clients {
            Clients::new(BoxCloneService::new(grpc_web(self.clone())), endpoint).unwrap()
        }

        fn last_request<M: Message + Default>(&self) -> (String, M) {
            let seen = self.seen.lock().unwrap();
            let (path, _, body) = seen.last().unwrap();
            // skip the 5 byte frame header
            (path.clone(), M::decode(&body[5..]).unwrap())
        }
    }

    impl Service<Request<GrpcWebCall<BoxBody>>> for Canned {
        type Response = Response<Body>;
        type Error = Infallible;
        type Future = Pin<Box<dyn std::future::Future<Output = Result<Response<Body>, Infallible>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: Request<GrpcWebCall<BoxBody>>) -> Self::Future {
            let canned = self.clone();
            Box::pin(async move {
                let (parts, body) = request.into_parts();
                let body = hyper::body::to_bytes(body).await.unwrap();
                canned.seen.lock().unwrap().push((parts.uri.path().to_string(), parts.headers, body));

                let mut frames = vec![0x00];
                frames.extend_from_slice(&(canned.reply.len() as u32).to_be_bytes());
                frames.extend_from_slice(&canned.reply);
                let trailer = b"grpc-status:0\r\n";
                frames.push(0x80);
                frames.extend_from_slice(&(trailer.len() as u32).to_be_bytes());
                frames.extend_from_slice(trailer);

                Ok(Response::new(Body::from(frames)))
            })
        }
    }

    #[derive(Clone)]
    struct Stalled;

    impl Service<Request<GrpcWebCall<BoxBody>>> for Stalled {
        type Response = Response<Body>;
        type Error = Infallible;
        type Future = std::future::Pending<Result<Response<Body>, Infallible>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _request: Request<GrpcWebCall<BoxBody>>) -> Self::Future {
            std::future::pending()
        }
    }

    fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(name, value)| (name.to_string(), value.to_string())).collect()
    }

    #[tokio::test]
    async fn list_prints_plain_data_yaml() -> Result<()> {
        let reply = ListFederatedSettingsResponse {
            federated_settings: vec![FederatedSettings {
                metadata: Some(edge::ObjectMeta {
                    name: "global".into(),
                    namespace: "gloo-system".into(),
                    labels: [("team".to_string(), "edge".to_string())].into_iter().collect(),
                    ..Default::default()
                }),
                ..Default::default()
            }],
        };
        let server = Canned::new(reply);
        let clients = server.clients("http://gloo-fed:8090");

        let output = execute(
            &clients,
            &Command::List {
                kind: ResourceKind::FederatedSettings,
            },
            &metadata(&headers(&[("authorization", "Bearer t")]))?,
            None,
        )
        .await?;

        let parsed: serde_yaml::Value = serde_yaml::from_str(&output)?;
        let settings = &parsed["federatedSettings"][0];
        assert_eq!(settings["metadata"]["name"].as_str(), Some("global"));
        assert_eq!(settings["metadata"]["labels"][0][0].as_str(), Some("team"));

        let seen = server.seen.lock().unwrap();
        assert_eq!(seen[0].0, "/fed.rpc.solo.io.FederatedGlooResourceApi/ListFederatedSettings");
        assert_eq!(seen[0].1["authorization"], "Bearer t");
        assert_eq!(seen[0].1["content-type"], "application/grpc-web");
        Ok(())
    }

    #[tokio::test]
    async fn yaml_sends_the_cluster_reference() -> Result<()> {
        let reply = GetGatewayYamlResponse {
            yaml_data: Some(ResourceYaml {
                yaml: "kind: Gateway\nmetadata:\n  name: my-gw\n".into(),
            }),
        };
        let server = Canned::new(reply);
        let clients = server.clients("http://gloo:8090");

        let command = Command::Yaml {
            kind: ResourceKind::Gateways,
            name: "my-gw".into(),
            namespace: "gloo-system".into(),
            cluster: Some("kind-local".into()),
        };
        let output = execute(&clients, &command, &MetadataMap::new(), Some(Duration::from_secs(5))).await?;
        assert_eq!(output, "kind: Gateway\nmetadata:\n  name: my-gw\n");

        let (path, request) = server.last_request::<GetGatewayYamlRequest>();
        assert_eq!(path, "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetGatewayYaml");
        let gateway_ref = request.gateway_ref.unwrap();
        assert_eq!(gateway_ref.name, "my-gw");
        assert_eq!(gateway_ref.cluster_name, "kind-local");
        Ok(())
    }

    #[tokio::test]
    async fn yaml_without_data_is_an_error() {
        let clients = Canned::new(GetGatewayYamlResponse::default()).clients("http://gloo:8090");
        let command = Command::Yaml {
            kind: ResourceKind::Gateways,
            name: "my-gw".into(),
            namespace: "gloo-system".into(),
            cluster: None,
        };

        let err = execute(&clients, &command, &MetadataMap::new(), None).await.unwrap_err();
        assert!(format!("{:#}", err).contains("no YAML for gateways gloo-system/my-gw"));
    }

    #[tokio::test]
    async fn federated_yaml_uses_object_ref() -> Result<()> {
        let reply = GetGatewayYamlResponse {
            yaml_data: Some(ResourceYaml { yaml: "kind: Upstream\n".into() }),
        };
        let server = Canned::new(reply);
        let clients = server.clients("http://gloo:8090");
        let command = Command::Yaml {
            kind: ResourceKind::FederatedUpstreams,
            name: "petstore".into(),
            namespace: "gloo-system".into(),
            cluster: None,
        };

        assert_eq!(execute(&clients, &command, &MetadataMap::new(), None).await?, "kind: Upstream\n");

        let (path, request) = server.last_request::<GetFederatedUpstreamYamlRequest>();
        assert_eq!(path, "/fed.rpc.solo.io.FederatedGlooResourceApi/GetFederatedUpstreamYaml");
        assert_eq!(
            request.federated_upstream_ref,
            Some(ObjectRef {
                name: "petstore".into(),
                namespace: "gloo-system".into()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn details_rejects_federated_kinds() {
        let server = Canned::new(GetGatewayYamlResponse::default());
        let clients = server.clients("http://gloo:8090");
        let command = Command::Details {
            kind: ResourceKind::FederatedGateways,
            name: "a".into(),
            namespace: "b".into(),
            cluster: "c".into(),
        };

        assert!(execute(&clients, &command, &MetadataMap::new(), None).await.is_err());
        assert!(server.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn timeout_bounds_the_call() {
        let clients = Clients::new(BoxCloneService::new(grpc_web(Stalled)), "http://gloo:8090").unwrap();
        let command = Command::List {
            kind: ResourceKind::Gateways,
        };

        let err = execute(&clients, &command, &MetadataMap::new(), Some(Duration::from_millis(50)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("list_gateways timed out after 50ms"));
    }

    #[tokio::test]
    async fn server_status_keeps_its_code() {
        #[derive(Clone)]
        struct NotFound;

        impl Service<Request<GrpcWebCall<BoxBody>>> for NotFound {
            type Response = Response<Body>;
            type Error = Infallible;
            type Future = std::future::Ready<Result<Response<Body>, Infallible>>;

            fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
                Poll::Ready(Ok(()))
            }

            fn call(&mut self, _request: Request<GrpcWebCall<BoxBody>>) -> Self::Future {
                let mut response = Response::new(Body::empty());
                response.headers_mut().insert("grpc-status", HeaderValue::from_static("5"));
                std::future::ready(Ok(response))
            }
        }

        let clients = Clients::new(BoxCloneService::new(grpc_web(NotFound)), "http://gloo:8090").unwrap();
        let command = Command::List {
            kind: ResourceKind::RouteTables,
        };

        let err = execute(&clients, &command, &MetadataMap::new(), None).await.unwrap_err();
        let status = err.downcast_ref::<Status>().unwrap();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[test]
    fn endpoint_must_be_a_uri() {
        assert!(Clients::new(BoxCloneService::new(grpc_web(Stalled)), "not a uri").is_err());
    }

    #[test]
    fn metadata_from_headers() -> Result<()> {
        let map = metadata(&headers(&[("x-tenant", "blue")]))?;
        assert_eq!(map.get("x-tenant").unwrap(), "blue");

        assert!(metadata(&headers(&[("bad header", "x")])).is_err());
        Ok(())
    }

    #[test]
    fn metadata_rejects_protocol_headers() {
        for name in ["content-type", "Content-Type", "x-grpc-web", "grpc-timeout", "te", "user-agent"] {
            let err = metadata(&headers(&[(name, "x")])).unwrap_err();
            assert!(err.to_string().contains("is reserved"), "{}: {}", name, err);
        }

        assert!(metadata(&headers(&[("x-grpc-tenant", "blue")])).is_ok());
    }
}
