use crate::{
    edge::{self, gateway_resource_api_methods, ListGatewaysRequest, ListGatewaysResponse, ObjectMeta},
    fed_rpc::{self, federated_gateway_resource_api_methods, federated_gloo_resource_api_methods},
    gateway::{
        self, delegate_action::DelegationType, gateway_spec::GatewayType, gateway_status, DelegateAction, GatewaySpec,
        GatewayStatus, HttpGateway, RouteTableSpec, TcpGateway, VirtualServiceSpec,
    },
    gloo::{
        self, destination::DestinationType, listener::ListenerType, route_action, route_options, upstream_spec::UpstreamType,
        virtual_host_options, Destination, GlooOptions, HttpListener, HttpListenerOptions, KubernetesServiceDestination,
        Listener, ProxySpec, RouteAction, RouteOptions, SettingsSpec, UpstreamSpec, VirtualHostOptions,
    },
    grpc_web::{grpc_web, CallState, Code, GrpcWebService, UnaryCall},
    message::{check_enum, MessageExt},
    protobuf_gen::{
        caching::options::gloo::solo::io::Settings as CachingSettings,
        core::solo::io::ResourceRef,
        dlp::options::gloo::solo::io::FilterConfig,
        enterprise::gloo::solo::io::{settings::ServiceType, GrpcService, Settings as ExtAuthSettings},
        fault::options::gloo::solo::io::RouteDelay,
        fed::{gloo::solo::io::federated_upstream_spec, gloo::solo::io::FederatedUpstreamSpec, solo::io::TemplateMetadata},
        grpc::options::gloo::solo::io::ServiceSpec,
        healthcheck::options::gloo::solo::io::HealthCheck as ListenerHealthCheck,
        jwt::options::gloo::solo::io::{JwtStagedRouteExtension, JwtStagedVhostExtension, RouteExtension, VhostExtension},
        matchers::core::gloo::solo::io::{matcher::PathSpecifier, Matcher},
        multicluster::solo::io::Placement,
        ratelimit::options::gloo::solo::io::{RateLimitConfigRef, RateLimitConfigRefs, RateLimitRouteExtension, RateLimitVhostExtension},
        solo::io::envoy::config::core::v3::HealthCheck,
        static_upstream::options::gloo::solo::io::{Host, UpstreamSpec as StaticUpstreamSpec},
        waf::options::gloo::solo::io::Settings as WafSettings,
    },
    wkt, GatewayResourceApiClient,
};
use anyhow::Result;
use http::{HeaderValue, Request, Response};
use hyper::Body;
use prost::Message;
use serde_json::json;
use std::{
    convert::Infallible,
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    task::{Context, Poll},
};
use tonic::body::BoxBody;
use tonic_web::GrpcWebCall;
use tower::Service;

fn my_gw() -> edge::Gateway {
    edge::Gateway {
        metadata: Some(ObjectMeta {
            name: "my-gw".into(),
            namespace: "gloo-system".into(),
            ..Default::default()
        }),
        spec: Some(GatewaySpec {
            bind_address: "::".into(),
            bind_port: 8080,
            gateway_type: Some(GatewayType::HttpGateway(HttpGateway::default())),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[test]
fn gateway_round_trip() -> Result<()> {
    let gateway = my_gw();

    let decoded = edge::Gateway::deserialize_binary(gateway.serialize_binary().as_slice())?;
    assert_eq!(decoded, gateway);

    let metadata = decoded.metadata.as_ref().map(|metadata| metadata.name.as_str());
    assert_eq!(metadata, Some("my-gw"));

    let spec = decoded.spec.unwrap_or_default();
    assert_eq!(spec.bind_port, 8080);
    assert!(matches!(spec.gateway_type, Some(GatewayType::HttpGateway(_))));
    assert!(!matches!(spec.gateway_type, Some(GatewayType::TcpGateway(_))));
    Ok(())
}

#[test]
fn setting_a_oneof_variant_replaces_the_previous_one() -> Result<()> {
    let mut spec = GatewaySpec {
        gateway_type: Some(GatewayType::HttpGateway(HttpGateway::default())),
        ..Default::default()
    };
    spec.gateway_type = Some(GatewayType::TcpGateway(TcpGateway::default()));

    let decoded = GatewaySpec::deserialize_binary(spec.serialize_binary().as_slice())?;
    assert!(matches!(decoded.gateway_type, Some(GatewayType::TcpGateway(_))));

    let object = decoded.to_object()?;
    assert_eq!(object["gatewayType"], json!({"tcpGateway": {"tcpHosts": [], "options": null}}));

    let mut cleared = decoded;
    cleared.gateway_type = None;
    assert!(GatewaySpec::deserialize_binary(cleared.serialize_binary().as_slice())?.gateway_type.is_none());
    Ok(())
}

#[test]
fn wrapper_presence() -> Result<()> {
    let unset = GatewaySpec::default();
    assert_eq!(GatewaySpec::deserialize_binary(unset.serialize_binary().as_slice())?.ssl, None);

    let explicit_false = GatewaySpec {
        ssl: Some(false),
        ..Default::default()
    };
    let bytes = explicit_false.serialize_binary();
    assert!(!bytes.is_empty());
    assert_eq!(GatewaySpec::deserialize_binary(bytes.as_slice())?.ssl, Some(false));

    // scalars carry no presence, zero is not written at all
    let zero_port = GatewaySpec {
        bind_port: 0,
        ..Default::default()
    };
    assert!(zero_port.serialize_binary().is_empty());
    Ok(())
}

#[test]
fn map_entries_on_the_wire_keep_the_last_value() -> Result<()> {
    let first = ObjectMeta {
        labels: [("app".to_string(), "a".to_string())].into_iter().collect(),
        ..Default::default()
    };
    let second = ObjectMeta {
        labels: [("app".to_string(), "b".to_string()), ("tier".to_string(), "edge".to_string())]
            .into_iter()
            .collect(),
        ..Default::default()
    };

    // concatenated encodings merge, as protobuf defines
    let mut bytes = first.serialize_binary();
    bytes.extend(second.serialize_binary());

    let merged = ObjectMeta::deserialize_binary(bytes.as_slice())?;
    assert_eq!(merged.labels.len(), 2);
    assert_eq!(merged.labels["app"], "b");

    assert_eq!(merged.to_object()?["labels"], json!([["app", "b"], ["tier", "edge"]]));
    Ok(())
}

#[test]
fn unknown_enum_values_survive() -> Result<()> {
    let status = GatewayStatus {
        state: 42,
        ..Default::default()
    };

    let decoded = GatewayStatus::deserialize_binary(status.serialize_binary().as_slice())?;
    assert_eq!(decoded.state, 42);
    assert_eq!(decoded.state(), gateway_status::State::Pending);
    assert!(check_enum::<gateway_status::State>(decoded.state).is_err());

    let mut accepted = decoded;
    accepted.set_state(gateway_status::State::Accepted);
    assert_eq!(accepted.state, 1);
    Ok(())
}

#[test]
fn nested_statuses_and_well_known_types() -> Result<()> {
    let child = GatewayStatus {
        state: gateway_status::State::Rejected as i32,
        reason: "invalid listener".into(),
        ..Default::default()
    };
    let status = GatewayStatus {
        state: gateway_status::State::Warning as i32,
        reported_by: "gateway".into(),
        subresource_statuses: [("*v1.Proxy.gloo-system.gateway-proxy".to_string(), child)]
            .into_iter()
            .collect(),
        details: Some(wkt::json_to_struct(
            json!({"retries": 3.0, "hosts": ["a", "b"]}).as_object().cloned().unwrap_or_default(),
        )),
        ..Default::default()
    };

    assert_eq!(GatewayStatus::deserialize_binary(status.serialize_binary().as_slice())?, status);

    let object = status.to_object()?;
    assert_eq!(object["subresourceStatuses"][0][0], "*v1.Proxy.gloo-system.gateway-proxy");
    assert_eq!(object["subresourceStatuses"][0][1]["reason"], "invalid listener");
    assert_eq!(object["details"]["hosts"], json!(["a", "b"]));
    assert_eq!(GatewayStatus::from_object(object)?, status);

    let delay = RouteDelay {
        percentage: 50.0,
        fixed_delay: Some(prost_types::Duration { seconds: 2, nanos: 0 }),
    };
    assert_eq!(delay.to_object()?["fixedDelay"], "2s");
    assert_eq!(RouteDelay::from_object(delay.to_object()?)?, delay);

    let spec = ServiceSpec {
        descriptors: vec![0x0a, 0x03, b'f', b'o', b'o'],
        ..Default::default()
    };
    assert_eq!(spec.to_object()?["descriptors"], "CgNmb28=");
    assert_eq!(ServiceSpec::from_object(spec.to_object()?)?, spec);
    Ok(())
}

fn resource_ref(name: &str, namespace: &str) -> ResourceRef {
    ResourceRef {
        name: name.into(),
        namespace: namespace.into(),
    }
}

fn duration(seconds: i64) -> prost_types::Duration {
    prost_types::Duration { seconds, nanos: 0 }
}

/// Checks that `bytes` decode to `expected` and that `expected` encodes back to exactly `bytes`
fn assert_wire<M: Message + Default + PartialEq + std::fmt::Debug>(bytes: &[u8], expected: &M) -> Result<()> {
    assert_eq!(&M::deserialize_binary(bytes)?, expected);
    assert_eq!(expected.serialize_binary(), bytes);
    Ok(())
}

#[test]
fn http_listener_options_field_numbers() -> Result<()> {
    let options = HttpListenerOptions {
        health_check: Some(ListenerHealthCheck { path: "/healthz".into() }),
        waf: Some(WafSettings {
            disabled: true,
            ..Default::default()
        }),
        dlp: Some(FilterConfig {
            enabled_for: 2,
            ..Default::default()
        }),
        ..Default::default()
    };

    // health_check = 4, waf = 5, dlp = 6
    let wire = [
        &[0x22, 0x0a, 0x0a, 0x08][..],
        b"/healthz",
        &[0x2a, 0x02, 0x08, 0x01],
        &[0x32, 0x02, 0x10, 0x02],
    ]
    .concat();
    assert_wire(&wire, &options)?;

    let caching = HttpListenerOptions {
        caching: Some(CachingSettings {
            caching_service_ref: Some(resource_ref("c", "ns")),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert_wire(&[0x8a, 0x01, 0x09, 0x0a, 0x07, 0x0a, 0x01, b'c', 0x12, 0x02, b'n', b's'], &caching)
}

#[test]
fn health_check_no_traffic_interval() -> Result<()> {
    let wire = [98, 2, 8, 60];
    let health_check = HealthCheck {
        no_traffic_interval: Some(duration(60)),
        ..Default::default()
    };
    assert_wire(&wire, &health_check)?;

    let object = health_check.to_object()?;
    assert_eq!(object["noTrafficInterval"], "60s");
    assert_eq!(HealthCheck::from_object(object)?, health_check);
    Ok(())
}

#[test]
fn settings_carry_gloo_options() -> Result<()> {
    let settings = SettingsSpec {
        gloo: Some(GlooOptions {
            xds_bind_addr: "0.0.0.0:9977".into(),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_wire(&[&[0xc2, 0x01, 0x0e, 0x0a, 0x0c][..], b"0.0.0.0:9977"].concat(), &settings)?;
    assert_eq!(settings.to_object()?["gloo"]["xdsBindAddr"], "0.0.0.0:9977");
    Ok(())
}

#[test]
fn ext_auth_service_type() -> Result<()> {
    let settings = ExtAuthSettings {
        service_type: Some(ServiceType::GrpcService(GrpcService {
            authority: "ext-auth".into(),
        })),
        ..Default::default()
    };

    assert_wire(&[&[0x5a, 0x0a, 0x0a, 0x08][..], b"ext-auth"].concat(), &settings)?;
    assert_eq!(settings.to_object()?["serviceType"]["grpcService"]["authority"], "ext-auth");
    Ok(())
}

#[test]
fn listener_type_oneof() -> Result<()> {
    let mut listener = Listener {
        name: "http".into(),
        bind_port: 8080,
        listener_type: Some(ListenerType::HttpListener(HttpListener::default())),
        ..Default::default()
    };
    assert_wire(&[&[0x0a, 0x04][..], b"http", &[0x18, 0x90, 0x3f, 0x22, 0x00]].concat(), &listener)?;
    assert!(listener.to_object()?["listenerType"]["httpListener"].is_object());

    listener.listener_type = Some(ListenerType::TcpListener(Default::default()));
    let decoded = Listener::deserialize_binary(listener.serialize_binary().as_slice())?;
    assert!(matches!(decoded.listener_type, Some(ListenerType::TcpListener(_))));

    listener.listener_type = None;
    assert_eq!(Listener::deserialize_binary(listener.serialize_binary().as_slice())?.listener_type, None);
    Ok(())
}

#[test]
fn destination_type_oneof() -> Result<()> {
    let upstream = Destination {
        destination_type: Some(DestinationType::Upstream(resource_ref("petstore", "default"))),
        ..Default::default()
    };
    assert_wire(&[&[0x52, 0x13, 0x0a, 0x08][..], b"petstore", &[0x12, 0x07], b"default"].concat(), &upstream)?;

    let kube = Destination {
        destination_type: Some(DestinationType::Kube(KubernetesServiceDestination {
            r#ref: Some(resource_ref("petstore", "default")),
            port: 8080,
        })),
        ..Default::default()
    };

    // the last variant on the wire wins
    let mut wire = upstream.serialize_binary();
    wire.extend(kube.serialize_binary());
    assert_eq!(Destination::deserialize_binary(wire.as_slice())?, kube);

    let object = kube.to_object()?;
    assert_eq!(object["destinationType"]["kube"]["ref"]["name"], "petstore");
    assert_eq!(object["destinationType"]["kube"]["port"], 8080);
    assert_eq!(Destination::from_object(object)?, kube);
    Ok(())
}

#[test]
fn route_action_oneofs() -> Result<()> {
    let proxy_route = gloo::Route {
        action: Some(gloo::route::Action::DirectResponseAction(gloo::DirectResponseAction {
            status: 200,
            body: "ok".into(),
        })),
        ..Default::default()
    };
    let decoded = gloo::Route::deserialize_binary(proxy_route.serialize_binary().as_slice())?;
    assert_eq!(decoded, proxy_route);

    let delegating = gateway::Route {
        action: Some(gateway::route::Action::DelegateAction(DelegateAction {
            delegation_type: Some(DelegationType::Ref(resource_ref("rt", "ns"))),
            ..Default::default()
        })),
        ..Default::default()
    };
    assert_wire(&[0x2a, 0x0a, 0x1a, 0x08, 0x0a, 0x02, b'r', b't', 0x12, 0x02, b'n', b's'], &delegating)?;

    let object = delegating.to_object()?;
    assert_eq!(object["action"]["delegateAction"]["delegationType"]["ref"], json!({"name": "rt", "namespace": "ns"}));
    assert_eq!(gateway::Route::from_object(object)?, delegating);

    let mut replaced = delegating;
    replaced.action = Some(gateway::route::Action::RouteAction(RouteAction {
        destination: Some(route_action::Destination::ClusterHeader("x-cluster".into())),
    }));
    let decoded = gateway::Route::deserialize_binary(replaced.serialize_binary().as_slice())?;
    assert!(matches!(decoded.action, Some(gateway::route::Action::RouteAction(_))));
    Ok(())
}

#[test]
fn route_options_jwt_and_rate_limit() -> Result<()> {
    let legacy_jwt = RouteOptions {
        jwt_config: Some(route_options::JwtConfig::Jwt(RouteExtension { disable: true })),
        ..Default::default()
    };
    assert_wire(&[0x82, 0x01, 0x02, 0x08, 0x01], &legacy_jwt)?;

    let staged_jwt = RouteOptions {
        jwt_config: Some(route_options::JwtConfig::JwtStaged(JwtStagedRouteExtension {
            before_ext_auth: Some(RouteExtension { disable: true }),
            after_ext_auth: None,
        })),
        ..Default::default()
    };
    assert_wire(&[0xca, 0x01, 0x04, 0x0a, 0x02, 0x08, 0x01], &staged_jwt)?;

    let mut wire = legacy_jwt.serialize_binary();
    wire.extend(staged_jwt.serialize_binary());
    assert_eq!(RouteOptions::deserialize_binary(wire.as_slice())?, staged_jwt);

    let inline_limits = RouteOptions {
        rate_limit_config_type: Some(route_options::RateLimitConfigType::Ratelimit(RateLimitRouteExtension {
            include_vh_rate_limits: true,
            ..Default::default()
        })),
        ..Default::default()
    };
    assert_wire(&[0xe2, 0x08, 0x02, 0x08, 0x01], &inline_limits)?;

    let config_refs = RouteOptions {
        rate_limit_config_type: Some(route_options::RateLimitConfigType::RateLimitConfigs(RateLimitConfigRefs {
            refs: vec![RateLimitConfigRef {
                name: "rl".into(),
                namespace: "ns".into(),
            }],
        })),
        ..Default::default()
    };
    assert_wire(
        &[0xea, 0x08, 0x0a, 0x0a, 0x08, 0x0a, 0x02, b'r', b'l', 0x12, 0x02, b'n', b's'],
        &config_refs,
    )?;

    let object = config_refs.to_object()?;
    assert_eq!(object["rateLimitConfigType"]["rateLimitConfigs"]["refs"][0]["name"], "rl");
    assert_eq!(object["jwtConfig"], serde_json::Value::Null);
    assert_eq!(RouteOptions::from_object(object)?, config_refs);
    Ok(())
}

#[test]
fn virtual_host_options_jwt_and_rate_limit() -> Result<()> {
    let legacy_jwt = VirtualHostOptions {
        jwt_config: Some(virtual_host_options::JwtConfig::Jwt(VhostExtension {
            allow_missing_or_failed_jwt: true,
            ..Default::default()
        })),
        ..Default::default()
    };
    assert_wire(&[0x4a, 0x02, 0x28, 0x01], &legacy_jwt)?;

    let staged_jwt = VirtualHostOptions {
        jwt_config: Some(virtual_host_options::JwtConfig::JwtStaged(JwtStagedVhostExtension {
            before_ext_auth: None,
            after_ext_auth: Some(VhostExtension {
                allow_missing_or_failed_jwt: true,
                ..Default::default()
            }),
        })),
        ..Default::default()
    };
    assert_wire(&[0x9a, 0x01, 0x04, 0x12, 0x02, 0x28, 0x01], &staged_jwt)?;

    let inline_limits = VirtualHostOptions {
        rate_limit_config_type: Some(virtual_host_options::RateLimitConfigType::Ratelimit(
            RateLimitVhostExtension::default(),
        )),
        ..Default::default()
    };
    assert_wire(&[0xb2, 0x04, 0x00], &inline_limits)?;

    let config_refs = VirtualHostOptions {
        rate_limit_config_type: Some(virtual_host_options::RateLimitConfigType::RateLimitConfigs(
            RateLimitConfigRefs::default(),
        )),
        ..Default::default()
    };
    assert_wire(&[0xba, 0x04, 0x00], &config_refs)?;

    let mut wire = inline_limits.serialize_binary();
    wire.extend(config_refs.serialize_binary());
    assert_eq!(VirtualHostOptions::deserialize_binary(wire.as_slice())?, config_refs);
    Ok(())
}

fn petstore_route() -> gateway::Route {
    gateway::Route {
        matchers: vec![Matcher {
            path_specifier: Some(PathSpecifier::Prefix("/api".into())),
            methods: vec!["GET".into()],
            ..Default::default()
        }],
        inheritable_matchers: Some(false),
        name: "petstore".into(),
        action: Some(gateway::route::Action::RouteAction(RouteAction {
            destination: Some(route_action::Destination::Single(Destination {
                destination_type: Some(DestinationType::Upstream(resource_ref("petstore", "gloo-system"))),
                ..Default::default()
            })),
        })),
        ..Default::default()
    }
}

#[test]
fn populated_virtual_service_and_route_table() -> Result<()> {
    let virtual_service = edge::VirtualService {
        metadata: Some(ObjectMeta {
            name: "default".into(),
            namespace: "gloo-system".into(),
            labels: [("app".to_string(), "petstore".to_string())].into_iter().collect(),
            creation_timestamp: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 0,
            }),
            ..Default::default()
        }),
        spec: Some(VirtualServiceSpec {
            virtual_host: Some(gateway::VirtualHost {
                domains: vec!["*".into()],
                routes: vec![petstore_route()],
                options: Some(VirtualHostOptions {
                    jwt_config: Some(virtual_host_options::JwtConfig::Jwt(VhostExtension::default())),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            display_name: "Pet store".into(),
            ..Default::default()
        }),
        ..Default::default()
    };

    assert_eq!(edge::VirtualService::deserialize_binary(virtual_service.serialize_binary().as_slice())?, virtual_service);

    let object = virtual_service.to_object()?;
    let route = &object["spec"]["virtualHost"]["routes"][0];
    assert_eq!(route["matchers"][0]["pathSpecifier"]["prefix"], "/api");
    assert_eq!(route["inheritableMatchers"], false);
    assert_eq!(route["action"]["routeAction"]["destination"]["single"]["destinationType"]["upstream"]["name"], "petstore");
    assert_eq!(object["metadata"]["labels"], json!([["app", "petstore"]]));
    assert_eq!(edge::VirtualService::from_object(object)?, virtual_service);

    let route_table = edge::RouteTable {
        metadata: Some(ObjectMeta {
            name: "petstore-routes".into(),
            namespace: "gloo-system".into(),
            ..Default::default()
        }),
        spec: Some(RouteTableSpec {
            routes: vec![petstore_route()],
            weight: Some(10),
        }),
        ..Default::default()
    };

    assert_eq!(edge::RouteTable::deserialize_binary(route_table.serialize_binary().as_slice())?, route_table);
    let object = route_table.to_object()?;
    assert_eq!(object["spec"]["weight"], 10);
    assert_eq!(edge::RouteTable::from_object(object)?, route_table);
    Ok(())
}

fn static_upstream() -> UpstreamSpec {
    UpstreamSpec {
        health_checks: vec![HealthCheck {
            timeout: Some(duration(1)),
            no_traffic_interval: Some(duration(60)),
            ..Default::default()
        }],
        use_http2: Some(true),
        upstream_type: Some(UpstreamType::Static(StaticUpstreamSpec {
            hosts: vec![Host {
                addr: "petstore.example.com".into(),
                port: 443,
                ..Default::default()
            }],
            use_tls: Some(true),
            ..Default::default()
        })),
        ..Default::default()
    }
}

#[test]
fn populated_proxy_and_upstream() -> Result<()> {
    let proxy = ProxySpec {
        listeners: vec![Listener {
            name: "listener-::-8080".into(),
            bind_address: "::".into(),
            bind_port: 8080,
            listener_type: Some(ListenerType::HttpListener(HttpListener {
                virtual_hosts: vec![gloo::VirtualHost {
                    name: "gloo-system.default".into(),
                    domains: vec!["*".into()],
                    routes: vec![gloo::Route {
                        name: "petstore".into(),
                        action: Some(gloo::route::Action::RouteAction(RouteAction {
                            destination: Some(route_action::Destination::UpstreamGroup(resource_ref("group", "gloo-system"))),
                        })),
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
                ..Default::default()
            })),
            ..Default::default()
        }],
        ..Default::default()
    };

    assert_eq!(ProxySpec::deserialize_binary(proxy.serialize_binary().as_slice())?, proxy);
    let object = proxy.to_object()?;
    assert_eq!(
        object["listeners"][0]["listenerType"]["httpListener"]["virtualHosts"][0]["routes"][0]["action"]["routeAction"]["destination"]
            ["upstreamGroup"]["name"],
        "group"
    );
    assert_eq!(ProxySpec::from_object(object)?, proxy);

    let upstream = static_upstream();
    assert_eq!(UpstreamSpec::deserialize_binary(upstream.serialize_binary().as_slice())?, upstream);
    let object = upstream.to_object()?;
    assert_eq!(object["healthChecks"][0]["noTrafficInterval"], "60s");
    assert_eq!(object["upstreamType"]["static"]["hosts"][0]["addr"], "petstore.example.com");
    assert_eq!(object["useHttp2"], true);
    assert_eq!(UpstreamSpec::from_object(object)?, upstream);
    Ok(())
}

#[test]
fn federated_upstream_with_placement() -> Result<()> {
    let federated = fed_rpc::FederatedUpstream {
        metadata: Some(ObjectMeta {
            name: "petstore".into(),
            namespace: "gloo-system".into(),
            ..Default::default()
        }),
        spec: Some(FederatedUpstreamSpec {
            template: Some(federated_upstream_spec::Template {
                spec: Some(static_upstream()),
                metadata: Some(TemplateMetadata {
                    labels: [("tier".to_string(), "edge".to_string())].into_iter().collect(),
                    name: "petstore".into(),
                    ..Default::default()
                }),
            }),
            placement: Some(Placement {
                namespaces: vec!["gloo-system".into()],
                clusters: vec!["cluster-1".into(), "cluster-2".into()],
            }),
        }),
        ..Default::default()
    };

    assert_eq!(fed_rpc::FederatedUpstream::deserialize_binary(federated.serialize_binary().as_slice())?, federated);

    let object = federated.to_object()?;
    assert_eq!(object["spec"]["placement"]["clusters"], json!(["cluster-1", "cluster-2"]));
    assert_eq!(object["spec"]["template"]["metadata"]["labels"], json!([["tier", "edge"]]));
    assert_eq!(fed_rpc::FederatedUpstream::from_object(object)?, federated);
    Ok(())
}

#[test]
fn method_tables() {
    assert_eq!(gateway_resource_api_methods::SERVICE_NAME, "rpc.edge.gloo.solo.io.GatewayResourceApi");
    assert_eq!(gateway_resource_api_methods::METHODS.len(), 15);
    assert_eq!(federated_gateway_resource_api_methods::METHODS.len(), 10);
    assert_eq!(federated_gloo_resource_api_methods::METHODS.len(), 6);

    let all = gateway_resource_api_methods::METHODS
        .iter()
        .chain(federated_gateway_resource_api_methods::METHODS)
        .chain(federated_gloo_resource_api_methods::METHODS);
    for method in all {
        assert!(!method.request_stream && !method.response_stream, "{} is not unary", method.method_name);
        assert!(method.request_type.ends_with("Request"));
        assert!(method.response_type.ends_with("Response"));
    }

    let details = gateway_resource_api_methods::GET_GATEWAY_DETAILS;
    assert_eq!(details.path(), "/rpc.edge.gloo.solo.io.GatewayResourceApi/GetGatewayDetails");
    assert_eq!(details.request_type, "rpc.edge.gloo.solo.io.GetGatewayDetailsRequest");
}

fn grpc_web_body(message: Option<&[u8]>, trailers: &str) -> Body {
    let mut body = vec![];
    if let Some(message) = message {
        body.push(0x00);
        body.extend_from_slice(&(message.len() as u32).to_be_bytes());
        body.extend_from_slice(message);
    }
    body.push(0x80);
    body.extend_from_slice(&(trailers.len() as u32).to_be_bytes());
    body.extend_from_slice(trailers.as_bytes());
    Body::from(body)
}

/// Sets its flag when dropped
struct DropGuard(Arc<AtomicBool>);

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Stub server: counts requests and answers with `reply`, or never answers when `stall` is set
#[derive(Clone)]
struct Stub {
    calls: Arc<AtomicUsize>,
    stall: bool,
    dropped: Arc<AtomicBool>,
    reply: fn() -> Response<Body>,
}

impl Stub {
    fn new(reply: fn() -> Response<Body>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            stall: false,
            dropped: Arc::new(AtomicBool::new(false)),
            reply,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn client(&self) -> GatewayResourceApiClient<GrpcWebService<Stub>> {
        GatewayResourceApiClient::with_origin(grpc_web(self.clone()), "http://localhost:8090".parse().unwrap())
    }
}

impl Service<Request<GrpcWebCall<BoxBody>>> for Stub {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, Infallible>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _request: Request<GrpcWebCall<BoxBody>>) -> Self::Future {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.stall {
            let guard = DropGuard(Arc::clone(&self.dropped));
            return Box::pin(async move {
                let _guard = guard;
                std::future::pending().await
            });
        }

        let reply = (self.reply)();
        Box::pin(async move { Ok(reply) })
    }
}

fn gateways_reply() -> Response<Body> {
    let response = ListGatewaysResponse {
        gateways: vec![my_gw()],
        total: 1,
    };
    Response::new(grpc_web_body(Some(&response.encode_to_vec()), "grpc-status:0\r\n"))
}

#[tokio::test]
async fn unary_success_is_delivered_once() -> Result<()> {
    let stub = Stub::new(gateways_reply);
    let mut client = stub.client();

    let delivered = Arc::new(Mutex::new(vec![]));
    let sink = Arc::clone(&delivered);
    let call = UnaryCall::spawn_with_callback(
        async move {
            client
                .list_gateways(ListGatewaysRequest::default())
                .await
                .map(tonic::Response::into_inner)
        },
        move |result| sink.lock().unwrap().push(result),
    );

    call.await?;

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    let response = delivered[0].as_ref().unwrap();
    assert_eq!(response.total, 1);
    assert_eq!(response.gateways[0], my_gw());
    assert_eq!(stub.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn unary_failure_in_trailers() {
    let stub = Stub::new(|| Response::new(grpc_web_body(None, "grpc-status:5\r\ngrpc-message:gateway%20my-gw%20not%20found\r\n")));
    let mut client = stub.client();

    let call = UnaryCall::unary(async move { client.list_gateways(ListGatewaysRequest::default()).await });
    let status = call.await.unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "gateway my-gw not found");
}

#[tokio::test]
async fn unary_failure_carries_response_metadata() {
    let stub = Stub::new(|| {
        let mut response = Response::new(Body::empty());
        let headers = response.headers_mut();
        headers.insert("grpc-status", HeaderValue::from_static("5"));
        headers.insert("grpc-message", HeaderValue::from_static("gateway%20my-gw%20not%20found"));
        headers.insert("x-request-id", HeaderValue::from_static("42"));
        response
    });
    let mut client = stub.client();

    let status = client.list_gateways(ListGatewaysRequest::default()).await.unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "gateway my-gw not found");
    assert_eq!(status.metadata().get("x-request-id").unwrap(), "42");
}

#[tokio::test]
async fn cancel_drops_the_in_flight_request() {
    let stub = Stub {
        stall: true,
        ..Stub::new(gateways_reply)
    };
    let mut client = stub.client();

    let callbacks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&callbacks);
    let call = UnaryCall::spawn_with_callback(
        async move {
            client
                .list_gateways(ListGatewaysRequest::default())
                .await
                .map(tonic::Response::into_inner)
        },
        move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );

    while stub.calls() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(!stub.dropped.load(Ordering::SeqCst));

    assert!(call.cancel());
    assert_eq!(call.state(), CallState::Cancelled);
    assert_eq!(call.await.unwrap_err().code(), Code::Cancelled);

    assert!(stub.dropped.load(Ordering::SeqCst));
    assert_eq!(callbacks.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn independent_calls_share_one_channel() -> Result<()> {
    let stub = Stub::new(gateways_reply);
    let client = stub.client();

    let calls = (0..4).map(|_| {
        let mut client = client.clone();
        UnaryCall::unary(async move { client.list_gateways(ListGatewaysRequest::default()).await })
    });
    let responses = futures_util::future::join_all(calls).await;

    assert_eq!(responses.len(), 4);
    for response in responses {
        assert_eq!(response?.gateways.len(), 1);
    }
    assert_eq!(stub.calls(), 4);
    Ok(())
}
