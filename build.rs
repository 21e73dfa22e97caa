extern crate prost_build;

use heck::ToSnakeCase;
use prost_build::{Method, Service, ServiceGenerator};
use std::io::Result;

fn main() -> Result<()> {
    if cfg!(feature = "generate") {
        generate_protobuf_code()?
    }
    Ok(())
}

// Fields whose serde form differs from the derived one. prost-types carries no serde support, and
// maps are projected as sorted `[key, value]` pairs.
const MAP_FIELDS: &[&str] = &[
    ".enterprise.gloo.solo.io.CustomAuth.context_extensions",
    ".enterprise.gloo.solo.io.HttpService.Request.headers_to_add",
    ".fed.gateway.solo.io.FederatedGatewayStatus.namespaced_placement_statuses",
    ".fed.gateway.solo.io.FederatedMatchableHttpGatewayStatus.namespaced_placement_statuses",
    ".fed.gateway.solo.io.FederatedMatchableTcpGatewayStatus.namespaced_placement_statuses",
    ".fed.gateway.solo.io.FederatedRouteTableStatus.namespaced_placement_statuses",
    ".fed.gateway.solo.io.FederatedVirtualServiceStatus.namespaced_placement_statuses",
    ".fed.gloo.solo.io.FederatedSettingsStatus.namespaced_placement_statuses",
    ".fed.gloo.solo.io.FederatedUpstreamGroupStatus.namespaced_placement_statuses",
    ".fed.gloo.solo.io.FederatedUpstreamStatus.namespaced_placement_statuses",
    ".fed.solo.io.TemplateMetadata.annotations",
    ".fed.solo.io.TemplateMetadata.labels",
    ".gateway.solo.io.GatewayNamespacedStatuses.statuses",
    ".gateway.solo.io.GatewayStatus.subresource_statuses",
    ".gateway.solo.io.HttpGateway.virtual_service_selector",
    ".gateway.solo.io.MatchableHttpGatewayNamespacedStatuses.statuses",
    ".gateway.solo.io.MatchableHttpGatewayStatus.subresource_statuses",
    ".gateway.solo.io.MatchableTcpGatewayNamespacedStatuses.statuses",
    ".gateway.solo.io.MatchableTcpGatewayStatus.subresource_statuses",
    ".gateway.solo.io.RouteTableNamespacedStatuses.statuses",
    ".gateway.solo.io.RouteTableSelector.labels",
    ".gateway.solo.io.RouteTableStatus.subresource_statuses",
    ".gateway.solo.io.VirtualServiceNamespacedStatuses.statuses",
    ".gateway.solo.io.VirtualServiceStatus.subresource_statuses",
    ".gloo.solo.io.AggregateListener.HttpResources.http_options",
    ".gloo.solo.io.AggregateListener.HttpResources.virtual_hosts",
    ".gloo.solo.io.DiscoveryMetadata.labels",
    ".gloo.solo.io.ProxyStatus.subresource_statuses",
    ".gloo.solo.io.SettingsNamespacedStatuses.statuses",
    ".gloo.solo.io.SettingsSpec.DiscoveryOptions.UdsOptions.watchLabels",
    ".gloo.solo.io.SettingsSpec.ObservabilityOptions.MetricLabels.labelToPath",
    ".gloo.solo.io.SettingsSpec.ObservabilityOptions.configStatusMetricLabels",
    ".gloo.solo.io.SettingsSpec.named_extauth",
    ".gloo.solo.io.SettingsStatus.subresource_statuses",
    ".gloo.solo.io.Subset.values",
    ".gloo.solo.io.UpstreamGroupNamespacedStatuses.statuses",
    ".gloo.solo.io.UpstreamGroupStatus.subresource_statuses",
    ".gloo.solo.io.UpstreamNamespacedStatuses.statuses",
    ".gloo.solo.io.UpstreamOptions.global_annotations",
    ".gloo.solo.io.UpstreamStatus.subresource_statuses",
    ".jwt.options.gloo.solo.io.VhostExtension.providers",
    ".kubernetes.options.gloo.solo.io.UpstreamSpec.selector",
    ".multicluster.solo.io.PlacementStatus.Cluster.namespaces",
    ".multicluster.solo.io.PlacementStatus.clusters",
    ".rbac.options.gloo.solo.io.ExtensionSettings.policies",
    ".rbac.options.gloo.solo.io.JWTPrincipal.claims",
    ".rest.options.gloo.solo.io.Parameters.headers",
    ".rest.options.gloo.solo.io.ServiceSpec.transformations",
    ".rpc.edge.gloo.solo.io.ObjectMeta.annotations",
    ".rpc.edge.gloo.solo.io.ObjectMeta.labels",
    ".selectors.core.gloo.solo.io.Selector.labels",
    ".transformation.options.gloo.solo.io.TransformationTemplate.extractors",
    ".transformation.options.gloo.solo.io.TransformationTemplate.headers",
];

const STRUCT_MAP_FIELDS: &[&str] = &[
    ".gloo.solo.io.Extensions.configs",
    ".gloo.solo.io.RouteOptions.envoy_metadata",
];

const DURATION_FIELDS: &[&str] = &[
    ".caching.options.gloo.solo.io.Settings.timeout",
    ".dfp.options.gloo.solo.io.DnsCacheConfig.dns_query_timeout",
    ".dfp.options.gloo.solo.io.DnsCacheConfig.dns_refresh_rate",
    ".dfp.options.gloo.solo.io.DnsCacheConfig.host_ttl",
    ".dfp.options.gloo.solo.io.RefreshRate.base_interval",
    ".dfp.options.gloo.solo.io.RefreshRate.max_interval",
    ".enterprise.gloo.solo.io.Settings.request_timeout",
    ".envoy.config.filter.http.aws_lambda.v2.AWSLambdaConfig.ServiceAccountCredentials.timeout",
    ".envoy.config.filter.http.aws_lambda.v2.AWSLambdaConfig.credential_refresh_delay",
    ".fault.options.gloo.solo.io.RouteDelay.fixed_delay",
    ".gloo.solo.io.ConnectionConfig.HttpProtocolOptions.idle_timeout",
    ".gloo.solo.io.ConnectionConfig.HttpProtocolOptions.max_stream_duration",
    ".gloo.solo.io.ConnectionConfig.TcpKeepAlive.keepalive_interval",
    ".gloo.solo.io.ConnectionConfig.TcpKeepAlive.keepalive_time",
    ".gloo.solo.io.ConnectionConfig.connect_timeout",
    ".gloo.solo.io.GlooOptions.AWSOptions.credential_refresh_delay",
    ".gloo.solo.io.GlooOptions.endpoints_warming_timeout",
    ".gloo.solo.io.GlooOptions.failover_upstream_dns_polling_interval",
    ".gloo.solo.io.LoadBalancerConfig.update_merge_window",
    ".gloo.solo.io.RouteOptions.timeout",
    ".gloo.solo.io.SettingsSpec.ConsulConfiguration.dns_polling_interval",
    ".gloo.solo.io.SettingsSpec.ConsulConfiguration.wait_time",
    ".gloo.solo.io.SettingsSpec.refresh_rate",
    ".gloo.solo.io.SslConfig.transport_socket_connect_timeout",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.delayed_close_timeout",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.drain_timeout",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.idle_timeout",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.max_connection_duration",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.max_stream_duration",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.request_headers_timeout",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.request_timeout",
    ".hcm.options.gloo.solo.io.HttpConnectionManagerSettings.stream_idle_timeout",
    ".jwt.options.gloo.solo.io.RemoteJwks.cache_duration",
    ".lbhash.options.gloo.solo.io.Cookie.ttl",
    ".ratelimit.options.gloo.solo.io.Settings.request_timeout",
    ".retries.options.gloo.solo.io.RetryBackOff.base_interval",
    ".retries.options.gloo.solo.io.RetryBackOff.max_interval",
    ".retries.options.gloo.solo.io.RetryPolicy.per_try_timeout",
    ".solo.io.envoy.config.core.v3.GrpcService.timeout",
    ".solo.io.envoy.config.core.v3.HealthCheck.healthy_edge_interval",
    ".solo.io.envoy.config.core.v3.HealthCheck.initial_jitter",
    ".solo.io.envoy.config.core.v3.HealthCheck.interval",
    ".solo.io.envoy.config.core.v3.HealthCheck.interval_jitter",
    ".solo.io.envoy.config.core.v3.HealthCheck.no_traffic_interval",
    ".solo.io.envoy.config.core.v3.HealthCheck.timeout",
    ".solo.io.envoy.config.core.v3.HealthCheck.unhealthy_edge_interval",
    ".solo.io.envoy.config.core.v3.HealthCheck.unhealthy_interval",
    ".solo.io.envoy.config.core.v3.OutlierDetection.base_ejection_time",
    ".solo.io.envoy.config.core.v3.OutlierDetection.interval",
    ".tcp.options.gloo.solo.io.TcpProxySettings.access_log_flush_interval",
    ".tcp.options.gloo.solo.io.TcpProxySettings.idle_timeout",
];

const TIMESTAMP_FIELDS: &[&str] = &[
    ".multicluster.solo.io.PlacementStatus.processing_time",
    ".rpc.edge.gloo.solo.io.ObjectMeta.creation_timestamp",
];

const STRUCT_FIELDS: &[&str] = &[
    ".gateway.solo.io.GatewayStatus.details",
    ".gateway.solo.io.MatchableHttpGatewayStatus.details",
    ".gateway.solo.io.MatchableTcpGatewayStatus.details",
    ".gateway.solo.io.RouteTableStatus.details",
    ".gateway.solo.io.VirtualServiceStatus.details",
    ".gloo.solo.io.Listener.metadata",
    ".gloo.solo.io.ProxyStatus.details",
    ".gloo.solo.io.Route.metadata",
    ".gloo.solo.io.SettingsStatus.details",
    ".gloo.solo.io.UpstreamGroupStatus.details",
    ".gloo.solo.io.UpstreamStatus.details",
    ".gloo.solo.io.VirtualHost.metadata",
    ".solo.io.envoy.config.core.v3.HealthCheck.transport_socket_match_criteria",
];

const STRUCT_VARIANTS: &[&str] = &[
    ".als.options.gloo.solo.io.FileSink.output_format.json_format",
];

const ANY_VARIANTS: &[&str] = &[
    ".solo.io.envoy.config.core.v3.HealthCheck.CustomHealthCheck.config_type.typed_config",
];

const BYTES_FIELDS: &[&str] = &[
    ".grpc.options.gloo.solo.io.ServiceSpec.descriptors",
    ".grpc_json.options.gloo.solo.io.GrpcJsonTranscoder.descriptor_set.proto_descriptor_bin",
    ".solo.io.envoy.config.core.v3.HealthCheck.Payload.payload.binary",
    ".solo.io.envoy.config.core.v3.SocketOption.value.buf_value",
];

const PROTOS: &[&str] = &[
    "github.com/solo-io/solo-projects/projects/apiserver/api/rpc.edge.gloo/v1/gateway_resources.proto",
    "github.com/solo-io/solo-projects/projects/apiserver/api/fed.rpc/v1/federated_gateway_resources.proto",
    "github.com/solo-io/solo-projects/projects/apiserver/api/fed.rpc/v1/federated_gloo_resources.proto",
];

fn generate_protobuf_code() -> Result<()> {
    let mut prost_build = prost_build::Config::new();

    prost_build.type_attribute(".", "#[derive(serde::Serialize, serde::Deserialize)]");
    prost_build.type_attribute(".", "#[serde(rename_all = \"camelCase\")]");
    prost_build.message_attribute(".", "#[serde(default)]");

    let with = |module: &str| format!("#[serde(with = \"{}\")]", module);
    let bridges: &[(&[&str], &str)] = &[
        (MAP_FIELDS, "crate::message::map_entries"),
        (STRUCT_MAP_FIELDS, "crate::wkt::struct_map_entries"),
        (DURATION_FIELDS, "crate::wkt::option_duration"),
        (TIMESTAMP_FIELDS, "crate::wkt::option_timestamp"),
        (STRUCT_FIELDS, "crate::wkt::option_struct"),
        (STRUCT_VARIANTS, "crate::wkt::struct_value"),
        (ANY_VARIANTS, "crate::wkt::any"),
        (BYTES_FIELDS, "::serde_with::As::<::serde_with::base64::Base64>"),
    ];
    for (paths, module) in bridges {
        for path in paths.iter() {
            prost_build.field_attribute(path, with(*module));
        }
    }

    let clients = tonic_build::configure()
        .build_server(false)
        .build_transport(false)
        .service_generator();
    prost_build.service_generator(Box::new(DescribedServices { clients }));

    prost_build.out_dir("src/protobuf_gen");

    prost_build.include_file("protobufs.rs");

    prost_build.compile_protos(PROTOS, &["./src/protobuf"])?;

    Ok(())
}

/// tonic clients, plus a `<service>_methods` module describing every RPC of the service.
struct DescribedServices {
    clients: Box<dyn ServiceGenerator>,
}

impl ServiceGenerator for DescribedServices {
    fn generate(&mut self, service: Service, buf: &mut String) {
        let full_name = format!("{}.{}", service.package, service.proto_name);

        buf.push_str(&format!("/// Method descriptors for `{}`.\n", full_name));
        buf.push_str(&format!("pub mod {}_methods {{\n", service.name.to_snake_case()));
        buf.push_str("use crate::grpc_web::MethodDescriptor;\n");
        buf.push_str(&format!("pub const SERVICE_NAME: &str = \"{}\";\n", full_name));
        for method in &service.methods {
            push_descriptor(method, buf);
        }
        buf.push_str("pub const METHODS: &[&MethodDescriptor] = &[\n");
        for method in &service.methods {
            buf.push_str(&format!("&{},\n", descriptor_name(method)));
        }
        buf.push_str("];\n}\n");

        self.clients.generate(service, buf);
    }

    fn finalize(&mut self, buf: &mut String) {
        self.clients.finalize(buf);
    }
}

fn descriptor_name(method: &Method) -> String {
    method.name.to_uppercase()
}

fn push_descriptor(method: &Method, buf: &mut String) {
    buf.push_str(&format!(
        "pub const {}: MethodDescriptor = MethodDescriptor {{\n\
         service_name: SERVICE_NAME,\n\
         method_name: \"{}\",\n\
         request_type: \"{}\",\n\
         response_type: \"{}\",\n\
         request_stream: {},\n\
         response_stream: {},\n\
         }};\n",
        descriptor_name(method),
        method.proto_name,
        method.input_proto_type.trim_start_matches('.'),
        method.output_proto_type.trim_start_matches('.'),
        method.client_streaming,
        method.server_streaming,
    ));
}
