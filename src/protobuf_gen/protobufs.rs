pub mod als {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("als.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod aws {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("aws.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod aws_ec2 {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("aws_ec2.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod azure {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("azure.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod caching {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("caching.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod consul {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("consul.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod core {
    pub mod skv2 {
        pub mod solo {
            pub mod io {
                include!("core.skv2.solo.io.rs");
            }
        }
    }
    pub mod solo {
        pub mod io {
            include!("core.solo.io.rs");
        }
    }
}
pub mod cors {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("cors.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod dfp {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("dfp.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod dlp {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("dlp.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod enterprise {
    pub mod gloo {
        pub mod solo {
            pub mod io {
                include!("enterprise.gloo.solo.io.rs");
            }
        }
    }
}
pub mod envoy {
    pub mod config {
        pub mod filter {
            pub mod http {
                pub mod aws_lambda {
                    pub mod v2 {
                        include!("envoy.config.filter.http.aws_lambda.v2.rs");
                    }
                }
                pub mod proxylatency {
                    pub mod v2 {
                        include!("envoy.config.filter.http.proxylatency.v2.rs");
                    }
                }
            }
        }
    }
}
pub mod fault {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("fault.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod fed {
    pub mod gateway {
        pub mod solo {
            pub mod io {
                include!("fed.gateway.solo.io.rs");
            }
        }
    }
    pub mod gloo {
        pub mod solo {
            pub mod io {
                include!("fed.gloo.solo.io.rs");
            }
        }
    }
    pub mod rpc {
        pub mod solo {
            pub mod io {
                include!("fed.rpc.solo.io.rs");
            }
        }
    }
    pub mod solo {
        pub mod io {
            include!("fed.solo.io.rs");
        }
    }
}
pub mod gateway {
    pub mod solo {
        pub mod io {
            include!("gateway.solo.io.rs");
        }
    }
}
pub mod gloo {
    pub mod solo {
        pub mod io {
            include!("gloo.solo.io.rs");
        }
    }
}
pub mod grpc {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("grpc.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod grpc_json {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("grpc_json.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod grpc_web {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("grpc_web.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod hcm {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("hcm.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod headers {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("headers.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod healthcheck {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("healthcheck.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod jwt {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("jwt.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod kubernetes {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("kubernetes.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod lbhash {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("lbhash.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod matchers {
    pub mod core {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("matchers.core.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod multicluster {
    pub mod solo {
        pub mod io {
            include!("multicluster.solo.io.rs");
        }
    }
}
pub mod pipe {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("pipe.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod protocol_upgrade {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("protocol_upgrade.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod proxy_protocol {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("proxy_protocol.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod ratelimit {
    pub mod api {
        pub mod solo {
            pub mod io {
                include!("ratelimit.api.solo.io.rs");
            }
        }
    }
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("ratelimit.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod rbac {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("rbac.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod rest {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("rest.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod retries {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("retries.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod rpc {
    pub mod edge {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("rpc.edge.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod selectors {
    pub mod core {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("selectors.core.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod shadowing {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("shadowing.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod solo {
    pub mod io {
        pub mod envoy {
            pub mod config {
                pub mod core {
                    pub mod v3 {
                        include!("solo.io.envoy.config.core.v3.rs");
                    }
                }
                pub mod filter {
                    pub mod http {
                        pub mod gzip {
                            pub mod v2 {
                                include!("solo.io.envoy.config.filter.http.gzip.v2.rs");
                            }
                        }
                    }
                }
            }
            pub mod extensions {
                pub mod filters {
                    pub mod http {
                        pub mod buffer {
                            pub mod v3 {
                                include!("solo.io.envoy.extensions.filters.http.buffer.v3.rs");
                            }
                        }
                        pub mod csrf {
                            pub mod v3 {
                                include!("solo.io.envoy.extensions.filters.http.csrf.v3.rs");
                            }
                        }
                    }
                }
            }
            pub mod r#type {
                pub mod matcher {
                    pub mod v3 {
                        include!("solo.io.envoy.r#type.matcher.v3.rs");
                    }
                }
                pub mod v3 {
                    include!("solo.io.envoy.r#type.v3.rs");
                }
            }
        }
    }
}
pub mod static_upstream {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("static_upstream.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod stats {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("stats.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod tcp {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("tcp.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod tracing {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("tracing.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod transformation {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("transformation.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod waf {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("waf.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
pub mod wasm {
    pub mod options {
        pub mod gloo {
            pub mod solo {
                pub mod io {
                    include!("wasm.options.gloo.solo.io.rs");
                }
            }
        }
    }
}
