//! Message types and gRPC-web clients for the Gloo gateway management APIs.
//!
//! The generated code lives in [`protobuf_gen`], one module per protobuf package. The packages
//! callers touch most are re-exported at the crate root:
//!
//! - [`edge`]: `rpc.edge.gloo.solo.io`, the single-cluster `GatewayResourceApi`
//! - [`fed_rpc`]: `fed.rpc.solo.io`, the federated `FederatedGatewayResourceApi` and
//!   `FederatedGlooResourceApi`
//! - [`gateway`], [`gloo`]: the resource specs the APIs return

pub mod extensions;
pub mod grpc_web;
pub mod message;
pub mod wkt;

pub mod protobuf_gen {
    #![allow(clippy::all)]
    include!("protobuf_gen/protobufs.rs");
}

pub use protobuf_gen::core::skv2::solo::io as skv2;
pub use protobuf_gen::fed::rpc::solo::io as fed_rpc;
pub use protobuf_gen::gateway::solo::io as gateway;
pub use protobuf_gen::gloo::solo::io as gloo;
pub use protobuf_gen::rpc::edge::gloo::solo::io as edge;

pub use edge::gateway_resource_api_client::GatewayResourceApiClient;
pub use fed_rpc::federated_gateway_resource_api_client::FederatedGatewayResourceApiClient;
pub use fed_rpc::federated_gloo_resource_api_client::FederatedGlooResourceApiClient;
pub use message::MessageExt;

#[cfg(test)]
mod tests;
