//! Unary gRPC-web plumbing under the generated `*_client` modules.
//!
//! The clients are tonic clients. [`channel`] builds the hyper service they run on, wrapped in
//! tonic-web's client layer so requests go out as `application/grpc-web` and trailer frames in the
//! response body come back as HTTP trailers.

mod call;
mod channel;
mod method;

pub use call::{CallState, UnaryCall};
pub use channel::{channel, grpc_web, BoxedChannel, GrpcWebChannel, GrpcWebService, HttpClient};
pub use method::MethodDescriptor;
pub use tonic::{Code, Status};
