use http::{Request, Response, StatusCode};
use hyper::{client::HttpConnector, Body, Client};
use log::{debug, warn};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tonic::{body::BoxBody, codegen::StdError, Status};
use tonic_web::{GrpcWebCall, GrpcWebClientLayer, GrpcWebClientService};
use tower::{util::BoxCloneService, Layer, Service};

pub type HttpClient = Client<HttpConnector, GrpcWebCall<BoxBody>>;

/// Any inner HTTP service, speaking gRPC-web.
pub type GrpcWebService<S> = GrpcWebClientService<PlainHttp<S>>;

/// What the generated clients run on outside of tests.
pub type GrpcWebChannel = GrpcWebService<HttpClient>;

/// Any gRPC-web channel behind one type, for holders that should not name the HTTP service.
pub type BoxedChannel = BoxCloneService<Request<BoxBody>, Response<GrpcWebCall<Body>>, Status>;

/// A pooled HTTP/1.1 client for the gRPC-web clients. Calls made on clones share connections.
pub fn channel() -> GrpcWebChannel {
    grpc_web(Client::builder().build_http())
}

pub fn grpc_web<S>(service: S) -> GrpcWebService<S> {
    GrpcWebClientLayer::new().layer(PlainHttp { inner: service })
}

/// Sits between tonic-web and the HTTP client.
///
/// Connection failures become `Unavailable`. Error responses that carry no `grpc-status` lose their
/// body, so a proxy's plain-text error page is not read as gRPC-web frames and tonic maps the HTTP
/// status to a code instead.
#[derive(Clone, Debug)]
pub struct PlainHttp<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for PlainHttp<S>
where
    S: Service<Request<B>, Response = Response<Body>>,
    S::Error: Into<StdError>,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = Status;
    type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, Status>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Status>> {
        self.inner.poll_ready(cx).map_err(transport_failure)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let path = request.uri().path().to_string();
        let response = self.inner.call(request);

        Box::pin(async move {
            let response = response.await.map_err(transport_failure)?;
            debug!("{} answered HTTP {}", path, response.status());
            Ok(drop_plain_http_body(response))
        })
    }
}

fn transport_failure(err: impl Into<StdError>) -> Status {
    let err = err.into();
    warn!("gRPC-web transport failure: {}", err);
    Status::unavailable(format!("transport failure: {}", err))
}

fn drop_plain_http_body(response: Response<Body>) -> Response<Body> {
    if response.status() == StatusCode::OK || response.headers().contains_key("grpc-status") {
        return response;
    }

    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Body::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grpc_web::Code;
    use bytes::Bytes;
    use http::{uri::PathAndQuery, HeaderValue, Method};
    use prost::Message;
    use std::{
        convert::Infallible,
        sync::{Arc, Mutex},
    };
    use tonic::{client::Grpc, codec::ProstCodec, metadata::MetadataValue};

    #[derive(Clone, PartialEq, ::prost::Message)]
    struct Echo {
        #[prost(string, tag = "1")]
        text: String,
    }

    /// Seen by the server: method, uri, headers and the raw body bytes
    type Seen = Arc<Mutex<Vec<(Method, String, http::HeaderMap, Bytes)>>>;

    #[derive(Clone)]
    struct Server {
        seen: Seen,
        reply: fn() -> Response<Body>,
    }

    impl Server {
        fn new(reply: fn() -> Response<Body>) -> Self {
            Self {
                seen: Arc::new(Mutex::new(vec![])),
                reply,
            }
        }
    }

    impl Service<Request<GrpcWebCall<BoxBody>>> for Server {
        type Response = Response<Body>;
        type Error = Infallible;
        type Future = Pin<Box<dyn Future<Output = Result<Response<Body>, Infallible>> + Send>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: Request<GrpcWebCall<BoxBody>>) -> Self::Future {
            let server = self.clone();
            Box::pin(async move {
                let (parts, body) = request.into_parts();
                let body = hyper::body::to_bytes(body).await.unwrap();
                server
                    .seen
                    .lock()
                    .unwrap()
                    .push((parts.method, parts.uri.to_string(), parts.headers, body));
                Ok((server.reply)())
            })
        }
    }

    struct Refused;

    impl Service<Request<GrpcWebCall<BoxBody>>> for Refused {
        type Response = Response<Body>;
        type Error = std::io::Error;
        type Future = std::future::Ready<Result<Response<Body>, std::io::Error>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), std::io::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _request: Request<GrpcWebCall<BoxBody>>) -> Self::Future {
            std::future::ready(Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused")))
        }
    }

    fn frames(frames: &[(u8, &[u8])]) -> Body {
        let mut out = vec![];
        for (flag, payload) in frames {
            out.push(*flag);
            out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
            out.extend_from_slice(payload);
        }
        Body::from(out)
    }

    async fn echo<S>(service: S, text: &str) -> Result<tonic::Response<Echo>, Status>
    where
        S: Service<Request<GrpcWebCall<BoxBody>>, Response = Response<Body>> + Send + 'static,
        S::Error: Into<StdError>,
        S::Future: Send + 'static,
    {
        let origin = "http://gloo:8090".parse().unwrap();
        let mut grpc = Grpc::with_origin(grpc_web(service), origin);
        grpc.ready().await?;

        let mut request = tonic::Request::new(Echo { text: text.into() });
        request
            .metadata_mut()
            .insert("authorization", MetadataValue::from_static("Bearer t"));

        let path = PathAndQuery::from_static("/test.EchoService/Echo");
        grpc.unary(request, path, ProstCodec::default()).await
    }

    #[tokio::test]
    async fn request_and_response_frames() {
        let server = Server::new(|| {
            let reply = Echo { text: "pong".into() }.encode_to_vec();
            Response::new(frames(&[(0x00, reply.as_slice()), (0x80, &b"grpc-status:0\r\n"[..])]))
        });

        let reply = echo(server.clone(), "ping").await.unwrap();
        assert_eq!(reply.get_ref().text, "pong");

        let seen = server.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (method, uri, headers, body) = &seen[0];
        assert_eq!(method, Method::POST);
        assert_eq!(uri, "http://gloo:8090/test.EchoService/Echo");
        assert_eq!(headers["content-type"], HeaderValue::from_static("application/grpc-web"));
        assert_eq!(headers["authorization"], "Bearer t");

        let request = Echo { text: "ping".into() }.encode_to_vec();
        assert_eq!(body[0], 0x00);
        assert_eq!(&body[1..5], &(request.len() as u32).to_be_bytes());
        assert_eq!(&body[5..], request.as_slice());
    }

    #[tokio::test]
    async fn trailers_only_error_in_headers() {
        let server = Server::new(|| {
            let mut response = Response::new(Body::empty());
            response.headers_mut().insert("grpc-status", HeaderValue::from_static("7"));
            response.headers_mut().insert("grpc-message", HeaderValue::from_static("denied"));
            response
        });

        let status = echo(server, "ping").await.unwrap_err();
        assert_eq!(status.code(), Code::PermissionDenied);
        assert_eq!(status.message(), "denied");
    }

    #[tokio::test]
    async fn unavailable_upstream_with_grpc_status() {
        let server = Server::new(|| {
            let mut response = Response::new(Body::from("no healthy upstream"));
            *response.status_mut() = StatusCode::SERVICE_UNAVAILABLE;
            response.headers_mut().insert("grpc-status", HeaderValue::from_static("14"));
            response
        });

        let status = echo(server, "ping").await.unwrap_err();
        assert_eq!(status.code(), Code::Unavailable);
    }

    #[tokio::test]
    async fn plain_http_error_maps_the_status_code() {
        let server = Server::new(|| {
            let mut response = Response::new(Body::from("upstream connect error"));
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response
        });

        let status = echo(server, "ping").await.unwrap_err();
        assert_eq!(status.code(), Code::Unauthenticated);
        assert!(status.message().contains("401"));
    }

    #[tokio::test]
    async fn connection_failure_is_unavailable() {
        let status = echo(Refused, "ping").await.unwrap_err();
        assert_eq!(status.code(), Code::Unavailable);
        assert!(status.message().contains("connection refused"));
    }

    #[tokio::test]
    async fn garbage_payload_is_internal() {
        let server = Server::new(|| Response::new(frames(&[(0x00, &[0x0a, 0x05, b'a'][..]), (0x80, &b"grpc-status:0\r\n"[..])])));

        let status = echo(server, "ping").await.unwrap_err();
        assert_eq!(status.code(), Code::Internal);
    }
}
