use std::future::Future;

use bytes::Bytes;

use crate::data::Call;
use crate::error::TransportFailure;

/// Asynchronous HTTP transport abstraction.
///
/// This trait is the minimal seam the request helper needs.
/// Implementations handle their own redirect following, timeout
/// configuration and connection reuse; the helper adds no retry or
/// deadline of its own. Resolving the returned future exactly once is
/// what carries the one-completion-per-request contract.
///
/// # Implementations
///
/// - [`ReqwestTransport`]: production implementation using `reqwest`
/// - Scripted implementations for testing
pub trait Transport: Send + Sync {
    /// Error type for failed dispatches.
    type Error: std::error::Error + Send + 'static;

    /// Issue one request and resolve with the full response payload.
    fn dispatch(
        &self,
        call: Call<'_>,
    ) -> impl Future<Output = Result<Bytes, TransportFailure<Self::Error>>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::{Method, Payload};
    use crate::error::FailureKind;

    /// Production transport backed by `reqwest`.
    ///
    /// Owns a pooled [`reqwest::Client`]; clones share the pool.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Transport over a default client.
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }

        /// Transport over a caller-configured client (proxies, deadlines,
        /// user agent).
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    fn classify(error: &reqwest::Error) -> FailureKind {
        if error.is_timeout() {
            FailureKind::Timeout
        } else if error.is_connect() {
            FailureKind::Connect
        } else if let Some(status) = error.status() {
            FailureKind::Status(status.as_u16())
        } else if error.is_body() || error.is_decode() {
            FailureKind::Body
        } else {
            FailureKind::Request
        }
    }

    impl Transport for ReqwestTransport {
        type Error = reqwest::Error;

        async fn dispatch(
            &self,
            call: Call<'_>,
        ) -> Result<Bytes, TransportFailure<Self::Error>> {
            let method = match call.method {
                Method::Get => reqwest::Method::GET,
                Method::Head => reqwest::Method::HEAD,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut request = self.client.request(method, call.url);

            if let Some(payload) = call.payload {
                request = match payload {
                    Payload::Form(pairs) if !call.method.carries_body() => request.query(pairs),
                    Payload::Form(pairs) => request.form(pairs),
                    Payload::Json(value) => request.json(value),
                    Payload::Bytes(bytes) => request.body(bytes.clone()),
                };
            }

            // An explicit content type wins over whatever the payload
            // form made reqwest set.
            if let Some(content_type) = call.content_type {
                request = request.header(reqwest::header::CONTENT_TYPE, content_type);
            }

            let response = request.send().await.map_err(|e| TransportFailure {
                kind: classify(&e),
                source: e,
            })?;

            let response = response.error_for_status().map_err(|e| TransportFailure {
                kind: classify(&e),
                source: e,
            })?;

            response.bytes().await.map_err(|e| TransportFailure {
                kind: FailureKind::Body,
                source: e,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
