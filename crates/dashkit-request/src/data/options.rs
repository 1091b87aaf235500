use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use super::Method;
use crate::error::{BoxError, FailureKind};

/// Continuation invoked with the response payload and the region the
/// busy indicator occupied (`None` when no indicator was mounted).
pub type SuccessHandler<R> = Box<dyn FnOnce(Bytes, Option<R>) + Send>;

/// Continuation invoked with the transport's status description and the
/// underlying error.
pub type ErrorHandler = Box<dyn FnOnce(FailureKind, BoxError) + Send>;

/// Request payload forms the transports understand.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Key/value pairs; a query string on body-less methods, a form body
    /// otherwise.
    Form(Vec<(String, String)>),
    /// JSON document, serialized up front.
    Json(serde_json::Value),
    /// Raw bytes; the caller supplies the content type.
    Bytes(Bytes),
}

impl Payload {
    /// Serialize any `Serialize` value into a JSON payload.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Payload::Json(serde_json::to_value(value)?))
    }
}

/// Configuration for one dashboard request.
///
/// `R` is the surface's region handle type, handed back to the success
/// continuation.
///
/// # Examples
///
/// ```
/// use dashkit_request::{Method, Payload, RequestOptions};
///
/// let options: RequestOptions<()> = RequestOptions::default()
///     .method(Method::Post)
///     .payload(Payload::Form(vec![("machine".into(), "7".into())]))
///     .region("machines.map")
///     .on_success(|data, _region| println!("{} bytes", data.len()));
/// ```
pub struct RequestOptions<R> {
    /// Request payload. Default: none.
    pub payload: Option<Payload>,
    /// HTTP method. Default: GET.
    pub method: Method,
    /// Explicit Content-Type header, overriding whatever the payload
    /// form implies. Default: none.
    pub content_type: Option<String>,
    /// UI region selector; when set, a busy indicator is mounted in
    /// every matched region for the duration of the call. Default: none.
    pub region: Option<String>,
    /// Completion continuation for the success path.
    pub on_success: Option<SuccessHandler<R>>,
    /// Completion continuation for the failure path.
    pub on_error: Option<ErrorHandler>,
}

impl<R> Default for RequestOptions<R> {
    fn default() -> Self {
        Self {
            payload: None,
            method: Method::default(),
            content_type: None,
            region: None,
            on_success: None,
            on_error: None,
        }
    }
}

impl<R> RequestOptions<R> {
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn region(mut self, selector: impl Into<String>) -> Self {
        self.region = Some(selector.into());
        self
    }

    pub fn on_success(mut self, f: impl FnOnce(Bytes, Option<R>) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(FailureKind, BoxError) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }
}

impl<R> fmt::Debug for RequestOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("payload", &self.payload)
            .field("method", &self.method)
            .field("content_type", &self.content_type)
            .field("region", &self.region)
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
