//! Dashboard request helper with busy-indicator feedback.
//!
//! # Architecture
//!
//! This crate follows the two-layer pattern:
//! - `data` - immutable request configuration
//! - `effects` - the transport seam and the request orchestration
//!
//! # Key properties
//!
//! - **Mechanism-only**: no retries, no deadlines, no cancellation;
//!   those belong to the [`Transport`] implementation
//! - **Exactly-once completion**: one of `on_success`/`on_error` fires
//!   per call, never both
//! - **Indicator discipline**: a mounted busy indicator is stopped
//!   exactly once, on whichever completion path fires

mod data;
mod effects;
mod error;

pub use data::{Call, ErrorHandler, Method, Payload, RequestOptions, SuccessHandler};
pub use effects::{Indicator, NullIndicator, NullSurface, Requester, Surface, Transport};
pub use error::{BoxError, FailureKind, MethodParseError, TransportFailure};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestTransport;
