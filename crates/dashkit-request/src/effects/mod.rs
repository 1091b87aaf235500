//! The transport seam and the request orchestration.

mod http;
mod requester;
mod surface;

pub use http::Transport;
pub use requester::Requester;
pub use surface::{Indicator, NullIndicator, NullSurface, Surface};

#[cfg(feature = "reqwest")]
pub use http::ReqwestTransport;
