//! Client support toolkit for the machine-maintenance dashboard.
//!
//! Re-exports from the specialized crates for convenience: the request
//! helper with its transport and surface seams, the marker and gauge
//! asset lookups, and the positional template formatter.

pub use dashkit_assets::{GaugeLevel, MachineModel, UnknownModelError, gauge_icon, marker_icon};
pub use dashkit_request::{
    BoxError, Call, FailureKind, Indicator, Method, MethodParseError, NullIndicator,
    NullSurface, Payload, RequestOptions, Requester, Surface, Transport, TransportFailure,
};
pub use dashkit_text::PositionalFormat;
pub use dashkit_ui::{Board, RegionSet, Spinner};

#[cfg(feature = "reqwest")]
pub use dashkit_request::ReqwestTransport;
