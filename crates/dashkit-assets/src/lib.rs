//! Static asset path lookups for the dashboard.
//!
//! Markers and gauges are pre-rendered images served from the static
//! asset tree; these lookups map domain values onto those paths. Both
//! lookups are pure: unknown inputs yield `None` and callers render
//! their own fallback.

mod gauge;
mod marker;

pub use gauge::{GaugeLevel, gauge_icon};
pub use marker::{MachineModel, UnknownModelError, marker_icon};
