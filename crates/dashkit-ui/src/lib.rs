//! Terminal busy-indicator surface for dashboard requests.
//!
//! [`Board`] implements the request helper's `Surface` seam with
//! indicatif: named regions sharing one draw area, with a spinner
//! mounted per matched region while a request is outstanding.

mod board;
mod spinner;

pub use board::{Board, RegionSet};
pub use spinner::Spinner;
