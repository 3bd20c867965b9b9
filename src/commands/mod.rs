//! Venue Endpoint Wrappers
//!
//! Frontend bindings to the venue HTTP endpoints, organized by domain.

mod venue;

pub use venue::*;
