//! Domain layer for the corn delivery tracker
//!
//! Records as returned by the remote API, the pure formatting,
//! conversion and aggregation services, and the repository seam.

pub mod model;
pub mod repository;
pub mod service;
