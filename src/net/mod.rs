//! Network layer: request/response types and the REST helper for the
//! authentication endpoint.

pub mod api;
pub mod types;
