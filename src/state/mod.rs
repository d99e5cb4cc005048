//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `sign_in`) so individual components
//! can depend on small focused models. Components receive state as
//! `RwSignal` contexts provided by the root `App`; nothing here is a
//! module-level global.

pub mod session;
pub mod sign_in;
