//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the global stale-credential safety net;
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
