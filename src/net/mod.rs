//! Networking modules for the portal's remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls and collapses failures to display messages,
//! `interceptor` decides which requests carry the bearer header, and
//! `types` defines the wire schema.

pub mod api;
pub mod interceptor;
pub mod types;
