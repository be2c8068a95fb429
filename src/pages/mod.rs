//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form state, submission,
//! redirects) and keeps the remote-call plumbing inside the session
//! context's auth client.

pub mod dashboard;
pub mod login;
pub mod register;
