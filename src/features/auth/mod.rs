//! Auth feature module covering the request/response contract with the
//! backend and the per-screen validation schemas. Validation always runs
//! before a request is built; a schema failure never reaches the network.
//!
//! Flow Overview: Login exchanges credentials for the session triple.
//! Registration, password recovery, and password reset are opaque
//! success/failure calls surfaced as screen feedback.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod forms;
pub(crate) mod types;
