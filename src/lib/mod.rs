//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! 1. **Login:** POST `/auth/login` with email and password; the success
//!    payload carries the user identity and a bearer token that hydrate the
//!    session store.
//! 2. **Registration:** POST `/users`; the user is prompted to verify their
//!    email before signing in.
//! 3. **Password recovery:** POST `/users/forgot-password` sends a reset link;
//!    the linked screen validates its token via
//!    `/users/validate-reset-token` before allowing
//!    `/users/reset-password`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{post_json_with_headers, post_json_with_headers_response};
pub(crate) use errors::AppError;
