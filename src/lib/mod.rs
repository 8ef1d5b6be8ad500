//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flow
//!
//! 1. **Login:** The client POSTs credentials to `/token/` and receives an
//!    access/refresh token pair. The pair is only persisted after the current
//!    user is fetched successfully with the fresh access token.
//! 2. **Requests:** Every API call attaches `Authorization: Bearer` with the
//!    persisted access token when one exists.
//! 3. **Expiry:** A 401 answer triggers a single refresh via
//!    `/token/refresh/` followed by one retry of the original request. A
//!    failed refresh clears the session and returns the user to `/login`.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must still avoid logging
//! sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{delete_json, get_json, get_json_with_bearer, patch_json, post_json, put_json};
pub(crate) use errors::AppError;
