//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! The identity provider talks to the hosted backend with cookie-based calls:
//! `GET /v1/auth/session` hydrates the signed-in user, `GET /v1/me/role` resolves
//! their role, and sign-in/sign-out post to `/v1/auth/*`. Nothing here stores
//! tokens; callers must still avoid logging guest email addresses.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;

pub(crate) use api::{
    get_optional_json_with_credentials, post_empty_with_credentials,
    post_json_with_credentials_response,
};
pub(crate) use errors::AppError;
