//! Axum extractor for the user a request acts on behalf of

use crate::{ApiError, AppState};

use confapi_core::Principal;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const USERNAME_HEADER: &str = "X-Username";

/// The already-authenticated principal of the request
///
/// Checks for the `X-Username` header first. If it is absent or blank, falls
/// back to the configured default user from api_config.
pub struct ActingUser(pub Principal);

impl FromRequestParts<AppState> for ActingUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let from_header = parts
                .headers
                .get(USERNAME_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|name| !name.is_empty());

            match from_header {
                Some(username) => {
                    log::debug!("Using user from {} header: {}", USERNAME_HEADER, username);
                    Ok(ActingUser(Principal::new(username)))
                }
                None => {
                    let username = &state.api_config.default_user;
                    log::debug!("Using default user: {}", username);
                    Ok(ActingUser(Principal::new(username.clone())))
                }
            }
        }
    }
}
