//! REST API module.
//!
//! The controller layer: every viewing or mutating route consults the
//! `crate::access` predicates before touching data.

mod forums;
mod topics;

pub use forums::*;
pub use topics::*;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::access;
use crate::errors::AppError;
use crate::models::{Forum, User};
use crate::AppState;

/// Header carrying the caller's user id.
///
/// The id is trusted as-is: verifying that the caller really is that user is
/// authentication and belongs to upstream infrastructure, not this service.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller's identity: a resolved user snapshot, or anonymous.
///
/// A missing header or an id that resolves to no user both yield the
/// anonymous actor, which every access predicate rejects.
pub struct Actor(pub Option<User>);

impl FromRequestParts<AppState> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(id) = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
        else {
            return Ok(Actor(None));
        };

        let user = state.repo.get_user(id).await?;
        Ok(Actor(user))
    }
}

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Resolve the actor to an identified user who may see the forum.
///
/// Operations that record per-user state (read markers, watches, comments)
/// need both: the anonymous actor is rejected along with users the forum is
/// hidden from.
pub(crate) fn require_viewer<'a>(
    actor: &'a Option<User>,
    forum: &Forum,
) -> Result<&'a User, AppError> {
    match actor.as_ref() {
        Some(user) if access::can_see(Some(user), forum) => Ok(user),
        _ => Err(AppError::Forbidden(
            "You may not view this forum".to_string(),
        )),
    }
}
