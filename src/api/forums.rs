//! Forum API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{require_viewer, success, Actor, ApiResult};
use crate::access;
use crate::errors::AppError;
use crate::models::{
    CreateForumRequest, CreateTopicRequest, Forum, Topic, UpdateForumRequest,
    FORUM_DESCRIPTION_MAX, FORUM_NAME_MAX,
};
use crate::AppState;

const DEFAULT_PAGE_SIZE: usize = 25;

/// Query parameters for the forum listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListForumsQuery {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
    #[serde(default)]
    pub forum_group: Option<String>,
}

/// GET /api/forums - List forums visible to the caller.
pub async fn list_forums(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Query(query): Query<ListForumsQuery>,
) -> ApiResult<Vec<Forum>> {
    let forums = state.repo.list_forums().await?;

    let visible: Vec<Forum> = forums
        .into_iter()
        .filter(|f| access::can_see(actor.as_ref(), f))
        .filter(|f| match &query.forum_group {
            Some(group) => f.forum_group.as_deref() == Some(group.as_str()),
            None => true,
        })
        .collect();

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let paged = visible
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    success(paged)
}

/// GET /api/forums/:id - Get a single forum.
pub async fn get_forum(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<Forum> {
    let forum = fetch_forum(&state, &id).await?;

    if !access::can_see(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not view this forum".to_string(),
        ));
    }

    success(forum)
}

/// POST /api/forums - Create a new forum. Restricted to sysadmins.
pub async fn create_forum(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(request): Json<CreateForumRequest>,
) -> ApiResult<Forum> {
    if !actor.as_ref().is_some_and(|u| u.is_sysadmin()) {
        return Err(AppError::Forbidden(
            "Only sysadmins may create forums".to_string(),
        ));
    }

    validate_name(&request.name)?;
    validate_description(&request.description)?;

    let forum = state.repo.create_forum(&request).await?;
    tracing::info!(forum_id = %forum.id, name = %forum.name, "forum created");
    success(forum)
}

/// PUT /api/forums/:id - Update a forum. Restricted to editors.
pub async fn update_forum(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
    Json(request): Json<UpdateForumRequest>,
) -> ApiResult<Forum> {
    let forum = fetch_forum(&state, &id).await?;

    if !access::can_edit(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not edit this forum".to_string(),
        ));
    }

    if let Some(name) = &request.name {
        validate_name(name)?;
    }
    if let Some(description) = &request.description {
        validate_description(description)?;
    }

    let forum = state.repo.update_forum(&id, &request).await?;
    success(forum)
}

/// DELETE /api/forums/:id - Delete a forum once it owns no topics.
pub async fn delete_forum(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let forum = fetch_forum(&state, &id).await?;

    if !access::can_edit(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not delete this forum".to_string(),
        ));
    }
    if !access::can_delete(&forum) {
        return Err(AppError::Conflict(
            "Forum still owns topics and cannot be deleted".to_string(),
        ));
    }

    state.repo.delete_forum(&id).await?;
    tracing::info!(forum_id = %id, "forum deleted");
    success(())
}

/// GET /api/forums/:id/topics - List a forum's topics.
pub async fn list_forum_topics(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<Vec<Topic>> {
    let forum = fetch_forum(&state, &id).await?;

    if !access::can_see(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not view this forum".to_string(),
        ));
    }

    let topics = state.repo.list_topics(&forum.id).await?;
    success(topics)
}

/// POST /api/forums/:id/topics - Create a topic in the forum.
pub async fn create_forum_topic(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
    Json(request): Json<CreateTopicRequest>,
) -> ApiResult<Topic> {
    let forum = fetch_forum(&state, &id).await?;

    if !access::can_create_topic(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not create topics in this forum".to_string(),
        ));
    }

    if request.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let author_id = actor.as_ref().map(|u| u.id.as_str());
    let topic = state.repo.create_topic(&forum.id, &request, author_id).await?;
    success(topic)
}

/// GET /api/forums/:id/unread - Topics with activity the caller has not seen.
pub async fn unread_topics(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<Vec<Topic>> {
    let forum = fetch_forum(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    let topics = state.repo.unread_topics(&user.id, &forum.id).await?;
    success(topics)
}

/// POST /api/forums/:id/watch - Subscribe the caller to every topic in the forum.
pub async fn watch_forum(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let forum = fetch_forum(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    state.repo.watch_all_topics(&user.id, &forum.id).await?;
    success(())
}

/// DELETE /api/forums/:id/watch - Remove the caller's watches across the forum.
pub async fn unwatch_forum(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let forum = fetch_forum(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    state.repo.remove_all_topic_watches(&user.id, &forum.id).await?;
    success(())
}

async fn fetch_forum(state: &AppState, id: &str) -> Result<Forum, AppError> {
    state
        .repo
        .get_forum(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Forum {} not found", id)))
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if name.len() > FORUM_NAME_MAX {
        return Err(AppError::Validation(format!(
            "Name is too long (maximum is {} characters)",
            FORUM_NAME_MAX
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".to_string()));
    }
    if description.len() > FORUM_DESCRIPTION_MAX {
        return Err(AppError::Validation(format!(
            "Description is too long (maximum is {} characters)",
            FORUM_DESCRIPTION_MAX
        )));
    }
    Ok(())
}
