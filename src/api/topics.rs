//! Topic API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use super::{require_viewer, success, Actor, ApiResult};
use crate::access;
use crate::errors::AppError;
use crate::models::{
    Comment, CreateCommentRequest, Forum, Topic, TopicRead, TopicWatchers,
};
use crate::AppState;

/// GET /api/topics/:id - Get a single topic.
pub async fn get_topic(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<Topic> {
    let (topic, forum) = fetch_topic(&state, &id).await?;

    if !access::can_see(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not view this topic".to_string(),
        ));
    }

    success(topic)
}

/// DELETE /api/topics/:id - Delete a topic. Restricted to forum editors.
pub async fn delete_topic(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let (topic, forum) = fetch_topic(&state, &id).await?;

    if !access::can_edit(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not delete topics in this forum".to_string(),
        ));
    }

    state.repo.delete_topic(&topic.id).await?;
    tracing::info!(topic_id = %topic.id, forum_id = %forum.id, "topic deleted");
    success(())
}

/// GET /api/topics/:id/comments - List a topic's comments.
pub async fn list_comments(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<Vec<Comment>> {
    let (topic, forum) = fetch_topic(&state, &id).await?;

    if !access::can_see(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not view this topic".to_string(),
        ));
    }

    let comments = state.repo.list_comments(&topic.id).await?;
    success(comments)
}

/// POST /api/topics/:id/comments - Post a comment.
///
/// New activity on the topic; notification delivery to the topic's watchers
/// is the notification sender's job, driven off the watcher relation.
pub async fn create_comment(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
    Json(request): Json<CreateCommentRequest>,
) -> ApiResult<Comment> {
    let (topic, forum) = fetch_topic(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    if request.body.trim().is_empty() {
        return Err(AppError::Validation("Body is required".to_string()));
    }

    let comment = state
        .repo
        .create_comment(&topic.id, &request, Some(&user.id))
        .await?;
    success(comment)
}

/// POST /api/topics/:id/read - Mark the topic's activity as seen by the caller.
pub async fn mark_topic_read(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<TopicRead> {
    let (topic, forum) = fetch_topic(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    let read = state
        .repo
        .mark_topic_read(&user.id, &topic.id, Utc::now())
        .await?;
    success(read)
}

/// POST /api/topics/:id/watch - Subscribe the caller to the topic.
pub async fn watch_topic(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let (topic, forum) = fetch_topic(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    state.repo.watch_topic(&user.id, &topic.id).await?;
    success(())
}

/// DELETE /api/topics/:id/watch - Unsubscribe the caller from the topic.
pub async fn unwatch_topic(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let (topic, forum) = fetch_topic(&state, &id).await?;
    let user = require_viewer(&actor, &forum)?;

    state.repo.unwatch_topic(&user.id, &topic.id).await?;
    success(())
}

/// GET /api/topics/:id/watchers - Watcher set, consumed by notification fan-out.
pub async fn get_watchers(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Path(id): Path<String>,
) -> ApiResult<TopicWatchers> {
    let (topic, forum) = fetch_topic(&state, &id).await?;

    if !access::can_see(actor.as_ref(), &forum) {
        return Err(AppError::Forbidden(
            "You may not view this topic".to_string(),
        ));
    }

    let user_ids = state.repo.topic_watchers(&topic.id).await?;
    success(TopicWatchers {
        count: user_ids.len() as i64,
        user_ids,
    })
}

async fn fetch_topic(state: &AppState, id: &str) -> Result<(Topic, Forum), AppError> {
    let topic = state
        .repo
        .get_topic(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Topic {} not found", id)))?;

    let forum = state
        .repo
        .get_forum(&topic.forum_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Forum {} not found", topic.forum_id)))?;

    Ok((topic, forum))
}
