//! Topic, comment and engagement-tracking models.

use serde::{Deserialize, Serialize};

/// A topic within a forum.
///
/// `last_activity_at` is the creation time of the most recent comment, or the
/// topic's own creation time while it has no comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub forum_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub created_at: String,
    pub last_activity_at: String,
    pub comment_count: i64,
}

/// Request body for creating a topic.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    pub title: String,
}

/// A comment on a topic, ordered by creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    pub body: String,
    pub created_at: String,
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub body: String,
}

/// Per-user read marker for a topic. Absence of a marker means "never read".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicRead {
    pub topic_id: String,
    pub read_at: String,
}

/// Watcher set of a topic, consumed by notification fan-out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicWatchers {
    pub count: i64,
    pub user_ids: Vec<String>,
}
