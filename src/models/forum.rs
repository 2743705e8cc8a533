//! Forum model and request bodies.

use serde::{Deserialize, Serialize};

/// Maximum length of a forum name.
pub const FORUM_NAME_MAX: usize = 50;
/// Maximum length of a forum description.
pub const FORUM_DESCRIPTION_MAX: usize = 150;

/// A discussion forum and its access-control configuration.
///
/// `visibility_group_ids` and `visibility_enterprise_types` are independent
/// OR-restrictions: when both are non-empty, satisfying either one grants
/// visibility. An empty restriction imposes no constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forum {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-form category label used to group forums in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_group: Option<String>,
    /// Members of this group may see and edit the forum unconditionally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mediator_group_id: Option<String>,
    /// Members of this group may create topics even when creation is restricted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_user_group_id: Option<String>,
    #[serde(default)]
    pub visibility_group_ids: Vec<String>,
    #[serde(default)]
    pub visibility_enterprise_types: Vec<String>,
    #[serde(default)]
    pub restrict_topic_creation: bool,
    pub topic_count: i64,
    pub created_at: String,
}

/// Request body for creating a forum.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForumRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub forum_group: Option<String>,
    #[serde(default)]
    pub mediator_group_id: Option<String>,
    #[serde(default)]
    pub power_user_group_id: Option<String>,
    #[serde(default)]
    pub visibility_group_ids: Vec<String>,
    #[serde(default)]
    pub visibility_enterprise_types: Vec<String>,
    #[serde(default)]
    pub restrict_topic_creation: bool,
}

/// Request body for updating a forum. Omitted fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateForumRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub forum_group: Option<String>,
    #[serde(default)]
    pub mediator_group_id: Option<String>,
    #[serde(default)]
    pub power_user_group_id: Option<String>,
    #[serde(default)]
    pub visibility_group_ids: Option<Vec<String>>,
    #[serde(default)]
    pub visibility_enterprise_types: Option<Vec<String>>,
    #[serde(default)]
    pub restrict_topic_creation: Option<bool>,
}
