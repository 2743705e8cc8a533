//! Group model.
//!
//! A group is a plain named set of users. Whether it acts as a mediator,
//! power-user or visibility-restriction group is decided by the forum that
//! references it, not by the group itself.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
    pub created_at: String,
}

/// Request body for creating a group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
}
