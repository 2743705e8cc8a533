//! User snapshot consumed by the access-control predicates.

use serde::{Deserialize, Serialize};

/// Global roles that bypass forum-level restrictions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sysadmin,
    Prodmgr,
}

/// A user as the engine sees them: roles, enterprise type and group
/// memberships, frozen at load time. Lifecycle is owned by external
/// user-management code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_type: Option<String>,
    /// Ids of every group the user belongs to.
    #[serde(default)]
    pub group_ids: Vec<String>,
    pub created_at: String,
}

impl User {
    pub fn is_sysadmin(&self) -> bool {
        self.roles.contains(&Role::Sysadmin)
    }

    pub fn is_prodmgr(&self) -> bool {
        self.roles.contains(&Role::Prodmgr)
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.group_ids.iter().any(|g| g == group_id)
    }
}

/// Request body for registering a user snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub enterprise_type: Option<String>,
}
