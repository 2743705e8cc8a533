//! Forum access-control predicates.
//!
//! Pure functions over entity snapshots: no storage access, no side effects,
//! total for well-formed inputs. The anonymous caller is `None`; every
//! predicate except the structural `can_delete` rejects it. Callers (the API
//! layer, batch jobs) consult these before any viewing or mutating operation.

use crate::models::{Forum, User};

/// Whether the user belongs to the forum's mediator group.
pub fn is_mediator(user: &User, forum: &Forum) -> bool {
    forum
        .mediator_group_id
        .as_deref()
        .is_some_and(|g| user.in_group(g))
}

/// Whether the actor may see the forum and its topics.
///
/// Sysadmins, prodmgrs and mediators always may. Otherwise the forum's two
/// visibility restrictions apply as independent OR-conditions: an empty
/// restriction is vacuously satisfied, and when both are non-empty satisfying
/// either one is sufficient.
pub fn can_see(actor: Option<&User>, forum: &Forum) -> bool {
    let Some(user) = actor else {
        return false;
    };
    if user.is_sysadmin() || user.is_prodmgr() || is_mediator(user, forum) {
        return true;
    }

    let group_restricted = !forum.visibility_group_ids.is_empty();
    let enterprise_restricted = !forum.visibility_enterprise_types.is_empty();
    if !group_restricted && !enterprise_restricted {
        // Public forum
        return true;
    }

    (group_restricted && forum.visibility_group_ids.iter().any(|g| user.in_group(g)))
        || (enterprise_restricted
            && user
                .enterprise_type
                .as_deref()
                .is_some_and(|t| forum.visibility_enterprise_types.iter().any(|e| e == t)))
}

/// Whether the actor may edit the forum. Visibility alone never grants this.
pub fn can_edit(actor: Option<&User>, forum: &Forum) -> bool {
    let Some(user) = actor else {
        return false;
    };
    user.is_sysadmin() || user.is_prodmgr() || is_mediator(user, forum)
}

/// Whether the forum may be deleted: only once it owns zero topics.
///
/// Identity-independent on purpose; the API layer gates deletion on
/// `can_edit` separately.
pub fn can_delete(forum: &Forum) -> bool {
    forum.topic_count == 0
}

/// Whether the actor holds power-user status for this forum.
pub fn is_power_user(actor: Option<&User>, forum: &Forum) -> bool {
    let Some(user) = actor else {
        return false;
    };
    forum
        .power_user_group_id
        .as_deref()
        .is_some_and(|g| user.in_group(g))
}

/// Whether the actor may create a topic in the forum.
///
/// Editors always may; otherwise creation is open unless the forum restricts
/// it to power users.
pub fn can_create_topic(actor: Option<&User>, forum: &Forum) -> bool {
    let Some(user) = actor else {
        return false;
    };
    can_edit(Some(user), forum)
        || !forum.restrict_topic_creation
        || is_power_user(Some(user), forum)
}
