//! Database repository for all data operations.
//!
//! Uses prepared statements and transactions for data integrity. The
//! read-tracking and watch-list operations live here because they are reads
//! and writes of the two engagement relations; the access-control predicates
//! stay pure in `crate::access`.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Comment, CreateCommentRequest, CreateForumRequest, CreateGroupRequest, CreateTopicRequest,
    CreateUserRequest, Forum, Group, Role, Topic, TopicRead, UpdateForumRequest, User,
};

/// Topic rows are always selected with their derived activity columns.
const TOPIC_SELECT: &str = "SELECT t.id, t.forum_id, t.title, t.author_id, t.created_at, \
     COALESCE((SELECT MAX(c.created_at) FROM comments c WHERE c.topic_id = t.id), t.created_at) AS last_activity_at, \
     (SELECT COUNT(*) FROM comments c WHERE c.topic_id = t.id) AS comment_count \
     FROM topics t";

const FORUM_SELECT: &str = "SELECT f.id, f.name, f.description, f.forum_group, \
     f.mediator_group_id, f.power_user_group_id, f.restrict_topic_creation, f.created_at, \
     (SELECT COUNT(*) FROM topics t WHERE t.forum_id = f.id) AS topic_count \
     FROM forums f";

/// Format a timestamp for storage. Fixed-width UTC so that lexicographic
/// order on the stored text matches chronological order; the read-tracking
/// queries compare and MAX() these columns as text.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn now_timestamp() -> String {
    timestamp(Utc::now())
}

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== USER & GROUP OPERATIONS ====================
    //
    // Identity is owned by external user-management code; these operations
    // exist so the owning layer (and tests) can register snapshots.

    /// Register a user snapshot.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();
        let roles_json = serde_json::to_string(&request.roles)?;

        sqlx::query(
            "INSERT INTO users (id, display_name, roles, enterprise_type, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.display_name)
        .bind(&roles_json)
        .bind(&request.enterprise_type)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            display_name: request.display_name.clone(),
            roles: request.roles.clone(),
            enterprise_type: request.enterprise_type.clone(),
            group_ids: Vec::new(),
            created_at: now,
        })
    }

    /// Get a user by ID, with their group memberships resolved.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, display_name, roles, enterprise_type, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let group_ids = sqlx::query(
            "SELECT group_id FROM group_members WHERE user_id = ? ORDER BY group_id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| r.get("group_id"))
        .collect();

        Ok(Some(user_from_row(&row, group_ids)))
    }

    /// Create a group with an initial member set.
    pub async fn create_group(&self, request: &CreateGroupRequest) -> Result<Group, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO groups (id, name, created_at) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&request.name)
            .bind(&now)
            .execute(&mut *tx)
            .await?;

        for user_id in &request.member_ids {
            sqlx::query("INSERT OR IGNORE INTO group_members (group_id, user_id) VALUES (?, ?)")
                .bind(&id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Group {
            id,
            name: request.name.clone(),
            member_ids: request.member_ids.clone(),
            created_at: now,
        })
    }

    /// Get a group by ID, with its member set.
    pub async fn get_group(&self, id: &str) -> Result<Option<Group>, AppError> {
        let row = sqlx::query("SELECT id, name, created_at FROM groups WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let member_ids = sqlx::query(
            "SELECT user_id FROM group_members WHERE group_id = ? ORDER BY user_id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| r.get("user_id"))
        .collect();

        Ok(Some(Group {
            id: row.get("id"),
            name: row.get("name"),
            member_ids,
            created_at: row.get("created_at"),
        }))
    }

    /// Add a user to a group. Idempotent.
    pub async fn add_group_member(&self, group_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO group_members (group_id, user_id) VALUES (?, ?)")
            .bind(group_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ==================== FORUM OPERATIONS ====================

    /// List all forums ordered by name.
    pub async fn list_forums(&self) -> Result<Vec<Forum>, AppError> {
        let rows = sqlx::query(&format!("{FORUM_SELECT} ORDER BY f.name"))
            .fetch_all(&self.pool)
            .await?;

        let mut forums = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut forum = forum_from_row(row);
            self.load_forum_restrictions(&mut forum).await?;
            forums.push(forum);
        }
        Ok(forums)
    }

    /// Get a forum by ID.
    pub async fn get_forum(&self, id: &str) -> Result<Option<Forum>, AppError> {
        let row = sqlx::query(&format!("{FORUM_SELECT} WHERE f.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut forum = forum_from_row(&row);
        self.load_forum_restrictions(&mut forum).await?;
        Ok(Some(forum))
    }

    /// Get a forum by its unique name.
    pub async fn get_forum_by_name(&self, name: &str) -> Result<Option<Forum>, AppError> {
        let row = sqlx::query(&format!("{FORUM_SELECT} WHERE f.name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut forum = forum_from_row(&row);
        self.load_forum_restrictions(&mut forum).await?;
        Ok(Some(forum))
    }

    /// Create a new forum.
    pub async fn create_forum(&self, request: &CreateForumRequest) -> Result<Forum, AppError> {
        if self.get_forum_by_name(&request.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Forum name '{}' is already taken",
                request.name
            )));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO forums (id, name, description, forum_group, mediator_group_id, power_user_group_id, restrict_topic_creation, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.forum_group)
        .bind(&request.mediator_group_id)
        .bind(&request.power_user_group_id)
        .bind(request.restrict_topic_creation as i32)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        for group_id in &request.visibility_group_ids {
            sqlx::query(
                "INSERT OR IGNORE INTO forum_visibility_groups (forum_id, group_id) VALUES (?, ?)",
            )
            .bind(&id)
            .bind(group_id)
            .execute(&mut *tx)
            .await?;
        }

        for enterprise_type in &request.visibility_enterprise_types {
            sqlx::query(
                "INSERT OR IGNORE INTO forum_enterprise_types (forum_id, enterprise_type) VALUES (?, ?)",
            )
            .bind(&id)
            .bind(enterprise_type)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Forum {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            forum_group: request.forum_group.clone(),
            mediator_group_id: request.mediator_group_id.clone(),
            power_user_group_id: request.power_user_group_id.clone(),
            visibility_group_ids: request.visibility_group_ids.clone(),
            visibility_enterprise_types: request.visibility_enterprise_types.clone(),
            restrict_topic_creation: request.restrict_topic_creation,
            topic_count: 0,
            created_at: now,
        })
    }

    /// Update a forum. Fields omitted from the request are left unchanged.
    pub async fn update_forum(
        &self,
        id: &str,
        request: &UpdateForumRequest,
    ) -> Result<Forum, AppError> {
        let existing = self
            .get_forum(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Forum {} not found", id)))?;

        if let Some(name) = &request.name {
            if name != &existing.name && self.get_forum_by_name(name).await?.is_some() {
                return Err(AppError::Conflict(format!(
                    "Forum name '{}' is already taken",
                    name
                )));
            }
        }

        let name = request.name.as_ref().unwrap_or(&existing.name);
        let description = request
            .description
            .as_ref()
            .unwrap_or(&existing.description);
        let forum_group = request.forum_group.clone().or(existing.forum_group.clone());
        let mediator_group_id = request
            .mediator_group_id
            .clone()
            .or(existing.mediator_group_id.clone());
        let power_user_group_id = request
            .power_user_group_id
            .clone()
            .or(existing.power_user_group_id.clone());
        let visibility_group_ids = request
            .visibility_group_ids
            .clone()
            .unwrap_or(existing.visibility_group_ids.clone());
        let visibility_enterprise_types = request
            .visibility_enterprise_types
            .clone()
            .unwrap_or(existing.visibility_enterprise_types.clone());
        let restrict_topic_creation = request
            .restrict_topic_creation
            .unwrap_or(existing.restrict_topic_creation);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE forums SET name = ?, description = ?, forum_group = ?, mediator_group_id = ?, power_user_group_id = ?, restrict_topic_creation = ? WHERE id = ?",
        )
        .bind(name)
        .bind(description)
        .bind(&forum_group)
        .bind(&mediator_group_id)
        .bind(&power_user_group_id)
        .bind(restrict_topic_creation as i32)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if request.visibility_group_ids.is_some() {
            sqlx::query("DELETE FROM forum_visibility_groups WHERE forum_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for group_id in &visibility_group_ids {
                sqlx::query(
                    "INSERT OR IGNORE INTO forum_visibility_groups (forum_id, group_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(group_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        if request.visibility_enterprise_types.is_some() {
            sqlx::query("DELETE FROM forum_enterprise_types WHERE forum_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            for enterprise_type in &visibility_enterprise_types {
                sqlx::query(
                    "INSERT OR IGNORE INTO forum_enterprise_types (forum_id, enterprise_type) VALUES (?, ?)",
                )
                .bind(id)
                .bind(enterprise_type)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        Ok(Forum {
            id: id.to_string(),
            name: name.clone(),
            description: description.clone(),
            forum_group,
            mediator_group_id,
            power_user_group_id,
            visibility_group_ids,
            visibility_enterprise_types,
            restrict_topic_creation,
            topic_count: existing.topic_count,
            created_at: existing.created_at,
        })
    }

    /// Delete a forum and its restriction rows.
    ///
    /// The structural "no topics left" guard is `access::can_delete`, checked
    /// by the caller before getting here.
    pub async fn delete_forum(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM forums WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Forum {} not found", id)));
        }

        sqlx::query("DELETE FROM forum_visibility_groups WHERE forum_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM forum_enterprise_types WHERE forum_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    // ==================== TOPIC & COMMENT OPERATIONS ====================

    /// List a forum's topics in creation order.
    pub async fn list_topics(&self, forum_id: &str) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query(&format!(
            "{TOPIC_SELECT} WHERE t.forum_id = ? ORDER BY t.created_at"
        ))
        .bind(forum_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(topic_from_row).collect())
    }

    /// Get a topic by ID.
    pub async fn get_topic(&self, id: &str) -> Result<Option<Topic>, AppError> {
        let row = sqlx::query(&format!("{TOPIC_SELECT} WHERE t.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(topic_from_row))
    }

    /// Create a topic in a forum.
    pub async fn create_topic(
        &self,
        forum_id: &str,
        request: &CreateTopicRequest,
        author_id: Option<&str>,
    ) -> Result<Topic, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        sqlx::query(
            "INSERT INTO topics (id, forum_id, title, author_id, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(forum_id)
        .bind(&request.title)
        .bind(author_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Topic {
            id,
            forum_id: forum_id.to_string(),
            title: request.title.clone(),
            author_id: author_id.map(str::to_string),
            created_at: now.clone(),
            last_activity_at: now,
            comment_count: 0,
        })
    }

    /// Delete a topic together with its comments, watches and read markers.
    pub async fn delete_topic(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM topics WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Topic {} not found", id)));
        }

        sqlx::query("DELETE FROM comments WHERE topic_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM topic_watchers WHERE topic_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM user_topic_reads WHERE topic_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// List a topic's comments in creation order.
    pub async fn list_comments(&self, topic_id: &str) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query(
            "SELECT id, topic_id, author_id, body, created_at FROM comments WHERE topic_id = ? ORDER BY created_at",
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(comment_from_row).collect())
    }

    /// Post a comment on a topic.
    pub async fn create_comment(
        &self,
        topic_id: &str,
        request: &CreateCommentRequest,
        author_id: Option<&str>,
    ) -> Result<Comment, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        sqlx::query(
            "INSERT INTO comments (id, topic_id, author_id, body, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(topic_id)
        .bind(author_id)
        .bind(&request.body)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Comment {
            id,
            topic_id: topic_id.to_string(),
            author_id: author_id.map(str::to_string),
            body: request.body.clone(),
            created_at: now,
        })
    }

    // ==================== READ TRACKING ====================

    /// Topics in the forum with activity the user has not seen yet, in
    /// creation order. A topic is unread when it has no read marker for the
    /// user, or its last activity is strictly newer than the marker.
    pub async fn unread_topics(&self, user_id: &str, forum_id: &str) -> Result<Vec<Topic>, AppError> {
        let rows = sqlx::query(&format!(
            "{TOPIC_SELECT} \
             LEFT JOIN user_topic_reads r ON r.topic_id = t.id AND r.user_id = ? \
             WHERE t.forum_id = ? \
               AND (r.read_at IS NULL OR r.read_at < COALESCE((SELECT MAX(c.created_at) FROM comments c WHERE c.topic_id = t.id), t.created_at)) \
             ORDER BY t.created_at"
        ))
        .bind(user_id)
        .bind(forum_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(topic_from_row).collect())
    }

    /// Record that the user has seen the topic's activity as of `at`.
    ///
    /// Single-row upsert keeping the maximum of the stored and supplied
    /// timestamps, so the marker never moves backward and concurrent calls
    /// converge regardless of arrival order.
    pub async fn mark_topic_read(
        &self,
        user_id: &str,
        topic_id: &str,
        at: DateTime<Utc>,
    ) -> Result<TopicRead, AppError> {
        sqlx::query(
            "INSERT INTO user_topic_reads (user_id, topic_id, read_at) VALUES (?, ?, ?) \
             ON CONFLICT(user_id, topic_id) DO UPDATE SET read_at = MAX(read_at, excluded.read_at)",
        )
        .bind(user_id)
        .bind(topic_id)
        .bind(timestamp(at))
        .execute(&self.pool)
        .await?;

        let read_at = self
            .get_topic_read(user_id, topic_id)
            .await?
            .ok_or_else(|| AppError::Internal("Read marker missing after upsert".to_string()))?;

        Ok(TopicRead {
            topic_id: topic_id.to_string(),
            read_at,
        })
    }

    /// Get the stored read marker for (user, topic), if any.
    pub async fn get_topic_read(
        &self,
        user_id: &str,
        topic_id: &str,
    ) -> Result<Option<String>, AppError> {
        let row = sqlx::query(
            "SELECT read_at FROM user_topic_reads WHERE user_id = ? AND topic_id = ?",
        )
        .bind(user_id)
        .bind(topic_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get("read_at")))
    }

    // ==================== WATCH LIST ====================

    /// Subscribe the user to every topic in the forum.
    ///
    /// A single set-union statement: already-watched topics are untouched, so
    /// the call is idempotent and safe to retry after partial failure.
    pub async fn watch_all_topics(&self, user_id: &str, forum_id: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT OR IGNORE INTO topic_watchers (topic_id, user_id) \
             SELECT id, ? FROM topics WHERE forum_id = ?",
        )
        .bind(user_id)
        .bind(forum_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Remove the user's subscription from every topic in the forum.
    pub async fn remove_all_topic_watches(
        &self,
        user_id: &str,
        forum_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            "DELETE FROM topic_watchers WHERE user_id = ? \
             AND topic_id IN (SELECT id FROM topics WHERE forum_id = ?)",
        )
        .bind(user_id)
        .bind(forum_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Subscribe the user to a single topic. Idempotent.
    pub async fn watch_topic(&self, user_id: &str, topic_id: &str) -> Result<(), AppError> {
        sqlx::query("INSERT OR IGNORE INTO topic_watchers (topic_id, user_id) VALUES (?, ?)")
            .bind(topic_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Remove the user's subscription from a single topic. Idempotent.
    pub async fn unwatch_topic(&self, user_id: &str, topic_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM topic_watchers WHERE topic_id = ? AND user_id = ?")
            .bind(topic_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Enumerate the users watching a topic.
    pub async fn topic_watchers(&self, topic_id: &str) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query(
            "SELECT user_id FROM topic_watchers WHERE topic_id = ? ORDER BY user_id",
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.get("user_id")).collect())
    }

    /// Number of users watching a topic.
    pub async fn watcher_count(&self, topic_id: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM topic_watchers WHERE topic_id = ?")
            .bind(topic_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("count"))
    }

    async fn load_forum_restrictions(&self, forum: &mut Forum) -> Result<(), AppError> {
        forum.visibility_group_ids = sqlx::query(
            "SELECT group_id FROM forum_visibility_groups WHERE forum_id = ? ORDER BY group_id",
        )
        .bind(&forum.id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| r.get("group_id"))
        .collect();

        forum.visibility_enterprise_types = sqlx::query(
            "SELECT enterprise_type FROM forum_enterprise_types WHERE forum_id = ? ORDER BY enterprise_type",
        )
        .bind(&forum.id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|r| r.get("enterprise_type"))
        .collect();

        Ok(())
    }
}

// Helper functions for row conversion

fn user_from_row(row: &sqlx::sqlite::SqliteRow, group_ids: Vec<String>) -> User {
    let roles_str: String = row.get("roles");
    User {
        id: row.get("id"),
        display_name: row.get("display_name"),
        roles: parse_roles(&roles_str),
        enterprise_type: row.get("enterprise_type"),
        group_ids,
        created_at: row.get("created_at"),
    }
}

fn forum_from_row(row: &sqlx::sqlite::SqliteRow) -> Forum {
    let restrict_topic_creation: i32 = row.get("restrict_topic_creation");
    Forum {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        forum_group: row.get("forum_group"),
        mediator_group_id: row.get("mediator_group_id"),
        power_user_group_id: row.get("power_user_group_id"),
        visibility_group_ids: Vec::new(),
        visibility_enterprise_types: Vec::new(),
        restrict_topic_creation: restrict_topic_creation != 0,
        topic_count: row.get("topic_count"),
        created_at: row.get("created_at"),
    }
}

fn topic_from_row(row: &sqlx::sqlite::SqliteRow) -> Topic {
    Topic {
        id: row.get("id"),
        forum_id: row.get("forum_id"),
        title: row.get("title"),
        author_id: row.get("author_id"),
        created_at: row.get("created_at"),
        last_activity_at: row.get("last_activity_at"),
        comment_count: row.get("comment_count"),
    }
}

fn comment_from_row(row: &sqlx::sqlite::SqliteRow) -> Comment {
    Comment {
        id: row.get("id"),
        topic_id: row.get("topic_id"),
        author_id: row.get("author_id"),
        body: row.get("body"),
        created_at: row.get("created_at"),
    }
}

fn parse_roles(s: &str) -> Vec<Role> {
    serde_json::from_str(s).unwrap_or_default()
}
