//! Domain records persisted in the local slot store.
//!
//! Every struct derives `Serialize` and `Deserialize`; slot values are plain
//! JSON arrays or objects of these records, with camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Access level attached to an [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Author,
    Reader,
}

/// A user account record.  Unique by `id` and by `email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// Avatar image URL.
    pub avatar: String,
    /// Accumulated simulated ad revenue, in dollars.
    pub earnings: f64,
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// A story in the collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable post identifier.
    pub id: String,
    pub title: String,
    /// Short teaser shown by list views.
    pub excerpt: String,
    /// Full body, markdown.
    pub content: String,
    /// Cover image URL.
    pub cover_image: String,
    /// Id of the authoring [`Identity`].  Not validated against the
    /// directory.
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub likes: u64,
    pub tags: Vec<String>,
    pub published: bool,
    /// Reader responses, in insertion order.
    pub comments: Vec<Comment>,
}

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A reader response.  Owned by its parent [`Post`]; appended, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
