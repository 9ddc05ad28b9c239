//! The record service: sole mediator between callers and the slot store.
//!
//! Every operation is a full read of the relevant slot, an in-memory
//! transformation, and a full write-back.  A missing or unreadable slot
//! falls back to seed data (directory, collection) or to empty (session,
//! liked set); only backend failures propagate.  [`RecordService::login`] is
//! the one operation with a caller-visible not-found outcome.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::models::{Comment, Identity, Post};
use crate::seed;
use crate::slots::{SlotStore, SqliteSlots};

/// Slot holding the user directory (JSON array of [`Identity`]).
pub const USERS_SLOT: &str = "lumina_users";
/// Slot holding the post collection (JSON array of [`Post`]).
pub const POSTS_SLOT: &str = "lumina_posts";
/// Slot holding the signed-in identity (single JSON object).
pub const SESSION_SLOT: &str = "lumina_current_user";
/// Slot holding ids of posts this installation has liked (JSON array).
pub const LIKED_SLOT: &str = "lumina_liked_posts";

/// Typed read/write operations over a [`SlotStore`].
pub struct RecordService<S> {
    slots: S,
}

impl RecordService<SqliteSlots> {
    /// Open a record service over the default on-disk slot store.
    pub fn open() -> Result<Self> {
        Ok(Self::new(SqliteSlots::new()?))
    }

    /// Open a record service over a slot store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        Ok(Self::new(SqliteSlots::open_at(path)?))
    }
}

impl<S: SlotStore> RecordService<S> {
    /// Wrap an existing slot store.
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    // ------------------------------------------------------------------
    // Slot plumbing
    // ------------------------------------------------------------------

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>> {
        let Some(bytes) = self.slots.get(slot)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(slot, error = %e, "unreadable slot value, treating as absent");
                Ok(None)
            }
        }
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.slots.set(slot, &bytes)
    }

    // ------------------------------------------------------------------
    // Directory
    // ------------------------------------------------------------------

    /// The user directory, seeded on first read.
    pub fn list_users(&self) -> Result<Vec<Identity>> {
        Ok(self.read_slot(USERS_SLOT)?.unwrap_or_else(seed::users))
    }

    /// Credit simulated ad revenue to an author.
    ///
    /// The session holds an independent copy of its identity, so when the
    /// credited author is also the session it receives the same delta.
    /// Unknown ids are a no-op.
    pub fn increment_revenue(&self, author_id: &str, amount: f64) -> Result<()> {
        let mut users = self.list_users()?;
        let Some(user) = users.iter_mut().find(|u| u.id == author_id) else {
            return Ok(());
        };
        user.earnings += amount;
        self.write_slot(USERS_SLOT, &users)?;

        if let Some(mut session) = self.current_session()? {
            if session.id == author_id {
                session.earnings += amount;
                self.write_slot(SESSION_SLOT, &session)?;
            }
        }

        debug!(author = author_id, amount, "revenue credited");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------

    /// The post collection, seeded on first read.
    pub fn list_posts(&self) -> Result<Vec<Post>> {
        Ok(self.read_slot(POSTS_SLOT)?.unwrap_or_else(seed::posts))
    }

    /// Replace the post with the same id in place, or insert at the front
    /// of the collection.  Saving an identical post is idempotent.
    pub fn save_post(&self, post: &Post) -> Result<()> {
        let mut posts = self.list_posts()?;
        match posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post.clone(),
            None => posts.insert(0, post.clone()),
        }
        self.write_slot(POSTS_SLOT, &posts)
    }

    /// Remove the post with the given id.  Unknown ids are a no-op.
    pub fn delete_post(&self, id: &str) -> Result<()> {
        let mut posts = self.list_posts()?;
        posts.retain(|p| p.id != id);
        self.write_slot(POSTS_SLOT, &posts)
    }

    /// Add one to a post's view counter.  Unknown ids are a no-op.
    pub fn increment_view(&self, post_id: &str) -> Result<()> {
        let mut posts = self.list_posts()?;
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.views += 1;
            self.write_slot(POSTS_SLOT, &posts)?;
        }
        Ok(())
    }

    /// Append a comment to a post.  Unknown post ids are a no-op.
    pub fn add_comment(&self, post_id: &str, comment: Comment) -> Result<()> {
        let mut posts = self.list_posts()?;
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.comments.push(comment);
            self.write_slot(POSTS_SLOT, &posts)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// The signed-in identity, if any.
    pub fn current_session(&self) -> Result<Option<Identity>> {
        self.read_slot(SESSION_SLOT)
    }

    /// Look up an identity by exact email match and make it the session.
    ///
    /// Fails with [`StoreError::NotFound`] when no directory entry matches;
    /// the session is left untouched in that case.
    pub fn login(&self, email: &str) -> Result<Identity> {
        let users = self.list_users()?;
        let user = users
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(StoreError::NotFound)?;
        self.write_slot(SESSION_SLOT, &user)?;
        debug!(user = %user.id, "session opened");
        Ok(user)
    }

    /// Clear the session and the liked set.
    pub fn logout(&self) -> Result<()> {
        self.slots.remove(SESSION_SLOT)?;
        self.slots.remove(LIKED_SLOT)
    }

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    fn liked_ids(&self) -> Result<Vec<String>> {
        Ok(self.read_slot(LIKED_SLOT)?.unwrap_or_default())
    }

    /// Flip the liked state of a post for this installation.
    ///
    /// The post's like counter moves with the membership and never drops
    /// below zero.  Returns the new membership; unknown post ids are a
    /// no-op returning `false`.
    pub fn toggle_like(&self, post_id: &str) -> Result<bool> {
        let mut posts = self.list_posts()?;
        let Some(post) = posts.iter_mut().find(|p| p.id == post_id) else {
            return Ok(false);
        };

        let mut liked = self.liked_ids()?;
        let now_liked = if let Some(idx) = liked.iter().position(|id| id == post_id) {
            liked.remove(idx);
            post.likes = post.likes.saturating_sub(1);
            false
        } else {
            liked.push(post_id.to_string());
            post.likes += 1;
            true
        };

        self.write_slot(LIKED_SLOT, &liked)?;
        self.write_slot(POSTS_SLOT, &posts)?;
        Ok(now_liked)
    }

    /// Whether this installation has liked the post.
    pub fn has_liked(&self, post_id: &str) -> Result<bool> {
        Ok(self.liked_ids()?.iter().any(|id| id == post_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::slots::MemorySlots;
    use chrono::Utc;

    fn service() -> RecordService<MemorySlots> {
        RecordService::new(MemorySlots::new())
    }

    fn post_by_id(svc: &RecordService<MemorySlots>, id: &str) -> Post {
        svc.list_posts()
            .unwrap()
            .into_iter()
            .find(|p| p.id == id)
            .expect("post should exist")
    }

    fn user_by_id(svc: &RecordService<MemorySlots>, id: &str) -> Identity {
        svc.list_users()
            .unwrap()
            .into_iter()
            .find(|u| u.id == id)
            .expect("user should exist")
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_store_serves_seed_data() {
        let svc = service();
        assert_eq!(svc.list_users().unwrap().len(), 3);
        assert_eq!(svc.list_posts().unwrap().len(), 3);
        assert_eq!(svc.current_session().unwrap(), None);
        assert!(!svc.has_liked("post-1").unwrap());
    }

    #[test]
    fn malformed_slot_falls_back_to_seed() {
        let svc = service();
        svc.slots.set(POSTS_SLOT, b"{not json").unwrap();
        assert_eq!(svc.list_posts().unwrap().len(), 3);
    }

    #[test]
    fn login_matches_seeded_admin() {
        let svc = service();
        let user = svc.login("admin@lumina.com").unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(svc.current_session().unwrap().unwrap().id, user.id);
    }

    #[test]
    fn login_unknown_email_leaves_session_unchanged() {
        let svc = service();
        svc.login("admin@lumina.com").unwrap();

        let err = svc.login("nobody@x.com").unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert_eq!(
            svc.current_session().unwrap().unwrap().email,
            "admin@lumina.com"
        );
    }

    #[test]
    fn logout_clears_session_and_likes() {
        let svc = service();
        svc.login("sarah@writer.com").unwrap();
        svc.toggle_like("post-2").unwrap();

        svc.logout().unwrap();
        assert_eq!(svc.current_session().unwrap(), None);
        assert!(!svc.has_liked("post-2").unwrap());
    }

    #[test]
    fn save_post_with_new_id_prepends() {
        let svc = service();
        let mut post = post_by_id(&svc, "post-2");
        post.id = "post-new".into();
        post.created_at = Utc::now();

        svc.save_post(&post).unwrap();
        let posts = svc.list_posts().unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].id, "post-new");
    }

    #[test]
    fn save_post_with_existing_id_replaces_in_place() {
        let svc = service();
        let before = svc.list_posts().unwrap();
        let position = before.iter().position(|p| p.id == "post-2").unwrap();

        let mut post = before[position].clone();
        post.title = "Updated title".into();
        svc.save_post(&post).unwrap();

        let after = svc.list_posts().unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[position].id, "post-2");
        assert_eq!(after[position].title, "Updated title");
    }

    #[test]
    fn save_identical_post_is_idempotent() {
        let svc = service();
        let post = post_by_id(&svc, "post-1");
        svc.save_post(&post).unwrap();
        svc.save_post(&post).unwrap();
        let posts = svc.list_posts().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(post_by_id(&svc, "post-1"), post);
    }

    #[test]
    fn delete_post_removes_entry() {
        let svc = service();
        svc.delete_post("post-2").unwrap();
        let posts = svc.list_posts().unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.id != "post-2"));
    }

    #[test]
    fn delete_unknown_post_is_a_noop() {
        let svc = service();
        let before = svc.list_posts().unwrap();
        svc.delete_post("post-404").unwrap();
        assert_eq!(svc.list_posts().unwrap(), before);
    }

    #[test]
    fn increment_view_adds_one() {
        let svc = service();
        let before = post_by_id(&svc, "post-3").views;
        svc.increment_view("post-3").unwrap();
        assert_eq!(post_by_id(&svc, "post-3").views, before + 1);

        // Unknown ids change nothing.
        svc.increment_view("post-404").unwrap();
        assert_eq!(post_by_id(&svc, "post-3").views, before + 1);
    }

    #[test]
    fn increment_revenue_credits_directory_entry() {
        let svc = service();
        let before = user_by_id(&svc, "author-1").earnings;
        svc.increment_revenue("author-1", 0.05).unwrap();
        assert!(approx(user_by_id(&svc, "author-1").earnings, before + 0.05));

        // Unknown ids are a no-op.
        svc.increment_revenue("ghost", 0.05).unwrap();
        assert!(approx(user_by_id(&svc, "author-1").earnings, before + 0.05));
    }

    #[test]
    fn increment_revenue_mirrors_delta_into_session() {
        let svc = service();
        let session = svc.login("sarah@writer.com").unwrap();
        svc.increment_revenue(&session.id, 0.05).unwrap();

        let refreshed = svc.current_session().unwrap().unwrap();
        assert!(approx(refreshed.earnings, session.earnings + 0.05));
        assert!(approx(
            user_by_id(&svc, &session.id).earnings,
            session.earnings + 0.05
        ));
    }

    #[test]
    fn increment_revenue_skips_unrelated_session() {
        let svc = service();
        let session = svc.login("admin@lumina.com").unwrap();
        svc.increment_revenue("author-1", 0.05).unwrap();
        assert!(approx(
            svc.current_session().unwrap().unwrap().earnings,
            session.earnings
        ));
    }

    #[test]
    fn double_toggle_restores_like_count() {
        let svc = service();
        let before = post_by_id(&svc, "post-1").likes;

        assert!(svc.toggle_like("post-1").unwrap());
        assert!(svc.has_liked("post-1").unwrap());
        assert_eq!(post_by_id(&svc, "post-1").likes, before + 1);

        assert!(!svc.toggle_like("post-1").unwrap());
        assert!(!svc.has_liked("post-1").unwrap());
        assert_eq!(post_by_id(&svc, "post-1").likes, before);
    }

    #[test]
    fn unlike_floors_counter_at_zero() {
        let svc = service();
        svc.toggle_like("post-1").unwrap();

        // Zero the counter behind the liked set's back, then unlike.
        let mut post = post_by_id(&svc, "post-1");
        post.likes = 0;
        svc.save_post(&post).unwrap();

        assert!(!svc.toggle_like("post-1").unwrap());
        assert_eq!(post_by_id(&svc, "post-1").likes, 0);
    }

    #[test]
    fn toggle_like_on_unknown_post_returns_false() {
        let svc = service();
        assert!(!svc.toggle_like("post-404").unwrap());
        assert!(!svc.has_liked("post-404").unwrap());
    }

    #[test]
    fn add_comment_appends_in_order() {
        let svc = service();
        let first = Comment {
            id: "c-a".into(),
            author_id: "reader-1".into(),
            author_name: "Alex Reader".into(),
            author_avatar: None,
            content: "First!".into(),
            created_at: Utc::now(),
        };
        let second = Comment {
            id: "c-b".into(),
            content: "Second.".into(),
            ..first.clone()
        };

        let existing = post_by_id(&svc, "post-1").comments;
        svc.add_comment("post-1", first.clone()).unwrap();
        svc.add_comment("post-1", second.clone()).unwrap();

        let comments = post_by_id(&svc, "post-1").comments;
        assert_eq!(comments.len(), existing.len() + 2);
        assert_eq!(comments[..existing.len()], existing[..]);
        assert_eq!(comments[comments.len() - 2].id, "c-a");
        assert_eq!(comments[comments.len() - 1].id, "c-b");

        // Comments on unknown posts vanish silently.
        svc.add_comment("post-404", first).unwrap();
    }
}
