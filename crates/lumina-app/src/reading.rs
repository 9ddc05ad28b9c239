//! The single-post flow: opening a story, liking it, responding to it.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use lumina_store::{Comment, Post, SlotStore};

use crate::app::App;
use crate::error::Result;

/// Simulated ad revenue credited to the author per qualifying read.
const AD_REVENUE_PER_READ: f64 = 0.05;

impl<S: SlotStore> App<S> {
    /// Load a post for display.
    ///
    /// A signed-in reader who is not the author counts as an ad impression:
    /// the author is credited a small amount of simulated revenue and the
    /// view counter goes up by one.  Authors rereading their own work change nothing, as
    /// do signed-out visitors.  Returns the refreshed post so counters are
    /// current, or `None` for unknown ids.
    pub fn read_post(&self, post_id: &str) -> Result<Option<Post>> {
        let Some(post) = self.find_post(post_id)? else {
            return Ok(None);
        };

        if let Some(reader) = self.current_user()? {
            if reader.id != post.author_id {
                self.records()
                    .increment_revenue(&post.author_id, AD_REVENUE_PER_READ)?;
                self.records().increment_view(&post.id)?;
                debug!(post = %post.id, reader = %reader.id, "read counted");
            }
        }

        self.find_post(post_id)
    }

    /// Flip the liked state of a post.  Returns the new state.
    pub fn toggle_like(&self, post_id: &str) -> Result<bool> {
        Ok(self.records().toggle_like(post_id)?)
    }

    /// Whether this installation has liked the post.
    pub fn has_liked(&self, post_id: &str) -> Result<bool> {
        Ok(self.records().has_liked(post_id)?)
    }

    /// Attach a response to a post as the signed-in identity.
    ///
    /// Requires a session; the screen sends visitors to sign-in instead.
    pub fn comment(&self, post_id: &str, text: &str) -> Result<Comment> {
        let user = self.require_user()?;
        let comment = Comment {
            id: format!("c-{}", Uuid::new_v4()),
            author_id: user.id,
            author_name: user.name,
            author_avatar: Some(user.avatar),
            content: text.to_string(),
            created_at: Utc::now(),
        };
        self.records().add_comment(post_id, comment.clone())?;
        Ok(comment)
    }

    fn find_post(&self, post_id: &str) -> Result<Option<Post>> {
        Ok(self
            .records()
            .list_posts()?
            .into_iter()
            .find(|p| p.id == post_id))
    }
}
