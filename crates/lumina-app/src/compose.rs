//! The composer flow: turning a draft into a published post, with optional
//! AI help along the way.

use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

use lumina_store::{Post, SlotStore};

use crate::app::App;
use crate::error::{AppError, Result};

/// What the writing screen collects before publishing.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub title: String,
    /// Full body, markdown.
    pub content: String,
    /// Comma-separated topics, as typed.
    pub topics: String,
}

/// Characters of body text used for the list-view teaser.
const EXCERPT_LEN: usize = 150;

/// Stock cover pool for posts published without an explicit image.
const STOCK_COVERS: &[&str] = &[
    "photo-1519389950473-47ba0277781c",
    "photo-1494438639946-1ebd1d20bf85",
    "photo-1635070041078-e363dbe005cb",
    "photo-1461749280684-dccba630e2f6",
    "photo-1498050108023-c5249f4df085",
];

impl<S: SlotStore> App<S> {
    /// Publish a draft as the signed-in identity.
    ///
    /// The excerpt is cut from the opening of the body and the cover image
    /// is picked from a stock pool.  Empty titles and bodies are rejected
    /// here; the record service stores whatever it is given.
    pub fn publish(&self, draft: &Draft) -> Result<Post> {
        let user = self.require_user()?;

        if draft.title.trim().is_empty() {
            return Err(AppError::EmptyDraft("a title"));
        }
        if draft.content.trim().is_empty() {
            return Err(AppError::EmptyDraft("a body"));
        }

        let post = Post {
            id: format!("post-{}", Uuid::new_v4()),
            title: draft.title.clone(),
            excerpt: excerpt_of(&draft.content),
            content: draft.content.clone(),
            cover_image: stock_cover(),
            author_id: user.id,
            author_name: user.name,
            author_avatar: Some(user.avatar),
            created_at: Utc::now(),
            views: 0,
            likes: 0,
            tags: split_topics(&draft.topics),
            published: true,
            comments: Vec::new(),
        };

        self.records().save_post(&post)?;
        info!(post = %post.id, title = %post.title, "draft published");
        Ok(post)
    }

    /// Draft ideas for the topics field (defaults to a general topic when
    /// the field is empty).  Best-effort.
    pub async fn draft_ideas(&self, topics: &str) -> String {
        let topic = if topics.trim().is_empty() {
            "Technology"
        } else {
            topics
        };
        self.assist().draft_ideas(topic).await
    }

    /// Rewrite the draft body.  Best-effort; returns the input on failure.
    pub async fn polish(&self, content: &str) -> String {
        self.assist().rewrite(content).await
    }

    /// Describe a cover image for the draft title.  Best-effort.
    pub async fn cover_description(&self, title: &str) -> String {
        self.assist().describe_cover(title).await
    }
}

/// Opening characters of the body, with a trailing ellipsis.  Cuts on char
/// boundaries, never mid-codepoint.
fn excerpt_of(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    excerpt.push_str("...");
    excerpt
}

/// Split a comma-separated topics field into trimmed, non-empty tags.
fn split_topics(topics: &str) -> Vec<String> {
    topics
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn stock_cover() -> String {
    let idx = rand::thread_rng().gen_range(0..STOCK_COVERS.len());
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&w=1200&q=80",
        STOCK_COVERS[idx]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;

    fn draft() -> Draft {
        Draft {
            title: "On Writing".into(),
            content: "Write every day. ".repeat(20),
            topics: "Craft, Writing , ,".into(),
        }
    }

    #[test]
    fn publish_prepends_a_published_post() {
        let app = test_app();
        let user = app.login("sarah@writer.com").unwrap();

        let post = app.publish(&draft()).unwrap();
        assert!(post.published);
        assert_eq!(post.author_id, user.id);
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
        assert_eq!(post.tags, vec!["Craft", "Writing"]);

        let posts = app.records().list_posts().unwrap();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].id, post.id);
    }

    #[test]
    fn publish_requires_a_session() {
        let app = test_app();
        assert!(matches!(
            app.publish(&draft()).unwrap_err(),
            AppError::SignedOut
        ));
    }

    #[test]
    fn empty_drafts_are_rejected() {
        let app = test_app();
        app.login("sarah@writer.com").unwrap();

        let mut d = draft();
        d.title = "   ".into();
        assert!(matches!(
            app.publish(&d).unwrap_err(),
            AppError::EmptyDraft(_)
        ));

        let mut d = draft();
        d.content.clear();
        assert!(matches!(
            app.publish(&d).unwrap_err(),
            AppError::EmptyDraft(_)
        ));
    }

    #[test]
    fn excerpt_is_cut_on_char_boundaries() {
        let short = excerpt_of("Brief.");
        assert_eq!(short, "Brief....");

        let long = "é".repeat(400);
        let excerpt = excerpt_of(&long);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn topics_split_drops_blanks() {
        assert_eq!(split_topics(" Tech ,, Life "), vec!["Tech", "Life"]);
        assert!(split_topics("  ").is_empty());
    }

    #[test]
    fn stock_cover_is_a_stable_url_shape() {
        let url = stock_cover();
        assert!(url.starts_with("https://images.unsplash.com/photo-"));
        assert!(url.ends_with("w=1200&q=80"));
    }
}
