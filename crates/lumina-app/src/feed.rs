//! Listing-view reads: the published feed and its derived slices.
//!
//! Filtering and related-post selection operate on an already-loaded feed
//! snapshot; they are derived reads, not store operations.

use lumina_store::{Post, SlotStore};

use crate::app::App;
use crate::error::Result;

/// Filters applied by the listing view.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    /// Case-insensitive match against title and excerpt.
    pub search: Option<String>,
    /// Restrict to posts carrying this tag.
    pub tag: Option<String>,
}

impl<S: SlotStore> App<S> {
    /// Published posts, in collection order (newest first).
    pub fn feed(&self) -> Result<Vec<Post>> {
        Ok(self
            .records()
            .list_posts()?
            .into_iter()
            .filter(|p| p.published)
            .collect())
    }
}

/// Apply listing-view filters to a loaded feed.
pub fn filter_feed(posts: &[Post], filter: &FeedFilter) -> Vec<Post> {
    let needle = filter.search.as_deref().unwrap_or("").to_lowercase();

    posts
        .iter()
        .filter(|p| {
            let matches_search = needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.excerpt.to_lowercase().contains(&needle);
            let matches_tag = filter
                .tag
                .as_deref()
                .map_or(true, |tag| p.tags.iter().any(|t| t == tag));
            matches_search && matches_tag
        })
        .cloned()
        .collect()
}

/// Distinct tags across a set of posts, in first-seen order.
pub fn all_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for post in posts {
        for tag in &post.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Up to `limit` posts related to `post`: tag matches first, then other
/// recent posts as backfill.  The post itself is never included.
pub fn related_posts(posts: &[Post], post: &Post, limit: usize) -> Vec<Post> {
    let mut related: Vec<Post> = posts
        .iter()
        .filter(|p| p.id != post.id && p.tags.iter().any(|t| post.tags.contains(t)))
        .take(limit)
        .cloned()
        .collect();

    if related.len() < limit {
        let fill: Vec<Post> = posts
            .iter()
            .filter(|p| p.id != post.id && related.iter().all(|r| r.id != p.id))
            .take(limit - related.len())
            .cloned()
            .collect();
        related.extend(fill);
    }

    related
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use lumina_store::seed;

    #[test]
    fn feed_contains_only_published_posts() {
        let app = test_app();
        let mut post = app.feed().unwrap().remove(0);
        post.published = false;
        app.records().save_post(&post).unwrap();

        let feed = app.feed().unwrap();
        assert!(feed.iter().all(|p| p.id != post.id));
        assert!(feed.iter().all(|p| p.published));
    }

    #[test]
    fn search_matches_title_and_excerpt() {
        let posts = seed::posts();
        let filter = FeedFilter {
            search: Some("quantum".into()),
            tag: None,
        };
        let hits = filter_feed(&posts, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "post-3");

        let filter = FeedFilter {
            search: Some("declutter".into()),
            tag: None,
        };
        assert_eq!(filter_feed(&posts, &filter)[0].id, "post-2");
    }

    #[test]
    fn tag_filter_composes_with_search() {
        let posts = seed::posts();
        let filter = FeedFilter {
            search: None,
            tag: Some("Tech".into()),
        };
        let hits = filter_feed(&posts, &filter);
        assert_eq!(hits.len(), 2);

        let filter = FeedFilter {
            search: Some("quantum".into()),
            tag: Some("Lifestyle".into()),
        };
        assert!(filter_feed(&posts, &filter).is_empty());
    }

    #[test]
    fn tags_are_distinct_and_ordered() {
        let tags = all_tags(&seed::posts());
        assert_eq!(
            tags,
            vec!["Tech", "Development", "Future", "Lifestyle", "Minimalism", "Science"]
        );
    }

    #[test]
    fn related_prefers_tag_matches_then_backfills() {
        let posts = seed::posts();
        let current = &posts[0]; // tags: Tech, Development, Future

        let related = related_posts(&posts, current, 3);
        assert_eq!(related.len(), 2);
        // post-3 shares "Tech"; post-2 arrives as backfill.
        assert_eq!(related[0].id, "post-3");
        assert_eq!(related[1].id, "post-2");
        assert!(related.iter().all(|p| p.id != current.id));
    }
}
