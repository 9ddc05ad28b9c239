//! End-to-end walkthrough of the Lumina flows against an ephemeral store.
//!
//! Runs without any configuration; set `GEMINI_API_KEY` to see the composer
//! assistant produce real text instead of its degraded-mode fallbacks.

use tracing::info;
use tracing_subscriber::EnvFilter;

use lumina_app::{App, Draft, FeedFilter};
use lumina_app::feed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,lumina_app=debug,lumina_store=debug")),
        )
        .init();

    info!("Starting Lumina walkthrough v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Open the app over a throwaway store
    // -----------------------------------------------------------------------
    let app = App::ephemeral();

    // -----------------------------------------------------------------------
    // 3. Browse the feed
    // -----------------------------------------------------------------------
    let posts = app.feed()?;
    info!(count = posts.len(), "loaded feed");
    for post in &posts {
        info!(id = %post.id, views = post.views, likes = post.likes, "  {}", post.title);
    }

    let filtered = feed::filter_feed(
        &posts,
        &FeedFilter {
            search: Some("quantum".into()),
            tag: None,
        },
    );
    info!(hits = filtered.len(), "searched the feed for \"quantum\"");

    // -----------------------------------------------------------------------
    // 4. Sign in and read
    // -----------------------------------------------------------------------
    let user = app.login("admin@lumina.com")?;
    info!(user = %user.name, role = ?user.role, "signed in");

    if let Some(post) = app.read_post("post-1")? {
        info!(views = post.views, "read \"{}\"", post.title);
        let liked = app.toggle_like(&post.id)?;
        info!(liked, "toggled like");
        let comment = app.comment(&post.id, "Enjoyed this one.")?;
        info!(comment = %comment.id, "responded");
    }

    // -----------------------------------------------------------------------
    // 5. Compose with AI help
    // -----------------------------------------------------------------------
    let ideas = app.draft_ideas("Rust").await;
    info!("assistant ideas: {ideas}");

    let draft = Draft {
        title: "Why Local-First Software Wins".into(),
        content: "Owning your data changes how software feels. ".repeat(8),
        topics: "Tech, Local-First".into(),
    };
    let cover_idea = app.cover_description(&draft.title).await;
    info!("assistant cover description: {cover_idea}");

    let published = app.publish(&draft)?;
    info!(post = %published.id, "published a new story");

    // -----------------------------------------------------------------------
    // 6. Admin dashboard
    // -----------------------------------------------------------------------
    let stats = app.dashboard_stats()?;
    info!(
        users = stats.total_users,
        posts = stats.total_posts,
        views = stats.total_views,
        earnings = %format!("${:.2}", stats.total_earnings),
        "dashboard totals"
    );
    for (rank, post) in app.top_posts(5)?.iter().enumerate() {
        info!(rank = rank + 1, views = post.views, "top story: {}", post.title);
    }

    app.logout()?;
    info!("walkthrough complete");

    Ok(())
}
