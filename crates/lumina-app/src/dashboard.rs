//! Admin dashboard reads and actions.
//!
//! Aggregates are derived from the loaded collections on every call;
//! nothing is stored.  Every entry point requires the admin role.

use serde::Serialize;
use tracing::info;

use lumina_store::{Identity, Post, Role, SlotStore};

use crate::app::App;
use crate::error::{AppError, Result};

/// Aggregate figures shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: usize,
    pub total_posts: usize,
    pub total_views: u64,
    /// Summed simulated earnings across the directory, in dollars.
    pub total_earnings: f64,
}

impl<S: SlotStore> App<S> {
    /// Aggregate totals across the directory and the collection.
    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.require_admin()?;

        let users = self.records().list_users()?;
        let posts = self.records().list_posts()?;

        Ok(DashboardStats {
            total_users: users.len(),
            total_posts: posts.len(),
            total_views: posts.iter().map(|p| p.views).sum(),
            total_earnings: users.iter().map(|u| u.earnings).sum(),
        })
    }

    /// The `limit` most-viewed posts, descending.
    pub fn top_posts(&self, limit: usize) -> Result<Vec<Post>> {
        self.require_admin()?;

        let mut posts = self.records().list_posts()?;
        posts.sort_by(|a, b| b.views.cmp(&a.views));
        posts.truncate(limit);
        Ok(posts)
    }

    /// The full user directory, for the dashboard's user table.
    pub fn users(&self) -> Result<Vec<Identity>> {
        self.require_admin()?;
        Ok(self.records().list_users()?)
    }

    /// Delete a post from the collection.  Unknown ids are a no-op.
    pub fn delete_post(&self, post_id: &str) -> Result<()> {
        self.require_admin()?;
        self.records().delete_post(post_id)?;
        info!(post = %post_id, "post deleted");
        Ok(())
    }

    fn require_admin(&self) -> Result<Identity> {
        let user = self.require_user()?;
        if user.role != Role::Admin {
            return Err(AppError::Forbidden(
                "administrator role required".to_string(),
            ));
        }
        Ok(user)
    }
}
