//! # lumina-app
//!
//! Application layer of the Lumina publishing demo: the flows the screens
//! invoke — signing in, browsing and reading, liking and commenting,
//! composing with AI help, and the admin dashboard.
//!
//! Screens hold only transient state (search text, form drafts).  Every
//! authoritative read and write goes through the record service owned by
//! [`App`], and screens refresh their snapshot after each mutating call.

pub mod compose;
pub mod dashboard;
pub mod feed;
pub mod reading;
pub mod session;

mod app;
mod error;

pub use app::App;
pub use compose::Draft;
pub use dashboard::DashboardStats;
pub use error::AppError;
pub use feed::FeedFilter;
