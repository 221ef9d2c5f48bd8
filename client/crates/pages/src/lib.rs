//! Page Compositions
//!
//! Each page composes the auth state, the backend API and a named default
//! dataset. Remote data always goes through `platform::fallback`, so a page
//! stays usable when the backend is down and says so with a notice.
//!
//! - [`DashboardPage`] - signed-in summary
//! - [`LearningCenter`] - modules, progress and points
//! - [`CommunityFeed`] - posts and leaderboard
//! - [`AdminPanel`] - admin-only statistics
//! - [`Bookmarks`], [`ThemeStore`] - locally persisted preferences

pub mod admin;
pub mod bookmarks;
pub mod community;
pub mod dashboard;
pub mod error;
pub mod learning;
pub mod mock;
pub mod theme;

// Re-exports for convenience
pub use admin::AdminPanel;
pub use bookmarks::Bookmarks;
pub use community::CommunityFeed;
pub use dashboard::DashboardPage;
pub use error::{PageError, PageResult};
pub use learning::{LearningCenter, ModuleProgress};
pub use theme::{Theme, ThemeStore};

#[cfg(test)]
mod tests;
