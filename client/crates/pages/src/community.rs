//! Community Feed
//!
//! Posts from other users next to the leaderboard. Both load concurrently and
//! fall back independently.

use backend::models::{CommunityPost, LeaderboardEntry};
use backend::{BackendApi, Credentials};
use platform::fallback::Sourced;

use crate::mock::{COMMUNITY_POSTS, LEADERBOARD};

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityFeed {
    pub posts: Sourced<Vec<CommunityPost>>,
    pub leaderboard: Sourced<Vec<LeaderboardEntry>>,
}

impl CommunityFeed {
    pub async fn load<B: BackendApi>(api: &B, credentials: &Credentials) -> Self {
        let (posts, leaderboard) = tokio::join!(
            COMMUNITY_POSTS.load(api.community_posts(credentials)),
            LEADERBOARD.load(api.leaderboard()),
        );
        Self { posts, leaderboard }
    }

    pub fn notices(&self) -> Vec<String> {
        [self.posts.notice(), self.leaderboard.notice()]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn newest_first(&self) -> Vec<&CommunityPost> {
        let mut posts: Vec<_> = self.posts.data.iter().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Posts that carry a verdict
    pub fn fact_checks(&self) -> impl Iterator<Item = &CommunityPost> {
        self.posts.data.iter().filter(|p| p.verdict.is_some())
    }

    pub fn top_contributors(&self, n: usize) -> Vec<&LeaderboardEntry> {
        let mut entries: Vec<_> = self.leaderboard.data.iter().collect();
        entries.sort_by_key(|e| e.rank);
        entries.truncate(n);
        entries
    }

    /// Like a post, locally
    pub fn like(&mut self, post_id: &str) -> Option<u32> {
        let post = self.posts.data.iter_mut().find(|p| p.id == post_id)?;
        post.likes = post.likes.saturating_add(1);
        Some(post.likes)
    }
}
