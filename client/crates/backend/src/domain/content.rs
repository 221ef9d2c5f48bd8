//! Page content models
//!
//! Learning modules, community posts, leaderboard, dashboard and admin data.
//! Shapes follow the backend JSON (camelCase).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: Difficulty,
    /// Points awarded on completion
    pub points: u32,
    pub lesson_count: u32,
    /// Lessons this user has completed (0 for guests)
    #[serde(default)]
    pub completed_lessons: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_name: String,
    pub points: u32,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCheck {
    pub id: String,
    pub title: String,
    pub verdict: String,
    pub score: u8,
    pub checked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_checks: u32,
    pub misleading_found: u32,
    /// Share of the user's quiz answers that were right, 0.0-1.0
    pub accuracy: f64,
    pub streak_days: u32,
    pub points: u32,
    #[serde(default)]
    pub recent_checks: Vec<RecentCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u32,
    pub checks_today: u32,
    pub flagged_posts: u32,
    pub pending_reviews: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_module_defaults_progress() {
        let module: LearningModule = serde_json::from_str(
            r#"{"id":"m1","title":"Spotting deepfakes","description":"d","category":"media",
                "difficulty":"beginner","points":50,"lessonCount":4}"#,
        )
        .unwrap();
        assert_eq!(module.completed_lessons, 0);
        assert_eq!(module.difficulty, Difficulty::Beginner);
    }
}
