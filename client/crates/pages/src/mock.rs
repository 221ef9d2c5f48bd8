//! Default Datasets
//!
//! Every page's offline data lives here, under one name per dataset. Pages
//! load through these sources and never build sample data themselves.

use backend::models::{
    AdminStats, CommunityPost, DashboardSummary, Difficulty, LeaderboardEntry, LearningModule,
    RecentCheck,
};
use chrono::{DateTime, Utc};
use platform::fallback::FallbackSource;

pub const LEARNING_MODULES: FallbackSource<Vec<LearningModule>> =
    FallbackSource::new("learning modules", learning_modules);

pub const COMMUNITY_POSTS: FallbackSource<Vec<CommunityPost>> =
    FallbackSource::new("community posts", community_posts);

pub const LEADERBOARD: FallbackSource<Vec<LeaderboardEntry>> =
    FallbackSource::new("leaderboard", leaderboard);

pub const DASHBOARD: FallbackSource<DashboardSummary> =
    FallbackSource::new("dashboard", dashboard);

pub const ADMIN_STATS: FallbackSource<AdminStats> = FallbackSource::new("admin stats", admin_stats);

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn module(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    difficulty: Difficulty,
    points: u32,
    lesson_count: u32,
) -> LearningModule {
    LearningModule {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        difficulty,
        points,
        lesson_count,
        completed_lessons: 0,
    }
}

fn learning_modules() -> Vec<LearningModule> {
    vec![
        module(
            "source-basics",
            "Checking the Source",
            "Who published it, and can you trust them?",
            "sources",
            Difficulty::Beginner,
            50,
            4,
        ),
        module(
            "image-forensics",
            "Manipulated Images",
            "Reverse image search and telltale editing artifacts.",
            "media",
            Difficulty::Intermediate,
            100,
            6,
        ),
        module(
            "deepfakes",
            "Spotting Deepfakes",
            "Audio and video that never happened.",
            "media",
            Difficulty::Advanced,
            150,
            5,
        ),
        module(
            "statistics",
            "Numbers Out of Context",
            "Cherry-picked charts and misleading percentages.",
            "reasoning",
            Difficulty::Intermediate,
            100,
            5,
        ),
    ]
}

fn post(
    id: &str,
    author: &str,
    content: &str,
    verdict: Option<&str>,
    likes: u32,
    comments: u32,
    created: i64,
) -> CommunityPost {
    CommunityPost {
        id: id.to_string(),
        author: author.to_string(),
        content: content.to_string(),
        verdict: verdict.map(str::to_string),
        likes,
        comments,
        created_at: at(created),
    }
}

fn community_posts() -> Vec<CommunityPost> {
    vec![
        post(
            "p1",
            "Maya",
            "That viral flood photo is from 2011, not last week.",
            Some("Misleading"),
            42,
            7,
            1_760_000_000,
        ),
        post(
            "p2",
            "Jon",
            "Tip: check the URL carefully, lookalike domains are everywhere.",
            None,
            18,
            3,
            1_760_050_000,
        ),
        post(
            "p3",
            "Priya",
            "The new vaccine study is real; here is the journal link.",
            Some("Credible"),
            25,
            11,
            1_759_900_000,
        ),
    ]
}

fn entry(rank: u32, user_name: &str, points: u32, badges: &[&str]) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        user_name: user_name.to_string(),
        points,
        badges: badges.iter().map(|b| b.to_string()).collect(),
    }
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        entry(1, "Maya", 2_450, &["Fact Finder", "Streak 30"]),
        entry(2, "Priya", 1_980, &["Source Sleuth"]),
        entry(3, "Jon", 1_720, &[]),
        entry(4, "Sam", 1_100, &["First Check"]),
    ]
}

fn dashboard() -> DashboardSummary {
    DashboardSummary {
        total_checks: 24,
        misleading_found: 9,
        accuracy: 0.82,
        streak_days: 5,
        points: 640,
        recent_checks: vec![
            RecentCheck {
                id: "demo-1".to_string(),
                title: "Miracle cure claims".to_string(),
                verdict: "Likely Misleading".to_string(),
                score: 18,
                checked_at: at(1_760_040_000),
            },
            RecentCheck {
                id: "demo-2".to_string(),
                title: "City budget report".to_string(),
                verdict: "Mostly Accurate".to_string(),
                score: 81,
                checked_at: at(1_759_980_000),
            },
        ],
    }
}

fn admin_stats() -> AdminStats {
    AdminStats {
        total_users: 1_250,
        checks_today: 340,
        flagged_posts: 6,
        pending_reviews: 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_tagged_with_their_name() {
        let sourced = LEARNING_MODULES.default_data();
        assert_eq!(
            sourced.notice().as_deref(),
            Some("Showing sample learning modules (using defaults)")
        );
        assert!(!sourced.data.is_empty());
    }

    #[test]
    fn test_leaderboard_ranks_are_ordered() {
        let ranks: Vec<u32> = leaderboard().iter().map(|e| e.rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_timestamps_are_real() {
        assert!(community_posts().iter().all(|p| p.created_at.timestamp() > 0));
    }
}
