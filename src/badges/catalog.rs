//! Badge catalog — stable IDs and the canonical list of definitions.
//!
//! IDs are kebab-case strings and must stay stable across versions; callers
//! persist them to detect newly unlocked badges.

use crate::models::badge::{BadgeDefinition, ComparisonOp, Requirement};
use crate::models::level::Rarity;
use crate::models::metrics::*;

pub const FIRST_REPO: &str = "first-repo";
pub const PROLIFIC_CREATOR: &str = "prolific-creator";
pub const REPO_CENTURION: &str = "repo-centurion";
pub const QUALITY_OVER_QUANTITY: &str = "quality-over-quantity";
pub const POPULAR_DEV: &str = "popular-dev";
pub const CELEBRITY_DEV: &str = "celebrity-dev";
pub const INFLUENCER: &str = "influencer";
pub const RISING_STAR: &str = "rising-star";
pub const STAR_COLLECTOR: &str = "star-collector";
pub const SUPERNOVA: &str = "supernova";
pub const VIRAL_REPO: &str = "viral-repo";
pub const WEEK_STREAK: &str = "week-streak";
pub const MONTH_STREAK: &str = "month-streak";
pub const MARATHON_RUNNER: &str = "marathon-runner";
pub const UNSTOPPABLE_FORCE: &str = "unstoppable-force";
pub const COMMITTED: &str = "committed";
pub const DEDICATED_CONTRIBUTOR: &str = "dedicated-contributor";
pub const CONTRIBUTION_MACHINE: &str = "contribution-machine";
pub const VETERAN_DEVELOPER: &str = "veteran-developer";
pub const GITHUB_OG: &str = "github-og";
pub const POLYGLOT: &str = "polyglot";
pub const LANGUAGE_MASTER: &str = "language-master";
pub const PROBLEM_SOLVER: &str = "problem-solver";
pub const MERGE_MACHINE: &str = "merge-machine";
pub const CODE_GUARDIAN: &str = "code-guardian";
pub const COMMUNITY_CONTRIBUTOR: &str = "community-contributor";

fn badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    rarity: Rarity,
    requirements: Vec<Requirement>,
) -> BadgeDefinition {
    BadgeDefinition {
        id,
        name,
        description,
        category,
        rarity,
        requirements,
    }
}

fn gte(metric: &'static str, value: f64) -> Requirement {
    Requirement::new(metric, ComparisonOp::Gte, value)
}

fn lte(metric: &'static str, value: f64) -> Requirement {
    Requirement::new(metric, ComparisonOp::Lte, value)
}

/// The canonical badge list. Built once per evaluator; immutable after.
pub fn default_catalog() -> Vec<BadgeDefinition> {
    vec![
        badge(
            FIRST_REPO,
            "First Repository",
            "Published your first public repository.",
            "repositories",
            Rarity::Common,
            vec![gte(METRIC_PUBLIC_REPOS, 1.0)],
        ),
        badge(
            PROLIFIC_CREATOR,
            "Prolific Creator",
            "Published 50 public repositories.",
            "repositories",
            Rarity::Rare,
            vec![gte(METRIC_PUBLIC_REPOS, 50.0)],
        ),
        badge(
            REPO_CENTURION,
            "Repo Centurion",
            "Published 100 public repositories.",
            "repositories",
            Rarity::Epic,
            vec![gte(METRIC_PUBLIC_REPOS, 100.0)],
        ),
        badge(
            QUALITY_OVER_QUANTITY,
            "Quality Over Quantity",
            "Earned 500 stars across at most 10 repositories.",
            "repositories",
            Rarity::Epic,
            vec![lte(METRIC_PUBLIC_REPOS, 10.0), gte(METRIC_TOTAL_STARS, 500.0)],
        ),
        badge(
            POPULAR_DEV,
            "Popular Developer",
            "Reached 100 followers.",
            "social",
            Rarity::Rare,
            vec![gte(METRIC_FOLLOWERS, 100.0)],
        ),
        badge(
            CELEBRITY_DEV,
            "Celebrity Developer",
            "Reached 1000 followers.",
            "social",
            Rarity::Legendary,
            vec![gte(METRIC_FOLLOWERS, 1000.0)],
        ),
        badge(
            INFLUENCER,
            "Influencer",
            "50 followers with more followers than accounts followed.",
            "social",
            Rarity::Rare,
            vec![
                gte(METRIC_FOLLOWERS, 50.0),
                gte(METRIC_FOLLOWER_RATIO, 1.0),
            ],
        ),
        badge(
            RISING_STAR,
            "Rising Star",
            "Earned 100 stars across your repositories.",
            "stars",
            Rarity::Common,
            vec![gte(METRIC_TOTAL_STARS, 100.0)],
        ),
        badge(
            STAR_COLLECTOR,
            "Star Collector",
            "Earned 1000 stars across your repositories.",
            "stars",
            Rarity::Epic,
            vec![gte(METRIC_TOTAL_STARS, 1000.0)],
        ),
        badge(
            SUPERNOVA,
            "Supernova",
            "Earned 10000 stars across your repositories.",
            "stars",
            Rarity::Legendary,
            vec![gte(METRIC_TOTAL_STARS, 10000.0)],
        ),
        badge(
            VIRAL_REPO,
            "Viral Repository",
            "A single repository reached 100 stars.",
            "stars",
            Rarity::Rare,
            vec![gte(METRIC_MAX_REPO_STARS, 100.0)],
        ),
        badge(
            WEEK_STREAK,
            "Week Streak",
            "Contributed 7 days in a row.",
            "streak",
            Rarity::Common,
            vec![gte(METRIC_CONTRIBUTION_STREAK, 7.0)],
        ),
        badge(
            MONTH_STREAK,
            "Month Streak",
            "Contributed 30 days in a row.",
            "streak",
            Rarity::Rare,
            vec![gte(METRIC_CONTRIBUTION_STREAK, 30.0)],
        ),
        badge(
            MARATHON_RUNNER,
            "Marathon Runner",
            "Best contribution streak reached 100 days.",
            "streak",
            Rarity::Epic,
            vec![gte(METRIC_LONGEST_STREAK, 100.0)],
        ),
        badge(
            UNSTOPPABLE_FORCE,
            "Unstoppable Force",
            "Contributed 365 days in a row.",
            "streak",
            Rarity::Legendary,
            vec![gte(METRIC_CONTRIBUTION_STREAK, 365.0)],
        ),
        badge(
            COMMITTED,
            "Committed",
            "Made 100 contributions.",
            "contributions",
            Rarity::Common,
            vec![gte(METRIC_TOTAL_CONTRIBUTIONS, 100.0)],
        ),
        badge(
            DEDICATED_CONTRIBUTOR,
            "Dedicated Contributor",
            "Made 1000 contributions.",
            "contributions",
            Rarity::Rare,
            vec![gte(METRIC_TOTAL_CONTRIBUTIONS, 1000.0)],
        ),
        badge(
            CONTRIBUTION_MACHINE,
            "Contribution Machine",
            "Made 10000 contributions.",
            "contributions",
            Rarity::Legendary,
            vec![gte(METRIC_TOTAL_CONTRIBUTIONS, 10000.0)],
        ),
        badge(
            VETERAN_DEVELOPER,
            "Veteran Developer",
            "Account active for 5 years.",
            "account",
            Rarity::Rare,
            vec![gte(METRIC_ACCOUNT_AGE_YEARS, 5.0)],
        ),
        badge(
            GITHUB_OG,
            "GitHub OG",
            "Account active for 10 years.",
            "account",
            Rarity::Epic,
            vec![gte(METRIC_ACCOUNT_AGE_YEARS, 10.0)],
        ),
        badge(
            POLYGLOT,
            "Polyglot",
            "Worked in 5 programming languages.",
            "languages",
            Rarity::Common,
            vec![gte(METRIC_LANGUAGES_USED, 5.0)],
        ),
        badge(
            LANGUAGE_MASTER,
            "Language Master",
            "Worked in 10 programming languages.",
            "languages",
            Rarity::Epic,
            vec![gte(METRIC_LANGUAGES_USED, 10.0)],
        ),
        badge(
            PROBLEM_SOLVER,
            "Problem Solver",
            "Opened 50 issues.",
            "collaboration",
            Rarity::Common,
            vec![gte(METRIC_TOTAL_ISSUES, 50.0)],
        ),
        badge(
            MERGE_MACHINE,
            "Merge Machine",
            "Opened 100 pull requests.",
            "collaboration",
            Rarity::Rare,
            vec![gte(METRIC_TOTAL_PULL_REQUESTS, 100.0)],
        ),
        badge(
            CODE_GUARDIAN,
            "Code Guardian",
            "Completed 50 code reviews.",
            "collaboration",
            Rarity::Rare,
            vec![gte(METRIC_TOTAL_REVIEWS, 50.0)],
        ),
        badge(
            COMMUNITY_CONTRIBUTOR,
            "Community Contributor",
            "Contributed to 10 repositories you do not own.",
            "collaboration",
            Rarity::Rare,
            vec![gte(METRIC_EXTERNAL_CONTRIBUTIONS, 10.0)],
        ),
    ]
}
