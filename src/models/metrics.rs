use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat snapshot of a user's GitHub statistics.
///
/// Assembled by the caller from whatever fetch/cache layer it runs; the
/// engine only ever reads it. All counts default to zero so partial
/// snapshots deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileMetrics {
    // Contribution metrics
    pub total_contributions: u64,
    pub contribution_streak: u64,
    pub longest_streak: u64,
    pub external_contributions: u64,

    // Social metrics
    pub followers: u64,
    pub following: u64,

    // Repository metrics
    pub public_repos: u64,
    pub total_stars: u64,
    pub per_repo_stars: Vec<u64>,
    pub languages_used: u64,

    // Collaboration metrics
    pub total_issues: u64,
    pub total_pull_requests: u64,
    pub total_reviews: u64,

    // Account metrics
    pub account_created_at: Option<DateTime<Utc>>,
    /// Explicit age override; when set it wins over `account_created_at`.
    pub account_age_years: Option<f64>,
}

// Metric names addressable from badge requirements.
pub const METRIC_TOTAL_CONTRIBUTIONS: &str = "total_contributions";
pub const METRIC_CONTRIBUTION_STREAK: &str = "contribution_streak";
pub const METRIC_LONGEST_STREAK: &str = "longest_streak";
pub const METRIC_EXTERNAL_CONTRIBUTIONS: &str = "external_contributions";
pub const METRIC_FOLLOWERS: &str = "followers";
pub const METRIC_FOLLOWING: &str = "following";
pub const METRIC_PUBLIC_REPOS: &str = "public_repos";
pub const METRIC_TOTAL_STARS: &str = "total_stars";
pub const METRIC_LANGUAGES_USED: &str = "languages_used";
pub const METRIC_TOTAL_ISSUES: &str = "total_issues";
pub const METRIC_TOTAL_PULL_REQUESTS: &str = "total_pull_requests";
pub const METRIC_TOTAL_REVIEWS: &str = "total_reviews";
pub const METRIC_ACCOUNT_AGE_YEARS: &str = "account_age_years";
pub const METRIC_FOLLOWER_RATIO: &str = "follower_ratio";
pub const METRIC_MAX_REPO_STARS: &str = "max_repo_stars";

/// Read-only name -> value view over a snapshot, extended with the derived
/// metrics badge requirements can reference.
///
/// Deriving up front keeps the badge evaluator a pure function of a single
/// flat map. Every value is sanitized on entry: negative and NaN inputs
/// clamp to zero.
#[derive(Debug, Clone)]
pub struct MetricsView {
    values: HashMap<&'static str, f64>,
}

impl MetricsView {
    /// Build the view from a snapshot as of the given instant.
    ///
    /// `as_of` only feeds the account-age derivation; passing a fixed
    /// timestamp makes the whole evaluation reproducible.
    pub fn derive(profile: &ProfileMetrics, as_of: DateTime<Utc>) -> Self {
        let mut values = HashMap::new();

        values.insert(
            METRIC_TOTAL_CONTRIBUTIONS,
            profile.total_contributions as f64,
        );
        values.insert(
            METRIC_CONTRIBUTION_STREAK,
            profile.contribution_streak as f64,
        );
        values.insert(METRIC_LONGEST_STREAK, profile.longest_streak as f64);
        values.insert(
            METRIC_EXTERNAL_CONTRIBUTIONS,
            profile.external_contributions as f64,
        );
        values.insert(METRIC_FOLLOWERS, profile.followers as f64);
        values.insert(METRIC_FOLLOWING, profile.following as f64);
        values.insert(METRIC_PUBLIC_REPOS, profile.public_repos as f64);
        values.insert(METRIC_TOTAL_STARS, profile.total_stars as f64);
        values.insert(METRIC_LANGUAGES_USED, profile.languages_used as f64);
        values.insert(METRIC_TOTAL_ISSUES, profile.total_issues as f64);
        values.insert(
            METRIC_TOTAL_PULL_REQUESTS,
            profile.total_pull_requests as f64,
        );
        values.insert(METRIC_TOTAL_REVIEWS, profile.total_reviews as f64);

        values.insert(
            METRIC_ACCOUNT_AGE_YEARS,
            Self::account_age_years(profile, as_of),
        );
        values.insert(METRIC_FOLLOWER_RATIO, Self::follower_ratio(profile));
        values.insert(
            METRIC_MAX_REPO_STARS,
            profile.per_repo_stars.iter().copied().max().unwrap_or(0) as f64,
        );

        for value in values.values_mut() {
            *value = sanitize(*value);
        }

        Self { values }
    }

    /// Look up a metric by name. Unknown names return `None`; badge
    /// requirements treat that as an unmet condition.
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    // Calendar-year subtraction, matching the observed upstream behavior
    // (a December 31 signup counts as one year old on January 1).
    fn account_age_years(profile: &ProfileMetrics, as_of: DateTime<Utc>) -> f64 {
        if let Some(age) = profile.account_age_years {
            return age;
        }
        match profile.account_created_at {
            Some(created) => (as_of.year() - created.year()) as f64,
            None => 0.0,
        }
    }

    fn follower_ratio(profile: &ProfileMetrics) -> f64 {
        if profile.following == 0 {
            0.0
        } else {
            profile.followers as f64 / profile.following as f64
        }
    }
}

/// Clamp negative and NaN metric values to zero.
pub fn sanitize(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_follower_ratio_zero_following() {
        let profile = ProfileMetrics {
            followers: 100,
            following: 0,
            ..Default::default()
        };
        let view = MetricsView::derive(&profile, Utc::now());
        assert_eq!(view.get(METRIC_FOLLOWER_RATIO), Some(0.0));
    }

    #[test]
    fn test_follower_ratio() {
        let profile = ProfileMetrics {
            followers: 50,
            following: 10,
            ..Default::default()
        };
        let view = MetricsView::derive(&profile, Utc::now());
        assert_eq!(view.get(METRIC_FOLLOWER_RATIO), Some(5.0));
    }

    #[test]
    fn test_max_repo_stars_empty() {
        let view = MetricsView::derive(&ProfileMetrics::default(), Utc::now());
        assert_eq!(view.get(METRIC_MAX_REPO_STARS), Some(0.0));
    }

    #[test]
    fn test_max_repo_stars() {
        let profile = ProfileMetrics {
            per_repo_stars: vec![120, 30],
            ..Default::default()
        };
        let view = MetricsView::derive(&profile, Utc::now());
        assert_eq!(view.get(METRIC_MAX_REPO_STARS), Some(120.0));
    }

    #[test]
    fn test_account_age_calendar_year_subtraction() {
        let profile = ProfileMetrics {
            account_created_at: Some(Utc.with_ymd_and_hms(2019, 12, 31, 23, 0, 0).unwrap()),
            ..Default::default()
        };
        let as_of = Utc.with_ymd_and_hms(2020, 1, 1, 1, 0, 0).unwrap();
        let view = MetricsView::derive(&profile, as_of);
        // One day elapsed but the calendar year rolled over.
        assert_eq!(view.get(METRIC_ACCOUNT_AGE_YEARS), Some(1.0));
    }

    #[test]
    fn test_account_age_override_wins() {
        let profile = ProfileMetrics {
            account_created_at: Some(Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap()),
            account_age_years: Some(2.5),
            ..Default::default()
        };
        let view = MetricsView::derive(&profile, Utc::now());
        assert_eq!(view.get(METRIC_ACCOUNT_AGE_YEARS), Some(2.5));
    }

    #[test]
    fn test_unknown_metric_is_none() {
        let view = MetricsView::derive(&ProfileMetrics::default(), Utc::now());
        assert_eq!(view.get("nonexistent_metric"), None);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(-3.0), 0.0);
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(7.5), 7.5);
    }
}
