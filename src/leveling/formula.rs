use crate::models::error::{GitQuestError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Metric dimensions with their own leveling ladder.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Followers,
    Stars,
    Contributions,
    LanguageDiversity,
    Repositories,
    Streak,
    AccountAge,
    Issues,
    PullRequests,
    Reviews,
    ExternalContributions,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Followers,
        Category::Stars,
        Category::Contributions,
        Category::LanguageDiversity,
        Category::Repositories,
        Category::Streak,
        Category::AccountAge,
        Category::Issues,
        Category::PullRequests,
        Category::Reviews,
        Category::ExternalContributions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Followers => "followers",
            Category::Stars => "stars",
            Category::Contributions => "contributions",
            Category::LanguageDiversity => "language_diversity",
            Category::Repositories => "repositories",
            Category::Streak => "streak",
            Category::AccountAge => "account_age",
            Category::Issues => "issues",
            Category::PullRequests => "pull_requests",
            Category::Reviews => "reviews",
            Category::ExternalContributions => "external_contributions",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "followers" => Some(Category::Followers),
            "stars" => Some(Category::Stars),
            "contributions" => Some(Category::Contributions),
            "language_diversity" | "languages" => Some(Category::LanguageDiversity),
            "repositories" | "repos" => Some(Category::Repositories),
            "streak" => Some(Category::Streak),
            "account_age" | "age" => Some(Category::AccountAge),
            "issues" => Some(Category::Issues),
            "pull_requests" | "prs" => Some(Category::PullRequests),
            "reviews" => Some(Category::Reviews),
            "external_contributions" => Some(Category::ExternalContributions),
            _ => None,
        }
    }

    /// Metric name this category levels on, as exposed by `MetricsView`.
    pub fn metric_key(&self) -> &'static str {
        use crate::models::metrics;
        match self {
            Category::Followers => metrics::METRIC_FOLLOWERS,
            Category::Stars => metrics::METRIC_TOTAL_STARS,
            Category::Contributions => metrics::METRIC_TOTAL_CONTRIBUTIONS,
            Category::LanguageDiversity => metrics::METRIC_LANGUAGES_USED,
            Category::Repositories => metrics::METRIC_PUBLIC_REPOS,
            Category::Streak => metrics::METRIC_LONGEST_STREAK,
            Category::AccountAge => metrics::METRIC_ACCOUNT_AGE_YEARS,
            Category::Issues => metrics::METRIC_TOTAL_ISSUES,
            Category::PullRequests => metrics::METRIC_TOTAL_PULL_REQUESTS,
            Category::Reviews => metrics::METRIC_TOTAL_REVIEWS,
            Category::ExternalContributions => metrics::METRIC_EXTERNAL_CONTRIBUTIONS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category constants of the level-requirement formula:
///
/// `requirement(n) = floor(base * n^exponent * log2(n+1)
///                         * (1+acceleration)^max(0, n - surge_level))`
///
/// `base * n^exponent` is polynomial growth tuned per category, the log2
/// term is a slow multiplicative penalty so early levels stay cheap, and
/// the surge term compounds only past `surge_level`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FormulaParams {
    pub base: f64,
    pub exponent: f64,
    pub acceleration: f64,
    pub surge_level: u32,
}

impl FormulaParams {
    pub const fn new(base: f64, exponent: f64, acceleration: f64, surge_level: u32) -> Self {
        Self {
            base,
            exponent,
            acceleration,
            surge_level,
        }
    }

    /// Degenerate identity placeholder for `account_age`, which levels one
    /// per completed year and never runs through the formula.
    pub const fn identity() -> Self {
        Self::new(1.0, 1.0, 0.0, 0)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(self.base >= 1.0) {
            return Err(format!("base must be >= 1, got {}", self.base));
        }
        if !(self.exponent >= 1.0) {
            return Err(format!("exponent must be >= 1, got {}", self.exponent));
        }
        if !(self.acceleration >= 0.0) {
            return Err(format!(
                "acceleration must be >= 0, got {}",
                self.acceleration
            ));
        }
        Ok(())
    }
}

/// Cumulative metric value required to reach `level`.
///
/// Computed in double precision and floored; flooring (not rounding) keeps
/// the function monotone non-decreasing in `level`.
pub fn requirement(level: i64, params: &FormulaParams) -> u64 {
    if level <= 0 {
        return 0;
    }
    let n = level as f64;
    let base = params.base * n.powf(params.exponent);
    let penalty = (n + 1.0).log2();
    let surge_exp = level.saturating_sub(params.surge_level as i64).max(0) as f64;
    let surge = (1.0 + params.acceleration).powf(surge_exp);
    (base * penalty * surge).floor() as u64
}

/// Immutable `Category -> FormulaParams` mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct FormulaTable {
    params: HashMap<Category, FormulaParams>,
}

impl FormulaTable {
    /// Built-in parameter sets for every leveled category.
    pub fn builtin() -> Self {
        let mut params = HashMap::new();
        params.insert(Category::Followers, FormulaParams::new(8.0, 1.4, 0.06, 18));
        params.insert(Category::Stars, FormulaParams::new(10.0, 1.5, 0.08, 20));
        params.insert(
            Category::Contributions,
            FormulaParams::new(50.0, 1.45, 0.07, 22),
        );
        params.insert(
            Category::LanguageDiversity,
            FormulaParams::new(1.5, 1.2, 0.05, 12),
        );
        params.insert(
            Category::Repositories,
            FormulaParams::new(3.0, 1.3, 0.05, 15),
        );
        params.insert(Category::Streak, FormulaParams::new(4.0, 1.35, 0.06, 16));
        params.insert(Category::AccountAge, FormulaParams::identity());
        params.insert(Category::Issues, FormulaParams::new(5.0, 1.35, 0.06, 18));
        params.insert(
            Category::PullRequests,
            FormulaParams::new(5.0, 1.4, 0.06, 18),
        );
        params.insert(Category::Reviews, FormulaParams::new(4.0, 1.35, 0.06, 16));
        params.insert(
            Category::ExternalContributions,
            FormulaParams::new(2.0, 1.3, 0.07, 14),
        );
        Self { params }
    }

    /// Arbitrary table; used by tests and by configuration overrides.
    pub fn from_map(params: HashMap<Category, FormulaParams>) -> Self {
        Self { params }
    }

    /// Built-in table with per-category overrides applied on top.
    pub fn with_overrides(overrides: &HashMap<String, FormulaParams>) -> Result<Self> {
        let mut table = Self::builtin();
        for (name, params) in overrides {
            let category = Category::from_str(name)
                .ok_or_else(|| GitQuestError::UnknownCategory(name.clone()))?;
            params
                .validate()
                .map_err(|reason| GitQuestError::InvalidParams { category, reason })?;
            table.params.insert(category, *params);
        }
        Ok(table)
    }

    pub fn params(&self, category: Category) -> Result<&FormulaParams> {
        self.params
            .get(&category)
            .ok_or(GitQuestError::MissingFormula(category))
    }

    pub fn requirement(&self, category: Category, level: i64) -> Result<u64> {
        Ok(requirement(level, self.params(category)?))
    }

    /// Every leveled category must be present with sane parameters.
    pub fn validate(&self) -> std::result::Result<(), String> {
        for category in Category::ALL {
            match self.params.get(&category) {
                None => return Err(format!("missing formula parameters for {}", category)),
                Some(params) => params
                    .validate()
                    .map_err(|reason| format!("{}: {}", category, reason))?,
            }
        }
        Ok(())
    }
}

impl Default for FormulaTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_level_one() {
        // floor(10 * 1^1.5 * log2(2) * 1.08^0) = 10
        let params = FormulaParams::new(10.0, 1.5, 0.08, 20);
        assert_eq!(requirement(1, &params), 10);
    }

    #[test]
    fn test_requirement_level_two_floors() {
        // 10 * 2^1.5 * log2(3) = 44.828..., floored not rounded
        let params = FormulaParams::new(10.0, 1.5, 0.08, 20);
        assert_eq!(requirement(2, &params), 44);
    }

    #[test]
    fn test_requirement_nonpositive_level() {
        let params = FormulaParams::new(10.0, 1.5, 0.08, 20);
        assert_eq!(requirement(0, &params), 0);
        assert_eq!(requirement(-1, &params), 0);
        assert_eq!(requirement(-40, &params), 0);
    }

    #[test]
    fn test_surge_kicks_in_past_threshold() {
        let flat = FormulaParams::new(10.0, 1.5, 0.0, 5);
        let surging = FormulaParams::new(10.0, 1.5, 0.08, 5);
        assert_eq!(requirement(5, &flat), requirement(5, &surging));
        assert!(requirement(6, &surging) > requirement(6, &flat));
    }

    #[test]
    fn test_monotonicity_all_builtin_categories() {
        let table = FormulaTable::builtin();
        for category in Category::ALL {
            let params = table.params(category).unwrap();
            let mut last = 0;
            for n in 0..=80 {
                let req = requirement(n, params);
                assert!(
                    req >= last,
                    "{} requirement decreased at level {}",
                    category,
                    n
                );
                last = req;
            }
        }
    }

    #[test]
    fn test_builtin_table_validates() {
        assert!(FormulaTable::builtin().validate().is_ok());
    }

    #[test]
    fn test_missing_category_is_error() {
        let table = FormulaTable::from_map(HashMap::new());
        let err = table.params(Category::Stars).unwrap_err();
        assert!(matches!(
            err,
            GitQuestError::MissingFormula(Category::Stars)
        ));
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_override_unknown_category_rejected() {
        let mut overrides = HashMap::new();
        overrides.insert("starz".to_string(), FormulaParams::new(5.0, 1.2, 0.0, 10));
        let err = FormulaTable::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, GitQuestError::UnknownCategory(_)));
    }

    #[test]
    fn test_override_replaces_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("stars".to_string(), FormulaParams::new(20.0, 1.5, 0.08, 20));
        let table = FormulaTable::with_overrides(&overrides).unwrap();
        assert_eq!(table.requirement(Category::Stars, 1).unwrap(), 20);
        // Untouched categories keep their built-in parameters.
        assert_eq!(table.requirement(Category::Followers, 1).unwrap(), 8);
    }

    #[test]
    fn test_override_invalid_params_rejected() {
        let mut overrides = HashMap::new();
        overrides.insert("stars".to_string(), FormulaParams::new(0.2, 1.5, 0.08, 20));
        let err = FormulaTable::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, GitQuestError::InvalidParams { .. }));
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("unknown"), None);
    }
}
