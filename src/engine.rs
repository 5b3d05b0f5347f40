use crate::badges::BadgeEvaluator;
use crate::config::{PointsSettings, Settings};
use crate::leveling::{
    achievement_description, achievement_name, resolve_level, Category, FormulaTable,
};
use crate::models::{LevelState, MetricsView, ProfileMetrics, Rarity, Result, TierInfo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

/// Fully decorated progression for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryProgress {
    #[serde(flatten)]
    pub state: LevelState,
    pub tier: TierInfo,
    pub name: String,
    pub description: String,
}

/// Everything the gamification layer derives from one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub levels: Vec<CategoryProgress>,
    pub unlocked_badges: BTreeSet<String>,
    pub level_points: f64,
    pub badge_points: f64,
    pub total_points: f64,
    pub generated_at: DateTime<Utc>,
}

/// The progression engine: formula table, badge evaluator, and point
/// awards, assembled once and shared read-only across evaluations.
pub struct ProgressionEngine {
    table: FormulaTable,
    evaluator: BadgeEvaluator,
    points: PointsSettings,
}

impl ProgressionEngine {
    /// Build from settings; override errors surface here rather than at
    /// first lookup.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let table = FormulaTable::with_overrides(&settings.leveling.overrides)?;
        Ok(Self {
            table,
            evaluator: BadgeEvaluator::new(),
            points: settings.points.clone(),
        })
    }

    pub fn table(&self) -> &FormulaTable {
        &self.table
    }

    pub fn evaluator(&self) -> &BadgeEvaluator {
        &self.evaluator
    }

    /// Resolve one category against a raw metric value.
    pub fn resolve(&self, category: Category, value: f64) -> Result<LevelState> {
        resolve_level(&self.table, category, value)
    }

    /// Resolve one category and decorate it for presentation.
    pub fn category_progress(&self, category: Category, value: f64) -> Result<CategoryProgress> {
        let state = resolve_level(&self.table, category, value)?;
        let tier = TierInfo::classify(state.current_level);
        let name = achievement_name(category, state.current_level);
        let description = achievement_description(&self.table, category, state.current_level)?;
        Ok(CategoryProgress {
            state,
            tier,
            name,
            description,
        })
    }

    /// Full evaluation of one snapshot: every leveled category, the badge
    /// catalog, and point totals.
    pub fn score_profile(
        &self,
        profile: &ProfileMetrics,
        as_of: DateTime<Utc>,
    ) -> Result<ProfileReport> {
        let view = MetricsView::derive(profile, as_of);

        let mut levels = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let value = view.get(category.metric_key()).unwrap_or(0.0);
            levels.push(self.category_progress(category, value)?);
        }

        let unlocked_badges = self.evaluator.evaluate(&view);

        let level_points = levels
            .iter()
            .map(|p| p.state.current_level as f64 * self.points.level_base * p.tier.points_multiplier)
            .sum::<f64>();
        let badge_points = self
            .evaluator
            .catalog()
            .iter()
            .filter(|b| unlocked_badges.contains(b.id))
            .map(|b| self.badge_award(b.rarity))
            .sum::<f64>();

        info!(
            "Scored profile: {} categories, {} badges unlocked, {} points",
            levels.len(),
            unlocked_badges.len(),
            level_points + badge_points
        );

        Ok(ProfileReport {
            levels,
            unlocked_badges,
            level_points,
            badge_points,
            total_points: level_points + badge_points,
            generated_at: as_of,
        })
    }

    fn badge_award(&self, rarity: Rarity) -> f64 {
        match rarity {
            Rarity::Common => self.points.badge_common,
            Rarity::Rare => self.points.badge_rare,
            Rarity::Epic => self.points.badge_epic,
            Rarity::Legendary => self.points.badge_legendary,
        }
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        // Built-in table and default awards are always valid.
        Self {
            table: FormulaTable::builtin(),
            evaluator: BadgeEvaluator::new(),
            points: Settings::default().points,
        }
    }
}
