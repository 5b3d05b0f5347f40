pub mod badges;
pub mod config;
pub mod engine;
pub mod leveling;
pub mod models;

pub use config::Settings;
pub use engine::{CategoryProgress, ProfileReport, ProgressionEngine};
pub use leveling::{Category, FormulaParams, FormulaTable};
pub use models::{
    GitQuestError, LevelState, MetricsView, ProfileMetrics, Rarity, Result, Tier, TierInfo,
};
