pub mod settings;

pub use settings::{AppSettings, LevelingSettings, PointsSettings, Settings};
