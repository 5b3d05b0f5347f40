use crate::leveling::Category;
use serde::{Deserialize, Serialize};

/// Resolved progression state for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelState {
    pub category: Category,
    pub current_value: f64,
    pub current_level: u32,
    pub current_requirement: u64,
    pub next_requirement: u64,
    pub progress: f64,
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Legendary,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
            Tier::Diamond => "diamond",
            Tier::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Cosmetic/reward classification of a level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierInfo {
    pub tier: Tier,
    pub rarity: Rarity,
    pub animation_intensity: f64,
    pub points_multiplier: f64,
}

impl TierInfo {
    /// Descending step function of level; first matching threshold wins.
    pub fn classify(level: u32) -> Self {
        match level {
            l if l >= 50 => Self {
                tier: Tier::Legendary,
                rarity: Rarity::Legendary,
                animation_intensity: 1.0,
                points_multiplier: 10.0,
            },
            l if l >= 30 => Self {
                tier: Tier::Diamond,
                rarity: Rarity::Legendary,
                animation_intensity: 0.8,
                points_multiplier: 7.0,
            },
            l if l >= 20 => Self {
                tier: Tier::Platinum,
                rarity: Rarity::Epic,
                animation_intensity: 0.6,
                points_multiplier: 5.0,
            },
            l if l >= 10 => Self {
                tier: Tier::Gold,
                rarity: Rarity::Epic,
                animation_intensity: 0.4,
                points_multiplier: 3.0,
            },
            l if l >= 5 => Self {
                tier: Tier::Silver,
                rarity: Rarity::Rare,
                animation_intensity: 0.2,
                points_multiplier: 2.0,
            },
            _ => Self {
                tier: Tier::Bronze,
                rarity: Rarity::Common,
                animation_intensity: 0.1,
                points_multiplier: 1.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(TierInfo::classify(0).tier, Tier::Bronze);
        assert_eq!(TierInfo::classify(4).tier, Tier::Bronze);
        assert_eq!(TierInfo::classify(5).tier, Tier::Silver);
        assert_eq!(TierInfo::classify(9).tier, Tier::Silver);
        assert_eq!(TierInfo::classify(10).tier, Tier::Gold);
        assert_eq!(TierInfo::classify(19).tier, Tier::Gold);
        assert_eq!(TierInfo::classify(20).tier, Tier::Platinum);
        assert_eq!(TierInfo::classify(29).tier, Tier::Platinum);
        assert_eq!(TierInfo::classify(30).tier, Tier::Diamond);
        assert_eq!(TierInfo::classify(49).tier, Tier::Diamond);
        assert_eq!(TierInfo::classify(50).tier, Tier::Legendary);
        assert_eq!(TierInfo::classify(120).tier, Tier::Legendary);
    }

    #[test]
    fn test_rarity_tracks_tier() {
        assert_eq!(TierInfo::classify(0).rarity, Rarity::Common);
        assert_eq!(TierInfo::classify(5).rarity, Rarity::Rare);
        assert_eq!(TierInfo::classify(10).rarity, Rarity::Epic);
        assert_eq!(TierInfo::classify(20).rarity, Rarity::Epic);
        assert_eq!(TierInfo::classify(30).rarity, Rarity::Legendary);
        assert_eq!(TierInfo::classify(50).rarity, Rarity::Legendary);
    }

    #[test]
    fn test_multiplier_monotonic() {
        let mut last = 0.0;
        for level in 0..=60 {
            let info = TierInfo::classify(level);
            assert!(
                info.points_multiplier >= last,
                "multiplier dropped at level {}",
                level
            );
            last = info.points_multiplier;
        }
    }

    #[test]
    fn test_animation_intensity_bounds() {
        for level in 0..=60 {
            let info = TierInfo::classify(level);
            assert!(info.animation_intensity >= 0.0 && info.animation_intensity <= 1.0);
        }
    }
}
