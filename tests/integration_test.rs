use chrono::{TimeZone, Utc};
use gitquest::{
    badges::{catalog, BadgeEvaluator},
    engine::ProgressionEngine,
    leveling::{requirement, resolve_level, Category, FormulaParams, FormulaTable},
    models::{MetricsView, ProfileMetrics, TierInfo},
    Settings,
};

#[test]
fn test_requirement_reference_values() {
    // floor(10 * 1^1.5 * log2(2) * 1.08^0) = 10
    let params = FormulaParams::new(10.0, 1.5, 0.08, 20);
    assert_eq!(requirement(1, &params), 10);
    assert_eq!(requirement(0, &params), 0);
    assert_eq!(requirement(-5, &params), 0);
}

#[test]
fn test_level_round_trip_across_categories() {
    let table = FormulaTable::builtin();
    for category in Category::ALL {
        if category == Category::AccountAge {
            continue;
        }
        for n in 1..=20 {
            let threshold = table.requirement(category, n).unwrap();
            let state = resolve_level(&table, category, threshold as f64).unwrap();
            assert_eq!(state.current_level, n as u32);
            assert_eq!(state.progress, 0.0);
            assert_eq!(state.progress_percentage, 0.0);
        }
    }
}

#[test]
fn test_account_age_uses_floor() {
    let table = FormulaTable::builtin();
    let state = resolve_level(&table, Category::AccountAge, 5.9).unwrap();
    assert_eq!(state.current_level, 5);
}

#[test]
fn test_tier_progression() {
    let mut last = 0.0;
    for level in 0..=100 {
        let info = TierInfo::classify(level);
        assert!(info.points_multiplier >= last);
        last = info.points_multiplier;
    }
}

#[test]
fn test_established_profile_badges() {
    let profile = ProfileMetrics {
        followers: 150,
        following: 80,
        public_repos: 60,
        total_stars: 1500,
        per_repo_stars: vec![120, 30],
        contribution_streak: 10,
        longest_streak: 40,
        account_created_at: Some(Utc.with_ymd_and_hms(2018, 3, 10, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    let as_of = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let view = MetricsView::derive(&profile, as_of);
    let unlocked = BadgeEvaluator::new().evaluate(&view);

    for id in [
        catalog::POPULAR_DEV,
        catalog::PROLIFIC_CREATOR,
        catalog::STAR_COLLECTOR,
        catalog::VIRAL_REPO,
        catalog::VETERAN_DEVELOPER,
    ] {
        assert!(unlocked.contains(id), "expected {} to unlock", id);
    }
    for id in [catalog::CELEBRITY_DEV, catalog::UNSTOPPABLE_FORCE] {
        assert!(!unlocked.contains(id), "expected {} to stay locked", id);
    }
}

#[test]
fn test_ratio_badge_independent_of_raw_count() {
    let profile = ProfileMetrics {
        followers: 50,
        following: 10,
        ..Default::default()
    };
    let view = MetricsView::derive(&profile, Utc::now());
    let unlocked = BadgeEvaluator::new().evaluate(&view);
    assert!(unlocked.contains(catalog::INFLUENCER));
    assert!(!unlocked.contains(catalog::POPULAR_DEV));
}

#[test]
fn test_full_report_serializes() {
    let engine = ProgressionEngine::from_settings(&Settings::default()).unwrap();
    let profile = ProfileMetrics {
        total_contributions: 1200,
        followers: 220,
        following: 50,
        public_repos: 30,
        total_stars: 800,
        per_repo_stars: vec![500, 200, 100],
        longest_streak: 45,
        languages_used: 6,
        account_created_at: Some(Utc.with_ymd_and_hms(2016, 1, 15, 0, 0, 0).unwrap()),
        ..Default::default()
    };
    let as_of = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let report = engine.score_profile(&profile, as_of).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("unlocked_badges"));
    assert!(json.contains("total_points"));

    // Deterministic for the same snapshot and instant.
    let again = engine.score_profile(&profile, as_of).unwrap();
    assert_eq!(serde_json::to_string(&again).unwrap(), json);
}

#[test]
fn test_profile_snapshot_deserializes_with_defaults() {
    let metrics: ProfileMetrics = serde_json::from_str(
        r#"{"followers": 42, "total_stars": 7, "per_repo_stars": [4, 3]}"#,
    )
    .unwrap();
    assert_eq!(metrics.followers, 42);
    assert_eq!(metrics.total_contributions, 0);
    assert_eq!(metrics.account_created_at, None);
}

#[test]
fn test_settings_overrides_feed_engine() {
    let mut settings = Settings::default();
    settings.leveling.overrides.insert(
        "stars".to_string(),
        FormulaParams::new(20.0, 1.5, 0.08, 20),
    );
    assert!(settings.validate().is_ok());

    let engine = ProgressionEngine::from_settings(&settings).unwrap();
    let state = engine.resolve(Category::Stars, 19.0).unwrap();
    assert_eq!(state.current_level, 0);
    let state = engine.resolve(Category::Stars, 20.0).unwrap();
    assert_eq!(state.current_level, 1);
}
