use clap::{Parser, Subcommand};
use gitquest::{
    engine::ProgressionEngine,
    leveling::Category,
    models::ProfileMetrics,
    Settings,
};
use chrono::Utc;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[clap(name = "gitquest")]
#[clap(about = "Compute levels, tiers and badges from GitHub profile statistics", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a profile snapshot and print the full report
    Score {
        /// Path to a ProfileMetrics JSON file
        #[clap(short, long)]
        profile: PathBuf,

        /// Emit the report as pretty JSON instead of text
        #[clap(long)]
        json: bool,
    },

    /// List the badges a profile snapshot unlocks
    Badges {
        /// Path to a ProfileMetrics JSON file
        #[clap(short, long)]
        profile: PathBuf,
    },

    /// Print the badge catalog
    Catalog,

    /// Resolve a single category level from a raw value
    Level {
        /// Category name (stars, followers, contributions, ...)
        #[clap(short, long)]
        category: String,

        /// Current cumulative metric value
        #[clap(short, long)]
        value: f64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let settings = Settings::new().unwrap_or_else(|_| {
        info!("Using default settings");
        Settings::default()
    });

    if let Err(e) = settings.validate() {
        error!("Invalid settings: {}", e);
        return Err(anyhow::anyhow!(e));
    }

    let engine = ProgressionEngine::from_settings(&settings)?;

    match cli.command {
        Commands::Score { profile, json } => {
            let metrics = load_profile(&profile)?;
            let report = engine.score_profile(&metrics, Utc::now())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for progress in &report.levels {
                    println!(
                        "{:<24} level {:>3} [{}] {:>5.1}%  {}",
                        progress.state.category.as_str(),
                        progress.state.current_level,
                        progress.tier.tier.as_str(),
                        progress.state.progress_percentage,
                        progress.name,
                    );
                }
                println!();
                println!(
                    "Badges unlocked: {} of {}",
                    report.unlocked_badges.len(),
                    engine.evaluator().catalog().len()
                );
                for id in &report.unlocked_badges {
                    println!("  {}", id);
                }
                println!();
                println!(
                    "Points: {} (levels {} + badges {})",
                    report.total_points, report.level_points, report.badge_points
                );
            }
        }

        Commands::Badges { profile } => {
            let metrics = load_profile(&profile)?;
            let report = engine.score_profile(&metrics, Utc::now())?;
            let catalog = engine.evaluator().catalog();
            for id in &report.unlocked_badges {
                match catalog.iter().find(|b| b.id == id.as_str()) {
                    Some(badge) => println!("{:<24} {} — {}", badge.id, badge.name, badge.description),
                    None => println!("{}", id),
                }
            }
        }

        Commands::Catalog => {
            for badge in engine.evaluator().catalog() {
                println!(
                    "{:<24} [{}] {} — {}",
                    badge.id,
                    badge.rarity.as_str(),
                    badge.name,
                    badge.description
                );
            }
        }

        Commands::Level { category, value } => {
            let category = Category::from_str(&category)
                .ok_or_else(|| anyhow::anyhow!("unknown category: {}", category))?;
            let progress = engine.category_progress(category, value)?;
            println!("{}", progress.name);
            println!("{}", progress.description);
            println!(
                "level {} [{}], {:.1}% toward {}",
                progress.state.current_level,
                progress.tier.tier.as_str(),
                progress.state.progress_percentage,
                progress.state.next_requirement
            );
        }
    }

    Ok(())
}

fn load_profile(path: &PathBuf) -> anyhow::Result<ProfileMetrics> {
    let raw = std::fs::read_to_string(path)?;
    let metrics = serde_json::from_str(&raw)?;
    Ok(metrics)
}
