use crate::leveling::formula::{Category, FormulaTable};
use crate::models::error::Result;

/// Display base name for a leveled category.
fn base_name(category: Category) -> &'static str {
    match category {
        Category::Followers => "Community Builder",
        Category::Stars => "Star Collector",
        Category::Contributions => "Code Contributor",
        Category::LanguageDiversity => "Polyglot Programmer",
        Category::Repositories => "Repository Architect",
        Category::Streak => "Consistency Champion",
        Category::AccountAge => "GitHub Newcomer",
        Category::Issues => "Issue Hunter",
        Category::PullRequests => "Merge Maestro",
        Category::Reviews => "Code Reviewer",
        Category::ExternalContributions => "Open Source Ally",
    }
}

// (verb, unit) pair for description text.
fn phrase(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Followers => ("Gained", "followers"),
        Category::Stars => ("Received", "stars"),
        Category::Contributions => ("Made", "contributions"),
        Category::LanguageDiversity => ("Worked in", "languages"),
        Category::Repositories => ("Published", "public repositories"),
        Category::Streak => ("Sustained", "streak days"),
        Category::AccountAge => ("Active for", "years"),
        Category::Issues => ("Opened", "issues"),
        Category::PullRequests => ("Opened", "pull requests"),
        Category::Reviews => ("Completed", "reviews"),
        Category::ExternalContributions => ("Contributed to", "external repositories"),
    }
}

/// Rank qualifier appended to the base name; first matching threshold wins.
fn rank_qualifier(level: u32) -> &'static str {
    match level {
        l if l >= 50 => " - Legendary",
        l if l >= 30 => " - Master",
        l if l >= 20 => " - Advanced",
        l if l >= 10 => " - Expert",
        l if l >= 5 => " - Pro",
        l if l >= 3 => " - Skilled",
        _ => "",
    }
}

fn account_age_title(level: u32) -> &'static str {
    match level {
        l if l >= 15 => "GitHub Legend",
        l if l >= 12 => "GitHub Pioneer",
        l if l >= 8 => "GitHub Elder",
        l if l >= 5 => "GitHub Veteran",
        l if l >= 3 => "GitHub Regular",
        l if l >= 1 => "GitHub Explorer",
        _ => "GitHub Newcomer",
    }
}

/// Achievement title for (category, level).
pub fn achievement_name(category: Category, level: u32) -> String {
    if category == Category::AccountAge {
        return account_age_title(level).to_string();
    }
    format!("{}{}", base_name(category), rank_qualifier(level))
}

/// Achievement description for (category, level), interpolating the current
/// and next requirement thresholds.
pub fn achievement_description(
    table: &FormulaTable,
    category: Category,
    level: u32,
) -> Result<String> {
    if category == Category::AccountAge {
        return Ok(account_age_description(level));
    }

    let (verb, unit) = phrase(category);
    let next = table.requirement(category, level as i64 + 1)?;
    if level == 0 {
        return Ok(format!("Reach {} {} to earn your first rank.", next, unit));
    }
    let current = table.requirement(category, level as i64)?;
    Ok(format!(
        "{} {}+ {}. Next: {} {}",
        verb, current, unit, next, unit
    ))
}

fn account_age_description(level: u32) -> String {
    match level {
        0 => "Joined GitHub less than a year ago. The journey begins.".to_string(),
        1 => "Active on GitHub for 1 year. Next milestone: 2 years.".to_string(),
        n => format!(
            "Active on GitHub for {} years. Next milestone: {} years.",
            n,
            n + 1
        ),
    }
}
