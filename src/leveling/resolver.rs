use crate::leveling::formula::{requirement, Category, FormulaParams, FormulaTable};
use crate::models::error::Result;
use crate::models::level::LevelState;
use crate::models::metrics::sanitize;

// Upper bound on the level search; far beyond anything real-world metric
// magnitudes can reach, it only guards against pathological parameters.
const LEVEL_SEARCH_CEILING: i64 = 1 << 20;

/// Resolve the current level and progress for a category.
pub fn resolve_level(
    table: &FormulaTable,
    category: Category,
    current_value: f64,
) -> Result<LevelState> {
    let value = sanitize(current_value);

    // One level per completed year; the formula table holds only an
    // identity placeholder for this category.
    if category == Category::AccountAge {
        return Ok(resolve_account_age(value));
    }

    let params = table.params(category)?;
    let level = find_level(value, params);

    let current_requirement = requirement(level, params);
    let next_requirement = requirement(level + 1, params);
    let progress = value - current_requirement as f64;

    Ok(LevelState {
        category,
        current_value: value,
        current_level: level as u32,
        current_requirement,
        next_requirement,
        progress,
        progress_percentage: progress_percentage(progress, current_requirement, next_requirement),
    })
}

fn resolve_account_age(value: f64) -> LevelState {
    let level = value.floor() as u32;
    let progress = value - level as f64;
    LevelState {
        category: Category::AccountAge,
        current_value: value,
        current_level: level,
        current_requirement: level as u64,
        next_requirement: level as u64 + 1,
        progress,
        progress_percentage: progress_percentage(progress, level as u64, level as u64 + 1),
    }
}

/// Largest `n >= 0` with `requirement(n) <= value`.
///
/// The requirement function is monotone non-decreasing in `n`, so instead
/// of the linear scan this grows an exponential upper bound and binary
/// searches inside it. Observable results match the scan exactly.
fn find_level(value: f64, params: &FormulaParams) -> i64 {
    if (requirement(1, params) as f64) > value {
        return 0;
    }

    // Exponential search: after the loop, requirement(lo) <= value < requirement(hi).
    let mut hi: i64 = 2;
    while (requirement(hi, params) as f64) <= value && hi < LEVEL_SEARCH_CEILING {
        hi *= 2;
    }
    if (requirement(hi, params) as f64) <= value {
        return hi;
    }
    let mut lo = hi / 2;

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if (requirement(mid, params) as f64) <= value {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Percentage of the span between the current and next requirement.
///
/// The denominator is floored at 1 to avoid division by zero; when the next
/// requirement equals the current one (degenerate plateau) the level is
/// treated as maxed at 100.
pub fn progress_percentage(progress: f64, current: u64, next: u64) -> f64 {
    if next == current {
        return 100.0;
    }
    let span = next.saturating_sub(current).max(1) as f64;
    (100.0 * progress / span).clamp(0.0, 100.0)
}
