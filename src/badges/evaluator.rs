use crate::badges::catalog::default_catalog;
use crate::models::badge::BadgeDefinition;
use crate::models::metrics::MetricsView;
use std::collections::BTreeSet;
use tracing::debug;

/// Matches a profile snapshot against the badge catalog.
///
/// Stateless between calls: the full catalog is re-evaluated every time and
/// previously unlocked badges are not remembered. Diffing old vs. new
/// result sets to detect "newly unlocked" is the caller's job.
pub struct BadgeEvaluator {
    catalog: Vec<BadgeDefinition>,
}

impl BadgeEvaluator {
    pub fn new() -> Self {
        Self {
            catalog: default_catalog(),
        }
    }

    pub fn with_catalog(catalog: Vec<BadgeDefinition>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &[BadgeDefinition] {
        &self.catalog
    }

    /// IDs of every badge whose requirements are all satisfied.
    pub fn evaluate(&self, view: &MetricsView) -> BTreeSet<String> {
        let unlocked: BTreeSet<String> = self
            .catalog
            .iter()
            .filter(|badge| badge.requirements.iter().all(|req| req.is_met(view)))
            .map(|badge| badge.id.to_string())
            .collect();
        debug!(
            "Evaluated {} badge definitions, {} unlocked",
            self.catalog.len(),
            unlocked.len()
        );
        unlocked
    }
}

impl Default for BadgeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
