use crate::models::level::Rarity;
use crate::models::metrics::MetricsView;
use serde::{Deserialize, Serialize};

/// Comparison operator for a single badge requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonOp {
    Gte,
    Lte,
    Eq,
}

impl ComparisonOp {
    pub fn evaluate(&self, actual: f64, expected: f64) -> bool {
        match self {
            ComparisonOp::Gte => actual >= expected,
            ComparisonOp::Lte => actual <= expected,
            ComparisonOp::Eq => (actual - expected).abs() < f64::EPSILON,
        }
    }
}

/// One threshold condition over a named metric.
///
/// The metric name stays a string on purpose: the catalog is static trusted
/// data, but a typo'd name must fail closed (requirement unmet) instead of
/// panicking mid-evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Requirement {
    pub metric: &'static str,
    pub op: ComparisonOp,
    pub value: f64,
}

impl Requirement {
    pub fn new(metric: &'static str, op: ComparisonOp, value: f64) -> Self {
        Self { metric, op, value }
    }

    /// Unknown metric names evaluate false.
    pub fn is_met(&self, view: &MetricsView) -> bool {
        match view.get(self.metric) {
            Some(actual) => self.op.evaluate(actual, self.value),
            None => false,
        }
    }
}

/// A binary (unlocked/locked) achievement: a conjunction of requirements
/// over a profile snapshot. IDs are stable kebab-case strings.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub rarity: Rarity,
    pub requirements: Vec<Requirement>,
}
