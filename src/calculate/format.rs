//! Metric formatting and comparison.
//!
//! Pure display helpers: raw numbers in, display-ready strings and
//! better/worse flags out. Non-finite inputs are sanitized to zero so
//! these never panic and never produce "NaN" in a rendered view.

use serde::{Deserialize, Serialize};

/// How a metric value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Integer,
    Percentage,
    Decimal,
}

/// Which of two compared values is strictly better.
///
/// Equal values set neither flag; ties are not highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricFlags {
    pub a_is_better: bool,
    pub b_is_better: bool,
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Format a raw metric value for display.
pub fn format_metric(value: f64, kind: MetricKind) -> String {
    let value = sanitize(value);
    match kind {
        MetricKind::Integer => format!("{:.0}", value),
        MetricKind::Percentage => format!("{:.1}%", value),
        MetricKind::Decimal => format!("{:.1}", value),
    }
}

/// Compare two metric values under an explicit tie-break direction.
pub fn compare_metric(a: f64, b: f64, higher_is_better: bool) -> MetricFlags {
    let a = sanitize(a);
    let b = sanitize(b);
    if a == b {
        return MetricFlags::default();
    }
    let a_is_better = if higher_is_better { a > b } else { a < b };
    MetricFlags {
        a_is_better,
        b_is_better: !a_is_better,
    }
}
