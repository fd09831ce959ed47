//! Statistics calculation engine.
//!
//! Computes derived metrics from the stored match corpus:
//! - Per-player aggregates with surface and format breakdowns
//! - Technical-stats averages and bounded category scores
//! - Head-to-head records between two players
//! - Two-player comparison with per-metric highlighting
//!
//! Everything here is a pure, deterministic fold over caller-supplied
//! input; there is no I/O and no error path. Degenerate inputs resolve to
//! zero/neutral values.

pub mod aggregate;
pub mod compare;
pub mod format;
pub mod head_to_head;
pub mod technical;

pub use aggregate::{aggregate_player_stats, matches_for_player};
pub use compare::{compare_players, union_buckets, BucketPair, ComparisonResult, MetricRow};
pub use format::{compare_metric, format_metric, MetricFlags, MetricKind};
pub use head_to_head::head_to_head;
pub use technical::{
    average_technical, break_point_conversion, category_scores, winner_error_ratio,
    CategoryScores,
};

use crate::models::AggregatedPlayerStats;

/// Win rate as a 0-100 percentage with a zero-denominator guard.
pub fn win_rate_pct(wins: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    }
}

/// Rank aggregates by win rate, descending.
///
/// Players below `min_matches` total matches are excluded; the threshold is
/// floored at 1 so a player with zero matches can never rank.
pub fn rank_by_win_rate(
    stats: &[AggregatedPlayerStats],
    min_matches: u32,
    limit: usize,
) -> Vec<&AggregatedPlayerStats> {
    let min_matches = min_matches.max(1);
    let mut ranked: Vec<&AggregatedPlayerStats> = stats
        .iter()
        .filter(|s| s.total_matches >= min_matches)
        .collect();
    ranked.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}
