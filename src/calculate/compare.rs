//! Two-player comparison orchestration.
//!
//! Composes the aggregates of two players into a single result for the
//! presentation layer. Formatting stays out of here; rows carry raw values,
//! the render kind, and better/worse flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{AggregatedPlayerStats, MatchFormat, PlayerId, Surface, WinLossRecord};

use super::format::{compare_metric, MetricFlags, MetricKind};

/// A surface or format bucket paired across both players. Missing keys are
/// zero-filled during union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketPair {
    pub player1: WinLossRecord,
    pub player2: WinLossRecord,
}

/// One paired metric with its tie-break direction and highlight flags.
#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub name: &'static str,
    pub kind: MetricKind,
    pub player1: f64,
    pub player2: f64,
    pub higher_is_better: bool,
    pub flags: MetricFlags,
}

/// Full comparison of two selected players.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerComparison {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub surfaces: BTreeMap<Surface, BucketPair>,
    pub formats: BTreeMap<MatchFormat, BucketPair>,
    pub metrics: Vec<MetricRow>,
}

/// Outcome of a comparison request. `Incomplete` is the sentinel for a
/// missing selection; the caller renders a prompt instead of stats.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonResult {
    Incomplete,
    Complete(PlayerComparison),
}

/// Union two bucket maps, synthesizing an all-zero record for whichever
/// side is missing a key.
pub fn union_buckets<K: Ord + Copy>(
    a: &BTreeMap<K, WinLossRecord>,
    b: &BTreeMap<K, WinLossRecord>,
) -> BTreeMap<K, BucketPair> {
    let mut union = BTreeMap::new();
    for (&key, &record) in a {
        union.insert(
            key,
            BucketPair {
                player1: record,
                player2: b.get(&key).copied().unwrap_or_default(),
            },
        );
    }
    for (&key, &record) in b {
        union.entry(key).or_insert(BucketPair {
            player1: WinLossRecord::default(),
            player2: record,
        });
    }
    union
}

type MetricExtractor = fn(&AggregatedPlayerStats) -> f64;

/// Per-metric comparison policy: name, render kind, tie-break direction,
/// and how to pull the value from an aggregate.
const METRIC_POLICY: &[(&str, MetricKind, bool, MetricExtractor)] = &[
    ("wins", MetricKind::Integer, true, |s| s.wins as f64),
    ("losses", MetricKind::Integer, false, |s| s.losses as f64),
    ("win_rate", MetricKind::Percentage, true, |s| s.win_rate),
    ("aces", MetricKind::Decimal, true, |s| s.technical.aces),
    ("double_faults", MetricKind::Decimal, false, |s| {
        s.technical.double_faults
    }),
    ("winners_per_match", MetricKind::Decimal, true, |s| {
        s.technical.winners_per_match
    }),
    ("unforced_errors_per_match", MetricKind::Decimal, false, |s| {
        s.technical.unforced_errors_per_match
    }),
    ("net_success_rate", MetricKind::Percentage, true, |s| {
        s.technical.net_success_rate
    }),
];

/// Compare two players' aggregates.
///
/// Either selection absent yields the `Incomplete` sentinel; no partial
/// computation is attempted.
pub fn compare_players(
    player1: Option<&AggregatedPlayerStats>,
    player2: Option<&AggregatedPlayerStats>,
) -> ComparisonResult {
    let (p1, p2) = match (player1, player2) {
        (Some(a), Some(b)) => (a, b),
        _ => return ComparisonResult::Incomplete,
    };

    let metrics = METRIC_POLICY
        .iter()
        .map(|&(name, kind, higher_is_better, extract)| {
            let a = extract(p1);
            let b = extract(p2);
            MetricRow {
                name,
                kind,
                player1: a,
                player2: b,
                higher_is_better,
                flags: compare_metric(a, b, higher_is_better),
            }
        })
        .collect();

    ComparisonResult::Complete(PlayerComparison {
        player1: p1.player_id,
        player2: p2.player_id,
        surfaces: union_buckets(&p1.by_surface, &p2.by_surface),
        formats: union_buckets(&p1.by_format, &p2.by_format),
        metrics,
    })
}
