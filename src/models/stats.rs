//! Derived statistics models.
//!
//! Everything here is recomputed on demand from the match corpus and never
//! persisted or mutated after being returned.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchFormat, MatchOutcome, MatchRecord, PlayerId, Surface};

/// Win/loss tally for one bucket (overall, per surface, or per format).
///
/// Results other than win/loss count toward `total` only, so
/// `wins + losses <= total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub total: u32,
    /// Win rate as a 0-100 percentage; 0 when total is 0
    pub win_rate: f64,
}

impl WinLossRecord {
    /// Count one match toward the bucket and refresh the win rate.
    pub fn add(&mut self, outcome: Option<MatchOutcome>) {
        self.total += 1;
        match outcome {
            Some(MatchOutcome::Win) => self.wins += 1,
            Some(MatchOutcome::Loss) => self.losses += 1,
            _ => {}
        }
        self.win_rate = if self.total > 0 {
            self.wins as f64 / self.total as f64 * 100.0
        } else {
            0.0
        };
    }
}

/// Averaged technical stats across all matches with a recorded snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAverages {
    /// Number of matches that carried a snapshot
    pub matches_with_data: u32,
    pub first_serve_pct: f64,
    pub aces: f64,
    pub double_faults: f64,
    pub winners_per_match: f64,
    pub unforced_errors_per_match: f64,
    /// Net points won normalized against a nominal opportunity count, 0-100
    pub net_success_rate: f64,
}

/// Aggregate statistics for one player over the whole corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedPlayerStats {
    pub player_id: PlayerId,
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    /// Overall win rate, 0-100
    pub win_rate: f64,

    /// Buckets keyed by surface; surfaces absent from the corpus are absent
    /// here (the comparison layer zero-fills when unioning)
    pub by_surface: BTreeMap<Surface, WinLossRecord>,

    /// Buckets keyed by match format
    pub by_format: BTreeMap<MatchFormat, WinLossRecord>,

    /// Averaged technical stats
    pub technical: TechnicalAverages,

    /// When these stats were computed
    pub computed_at: DateTime<Utc>,
}

impl AggregatedPlayerStats {
    /// Empty aggregate for a player with no matches.
    pub fn empty(player_id: PlayerId) -> Self {
        Self {
            player_id,
            total_matches: 0,
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            by_surface: BTreeMap::new(),
            by_format: BTreeMap::new(),
            technical: TechnicalAverages::default(),
            computed_at: Utc::now(),
        }
    }
}

/// Head-to-head record between two specific players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub player1: PlayerId,
    pub player2: PlayerId,
    pub total_matches: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,

    /// Contributing matches in corpus order (callers may re-sort by date)
    pub matches: Vec<MatchRecord>,

    /// When this record was computed
    pub computed_at: DateTime<Utc>,
}

impl HeadToHeadRecord {
    /// Empty record: a normal terminal state when two players never met.
    pub fn empty(player1: PlayerId, player2: PlayerId) -> Self {
        Self {
            player1,
            player2,
            total_matches: 0,
            player1_wins: 0,
            player2_wins: 0,
            matches: Vec::new(),
            computed_at: Utc::now(),
        }
    }
}
