//! Per-match technical snapshot.

use serde::{Deserialize, Serialize};

/// Technical event counts and ratings recorded for one tracked player in
/// one match. Matches without a snapshot simply omit it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalStats {
    pub aces: u32,
    pub double_faults: u32,
    pub forehand_winners: u32,
    pub forehand_errors: u32,
    pub backhand_winners: u32,
    pub backhand_errors: u32,
    pub volley_winners: u32,
    pub return_winners: u32,
    pub net_points_won: u32,
    pub break_points_won: u32,
    pub break_points_total: u32,

    /// First-serve percentage, 0-100
    pub first_serve_pct: f64,

    /// Average rally length in shots
    pub rally_length_avg: f64,

    /// Rallies of 9+ shots won
    pub long_rallies_won: u32,

    /// Rallies of 9+ shots lost
    pub long_rallies_lost: u32,

    /// Subjective ratings on a fixed 0-10 scale
    pub speed_rating: u8,
    pub recovery_rating: u8,
    pub confidence_rating: u8,
    pub focus_rating: u8,
}

impl TechnicalStats {
    /// Sum of all winner categories.
    pub fn total_winners(&self) -> u32 {
        self.forehand_winners + self.backhand_winners + self.volley_winners + self.return_winners
    }

    /// Unforced errors: groundstroke errors plus double faults.
    pub fn total_errors(&self) -> u32 {
        self.forehand_errors + self.backhand_errors + self.double_faults
    }
}
