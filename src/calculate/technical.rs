//! Technical-stats averaging and derived composite metrics.
//!
//! Averages run over matches that actually carry a snapshot; matches
//! without one are skipped, never zero-filled. Every ratio has an explicit
//! zero-denominator branch so no input can produce NaN or infinity.
//!
//! The linear multipliers below reproduce the scoring model the tracker has
//! always used. Their calibration is not derived from anything measurable;
//! treat them as tunable constants.

use serde::{Deserialize, Serialize};

use crate::models::{TechnicalAverages, TechnicalStats};

/// Nominal net-approach opportunities per match, used to normalize net
/// points won into a 0-100 rate.
pub const NET_OPPORTUNITIES_PER_MATCH: f64 = 20.0;

const FIRST_SERVE_WEIGHT: f64 = 0.5;
const ACE_WEIGHT: f64 = 5.0;
const DOUBLE_FAULT_PENALTY: f64 = 2.0;
const WINNER_WEIGHT: f64 = 5.0;
const ERROR_PENALTY: f64 = 2.0;
const NET_POINT_WEIGHT: f64 = 5.0;
const RETURN_WINNER_WEIGHT: f64 = 10.0;
const BREAK_CONVERSION_WEIGHT: f64 = 0.5;
const RATING_WEIGHT: f64 = 5.0;
const LONG_RALLY_WEIGHT: f64 = 3.0;

/// Bounded 0-100 scores for the six performance categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub serve: f64,
    pub groundstrokes: f64,
    pub net: f64,
    #[serde(rename = "return")]
    pub return_game: f64,
    pub physical: f64,
    pub mental: f64,
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Average technical stats across the snapshots of matches that have one.
///
/// Zero snapshots yields all-zero averages, never a divide-by-zero.
pub fn average_technical(snapshots: &[TechnicalStats]) -> TechnicalAverages {
    if snapshots.is_empty() {
        return TechnicalAverages::default();
    }

    let count = snapshots.len() as f64;
    let mut sums = TechnicalAverages {
        matches_with_data: snapshots.len() as u32,
        ..Default::default()
    };

    for ts in snapshots {
        sums.first_serve_pct += ts.first_serve_pct;
        sums.aces += ts.aces as f64;
        sums.double_faults += ts.double_faults as f64;
        sums.winners_per_match += ts.total_winners() as f64;
        sums.unforced_errors_per_match += ts.total_errors() as f64;
        sums.net_success_rate += ts.net_points_won as f64;
    }

    sums.first_serve_pct /= count;
    sums.aces /= count;
    sums.double_faults /= count;
    sums.winners_per_match /= count;
    sums.unforced_errors_per_match /= count;

    let avg_net_points = sums.net_success_rate / count;
    sums.net_success_rate =
        clamp_score(avg_net_points / NET_OPPORTUNITIES_PER_MATCH * 100.0);

    sums
}

/// Winners divided by unforced errors for a single match.
///
/// With zero errors the winner count itself is returned, keeping a
/// meaningful non-zero signal instead of infinity.
pub fn winner_error_ratio(ts: &TechnicalStats) -> f64 {
    let winners = ts.total_winners() as f64;
    let errors = ts.total_errors() as f64;
    if errors > 0.0 {
        winners / errors
    } else {
        winners
    }
}

/// Break points converted as a rounded 0-100 percentage; 0 when no break
/// points were played.
pub fn break_point_conversion(ts: &TechnicalStats) -> f64 {
    if ts.break_points_total > 0 {
        (ts.break_points_won as f64 / ts.break_points_total as f64 * 100.0).round()
    } else {
        0.0
    }
}

/// Six bounded performance-category scores for a single match.
///
/// Each score is a linear transform of the underlying counts/ratings and is
/// clamped to [0, 100]; ratings alone can push a category past 100.
pub fn category_scores(ts: &TechnicalStats) -> CategoryScores {
    let serve = ts.first_serve_pct * FIRST_SERVE_WEIGHT + ts.aces as f64 * ACE_WEIGHT
        - ts.double_faults as f64 * DOUBLE_FAULT_PENALTY;

    let groundstrokes = (ts.forehand_winners + ts.backhand_winners) as f64 * WINNER_WEIGHT
        - (ts.forehand_errors + ts.backhand_errors) as f64 * ERROR_PENALTY;

    let net = (ts.net_points_won + ts.volley_winners) as f64 * NET_POINT_WEIGHT;

    let return_game = ts.return_winners as f64 * RETURN_WINNER_WEIGHT
        + break_point_conversion(ts) * BREAK_CONVERSION_WEIGHT;

    let rally_margin = ts.long_rallies_won as f64 - ts.long_rallies_lost as f64;
    let physical = (ts.speed_rating + ts.recovery_rating) as f64 * RATING_WEIGHT
        + rally_margin * LONG_RALLY_WEIGHT;

    let mental = (ts.confidence_rating + ts.focus_rating) as f64 * RATING_WEIGHT;

    CategoryScores {
        serve: clamp_score(serve),
        groundstrokes: clamp_score(groundstrokes),
        net: clamp_score(net),
        return_game: clamp_score(return_game),
        physical: clamp_score(physical),
        mental: clamp_score(mental),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(aces: u32, faults: u32, fsp: f64) -> TechnicalStats {
        TechnicalStats {
            aces,
            double_faults: faults,
            first_serve_pct: fsp,
            ..Default::default()
        }
    }

    #[test]
    fn test_average_empty_is_all_zero() {
        let avg = average_technical(&[]);
        assert_eq!(avg, TechnicalAverages::default());
        assert_eq!(avg.net_success_rate, 0.0);
    }

    #[test]
    fn test_average_over_two_matches() {
        let avg = average_technical(&[snapshot(4, 2, 60.0), snapshot(8, 0, 70.0)]);
        assert_eq!(avg.matches_with_data, 2);
        assert_eq!(avg.aces, 6.0);
        assert_eq!(avg.double_faults, 1.0);
        assert_eq!(avg.first_serve_pct, 65.0);
    }

    #[test]
    fn test_average_winners_and_errors() {
        let a = TechnicalStats {
            forehand_winners: 6,
            backhand_winners: 4,
            volley_winners: 2,
            return_winners: 0,
            forehand_errors: 5,
            backhand_errors: 3,
            double_faults: 2,
            ..Default::default()
        };
        let b = TechnicalStats::default();
        let avg = average_technical(&[a, b]);
        assert_eq!(avg.winners_per_match, 6.0);
        assert_eq!(avg.unforced_errors_per_match, 5.0);
    }

    #[test]
    fn test_net_success_rate_normalization() {
        let ts = TechnicalStats {
            net_points_won: 10,
            ..Default::default()
        };
        let avg = average_technical(&[ts]);
        // 10 of a nominal 20 opportunities
        assert_eq!(avg.net_success_rate, 50.0);
    }

    #[test]
    fn test_net_success_rate_clamped() {
        let ts = TechnicalStats {
            net_points_won: 50,
            ..Default::default()
        };
        let avg = average_technical(&[ts]);
        assert_eq!(avg.net_success_rate, 100.0);
    }

    #[test]
    fn test_winner_error_ratio_zero_errors() {
        let ts = TechnicalStats {
            forehand_winners: 10,
            ..Default::default()
        };
        assert_eq!(winner_error_ratio(&ts), 10.0);
    }

    #[test]
    fn test_winner_error_ratio() {
        let ts = TechnicalStats {
            forehand_winners: 10,
            forehand_errors: 5,
            ..Default::default()
        };
        assert_eq!(winner_error_ratio(&ts), 2.0);
    }

    #[test]
    fn test_break_point_conversion() {
        let ts = TechnicalStats {
            break_points_won: 3,
            break_points_total: 4,
            ..Default::default()
        };
        assert_eq!(break_point_conversion(&ts), 75.0);
    }

    #[test]
    fn test_break_point_conversion_no_break_points() {
        assert_eq!(break_point_conversion(&TechnicalStats::default()), 0.0);
    }

    #[test]
    fn test_category_scores_all_bounded() {
        let ts = TechnicalStats {
            aces: 30,
            first_serve_pct: 100.0,
            forehand_winners: 40,
            backhand_winners: 40,
            volley_winners: 20,
            return_winners: 20,
            net_points_won: 30,
            break_points_won: 10,
            break_points_total: 10,
            long_rallies_won: 20,
            speed_rating: 10,
            recovery_rating: 10,
            confidence_rating: 10,
            focus_rating: 10,
            ..Default::default()
        };
        let scores = category_scores(&ts);
        for score in [
            scores.serve,
            scores.groundstrokes,
            scores.net,
            scores.return_game,
            scores.physical,
            scores.mental,
        ] {
            assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn test_physical_score_clamps_overflow() {
        // 10*5 + 10*5 + 10*3 = 130 before clamping
        let ts = TechnicalStats {
            speed_rating: 10,
            recovery_rating: 10,
            long_rallies_won: 10,
            ..Default::default()
        };
        assert_eq!(category_scores(&ts).physical, 100.0);
    }

    #[test]
    fn test_mental_score_max_rating_in_range() {
        let ts = TechnicalStats {
            confidence_rating: 10,
            focus_rating: 10,
            ..Default::default()
        };
        assert_eq!(category_scores(&ts).mental, 100.0);
    }

    #[test]
    fn test_scores_never_negative() {
        let ts = TechnicalStats {
            double_faults: 20,
            forehand_errors: 15,
            backhand_errors: 15,
            long_rallies_lost: 10,
            ..Default::default()
        };
        let scores = category_scores(&ts);
        assert_eq!(scores.serve, 0.0);
        assert_eq!(scores.groundstrokes, 0.0);
        assert_eq!(scores.physical, 0.0);
    }
}
