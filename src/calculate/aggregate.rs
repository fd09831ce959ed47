//! Per-player aggregation.
//!
//! Folds the match corpus into an `AggregatedPlayerStats` in a single pass.
//! The subject player is an explicit parameter; a match contributes only
//! when that player is linked to a participant on the tracked side.

use crate::models::{AggregatedPlayerStats, MatchRecord, PlayerId, TechnicalStats, WinLossRecord};

use super::technical::average_technical;

/// Aggregate totals, win rate, surface/format breakdowns, and technical
/// averages for one player.
///
/// Matches where the player is absent, unlinked, or on the untracked side
/// are ignored. An empty contribution set yields the all-zero aggregate.
pub fn aggregate_player_stats(player: PlayerId, matches: &[MatchRecord]) -> AggregatedPlayerStats {
    let mut stats = AggregatedPlayerStats::empty(player);
    let mut overall = WinLossRecord::default();
    let mut snapshots: Vec<TechnicalStats> = Vec::new();

    for record in matches {
        let participant = match record.participant_for(player) {
            Some(p) if p.tracked => p,
            _ => continue,
        };

        overall.add(record.result);
        stats.by_surface.entry(record.surface).or_default().add(record.result);
        stats.by_format.entry(record.format).or_default().add(record.result);

        if let Some(ts) = &participant.stats {
            snapshots.push(ts.clone());
        }
    }

    stats.total_matches = overall.total;
    stats.wins = overall.wins;
    stats.losses = overall.losses;
    stats.win_rate = overall.win_rate;
    stats.technical = average_technical(&snapshots);
    stats
}

/// Matches in which the player appears as a linked participant, in corpus
/// order.
pub fn matches_for_player<'a>(player: PlayerId, matches: &'a [MatchRecord]) -> Vec<&'a MatchRecord> {
    matches
        .iter()
        .filter(|m| m.participant_for(player).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        MatchFormat, MatchOutcome, MatchParticipant, MatchRecord, Side, Surface,
    };
    use chrono::NaiveDate;

    fn make_match(
        surface: Surface,
        format: MatchFormat,
        result: Option<MatchOutcome>,
        subject: PlayerId,
        opponent: PlayerId,
    ) -> MatchRecord {
        let mut record = MatchRecord::new(NaiveDate::from_ymd_opt(2026, 3, 1), surface, format);
        if let Some(r) = result {
            record = record.with_result(r);
        }
        let a = MatchParticipant::new(&record.id, Side::A, format!("player-{}", subject))
            .tracked()
            .with_player(subject);
        let b = MatchParticipant::new(&record.id, Side::B, format!("player-{}", opponent))
            .with_player(opponent);
        record.with_participants(vec![a, b])
    }

    const SUBJECT: PlayerId = PlayerId(1);
    const OPPONENT: PlayerId = PlayerId(2);

    #[test]
    fn test_aggregate_empty_corpus() {
        let stats = aggregate_player_stats(SUBJECT, &[]);
        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert!(stats.by_surface.is_empty());
        assert!(stats.by_format.is_empty());
    }

    #[test]
    fn test_aggregate_buckets_by_surface_and_format() {
        let matches = vec![
            make_match(
                Surface::Hard,
                MatchFormat::Singles,
                Some(MatchOutcome::Win),
                SUBJECT,
                OPPONENT,
            ),
            make_match(
                Surface::Hard,
                MatchFormat::Singles,
                Some(MatchOutcome::Loss),
                SUBJECT,
                OPPONENT,
            ),
            make_match(
                Surface::Clay,
                MatchFormat::Doubles,
                Some(MatchOutcome::Win),
                SUBJECT,
                OPPONENT,
            ),
        ];

        let stats = aggregate_player_stats(SUBJECT, &matches);
        assert_eq!(stats.total_matches, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);

        let hard = &stats.by_surface[&Surface::Hard];
        assert_eq!(hard.wins, 1);
        assert_eq!(hard.losses, 1);
        assert_eq!(hard.total, 2);
        assert_eq!(hard.win_rate, 50.0);

        let clay = &stats.by_surface[&Surface::Clay];
        assert_eq!(clay.total, 1);
        assert_eq!(clay.win_rate, 100.0);

        assert_eq!(stats.by_format[&MatchFormat::Singles].total, 2);
        assert_eq!(stats.by_format[&MatchFormat::Doubles].total, 1);
    }

    #[test]
    fn test_aggregate_absent_surfaces_have_no_keys() {
        let matches = vec![make_match(
            Surface::Grass,
            MatchFormat::Singles,
            Some(MatchOutcome::Win),
            SUBJECT,
            OPPONENT,
        )];
        let stats = aggregate_player_stats(SUBJECT, &matches);
        assert_eq!(stats.by_surface.len(), 1);
        assert!(!stats.by_surface.contains_key(&Surface::Hard));
    }

    #[test]
    fn test_aggregate_missing_result_counts_total_only() {
        let matches = vec![
            make_match(
                Surface::Hard,
                MatchFormat::Singles,
                Some(MatchOutcome::Win),
                SUBJECT,
                OPPONENT,
            ),
            make_match(Surface::Hard, MatchFormat::Singles, None, SUBJECT, OPPONENT),
            make_match(
                Surface::Hard,
                MatchFormat::Singles,
                Some(MatchOutcome::Unrecognized),
                SUBJECT,
                OPPONENT,
            ),
        ];
        let stats = aggregate_player_stats(SUBJECT, &matches);
        assert_eq!(stats.total_matches, 3);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 0);
        assert!(stats.wins + stats.losses <= stats.total_matches);

        let hard = &stats.by_surface[&Surface::Hard];
        assert!(hard.wins + hard.losses <= hard.total);
    }

    #[test]
    fn test_aggregate_unknown_surface_bucket() {
        let matches = vec![make_match(
            Surface::Unknown,
            MatchFormat::Singles,
            Some(MatchOutcome::Win),
            SUBJECT,
            OPPONENT,
        )];
        let stats = aggregate_player_stats(SUBJECT, &matches);
        assert_eq!(stats.by_surface[&Surface::Unknown].wins, 1);
    }

    #[test]
    fn test_aggregate_ignores_untracked_participation() {
        // Subject appears on the untracked side; the result belongs to the
        // other player's perspective and must not count here.
        let matches = vec![make_match(
            Surface::Hard,
            MatchFormat::Singles,
            Some(MatchOutcome::Win),
            OPPONENT,
            SUBJECT,
        )];
        let stats = aggregate_player_stats(SUBJECT, &matches);
        assert_eq!(stats.total_matches, 0);
    }

    #[test]
    fn test_aggregate_win_rate_range() {
        let matches: Vec<MatchRecord> = (0..5)
            .map(|i| {
                let result = if i < 3 {
                    MatchOutcome::Win
                } else {
                    MatchOutcome::Loss
                };
                make_match(
                    Surface::Hard,
                    MatchFormat::Singles,
                    Some(result),
                    SUBJECT,
                    OPPONENT,
                )
            })
            .collect();
        let stats = aggregate_player_stats(SUBJECT, &matches);
        assert_eq!(stats.win_rate, 60.0);
        assert!((0.0..=100.0).contains(&stats.win_rate));
    }

    #[test]
    fn test_aggregate_collects_technical_snapshots() {
        let mut record = make_match(
            Surface::Hard,
            MatchFormat::Singles,
            Some(MatchOutcome::Win),
            SUBJECT,
            OPPONENT,
        );
        record.participants[0].stats = Some(crate::models::TechnicalStats {
            aces: 6,
            ..Default::default()
        });
        let no_snapshot = make_match(
            Surface::Hard,
            MatchFormat::Singles,
            Some(MatchOutcome::Loss),
            SUBJECT,
            OPPONENT,
        );

        let stats = aggregate_player_stats(SUBJECT, &[record, no_snapshot]);
        // Only the match with a snapshot contributes to averages
        assert_eq!(stats.technical.matches_with_data, 1);
        assert_eq!(stats.technical.aces, 6.0);
    }

    #[test]
    fn test_matches_for_player_either_side() {
        let matches = vec![
            make_match(
                Surface::Hard,
                MatchFormat::Singles,
                Some(MatchOutcome::Win),
                SUBJECT,
                OPPONENT,
            ),
            make_match(
                Surface::Clay,
                MatchFormat::Singles,
                Some(MatchOutcome::Win),
                OPPONENT,
                SUBJECT,
            ),
            make_match(
                Surface::Clay,
                MatchFormat::Singles,
                Some(MatchOutcome::Win),
                OPPONENT,
                PlayerId(9),
            ),
        ];
        assert_eq!(matches_for_player(SUBJECT, &matches).len(), 2);
    }
}
