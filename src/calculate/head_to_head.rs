//! Head-to-head resolution between two players.

use crate::models::{HeadToHeadRecord, MatchRecord, PlayerId};

/// Build the head-to-head record for two players over the match corpus.
///
/// A match qualifies when both players are linked participants on opposing
/// sides. The winning side comes from the tracked-side result; matches with
/// no resolvable winner still count toward the total. Zero qualifying
/// matches is a normal terminal state, not an error.
pub fn head_to_head(
    player1: PlayerId,
    player2: PlayerId,
    matches: &[MatchRecord],
) -> HeadToHeadRecord {
    let mut record = HeadToHeadRecord::empty(player1, player2);

    for m in matches {
        let (p1, p2) = match (m.participant_for(player1), m.participant_for(player2)) {
            (Some(a), Some(b)) if a.side != b.side => (a, b),
            _ => continue,
        };

        record.total_matches += 1;
        if let Some(winner) = m.winner_side() {
            if winner == p1.side {
                record.player1_wins += 1;
            } else if winner == p2.side {
                record.player2_wins += 1;
            }
        }
        record.matches.push(m.clone());
    }

    record
}
