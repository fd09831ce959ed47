//! Match record model.
//!
//! A match is the unit of raw input: surface, format, the final result for
//! the tracked side, and the ordered participants with their optional
//! per-match technical snapshots.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{EntityId, MatchId, ParticipantId, PlayerId, TechnicalStats};

/// Court surface. Unexpected or missing values fall into `Unknown` so the
/// aggregator can bucket them under the literal key `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Surface {
    #[serde(alias = "hard")]
    Hard,
    #[serde(alias = "clay")]
    Clay,
    #[serde(alias = "grass")]
    Grass,
    #[serde(alias = "carpet")]
    Carpet,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Surface::Hard => "Hard",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
            Surface::Carpet => "Carpet",
            Surface::Unknown => "Unknown",
        };
        write!(f, "{}", name)
    }
}

/// Match format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchFormat {
    #[serde(alias = "singles")]
    Singles,
    #[serde(alias = "doubles")]
    Doubles,
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchFormat::Singles => "Singles",
            MatchFormat::Doubles => "Doubles",
        };
        write!(f, "{}", name)
    }
}

/// Final result recorded for the tracked side of a match.
///
/// Anything other than "win" or "loss" deserializes as `Unrecognized` and is
/// excluded from win/loss tallies while still counting toward totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Win,
    Loss,
    #[serde(other)]
    Unrecognized,
}

/// Side of the net a participant is recorded on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// One player (or partner) appearing in a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchParticipant {
    /// Unique identifier within the corpus
    pub id: ParticipantId,

    /// Side of the net
    pub side: Side,

    /// True if this participant belongs to the side the match result is
    /// recorded for (the subject player or their partner)
    pub tracked: bool,

    /// Display name as entered at match time
    pub display_name: String,

    /// Link to the player directory, when resolved
    pub player_id: Option<PlayerId>,

    /// Per-match technical snapshot, when one was recorded
    pub stats: Option<TechnicalStats>,
}

impl MatchParticipant {
    /// Create a new participant with auto-generated ID.
    pub fn new(match_id: &MatchId, side: Side, display_name: String) -> Self {
        let side_str = match side {
            Side::A => "A",
            Side::B => "B",
        };
        let id = EntityId::generate(&[match_id.as_str(), side_str, &display_name]);

        Self {
            id,
            side,
            tracked: false,
            display_name,
            player_id: None,
            stats: None,
        }
    }

    /// Builder method to mark this participant as being on the tracked side.
    pub fn tracked(mut self) -> Self {
        self.tracked = true;
        self
    }

    /// Builder method to link the player directory entry.
    pub fn with_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    /// Builder method to attach a technical snapshot.
    pub fn with_stats(mut self, stats: TechnicalStats) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// A recorded match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier (derived from date + surface + format)
    pub id: MatchId,

    /// Date the match was played, when known
    pub date: Option<NaiveDate>,

    /// Court surface
    pub surface: Surface,

    /// Singles or doubles
    pub format: MatchFormat,

    /// Final result for the tracked side
    pub result: Option<MatchOutcome>,

    /// Free-text score line (e.g., "6-4 3-6 7-5")
    pub score: Option<String>,

    /// Participants, in recorded order
    pub participants: Vec<MatchParticipant>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    /// Create a new MatchRecord with auto-generated ID.
    pub fn new(date: Option<NaiveDate>, surface: Surface, format: MatchFormat) -> Self {
        let date_str = date.map(|d| d.to_string()).unwrap_or_default();
        let id = EntityId::generate(&[&date_str, &surface.to_string(), &format.to_string()]);

        Self {
            id,
            date,
            surface,
            format,
            result: None,
            score: None,
            participants: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Builder method to set the tracked-side result.
    pub fn with_result(mut self, result: MatchOutcome) -> Self {
        self.result = Some(result);
        self
    }

    /// Builder method to set the score line.
    pub fn with_score(mut self, score: String) -> Self {
        self.score = Some(score);
        self
    }

    /// Add participants and regenerate the ID to include their names.
    pub fn with_participants(mut self, participants: Vec<MatchParticipant>) -> Self {
        let date_str = self.date.map(|d| d.to_string()).unwrap_or_default();
        let names: Vec<&str> = participants
            .iter()
            .map(|p| p.display_name.as_str())
            .collect();
        let mut fields: Vec<&str> = vec![&date_str];
        let surface = self.surface.to_string();
        let format = self.format.to_string();
        fields.push(&surface);
        fields.push(&format);
        fields.extend(names);
        self.id = EntityId::generate(&fields);
        self.participants = participants;
        self
    }

    /// The side the result is recorded for, from the first tracked
    /// participant. `None` when no participant is tracked.
    pub fn tracked_side(&self) -> Option<Side> {
        self.participants.iter().find(|p| p.tracked).map(|p| p.side)
    }

    /// Which side won, resolved from the tracked side and the recorded
    /// result. `None` for missing or unrecognized results.
    pub fn winner_side(&self) -> Option<Side> {
        let tracked = self.tracked_side()?;
        match self.result? {
            MatchOutcome::Win => Some(tracked),
            MatchOutcome::Loss => Some(tracked.opposite()),
            MatchOutcome::Unrecognized => None,
        }
    }

    /// Find the participant linked to the given player.
    pub fn participant_for(&self, player: PlayerId) -> Option<&MatchParticipant> {
        self.participants
            .iter()
            .find(|p| p.player_id == Some(player))
    }
}
