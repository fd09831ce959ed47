use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, Pagination, PaginationMeta};
use crate::calculate::{
    break_point_conversion, category_scores, matches_for_player, winner_error_ratio,
    CategoryScores,
};
use crate::models::{MatchId, MatchRecord, ParticipantId, PlayerId};
use crate::storage::read_matches;

#[derive(Debug, Deserialize)]
pub struct MatchListParams {
    /// Restrict to matches this player appears in
    pub player: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchRecord>,
    pub pagination: PaginationMeta,
}

pub async fn list_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchListParams>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let corpus = read_matches(&state.storage)?;

    let selected: Vec<MatchRecord> = match params.player {
        Some(id) => matches_for_player(PlayerId(id), &corpus)
            .into_iter()
            .cloned()
            .collect(),
        None => corpus,
    };

    let pagination = Pagination::new(params.page, params.page_size);
    let meta = PaginationMeta::new(&pagination, selected.len() as u32);

    Ok(Json(MatchListResponse {
        matches: pagination.slice(selected),
        pagination: meta,
    }))
}

/// Per-participant technical breakdown for a single match.
#[derive(Debug, Serialize)]
pub struct ParticipantTechnical {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub player_id: Option<PlayerId>,
    pub winner_error_ratio: f64,
    pub break_point_conversion: f64,
    pub scores: CategoryScores,
}

#[derive(Debug, Serialize)]
pub struct MatchTechnicalResponse {
    pub match_id: MatchId,
    pub participants: Vec<ParticipantTechnical>,
}

pub async fn match_technical(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchTechnicalResponse>, ApiError> {
    let corpus = read_matches(&state.storage)?;

    let record = corpus
        .iter()
        .find(|m| m.id.as_str() == id)
        .ok_or_else(|| ApiError::NotFound(format!("Match {} not found", id)))?;

    let participants = record
        .participants
        .iter()
        .filter_map(|p| {
            let ts = p.stats.as_ref()?;
            Some(ParticipantTechnical {
                participant_id: p.id.clone(),
                display_name: p.display_name.clone(),
                player_id: p.player_id,
                winner_error_ratio: winner_error_ratio(ts),
                break_point_conversion: break_point_conversion(ts),
                scores: category_scores(ts),
            })
        })
        .collect();

    Ok(Json(MatchTechnicalResponse {
        match_id: record.id.clone(),
        participants,
    }))
}
