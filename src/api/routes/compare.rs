use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{self, aggregate_player_stats, compare_players, ComparisonResult};
use crate::models::{HeadToHeadRecord, PlayerId};
use crate::storage::read_matches;

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub player1: Option<i64>,
    pub player2: Option<i64>,
}

/// Compare two players. An unselected player yields the incomplete
/// sentinel rather than an error, so the view can prompt for a selection.
pub async fn compare(
    State(state): State<AppState>,
    Query(params): Query<CompareParams>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let matches = read_matches(&state.storage)?;

    let stats1 = params
        .player1
        .map(|id| aggregate_player_stats(PlayerId(id), &matches));
    let stats2 = params
        .player2
        .map(|id| aggregate_player_stats(PlayerId(id), &matches));

    Ok(Json(compare_players(stats1.as_ref(), stats2.as_ref())))
}

#[derive(Debug, Deserialize)]
pub struct HeadToHeadParams {
    pub player1: i64,
    pub player2: i64,
}

pub async fn head_to_head(
    State(state): State<AppState>,
    Query(params): Query<HeadToHeadParams>,
) -> Result<Json<HeadToHeadRecord>, ApiError> {
    if params.player1 == params.player2 {
        return Err(ApiError::BadRequest(
            "player1 and player2 must differ".to_string(),
        ));
    }

    let matches = read_matches(&state.storage)?;
    Ok(Json(calculate::head_to_head(
        PlayerId(params.player1),
        PlayerId(params.player2),
        &matches,
    )))
}
