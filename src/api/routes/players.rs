use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{ApiError, Pagination, PaginationMeta};
use crate::calculate::{aggregate_player_stats, rank_by_win_rate};
use crate::models::{AggregatedPlayerStats, Player, PlayerId};
use crate::storage::{read_matches, read_players};

// ── Player List ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
    pub pagination: PaginationMeta,
}

pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let players = read_players(&state.storage)?;
    let pagination = Pagination::new(params.page, params.page_size);
    let meta = PaginationMeta::new(&pagination, players.len() as u32);

    Ok(Json(PlayerListResponse {
        players: pagination.slice(players),
        pagination: meta,
    }))
}

// ── Per-Player Stats ────────────────────────────────────────────

pub async fn player_stats(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AggregatedPlayerStats>, ApiError> {
    let player_id = PlayerId(id);
    let players = read_players(&state.storage)?;
    if !players.iter().any(|p| p.id == player_id) {
        return Err(ApiError::NotFound(format!("player {}", id)));
    }

    let matches = read_matches(&state.storage)?;
    Ok(Json(aggregate_player_stats(player_id, &matches)))
}

// ── Top Players ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TopParams {
    pub min_matches: Option<u32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TopPlayerEntry {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub total_matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct TopPlayersResponse {
    pub min_matches: u32,
    pub players: Vec<TopPlayerEntry>,
}

const DEFAULT_MIN_MATCHES: u32 = 3;
const DEFAULT_TOP_LIMIT: usize = 10;

pub async fn top_players(
    State(state): State<AppState>,
    Query(params): Query<TopParams>,
) -> Result<Json<TopPlayersResponse>, ApiError> {
    let min_matches = params.min_matches.unwrap_or(DEFAULT_MIN_MATCHES).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LIMIT);

    let players = read_players(&state.storage)?;
    let matches = read_matches(&state.storage)?;

    let aggregates: Vec<AggregatedPlayerStats> = players
        .iter()
        .map(|p| aggregate_player_stats(p.id, &matches))
        .collect();

    let entries = rank_by_win_rate(&aggregates, min_matches, limit)
        .into_iter()
        .map(|stats| TopPlayerEntry {
            player_id: stats.player_id,
            name: players
                .iter()
                .find(|p| p.id == stats.player_id)
                .map(|p| p.name.clone()),
            total_matches: stats.total_matches,
            wins: stats.wins,
            losses: stats.losses,
            win_rate: stats.win_rate,
        })
        .collect();

    Ok(Json(TopPlayersResponse {
        min_matches,
        players: entries,
    }))
}
