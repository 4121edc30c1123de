use super::SharedState;
use crate::core::{Feedback, Language};
use crate::game::{GameMode, GuessError, Round, SessionId, StartError, WordHint};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_mode")]
    pub game_mode: String,
}

fn default_language() -> String {
    Language::En.code().to_string()
}

fn default_mode() -> String {
    GameMode::Random.name().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameResponse {
    pub session_id: String,
    pub length: usize,
    pub first_letter: Option<char>,
    pub game_mode: GameMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_total: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub session_id: String,
    pub guess: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub is_valid: bool,
    pub letter_states: Feedback,
    pub is_correct: bool,
    pub round_over: bool,
    pub guess_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_word_info: Option<WordHint>,
}

#[derive(Debug)]
pub(super) struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    fn start(status: StatusCode, key: &str) -> Self {
        Self {
            status,
            body: json!({ "success": false, "error": key }),
        }
    }
}

impl From<StartError> for ApiError {
    fn from(err: StartError) -> Self {
        let status = match err {
            StartError::NoWordsAvailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StartError::FailedToStart(_) => StatusCode::BAD_REQUEST,
        };
        Self::start(status, err.key())
    }
}

impl From<GuessError> for ApiError {
    fn from(err: GuessError) -> Self {
        let status = match err {
            GuessError::Rejected(_) => StatusCode::BAD_REQUEST,
            GuessError::NoActiveRound => StatusCode::NOT_FOUND,
            GuessError::RoundOver => StatusCode::CONFLICT,
        };
        Self {
            status,
            body: json!({ "isValid": false, "message": err.key() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub(super) async fn new_game(
    State(state): State<SharedState>,
    Json(request): Json<NewGameRequest>,
) -> Result<Json<NewGameResponse>, ApiError> {
    let language: Language = request.language.parse().map_err(|err| {
        warn!("new game refused: {err}");
        StartError::FailedToStart(format!("{err}"))
    })?;
    let mode: GameMode = request.game_mode.parse().map_err(|err| {
        warn!("new game refused: {err}");
        StartError::FailedToStart(format!("{err}"))
    })?;

    let worker = Arc::clone(&state);
    let round = tokio::task::spawn_blocking(move || {
        Round::start(
            mode,
            worker.dictionaries.get(language),
            worker.config,
            worker.clock.today(),
        )
    })
    .await
    .map_err(|err| {
        error!("round creation task failed: {err}");
        StartError::FailedToStart(err.to_string())
    })??;

    let (session_id, info) = state.sessions.insert(round);
    Ok(Json(NewGameResponse {
        session_id: session_id.to_string(),
        length: info.word_length,
        first_letter: info.first_letter,
        game_mode: mode,
        set_total: info.set_total,
    }))
}

pub(super) async fn validate(
    State(state): State<SharedState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, ApiError> {
    let id = SessionId::from(request.session_id);
    let outcome = state.sessions.submit_guess(
        &id,
        &request.guess,
        &state.dictionaries,
        state.clock.today(),
    )?;

    Ok(Json(GuessResponse {
        is_valid: true,
        letter_states: outcome.letter_states,
        is_correct: outcome.is_correct,
        round_over: outcome.round_over,
        guess_count: outcome.guess_count,
        answer: outcome.revealed_answer,
        next_word_info: outcome.next_word,
    }))
}

pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
