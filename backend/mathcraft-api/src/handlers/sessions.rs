use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::ApiError;
use crate::{
    extractors::AppJson,
    models::quiz::{IssuedQuestionResponse, SubmitAnswerRequest, SubmitAnswerResponse},
    services::AppState,
};

fn parse_session_id(value: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value)
        .map_err(|_| ApiError::BadRequest(format!("Invalid session id: {}", value)))
}

pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(session))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&session_id)?;
    tracing::debug!("Getting session: {}", id);

    let session = state.sessions.get(id).await?;
    Ok(Json(session))
}

pub async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&session_id)?;
    let ended = state.sessions.end(id).await?;
    Ok(Json(ended))
}

pub async fn issue_question(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&session_id)?;
    let question = state.sessions.issue_question(id, &state.quiz).await?;

    Ok(Json(IssuedQuestionResponse {
        prompt: question.prompt,
    }))
}

pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    AppJson(req): AppJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_session_id(&session_id)?;
    tracing::info!("Submitting answer for session: {}", id);

    let submission = state
        .sessions
        .submit_answer(id, &state.quiz, &req.answer)
        .await?;

    let feedback = if submission.grade.is_correct {
        format!("Correct! +{} XP", submission.outcome.xp_awarded)
    } else {
        format!("Incorrect. Correct answer: {}", submission.grade.expected)
    };

    Ok(Json(SubmitAnswerResponse {
        correct: submission.grade.is_correct,
        expected: submission.grade.expected,
        outcome: submission.outcome,
        progress: submission.session.progress,
        feedback,
    }))
}
