use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub mod lines;
pub mod progress;
pub mod quiz;

pub use progress::{AchievementId, AnswerOutcome, LevelUpEvent, ProgressState, ProgressView};
pub use quiz::{GradeResult, Question};

/// Public view of a live session, returned by every session endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub has_pending_question: bool,
    pub progress: ProgressView,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndSessionResponse {
    pub session_id: Uuid,
    pub ended_at: DateTime<Utc>,
    pub progress: ProgressView,
}
