use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::progress_tracker::ProgressTracker;
use super::quiz_engine::{QuizEngine, QuizError};
use crate::metrics::{
    ACHIEVEMENTS_UNLOCKED_TOTAL, ANSWERS_SUBMITTED_TOTAL, LEVEL_UPS_TOTAL, QUESTIONS_ISSUED_TOTAL,
    SESSIONS_ACTIVE, SESSIONS_TOTAL,
};
use crate::models::{
    AnswerOutcome, EndSessionResponse, GradeResult, ProgressView, Question, SessionView,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session {0} not found")]
    NotFound(Uuid),
    #[error("Session {0} has expired")]
    Expired(Uuid),
    #[error("Session {0} has no pending question")]
    NoPendingQuestion(Uuid),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// One learner's session. The tracker is owned here and never shared.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub tracker: ProgressTracker,
    pub pending_question: Option<Question>,
}

impl Session {
    fn new(now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: now,
            last_seen_at: now,
            expires_at: now + ttl,
            tracker: ProgressTracker::new(),
            pending_question: None,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    fn touch(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.last_seen_at = now;
        self.expires_at = now + ttl;
    }

    fn progress(&self) -> ProgressView {
        ProgressView::new(self.tracker.snapshot(), self.tracker.accuracy())
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session_id: self.id,
            started_at: self.started_at,
            expires_at: self.expires_at,
            has_pending_question: self.pending_question.is_some(),
            progress: self.progress(),
        }
    }
}

#[derive(Debug)]
pub struct Submission {
    pub grade: GradeResult,
    pub outcome: AnswerOutcome,
    pub session: SessionView,
}

/// In-memory registry of live sessions with an idle TTL.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    pub async fn create(&self) -> SessionView {
        let session = Session::new(Utc::now(), self.ttl);
        let view = session.view();

        self.sessions.write().await.insert(session.id, session);

        SESSIONS_TOTAL.with_label_values(&["created"]).inc();
        SESSIONS_ACTIVE.inc();
        tracing::info!("Session created: {}", view.session_id);

        view
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionView, SessionError> {
        self.with_session(id, |session| Ok(session.view())).await
    }

    /// Picks a question and remembers it as the one the next answer is graded against.
    pub async fn issue_question(
        &self,
        id: Uuid,
        engine: &QuizEngine,
    ) -> Result<Question, SessionError> {
        let question = self
            .with_session(id, |session| {
                let question = engine.pick_question()?.clone();
                if session.pending_question.is_some() {
                    tracing::debug!("Session {} replaced an unanswered question", id);
                }
                session.pending_question = Some(question.clone());
                Ok(question)
            })
            .await?;

        QUESTIONS_ISSUED_TOTAL.inc();
        Ok(question)
    }

    pub async fn submit_answer(
        &self,
        id: Uuid,
        engine: &QuizEngine,
        answer: &str,
    ) -> Result<Submission, SessionError> {
        let submission = self
            .with_session(id, |session| {
                let question = session
                    .pending_question
                    .take()
                    .ok_or(SessionError::NoPendingQuestion(id))?;

                let grade = engine.grade(&question, answer);
                let outcome = session.tracker.record_answer(grade.is_correct);

                Ok(Submission {
                    grade,
                    outcome,
                    session: session.view(),
                })
            })
            .await?;

        let correct_label = if submission.grade.is_correct {
            "true"
        } else {
            "false"
        };
        ANSWERS_SUBMITTED_TOTAL
            .with_label_values(&[correct_label])
            .inc();
        if submission.outcome.level_up.is_some() {
            LEVEL_UPS_TOTAL.inc();
        }
        for achievement in &submission.outcome.achievements_unlocked {
            ACHIEVEMENTS_UNLOCKED_TOTAL
                .with_label_values(&[achievement.as_str()])
                .inc();
        }

        tracing::info!(
            "Answer graded: session={}, correct={}, xp={}, streak={}",
            id,
            submission.grade.is_correct,
            submission.session.progress.xp,
            submission.session.progress.streak
        );

        Ok(submission)
    }

    pub async fn end(&self, id: Uuid) -> Result<EndSessionResponse, SessionError> {
        let session = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;

        SESSIONS_TOTAL.with_label_values(&["ended"]).inc();
        SESSIONS_ACTIVE.dec();
        tracing::info!("Session ended: {}", id);

        Ok(EndSessionResponse {
            session_id: id,
            ended_at: Utc::now(),
            progress: session.progress(),
        })
    }

    /// Drops every session idle past its TTL. Returns how many were removed.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now));
        let purged = before - sessions.len();

        if purged > 0 {
            SESSIONS_TOTAL
                .with_label_values(&["expired"])
                .inc_by(purged as u64);
            SESSIONS_ACTIVE.sub(purged as i64);
            tracing::info!("Purged {} expired sessions", purged);
        }
        purged
    }

    /// Runs `f` on a live session under the write lock and refreshes its TTL.
    /// An expired session is removed and reported as `Expired`.
    async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let expired = sessions
            .get(&id)
            .ok_or(SessionError::NotFound(id))?
            .is_expired(now);
        if expired {
            sessions.remove(&id);
            SESSIONS_TOTAL.with_label_values(&["expired"]).inc();
            SESSIONS_ACTIVE.dec();
            tracing::warn!("Session {} expired", id);
            return Err(SessionError::Expired(id));
        }

        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        session.touch(now, self.ttl);
        f(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AchievementId;

    fn single_question_engine() -> QuizEngine {
        QuizEngine::new(vec![Question::new("What is the slope of y = 3x + 2?", "3")]).unwrap()
    }

    fn store() -> SessionStore {
        SessionStore::new(Duration::seconds(3600))
    }

    #[tokio::test]
    async fn test_create_starts_with_fresh_progress() {
        let store = store();
        let view = store.create().await;

        assert_eq!(view.progress.xp, 0);
        assert_eq!(view.progress.level, 1);
        assert_eq!(view.progress.accuracy, 0.0);
        assert!(!view.has_pending_question);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = store();
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, SessionError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_answer_without_question_is_rejected() {
        let store = store();
        let engine = single_question_engine();
        let id = store.create().await.session_id;

        let err = store.submit_answer(id, &engine, "3").await.unwrap_err();
        assert!(matches!(err, SessionError::NoPendingQuestion(_)));
        assert_eq!(store.get(id).await.unwrap().progress.answered, 0);
    }

    #[tokio::test]
    async fn test_question_round_trip_updates_progress() {
        let store = store();
        let engine = single_question_engine();
        let id = store.create().await.session_id;

        let question = store.issue_question(id, &engine).await.unwrap();
        assert_eq!(question.answer, "3");
        assert!(store.get(id).await.unwrap().has_pending_question);

        let submission = store.submit_answer(id, &engine, " 3 ").await.unwrap();
        assert!(submission.grade.is_correct);
        assert_eq!(
            submission.outcome.achievements_unlocked,
            vec![AchievementId::FirstCorrect]
        );
        assert_eq!(submission.session.progress.xp, 10);
        assert!(!submission.session.has_pending_question);

        // The pending question is consumed by grading
        let err = store.submit_answer(id, &engine, "3").await.unwrap_err();
        assert!(matches!(err, SessionError::NoPendingQuestion(_)));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = store();
        let engine = single_question_engine();
        let a = store.create().await.session_id;
        let b = store.create().await.session_id;

        for _ in 0..3 {
            store.issue_question(a, &engine).await.unwrap();
            store.submit_answer(a, &engine, "3").await.unwrap();
        }
        store.issue_question(b, &engine).await.unwrap();
        store.submit_answer(b, &engine, "wrong").await.unwrap();

        let a_view = store.get(a).await.unwrap();
        let b_view = store.get(b).await.unwrap();
        assert_eq!(a_view.progress.xp, 30);
        assert_eq!(a_view.progress.streak, 3);
        assert_eq!(b_view.progress.xp, 0);
        assert_eq!(b_view.progress.answered, 1);
        assert!(b_view.progress.achievements.is_empty());
    }

    #[tokio::test]
    async fn test_end_returns_final_progress_and_removes_session() {
        let store = store();
        let engine = single_question_engine();
        let id = store.create().await.session_id;
        store.issue_question(id, &engine).await.unwrap();
        store.submit_answer(id, &engine, "3").await.unwrap();

        let ended = store.end(id).await.unwrap();
        assert_eq!(ended.progress.correct, 1);
        assert!(store.is_empty().await);
        assert!(matches!(
            store.end(id).await.unwrap_err(),
            SessionError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected_and_dropped() {
        let store = SessionStore::new(Duration::zero());
        let id = store.create().await.session_id;

        let err = store.get(id).await.unwrap_err();
        assert!(matches!(err, SessionError::Expired(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_purge_expired_only_drops_idle_sessions() {
        let store = store();
        store.create().await;
        store.create().await;

        assert_eq!(store.purge_expired(Utc::now()).await, 0);
        assert_eq!(
            store
                .purge_expired(Utc::now() + Duration::seconds(3601))
                .await,
            2
        );
        assert!(store.is_empty().await);
    }
}
