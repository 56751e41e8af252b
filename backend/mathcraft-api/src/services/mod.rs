use crate::config::Config;

pub mod line_lab;
pub mod progress_tracker;
pub mod quiz_engine;
pub mod real_world;
pub mod session_store;

use quiz_engine::QuizEngine;
use session_store::SessionStore;

pub struct AppState {
    pub config: Config,
    pub quiz: QuizEngine,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let quiz = match &config.questions {
            Some(questions) => {
                tracing::info!("Loading {} questions from configuration", questions.len());
                QuizEngine::new(questions.clone())?
            }
            None => QuizEngine::builtin(),
        };

        let sessions = SessionStore::new(chrono::Duration::seconds(config.session_ttl_seconds));

        tracing::info!(
            "Quiz engine ready with {} questions, session TTL {}s",
            quiz.questions().len(),
            config.session_ttl_seconds
        );

        Ok(Self {
            config,
            quiz,
            sessions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    #[test]
    fn test_builtin_bank_when_unconfigured() {
        let state = AppState::new(Config::default()).unwrap();
        assert_eq!(state.quiz.questions().len(), 4);
    }

    #[test]
    fn test_configured_bank_replaces_builtin() {
        let config = Config {
            questions: Some(vec![Question::new("What is the slope of y = 7x - 1?", "7")]),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();
        assert_eq!(state.quiz.questions().len(), 1);
    }

    #[test]
    fn test_empty_configured_bank_fails_startup() {
        let config = Config {
            questions: Some(vec![]),
            ..Config::default()
        };
        assert!(AppState::new(config).is_err());
    }
}
