use serde::{Deserialize, Serialize};

use super::progress::{AnswerOutcome, ProgressView};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeResult {
    pub is_correct: bool,
    pub expected: String,
}

/// What the client sees when a question is issued. The answer stays server-side.
#[derive(Debug, Serialize)]
pub struct IssuedQuestionResponse {
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub expected: String,
    pub outcome: AnswerOutcome,
    pub progress: ProgressView,
    pub feedback: String,
}
