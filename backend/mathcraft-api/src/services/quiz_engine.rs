use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::models::{GradeResult, Question};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyQuestionBank,
}

/// The illustrative bank used when configuration does not override it.
pub fn builtin_questions() -> Vec<Question> {
    vec![
        Question::new("What is the slope of y = 3x + 2?", "3"),
        Question::new("What is the y-intercept of y = -2x + 5?", "5"),
        Question::new("Which slope makes a line parallel to y = 4x + 1?", "4"),
        Question::new(
            "If two lines are perpendicular, what is true about their slopes?",
            "Their product is -1",
        ),
    ]
}

/// Holds the immutable question bank and grades submissions against it.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionBank);
        }
        Ok(Self { questions })
    }

    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn pick_question(&self) -> Result<&Question, QuizError> {
        self.pick_question_with(&mut rand::rng())
    }

    /// Uniform draw with a caller-supplied RNG. Repeats are allowed.
    pub fn pick_question_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Question, QuizError> {
        self.questions
            .choose(rng)
            .ok_or(QuizError::EmptyQuestionBank)
    }

    /// Exact, case-sensitive match after trimming the submission.
    pub fn grade(&self, question: &Question, submitted: &str) -> GradeResult {
        GradeResult {
            is_correct: submitted.trim() == question.answer,
            expected: question.answer.clone(),
        }
    }
}
