use thiserror::Error;

use crate::models::{AchievementId, AnswerOutcome, LevelUpEvent, ProgressState};

pub const XP_PER_CORRECT_ANSWER: u64 = 10;
pub const XP_PER_LEVEL: u64 = 100;
pub const MAX_LEVEL: u8 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// `min(MAX_LEVEL, xp / XP_PER_LEVEL + 1)`
pub fn level_for_xp(xp: u64) -> u8 {
    let level = xp / XP_PER_LEVEL + 1;
    level.min(MAX_LEVEL as u64) as u8
}

/// Owns one session's progress and enforces the XP/level/streak/achievement rules.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    state: ProgressState,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            state: ProgressState::default(),
        }
    }

    pub fn award_xp(&mut self, points: u64) -> Result<Option<LevelUpEvent>, TrackerError> {
        if points == 0 {
            return Err(TrackerError::InvalidArgument("xp award must be positive"));
        }
        Ok(self.add_xp(points))
    }

    fn add_xp(&mut self, points: u64) -> Option<LevelUpEvent> {
        let old_level = self.state.level;
        self.state.xp = self.state.xp.saturating_add(points);
        self.state.level = level_for_xp(self.state.xp);

        if self.state.level > old_level {
            tracing::debug!(
                "Level up: {} -> {} (xp={})",
                old_level,
                self.state.level,
                self.state.xp
            );
            Some(LevelUpEvent {
                level: self.state.level,
            })
        } else {
            None
        }
    }

    pub fn record_answer(&mut self, is_correct: bool) -> AnswerOutcome {
        self.state.answered += 1;

        if !is_correct {
            self.state.streak = 0;
            return AnswerOutcome::default();
        }

        let level_up = self.add_xp(XP_PER_CORRECT_ANSWER);
        self.state.correct += 1;
        self.state.streak += 1;
        self.state.best_streak = self.state.best_streak.max(self.state.streak);

        let mut achievements_unlocked = Vec::new();
        if self.state.correct == 1 && self.unlock(AchievementId::FirstCorrect) {
            achievements_unlocked.push(AchievementId::FirstCorrect);
        }

        AnswerOutcome {
            xp_awarded: XP_PER_CORRECT_ANSWER,
            level_up,
            achievements_unlocked,
        }
    }

    /// Share of graded answers that were correct; 0 before anything was answered.
    pub fn accuracy(&self) -> f64 {
        self.state.correct as f64 / self.state.answered.max(1) as f64
    }

    pub fn snapshot(&self) -> ProgressState {
        self.state.clone()
    }

    fn unlock(&mut self, achievement: AchievementId) -> bool {
        if self.state.achievements.contains(&achievement) {
            return false;
        }
        tracing::debug!("Achievement unlocked: {}", achievement.as_str());
        self.state.achievements.push(achievement);
        true
    }
}
