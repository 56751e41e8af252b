use serde::Serialize;

/// Session-scoped gamification counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressState {
    pub xp: u64,
    pub level: u8,
    pub correct: u32,
    pub answered: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Unlock order is preserved.
    pub achievements: Vec<AchievementId>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            correct: 0,
            answered: 0,
            streak: 0,
            best_streak: 0,
            achievements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstCorrect,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstCorrect => "first_correct",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AchievementId::FirstCorrect => "First Steps",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AchievementId::FirstCorrect => "Answered your first question correctly!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelUpEvent {
    pub level: u8,
}

/// Everything a single `record_answer` call produced, for the caller to display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnswerOutcome {
    pub xp_awarded: u64,
    pub level_up: Option<LevelUpEvent>,
    pub achievements_unlocked: Vec<AchievementId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementInfo {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<AchievementId> for AchievementInfo {
    fn from(id: AchievementId) -> Self {
        Self {
            id,
            title: id.title(),
            description: id.description(),
        }
    }
}

/// Snapshot enriched with derived values for display.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressView {
    pub xp: u64,
    pub level: u8,
    pub correct: u32,
    pub answered: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub accuracy: f64,
    pub achievements: Vec<AchievementInfo>,
}

impl ProgressView {
    pub fn new(state: ProgressState, accuracy: f64) -> Self {
        Self {
            xp: state.xp,
            level: state.level,
            correct: state.correct,
            answered: state.answered,
            streak: state.streak,
            best_streak: state.best_streak,
            accuracy,
            achievements: state.achievements.into_iter().map(Into::into).collect(),
        }
    }
}
