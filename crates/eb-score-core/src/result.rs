use serde::{Deserialize, Serialize};

use crate::breakdown::ScoreBreakdown;

/// Outcome of one scoring invocation.
///
/// Failures are carried as data rather than an `Err`: the caller decides
/// whether to display the message, retry, or persist a zero score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoringResult {
    Scored { score: ScoreBreakdown, used_mock: bool },
    Failed { error: String },
}

impl ScoringResult {
    pub const fn scored(score: ScoreBreakdown) -> Self {
        Self::Scored {
            score,
            used_mock: false,
        }
    }

    pub const fn mocked(score: ScoreBreakdown) -> Self {
        Self::Scored {
            score,
            used_mock: true,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub const fn is_scored(&self) -> bool {
        matches!(self, Self::Scored { .. })
    }

    pub const fn used_mock(&self) -> bool {
        matches!(
            self,
            Self::Scored {
                used_mock: true,
                ..
            }
        )
    }

    pub const fn score(&self) -> Option<&ScoreBreakdown> {
        match self {
            Self::Scored { score, .. } => Some(score),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Scored { .. } => None,
            Self::Failed { error } => Some(error.as_str()),
        }
    }
}
