use std::fmt::{self, Display};

use crate::{SessionLog, WorkoutDay};

/// External coaching collaborator that turns a finished session into
/// free-text feedback.
pub trait Coach {
    /// Never fails: any problem with the external service is folded into
    /// [`Feedback::Unavailable`] so the session-finish flow cannot be
    /// broken by the feedback path.
    fn analyze(&self, session_log: &SessionLog, reference: &WorkoutDay) -> Feedback;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Coached(String),
    Unavailable(FallbackReason),
}

impl Feedback {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Feedback::Coached(text) => text,
            Feedback::Unavailable(reason) => reason.message(),
        }
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    Unreachable,
}

impl FallbackReason {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            FallbackReason::NotConfigured => {
                "API Key is missing. Please configure your environment variables."
            }
            FallbackReason::Unreachable => {
                "Sorry, I couldn't connect to the AI coach right now. Check your connection."
            }
        }
    }
}
