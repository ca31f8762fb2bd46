//! ViewState enum for the survey session flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Which view of the survey a session is currently showing.
///
/// Valid transitions:
/// - Landing -> Assessment (start assessment)
/// - Assessment -> Landing (back, answers preserved)
/// - Assessment -> Submitted (submit, only when answers are valid)
///
/// Submitted is terminal; the only way out is a full session reset, which
/// re-initializes the state rather than transitioning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    Landing,
    Assessment,
    Submitted,
}

impl StateMachine for ViewState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewState::*;
        matches!(
            (self, target),
            (Landing, Assessment) | (Assessment, Landing) | (Assessment, Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewState::*;
        match self {
            Landing => vec![Assessment],
            Assessment => vec![Landing, Submitted],
            Submitted => vec![],
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewState::Landing => "Landing",
            ViewState::Assessment => "Assessment",
            ViewState::Submitted => "Submitted",
        };
        write!(f, "{}", s)
    }
}
