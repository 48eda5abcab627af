use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a submission. Transitions only move forward:
/// `PendingGrading -> Graded -> Released`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum SubmissionStatus {
    PendingGrading,
    Graded,
    Released,
}

impl SubmissionStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::PendingGrading => "pending_grading",
            Self::Graded => "graded",
            Self::Released => "released",
        }
    }

    pub(crate) fn can_grade(self) -> bool {
        matches!(self, Self::PendingGrading)
    }

    pub(crate) fn can_release(self) -> bool {
        matches!(self, Self::Graded)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
