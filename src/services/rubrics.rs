//! Canonical rubric table, keyed by assignment type.

use std::collections::HashMap;

use thiserror::Error;

pub(crate) const CALCULUS_HOMEWORK: &str = "calculus_homework";
pub(crate) const MATH_HOMEWORK: &str = "math_homework";
pub(crate) const ESSAY: &str = "essay";

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RubricQuestion {
    pub(crate) id: &'static str,
    pub(crate) max_points: f64,
    pub(crate) description: &'static str,
    /// Canned feedback sampled uniformly. Empty means score-band feedback.
    pub(crate) feedback_pool: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rubric {
    pub(crate) assignment_type: &'static str,
    pub(crate) questions: Vec<RubricQuestion>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RubricError {
    #[error("no rubric for assignment type '{0}'")]
    UnknownAssignmentType(String),
}

pub(crate) const CALCULUS_HOMEWORK_QUESTIONS: [RubricQuestion; 5] = [
    banded("q1", 10.0, "Find the derivative of f(x) = 3x² + 2x - 1"),
    banded("q2", 15.0, "Calculate the limit as x approaches 2 of (x² - 4)/(x - 2)"),
    banded("q3", 20.0, "Find the area under the curve y = x² from x = 0 to x = 3"),
    banded("q4", 15.0, "Determine if the function f(x) = x³ - 3x + 1 has any critical points"),
    banded("q5", 10.0, "Find the second derivative of g(x) = sin(x) + cos(x)"),
];

const MATH_HOMEWORK_QUESTIONS: [RubricQuestion; 4] = [
    RubricQuestion {
        id: "q1",
        max_points: 5.0,
        description: "Solve linear equation",
        feedback_pool: &[
            "Correct method",
            "Minor algebra error",
            "Good approach, check arithmetic",
            "Missing steps",
            "Excellent work",
        ],
    },
    RubricQuestion {
        id: "q2",
        max_points: 5.0,
        description: "Graph quadratic function",
        feedback_pool: &[
            "Perfect graph",
            "Correct shape, minor scaling issue",
            "Good understanding",
            "Needs more detail",
            "Well done",
        ],
    },
    RubricQuestion {
        id: "q3",
        max_points: 10.0,
        description: "Word problem application",
        feedback_pool: &[
            "Excellent problem solving",
            "Good setup, check calculation",
            "Correct approach",
            "Missing units",
            "Outstanding work",
        ],
    },
    RubricQuestion {
        id: "q4",
        max_points: 5.0,
        description: "Simplify expression",
        feedback_pool: &[
            "Perfect simplification",
            "Correct method",
            "Minor error in final step",
            "Good start",
            "Excellent",
        ],
    },
];

const ESSAY_QUESTIONS: [RubricQuestion; 4] = [
    RubricQuestion {
        id: "thesis",
        max_points: 10.0,
        description: "Clear thesis statement",
        feedback_pool: &[
            "Clear and compelling thesis",
            "Good thesis statement",
            "Thesis could be stronger",
            "Unclear thesis",
            "Excellent argument",
        ],
    },
    RubricQuestion {
        id: "evidence",
        max_points: 15.0,
        description: "Supporting evidence",
        feedback_pool: &[
            "Strong supporting evidence",
            "Good examples provided",
            "Needs more evidence",
            "Evidence is weak",
            "Outstanding research",
        ],
    },
    RubricQuestion {
        id: "analysis",
        max_points: 10.0,
        description: "Critical analysis",
        feedback_pool: &[
            "Deep critical analysis",
            "Good analysis",
            "Surface-level analysis",
            "Needs deeper analysis",
            "Excellent insights",
        ],
    },
    RubricQuestion {
        id: "writing",
        max_points: 5.0,
        description: "Grammar and style",
        feedback_pool: &[
            "Clear and engaging writing",
            "Good writing style",
            "Some grammar issues",
            "Needs improvement",
            "Excellent prose",
        ],
    },
];

const fn banded(id: &'static str, max_points: f64, description: &'static str) -> RubricQuestion {
    RubricQuestion { id, max_points, description, feedback_pool: &[] }
}

#[derive(Debug, Clone)]
pub(crate) struct RubricRegistry {
    rubrics: HashMap<&'static str, Rubric>,
}

impl RubricRegistry {
    pub(crate) fn canonical() -> Self {
        Self::from_rubrics([
            Rubric {
                assignment_type: CALCULUS_HOMEWORK,
                questions: CALCULUS_HOMEWORK_QUESTIONS.to_vec(),
            },
            Rubric { assignment_type: MATH_HOMEWORK, questions: MATH_HOMEWORK_QUESTIONS.to_vec() },
            Rubric { assignment_type: ESSAY, questions: ESSAY_QUESTIONS.to_vec() },
        ])
    }

    pub(crate) fn from_rubrics(rubrics: impl IntoIterator<Item = Rubric>) -> Self {
        Self {
            rubrics: rubrics.into_iter().map(|rubric| (rubric.assignment_type, rubric)).collect(),
        }
    }

    pub(crate) fn get(&self, assignment_type: &str) -> Result<&Rubric, RubricError> {
        self.rubrics
            .get(assignment_type)
            .ok_or_else(|| RubricError::UnknownAssignmentType(assignment_type.to_string()))
    }

    /// Rubric for an uploaded file with no stored assignment type: anything
    /// named like math homework or sent as a PDF is graded as math homework,
    /// everything else as an essay.
    pub(crate) fn for_upload(&self, filename: &str, file_type: &str) -> Result<&Rubric, RubricError> {
        self.get(upload_assignment_type(filename, file_type))
    }
}

pub(crate) fn upload_assignment_type(filename: &str, file_type: &str) -> &'static str {
    if filename.to_lowercase().contains("math") || file_type.trim() == "application/pdf" {
        MATH_HOMEWORK
    } else {
        ESSAY
    }
}
