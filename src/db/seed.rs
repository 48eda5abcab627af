//! Submissions loaded into the store at startup.

use crate::db::models::{Submission, SubmissionQuestion};
use crate::db::types::SubmissionStatus;
use crate::services::rubrics::{CALCULUS_HOMEWORK, CALCULUS_HOMEWORK_QUESTIONS};

const SEED_GRADER: &str = "TA_001";

const PERFECT_FEEDBACK: [&str; 5] =
    ["Perfect!", "Excellent work", "Correct integration", "Well done", "Perfect"];

const SHORT_ANSWERS: [&str; 5] = [
    "f'(x) = 6x + 2",
    "4",
    "9",
    "Yes, at x = 1 and x = -1",
    "g''(x) = -sin(x) - cos(x)",
];

struct Student {
    id: &'static str,
    name: &'static str,
    student_id: &'static str,
    file_stem: &'static str,
    submitted_at: &'static str,
}

struct Grade {
    scores: [f64; 5],
    feedback: [&'static str; 5],
    percentage: f64,
    graded_at: &'static str,
    released_at: Option<&'static str>,
}

pub(crate) fn submissions() -> Vec<Submission> {
    vec![
        pending(
            student("sub_001", "Alice Johnson", "AJ2024", "alice", "2024-01-15T14:30:00Z"),
            [
                "f'(x) = 6x + 2",
                "Using L'Hôpital's rule: lim = 4",
                "∫₀³ x² dx = [x³/3]₀³ = 9",
                "f'(x) = 3x² - 3 = 0, so x = ±1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_002", "Bob Smith", "BS2024", "bob", "2024-01-15T16:45:00Z"),
            [
                "f'(x) = 6x + 2",
                "lim (x+2) = 4",
                "∫₀³ x² dx = 9",
                "Critical points at x = 1 and x = -1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_003", "Carol Davis", "CD2024", "carol", "2024-01-16T09:15:00Z"),
            SHORT_ANSWERS,
        ),
        graded(
            student("sub_004", "David Wilson", "DW2024", "david", "2024-01-16T11:30:00Z"),
            SHORT_ANSWERS,
            Grade {
                scores: [10.0, 15.0, 20.0, 15.0, 10.0],
                feedback: PERFECT_FEEDBACK,
                percentage: 100.0,
                graded_at: "2024-01-16T14:20:00Z",
                released_at: None,
            },
        ),
        pending(
            student("sub_005", "Emma Rodriguez", "ER2024", "emma", "2024-01-16T13:20:00Z"),
            [
                "f'(x) = 6x + 2",
                "I think it's 4 but I'm not sure about the steps",
                "∫₀³ x² dx = [x³/3]₀³ = 27/3 = 9",
                "f'(x) = 3x² - 3, set equal to 0: 3x² = 3, x² = 1, so x = 1 and x = -1",
                "g'(x) = cos(x) - sin(x), g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_006", "Frank Chen", "FC2024", "frank", "2024-01-16T15:45:00Z"),
            [
                "f'(x) = 6x + 2",
                "Factor: (x-2)(x+2)/(x-2) = x+2, so lim = 2+2 = 4",
                "∫₀³ x² dx = [x³/3]₀³ = 27/3 - 0 = 9",
                "f'(x) = 3x² - 3 = 3(x² - 1) = 3(x-1)(x+1), so critical points at x = 1 and x = -1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_007", "Grace Kim", "GK2024", "grace", "2024-01-17T08:30:00Z"),
            [
                "f'(x) = 6x + 2",
                "4",
                "9",
                "Yes, critical points at x = 1 and x = -1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_008", "Henry Patel", "HP2024", "henry", "2024-01-17T10:15:00Z"),
            [
                "I think it's 6x + 2 but I'm not confident",
                "I tried to factor but got confused. Maybe 4?",
                "∫₀³ x² dx = [x³/3]₀³ = 9",
                "f'(x) = 3x² - 3, so 3x² = 3, x² = 1, x = ±1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_009", "Isabella Martinez", "IM2024", "isabella", "2024-01-17T14:20:00Z"),
            [
                "f'(x) = 6x + 2",
                "Using L'Hôpital's rule: lim (2x)/1 = 4",
                "∫₀³ x² dx = [x³/3]₀³ = 27/3 = 9",
                "f'(x) = 3x² - 3 = 0, so x² = 1, therefore x = 1 and x = -1",
                "g'(x) = cos(x) - sin(x), g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_010", "Jack Thompson", "JT2024", "jack", "2024-01-17T16:30:00Z"),
            [
                "f'(x) = 6x + 2",
                "4",
                "9",
                "Critical points at x = 1 and x = -1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_011", "Katie Lee", "KL2024", "katie", "2024-01-18T09:45:00Z"),
            [
                "f'(x) = 6x + 2",
                "Factor numerator: (x-2)(x+2)/(x-2) = x+2, so limit is 4",
                "∫₀³ x² dx = [x³/3]₀³ = 9",
                "f'(x) = 3x² - 3 = 3(x²-1) = 3(x-1)(x+1), so x = 1 and x = -1",
                "g''(x) = -sin(x) - cos(x)",
            ],
        ),
        pending(
            student("sub_012", "Liam O'Connor", "LO2024", "liam", "2024-01-18T11:20:00Z"),
            SHORT_ANSWERS,
        ),
        graded(
            student("sub_013", "Maya Singh", "MS2024", "maya", "2024-01-18T13:15:00Z"),
            SHORT_ANSWERS,
            Grade {
                scores: [10.0, 15.0, 20.0, 15.0, 10.0],
                feedback: PERFECT_FEEDBACK,
                percentage: 100.0,
                graded_at: "2024-01-18T15:30:00Z",
                released_at: None,
            },
        ),
        graded(
            student("sub_014", "Noah Brown", "NB2024", "noah", "2024-01-18T15:45:00Z"),
            SHORT_ANSWERS,
            Grade {
                scores: [10.0, 12.0, 18.0, 15.0, 9.0],
                feedback: [
                    "Perfect!",
                    "Correct answer but show more work",
                    "Good work, minor calculation error",
                    "Excellent",
                    "Almost perfect, check signs",
                ],
                percentage: 91.4,
                graded_at: "2024-01-18T17:20:00Z",
                released_at: None,
            },
        ),
        graded(
            student("sub_015", "Olivia Taylor", "OT2024", "olivia", "2024-01-19T08:30:00Z"),
            SHORT_ANSWERS,
            Grade {
                scores: [10.0, 15.0, 20.0, 15.0, 10.0],
                feedback: PERFECT_FEEDBACK,
                percentage: 100.0,
                graded_at: "2024-01-19T10:15:00Z",
                released_at: Some("2024-01-19T11:00:00Z"),
            },
        ),
    ]
}

fn student(
    id: &'static str,
    name: &'static str,
    student_id: &'static str,
    file_stem: &'static str,
    submitted_at: &'static str,
) -> Student {
    Student { id, name, student_id, file_stem, submitted_at }
}

fn pending(student: Student, answers: [&str; 5]) -> Submission {
    let questions = CALCULUS_HOMEWORK_QUESTIONS
        .iter()
        .zip(answers)
        .map(|(question, answer)| SubmissionQuestion {
            id: question.id.to_string(),
            description: question.description.to_string(),
            max_points: question.max_points,
            student_answer: answer.to_string(),
            score: None,
            feedback: None,
        })
        .collect();

    Submission {
        id: student.id.to_string(),
        student_name: student.name.to_string(),
        student_id: student.student_id.to_string(),
        filename: format!("calculus_hw1_{}.pdf", student.file_stem),
        assignment_type: CALCULUS_HOMEWORK.to_string(),
        submitted_at: student.submitted_at.to_string(),
        status: SubmissionStatus::PendingGrading,
        questions,
        total_score: None,
        max_total: None,
        percentage: None,
        graded_at: None,
        graded_by: None,
        released_at: None,
    }
}

fn graded(student: Student, answers: [&str; 5], grade: Grade) -> Submission {
    let mut submission = pending(student, answers);
    for ((question, score), feedback) in
        submission.questions.iter_mut().zip(grade.scores).zip(grade.feedback)
    {
        question.score = Some(score);
        question.feedback = Some(feedback.to_string());
    }

    submission.total_score = Some(grade.scores.iter().sum());
    submission.max_total =
        Some(CALCULUS_HOMEWORK_QUESTIONS.iter().map(|question| question.max_points).sum());
    submission.percentage = Some(grade.percentage);
    submission.graded_at = Some(grade.graded_at.to_string());
    submission.graded_by = Some(SEED_GRADER.to_string());
    submission.released_at = grade.released_at.map(str::to_string);
    submission.status = if submission.released_at.is_some() {
        SubmissionStatus::Released
    } else {
        SubmissionStatus::Graded
    };
    submission
}
