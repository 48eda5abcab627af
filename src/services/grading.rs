//! Simulated grading: bounded random scores plus canned feedback.
//!
//! Scores are `max_points * f` with `f` drawn from the configured band
//! (default `[0.6, 0.95]`), rounded to one decimal and clamped to
//! `[0, max_points]`. Nothing here looks at the answer text.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::core::config::Settings;
use crate::db::models::SubmissionQuestion;
use crate::db::points;
use crate::services::rubrics::Rubric;

pub(crate) const NO_ANSWER: &str = "No answer provided";

/// Random source used by [`simulate`].
pub(crate) trait ScoreSampler: Send {
    /// A fraction in `[low, high]`.
    fn fraction(&mut self, low: f64, high: f64) -> f64;

    /// An index in `0..len`. Callers never pass zero.
    fn pick(&mut self, len: usize) -> usize;
}

pub(crate) struct RandomSampler {
    rng: StdRng,
}

impl RandomSampler {
    pub(crate) fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub(crate) fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl ScoreSampler for RandomSampler {
    fn fraction(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreBand {
    pub(crate) low: f64,
    pub(crate) high: f64,
}

impl ScoreBand {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        let grading = settings.grading();
        Self { low: grading.score_fraction_min, high: grading.score_fraction_max }
    }
}

impl Default for ScoreBand {
    fn default() -> Self {
        Self { low: 0.6, high: 0.95 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GradedQuestion {
    pub(crate) question_id: String,
    pub(crate) description: String,
    #[serde(serialize_with = "points::serialize")]
    pub(crate) score: f64,
    #[serde(serialize_with = "points::serialize")]
    pub(crate) max_points: f64,
    pub(crate) feedback: String,
    pub(crate) student_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct GradingResult {
    pub(crate) questions: Vec<GradedQuestion>,
    #[serde(serialize_with = "points::serialize")]
    pub(crate) total_score: f64,
    #[serde(serialize_with = "points::serialize")]
    pub(crate) max_total: f64,
    pub(crate) percentage: f64,
}

impl GradingResult {
    /// Per-question records as stored on a graded submission.
    pub(crate) fn submission_questions(&self) -> Vec<SubmissionQuestion> {
        self.questions
            .iter()
            .map(|graded| SubmissionQuestion {
                id: graded.question_id.clone(),
                description: graded.description.clone(),
                max_points: graded.max_points,
                student_answer: graded.student_answer.clone(),
                score: Some(graded.score),
                feedback: Some(graded.feedback.clone()),
            })
            .collect()
    }
}

/// Grades every rubric question in order. Missing answers become
/// [`NO_ANSWER`]; answers to questions outside the rubric are ignored.
pub(crate) fn simulate(
    rubric: &Rubric,
    answers: &HashMap<&str, &str>,
    band: ScoreBand,
    sampler: &mut dyn ScoreSampler,
) -> GradingResult {
    let mut questions = Vec::with_capacity(rubric.questions.len());
    let mut total_score = 0.0;
    let mut max_total = 0.0;

    for question in &rubric.questions {
        let max_points = question.max_points;
        let fraction = sampler.fraction(band.low, band.high);
        let score = round1(max_points * fraction).clamp(0.0, max_points);

        let feedback = if question.feedback_pool.is_empty() {
            band_feedback(score * 100.0 / max_points).to_string()
        } else {
            let index = sampler.pick(question.feedback_pool.len());
            question.feedback_pool[index.min(question.feedback_pool.len() - 1)].to_string()
        };

        let student_answer = answers.get(question.id).copied().unwrap_or(NO_ANSWER);

        questions.push(GradedQuestion {
            question_id: question.id.to_string(),
            description: question.description.to_string(),
            score,
            max_points,
            feedback,
            student_answer: student_answer.to_string(),
        });

        total_score += score;
        max_total += max_points;
    }

    let total_score = round1(total_score).min(max_total);
    let percentage = if max_total > 0.0 { round1(total_score * 100.0 / max_total) } else { 0.0 };

    GradingResult { questions, total_score, max_total, percentage }
}

pub(crate) fn band_feedback(percentage: f64) -> &'static str {
    if percentage >= 90.0 {
        "Excellent work! Clear understanding demonstrated."
    } else if percentage >= 80.0 {
        "Good work with minor issues. Well done overall."
    } else if percentage >= 70.0 {
        "Decent attempt but some concepts need clarification."
    } else if percentage >= 60.0 {
        "Shows some understanding but needs improvement."
    } else {
        "Needs significant improvement. Review the concepts."
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::rubrics::{
        RubricQuestion, RubricRegistry, CALCULUS_HOMEWORK, ESSAY, MATH_HOMEWORK,
    };
    use crate::test_support::FixedSampler;

    fn single_question() -> Rubric {
        Rubric {
            assignment_type: "quiz",
            questions: vec![RubricQuestion {
                id: "q1",
                max_points: 10.0,
                description: "Differentiate 3x² + 2x",
                feedback_pool: &[],
            }],
        }
    }

    fn grade_single(fraction: f64) -> GradingResult {
        let answers = HashMap::from([("q1", "6x+2")]);
        let mut sampler = FixedSampler { fraction, pick: 0 };
        simulate(&single_question(), &answers, ScoreBand::default(), &mut sampler)
    }

    #[test]
    fn ninety_percent_is_excellent() {
        let result = grade_single(0.9);
        let question = &result.questions[0];
        assert_eq!(question.score, 9.0);
        assert_eq!(question.feedback, "Excellent work! Clear understanding demonstrated.");
        assert_eq!(question.student_answer, "6x+2");
        assert_eq!(result.total_score, 9.0);
        assert_eq!(result.max_total, 10.0);
        assert_eq!(result.percentage, 90.0);
    }

    #[test]
    fn feedback_bands_switch_exactly_at_boundaries() {
        let cases = [
            (0.8, "Good work with minor issues. Well done overall."),
            (0.7, "Decent attempt but some concepts need clarification."),
            (0.6, "Shows some understanding but needs improvement."),
            (0.59, "Needs significant improvement. Review the concepts."),
            (0.89, "Good work with minor issues. Well done overall."),
        ];
        for (fraction, expected) in cases {
            assert_eq!(grade_single(fraction).questions[0].feedback, expected, "fraction {fraction}");
        }
    }

    #[test]
    fn band_feedback_thresholds() {
        assert_eq!(band_feedback(100.0), "Excellent work! Clear understanding demonstrated.");
        assert_eq!(band_feedback(90.0), "Excellent work! Clear understanding demonstrated.");
        assert_eq!(band_feedback(89.9), "Good work with minor issues. Well done overall.");
        assert_eq!(band_feedback(80.0), "Good work with minor issues. Well done overall.");
        assert_eq!(band_feedback(70.0), "Decent attempt but some concepts need clarification.");
        assert_eq!(band_feedback(60.0), "Shows some understanding but needs improvement.");
        assert_eq!(band_feedback(59.9), "Needs significant improvement. Review the concepts.");
        assert_eq!(band_feedback(0.0), "Needs significant improvement. Review the concepts.");
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(grade_single(1.7).questions[0].score, 10.0);
        assert_eq!(grade_single(-0.4).questions[0].score, 0.0);
        assert_eq!(grade_single(1.7).percentage, 100.0);
    }

    #[test]
    fn missing_answers_use_placeholder() {
        let registry = RubricRegistry::canonical();
        let rubric = registry.get(CALCULUS_HOMEWORK).unwrap();
        let answers = HashMap::from([("q2", "4"), ("q9", "ignored")]);
        let mut sampler = FixedSampler { fraction: 0.75, pick: 0 };

        let result = simulate(rubric, &answers, ScoreBand::default(), &mut sampler);
        let ids: Vec<&str> = result.questions.iter().map(|q| q.question_id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4", "q5"]);
        assert_eq!(result.questions[0].student_answer, NO_ANSWER);
        assert_eq!(result.questions[1].student_answer, "4");
        assert_eq!(result.max_total, 70.0);
    }

    #[test]
    fn canned_pool_feedback_uses_sampler_index() {
        let registry = RubricRegistry::canonical();
        let rubric = registry.get(ESSAY).unwrap();
        let mut sampler = FixedSampler { fraction: 0.8, pick: 2 };

        let result = simulate(rubric, &HashMap::new(), ScoreBand::default(), &mut sampler);
        let feedback: Vec<&str> = result.questions.iter().map(|q| q.feedback.as_str()).collect();
        assert_eq!(
            feedback,
            vec![
                "Thesis could be stronger",
                "Needs more evidence",
                "Surface-level analysis",
                "Some grammar issues"
            ]
        );
        assert_eq!(result.total_score, 32.0);
        assert_eq!(result.percentage, 80.0);
    }

    #[test]
    fn empty_rubric_yields_zero_totals() {
        let rubric = Rubric { assignment_type: "empty", questions: Vec::new() };
        let mut sampler = FixedSampler { fraction: 0.9, pick: 0 };
        let result = simulate(&rubric, &HashMap::new(), ScoreBand::default(), &mut sampler);
        assert!(result.questions.is_empty());
        assert_eq!((result.total_score, result.max_total, result.percentage), (0.0, 0.0, 0.0));
    }

    #[test]
    fn seeded_sampler_is_deterministic() {
        let registry = RubricRegistry::canonical();
        let answers = HashMap::from([("q1", "x = 3")]);
        for kind in [CALCULUS_HOMEWORK, MATH_HOMEWORK, ESSAY] {
            let rubric = registry.get(kind).unwrap();
            let first =
                simulate(rubric, &answers, ScoreBand::default(), &mut RandomSampler::seeded(7));
            let second =
                simulate(rubric, &answers, ScoreBand::default(), &mut RandomSampler::seeded(7));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn random_scores_stay_within_band_and_bounds() {
        let registry = RubricRegistry::canonical();
        let rubric = registry.get(CALCULUS_HOMEWORK).unwrap();
        let mut sampler = RandomSampler::seeded(2024);

        for _ in 0..200 {
            let result = simulate(rubric, &HashMap::new(), ScoreBand::default(), &mut sampler);
            for question in &result.questions {
                assert!(question.score >= round1(question.max_points * 0.6) - 1e-9);
                assert!(question.score <= round1(question.max_points * 0.95) + 1e-9);
            }
            assert!(result.total_score >= 0.0 && result.total_score <= result.max_total);
            assert!(result.percentage >= 0.0 && result.percentage <= 100.0);
        }
    }

    #[test]
    fn submission_questions_carry_scores_and_feedback() {
        let stored = grade_single(0.9).submission_questions();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, "q1");
        assert_eq!(stored[0].score, Some(9.0));
        assert_eq!(
            stored[0].feedback.as_deref(),
            Some("Excellent work! Clear understanding demonstrated.")
        );
    }
}
