//! Session summary aggregation — folds per-question analyses into the
//! overall result persisted at the end of an interview.

use serde::{Deserialize, Serialize};

use crate::interview::scorer::AnswerAnalysis;
use crate::models::session::FeedbackItem;

/// Score assumed for an answer submitted without an analysis, so a partially
/// analyzed session still produces a bounded overall score.
const UNANALYZED_SCORE: u32 = 70;

const UNANALYZED_FEEDBACK: &str =
    "Good structure and clear communication. Consider providing more specific examples.";

/// One question with the answer the user gave and, when scoring ran, its
/// analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub analysis: Option<AnswerAnalysis>,
}

/// Aggregated result of a finished (or ended-early) interview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub feedback: Vec<FeedbackItem>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Folds answered questions into a session summary: the rounded mean of
/// per-question scores, joined feedback text per question, and
/// threshold-based strengths/improvements lists.
pub fn summarize(answers: &[AnsweredQuestion]) -> SessionSummary {
    let total: u32 = answers
        .iter()
        .map(|a| a.analysis.as_ref().map_or(UNANALYZED_SCORE, |x| x.score))
        .sum();
    let score = (total as f64 / answers.len().max(1) as f64).round() as u32;

    let feedback = answers
        .iter()
        .map(|a| FeedbackItem {
            question: a.question.clone(),
            answer: a.answer.clone(),
            feedback: Some(match &a.analysis {
                Some(analysis) => format!(
                    "{} {} {}",
                    analysis.feedback.communication,
                    analysis.feedback.structure,
                    analysis.feedback.content
                ),
                None => UNANALYZED_FEEDBACK.to_string(),
            }),
        })
        .collect();

    let any_strong = answers
        .iter()
        .filter_map(|a| a.analysis.as_ref())
        .any(|x| x.score >= 80);
    let strengths = if any_strong {
        vec![
            "Strong communication".to_string(),
            "Good structure".to_string(),
            "Relevant content".to_string(),
        ]
    } else {
        vec![
            "Professional demeanor".to_string(),
            "Good engagement".to_string(),
        ]
    };

    let any_weak = answers
        .iter()
        .filter_map(|a| a.analysis.as_ref())
        .any(|x| x.score < 70);
    let improvements = if any_weak {
        vec![
            "Improve answer structure".to_string(),
            "Reduce filler words".to_string(),
            "Provide more specific examples".to_string(),
        ]
    } else {
        vec![
            "Complete the full interview".to_string(),
            "Provide more detailed responses".to_string(),
        ]
    };

    SessionSummary {
        score,
        feedback,
        strengths,
        improvements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::scorer::{AnswerScorer, HeuristicAnswerScorer};

    fn answered(question: &str, answer: &str) -> AnsweredQuestion {
        AnsweredQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            analysis: Some(HeuristicAnswerScorer.score(question, answer)),
        }
    }

    fn unanalyzed(question: &str) -> AnsweredQuestion {
        AnsweredQuestion {
            question: question.to_string(),
            answer: "No answer provided".to_string(),
            analysis: None,
        }
    }

    #[test]
    fn test_empty_session_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.score, 0);
        assert!(summary.feedback.is_empty());
        assert_eq!(summary.strengths.len(), 2);
        assert_eq!(summary.improvements.len(), 2);
    }

    #[test]
    fn test_unanalyzed_answer_counts_as_seventy() {
        let summary = summarize(&[unanalyzed("Q1"), unanalyzed("Q2")]);
        assert_eq!(summary.score, 70);
        assert_eq!(
            summary.feedback[0].feedback.as_deref(),
            Some(UNANALYZED_FEEDBACK)
        );
        // 70 is not below the improvement threshold
        assert!(summary
            .improvements
            .contains(&"Complete the full interview".to_string()));
    }

    #[test]
    fn test_score_is_rounded_mean() {
        let mut first = unanalyzed("Q1");
        first.analysis = Some(HeuristicAnswerScorer.score("Q1", ""));
        let empty_score = first.analysis.as_ref().unwrap().score;

        // second counts as the unanalyzed default of 70
        let summary = summarize(&[first, unanalyzed("Q2")]);
        let expected = ((empty_score + 70) as f64 / 2.0).round() as u32;
        assert_eq!(summary.score, expected);
    }

    #[test]
    fn test_weak_answers_surface_improvement_list() {
        let weak = answered("Explain database sharding in detail.", "No idea.");
        assert!(weak.analysis.as_ref().unwrap().score < 70);

        let summary = summarize(&[weak]);
        assert!(summary
            .improvements
            .contains(&"Reduce filler words".to_string()));
    }

    #[test]
    fn test_strong_answer_surfaces_strengths_list() {
        let strong = answered(
            "Tell me about a scaling problem on a project.",
            "Let me tell you about a situation when our project hit a scaling problem. \
             My task was to restore throughput, so I implemented caching and developed \
             a sharding scheme for the database layer. We worked through the rollout \
             carefully and the result was a forty percent latency improvement, a \
             successful outcome with lasting impact across the platform.",
        );
        assert!(strong.analysis.as_ref().unwrap().score >= 80);

        let summary = summarize(&[strong]);
        assert!(summary
            .strengths
            .contains(&"Strong communication".to_string()));
    }

    #[test]
    fn test_feedback_joins_all_three_sections() {
        let item = answered("Describe a project.", "I worked on a project and achieved results.");
        let summary = summarize(&[item]);
        let text = summary.feedback[0].feedback.as_deref().unwrap();
        // communication + structure + content, space-joined
        assert!(text.contains("filler words"));
        assert!(text.contains("STAR"));
    }
}
