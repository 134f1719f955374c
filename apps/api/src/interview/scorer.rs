//! Answer Scorer — pluggable, trait-based scorer for free-text answers.
//!
//! Default: `HeuristicAnswerScorer` (pure-Rust, fast, deterministic, fully
//! testable). Scores an answer against its question on four axes — topical
//! relevance, STAR structure, fluency, and length — and renders tiered
//! feedback text. No I/O, no failure mode: every string input produces a
//! bounded 0–100 score.
//!
//! `AppState` holds an `Arc<dyn AnswerScorer>`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Tiered feedback text for one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub communication: String,
    pub structure: String,
    pub content: String,
    pub suggestions: Vec<String>,
}

/// Measurable per-answer metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerMetrics {
    pub word_count: usize,
    /// Estimated speaking time in seconds, at 150 words per minute.
    pub speaking_time: u32,
    pub filler_words: usize,
    /// Keyword-overlap relevance between answer and question, 0–100.
    pub confidence: u32,
}

/// Full analysis of one submitted answer. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerAnalysis {
    pub question: String,
    pub answer: String,
    pub score: u32,
    pub feedback: AnswerFeedback,
    pub metrics: AnswerMetrics,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The answer scorer trait. Implement this to swap scoring backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn AnswerScorer>`.
pub trait AnswerScorer: Send + Sync {
    fn score(&self, question: &str, answer: &str) -> AnswerAnalysis;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicAnswerScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Overall score weights: relevance 40%, structure 30%, fluency 20%,
/// length 10%.
const WEIGHT_CONFIDENCE: f64 = 0.4;
const WEIGHT_STRUCTURE: f64 = 0.3;
const WEIGHT_FLUENCY: f64 = 0.2;
const WEIGHT_LENGTH: f64 = 0.1;

/// Average speaking rate used for the time estimate.
const WORDS_PER_MINUTE: f64 = 150.0;

/// Verbal habit words/phrases that carry no content. Single-word entries are
/// matched by exact token equality; multi-word entries by a substring scan
/// over the lower-cased answer (whitespace tokenization would never preserve
/// them as one token).
const FILLER_WORDS: [&str; 8] = [
    "um",
    "uh",
    "like",
    "you know",
    "basically",
    "actually",
    "sort of",
    "kind of",
];

/// Common English function words discarded during keyword extraction.
const STOP_WORDS: [&str; 49] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those", "i", "you", "he",
    "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// STAR indicator groups: Situation, Task, Action, Result. Each group that
/// matches the answer (substring scan, any trigger) contributes 25 points.
const STAR_INDICATORS: [&[&str]; 4] = [
    &["when", "situation", "time", "worked", "job", "project"],
    &["task", "goal", "objective", "responsibility", "needed"],
    &["did", "implemented", "created", "developed", "worked", "collaborated"],
    &["result", "outcome", "achieved", "improved", "successful", "impact"],
];

/// Pure heuristic scorer. Deterministic for identical inputs.
pub struct HeuristicAnswerScorer;

impl AnswerScorer for HeuristicAnswerScorer {
    fn score(&self, question: &str, answer: &str) -> AnswerAnalysis {
        let answer_lower = answer.to_lowercase();
        let word_count = answer_lower.split_whitespace().count();

        let speaking_time = (word_count as f64 / WORDS_PER_MINUTE * 60.0).round() as u32;
        let filler_count = count_filler_words(&answer_lower);

        let question_keywords = extract_keywords(question);
        let answer_keywords = extract_keywords(answer);
        let confidence = keyword_confidence(&question_keywords, &answer_keywords);

        let structure = structure_score(&answer_lower);

        let fluency = (100 - 5 * filler_count as i64).max(0) as f64;
        let length = (2 * word_count).min(100) as f64;
        let raw = confidence as f64 * WEIGHT_CONFIDENCE
            + structure as f64 * WEIGHT_STRUCTURE
            + fluency * WEIGHT_FLUENCY
            + length * WEIGHT_LENGTH;
        let score = raw.clamp(0.0, 100.0).round() as u32;

        AnswerAnalysis {
            question: question.to_string(),
            answer: answer.to_string(),
            score,
            feedback: build_feedback(confidence, structure, filler_count, word_count),
            metrics: AnswerMetrics {
                word_count,
                speaking_time,
                filler_words: filler_count,
                confidence,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core heuristics
// ────────────────────────────────────────────────────────────────────────────

/// Counts filler words in a lower-cased answer. Single-word fillers match
/// whole whitespace tokens; multi-word fillers are counted as
/// non-overlapping substring occurrences.
fn count_filler_words(answer_lower: &str) -> usize {
    let tokens: Vec<&str> = answer_lower.split_whitespace().collect();

    FILLER_WORDS
        .iter()
        .map(|filler| {
            if filler.contains(' ') {
                answer_lower.matches(filler).count()
            } else {
                tokens.iter().filter(|t| *t == filler).count()
            }
        })
        .sum()
}

/// Extracts content-bearing keywords: lower-case, strip punctuation, split on
/// whitespace, drop short tokens and stop-words.
fn extract_keywords(text: &str) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(|word| word.to_string())
        .collect()
}

/// Keyword-overlap relevance, 0–100. A question keyword counts as matched if
/// any answer keyword contains it or it contains any answer keyword. A
/// question with zero keywords is vacuously relevant (100).
fn keyword_confidence(question_keywords: &[String], answer_keywords: &[String]) -> u32 {
    if question_keywords.is_empty() {
        return 100;
    }

    let matched = question_keywords
        .iter()
        .filter(|q| {
            answer_keywords
                .iter()
                .any(|a| a.contains(q.as_str()) || q.contains(a.as_str()))
        })
        .count();

    (matched as f64 / question_keywords.len() as f64 * 100.0).round() as u32
}

/// STAR structure score: 25 points per indicator group with at least one
/// trigger present in the lower-cased answer; 100 max.
fn structure_score(answer_lower: &str) -> u32 {
    STAR_INDICATORS
        .iter()
        .filter(|group| group.iter().any(|trigger| answer_lower.contains(trigger)))
        .count() as u32
        * 25
}

// ────────────────────────────────────────────────────────────────────────────
// Feedback text generation
// ────────────────────────────────────────────────────────────────────────────

fn build_feedback(
    confidence: u32,
    structure: u32,
    filler_count: usize,
    word_count: usize,
) -> AnswerFeedback {
    let communication = if filler_count == 0 {
        "Excellent communication with no filler words. Clear and confident delivery."
    } else if filler_count <= 2 {
        "Good communication with minimal filler words. Consider pausing instead of using fillers."
    } else {
        "Communication could be improved by reducing filler words. Practice pausing and thinking before speaking."
    };

    let structure_text = if structure >= 75 {
        "Great use of the STAR method! Your answer is well-structured and easy to follow."
    } else if structure >= 50 {
        "Good structure, but consider using the STAR method more explicitly for better organization."
    } else {
        "Consider using the STAR method (Situation, Task, Action, Result) to structure your response better."
    };

    let content = if confidence >= 80 {
        "Excellent content relevance! Your answer directly addresses the question."
    } else if confidence >= 60 {
        "Good content, but try to be more specific and directly address the key points of the question."
    } else {
        "Your answer could be more focused on the specific question. Consider rephrasing to better match the question."
    };

    let mut suggestions = Vec::new();
    if word_count < 30 {
        suggestions.push(
            "Provide more specific examples and details to strengthen your answer.".to_string(),
        );
    }
    if filler_count > 3 {
        suggestions
            .push("Practice speaking without filler words to sound more professional.".to_string());
    }
    if structure < 50 {
        suggestions.push(
            "Use the STAR method: describe the Situation, explain your Task, detail your Actions, and share the Results."
                .to_string(),
        );
    }
    if confidence < 70 {
        suggestions
            .push("Focus on directly answering the question with relevant examples.".to_string());
    }

    AnswerFeedback {
        communication: communication.to_string(),
        structure: structure_text.to_string(),
        content: content.to_string(),
        suggestions,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn score(question: &str, answer: &str) -> AnswerAnalysis {
        HeuristicAnswerScorer.score(question, answer)
    }

    #[test]
    fn test_score_always_bounded_0_to_100() {
        let long_answer = "word ".repeat(500);
        let cases = [
            ("", ""),
            ("Why?", "Because."),
            ("Tell me about a project.", long_answer.as_str()),
            ("um uh like", "um uh like um uh like um uh like um uh like um"),
        ];
        for (q, a) in cases {
            let analysis = score(q, a);
            assert!(analysis.score <= 100, "score {} out of range", analysis.score);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let q = "Tell me about a time you led a team.";
        let a = "I led the project when our team needed direction and we achieved a great result.";
        let first = score(q, a);
        let second = score(q, a);
        assert_eq!(first.score, second.score);
        assert_eq!(first.metrics.confidence, second.metrics.confidence);
        assert_eq!(first.metrics.filler_words, second.metrics.filler_words);
        assert_eq!(first.feedback.communication, second.feedback.communication);
        assert_eq!(first.feedback.suggestions, second.feedback.suggestions);
    }

    #[test]
    fn test_empty_answer_degrades_gracefully() {
        let analysis = score("Explain the difference between stacks and queues.", "");
        assert_eq!(analysis.metrics.word_count, 0);
        assert_eq!(analysis.metrics.filler_words, 0);
        assert_eq!(analysis.metrics.speaking_time, 0);
        assert_eq!(analysis.metrics.confidence, 0);
        assert!(analysis.score <= 100);
    }

    #[test]
    fn test_empty_question_is_vacuously_relevant() {
        let analysis = score("", "An answer with no question to match against.");
        assert_eq!(analysis.metrics.confidence, 100);
    }

    #[test]
    fn test_stop_word_only_question_is_vacuously_relevant() {
        // Every question token is a stop-word or too short
        let analysis = score("Do you?", "Anything at all.");
        assert_eq!(analysis.metrics.confidence, 100);
    }

    #[test]
    fn test_speaking_time_at_150_wpm() {
        // 150 words -> 60 seconds
        let answer = "word ".repeat(150);
        let analysis = score("Question?", &answer);
        assert_eq!(analysis.metrics.word_count, 150);
        assert_eq!(analysis.metrics.speaking_time, 60);
    }

    #[test]
    fn test_single_word_fillers_counted_per_token() {
        let analysis = score("Q", "um I was like thinking um about it");
        assert_eq!(analysis.metrics.filler_words, 3);
    }

    #[test]
    fn test_multi_word_fillers_counted_by_substring() {
        let analysis = score("Q", "you know it was sort of hard you know");
        assert_eq!(analysis.metrics.filler_words, 3);
    }

    #[test]
    fn test_full_star_answer_scores_structure_100() {
        let answer = "In that situation my task was clear: I implemented the fix and the result was positive.";
        let analysis = score("Describe a challenge.", answer);
        // situation + task + implemented + result hit all four groups
        assert!(analysis
            .feedback
            .structure
            .starts_with("Great use of the STAR method"));
        // structure contributes its full 30 weighted points when all groups match
        let no_structure = score("Describe a challenge.", "Yes.");
        assert!(analysis.score > no_structure.score);
    }

    #[test]
    fn test_structure_score_hits_exactly_100_with_all_four_groups() {
        assert_eq!(
            structure_score("the situation was hard, my task was clear, i implemented it and the result shipped"),
            100
        );
        assert_eq!(structure_score("my goal here"), 25); // Task group only
        assert_eq!(structure_score("nothing matches"), 0);
    }

    #[test]
    fn test_structure_score_counts_each_group_once() {
        // "worked" appears in both Situation and Action groups; repeating it
        // must not score more than those two groups
        let analysis = score("Q", "worked worked worked");
        assert!(analysis
            .feedback
            .structure
            .starts_with("Good structure, but consider"));
    }

    #[test]
    fn test_heavy_filler_answer_gets_lowest_communication_tier() {
        let analysis = score(
            "Describe your experience.",
            "um uh like basically actually here are ten total words",
        );
        assert_eq!(analysis.metrics.filler_words, 5);
        assert_eq!(analysis.metrics.word_count, 10);
        assert!(analysis
            .feedback
            .communication
            .starts_with("Communication could be improved"));
        assert!(analysis
            .feedback
            .suggestions
            .iter()
            .any(|s| s.contains("without filler words")));
    }

    #[test]
    fn test_keyword_overlap_produces_nonzero_confidence() {
        let analysis = score(
            "Tell me about a time you led a team.",
            "I led the team by assigning tasks and we achieved the result of shipping on time.",
        );
        assert!(analysis.metrics.confidence > 0);
    }

    #[test]
    fn test_substring_containment_matches_inflections() {
        // "lead" is contained in "leading": containment matching, not exact equality
        let analysis = score("Can you lead?", "Leading comes naturally after practice.");
        assert_eq!(analysis.metrics.confidence, 100);
    }

    #[test]
    fn test_short_answer_triggers_detail_suggestion() {
        let analysis = score("Why this role?", "Because I want it.");
        assert!(analysis
            .feedback
            .suggestions
            .iter()
            .any(|s| s.contains("more specific examples")));
    }

    #[test]
    fn test_strong_answer_has_no_suggestions() {
        // Long, relevant, structured, filler-free answer
        let answer = "Let me tell you about a situation when our project hit a scaling problem. \
            My task was to restore throughput, so I implemented caching and developed a sharding \
            scheme for the database layer. We worked through the rollout carefully and the result \
            was a forty percent latency improvement, a successful outcome with lasting impact \
            across the platform.";
        let analysis = score("Tell me about a scaling problem on a project.", answer);
        assert!(analysis.feedback.suggestions.is_empty(), "{:?}", analysis.feedback.suggestions);
        assert!(analysis.score >= 90);
    }

    #[test]
    fn test_irrelevant_answer_scores_low_confidence() {
        let analysis = score(
            "Explain database sharding strategies.",
            "My favorite breakfast involves pancakes and maple syrup every weekend.",
        );
        assert_eq!(analysis.metrics.confidence, 0);
        assert!(analysis
            .feedback
            .content
            .starts_with("Your answer could be more focused"));
    }
}
