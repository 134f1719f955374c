//! Question Bank — the static, read-only pool of interview questions.
//!
//! Three-level structure: interview type → role → experience level → ordered
//! question list. Type and level are closed sets (enums); roles are
//! open-ended and keyed by name, in declaration order. The role-agnostic
//! `"default"` bucket is an ordinary role declared last where a pool has one.
//!
//! Question strings are not globally unique across roles/levels; duplicates
//! are expected and removed at selection time.

use serde::{Deserialize, Serialize};

/// The role name used for role-agnostic question buckets.
pub const DEFAULT_ROLE: &str = "default";

/// Interview type. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Technical,
    Behavioral,
    Leadership,
}

impl InterviewType {
    /// Fixed traversal order for cross-type fallback.
    pub const ALL: [InterviewType; 3] = [
        InterviewType::Technical,
        InterviewType::Behavioral,
        InterviewType::Leadership,
    ];

    /// Maps a request parameter to a type. Anything other than
    /// "technical"/"behavioral" selects the leadership pool — the one
    /// documented fallback for unknown types.
    pub fn from_param(value: &str) -> Self {
        match value {
            "technical" => InterviewType::Technical,
            "behavioral" => InterviewType::Behavioral,
            _ => InterviewType::Leadership,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Leadership => "leadership",
        }
    }
}

/// Experience level. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Natural key order of the per-role level buckets.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
    ];

    /// Maps a request parameter to a level. Anything other than
    /// "entry"/"mid" maps to Senior (intentional, preserved behavior).
    pub fn from_param(value: &str) -> Self {
        match value {
            "entry" => ExperienceLevel::Entry,
            "mid" => ExperienceLevel::Mid,
            _ => ExperienceLevel::Senior,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

/// Per-level question buckets for one role.
#[derive(Debug, Clone)]
pub struct LevelBuckets {
    pub entry: Vec<String>,
    pub mid: Vec<String>,
    pub senior: Vec<String>,
}

impl LevelBuckets {
    pub fn at(&self, level: ExperienceLevel) -> &[String] {
        match level {
            ExperienceLevel::Entry => &self.entry,
            ExperienceLevel::Mid => &self.mid,
            ExperienceLevel::Senior => &self.senior,
        }
    }
}

/// One named role within a type pool.
#[derive(Debug, Clone)]
pub struct RolePool {
    pub role: String,
    pub levels: LevelBuckets,
}

/// The full question pool. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    technical: Vec<RolePool>,
    behavioral: Vec<RolePool>,
    leadership: Vec<RolePool>,
}

impl QuestionBank {
    /// Role pools for a type, in declaration order.
    pub fn pool(&self, interview_type: InterviewType) -> &[RolePool] {
        match interview_type {
            InterviewType::Technical => &self.technical,
            InterviewType::Behavioral => &self.behavioral,
            InterviewType::Leadership => &self.leadership,
        }
    }

    pub fn total_questions(&self) -> usize {
        InterviewType::ALL
            .iter()
            .flat_map(|t| self.pool(*t))
            .flat_map(|rp| ExperienceLevel::ALL.iter().map(|l| rp.levels.at(*l).len()))
            .sum()
    }

    /// The built-in question corpus.
    pub fn builtin() -> Self {
        QuestionBank {
            technical: vec![
                role(
                    "Software Engineer",
                    &[
                        "Implement a function to check if a string is a palindrome.",
                        "Given an array of integers, return the indices of two numbers that add up to a target.",
                        "Explain the difference between stacks and queues with use cases.",
                        "What is Big-O notation? Compare O(n), O(n log n), and O(n^2).",
                        "Design a basic REST API for a todo list (endpoints, status codes).",
                    ],
                    &[
                        "Design a URL shortener like bit.ly. Discuss data model, API, and high throughput.",
                        "Implement an LRU cache and explain time/space complexity.",
                        "Merge two sorted arrays into one sorted array in O(n).",
                        "Design a rate limiter (token bucket vs leaky bucket).",
                        "Detect a cycle in a linked list and return the node where the cycle begins.",
                    ],
                    &[
                        "Design a scalable logging system (ingestion, storage, indexing, query). Discuss trade-offs.",
                        "How would you shard and replicate a database for a multi-region app?",
                        "Implement a concurrent worker pool that processes tasks with backpressure handling.",
                        "Design a real-time chat system (presence, message delivery, scaling, consistency).",
                        "Optimize a slow microservice: outline methodology (profiling, tracing, caching, batching).",
                    ],
                ),
                role(
                    "Data Scientist",
                    &[
                        "Explain train/validation/test splits and why they matter.",
                        "What is overfitting? How do you prevent it?",
                        "Describe precision vs recall with scenarios.",
                        "How would you handle missing values in a dataset?",
                        "What is gradient descent?",
                    ],
                    &[
                        "Design an A/B test to evaluate a recommendation algorithm.",
                        "Discuss feature selection (mutual information, PCA, embeddings).",
                        "Compare XGBoost vs neural networks for tabular data.",
                        "Explain bias-variance tradeoff with a concrete example.",
                        "Handle class imbalance and robust evaluation.",
                    ],
                    &[
                        "Design a feature store (governance, versioning, lineage).",
                        "Productionize a model (monitoring, drift detection, retraining).",
                        "Discuss online vs batch learning in streaming systems.",
                        "Optimize inference latency (quantization, distillation, batching).",
                        "Design a metric hierarchy for a multi-objective recommender.",
                    ],
                ),
                role(
                    "Product Manager",
                    &[
                        "Prioritize a simple backlog using MoSCoW.",
                        "Define success metrics for a new onboarding flow.",
                        "Write a basic PRD for a profile page.",
                    ],
                    &[
                        "Design an MVP for a marketplace. What metrics define success?",
                        "Create a roadmap with goals, guardrails, and KPIs.",
                        "Trade-off decision between time-to-market and quality.",
                    ],
                    &[
                        "Define and align North Star metrics across multiple teams.",
                        "Drive a multi-quarter strategy amid conflicting stakeholders.",
                        "Post-launch analysis and iteration plan for a key product bet.",
                    ],
                ),
                role(
                    "Designer",
                    &[
                        "Heuristic evaluation for an onboarding flow.",
                        "Design a simple form with accessibility in mind.",
                    ],
                    &[
                        "Create a design system for a small SaaS (atoms/molecules).",
                        "Run a usability study and synthesize insights.",
                    ],
                    &[
                        "Scale a design system across 5 product teams.",
                        "Balance brand consistency with experimental UI in a new product.",
                    ],
                ),
            ],
            behavioral: vec![
                role(
                    "Software Engineer",
                    &[
                        "Tell me about a time you learned a new technology quickly.",
                        "Describe a time you received code review feedback and how you responded.",
                    ],
                    &[
                        "Tell me about a conflict you had over technical direction and how you resolved it.",
                        "Describe a project where you influenced without formal authority.",
                    ],
                    &[
                        "Describe a time you led engineering change across teams.",
                        "Tell me about a strategic decision that failed. What did you learn?",
                    ],
                ),
                role(
                    "Product Manager",
                    &[
                        "Tell me about prioritizing conflicting tasks with limited information.",
                        "Describe a time you handled ambiguous requirements.",
                    ],
                    &[
                        "Influenced stakeholders with competing goals—how?",
                        "Describe pushing back on a timeline and the result.",
                    ],
                    &[
                        "Led cross-org initiative amid resistance—what did you do?",
                        "Describe a bet that didn't pay off and how you adapted.",
                    ],
                ),
                role(
                    "Data Scientist",
                    &[
                        "Tell me about communicating complex analysis to non-technical peers.",
                        "Describe a time you handled messy data under time pressure.",
                    ],
                    &[
                        "Conflicting experimental results—how did you reconcile them?",
                        "Describe collaborating with engineering to ship a model.",
                    ],
                    &[
                        "Leading ML strategy across teams—how did you drive alignment?",
                        "Handling model failure in production—response and learnings?",
                    ],
                ),
                role(
                    DEFAULT_ROLE,
                    &["Tell me about a time you learned a new skill quickly."],
                    &["Tell me about a conflict you resolved at work."],
                    &["Describe a time you led a major change initiative."],
                ),
            ],
            leadership: vec![
                role(
                    "Software Engineer",
                    &["Mentoring a junior engineer—how did you ensure growth?"],
                    &["Leading a small team through delivery under pressure."],
                    &["Driving org-wide engineering excellence initiatives."],
                ),
                role(
                    "Product Manager",
                    &["Coordinating cross-functional stakeholders on a small launch."],
                    &["Leading roadmap alignment across multiple squads."],
                    &["Defining product strategy with executive stakeholders."],
                ),
                role(
                    DEFAULT_ROLE,
                    &["Leading by example in small teams—share an instance."],
                    &["Leading cross-functional delivery under constraints."],
                    &["Leading at scale: culture, strategy, and outcomes."],
                ),
            ],
        }
    }
}

fn role(name: &str, entry: &[&str], mid: &[&str], senior: &[&str]) -> RolePool {
    let own = |qs: &[&str]| qs.iter().map(|q| q.to_string()).collect();
    RolePool {
        role: name.to_string(),
        levels: LevelBuckets {
            entry: own(entry),
            mid: own(mid),
            senior: own(senior),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_falls_back_to_leadership() {
        assert_eq!(
            InterviewType::from_param("system-design"),
            InterviewType::Leadership
        );
        assert_eq!(
            InterviewType::from_param("technical"),
            InterviewType::Technical
        );
        assert_eq!(
            InterviewType::from_param("behavioral"),
            InterviewType::Behavioral
        );
    }

    #[test]
    fn test_unknown_level_falls_back_to_senior() {
        assert_eq!(ExperienceLevel::from_param("entry"), ExperienceLevel::Entry);
        assert_eq!(ExperienceLevel::from_param("mid"), ExperienceLevel::Mid);
        assert_eq!(
            ExperienceLevel::from_param("junior"),
            ExperienceLevel::Senior
        );
        assert_eq!(ExperienceLevel::from_param(""), ExperienceLevel::Senior);
    }

    #[test]
    fn test_builtin_bank_has_expected_size() {
        let bank = QuestionBank::builtin();
        // technical 45 + behavioral 21 + leadership 9
        assert_eq!(bank.total_questions(), 75);
    }

    #[test]
    fn test_software_engineer_technical_mid_bucket_has_five() {
        let bank = QuestionBank::builtin();
        let se = bank
            .pool(InterviewType::Technical)
            .iter()
            .find(|rp| rp.role == "Software Engineer")
            .unwrap();
        assert_eq!(se.levels.at(ExperienceLevel::Mid).len(), 5);
    }

    #[test]
    fn test_behavioral_and_leadership_define_default_role() {
        let bank = QuestionBank::builtin();
        for t in [InterviewType::Behavioral, InterviewType::Leadership] {
            assert!(
                bank.pool(t).iter().any(|rp| rp.role == DEFAULT_ROLE),
                "{} pool must carry a default bucket",
                t.as_str()
            );
        }
        assert!(!bank
            .pool(InterviewType::Technical)
            .iter()
            .any(|rp| rp.role == DEFAULT_ROLE));
    }

    #[test]
    fn test_default_role_declared_last() {
        let bank = QuestionBank::builtin();
        let behavioral = bank.pool(InterviewType::Behavioral);
        assert_eq!(behavioral.last().unwrap().role, DEFAULT_ROLE);
    }
}
