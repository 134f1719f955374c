//! Question Selector — picks non-repeating questions from the static pool.
//!
//! Selection runs in two phases: an async read of the caller's seen-question
//! history from the session store, then a pure in-memory pass over the
//! `QuestionBank`. A failed history read surfaces as `HistoryUnavailable`
//! rather than being treated as empty history.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::bank::{
    ExperienceLevel, InterviewType, QuestionBank, DEFAULT_ROLE,
};
use crate::sessions::store::seen_questions;

// ────────────────────────────────────────────────────────────────────────────
// Service entry point
// ────────────────────────────────────────────────────────────────────────────

/// Selects up to `count` questions the user has not seen before.
///
/// Reads the user's question history (one awaited store call), then runs the
/// pure selection pass. Returns fewer than `count` questions only when the
/// user has seen every available question across every pool.
pub async fn select_questions(
    db: &PgPool,
    bank: &QuestionBank,
    user_id: Uuid,
    interview_type: InterviewType,
    role: &str,
    level: ExperienceLevel,
    count: usize,
) -> Result<Vec<String>, AppError> {
    let seen = seen_questions(db, user_id)
        .await
        .map_err(|e| AppError::HistoryUnavailable(e.to_string()))?;

    let mut rng = rand::thread_rng();
    Ok(select_from_bank(
        bank,
        interview_type,
        role,
        level,
        &seen,
        count,
        &mut rng,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Pure selection algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Pure selection pass over the bank.
///
/// Algorithm:
/// 1. Gather candidates in priority tiers:
///    a. exact (role, level) bucket;
///    b. same role, other levels (natural level order);
///    c. other roles at the same level (declaration order);
///    d. the role-agnostic default bucket at the same level.
/// 2. Fill tier by tier: within a tier, unseen candidates are shuffled
///    (Fisher–Yates) and appended, set-deduplicated, until `count` is
///    reached. Higher-priority buckets are exhausted before lower ones.
/// 3. If all tiers together fall short of `count`, broaden: scan every
///    bucket across every type/role/level in fixed traversal order,
///    appending anything unseen. This may cross interview types —
///    intentional last-resort behavior.
/// 4. Shuffle the final list so returned order carries no tier signal.
pub fn select_from_bank<R: Rng + ?Sized>(
    bank: &QuestionBank,
    interview_type: InterviewType,
    role: &str,
    level: ExperienceLevel,
    seen: &HashSet<String>,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut chosen: Vec<&str> = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();

    for tier in gather_priority_tiers(bank, interview_type, role, level) {
        if chosen.len() >= count {
            break;
        }
        let mut fresh: Vec<&str> = tier
            .into_iter()
            .filter(|q| !used.contains(*q) && !seen.contains(q.trim()))
            .collect();
        fresh.shuffle(rng);
        for q in fresh {
            if chosen.len() >= count {
                break;
            }
            if used.insert(q) {
                chosen.push(q);
            }
        }
    }

    // Last resort: broaden across every pool in fixed traversal order.
    if chosen.len() < count {
        'broaden: for t in InterviewType::ALL {
            for role_pool in bank.pool(t) {
                for lvl in ExperienceLevel::ALL {
                    for q in role_pool.levels.at(lvl) {
                        if chosen.len() >= count {
                            break 'broaden;
                        }
                        let q = q.as_str();
                        if !seen.contains(q.trim()) && used.insert(q) {
                            chosen.push(q);
                        }
                    }
                }
            }
        }
    }

    chosen.shuffle(rng);
    chosen.into_iter().map(|q| q.to_string()).collect()
}

/// Builds the priority-ordered candidate tiers. Tiers may overlap and may
/// contain duplicates; the caller deduplicates at selection time.
fn gather_priority_tiers<'a>(
    bank: &'a QuestionBank,
    interview_type: InterviewType,
    role: &str,
    level: ExperienceLevel,
) -> Vec<Vec<&'a str>> {
    let pool = bank.pool(interview_type);
    let mut tiers: Vec<Vec<&'a str>> = Vec::with_capacity(4);

    let requested = pool.iter().find(|rp| rp.role == role);

    // a) exact (role, level) bucket
    tiers.push(match requested {
        Some(rp) => rp.levels.at(level).iter().map(String::as_str).collect(),
        None => Vec::new(),
    });

    // b) same role, other levels
    tiers.push(match requested {
        Some(rp) => ExperienceLevel::ALL
            .iter()
            .filter(|l| **l != level)
            .flat_map(|l| rp.levels.at(*l).iter().map(String::as_str))
            .collect(),
        None => Vec::new(),
    });

    // c) other roles at the same level
    tiers.push(
        pool.iter()
            .filter(|rp| rp.role != role)
            .flat_map(|rp| rp.levels.at(level).iter().map(String::as_str))
            .collect(),
    );

    // d) role-agnostic default bucket at the same level
    tiers.push(match pool.iter().find(|rp| rp.role == DEFAULT_ROLE) {
        Some(rp) if role != DEFAULT_ROLE => {
            rp.levels.at(level).iter().map(String::as_str).collect()
        }
        _ => Vec::new(),
    });

    tiers
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn bank() -> QuestionBank {
        QuestionBank::builtin()
    }

    fn se_bucket(bank: &QuestionBank, level: ExperienceLevel) -> Vec<String> {
        bank.pool(InterviewType::Technical)
            .iter()
            .find(|rp| rp.role == "Software Engineer")
            .unwrap()
            .levels
            .at(level)
            .to_vec()
    }

    #[test]
    fn test_fresh_user_draws_from_exact_bucket_first() {
        let bank = bank();
        let mid: HashSet<String> = se_bucket(&bank, ExperienceLevel::Mid).into_iter().collect();

        let picked = select_from_bank(
            &bank,
            InterviewType::Technical,
            "Software Engineer",
            ExperienceLevel::Mid,
            &HashSet::new(),
            3,
            &mut rng(),
        );

        assert_eq!(picked.len(), 3);
        for q in &picked {
            assert!(mid.contains(q), "expected a mid-level SE question, got: {q}");
        }
    }

    #[test]
    fn test_exhausted_bucket_falls_back_to_same_role_other_levels() {
        let bank = bank();
        let seen: HashSet<String> = se_bucket(&bank, ExperienceLevel::Mid).into_iter().collect();
        let same_role_rest: HashSet<String> = se_bucket(&bank, ExperienceLevel::Entry)
            .into_iter()
            .chain(se_bucket(&bank, ExperienceLevel::Senior))
            .collect();

        let picked = select_from_bank(
            &bank,
            InterviewType::Technical,
            "Software Engineer",
            ExperienceLevel::Mid,
            &seen,
            3,
            &mut rng(),
        );

        assert_eq!(picked.len(), 3);
        for q in &picked {
            assert!(
                same_role_rest.contains(q),
                "expected an SE entry/senior question before other roles, got: {q}"
            );
        }
    }

    #[test]
    fn test_no_duplicates_and_length_capped() {
        let bank = bank();
        let picked = select_from_bank(
            &bank,
            InterviewType::Technical,
            "Software Engineer",
            ExperienceLevel::Mid,
            &HashSet::new(),
            100,
            &mut rng(),
        );

        // Broaden pass pulls in the whole universe, but never past its size
        assert_eq!(picked.len(), bank.total_questions());
        let unique: HashSet<&String> = picked.iter().collect();
        assert_eq!(unique.len(), picked.len(), "duplicate question returned");
    }

    #[test]
    fn test_never_returns_seen_questions() {
        let bank = bank();
        let seen: HashSet<String> = se_bucket(&bank, ExperienceLevel::Mid)
            .into_iter()
            .take(3)
            .collect();

        let picked = select_from_bank(
            &bank,
            InterviewType::Technical,
            "Software Engineer",
            ExperienceLevel::Mid,
            &seen,
            50,
            &mut rng(),
        );

        for q in &picked {
            assert!(!seen.contains(q), "seen question returned: {q}");
        }
    }

    #[test]
    fn test_fully_seen_universe_returns_empty() {
        let bank = bank();
        let mut seen = HashSet::new();
        for t in InterviewType::ALL {
            for rp in bank.pool(t) {
                for lvl in ExperienceLevel::ALL {
                    for q in rp.levels.at(lvl) {
                        seen.insert(q.clone());
                    }
                }
            }
        }

        let picked = select_from_bank(
            &bank,
            InterviewType::Behavioral,
            "Software Engineer",
            ExperienceLevel::Entry,
            &seen,
            5,
            &mut rng(),
        );
        assert!(picked.is_empty());
    }

    #[test]
    fn test_unknown_role_fills_from_other_roles() {
        let bank = bank();
        let picked = select_from_bank(
            &bank,
            InterviewType::Technical,
            "Astronaut",
            ExperienceLevel::Entry,
            &HashSet::new(),
            4,
            &mut rng(),
        );
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_broaden_crosses_interview_types() {
        let bank = bank();
        // Leadership holds 9 questions total; asking for 12 must cross types
        let picked = select_from_bank(
            &bank,
            InterviewType::Leadership,
            "Product Manager",
            ExperienceLevel::Senior,
            &HashSet::new(),
            12,
            &mut rng(),
        );
        assert_eq!(picked.len(), 12);
        let unique: HashSet<&String> = picked.iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_default_bucket_reachable_for_unlisted_behavioral_role() {
        let bank = bank();
        // "Designer" has no behavioral bucket; the default role must appear
        // among candidates once other roles at the level run dry.
        let picked = select_from_bank(
            &bank,
            InterviewType::Behavioral,
            "Designer",
            ExperienceLevel::Entry,
            &HashSet::new(),
            7,
            &mut rng(),
        );
        assert!(picked
            .iter()
            .any(|q| q == "Tell me about a time you learned a new skill quickly."));
    }
}
