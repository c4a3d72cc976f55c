//! Skill-overlap scorer — the deterministic secondary scoring path.
//!
//! Unlike the LLM-backed scores this is a pure function: same inputs, same
//! outputs, every time. It is used where no LLM analysis is in play and it
//! never overwrites an LLM-produced score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Neutral score reported when the JD lists no required skills.
const NEUTRAL_SCORE: u8 = 50;

/// Result of comparing a candidate's skills against a JD's required skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOverlap {
    /// Required skills the candidate has, in required-list order.
    pub matched: Vec<String>,
    /// Required skills the candidate lacks, in required-list order.
    pub missing: Vec<String>,
    /// round(100 · |matched| / |required|), or 50 when nothing is required.
    pub percentage: u8,
}

/// Computes the case-normalized overlap between candidate and required
/// skills. Duplicates within either list count once.
pub fn score_skill_overlap(candidate_skills: &[String], required_skills: &[String]) -> SkillOverlap {
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut seen = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required_skills {
        let normalized = skill.trim().to_lowercase();
        if normalized.is_empty() || !seen.insert(normalized.clone()) {
            continue;
        }
        if candidate.contains(&normalized) {
            matched.push(normalized);
        } else {
            missing.push(normalized);
        }
    }

    let required_count = matched.len() + missing.len();
    let percentage = if required_count > 0 {
        ((100.0 * matched.len() as f64) / required_count as f64).round() as u8
    } else {
        NEUTRAL_SCORE
    };

    SkillOverlap {
        matched,
        missing,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap_rounds_percentage() {
        let overlap = score_skill_overlap(
            &skills(&["python", "sql"]),
            &skills(&["python", "sql", "aws"]),
        );

        assert_eq!(overlap.matched, skills(&["python", "sql"]));
        assert_eq!(overlap.missing, skills(&["aws"]));
        // round(100 * 2 / 3) = 67
        assert_eq!(overlap.percentage, 67);
    }

    #[test]
    fn test_empty_required_set_is_neutral() {
        let overlap = score_skill_overlap(&skills(&["python", "rust"]), &[]);
        assert_eq!(overlap.percentage, 50);
        assert!(overlap.matched.is_empty());
        assert!(overlap.missing.is_empty());

        // Regardless of candidate skills.
        let overlap = score_skill_overlap(&[], &[]);
        assert_eq!(overlap.percentage, 50);
    }

    #[test]
    fn test_case_normalization() {
        let overlap = score_skill_overlap(&skills(&["Python", "  SQL "]), &skills(&["python", "sql"]));
        assert_eq!(overlap.percentage, 100);
        assert!(overlap.missing.is_empty());
    }

    #[test]
    fn test_full_miss() {
        let overlap = score_skill_overlap(&skills(&["cobol"]), &skills(&["rust", "go"]));
        assert_eq!(overlap.percentage, 0);
        assert_eq!(overlap.missing, skills(&["rust", "go"]));
    }

    #[test]
    fn test_duplicate_required_skills_count_once() {
        let overlap = score_skill_overlap(
            &skills(&["rust"]),
            &skills(&["Rust", "rust", "go"]),
        );
        assert_eq!(overlap.matched, skills(&["rust"]));
        assert_eq!(overlap.missing, skills(&["go"]));
        assert_eq!(overlap.percentage, 50);
    }

    #[test]
    fn test_determinism_same_inputs_same_outputs() {
        let candidate = skills(&["python", "sql", "spark"]);
        let required = skills(&["python", "aws", "sql"]);

        let first = score_skill_overlap(&candidate, &required);
        for _ in 0..10 {
            assert_eq!(score_skill_overlap(&candidate, &required), first);
        }
    }
}
