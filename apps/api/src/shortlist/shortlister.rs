//! Shortlister — filters analyzed candidates against a threshold and sorts
//! them by match score.

use serde::{Deserialize, Serialize};

use crate::screening::models::{CandidateRecord, Recommendation};

/// Read-only projection of a candidate that cleared the threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub name: String,
    pub contact: String,
    pub match_percentage: u8,
    pub strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendation: Recommendation,
}

/// Builds the shortlist from accumulated candidate records.
///
/// Error records are skipped. Kept records are sorted descending by
/// match percentage; the sort is stable, so ties preserve input order.
/// Empty input or an empty result after filtering is valid output.
pub fn shortlist(records: &[CandidateRecord], threshold: u8) -> Vec<ShortlistEntry> {
    let mut entries: Vec<ShortlistEntry> = records
        .iter()
        .filter(|record| !record.is_error())
        .filter_map(|record| {
            let analysis = record.analysis.as_ref()?;
            if analysis.overall_match < threshold {
                return None;
            }
            Some(ShortlistEntry {
                name: record.candidate_name.clone(),
                contact: record
                    .candidate_email
                    .clone()
                    .unwrap_or_else(|| analysis.contact_info.clone()),
                match_percentage: analysis.overall_match,
                strengths: analysis.strengths.clone(),
                missing_skills: analysis.missing_skills.clone(),
                recommendation: analysis.recommendation,
            })
        })
        .collect();

    // Vec::sort_by_key is stable — equal scores keep their input order.
    entries.sort_by_key(|entry| std::cmp::Reverse(entry.match_percentage));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::models::CandidateAnalysis;

    fn analysis(name: &str, overall: u8) -> CandidateAnalysis {
        CandidateAnalysis {
            candidate_name: name.to_string(),
            contact_info: format!("{}@example.com", name.to_lowercase()),
            skills: vec![],
            experience: vec![],
            education: vec![],
            certifications: vec![],
            skill_match: overall,
            experience_match: overall,
            qualification_match: overall,
            overall_match: overall,
            matched_skills: vec![],
            missing_skills: vec!["kubernetes".to_string()],
            strengths: vec!["systems background".to_string()],
            areas_for_improvement: vec![],
            recommendation: Recommendation::FurtherReview,
            best_effort: false,
        }
    }

    fn record(name: &str, overall: u8) -> CandidateRecord {
        CandidateRecord {
            source: format!("{name}.pdf"),
            candidate_name: name.to_string(),
            candidate_email: None,
            analysis: Some(analysis(name, overall)),
            error: None,
        }
    }

    fn error_record(name: &str) -> CandidateRecord {
        CandidateRecord {
            source: format!("{name}.pdf"),
            candidate_name: name.to_string(),
            candidate_email: None,
            analysis: None,
            error: Some("model call failed".to_string()),
        }
    }

    #[test]
    fn test_empty_input_is_empty_output_for_any_threshold() {
        for threshold in [0, 50, 100] {
            assert!(shortlist(&[], threshold).is_empty());
        }
    }

    #[test]
    fn test_filters_below_threshold() {
        let records = vec![record("Alice", 85), record("Bob", 60), record("Cara", 70)];
        let entries = shortlist(&records, 70);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Cara"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let records = vec![record("Edge", 70)];
        assert_eq!(shortlist(&records, 70).len(), 1);
    }

    #[test]
    fn test_sorts_descending_stable_on_ties() {
        let records = vec![
            record("First70", 70),
            record("Top", 90),
            record("Second70", 70),
        ];
        let entries = shortlist(&records, 0);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Top", "First70", "Second70"]);
    }

    #[test]
    fn test_error_records_are_skipped() {
        let records = vec![error_record("Broken"), record("Alice", 95)];
        let entries = shortlist(&records, 0);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Alice");
    }

    #[test]
    fn test_idempotent_on_identical_input() {
        let records = vec![record("Alice", 85), record("Bob", 85), record("Cara", 92)];

        let first = shortlist(&records, 80);
        let second = shortlist(&records, 80);

        let names = |entries: &[ShortlistEntry]| -> Vec<String> {
            entries.iter().map(|e| e.name.clone()).collect()
        };
        assert_eq!(names(&first), names(&second));
    }

    #[test]
    fn test_explicit_email_wins_over_extracted_contact() {
        let mut r = record("Alice", 85);
        r.candidate_email = Some("alice@corp.example".to_string());
        let entries = shortlist(&[r], 0);

        assert_eq!(entries[0].contact, "alice@corp.example");
    }
}
