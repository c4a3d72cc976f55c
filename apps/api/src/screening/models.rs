//! Typed records produced by the screening pipeline, plus their extraction
//! schemas.
//!
//! The LLM-facing JSON keys stay PascalCase ("JobTitle", "CandidateName", …)
//! because that is what the prompts request and what the fallback extractor
//! greps for; the typed structs serialize snake_case on the API surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extraction::schema::{FieldSpec, Record};

// ────────────────────────────────────────────────────────────────────────────
// Job description summary
// ────────────────────────────────────────────────────────────────────────────

/// Structured summary of a job description. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDescriptionSummary {
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub required_skills: Vec<String>,
    pub required_experience: String,
    pub required_qualifications: Vec<String>,
    pub responsibilities: Vec<String>,
    pub salary_range: String,
    pub preferred_skills: Vec<String>,
}

impl JobDescriptionSummary {
    /// Extraction schema — one (name, kind, default) triple per field.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("JobTitle", "Not specified"),
        FieldSpec::scalar("Department", "Not specified"),
        FieldSpec::scalar("Location", "Not specified"),
        FieldSpec::scalar("EmploymentType", "Not specified"),
        FieldSpec::list("RequiredSkills", &[]),
        FieldSpec::scalar("RequiredExperience", "Not specified"),
        FieldSpec::list("RequiredQualifications", &[]),
        FieldSpec::list("Responsibilities", &[]),
        FieldSpec::scalar("SalaryRange", "Not disclosed"),
        FieldSpec::list("PreferredSkills", &[]),
    ];

    pub fn from_record(record: &Record) -> Self {
        Self {
            job_title: get_str(record, "JobTitle"),
            department: get_str(record, "Department"),
            location: get_str(record, "Location"),
            employment_type: get_str(record, "EmploymentType"),
            required_skills: get_list(record, "RequiredSkills"),
            required_experience: get_str(record, "RequiredExperience"),
            required_qualifications: get_list(record, "RequiredQualifications"),
            responsibilities: get_list(record, "Responsibilities"),
            salary_range: get_str(record, "SalaryRange"),
            preferred_skills: get_list(record, "PreferredSkills"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate analysis
// ────────────────────────────────────────────────────────────────────────────

/// Hiring recommendation classified out of the model's free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Shortlist,
    Reject,
    FurtherReview,
    Unknown,
}

impl Recommendation {
    /// Single pure mapping from free text to the closed enum.
    /// Case-insensitive substring rules, first hit wins:
    /// "shortlist", then "reject", then "review".
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("shortlist") {
            Recommendation::Shortlist
        } else if lowered.contains("reject") {
            Recommendation::Reject
        } else if lowered.contains("review") {
            Recommendation::FurtherReview
        } else {
            Recommendation::Unknown
        }
    }
}

/// Structured analysis of one resume against one JD. Never mutated after
/// creation; lives for one analysis session.
///
/// Invariant: all four match percentages are integers in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub candidate_name: String,
    pub contact_info: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub skill_match: u8,
    pub experience_match: u8,
    pub qualification_match: u8,
    pub overall_match: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub recommendation: Recommendation,
    /// True when the fallback extractor produced the record.
    pub best_effort: bool,
}

impl CandidateAnalysis {
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::scalar("CandidateName", "Unknown candidate"),
        FieldSpec::scalar("ContactInfo", "Not provided"),
        FieldSpec::list("Skills", &[]),
        FieldSpec::list("Experience", &[]),
        FieldSpec::list("Education", &[]),
        FieldSpec::list("Certifications", &[]),
        FieldSpec::scalar("SkillMatch", "0"),
        FieldSpec::scalar("ExperienceMatch", "0"),
        FieldSpec::scalar("QualificationMatch", "0"),
        FieldSpec::scalar("OverallMatch", "0"),
        FieldSpec::list("MatchedSkills", &[]),
        FieldSpec::list("MissingSkills", &[]),
        FieldSpec::list("Strengths", &[]),
        FieldSpec::list("AreasForImprovement", &[]),
        FieldSpec::scalar("Recommendation", "further review"),
    ];

    pub fn from_record(record: &Record, best_effort: bool) -> Self {
        Self {
            candidate_name: get_str(record, "CandidateName"),
            contact_info: get_str(record, "ContactInfo"),
            skills: get_list(record, "Skills"),
            experience: get_list(record, "Experience"),
            education: get_list(record, "Education"),
            certifications: get_list(record, "Certifications"),
            skill_match: parse_match_percentage(&get_str(record, "SkillMatch")),
            experience_match: parse_match_percentage(&get_str(record, "ExperienceMatch")),
            qualification_match: parse_match_percentage(&get_str(record, "QualificationMatch")),
            overall_match: parse_match_percentage(&get_str(record, "OverallMatch")),
            matched_skills: get_list(record, "MatchedSkills"),
            missing_skills: get_list(record, "MissingSkills"),
            strengths: get_list(record, "Strengths"),
            areas_for_improvement: get_list(record, "AreasForImprovement"),
            recommendation: Recommendation::classify(&get_str(record, "Recommendation")),
            best_effort,
        }
    }
}

/// Parses a `"85%"`-style match value into an integer percentage.
/// Malformed values map to 0; values above 100 clamp to 100.
pub fn parse_match_percentage(raw: &str) -> u8 {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<i64>()
        .map(|n| n.clamp(0, 100) as u8)
        .unwrap_or(0)
}

// ────────────────────────────────────────────────────────────────────────────
// Batch records
// ────────────────────────────────────────────────────────────────────────────

/// Per-resume entry accumulated in a session. A failed resume becomes an
/// error record here instead of aborting the rest of the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Uploaded file name.
    pub source: String,
    /// Recruiter-supplied name when given, otherwise the extracted one.
    pub candidate_name: String,
    pub candidate_email: Option<String>,
    pub analysis: Option<CandidateAnalysis>,
    pub error: Option<String>,
}

impl CandidateRecord {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record accessors
// ────────────────────────────────────────────────────────────────────────────

fn get_str(record: &Record, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn get_list(record: &Record, key: &str) -> Vec<String> {
    match record.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::normalizer::{normalize, ParseOutcome};
    use serde_json::json;

    #[test]
    fn test_recommendation_classification() {
        assert_eq!(
            Recommendation::classify("Strongly recommend to SHORTLIST this candidate"),
            Recommendation::Shortlist
        );
        assert_eq!(Recommendation::classify("reject"), Recommendation::Reject);
        assert_eq!(
            Recommendation::classify("Needs further review by the hiring manager"),
            Recommendation::FurtherReview
        );
        assert_eq!(Recommendation::classify("maybe?"), Recommendation::Unknown);
        assert_eq!(Recommendation::classify(""), Recommendation::Unknown);
    }

    #[test]
    fn test_classification_order_shortlist_wins() {
        // "shortlist" is checked before "reject" and "review".
        assert_eq!(
            Recommendation::classify("shortlist rather than reject after review"),
            Recommendation::Shortlist
        );
    }

    #[test]
    fn test_parse_match_percentage() {
        assert_eq!(parse_match_percentage("85%"), 85);
        assert_eq!(parse_match_percentage("85"), 85);
        assert_eq!(parse_match_percentage(" 70 % "), 70);
        assert_eq!(parse_match_percentage("0"), 0);
        assert_eq!(parse_match_percentage("100%"), 100);
    }

    #[test]
    fn test_parse_match_percentage_malformed_is_zero() {
        assert_eq!(parse_match_percentage(""), 0);
        assert_eq!(parse_match_percentage("high"), 0);
        assert_eq!(parse_match_percentage("8o%"), 0);
        assert_eq!(parse_match_percentage("-12%"), 0);
    }

    #[test]
    fn test_parse_match_percentage_clamps_above_100() {
        assert_eq!(parse_match_percentage("140%"), 100);
    }

    #[test]
    fn test_jd_summary_from_fenced_model_output() {
        let raw = "```json\n{\"JobTitle\": \"Data Engineer\", \"RequiredSkills\": [\"Python\", \"SQL\"]}\n```";
        let outcome = normalize(raw, JobDescriptionSummary::FIELDS);
        let record = outcome.record().unwrap();
        let summary = JobDescriptionSummary::from_record(record);

        assert_eq!(summary.job_title, "Data Engineer");
        assert_eq!(summary.required_skills, vec!["Python", "SQL"]);
        assert_eq!(summary.salary_range, "Not disclosed");
    }

    #[test]
    fn test_candidate_analysis_from_degraded_output() {
        let raw = r#"The analysis: {"CandidateName": "Jane Doe", "OverallMatch": "82%",
            "Strengths": ["Rust", "Distributed systems"], "Recommendation": "Shortlist""#;
        let outcome = normalize(raw, CandidateAnalysis::FIELDS);
        assert!(matches!(outcome, ParseOutcome::Fallback { .. }));

        let analysis = CandidateAnalysis::from_record(outcome.record().unwrap(), true);
        assert_eq!(analysis.candidate_name, "Jane Doe");
        assert_eq!(analysis.overall_match, 82);
        assert_eq!(analysis.recommendation, Recommendation::Shortlist);
        assert!(analysis.best_effort);
        // Unrecovered percentages default to "0" and parse to 0.
        assert_eq!(analysis.skill_match, 0);
    }

    #[test]
    fn test_match_percentage_invariant_holds_for_structured_path() {
        let parsed = json!({
            "CandidateName": "Jane",
            "SkillMatch": "250%",
            "OverallMatch": "not-a-number"
        });
        let record = crate::extraction::schema::conform(
            parsed.as_object().unwrap(),
            CandidateAnalysis::FIELDS,
        );
        let analysis = CandidateAnalysis::from_record(&record, false);

        assert_eq!(analysis.skill_match, 100);
        assert_eq!(analysis.overall_match, 0);
    }
}
