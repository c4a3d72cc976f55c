//! Interview invitation drafting.
//!
//! The LLM writes the body; when the model call fails, a deterministic
//! template built from the same fields takes over. Drafting mirrors the
//! fallback extractor's reliability contract — it never fails.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::scheduling::prompts::{EMAIL_DRAFT_PROMPT_TEMPLATE, EMAIL_DRAFT_SYSTEM};
use crate::scheduling::slots::propose_slots;
use crate::screening::models::JobDescriptionSummary;
use crate::shortlist::shortlister::ShortlistEntry;

/// Placeholder highlights used when a candidate has no recorded strengths.
const GENERIC_HIGHLIGHTS: [&str; 2] = ["qualifications", "experience"];

/// Max strength highlights woven into the invitation.
const MAX_HIGHLIGHTS: usize = 3;

/// A generated interview invitation. Regeneration for the same candidate
/// overwrites any prior draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewEmailDraft {
    pub candidate_name: String,
    pub candidate_email: String,
    pub subject: String,
    pub body: String,
    pub proposed_slots: Vec<String>,
    /// "llm" or "template" — which path produced the body.
    pub generated_by: String,
}

/// Drafts an invitation for a shortlisted candidate.
///
/// Slots are proposed starting the day after `today`. On any model failure
/// the deterministic template is used instead; this function cannot fail.
pub async fn draft_email(
    candidate: &ShortlistEntry,
    jd: &JobDescriptionSummary,
    company: &str,
    today: NaiveDate,
    llm: &LlmClient,
) -> InterviewEmailDraft {
    let slots = propose_slots(today);
    let highlights = highlight_phrase(&candidate.strengths);
    let subject = format!(
        "Interview Invitation: {} Position at {}",
        jd.job_title, company
    );

    let prompt = EMAIL_DRAFT_PROMPT_TEMPLATE
        .replace("{candidate_name}", &candidate.name)
        .replace("{job_title}", &jd.job_title)
        .replace("{company}", company)
        .replace("{highlights}", &highlights)
        .replace("{slots}", &bullet_list(&slots));

    let (body, generated_by) = match llm.call_text(&prompt, EMAIL_DRAFT_SYSTEM).await {
        Ok(text) => (text, "llm"),
        Err(e) => {
            warn!("Invitation drafting fell back to the template: {e}");
            (
                template_body(&candidate.name, &jd.job_title, company, &highlights, &slots),
                "template",
            )
        }
    };

    InterviewEmailDraft {
        candidate_name: candidate.name.clone(),
        candidate_email: candidate.contact.clone(),
        subject,
        body,
        proposed_slots: slots,
        generated_by: generated_by.to_string(),
    }
}

/// First 1–3 strengths joined for prose, or the generic placeholder pair.
fn highlight_phrase(strengths: &[String]) -> String {
    let picked: Vec<&str> = strengths
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(String::as_str)
        .collect();
    if picked.is_empty() {
        GENERIC_HIGHLIGHTS.join(" and ")
    } else {
        picked.join(", ")
    }
}

fn bullet_list(slots: &[String]) -> String {
    slots
        .iter()
        .map(|s| format!("  - {s}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deterministic invitation body built directly from the draft fields.
fn template_body(
    candidate_name: &str,
    job_title: &str,
    company: &str,
    highlights: &str,
    slots: &[String],
) -> String {
    format!(
        "Dear {candidate_name},\n\n\
        We are pleased to inform you that your application for the {job_title} \
        position at {company} has been shortlisted. Your {highlights} stood out \
        to our team, and we would like to invite you to an initial 30-minute \
        video interview to discuss your background further.\n\n\
        Proposed interview slots:\n{slot_lines}\n\n\
        Please reply to this email confirming the slot that works best for you. \
        If none of the proposed times are convenient, let us know your \
        availability and we will do our best to accommodate it.\n\n\
        We look forward to speaking with you.\n\n\
        Best regards,\n\
        {company} Recruitment Team",
        slot_lines = bullet_list(slots),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_phrase_takes_first_three() {
        let strengths: Vec<String> = ["Rust", "Kafka", "Leadership", "SQL"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(highlight_phrase(&strengths), "Rust, Kafka, Leadership");
    }

    #[test]
    fn test_highlight_phrase_empty_uses_generic_pair() {
        assert_eq!(highlight_phrase(&[]), "qualifications and experience");
    }

    #[test]
    fn test_template_body_contains_all_fields() {
        let slots = vec![
            "Monday, August 10, 2026 at 10:00 AM".to_string(),
            "Tuesday, August 11, 2026 at 2:00 PM".to_string(),
        ];
        let body = template_body(
            "Jane Doe",
            "Staff Engineer",
            "Acme",
            "systems design, mentoring",
            &slots,
        );

        assert!(body.contains("Jane Doe"));
        assert!(body.contains("Staff Engineer"));
        assert!(body.contains("Acme"));
        assert!(body.contains("systems design, mentoring"));
        for slot in &slots {
            assert!(body.contains(slot), "missing slot: {slot}");
        }
    }

    #[test]
    fn test_template_body_is_deterministic() {
        let slots = vec!["Monday, August 10, 2026 at 10:00 AM".to_string()];
        let a = template_body("Jane", "Engineer", "Acme", "experience", &slots);
        let b = template_body("Jane", "Engineer", "Acme", "experience", &slots);
        assert_eq!(a, b);
    }
}
