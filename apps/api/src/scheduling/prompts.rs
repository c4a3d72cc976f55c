// LLM prompt constants for invitation drafting.
// The body is free text — no JSON contract here; the deterministic template
// in `email.rs` is the fallback when the model call fails.

/// System prompt for interview invitation drafting.
pub const EMAIL_DRAFT_SYSTEM: &str =
    "You are a recruitment coordinator writing interview invitation emails. \
    The tone is professional yet welcoming, and the email is concise. \
    Respond with the email body only — no subject line, no commentary, \
    no markdown fences.";

/// Invitation prompt template.
/// Replace: {candidate_name}, {job_title}, {company}, {slots}, {highlights}
pub const EMAIL_DRAFT_PROMPT_TEMPLATE: &str = r#"Write an interview invitation email body for {candidate_name},
who applied for the {job_title} position at {company}.

Include these details:
- Greet the candidate by name: {candidate_name}
- The position they applied for: {job_title}
- Mention that their {highlights} stood out to the team
- Available interview slots (offer all of them):
{slots}
- Interview format: initial 30-minute video interview
- A brief overview of the interview process
- Ask the candidate to reply confirming their preferred slot

Sign off on behalf of the {company} Recruitment Team."#;
