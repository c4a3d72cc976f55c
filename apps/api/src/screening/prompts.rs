// All LLM prompt constants for the Screening module.
// Both calls use llm_client::prompts::JSON_ONLY_SYSTEM as their system
// prompt; the role framing sits at the top of each template.
//
// The JSON key names here are load-bearing: the fallback extractor recovers
// fields by these exact names when the model's output fails strict parsing.

/// JD summarization prompt template. Replace `{jd_text}` before sending.
pub const JD_SUMMARY_PROMPT_TEMPLATE: &str = r#"Act as an experienced technical recruiter. Analyze the following job description and extract its key elements.

Return a JSON object with this EXACT structure (no extra fields):
{
  "JobTitle": "title of the position",
  "Department": "department or team, if stated",
  "Location": "location or remote policy",
  "EmploymentType": "full-time / part-time / contract",
  "RequiredSkills": ["skill1", "skill2"],
  "RequiredExperience": "X years in...",
  "RequiredQualifications": ["qualification1", "qualification2"],
  "Responsibilities": ["responsibility1", "responsibility2"],
  "SalaryRange": "stated range, or 'Not disclosed'",
  "PreferredSkills": ["nice-to-have skill1", "nice-to-have skill2"]
}

Every value must be a string or an array of strings. Use "Not specified"
for scalar fields the job description does not state.

JOB DESCRIPTION:
{jd_text}"#;

/// Resume analysis prompt template.
/// Replace `{resume_text}` and `{jd_summary}` before sending.
pub const CV_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Act as a highly experienced ATS (Applicant Tracking System) specializing in software engineering, data science, data analytics, and big data roles. Evaluate the resume against the summarized job requirements. Consider that the job market is competitive and provide insights for improvement.

RESUME:
{resume_text}

JOB REQUIREMENTS:
{jd_summary}

Return a JSON object with this EXACT structure (no extra fields):
{
  "CandidateName": "Full Name",
  "ContactInfo": "email address, phone number",
  "Skills": ["skill1", "skill2"],
  "Experience": ["role at company, duration", "..."],
  "Education": ["degree, institution, year", "..."],
  "Certifications": ["certification1", "certification2"],
  "SkillMatch": "X%",
  "ExperienceMatch": "X%",
  "QualificationMatch": "X%",
  "OverallMatch": "X%",
  "MatchedSkills": ["required skill the candidate has", "..."],
  "MissingSkills": ["required skill the candidate lacks", "..."],
  "Strengths": ["strength1", "strength2"],
  "AreasForImprovement": ["area1", "area2"],
  "Recommendation": "shortlist, reject, or further review"
}

All four match values are integer percentages between 0% and 100%.
"ContactInfo" must be a single flat string — never a nested object."#;
