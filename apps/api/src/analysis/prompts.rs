// LLM prompt constants for the analysis pipeline.
// Rendered by prompt_builder; placeholders are `{name}` tokens.

/// Allowed values for `employmentType`. "Unknown" must stay last.
pub const EMPLOYMENT_TYPES: [&str; 7] = [
    "Full-time",
    "Part-time",
    "Contract",
    "Internship",
    "Temporary",
    "Freelance",
    "Unknown",
];

/// Maximum words for the free-text fields (`whyFit`, `growthAreas`, `summary`).
pub const FREE_TEXT_WORD_LIMIT: u32 = 70;

/// Resume ↔ job matching prompt.
/// Replace: {employment_types}, {word_limit}, {resume_name}, {resume_email},
///          {resume_text}, {job_title}, {job_company}, {job_location},
///          {job_type}, {job_experience}, {job_description}, {job_skills}
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an AI resume–job matching assistant.
Your response MUST be valid JSON only — no explanations, no markdown, no code fences, no text before or after the JSON object.

NORMALIZATION RULES:
- "employmentType" MUST be exactly one of: {employment_types}. Use "Unknown" when the type cannot be determined.
- "location" MUST be formatted as "City, Country". If the city is unknown use "Country". If the role is remote use "Remote". Otherwise use "Unknown".
- "matchingSkills" and "missingSkills" MUST contain unique entries, ordered from most to least relevant to the job.
- Every numeric field MUST have exactly one decimal place (e.g. 72.5).
- "whyFit", "growthAreas" and "summary" MUST each be at most {word_limit} words.

SCORING:
- "skillsMatch", "experienceMatch" and "educationMatch" are each between 0.0 and 100.0.
- "overall" = round(0.50 * skillsMatch + 0.30 * experienceMatch + 0.20 * educationMatch, 1)

Return a JSON object with this EXACT schema and field order (no extra fields):
{
  "title": "",
  "company": "",
  "location": "",
  "employmentType": "",
  "matchScore": {
    "overall": 0.0,
    "skillsMatch": 0.0,
    "experienceMatch": 0.0,
    "educationMatch": 0.0
  },
  "matchingSkills": [],
  "missingSkills": [],
  "whyFit": "",
  "growthAreas": "",
  "summary": ""
}

Now analyze the following:

RESUME:
Name: {resume_name}
Email: {resume_email}
Text: {resume_text}

JOB:
Title: {job_title}
Company: {job_company}
Location: {job_location}
Type: {job_type}
Experience: {job_experience}
Description: {job_description}
Skills: {job_skills}
"#;
