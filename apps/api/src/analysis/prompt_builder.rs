//! Prompt Builder: renders one resume + job pair into the matching prompt.
//!
//! Pure and deterministic: the same request always yields byte-identical text.
//! Resume text is passed through whole, however long.

use crate::analysis::prompts::{EMPLOYMENT_TYPES, FREE_TEXT_WORD_LIMIT, MATCH_PROMPT_TEMPLATE};
use crate::models::job::JobPosting;
use crate::models::resume::ResumeRecord;

/// One resume paired with one job. Lives for a single pipeline pass.
#[derive(Debug, Clone, Copy)]
pub struct MatchRequest<'a> {
    pub resume: &'a ResumeRecord,
    pub job: &'a JobPosting,
}

pub fn build_prompt(request: &MatchRequest<'_>) -> String {
    let MatchRequest { resume, job } = *request;

    let employment_types = EMPLOYMENT_TYPES
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let word_limit = FREE_TEXT_WORD_LIMIT.to_string();
    let skills = job.required_skills.join(", ");

    fill_template(
        MATCH_PROMPT_TEMPLATE,
        &[
            ("employment_types", employment_types.as_str()),
            ("word_limit", word_limit.as_str()),
            ("resume_name", resume.name.as_str()),
            ("resume_email", resume.email.as_str()),
            ("resume_text", resume.raw_text.as_str()),
            ("job_title", job.title.as_str()),
            ("job_company", job.company.as_str()),
            ("job_location", job.location.as_str()),
            ("job_type", job.employment_type.as_str()),
            ("job_experience", job.experience_level.as_str()),
            ("job_description", job.description.as_str()),
            ("job_skills", skills.as_str()),
        ],
    )
}

/// Substitutes `{key}` tokens in a single left-to-right pass.
///
/// Substituted values are never rescanned, so resume or job text containing
/// `{job_title}`-like tokens comes through verbatim. Braces that do not form a
/// known key (the JSON schema, for one) are copied as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
