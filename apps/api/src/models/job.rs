use sqlx::FromRow;

/// The columns of the `jobs` table the pipeline reads.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub experience: String,
    pub description: String,
    pub skills_required: Vec<String>,
}

/// A job posting as seen by the analysis pipeline. Read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub experience_level: String,
    pub description: String,
    /// Catalog order is preserved when rendered into prompts.
    pub required_skills: Vec<String>,
}

impl From<JobRow> for JobPosting {
    fn from(row: JobRow) -> Self {
        Self {
            id: row.id,
            title: row.job_title,
            company: row.company,
            location: row.location,
            employment_type: row.job_type,
            experience_level: row.experience,
            description: row.description,
            required_skills: row.skills_required,
        }
    }
}
