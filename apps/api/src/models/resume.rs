/// Placeholder used when the candidate's name cannot be read from the upload.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Placeholder used when no e-mail address is found in the resume text.
pub const UNKNOWN_EMAIL: &str = "N/A";

/// A candidate resume reduced to plain text. Built once per analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub raw_text: String,
}

impl ResumeRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            raw_text: raw_text.into(),
        }
    }
}
