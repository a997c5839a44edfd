use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Opaque identifier of a job application, assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value for ids issued from a millisecond clock.
    pub(crate) fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status {0:?} (expected Applied, Interviewing, Offer or Rejected)")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// One tracked job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub company: String,
    pub title: String,
    pub date: String,
    pub link: Option<String>,
    pub notes: Option<String>,
    pub status: Status,
}

impl JobApplication {
    /// Short human label, used by the deletion prompt.
    pub fn label(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}

/// Required fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Company,
    Title,
    Date,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Company => "company",
            Field::Title => "title",
            Field::Date => "date",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing or empty")]
    MissingField(Field),
}

/// Raw form input for a new application. Every field is untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub company: String,
    pub title: String,
    pub date: String,
    pub link: String,
    pub notes: String,
}

/// A draft that passed validation, with all fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub company: String,
    pub title: String,
    pub date: String,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl Draft {
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        let company = required(&self.company, Field::Company)?;
        let title = required(&self.title, Field::Title)?;
        let date = required(&self.date, Field::Date)?;
        Ok(ValidDraft {
            company,
            title,
            date,
            link: optional(&self.link),
            notes: optional(&self.notes),
        })
    }
}

fn required(raw: &str, field: Field) -> Result<String, ValidationError> {
    optional(raw).ok_or(ValidationError::MissingField(field))
}

/// Trims `raw`; empty text means absent.
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
