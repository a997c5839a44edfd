use jobtrack_core::{ApplicationId, Draft, JobApplication, Status};
use serde::{Deserialize, Deserializer, Serialize};

use crate::StorageError;

/// On-disk shape of one record. Every field is text; absent optionals are
/// written as `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredApplication {
    id: String,
    company: String,
    title: String,
    date: String,
    #[serde(default, deserialize_with = "nullable_text")]
    link: String,
    #[serde(default, deserialize_with = "nullable_text")]
    notes: String,
    status: StoredStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum StoredStatus {
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl From<Status> for StoredStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Applied => StoredStatus::Applied,
            Status::Interviewing => StoredStatus::Interviewing,
            Status::Offer => StoredStatus::Offer,
            Status::Rejected => StoredStatus::Rejected,
        }
    }
}

impl From<StoredStatus> for Status {
    fn from(status: StoredStatus) -> Self {
        match status {
            StoredStatus::Applied => Status::Applied,
            StoredStatus::Interviewing => Status::Interviewing,
            StoredStatus::Offer => Status::Offer,
            StoredStatus::Rejected => Status::Rejected,
        }
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<&JobApplication> for StoredApplication {
    fn from(app: &JobApplication) -> Self {
        Self {
            id: app.id.to_string(),
            company: app.company.clone(),
            title: app.title.clone(),
            date: app.date.clone(),
            link: app.link.clone().unwrap_or_default(),
            notes: app.notes.clone().unwrap_or_default(),
            status: app.status.into(),
        }
    }
}

/// Stored records obey the same field rules as freshly added ones.
impl TryFrom<StoredApplication> for JobApplication {
    type Error = StorageError;

    fn try_from(stored: StoredApplication) -> Result<Self, Self::Error> {
        if stored.id.trim().is_empty() {
            return Err(StorageError::EmptyId);
        }
        let valid = Draft {
            company: stored.company,
            title: stored.title,
            date: stored.date,
            link: stored.link,
            notes: stored.notes,
        }
        .validate()?;
        Ok(Self {
            id: ApplicationId::new(stored.id),
            company: valid.company,
            title: valid.title,
            date: valid.date,
            link: valid.link,
            notes: valid.notes,
            status: stored.status.into(),
        })
    }
}

pub fn encode_applications(applications: &[JobApplication]) -> Result<String, StorageError> {
    let stored: Vec<StoredApplication> = applications.iter().map(Into::into).collect();
    Ok(serde_json::to_string(&stored)?)
}

/// Fails unless `raw` is a JSON array whose every element is a well-formed record.
pub fn decode_applications(raw: &str) -> Result<Vec<JobApplication>, StorageError> {
    let stored: Vec<StoredApplication> = serde_json::from_str(raw)?;
    stored.into_iter().map(JobApplication::try_from).collect()
}
