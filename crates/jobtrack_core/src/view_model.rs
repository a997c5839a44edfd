use chrono::NaiveDate;

use crate::{ApplicationId, DeletionCandidate, JobApplication, Status, StatusFilter};

const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub ready: bool,
    pub filter: StatusFilter,
    /// Rows matching `filter`, newest first.
    pub rows: Vec<ApplicationRowView>,
    /// Size of the whole collection, regardless of filter.
    pub total_count: usize,
    pub counts: StatusCounts,
    pub pending_deletion: Option<DeletionCandidate>,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRowView {
    pub id: ApplicationId,
    pub company: String,
    pub title: String,
    pub date: String,
    pub date_display: String,
    pub link: Option<String>,
    pub notes: Option<String>,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub applied: usize,
    pub interviewing: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally(applications: &[JobApplication]) -> Self {
        let mut counts = Self::default();
        for app in applications {
            *counts.slot_mut(app.status) += 1;
        }
        counts
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Applied => self.applied,
            Status::Interviewing => self.interviewing,
            Status::Offer => self.offer,
            Status::Rejected => self.rejected,
        }
    }

    fn slot_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Applied => &mut self.applied,
            Status::Interviewing => &mut self.interviewing,
            Status::Offer => &mut self.offer,
            Status::Rejected => &mut self.rejected,
        }
    }
}

/// Renders an ISO calendar date as `Jan 5, 2024`; anything unparseable is
/// returned as given.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT) {
        Ok(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
