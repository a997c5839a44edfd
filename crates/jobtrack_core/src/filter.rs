use std::fmt;
use std::str::FromStr;

use crate::{JobApplication, ParseStatusError, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, application: &JobApplication) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => application.status == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.pad("All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Read-only projection of `applications`, order preserved.
pub fn project(applications: &[JobApplication], filter: StatusFilter) -> Vec<&JobApplication> {
    applications
        .iter()
        .filter(|application| filter.matches(application))
        .collect()
}
