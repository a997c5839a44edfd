use crate::{ApplicationId, Draft, JobApplication, Status, StatusFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Collection loaded from storage at startup.
    Hydrated(Vec<JobApplication>),
    /// User submitted the "add application" form.
    ApplicationSubmitted { draft: Draft, submitted_at_ms: u64 },
    /// User picked a new status for a record.
    StatusChanged { id: ApplicationId, status: Status },
    /// User asked to delete a record; needs confirmation.
    DeleteRequested { id: ApplicationId },
    DeleteConfirmed,
    DeleteCancelled,
    /// User switched the status filter.
    FilterChanged(StatusFilter),
    NoOp,
}
