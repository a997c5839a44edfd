use crate::filter::project;
use crate::view_model::{format_date, AppViewModel, ApplicationRowView, StatusCounts};
use crate::{ApplicationStore, DeletionFlow, StatusFilter, StoreError};

/// Everything the session owns: the store plus UI-facing transient state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) store: ApplicationStore,
    pub(crate) deletion: DeletionFlow,
    pub(crate) filter: StatusFilter,
    pub(crate) last_error: Option<StoreError>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ApplicationStore {
        &self.store
    }

    pub fn deletion(&self) -> &DeletionFlow {
        &self.deletion
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    /// Error from the most recent rejected command, cleared by the next accepted one.
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let rows = project(self.store.list(), self.filter)
            .into_iter()
            .map(|app| ApplicationRowView {
                id: app.id.clone(),
                company: app.company.clone(),
                title: app.title.clone(),
                date: app.date.clone(),
                date_display: format_date(&app.date),
                link: app.link.clone(),
                notes: app.notes.clone(),
                status: app.status,
            })
            .collect();

        AppViewModel {
            ready: self.store.is_ready(),
            filter: self.filter,
            rows,
            total_count: self.store.len(),
            counts: StatusCounts::tally(self.store.list()),
            pending_deletion: self.deletion.pending().cloned(),
            last_error: self.last_error.as_ref().map(ToString::to_string),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
