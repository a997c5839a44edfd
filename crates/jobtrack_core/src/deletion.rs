use crate::{ApplicationId, ApplicationStore};

/// Record awaiting confirmation before it is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionCandidate {
    pub id: ApplicationId,
    /// Display label; empty when the id was not found at request time.
    pub label: String,
}

/// Two-step guard in front of [`ApplicationStore::remove`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeletionFlow {
    #[default]
    Idle,
    PendingConfirmation(DeletionCandidate),
}

impl DeletionFlow {
    /// Replaces any pending candidate. Unknown ids are accepted with an empty label.
    pub fn request(&mut self, id: ApplicationId, store: &ApplicationStore) {
        let label = store.get(&id).map(|app| app.label()).unwrap_or_default();
        *self = DeletionFlow::PendingConfirmation(DeletionCandidate { id, label });
    }

    /// Takes the pending candidate and returns to idle. The caller performs
    /// the removal.
    pub fn confirm(&mut self) -> Option<DeletionCandidate> {
        match std::mem::take(self) {
            DeletionFlow::PendingConfirmation(candidate) => Some(candidate),
            DeletionFlow::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DeletionFlow::Idle;
    }

    pub fn pending(&self) -> Option<&DeletionCandidate> {
        match self {
            DeletionFlow::PendingConfirmation(candidate) => Some(candidate),
            DeletionFlow::Idle => None,
        }
    }
}
