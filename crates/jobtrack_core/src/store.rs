use std::collections::HashSet;

use jobtrack_logging::{jobtrack_debug, jobtrack_info, jobtrack_warn};
use thiserror::Error;

use crate::{ApplicationId, Draft, JobApplication, Status, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorePhase {
    #[default]
    Uninitialized,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("store is not hydrated yet")]
    NotReady,
    #[error("store was already hydrated")]
    AlreadyHydrated,
}

/// Authoritative in-memory collection of applications, newest first.
///
/// Mutations are rejected with [`StoreError::NotReady`] until [`hydrate`]
/// has run, so nothing written before hydration can be overwritten by it.
///
/// [`hydrate`]: ApplicationStore::hydrate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationStore {
    phase: StorePhase,
    applications: Vec<JobApplication>,
    last_issued: u64,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StorePhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == StorePhase::Ready
    }

    /// One-time population from storage. Duplicate ids keep their first record.
    pub fn hydrate(&mut self, initial: Vec<JobApplication>) -> Result<(), StoreError> {
        if self.is_ready() {
            return Err(StoreError::AlreadyHydrated);
        }

        let mut seen = HashSet::with_capacity(initial.len());
        let mut applications = Vec::with_capacity(initial.len());
        for application in initial {
            if seen.insert(application.id.clone()) {
                applications.push(application);
            } else {
                jobtrack_warn!("Dropping duplicate application id {} on hydrate", application.id);
            }
        }

        self.last_issued = applications
            .iter()
            .filter_map(|app| app.id.as_millis())
            .max()
            .unwrap_or(0);
        self.applications = applications;
        self.phase = StorePhase::Ready;
        jobtrack_info!("Store hydrated with {} applications", self.applications.len());
        Ok(())
    }

    /// Validates `draft`, assigns a fresh id derived from `now_ms` and prepends
    /// the new record with status [`Status::Applied`].
    pub fn add(&mut self, draft: &Draft, now_ms: u64) -> Result<ApplicationId, StoreError> {
        self.ensure_ready()?;
        let valid = draft.validate()?;

        let id = self.issue_id(now_ms);
        self.applications.insert(
            0,
            JobApplication {
                id: id.clone(),
                company: valid.company,
                title: valid.title,
                date: valid.date,
                link: valid.link,
                notes: valid.notes,
                status: Status::Applied,
            },
        );
        Ok(id)
    }

    /// Returns `Ok(false)` when no record has `id`.
    pub fn set_status(&mut self, id: &ApplicationId, status: Status) -> Result<bool, StoreError> {
        self.ensure_ready()?;
        match self.applications.iter_mut().find(|app| &app.id == id) {
            Some(app) => {
                app.status = status;
                Ok(true)
            }
            None => {
                jobtrack_debug!("set_status ignored: no application with id {}", id);
                Ok(false)
            }
        }
    }

    pub fn remove(&mut self, id: &ApplicationId) -> Result<Option<JobApplication>, StoreError> {
        self.ensure_ready()?;
        match self.applications.iter().position(|app| &app.id == id) {
            Some(index) => Ok(Some(self.applications.remove(index))),
            None => {
                jobtrack_debug!("remove ignored: no application with id {}", id);
                Ok(None)
            }
        }
    }

    pub fn list(&self) -> &[JobApplication] {
        &self.applications
    }

    pub fn get(&self, id: &ApplicationId) -> Option<&JobApplication> {
        self.applications.iter().find(|app| &app.id == id)
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    fn ensure_ready(&self) -> Result<(), StoreError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(StoreError::NotReady)
        }
    }

    // Strictly increasing, so a stalled or rewound clock still yields unique ids.
    fn issue_id(&mut self, now_ms: u64) -> ApplicationId {
        let Some(next) = self.last_issued.checked_add(1) else {
            return self.suffixed_id(now_ms);
        };
        let mut candidate = now_ms.max(next);
        loop {
            let id = ApplicationId::new(candidate.to_string());
            if self.get(&id).is_none() {
                self.last_issued = candidate;
                return id;
            }
            match candidate.checked_add(1) {
                Some(next) => candidate = next,
                None => return self.suffixed_id(now_ms),
            }
        }
    }

    // Numeric ids are exhausted. At most `len() + 1` suffixes are tried.
    fn suffixed_id(&self, now_ms: u64) -> ApplicationId {
        jobtrack_warn!("Numeric id space exhausted, issuing suffixed id");
        let mut suffix = 1usize;
        loop {
            let id = ApplicationId::new(format!("{now_ms}-{suffix}"));
            if self.get(&id).is_none() {
                return id;
            }
            suffix += 1;
        }
    }
}
