use jobtrack_core::JobApplication;
use jobtrack_logging::{jobtrack_error, jobtrack_info, jobtrack_warn};

use crate::{decode_applications, encode_applications, StorageError, StorageSlot};

/// Keeps storage failures away from the store: `load` degrades to an empty
/// collection and `save` logs instead of returning errors.
pub struct PersistenceAdapter<S> {
    slot: S,
}

impl<S: StorageSlot> PersistenceAdapter<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn load(&self) -> Vec<JobApplication> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                jobtrack_info!("No stored applications in {}", self.slot.describe());
                return Vec::new();
            }
            Err(err) => {
                jobtrack_warn!("Failed to read {}: {}", self.slot.describe(), err);
                return Vec::new();
            }
        };

        match decode_applications(&raw) {
            Ok(applications) => {
                jobtrack_info!(
                    "Loaded {} applications from {}",
                    applications.len(),
                    self.slot.describe()
                );
                applications
            }
            Err(err) => {
                jobtrack_warn!(
                    "Ignoring malformed stored applications in {}: {}",
                    self.slot.describe(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Best effort; a failed write leaves the in-memory collection authoritative.
    pub fn save(&self, applications: &[JobApplication]) {
        if let Err(err) = self.try_save(applications) {
            jobtrack_error!(
                "Failed to save {} applications to {}: {}",
                applications.len(),
                self.slot.describe(),
                err
            );
        }
    }

    pub fn try_save(&self, applications: &[JobApplication]) -> Result<(), StorageError> {
        let content = encode_applications(applications)?;
        self.slot.write(&content)?;
        jobtrack_info!(
            "Saved {} applications to {}",
            applications.len(),
            self.slot.describe()
        );
        Ok(())
    }
}
