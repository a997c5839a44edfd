use crate::JobApplication;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the full collection to durable storage, replacing what is there.
    Persist { applications: Vec<JobApplication> },
}
