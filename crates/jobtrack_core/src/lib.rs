//! Jobtrack core: the application store, its projections and the pure
//! message/update state machine driving them.
mod application;
mod deletion;
mod effect;
mod filter;
mod msg;
mod state;
mod store;
mod update;
mod view_model;

pub use application::{
    ApplicationId, Draft, Field, JobApplication, ParseStatusError, Status, ValidDraft,
    ValidationError,
};
pub use deletion::{DeletionCandidate, DeletionFlow};
pub use effect::Effect;
pub use filter::{project, StatusFilter};
pub use msg::Msg;
pub use state::AppState;
pub use store::{ApplicationStore, StoreError, StorePhase};
pub use update::update;
pub use view_model::{format_date, AppViewModel, ApplicationRowView, StatusCounts};
