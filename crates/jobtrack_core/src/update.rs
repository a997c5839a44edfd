use jobtrack_logging::{jobtrack_debug, jobtrack_warn};

use crate::{AppState, Effect, Msg, StoreError};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every accepted mutation of the collection yields exactly one
/// [`Effect::Persist`]; hydration, rejected commands and no-ops yield none.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Hydrated(applications) => {
            match state.store.hydrate(applications) {
                Ok(()) => {
                    state.last_error = None;
                    state.mark_dirty();
                }
                Err(err) => reject(&mut state, err),
            }
            Vec::new()
        }
        Msg::ApplicationSubmitted {
            draft,
            submitted_at_ms,
        } => match state.store.add(&draft, submitted_at_ms) {
            Ok(_) => accept(&mut state),
            Err(err) => {
                reject(&mut state, err);
                Vec::new()
            }
        },
        Msg::StatusChanged { id, status } => match state.store.set_status(&id, status) {
            Ok(true) => accept(&mut state),
            Ok(false) => Vec::new(),
            Err(err) => {
                reject(&mut state, err);
                Vec::new()
            }
        },
        Msg::DeleteRequested { id } => {
            state.deletion.request(id, &state.store);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DeleteConfirmed => match state.deletion.confirm() {
            Some(candidate) => {
                state.mark_dirty();
                match state.store.remove(&candidate.id) {
                    Ok(Some(_)) => accept(&mut state),
                    Ok(None) => Vec::new(),
                    Err(err) => {
                        reject(&mut state, err);
                        Vec::new()
                    }
                }
            }
            None => {
                jobtrack_debug!("Delete confirmed with nothing pending");
                Vec::new()
            }
        },
        Msg::DeleteCancelled => {
            if state.deletion.pending().is_some() {
                state.deletion.cancel();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FilterChanged(filter) => {
            if state.filter != filter {
                state.filter = filter;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn accept(state: &mut AppState) -> Vec<Effect> {
    state.last_error = None;
    state.mark_dirty();
    vec![Effect::Persist {
        applications: state.store.list().to_vec(),
    }]
}

fn reject(state: &mut AppState, err: StoreError) {
    jobtrack_warn!("Command rejected: {}", err);
    state.last_error = Some(err);
    state.mark_dirty();
}
