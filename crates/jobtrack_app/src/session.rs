use jobtrack_core::{update, AppState, AppViewModel, Effect, Msg};
use jobtrack_storage::{PersistenceAdapter, StorageSlot};

/// Owns the application state for one run and writes every mutation through
/// to storage before the next message is handled.
pub struct Session<S> {
    state: AppState,
    adapter: PersistenceAdapter<S>,
}

impl<S: StorageSlot> Session<S> {
    /// Loads the stored collection and hydrates the store from it.
    pub fn start(adapter: PersistenceAdapter<S>) -> Self {
        let initial = adapter.load();
        let mut session = Self {
            state: AppState::new(),
            adapter,
        };
        session.dispatch(Msg::Hydrated(initial));
        session
    }

    /// Returns whether the message changed anything visible.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
        self.state.consume_dirty()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Persist { applications } => self.adapter.save(&applications),
            }
        }
    }
}
