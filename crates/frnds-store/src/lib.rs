//! In-memory matchmaking store: users, likes, matches and messages.
//!
//! All four collections live in one [`StoreState`] behind a single mutex.
//! Every public action on [`Store`] takes the lock once, so an action is
//! observed either completely or not at all.

pub mod actions;
pub mod affinity;
pub mod conversations;
pub mod directory;
pub mod error;
pub mod matches;
pub mod seed;

use std::sync::Mutex;

use tracing::info;

pub use actions::{LikeOutcome, Stats};
pub use affinity::{AffinityLedger, MutualStatus};
pub use conversations::ConversationStore;
pub use directory::Directory;
pub use error::{Result, StoreError};
pub use matches::MatchRegistry;

#[derive(Debug, Default)]
pub struct StoreState {
    pub directory: Directory,
    pub affinity: AffinityLedger,
    pub matches: MatchRegistry,
    pub conversations: ConversationStore,
}

/// Process-wide store. Dropped with the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct Store {
    state: Mutex<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        info!("In-memory store initialised");
        Self::default()
    }

    pub fn with_state<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StoreState) -> Result<T>,
    {
        let state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        f(&state)
    }

    pub fn with_state_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreState) -> Result<T>,
    {
        let mut state = self.state.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut state)
    }
}
