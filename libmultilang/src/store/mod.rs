//! Application store
//!
//! Contains the state architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducers: Pure functions (State, Action) -> State
//! - `Store`: the owned container that applies them
//!
//! The store is an explicit handle passed to whoever needs it. All
//! mutation goes through [`Store::dispatch`].

pub mod actions;
pub mod reducer;
pub mod settings;
pub mod startup;
pub mod state;

pub use actions::{Action, ActionKind};
pub use reducer::reduce;
pub use state::{AppState, SettingsState, StartupState};

use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace};

/// Observer invoked after an action has been reduced
///
/// Listeners run synchronously inside `dispatch`, in dispatch order, and
/// must not dispatch themselves. Hand work off to a task instead.
pub trait ActionListener: Send + Sync {
    fn on_action(&self, action: &Action, state: &AppState);

    /// Closed listeners are dropped on the next dispatch
    fn is_closed(&self) -> bool {
        false
    }
}

/// Cloneable handle to the single application state
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<AppState>,
    /// Serializes reduce + notify so listeners see actions in order
    dispatch_lock: Mutex<()>,
    listeners: Mutex<Vec<Arc<dyn ActionListener>>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            inner: Arc::new(StoreInner {
                state,
                dispatch_lock: Mutex::new(()),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Reduce an action and notify listeners
    ///
    /// The action is fully reduced before any listener sees it, and no
    /// other dispatch interleaves with this one.
    pub fn dispatch(&self, action: Action) {
        let _guard = self
            .inner
            .dispatch_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let next = reduce(self.state(), &action);
        let changed = *self.inner.state.borrow() != next;
        if changed {
            self.inner.state.send_replace(next.clone());
        }
        debug!(action = %action.kind(), changed, "Action reduced");

        let listeners = {
            let mut listeners = self
                .inner
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            listeners.retain(|listener| !listener.is_closed());
            listeners.clone()
        };

        for listener in listeners {
            listener.on_action(&action, &next);
        }
    }

    /// Register a post-reduce listener
    pub fn add_listener(&self, listener: Arc<dyn ActionListener>) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(listener);
    }

    /// Receive every action dispatched from now on
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Action> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.add_listener(Arc::new(ChannelListener { tx }));
        rx
    }

    /// Watch state snapshots (presentation, persistence)
    pub fn watch(&self) -> watch::Receiver<AppState> {
        self.inner.state.subscribe()
    }

    /// Swap in a restored snapshot
    ///
    /// Reserved for the persistence collaborator, before the first action
    /// is dispatched. Listeners are not notified; watchers are.
    pub fn replace_state(&self, state: AppState) {
        let _guard = self
            .inner
            .dispatch_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        trace!(language = %state.settings.language, "Replacing store state");
        self.inner.state.send_replace(state);
    }
}

struct ChannelListener {
    tx: mpsc::UnboundedSender<Action>,
}

impl ActionListener for ChannelListener {
    fn on_action(&self, action: &Action, _state: &AppState) {
        // A dropped receiver is pruned via is_closed
        let _ = self.tx.send(action.clone());
    }

    fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
