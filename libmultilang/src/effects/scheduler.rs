//! Effect scheduler
//!
//! Binds action kinds to effects. Each binding is a long-lived task fed by
//! a channel of matching actions and runs its effect with latest-wins
//! semantics: a new action cancels the in-flight run, waits for it to
//! stop, then starts a fresh run. Bindings never cancel each other.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use libmultilang::effects::root;
//! use libmultilang::localization::{Catalog, CatalogOptions};
//! use libmultilang::store::{settings::change_language, AppState, Store};
//!
//! # async fn example() -> libmultilang::Result<()> {
//! let catalog = Arc::new(Catalog::builtin(&CatalogOptions::default())?);
//! let store = Store::new(AppState::with_language("en".parse()?));
//! let scheduler = root(&store, catalog);
//!
//! store.dispatch(change_language("fr".parse()?));
//! scheduler.wait_idle().await;
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{Effect, EffectContext, EffectError, Startup, UpdateLanguage};
use crate::localization::Localization;
use crate::store::{Action, ActionKind, ActionListener, AppState, Store};

/// Register the application's effect bindings
///
/// - `STARTUP` → [`Startup`]
/// - `CHANGE_LANGUAGE` → [`UpdateLanguage`]
///
/// Must be called from within a Tokio runtime.
pub fn root(store: &Store, localization: Arc<dyn Localization>) -> EffectScheduler {
    let mut scheduler = EffectScheduler::new(store.clone());
    scheduler.take_latest(ActionKind::Startup, Startup);
    scheduler.take_latest(ActionKind::ChangeLanguage, UpdateLanguage::new(localization));
    scheduler
}

/// Owner of the effect bindings for one store
pub struct EffectScheduler {
    store: Store,
    tracker: Arc<RunTracker>,
    shutdown: CancellationToken,
    bindings: Vec<(ActionKind, JoinHandle<()>)>,
}

impl EffectScheduler {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            tracker: Arc::new(RunTracker::default()),
            shutdown: CancellationToken::new(),
            bindings: Vec::new(),
        }
    }

    /// Run `effect` for every `kind` action, latest wins
    ///
    /// Must be called from within a Tokio runtime.
    pub fn take_latest<E: Effect>(&mut self, kind: ActionKind, effect: E) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.store.add_listener(Arc::new(BindingListener {
            kind,
            tx,
            tracker: Arc::clone(&self.tracker),
        }));

        debug!(action = %kind, effect = effect.name(), "Effect binding registered");
        let handle = tokio::spawn(run_binding(
            Arc::new(effect),
            rx,
            self.store.clone(),
            self.shutdown.child_token(),
        ));
        self.bindings.push((kind, handle));
    }

    /// Resolve once every routed action's run has ended
    ///
    /// Runs that dispatch follow-up actions keep the scheduler busy until
    /// those follow-ups have ended too.
    pub async fn wait_idle(&self) {
        self.tracker.wait_idle().await;
    }

    /// Number of routed actions whose runs have not ended yet
    pub fn pending(&self) -> usize {
        self.tracker.pending.load(Ordering::SeqCst)
    }

    pub fn bound_kinds(&self) -> Vec<ActionKind> {
        self.bindings.iter().map(|(kind, _)| *kind).collect()
    }

    /// Cancel every binding and wait for their tasks to end
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        for (kind, handle) in std::mem::take(&mut self.bindings) {
            if let Err(e) = handle.await {
                warn!(action = %kind, error = %e, "Effect binding ended abnormally");
            }
        }
        debug!("Effect scheduler stopped");
    }
}

impl Drop for EffectScheduler {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Routes matching actions from the store into a binding's channel
struct BindingListener {
    kind: ActionKind,
    tx: mpsc::UnboundedSender<(Action, PendingRun)>,
    tracker: Arc<RunTracker>,
}

impl ActionListener for BindingListener {
    fn on_action(&self, action: &Action, _state: &AppState) {
        if action.kind() != self.kind {
            return;
        }
        // Counted before dispatch returns, so wait_idle cannot miss it.
        // A closed binding drops the guard right here.
        let pending = self.tracker.begin();
        let _ = self.tx.send((action.clone(), pending));
    }

    fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

struct InFlight {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl InFlight {
    /// Cancel and wait until the run has stopped
    async fn cancel(self) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            if e.is_panic() {
                warn!(error = %e, "Effect run panicked");
            }
        }
    }
}

async fn run_binding(
    effect: Arc<dyn Effect>,
    mut rx: mpsc::UnboundedReceiver<(Action, PendingRun)>,
    store: Store,
    shutdown: CancellationToken,
) {
    let mut current: Option<InFlight> = None;

    loop {
        let next = tokio::select! {
            _ = shutdown.cancelled() => break,
            next = rx.recv() => next,
        };
        let Some((action, pending)) = next else { break };

        if let Some(previous) = current.take() {
            previous.cancel().await;
        }

        let token = shutdown.child_token();
        let ctx = EffectContext::new(store.clone(), token.clone());
        let effect = Arc::clone(&effect);
        let run_token = token.clone();
        let handle = tokio::spawn(async move {
            let _pending = pending;
            let name = effect.name();
            let outcome = tokio::select! {
                biased;
                _ = run_token.cancelled() => Err(EffectError::Cancelled),
                result = effect.run(action, ctx) => result,
            };
            match outcome {
                Ok(()) => debug!(effect = name, "Effect completed"),
                Err(EffectError::Cancelled) => debug!(effect = name, "Effect cancelled"),
                Err(e) => warn!(effect = name, error = %e, "Effect failed"),
            }
        });
        current = Some(InFlight { token, handle });
    }

    if let Some(previous) = current.take() {
        previous.cancel().await;
    }
}

#[derive(Default)]
struct RunTracker {
    pending: AtomicUsize,
    idle: Notify,
}

impl RunTracker {
    fn begin(self: &Arc<Self>) -> PendingRun {
        self.pending.fetch_add(1, Ordering::SeqCst);
        PendingRun {
            tracker: Arc::clone(self),
        }
    }

    async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// One routed action whose run has not ended
struct PendingRun {
    tracker: Arc<RunTracker>,
}

impl Drop for PendingRun {
    fn drop(&mut self) {
        if self.tracker.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.tracker.idle.notify_waiters();
        }
    }
}
