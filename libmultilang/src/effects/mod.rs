//! Effect processes
//!
//! An effect is an async unit of work started by the scheduler when a
//! matching action has been reduced. Effects hold no state of their own:
//! they read snapshots and dispatch follow-up actions through their
//! [`EffectContext`], whose operations are the only suspension points and
//! the only places a cancelled run can be stopped.
//!
//! - `settings`: keeps the localization subsystem's locale in sync
//! - `startup`: re-announces the stored language at launch
//! - `scheduler`: binds action kinds to effects with latest-wins runs

pub mod scheduler;
pub mod settings;
pub mod startup;

pub use scheduler::{root, EffectScheduler};
pub use settings::UpdateLanguage;
pub use startup::Startup;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::store::{Action, AppState, Store};

/// Outcome of an effect run that did not complete
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// Superseded by a newer action or stopped by shutdown
    #[error("Effect cancelled")]
    Cancelled,

    #[error("Effect failed: {0}")]
    Failed(String),
}

impl EffectError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, EffectError::Cancelled)
    }
}

/// An effect process bound to an action kind
#[async_trait]
pub trait Effect: Send + Sync + 'static {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    async fn run(&self, action: Action, ctx: EffectContext) -> Result<(), EffectError>;
}

/// Handle an effect run uses to touch the store
#[derive(Clone)]
pub struct EffectContext {
    store: Store,
    token: CancellationToken,
}

impl EffectContext {
    pub fn new(store: Store, token: CancellationToken) -> Self {
        Self { store, token }
    }

    /// Yield to the scheduler, then stop if this run was cancelled
    pub async fn checkpoint(&self) -> Result<(), EffectError> {
        tokio::task::yield_now().await;
        if self.token.is_cancelled() {
            return Err(EffectError::Cancelled);
        }
        Ok(())
    }

    /// Read from a settled state snapshot
    pub async fn select<T, F>(&self, selector: F) -> Result<T, EffectError>
    where
        F: FnOnce(&AppState) -> T,
    {
        self.checkpoint().await?;
        Ok(selector(&self.store.state()))
    }

    /// Dispatch a follow-up action
    pub async fn put(&self, action: Action) -> Result<(), EffectError> {
        self.checkpoint().await?;
        self.store.dispatch(action);
        Ok(())
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
