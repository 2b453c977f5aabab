//! Startup effect: reconcile the localization locale with stored settings

use async_trait::async_trait;
use tracing::info;

use super::{Effect, EffectContext, EffectError};
use crate::store::settings::{change_language, select_language};
use crate::store::Action;

/// Runs on `STARTUP`
///
/// Reads the stored language and dispatches it again as
/// `CHANGE_LANGUAGE`. The re-dispatch is what makes the settings effect
/// override the locale the localization subsystem detected on its own.
pub struct Startup;

#[async_trait]
impl Effect for Startup {
    fn name(&self) -> &'static str {
        "startup"
    }

    async fn run(&self, _action: Action, ctx: EffectContext) -> Result<(), EffectError> {
        let language = ctx.select(select_language).await?;
        info!(language = %language, "Applying stored language at startup");
        ctx.put(change_language(language)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AppState, Store};
    use tokio_util::sync::CancellationToken;

    #[tokio::test]
    async fn test_redispatches_stored_language() {
        let store = Store::new(AppState::with_language("fr".parse().unwrap()));
        let mut actions = store.subscribe();
        let ctx = EffectContext::new(store.clone(), CancellationToken::new());

        Startup.run(Action::Startup, ctx).await.unwrap();

        assert_eq!(
            actions.try_recv().unwrap(),
            change_language("fr".parse().unwrap())
        );
        assert_eq!(store.state().settings.language.as_str(), "fr");
    }

    #[tokio::test]
    async fn test_running_twice_dispatches_identical_actions() {
        let store = Store::new(AppState::with_language("es".parse().unwrap()));
        let mut actions = store.subscribe();

        for _ in 0..2 {
            let ctx = EffectContext::new(store.clone(), CancellationToken::new());
            Startup.run(Action::Startup, ctx).await.unwrap();
        }

        let first = actions.try_recv().unwrap();
        let second = actions.try_recv().unwrap();
        assert_eq!(first, second);
        assert_eq!(store.state().settings.language.as_str(), "es");
    }
}
