//! Settings effect: push the selected language into the localization
//! subsystem

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{Effect, EffectContext, EffectError};
use crate::localization::Localization;
use crate::store::Action;

/// Runs on every `CHANGE_LANGUAGE`
///
/// Writes the action's language as the current locale. The localization
/// subsystem owns that value; this effect only assigns it. Rejected or
/// missing languages leave the previous locale active.
pub struct UpdateLanguage {
    localization: Arc<dyn Localization>,
}

impl UpdateLanguage {
    pub fn new(localization: Arc<dyn Localization>) -> Self {
        Self { localization }
    }
}

#[async_trait]
impl Effect for UpdateLanguage {
    fn name(&self) -> &'static str {
        "update_language"
    }

    async fn run(&self, action: Action, ctx: EffectContext) -> Result<(), EffectError> {
        let Action::ChangeLanguage { language } = action else {
            return Ok(());
        };
        let Some(language) = language else {
            warn!(
                locale = %self.localization.current_locale(),
                "CHANGE_LANGUAGE without a language, keeping current locale"
            );
            return Ok(());
        };

        ctx.checkpoint().await?;

        match self.localization.set_current_locale(language.clone()) {
            Ok(()) => debug!(locale = %language, "Localization locale updated"),
            Err(e) => warn!(
                error = %e,
                locale = %self.localization.current_locale(),
                "Locale rejected, keeping current locale"
            ),
        }
        Ok(())
    }
}
