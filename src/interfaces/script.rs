use super::csv::session_reader::{ScriptStep, SessionAction};
use crate::application::session::OrderSession;
use crate::application::settings::SettingsOwner;
use crate::domain::menu::ItemId;
use crate::domain::settings::AccessibilityFlag;
use crate::error::{KioskError, Result};
use tracing::{debug, warn};

/// Replays session script steps against a session, standing in for the
/// touch screen and the settings screen.
pub struct ScriptRunner<'a> {
    session: &'a mut OrderSession,
    settings: &'a SettingsOwner,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(session: &'a mut OrderSession, settings: &'a SettingsOwner) -> Self {
        Self { session, settings }
    }

    /// Applies one step.
    ///
    /// `pay` returns once the attempt is processing; use a `wait` step to
    /// block until the gateway has answered.
    pub async fn apply(&mut self, step: ScriptStep) -> Result<()> {
        debug!(?step, "applying step");
        match step.action {
            SessionAction::Add => {
                self.session.add(&item_id(&step)?)?;
            }
            SessionAction::Decrement => {
                self.session.decrement(&item_id(&step)?);
            }
            SessionAction::Remove => {
                self.session.remove(&item_id(&step)?);
            }
            SessionAction::Say => {
                let utterance = step.item.as_deref().unwrap_or_default();
                if self.session.add_spoken(utterance).is_none() {
                    warn!(utterance, "could not match spoken order to a menu item");
                }
            }
            SessionAction::Pay => {
                let method = step.method.ok_or_else(|| {
                    KioskError::ValidationError("pay requires a payment method".to_string())
                })?;
                self.session.proceed_to_payment(method).await?;
            }
            SessionAction::Wait => {
                self.session.payments().wait_for_resolution().await;
            }
            SessionAction::Cancel => {
                self.session.cancel_payment().await?;
            }
            SessionAction::Ack => {
                self.session.acknowledge_payment().await?;
            }
            SessionAction::Toggle => {
                let flag: AccessibilityFlag = step
                    .item
                    .as_deref()
                    .unwrap_or_default()
                    .parse()?;
                self.settings.toggle(flag);
            }
        }
        Ok(())
    }

    /// Applies every step in order. Steps that cannot be read or applied are
    /// logged and skipped; the number of skipped steps is returned.
    pub async fn run<I>(&mut self, steps: I) -> usize
    where
        I: IntoIterator<Item = Result<ScriptStep>>,
    {
        let mut skipped = 0;
        for (row, step) in steps.into_iter().enumerate() {
            let outcome = match step {
                Ok(step) => self.apply(step).await,
                Err(e) => Err(e),
            };
            if let Err(e) = outcome {
                warn!(row = row + 1, error = %e, "skipping session step");
                skipped += 1;
            }
        }
        skipped
    }
}

fn item_id(step: &ScriptStep) -> Result<ItemId> {
    step.item
        .as_deref()
        .filter(|item| !item.is_empty())
        .map(ItemId::from)
        .ok_or_else(|| {
            KioskError::ValidationError(format!("{:?} requires an item id", step.action))
        })
}
