use crate::domain::settings::{AccessibilityFlag, AccessibilitySettings};
use tokio::sync::watch;
use tracing::info;

/// Sole owner of the accessibility settings.
///
/// Only the owner can change the flags; every change is pushed to the
/// `SettingsView`s handed out with [`SettingsOwner::view`].
#[derive(Debug)]
pub struct SettingsOwner {
    tx: watch::Sender<AccessibilitySettings>,
}

/// Read-only handle on the current accessibility settings.
#[derive(Debug, Clone)]
pub struct SettingsView {
    rx: watch::Receiver<AccessibilitySettings>,
}

impl SettingsOwner {
    pub fn new(initial: AccessibilitySettings) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    pub fn view(&self) -> SettingsView {
        SettingsView {
            rx: self.tx.subscribe(),
        }
    }

    pub fn current(&self) -> AccessibilitySettings {
        *self.tx.borrow()
    }

    /// Flips one flag and returns its new value.
    pub fn toggle(&self, flag: AccessibilityFlag) -> bool {
        let mut value = false;
        self.tx.send_modify(|settings| {
            value = !settings.get(flag);
            settings.set(flag, value);
        });
        info!(?flag, value, "accessibility setting changed");
        value
    }

    pub fn replace(&self, settings: AccessibilitySettings) {
        self.tx.send_replace(settings);
    }
}

impl SettingsView {
    pub fn current(&self) -> AccessibilitySettings {
        *self.rx.borrow()
    }

    /// Waits for the next change made by the owner.
    ///
    /// Returns `None` once the owner is gone and nothing can change anymore.
    pub async fn changed(&mut self) -> Option<AccessibilitySettings> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
