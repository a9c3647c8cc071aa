use crate::error::KioskError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display preferences chosen on the accessibility screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub large_text: bool,
    pub high_contrast: bool,
    /// Shifts the layout down so it can be reached from a wheelchair.
    pub accessibility_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityFlag {
    LargeText,
    HighContrast,
    AccessibilityMode,
}

impl AccessibilitySettings {
    pub fn get(&self, flag: AccessibilityFlag) -> bool {
        match flag {
            AccessibilityFlag::LargeText => self.large_text,
            AccessibilityFlag::HighContrast => self.high_contrast,
            AccessibilityFlag::AccessibilityMode => self.accessibility_mode,
        }
    }

    pub fn set(&mut self, flag: AccessibilityFlag, value: bool) {
        match flag {
            AccessibilityFlag::LargeText => self.large_text = value,
            AccessibilityFlag::HighContrast => self.high_contrast = value,
            AccessibilityFlag::AccessibilityMode => self.accessibility_mode = value,
        }
    }
}

impl FromStr for AccessibilityFlag {
    type Err = KioskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "large_text" => Ok(AccessibilityFlag::LargeText),
            "high_contrast" => Ok(AccessibilityFlag::HighContrast),
            "accessibility_mode" => Ok(AccessibilityFlag::AccessibilityMode),
            other => Err(KioskError::ValidationError(format!(
                "unknown accessibility flag: {other}"
            ))),
        }
    }
}
