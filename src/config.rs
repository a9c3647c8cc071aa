use crate::domain::ports::PaymentGatewayBox;
use crate::domain::settings::AccessibilitySettings;
use crate::error::{KioskError, Result};
use crate::infrastructure::simulated::{SimulatedBehavior, SimulatedGateway};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Kiosk configuration, read from a TOML file.
///
/// Every section is optional; a missing file section takes the defaults the
/// kiosk ships with.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KioskConfig {
    pub accessibility: AccessibilitySettings,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaymentConfig {
    pub gateway: SimulatedBehavior,
    pub processing_delay_ms: u64,
    pub timeout_ms: Option<u64>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            gateway: SimulatedBehavior::Approve,
            processing_delay_ms: 2000,
            timeout_ms: None,
        }
    }
}

impl PaymentConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn gateway(&self) -> PaymentGatewayBox {
        Box::new(SimulatedGateway::new(self.processing_delay(), self.gateway))
    }
}

impl KioskConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            KioskError::ConfigError(msg) => {
                KioskError::ConfigError(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: KioskConfig =
            toml::from_str(content).map_err(|e| KioskError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.payment.timeout_ms == Some(0) {
            return Err(KioskError::ConfigError(
                "payment.timeout_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
