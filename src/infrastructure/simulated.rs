use crate::domain::menu::Price;
use crate::domain::payment::{AuthorizationOutcome, PaymentMethod};
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

type Authorization = Result<AuthorizationOutcome, GatewayError>;

/// How the simulated gateway answers every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulatedBehavior {
    #[default]
    Approve,
    Decline,
    Unavailable,
}

/// Stand-in for a card terminal: waits a fixed delay, then answers the same
/// way for every request regardless of the payment method.
#[derive(Debug)]
pub struct SimulatedGateway {
    delay: Duration,
    behavior: SimulatedBehavior,
    issued: AtomicU64,
}

impl SimulatedGateway {
    pub fn new(delay: Duration, behavior: SimulatedBehavior) -> Self {
        Self {
            delay,
            behavior,
            issued: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, amount: Price, method: PaymentMethod) -> Authorization {
        tokio::time::sleep(self.delay).await;
        match self.behavior {
            SimulatedBehavior::Approve => {
                let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
                Ok(AuthorizationOutcome::Approved {
                    reference: format!("SIM-{}-{n:06}", method.to_string().to_uppercase()),
                })
            }
            SimulatedBehavior::Decline => Ok(AuthorizationOutcome::Declined {
                reason: format!("simulated decline of {amount}"),
            }),
            SimulatedBehavior::Unavailable => Err(GatewayError::Unavailable(
                "simulated gateway is offline".to_string(),
            )),
        }
    }
}

/// Deterministic gateway for tests.
///
/// Answers with the queued outcomes in order and approves once the queue is
/// empty. Every request is recorded so tests can check what was charged.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGateway {
    outcomes: Arc<Mutex<VecDeque<Authorization>>>,
    calls: Arc<Mutex<Vec<(Price, PaymentMethod)>>>,
    delay: Duration,
}

impl ScriptedGateway {
    pub fn new(outcomes: Vec<Authorization>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(outcomes.into())),
            ..Self::default()
        }
    }

    pub fn approving() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Amounts and methods requested so far.
    pub async fn calls(&self) -> Vec<(Price, PaymentMethod)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn authorize(&self, amount: Price, method: PaymentMethod) -> Authorization {
        let call_no = {
            let mut calls = self.calls.lock().await;
            calls.push((amount, method));
            calls.len()
        };
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Ok(AuthorizationOutcome::Approved {
                    reference: format!("SCRIPTED-{call_no}"),
                })
            })
    }
}
