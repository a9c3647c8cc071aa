use crate::domain::menu::Price;
use crate::domain::payment::{
    Acknowledged, AttemptId, AuthorizationOutcome, PaymentAttempt, PaymentMethod, PaymentState,
};
use crate::domain::ports::{PaymentGateway, PaymentGatewayBox};
use crate::error::{GatewayError, KioskError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Drives payment attempts through `Idle → Processing → Succeeded | Failed`.
///
/// `initiate` returns as soon as the attempt is `Processing`; the gateway is
/// called on a spawned task whose completion is applied later. Every state
/// change happens under one lock and is published on a `watch` channel so
/// that screens can repaint on `Succeeded`/`Failed`.
///
/// A completion only takes effect if its attempt is still the one being
/// processed. After a `cancel`, a late answer for that attempt is dropped.
pub struct PaymentEngine {
    gateway: Arc<dyn PaymentGateway>,
    timeout: Option<Duration>,
    shared: Arc<Shared>,
}

struct Shared {
    inner: Mutex<Inner>,
    state_tx: watch::Sender<PaymentState>,
}

#[derive(Default)]
struct Inner {
    state: PaymentState,
    last_attempt: u64,
    task: Option<JoinHandle<()>>,
}

impl Shared {
    fn publish(&self, inner: &mut Inner, state: PaymentState) {
        inner.state = state.clone();
        self.state_tx.send_replace(state);
    }

    async fn resolve(
        &self,
        id: AttemptId,
        outcome: std::result::Result<AuthorizationOutcome, GatewayError>,
    ) -> bool {
        let mut inner = self.inner.lock().await;
        let attempt = match &inner.state {
            PaymentState::Processing(attempt) if attempt.id == id => *attempt,
            current => {
                warn!(attempt = %id, state = current.name(), "ignoring stale payment completion");
                return false;
            }
        };

        inner.task = None;
        let next = PaymentState::resolved(attempt, outcome);
        match &next {
            PaymentState::Failed { failure, .. } => {
                info!(attempt = %id, %failure, "payment failed")
            }
            _ => info!(attempt = %id, amount = %attempt.amount, "payment succeeded"),
        }
        self.publish(&mut inner, next);
        true
    }
}

impl PaymentEngine {
    /// Creates an idle engine that authorizes through `gateway`.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        let (state_tx, _) = watch::channel(PaymentState::Idle);
        Self {
            gateway: Arc::from(gateway),
            timeout: None,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::default()),
                state_tx,
            }),
        }
    }

    /// Fails an attempt with `GatewayError::Timeout` if the gateway has not
    /// answered within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Starts a new attempt for `amount`.
    ///
    /// Only legal while `Idle`: a running attempt must resolve, and a resolved
    /// one must be acknowledged, before the next one may start.
    pub async fn initiate(&self, amount: Price, method: PaymentMethod) -> Result<AttemptId> {
        let mut inner = self.shared.inner.lock().await;
        if inner.state != PaymentState::Idle {
            return Err(KioskError::InvalidState(format!(
                "cannot initiate a payment while {}",
                inner.state.name()
            )));
        }

        inner.last_attempt += 1;
        let attempt = PaymentAttempt {
            id: AttemptId(inner.last_attempt),
            amount,
            method,
        };
        self.shared
            .publish(&mut inner, PaymentState::Processing(attempt));
        info!(attempt = %attempt.id, %amount, %method, "payment processing");

        let gateway = Arc::clone(&self.gateway);
        let shared = Arc::clone(&self.shared);
        let timeout = self.timeout;
        inner.task = Some(tokio::spawn(async move {
            let outcome = authorize(gateway.as_ref(), amount, method, timeout).await;
            shared.resolve(attempt.id, outcome).await;
        }));

        Ok(attempt.id)
    }

    /// Applies a gateway answer to `attempt`.
    ///
    /// Returns `false`, leaving the state untouched, when `attempt` is not the
    /// one currently processing.
    pub async fn resolve(
        &self,
        attempt: AttemptId,
        outcome: std::result::Result<AuthorizationOutcome, GatewayError>,
    ) -> bool {
        self.shared.resolve(attempt, outcome).await
    }

    /// Aborts the processing attempt and returns to `Idle`.
    pub async fn cancel(&self) -> Result<AttemptId> {
        let mut inner = self.shared.inner.lock().await;
        let attempt = match &inner.state {
            PaymentState::Processing(attempt) => *attempt,
            other => {
                return Err(KioskError::InvalidState(format!(
                    "nothing to cancel while {}",
                    other.name()
                )));
            }
        };

        if let Some(task) = inner.task.take() {
            task.abort();
        }
        self.shared.publish(&mut inner, PaymentState::Idle);
        info!(attempt = %attempt.id, "payment cancelled");
        Ok(attempt.id)
    }

    /// Closes a resolved attempt and returns to `Idle`.
    pub async fn acknowledge(&self) -> Result<Acknowledged> {
        let mut inner = self.shared.inner.lock().await;
        let acknowledged = match &inner.state {
            PaymentState::Succeeded { .. } => Acknowledged::Succeeded,
            PaymentState::Failed { .. } => Acknowledged::Failed,
            other => {
                return Err(KioskError::InvalidState(format!(
                    "nothing to acknowledge while {}",
                    other.name()
                )));
            }
        };
        self.shared.publish(&mut inner, PaymentState::Idle);
        Ok(acknowledged)
    }

    pub fn state(&self) -> PaymentState {
        self.shared.state_tx.borrow().clone()
    }

    /// Receiver that observes every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<PaymentState> {
        self.shared.state_tx.subscribe()
    }

    /// Waits until no attempt is processing and returns the state reached.
    pub async fn wait_for_resolution(&self) -> PaymentState {
        let mut rx = self.subscribe();
        match rx.wait_for(|state| !state.is_processing()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }
}

async fn authorize(
    gateway: &dyn PaymentGateway,
    amount: Price,
    method: PaymentMethod,
    timeout: Option<Duration>,
) -> std::result::Result<AuthorizationOutcome, GatewayError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, gateway.authorize(amount, method))
            .await
            .unwrap_or_else(|_| Err(GatewayError::Timeout(limit))),
        None => gateway.authorize(amount, method).await,
    }
}
