use super::menu::Price;
use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => f.write_str("card"),
            PaymentMethod::Cash => f.write_str("cash"),
        }
    }
}

/// Identity of one payment attempt. Increases monotonically per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AttemptId(pub u64);

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A payment in flight: the amount is the cart total captured at initiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentAttempt {
    pub id: AttemptId,
    pub amount: Price,
    pub method: PaymentMethod,
}

/// What a gateway answered for an authorization request that it did handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationOutcome {
    Approved { reference: String },
    Declined { reason: String },
}

/// Why an attempt ended in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFailure {
    /// The gateway handled the request and refused it.
    Declined { reason: String },
    /// The gateway could not give an answer.
    Gateway(GatewayError),
}

impl fmt::Display for PaymentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentFailure::Declined { reason } => write!(f, "declined: {reason}"),
            PaymentFailure::Gateway(err) => write!(f, "{err}"),
        }
    }
}

/// Observable state of the payment engine.
///
/// `Succeeded` and `Failed` are terminal for their attempt and stay visible
/// until acknowledged, after which the engine is `Idle` again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaymentState {
    #[default]
    Idle,
    Processing(PaymentAttempt),
    Succeeded {
        attempt: PaymentAttempt,
        reference: String,
    },
    Failed {
        attempt: PaymentAttempt,
        failure: PaymentFailure,
    },
}

impl PaymentState {
    pub fn is_processing(&self) -> bool {
        matches!(self, PaymentState::Processing(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PaymentState::Succeeded { .. } | PaymentState::Failed { .. }
        )
    }

    pub fn attempt(&self) -> Option<&PaymentAttempt> {
        match self {
            PaymentState::Idle => None,
            PaymentState::Processing(attempt)
            | PaymentState::Succeeded { attempt, .. }
            | PaymentState::Failed { attempt, .. } => Some(attempt),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaymentState::Idle => "idle",
            PaymentState::Processing(_) => "processing",
            PaymentState::Succeeded { .. } => "succeeded",
            PaymentState::Failed { .. } => "failed",
        }
    }

    /// Terminal state reached by `attempt` once the gateway has answered.
    pub fn resolved(
        attempt: PaymentAttempt,
        outcome: Result<AuthorizationOutcome, GatewayError>,
    ) -> Self {
        match outcome {
            Ok(AuthorizationOutcome::Approved { reference }) => {
                PaymentState::Succeeded { attempt, reference }
            }
            Ok(AuthorizationOutcome::Declined { reason }) => PaymentState::Failed {
                attempt,
                failure: PaymentFailure::Declined { reason },
            },
            Err(err) => PaymentState::Failed {
                attempt,
                failure: PaymentFailure::Gateway(err),
            },
        }
    }
}

/// Which terminal state an `acknowledge` closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledged {
    Succeeded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn attempt() -> PaymentAttempt {
        PaymentAttempt {
            id: AttemptId(1),
            amount: Price::new(2500),
            method: PaymentMethod::Card,
        }
    }

    #[test]
    fn test_resolved_maps_outcomes() {
        let ok = PaymentState::resolved(
            attempt(),
            Ok(AuthorizationOutcome::Approved {
                reference: "R1".to_string(),
            }),
        );
        assert_eq!(ok.name(), "succeeded");

        let declined = PaymentState::resolved(
            attempt(),
            Ok(AuthorizationOutcome::Declined {
                reason: "insufficient funds".to_string(),
            }),
        );
        assert!(matches!(
            declined,
            PaymentState::Failed {
                failure: PaymentFailure::Declined { .. },
                ..
            }
        ));

        let timeout = PaymentState::resolved(
            attempt(),
            Err(GatewayError::Timeout(Duration::from_secs(1))),
        );
        assert!(matches!(
            timeout,
            PaymentState::Failed {
                failure: PaymentFailure::Gateway(GatewayError::Timeout(_)),
                ..
            }
        ));
        assert!(timeout.is_terminal());
    }

    #[test]
    fn test_method_deserializes_lowercase() {
        let method: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(method, PaymentMethod::Cash);
        assert_eq!(PaymentMethod::Card.to_string(), "card");
    }
}
