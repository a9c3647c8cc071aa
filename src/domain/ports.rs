use super::menu::Price;
use super::payment::{AuthorizationOutcome, PaymentMethod};
use crate::error::GatewayError;
use async_trait::async_trait;

/// Authorizes a charge with whatever actually moves the money.
///
/// A declined payment is an `Ok` outcome; `Err` is reserved for a gateway
/// that could not answer at all.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(
        &self,
        amount: Price,
        method: PaymentMethod,
    ) -> Result<AuthorizationOutcome, GatewayError>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
