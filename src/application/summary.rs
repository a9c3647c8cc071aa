use super::engine::PaymentEngine;
use crate::domain::cart::Cart;
use crate::domain::menu::Price;
use crate::domain::payment::{AttemptId, PaymentMethod};
use crate::error::Result;
use serde::Serialize;

/// Display aggregates of a cart at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub line_count: usize,
    pub total_quantity: u32,
    pub total: Price,
}

impl OrderSummary {
    pub fn of(cart: &Cart) -> Self {
        Self {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }

    /// Starts a payment attempt for the total captured in this summary.
    ///
    /// Later changes to the cart do not affect the amount being charged.
    pub async fn proceed_to_payment(
        &self,
        engine: &PaymentEngine,
        method: PaymentMethod,
    ) -> Result<AttemptId> {
        engine.initiate(self.total, method).await
    }
}
