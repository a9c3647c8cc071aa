use super::engine::PaymentEngine;
use super::summary::OrderSummary;
use crate::domain::cart::{Cart, CartLine};
use crate::domain::catalog::Catalog;
use crate::domain::menu::ItemId;
use crate::domain::payment::{Acknowledged, AttemptId, PaymentMethod};
use crate::domain::voice::match_utterance;
use crate::error::{KioskError, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// One customer's visit to the kiosk.
///
/// The session is the only owner of its cart, so cart changes go through
/// `&mut self` and never interleave. Payment runs on the engine, which hands
/// back control while the gateway is working.
pub struct OrderSession {
    catalog: Arc<Catalog>,
    cart: Cart,
    engine: PaymentEngine,
}

impl OrderSession {
    /// Creates a session with an empty cart.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The menu items can be picked from.
    /// * `engine` - The payment engine used at checkout.
    pub fn new(catalog: Arc<Catalog>, engine: PaymentEngine) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            engine,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::of(&self.cart)
    }

    pub fn payments(&self) -> &PaymentEngine {
        &self.engine
    }

    /// Adds one unit of a menu item and returns its new quantity.
    pub fn add(&mut self, item_id: &ItemId) -> Result<u32> {
        let item = self
            .catalog
            .get(item_id)
            .ok_or_else(|| KioskError::NotFound(format!("menu item {item_id}")))?;
        let quantity = self.cart.add(item);
        debug!(item = %item_id, quantity, "added to cart");
        Ok(quantity)
    }

    /// Removes one unit; absent items are ignored.
    pub fn decrement(&mut self, item_id: &ItemId) -> Option<u32> {
        let remaining = self.cart.decrement(item_id);
        debug!(item = %item_id, ?remaining, "decremented cart line");
        remaining
    }

    pub fn remove(&mut self, item_id: &ItemId) -> Option<CartLine> {
        let removed = self.cart.remove(item_id);
        debug!(item = %item_id, removed = removed.is_some(), "removed cart line");
        removed
    }

    /// Adds the item named in a spoken order, if one can be recognized.
    pub fn add_spoken(&mut self, utterance: &str) -> Option<(ItemId, u32)> {
        let Some(item_id) = match_utterance(&self.catalog, utterance) else {
            debug!(utterance, "no menu item recognized");
            return None;
        };
        let quantity = self.add(&item_id).ok()?;
        Some((item_id, quantity))
    }

    /// Starts paying the current cart total.
    pub async fn proceed_to_payment(&self, method: PaymentMethod) -> Result<AttemptId> {
        if self.cart.is_empty() {
            return Err(KioskError::EmptyCart);
        }
        self.summary().proceed_to_payment(&self.engine, method).await
    }

    pub async fn cancel_payment(&self) -> Result<AttemptId> {
        self.engine.cancel().await
    }

    /// Closes the resolved payment. The cart is emptied only on success; after
    /// a failure it is kept so the customer can retry.
    pub async fn acknowledge_payment(&mut self) -> Result<Acknowledged> {
        let acknowledged = self.engine.acknowledge().await?;
        if acknowledged == Acknowledged::Succeeded {
            self.cart.clear();
            info!("order paid, cart cleared");
        }
        Ok(acknowledged)
    }
}
