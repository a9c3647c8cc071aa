use super::menu::{ItemId, MenuItem, Price};
use serde::Serialize;

/// One item of the cart together with how many of it were selected.
///
/// The quantity is always at least 1: a line that would drop to zero is
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn item_id(&self) -> &ItemId {
        &self.item.id
    }

    pub fn subtotal(&self) -> Price {
        self.item.price * self.quantity
    }
}

/// The selections of one ordering session.
///
/// Lines keep the order in which items were first added and there is at most
/// one line per item id. Totals and counts are computed from the lines on
/// every call, so they can never drift from the contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, returning the new quantity of its line.
    pub fn add(&mut self, item: &MenuItem) -> u32 {
        match self.position(&item.id) {
            Some(index) => {
                self.lines[index].quantity += 1;
                self.lines[index].quantity
            }
            None => {
                self.lines.push(CartLine {
                    item: item.clone(),
                    quantity: 1,
                });
                1
            }
        }
    }

    /// Removes one unit of the item.
    ///
    /// Returns the remaining quantity (0 once the line is gone), or `None`
    /// when the item was not in the cart.
    pub fn decrement(&mut self, item_id: &ItemId) -> Option<u32> {
        let index = self.position(item_id)?;
        if self.lines[index].quantity > 1 {
            self.lines[index].quantity -= 1;
            Some(self.lines[index].quantity)
        } else {
            self.lines.remove(index);
            Some(0)
        }
    }

    /// Drops the whole line for the item, if any.
    pub fn remove(&mut self, item_id: &ItemId) -> Option<CartLine> {
        self.position(item_id).map(|index| self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of distinct items in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn quantity_of(&self, item_id: &ItemId) -> u32 {
        self.position(item_id)
            .map(|index| self.lines[index].quantity)
            .unwrap_or(0)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, item_id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.item.id == item_id)
    }
}
