use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// A price in the smallest currency unit (won for the built-in menu).
///
/// Wraps a `u64` so that prices, quantities and totals cannot be mixed up
/// in arithmetic. Multiplying by a quantity yields a line subtotal.
/// Arithmetic saturates at `Price::MAX` instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u64);

impl Price {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    /// Highest unit price a catalog accepts. Keeps line subtotals and cart
    /// totals exact for any realistic order size.
    pub const MAX_UNIT: Self = Self(1_000_000_000_000);

    pub fn new(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Add for Price {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Price {
    type Output = Self;
    fn mul(self, quantity: u32) -> Self::Output {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// Renders as the kiosk shows prices on screen, e.g. `12,500원`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "{grouped}원")
    }
}

/// Stable identifier of a menu entry, assigned when the catalog is defined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single orderable entry of the menu. Never mutated once defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub category: String,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub icon: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            category: category.into(),
            name: name.into(),
            price: Price::new(price),
            description: description.into(),
            icon: icon.into(),
        }
    }
}
