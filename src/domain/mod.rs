//! Domain layer: the menu, the cart and the payment vocabulary.
//!
//! Nothing in here performs I/O or spawns tasks. The only seam to the outside
//! world is the `PaymentGateway` port.

pub mod cart;
pub mod catalog;
pub mod menu;
pub mod payment;
pub mod ports;
pub mod settings;
pub mod voice;
