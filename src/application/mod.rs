//! Application layer orchestrating the ordering flow.
//!
//! `OrderSession` owns the cart of one visit and hands checkout to the
//! `PaymentEngine`, which resolves attempts on `tokio` tasks and publishes
//! its state through a `watch` channel.

pub mod engine;
pub mod session;
pub mod settings;
pub mod summary;
