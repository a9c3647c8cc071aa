use crate::domain::payment::PaymentMethod;
use crate::error::{KioskError, Result};
use serde::Deserialize;
use std::io::Read;

/// What the customer did on the touch screen (or said to it).
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SessionAction {
    Add,
    Decrement,
    Remove,
    Say,
    Pay,
    Wait,
    Cancel,
    Ack,
    Toggle,
}

/// One row of a session script.
///
/// `item` holds the menu item id, or the utterance for `say`, or the flag
/// name for `toggle`. `method` is only read by `pay`.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct ScriptStep {
    pub action: SessionAction,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub method: Option<PaymentMethod>,
}

/// Reads session steps from a CSV source with an `action, item, method` header.
pub struct SessionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SessionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes the steps; a malformed row yields an `Err` item
    /// without stopping the rest of the script.
    pub fn steps(self) -> impl Iterator<Item = Result<ScriptStep>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(KioskError::from))
    }
}
