use crate::domain::cart::Cart;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ReceiptRecord<'a> {
    item: &'a str,
    name: &'a str,
    quantity: u32,
    unit_price: u64,
    subtotal: u64,
}

/// Writes the lines of a cart as CSV, one row per line.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_cart(&mut self, cart: &Cart) -> Result<()> {
        if cart.is_empty() {
            // serde-driven headers are only emitted with the first record
            self.writer
                .write_record(["item", "name", "quantity", "unit_price", "subtotal"])?;
        }
        for line in cart.lines() {
            self.writer.serialize(ReceiptRecord {
                item: line.item.id.as_str(),
                name: &line.item.name,
                quantity: line.quantity,
                unit_price: line.item.price.value(),
                subtotal: line.subtotal().value(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
