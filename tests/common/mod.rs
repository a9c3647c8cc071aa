#![allow(dead_code)]

use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a session script with the standard header and the given rows.
pub fn script(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, item, method").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

/// Config with a fast simulated gateway answering as `gateway`.
pub fn config(gateway: &str) -> NamedTempFile {
    config_with_delay(gateway, 5)
}

pub fn config_with_delay(gateway: &str, delay_ms: u64) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[payment]").unwrap();
    writeln!(file, "gateway = \"{gateway}\"").unwrap();
    writeln!(file, "processing_delay_ms = {delay_ms}").unwrap();
    file
}

/// Generates a script of `rows` add/decrement steps cycling through the
/// built-in menu.
pub fn generate_script(path: &Path, rows: usize) -> Result<(), Error> {
    const ITEMS: [&str; 4] = ["americano", "cafe-latte", "croissant", "madeleine"];
    let file = std::fs::File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(["action", "item", "method"])?;

    for i in 0..rows {
        let action = if i % 3 == 2 { "decrement" } else { "add" };
        wtr.write_record([action, ITEMS[i % ITEMS.len()], ""])?;
    }

    wtr.flush()?;
    Ok(())
}
