use crate::domain::catalog::Catalog;
use crate::domain::menu::MenuItem;
use crate::error::Result;
use std::io::Read;

/// Loads a menu from CSV with an `id, category, name, price, description, icon` header.
pub struct MenuReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every row and builds the catalog. Unlike session scripts, a single
    /// bad row rejects the whole menu.
    pub fn catalog(self) -> Result<Catalog> {
        let items = self
            .reader
            .into_deserialize::<MenuItem>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Catalog::from_items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{ItemId, Price};
    use crate::error::KioskError;

    #[test]
    fn test_reads_menu() {
        let data = "id, category, name, price, description, icon\n\
                    espresso, coffee, Espresso, 2000, Single shot, ☕\n\
                    scone, bakery, Scone, 2700, , 🥯";
        let catalog = MenuReader::new(data.as_bytes()).catalog().unwrap();

        assert_eq!(catalog.list_categories(), ["coffee", "bakery"]);
        let scone = catalog.get(&ItemId::from("scone")).unwrap();
        assert_eq!(scone.price, Price::new(2700));
        assert_eq!(scone.description, "");
    }

    #[test]
    fn test_negative_price_rejects_menu() {
        let data = "id, category, name, price, description, icon\nx, c, X, -5, , ";
        assert!(matches!(
            MenuReader::new(data.as_bytes()).catalog(),
            Err(KioskError::CsvError(_))
        ));
    }

    #[test]
    fn test_duplicate_id_rejects_menu() {
        let data = "id, category, name, price, description, icon\nx, c, X, 5, , \nx, c, Y, 6, , ";
        assert!(matches!(
            MenuReader::new(data.as_bytes()).catalog(),
            Err(KioskError::ValidationError(_))
        ));
    }
}
