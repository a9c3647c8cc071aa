use super::menu::{ItemId, MenuItem, Price};
use crate::error::{KioskError, Result};
use std::collections::HashSet;

/// Read-only menu, grouped by category.
///
/// Categories keep the order in which they first appear in the item list.
/// There is no way to mutate a catalog once it has been built.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<String>,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if two items share an id or an item costs
    /// more than `Price::MAX_UNIT`.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self> {
        if let Some(item) = items.iter().find(|item| item.price > Price::MAX_UNIT) {
            return Err(KioskError::ValidationError(format!(
                "price of menu item {} exceeds {}",
                item.id,
                Price::MAX_UNIT
            )));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = items.iter().find(|item| !seen.insert(&item.id)) {
            return Err(KioskError::ValidationError(format!(
                "duplicate menu item id: {}",
                dup.id
            )));
        }
        Ok(Self {
            categories: categories_of(&items),
            items,
        })
    }

    /// The menu the kiosk ships with.
    pub fn builtin() -> Self {
        let items = vec![
            MenuItem::new("americano", "에스프레소", "아메리카노", 2500, "에스프레소 샷 + 뜨거운 물", "☕️"),
            MenuItem::new("cafe-latte", "에스프레소", "카페 라떼", 3500, "우유와 에스프레소의 조화", "🥛"),
            MenuItem::new("cold-brew", "브루드", "콜드 브루", 3800, "12시간 추출 커피", "💧"),
            MenuItem::new("decaf", "브루드", "디카페인", 4000, "카페인 FREE", "🌱"),
            MenuItem::new("green-tea-latte", "차", "녹차 라떼", 3800, "신선한 말차 파우더", "🍵"),
            MenuItem::new("hibiscus-tea", "차", "히비스커스 티", 3200, "상큼한 허브 티", "🌺"),
            MenuItem::new("croissant", "베이커리", "크루아상", 3200, "버터 풍미 가득", "🥐"),
            MenuItem::new("madeleine", "베이커리", "마들렌", 2800, "수제 마들렌 3개", "🧁"),
            MenuItem::new("pumpkin-latte", "시즌", "호박 라떼", 4200, "가을 한정 메뉴", "🎃"),
            MenuItem::new("iced-choco", "시즌", "아이스 초코", 3800, "진한 초콜릿 풍미", "❄️"),
        ];
        Self {
            categories: categories_of(&items),
            items,
        }
    }

    pub fn list_categories(&self) -> &[String] {
        &self.categories
    }

    /// Items of one category. An unknown category yields nothing.
    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn get(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

fn categories_of(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_in_menu_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.list_categories(),
            ["에스프레소", "브루드", "차", "베이커리", "시즌"]
        );
        assert_eq!(catalog.items().len(), 10);
    }

    #[test]
    fn test_items_in_category() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.items_in("베이커리").map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["크루아상", "마들렌"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.items_in("디저트").count(), 0);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let americano = catalog.get(&ItemId::from("americano")).unwrap();
        assert_eq!(americano.price, Price::new(2500));
        assert!(catalog.get(&ItemId::from("espresso")).is_none());
    }

    #[test]
    fn test_from_items_rejects_duplicate_ids() {
        let items = vec![
            MenuItem::new("a", "x", "A", 100, "", ""),
            MenuItem::new("a", "y", "A2", 200, "", ""),
        ];
        assert!(matches!(
            Catalog::from_items(items),
            Err(KioskError::ValidationError(_))
        ));
    }

    #[test]
    fn test_from_items_rejects_price_above_ceiling() {
        let items = vec![
            MenuItem::new("gift", "gift", "Gift", u64::MAX / 2 + 1, "", ""),
        ];
        assert!(matches!(
            Catalog::from_items(items),
            Err(KioskError::ValidationError(_))
        ));

        let at_ceiling = vec![MenuItem::new("gift", "gift", "Gift", Price::MAX_UNIT.value(), "", "")];
        assert!(Catalog::from_items(at_ceiling).is_ok());
    }

    #[test]
    fn test_from_items_keeps_first_appearance_order() {
        let items = vec![
            MenuItem::new("a", "tea", "A", 100, "", ""),
            MenuItem::new("b", "coffee", "B", 200, "", ""),
            MenuItem::new("c", "tea", "C", 300, "", ""),
        ];
        let catalog = Catalog::from_items(items).unwrap();
        assert_eq!(catalog.list_categories(), ["tea", "coffee"]);
        assert_eq!(catalog.items_in("tea").count(), 2);
    }
}
