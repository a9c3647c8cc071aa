use super::catalog::Catalog;
use super::menu::ItemId;

/// Finds the menu item named in a spoken order, if any.
///
/// Matching ignores whitespace and letter case. When several names occur in
/// the utterance the longest one wins, so "카페 라떼" beats a bare "라떼".
pub fn match_utterance(catalog: &Catalog, utterance: &str) -> Option<ItemId> {
    let heard = normalize(utterance);
    if heard.is_empty() {
        return None;
    }

    catalog
        .items()
        .iter()
        .filter_map(|item| {
            [normalize(&item.name), normalize(item.id.as_str())]
                .into_iter()
                .filter(|key| !key.is_empty() && heard.contains(key.as_str()))
                .map(|key| key.chars().count())
                .max()
                .map(|len| (len, &item.id))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, id)| id.clone())
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
