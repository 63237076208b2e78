//! Search and filtering over already-loaded records.

use crate::i18n::Language;
use crate::models::{Localized, Yacht};
use std::collections::HashMap;
use uuid::Uuid;

/// Location dropdown value meaning "no location filter".
pub const ALL_LOCATIONS: &str = "all";

/// Whether a record matches a search term in `lang`.
///
/// An empty (or whitespace-only) term matches everything. Otherwise the
/// lowercase localized name or description must contain the lowercase term.
pub fn matches_search<T: Localized>(item: &T, term: &str, lang: Language) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.name(lang).to_lowercase().contains(&term)
        || item
            .description(lang)
            .map(|d| d.to_lowercase().contains(&term))
            .unwrap_or(false)
}

/// Keep the records matching `term`, preserving order.
pub fn search<T: Localized>(items: Vec<T>, term: &str, lang: Language) -> Vec<T> {
    items
        .into_iter()
        .filter(|item| matches_search(item, term, lang))
        .collect()
}

/// Parse the location dropdown value. `all`, blank or malformed ids mean
/// no filter.
pub fn parse_location_filter(value: Option<&str>) -> Option<Uuid> {
    match value.map(str::trim) {
        None | Some("") | Some(ALL_LOCATIONS) => None,
        Some(raw) => Uuid::parse_str(raw).ok(),
    }
}

/// Apply the search term and location filter to the yacht list.
pub fn filter_yachts(
    yachts: Vec<Yacht>,
    term: &str,
    location: Option<Uuid>,
    lang: Language,
) -> Vec<Yacht> {
    yachts
        .into_iter()
        .filter(|yacht| location.is_none() || yacht.location_id == location)
        .filter(|yacht| matches_search(yacht, term, lang))
        .collect()
}

/// Count yachts per location id.
pub fn count_by_location(location_ids: &[Option<Uuid>]) -> HashMap<Uuid, usize> {
    let mut counts = HashMap::new();
    for id in location_ids.iter().flatten() {
        *counts.entry(*id).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{location, yacht};
    use proptest::prelude::*;

    // ==================== Search Tests ====================

    #[test]
    fn test_empty_term_returns_everything() {
        let yachts = vec![yacht("Sea Breeze", "نسيم البحر"), yacht("Ocean Star", "نجم المحيط")];
        assert_eq!(search(yachts, "   ", Language::ENGLISH).len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let yachts = vec![yacht("Sea Breeze", "نسيم البحر"), yacht("Ocean Star", "نجم المحيط")];
        let found = search(yachts, "BREEZE", Language::ENGLISH);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name_en, "Sea Breeze");
    }

    #[test]
    fn test_search_matches_description() {
        let mut with_desc = yacht("Sea Breeze", "نسيم البحر");
        with_desc.description_en = Some("Perfect for a sunset cruise".to_string());
        let found = search(vec![with_desc, yacht("Ocean Star", "نجم المحيط")], "sunset", Language::ENGLISH);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_search_uses_current_language_only() {
        let yachts = vec![yacht("Sea Breeze", "نسيم البحر")];
        assert!(search(yachts.clone(), "Sea", Language::ARABIC).is_empty());
        assert_eq!(search(yachts, "نسيم", Language::ARABIC).len(), 1);
    }

    #[test]
    fn test_search_locations() {
        let locations = vec![location("Ain Sokhna", "العين السخنة"), location("Hurghada", "الغردقة")];
        let found = search(locations, "sokh", Language::ENGLISH);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name_en, "Ain Sokhna");
    }

    // ==================== Location Filter Tests ====================

    #[test]
    fn test_parse_location_filter() {
        let id = Uuid::new_v4();
        assert_eq!(parse_location_filter(None), None);
        assert_eq!(parse_location_filter(Some("all")), None);
        assert_eq!(parse_location_filter(Some("not-a-uuid")), None);
        assert_eq!(parse_location_filter(Some(&id.to_string())), Some(id));
    }

    #[test]
    fn test_filter_yachts_by_location_and_term() {
        let marina = Uuid::new_v4();
        let mut a = yacht("Sea Breeze", "نسيم البحر");
        a.location_id = Some(marina);
        let mut b = yacht("Sea Star", "نجم البحر");
        b.location_id = Some(Uuid::new_v4());
        let c = yacht("Sea Horse", "حصان البحر");

        let found = filter_yachts(vec![a, b, c], "sea", Some(marina), Language::ENGLISH);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name_en, "Sea Breeze");
    }

    #[test]
    fn test_count_by_location() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let counts = count_by_location(&[Some(a), Some(b), Some(a), None]);
        assert_eq!(counts.get(&a), Some(&2));
        assert_eq!(counts.get(&b), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_search_returns_subset_containing_term(
            names in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..8),
            term in "[a-zA-Z]{0,3}",
        ) {
            let yachts: Vec<_> = names.iter().map(|n| yacht(n, "اسم")).collect();
            let total = yachts.len();
            let found = search(yachts, &term, Language::ENGLISH);

            prop_assert!(found.len() <= total);
            let needle = term.trim().to_lowercase();
            for y in &found {
                prop_assert!(y.name_en.to_lowercase().contains(&needle));
            }
            if needle.is_empty() {
                prop_assert_eq!(found.len(), total);
            }
        }
    }
}
