//! Property-based tests for catalog rendering
//!
//! Uses proptest to verify the ordering, filtering and size invariants of
//! the best panel and the filtered list.

use giftshop_core::{
    decode_payload, BestMode, Catalog, CatalogConfig, CatalogRegions, Gift, GiftCard, Superpowers,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const CATEGORY_NAMES: [&str; 3] = ["For Work", "For Health", "For Harmony"];

/// Ratings as the resource provides them: 0 to 500 in steps of 100
fn rating_strategy() -> impl Strategy<Value = String> {
    (0u32..=5).prop_map(|stars| (stars * 100).to_string())
}

fn gift_strategy() -> impl Strategy<Value = Gift> {
    (
        prop::string::string_regex("[a-zA-Z ]{1,20}").expect("valid regex"),
        prop::sample::select(CATEGORY_NAMES.to_vec()),
        prop::array::uniform4(rating_strategy()),
    )
        .prop_map(|(name, category, [live, create, love, dream])| Gift {
            description: format!("{} description", name),
            name,
            category: category.to_string(),
            superpowers: Superpowers {
                live,
                create,
                love,
                dream,
            },
        })
}

fn gifts_strategy() -> impl Strategy<Value = Vec<Gift>> {
    prop::collection::vec(gift_strategy(), 0..30)
}

fn loaded_catalog(gifts: Vec<Gift>, best_amount: usize) -> Catalog<Vec<GiftCard>> {
    let config = CatalogConfig {
        best_amount,
        ..CatalogConfig::default()
    };
    let mut catalog = Catalog::new(config, CatalogRegions::new(Some(Vec::new()), Some(Vec::new())));
    catalog.install(gifts).expect("all generated categories are configured");
    catalog
}

fn card_names(cards: &[GiftCard]) -> Vec<String> {
    cards.iter().map(|card| card.name.clone()).collect()
}

fn gift_names<'a>(gifts: impl IntoIterator<Item = &'a Gift>) -> Vec<String> {
    gifts.into_iter().map(|gift| gift.name.clone()).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// "all" renders the full collection in fetched order
    #[test]
    fn all_renders_full_collection(gifts in gifts_strategy()) {
        let mut catalog = loaded_catalog(gifts.clone(), 4);
        prop_assert!(catalog.render_filtered("all").unwrap());
        prop_assert_eq!(card_names(catalog.all_region().unwrap()), gift_names(&gifts));
    }

    /// Each alias renders exactly its category's gifts, order preserved
    #[test]
    fn alias_renders_category_subset(gifts in gifts_strategy()) {
        let mut catalog = loaded_catalog(gifts.clone(), 4);
        let categories = catalog.config().categories.clone();

        for category in categories.specific() {
            prop_assert!(catalog.render_filtered(&category.alias).unwrap());
            let expected = gift_names(gifts.iter().filter(|g| g.category == category.name));
            prop_assert_eq!(card_names(catalog.all_region().unwrap()), expected);
            for card in catalog.all_region().unwrap() {
                prop_assert_eq!(&card.category, &category.name);
                prop_assert_eq!(&card.style_modifier, &category.alias);
            }
        }
    }

    /// Ranked best panel is sorted by descending total rating
    #[test]
    fn ranked_best_is_descending(gifts in gifts_strategy(), best_amount in 0usize..40) {
        let mut catalog = loaded_catalog(gifts, best_amount);
        catalog.render_best(BestMode::Ranked).unwrap();

        let totals: Vec<f64> = catalog
            .best_region()
            .unwrap()
            .iter()
            .map(|card| decode_payload(&card.payload).unwrap().gift.total_superpowers())
            .collect();
        prop_assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    /// Best panel always holds min(best_amount, len) cards, in either mode
    #[test]
    fn best_size_is_bounded(gifts in gifts_strategy(), best_amount in 0usize..40) {
        let expected = best_amount.min(gifts.len());
        let mut catalog = loaded_catalog(gifts, best_amount);

        prop_assert_eq!(catalog.best_region().unwrap().len(), expected);
        catalog.render_best(BestMode::Ranked).unwrap();
        prop_assert_eq!(catalog.best_region().unwrap().len(), expected);
        catalog.render_best(BestMode::Random).unwrap();
        prop_assert_eq!(catalog.best_region().unwrap().len(), expected);
    }

    /// Random order is a permutation of the collection
    #[test]
    fn random_is_permutation(gifts in gifts_strategy()) {
        let catalog = loaded_catalog(gifts.clone(), 4);
        let mut shuffled = gift_names(catalog.random());
        let mut original = gift_names(&gifts);
        shuffled.sort();
        original.sort();
        prop_assert_eq!(shuffled, original);
    }

    /// Every card payload decodes back to its source gift
    #[test]
    fn payload_matches_source_gift(gifts in gifts_strategy()) {
        let catalog = loaded_catalog(gifts.clone(), 4);
        for (card, gift) in catalog.all_region().unwrap().iter().zip(&gifts) {
            let meta = decode_payload(&card.payload).unwrap();
            prop_assert_eq!(&meta.gift, gift);
            prop_assert_eq!(&meta.picture, &card.picture);
        }
    }
}
