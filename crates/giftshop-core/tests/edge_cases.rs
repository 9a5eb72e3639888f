//! Edge case and boundary condition tests
//!
//! These tests verify the catalog handles empty collections, duplicates,
//! custom category tables and malformed clicks.

use std::cell::RefCell;
use std::rc::Rc;

use giftshop_core::{
    BestMode, Catalog, CatalogConfig, CatalogRegions, CategoryTable, Gift, GiftCard,
    GiftCategory, GiftMeta, ShopError, Superpowers,
};

fn gift(name: &str, category: &str, live: &str) -> Gift {
    Gift {
        name: name.to_string(),
        description: String::new(),
        category: category.to_string(),
        superpowers: Superpowers {
            live: live.to_string(),
            create: "0".to_string(),
            love: "0".to_string(),
            dream: "0".to_string(),
        },
    }
}

fn catalog_with_regions() -> Catalog<Vec<GiftCard>> {
    Catalog::new(
        CatalogConfig::default(),
        CatalogRegions::new(Some(Vec::new()), Some(Vec::new())),
    )
}

// ============================================================================
// Empty Input Tests
// ============================================================================

/// An empty collection renders empty regions and still counts as loaded
#[test]
fn test_empty_collection() {
    let mut catalog = catalog_with_regions();
    catalog.install(Vec::new()).unwrap();

    assert!(catalog.is_loaded());
    assert!(catalog.best_region().unwrap().is_empty());
    assert!(catalog.all_region().unwrap().is_empty());
    assert!(catalog.render_filtered("work").unwrap());
    assert!(catalog.best().is_empty());
}

/// Rendering before load writes empty card lists
#[test]
fn test_render_before_load() {
    let mut catalog = catalog_with_regions();
    assert!(catalog.render_best(BestMode::Ranked).unwrap());
    assert!(catalog.best_region().unwrap().is_empty());
}

// ============================================================================
// Duplicates
// ============================================================================

/// Duplicate records are legal and render independently
#[test]
fn test_duplicate_gifts_render_twice() {
    let mut catalog = catalog_with_regions();
    let twin = gift("Twin", "For Work", "100");
    catalog.install(vec![twin.clone(), twin]).unwrap();

    let cards = catalog.all_region().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0], cards[1]);
}

// ============================================================================
// Custom Category Tables
// ============================================================================

/// A table with different aliases drives filtering by those aliases
#[test]
fn test_custom_category_table() {
    let categories = CategoryTable::new(
        GiftCategory::new("Everything", "any", ""),
        vec![
            GiftCategory::new("Sweets", "sweet", "sweets.png"),
            GiftCategory::new("Toys", "toy", "toys.png"),
        ],
    );
    let config = CatalogConfig {
        best_amount: 1,
        categories,
    };
    let mut catalog: Catalog<Vec<GiftCard>> =
        Catalog::new(config, CatalogRegions::new(None, Some(Vec::new())));
    catalog
        .install(vec![
            gift("Lollipop", "Sweets", "100"),
            gift("Yo-yo", "Toys", "200"),
        ])
        .unwrap();

    assert!(catalog.render_filtered("toy").unwrap());
    let cards = catalog.all_region().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].picture, "toys.png");
    assert_eq!(cards[0].style_modifier, "toy");

    // The default aliases mean nothing here
    assert!(!catalog.render_filtered("all").unwrap());
    assert!(catalog.render_filtered("any").unwrap());
    assert_eq!(catalog.all_region().unwrap().len(), 2);
}

/// Category names are matched exactly, including whitespace
#[test]
fn test_category_with_trailing_space_fails() {
    let mut catalog = catalog_with_regions();
    let err = catalog
        .install(vec![gift("Mug", "For Work ", "100")])
        .unwrap_err();
    assert!(matches!(err, ShopError::UnknownCategory(ref name) if name == "For Work "));
    assert_eq!(err.to_string(), "Can not find a category for For Work ");
}

// ============================================================================
// Click Delegation
// ============================================================================

/// A malformed payload is an error and never reaches the callback
#[test]
fn test_malformed_payload() {
    let calls: Rc<RefCell<Vec<GiftMeta>>> = Rc::default();
    let sink = calls.clone();
    let mut catalog = catalog_with_regions().on_activate(move |meta| sink.borrow_mut().push(meta));
    catalog.install(vec![gift("Mug", "For Work", "100")]).unwrap();

    let err = catalog.handle_click(Some("not a payload")).unwrap_err();
    assert!(matches!(err, ShopError::Payload(_)));
    assert!(calls.borrow().is_empty());
}

/// A catalog without callback still accepts clicks
#[test]
fn test_click_without_callback() {
    let mut catalog = catalog_with_regions();
    catalog.install(vec![gift("Mug", "For Work", "100")]).unwrap();
    let payload = catalog.all_region().unwrap()[0].payload.clone();
    assert!(catalog.handle_click(Some(&payload)).unwrap());
}

/// Every click on a card delivers a fresh payload copy
#[test]
fn test_repeated_clicks() {
    let calls: Rc<RefCell<Vec<GiftMeta>>> = Rc::default();
    let sink = calls.clone();
    let mut catalog = catalog_with_regions().on_activate(move |meta| sink.borrow_mut().push(meta));
    catalog.install(vec![gift("Mug", "For Work", "100")]).unwrap();
    let payload = catalog.all_region().unwrap()[0].payload.clone();

    catalog.handle_click(Some(&payload)).unwrap();
    catalog.handle_click(Some(&payload)).unwrap();

    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}
