//! Loading the catalog from a gift resource on disk.

use std::fs;

use giftshop_core::source::GIFTS_RESOURCE;
use giftshop_core::{
    BestMode, Catalog, CatalogConfig, CatalogRegions, FileSource, GiftCard, GiftSource,
    ShopError,
};
use tempfile::TempDir;

const GIFTS: &str = r#"[
  {
    "name": "Console.log Guru",
    "description": "Uses console.log like a crystal ball to find any issue.",
    "category": "For Work",
    "superpowers": { "live": "+500", "create": "+500", "love": "+200", "dream": "+400" }
  },
  {
    "name": "Hydration Bot",
    "description": "Reminds you to drink water every hour.",
    "category": "For Health",
    "superpowers": { "live": "+200", "create": "+100", "love": "+100", "dream": "+100" }
  },
  {
    "name": "Merge Resolver",
    "description": "Resolves conflicts in code and in the team chat.",
    "category": "For Harmony",
    "superpowers": { "live": "+300", "create": "+300", "love": "+500", "dream": "+500" }
  }
]"#;

fn write_resource(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(GIFTS_RESOURCE), contents).unwrap();
    dir
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("giftshop_core=debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_load_renders_both_regions() {
    init_tracing();
    let dir = write_resource(GIFTS);
    let config = CatalogConfig {
        best_amount: 2,
        ..CatalogConfig::default()
    };
    let mut catalog: Catalog<Vec<GiftCard>> =
        Catalog::new(config, CatalogRegions::new(Some(Vec::new()), Some(Vec::new())));

    catalog.load(&FileSource::new(dir.path())).await.unwrap();

    assert!(catalog.is_loaded());
    assert_eq!(catalog.gifts().len(), 3);
    assert_eq!(catalog.best_region().unwrap().len(), 2);
    let all: Vec<_> = catalog.all_region().unwrap().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(all, vec!["Console.log Guru", "Hydration Bot", "Merge Resolver"]);

    catalog.render_best(BestMode::Ranked).unwrap();
    let best: Vec<_> = catalog.best_region().unwrap().iter().map(|c| c.name.as_str()).collect();
    // Both total 1600; ties keep fetched order
    assert_eq!(best, vec!["Console.log Guru", "Merge Resolver"]);
}

#[tokio::test]
async fn test_missing_resource_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut catalog: Catalog<Vec<GiftCard>> =
        Catalog::new(CatalogConfig::default(), CatalogRegions::new(None, Some(Vec::new())));

    let err = catalog.load(&FileSource::new(dir.path())).await.unwrap_err();

    assert!(matches!(err, ShopError::Io(_)));
    assert!(!catalog.is_loaded());
    assert!(catalog.all_region().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let dir = write_resource("{ not json");
    let source = FileSource::new(dir.path());

    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, ShopError::Parse(_)));
}

#[tokio::test]
async fn test_custom_resource_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("winter.json"), GIFTS).unwrap();

    let source = FileSource::with_path(dir.path(), "data/winter.json");
    assert!(source.describe().ends_with("winter.json"));
    assert_eq!(source.fetch().await.unwrap().len(), 3);
}
