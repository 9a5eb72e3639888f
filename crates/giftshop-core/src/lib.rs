//! Gift Shop Core Library
//!
//! Catalog logic and widget state for a seasonal gift storefront.
//!
//! ## Overview
//!
//! The storefront is a set of small, independent widgets. The centerpiece is
//! the [`Catalog`]: it fetches the gift collection once from a
//! [`GiftSource`], renders a "best gifts" panel and a filterable full list
//! into optional [`CardRegion`]s, and relays card clicks to an activation
//! callback. The remaining modules hold the pure state behind the detail
//! modal, the countdown, the slider, the scroll-to-top button and the burger
//! menu, so that the UI layer only wires events.
//!
//! ## Quick Start
//!
//! ```ignore
//! use giftshop_core::{Catalog, CatalogConfig, CatalogRegions, FileSource, GiftCard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let regions: CatalogRegions<Vec<GiftCard>> = CatalogRegions::new(Some(Vec::new()), Some(Vec::new()));
//!     let mut catalog = Catalog::new(CatalogConfig::default(), regions)
//!         .on_activate(|meta| println!("{} selected", meta.gift.name));
//!
//!     catalog.load(&FileSource::new("assets")).await?;
//!     catalog.render_filtered("work")?;
//!
//!     for card in catalog.all_region().unwrap() {
//!         println!("{} [{}]", card.name, card.category);
//!     }
//!     Ok(())
//! }
//! ```

pub mod card;
pub mod catalog;
pub mod category;
pub mod countdown;
pub mod error;
pub mod modal;
pub mod slider;
pub mod source;
pub mod types;
pub mod widgets;

// Re-exports
pub use card::{decode_payload, encode_payload, CardRegion, GiftCard};
pub use catalog::{BestMode, Catalog, CatalogConfig, CatalogRegions};
pub use category::{CategoryTable, GiftCategory, ALL_ALIAS};
pub use countdown::{Countdown, CountdownParts};
pub use error::{ShopError, ShopResult};
pub use modal::{GiftDetail, SuperpowerRow};
pub use slider::{SliderConfig, SliderState};
pub use source::{FileSource, GiftSource, HttpSource};
pub use types::*;
pub use widgets::{MenuClick, MenuState, ScrollUp};
