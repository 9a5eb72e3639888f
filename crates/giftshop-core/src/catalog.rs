//! The gift catalog component.
//!
//! A catalog fetches the gift collection once, renders a "best" subset and
//! a filterable full list into two optional regions, and relays card
//! activations to an external callback.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► load(source) ──► render_best(mode) / render_filtered(alias) ...
//!  (unloaded)   (loaded)          idempotent re-renders
//! ```
//!
//! Absent regions silently disable the corresponding render. An unknown
//! alias renders nothing and leaves the region untouched.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{decode_payload, render_cards, CardRegion};
use crate::category::{CategoryFilter, CategoryTable};
use crate::error::ShopResult;
use crate::source::GiftSource;
use crate::types::{Gift, GiftMeta};

/// Default size of the best-gifts panel
pub const DEFAULT_BEST_AMOUNT: usize = 4;

/// Ordering used by [`Catalog::render_best`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BestMode {
    /// Uniformly shuffled
    #[default]
    Random,
    /// Descending total superpower rating, stable for ties
    Ranked,
}

/// Catalog settings supplied once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of gifts in the best panel
    pub best_amount: usize,
    /// Category table used for lookup and filtering
    pub categories: CategoryTable,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            best_amount: DEFAULT_BEST_AMOUNT,
            categories: CategoryTable::default(),
        }
    }
}

/// Target regions of a catalog; either may be absent
pub struct CatalogRegions<R> {
    pub best: Option<R>,
    pub all: Option<R>,
}

impl<R> CatalogRegions<R> {
    pub fn new(best: Option<R>, all: Option<R>) -> Self {
        Self { best, all }
    }
}

/// Callback invoked with the payload of an activated card
pub type ActivationHandler = Box<dyn Fn(GiftMeta)>;

/// The gift catalog
pub struct Catalog<R: CardRegion> {
    config: CatalogConfig,
    regions: CatalogRegions<R>,
    on_activate: Option<ActivationHandler>,
    gifts: Vec<Gift>,
    loaded: bool,
}

impl<R: CardRegion> Catalog<R> {
    /// Create an unloaded catalog
    pub fn new(config: CatalogConfig, regions: CatalogRegions<R>) -> Self {
        Self {
            config,
            regions,
            on_activate: None,
            gifts: Vec::new(),
            loaded: false,
        }
    }

    /// Set the callback invoked when a card is activated
    pub fn on_activate(mut self, handler: impl Fn(GiftMeta) + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The full collection in fetched order
    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn best_region(&self) -> Option<&R> {
        self.regions.best.as_ref()
    }

    pub fn all_region(&self) -> Option<&R> {
        self.regions.all.as_ref()
    }

    /// Fetch the collection and render both regions
    ///
    /// Performs exactly one fetch. Renders the best panel in random order and
    /// the full list unfiltered, then enables card activation.
    ///
    /// # Errors
    ///
    /// Fetch and parse failures of the source, and category lookup failures
    /// while rendering. Nothing is retried.
    pub async fn load<S: GiftSource>(&mut self, source: &S) -> ShopResult<()> {
        tracing::info!(source = %source.describe(), "Loading gifts");
        let gifts = source.fetch().await?;
        self.install(gifts)
    }

    /// Take an already fetched collection and render both regions
    pub fn install(&mut self, gifts: Vec<Gift>) -> ShopResult<()> {
        tracing::debug!(count = gifts.len(), "Gift collection installed");
        self.gifts = gifts;

        self.render_best(BestMode::Random)?;
        let all_alias = self.config.categories.all().alias.clone();
        self.render_filtered(&all_alias)?;

        self.loaded = true;
        Ok(())
    }

    /// Render the best panel
    ///
    /// Returns `false` without rendering when the best region is absent.
    pub fn render_best(&mut self, mode: BestMode) -> ShopResult<bool> {
        self.render_best_with(mode, &mut rand::rng())
    }

    /// Like [`Catalog::render_best`] with an explicit random source
    pub fn render_best_with<G: Rng + ?Sized>(
        &mut self,
        mode: BestMode,
        rng: &mut G,
    ) -> ShopResult<bool> {
        let Some(region) = self.regions.best.as_mut() else {
            return Ok(false);
        };

        let ordered = match mode {
            BestMode::Random => random_order(&self.gifts, rng),
            BestMode::Ranked => ranked_order(&self.gifts),
        };
        let cards = render_cards(
            ordered.into_iter().take(self.config.best_amount),
            &self.config.categories,
        )?;

        region.replace_cards(cards);
        Ok(true)
    }

    /// Render the full list filtered by a category alias
    ///
    /// Returns `false` without touching anything when the region is absent
    /// or the alias is unknown.
    pub fn render_filtered(&mut self, alias: &str) -> ShopResult<bool> {
        let Some(region) = self.regions.all.as_mut() else {
            return Ok(false);
        };
        let Some(filter) = self.config.categories.filter_for(alias) else {
            tracing::debug!(alias, "Unknown category alias, keeping current cards");
            return Ok(false);
        };

        let cards = render_cards(
            self.gifts.iter().filter(|gift| filter.matches(gift)),
            &self.config.categories,
        )?;

        region.replace_cards(cards);
        Ok(true)
    }

    /// Handle a click on a rendered region
    ///
    /// `payload` is the `data-meta` value of the clicked card, or `None` when
    /// the click landed outside a card or on a card without one. Returns
    /// whether the card was activated.
    ///
    /// # Errors
    ///
    /// A payload that does not decode to a gift record.
    pub fn handle_click(&self, payload: Option<&str>) -> ShopResult<bool> {
        if !self.loaded {
            return Ok(false);
        }
        let Some(payload) = payload else {
            return Ok(false);
        };

        let meta = decode_payload(payload)?;
        tracing::debug!(gift = %meta.gift.name, "Gift activated");
        if let Some(handler) = &self.on_activate {
            handler(meta);
        }
        Ok(true)
    }

    /// All gifts ordered by descending total rating
    pub fn best(&self) -> Vec<&Gift> {
        ranked_order(&self.gifts)
    }

    /// All gifts in uniformly random order
    pub fn random(&self) -> Vec<&Gift> {
        self.random_with(&mut rand::rng())
    }

    pub fn random_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Vec<&Gift> {
        random_order(&self.gifts, rng)
    }

    /// Gifts selected by an alias, `None` for unknown aliases
    pub fn by_alias(&self, alias: &str) -> Option<Vec<&Gift>> {
        let filter = self.config.categories.filter_for(alias)?;
        Some(self.gifts.iter().filter(|gift| filter.matches(gift)).collect())
    }

    /// Gifts whose category display name is exactly `name`
    pub fn category(&self, name: &str) -> Vec<&Gift> {
        let filter = CategoryFilter::Named(name);
        self.gifts.iter().filter(|gift| filter.matches(gift)).collect()
    }
}

impl<R: CardRegion> fmt::Debug for Catalog<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("config", &self.config)
            .field("gifts", &self.gifts.len())
            .field("loaded", &self.loaded)
            .field("has_best_region", &self.regions.best.is_some())
            .field("has_all_region", &self.regions.all.is_some())
            .finish()
    }
}

fn ranked_order(gifts: &[Gift]) -> Vec<&Gift> {
    let mut ordered: Vec<&Gift> = gifts.iter().collect();
    // sort_by is stable, ties keep fetched order
    ordered.sort_by(|a, b| b.total_superpowers().total_cmp(&a.total_superpowers()));
    ordered
}

fn random_order<'a, G: Rng + ?Sized>(gifts: &'a [Gift], rng: &mut G) -> Vec<&'a Gift> {
    let mut ordered: Vec<&Gift> = gifts.iter().collect();
    ordered.shuffle(rng);
    ordered
}
