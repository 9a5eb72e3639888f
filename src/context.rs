//! Shared context for the Gift Shop pages.
//!
//! Provides the launch settings, the gift source and the active gift shown
//! in the modal.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(None::<GiftMeta>));
//!
//! // In child components
//! let mut active = use_active_gift();
//! active.set(Some(meta));
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use giftshop_core::catalog::DEFAULT_BEST_AMOUNT;
use giftshop_core::{
    CardRegion, Catalog, CatalogConfig, CatalogRegions, Countdown, FileSource, Gift, GiftCard,
    GiftMeta, GiftSource, HttpSource, ShopResult,
};

/// Settings chosen on the command line
#[derive(Debug, Clone)]
pub struct ShopSettings {
    /// Directory holding gifts.json
    pub assets: PathBuf,
    /// Base URL to fetch gifts.json from instead of `assets`
    pub gifts_url: Option<String>,
    /// Size of the best gifts panel
    pub best_amount: usize,
    /// Target of the countdown widget
    pub countdown: Countdown,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            gifts_url: None,
            best_amount: DEFAULT_BEST_AMOUNT,
            countdown: Countdown::until_new_year(chrono::Utc::now()),
        }
    }
}

impl ShopSettings {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            best_amount: self.best_amount,
            ..CatalogConfig::default()
        }
    }

    /// The configured gift resource
    pub fn source(&self) -> ShopSource {
        match &self.gifts_url {
            Some(url) => ShopSource::Http(HttpSource::new(url.clone())),
            None => ShopSource::File(FileSource::new(self.assets.clone())),
        }
    }
}

/// Get the launch settings.
pub fn get_settings() -> ShopSettings {
    crate::get_settings()
}

/// Gift resource picked at launch
#[derive(Debug, Clone)]
pub enum ShopSource {
    File(FileSource),
    Http(HttpSource),
}

impl GiftSource for ShopSource {
    async fn fetch(&self) -> ShopResult<Vec<Gift>> {
        match self {
            ShopSource::File(source) => source.fetch().await,
            ShopSource::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ShopSource::File(source) => source.describe(),
            ShopSource::Http(source) => source.describe(),
        }
    }
}

/// A card region backed by a signal, so rendering re-renders the grid
#[derive(Clone, Copy)]
pub struct SignalRegion(pub Signal<Vec<GiftCard>>);

impl CardRegion for SignalRegion {
    fn replace_cards(&mut self, cards: Vec<GiftCard>) {
        self.0.set(cards);
    }
}

/// Catalog as owned by a page
pub type PageCatalog = Catalog<SignalRegion>;

/// Build a page catalog whose activations open the gift modal.
///
/// Pass `None` for regions the page does not show.
pub fn build_catalog(
    mut active: Signal<Option<GiftMeta>>,
    best: Option<SignalRegion>,
    all: Option<SignalRegion>,
) -> PageCatalog {
    Catalog::new(get_settings().catalog_config(), CatalogRegions::new(best, all))
        .on_activate(move |meta| active.set(Some(meta)))
}

/// Load a page catalog and publish it once it rendered.
///
/// A failed load leaves the page inert; nothing is retried.
pub fn spawn_catalog_load(mut slot: Signal<Option<PageCatalog>>, mut catalog: PageCatalog) {
    spawn(async move {
        let source = get_settings().source();
        match catalog.load(&source).await {
            Ok(()) => {
                tracing::info!(gifts = catalog.gifts().len(), "Gift catalog ready");
                slot.set(Some(catalog));
            }
            Err(e) => {
                tracing::error!("Failed to load gifts from {}: {}", source.describe(), e);
            }
        }
    });
}

/// Relay a click on a card grid to the page catalog.
pub fn delegate_click(catalog: Signal<Option<PageCatalog>>, payload: Option<String>) {
    let guard = catalog.read();
    let Some(shop) = &*guard else {
        return;
    };
    if let Err(e) = shop.handle_click(payload.as_deref()) {
        tracing::warn!("Ignoring card click: {}", e);
    }
}

/// Hook to access the gift shown in the modal.
///
/// `None` while the modal is closed.
pub fn use_active_gift() -> Signal<Option<GiftMeta>> {
    use_context::<Signal<Option<GiftMeta>>>()
}

/// Scroll position and size of the page, measured by the layout
#[derive(Clone, Copy)]
pub struct Viewport {
    /// Vertical scroll offset of the page in pixels
    pub scroll_top: Signal<f64>,
    /// Width of the page in pixels
    pub width: Signal<f64>,
    /// Element at the very top of the page
    pub top: Signal<Option<Rc<MountedData>>>,
    /// Mounted sections reachable from the menu, by element id
    pub anchors: Signal<HashMap<&'static str, Rc<MountedData>>>,
    /// Section waiting to be scrolled into view once it is mounted
    pub pending: Signal<Option<&'static str>>,
}

/// Element ids of the menu sections
pub const ABOUT_SECTION: &str = "about";
pub const BEST_SECTION: &str = "best";
pub const CONTACTS_SECTION: &str = "footer";

impl Viewport {
    pub fn new() -> Self {
        Self {
            scroll_top: Signal::new(0.0),
            width: Signal::new(f64::MAX),
            top: Signal::new(None),
            anchors: Signal::new(HashMap::new()),
            pending: Signal::new(None),
        }
    }

    pub fn register_anchor(&self, id: &'static str, element: Rc<MountedData>) {
        let mut anchors = self.anchors;
        anchors.write().insert(id, element);
    }

    /// Forget sections of a page that is going away
    pub fn drop_anchors(&self, ids: &[&'static str]) {
        let mut anchors = self.anchors;
        let mut anchors = anchors.write();
        for id in ids {
            anchors.remove(id);
        }
    }

    /// Ask for a section to be scrolled into view, now or once it mounts
    pub fn scroll_to_section(&self, id: &'static str) {
        let mut pending = self.pending;
        pending.set(Some(id));
    }

    /// Scroll to the pending section if it is mounted
    pub fn flush_pending(&self) {
        let Some(id) = (self.pending)() else {
            return;
        };
        let Some(element) = self.anchors.read().get(id).cloned() else {
            return;
        };
        let mut pending = self.pending;
        pending.set(None);
        spawn(async move {
            if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!(section = id, "Scroll to section failed: {:?}", e);
            }
        });
    }

    /// Smoothly bring the top of the page back into view
    pub fn scroll_to_top(&self) {
        let Some(top) = (self.top)() else {
            return;
        };
        spawn(async move {
            if let Err(e) = top.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!("Scroll to top failed: {:?}", e);
            }
        });
    }
}

/// Hook to access the page viewport.
pub fn use_viewport() -> Viewport {
    use_context::<Viewport>()
}
