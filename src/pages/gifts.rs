//! Gifts page - the full gift list with category tabs.

use dioxus::prelude::*;
use giftshop_core::{GiftCard, GiftCategory, ALL_ALIAS};
use giftshop_ui::{CategoryTabs, GiftGrid};

use crate::context::{
    build_catalog, delegate_click, get_settings, spawn_catalog_load, use_active_gift, PageCatalog,
    SignalRegion,
};

#[component]
pub fn Gifts() -> Element {
    let active_gift = use_active_gift();
    let all_cards: Signal<Vec<GiftCard>> = use_signal(Vec::new);
    let mut catalog: Signal<Option<PageCatalog>> = use_signal(|| None);
    let mut selected = use_signal(|| ALL_ALIAS.to_string());
    let categories: Vec<GiftCategory> = use_hook(|| {
        get_settings()
            .catalog_config()
            .categories
            .iter()
            .cloned()
            .collect()
    });

    // Load gifts on mount
    use_effect(move || {
        let shop = build_catalog(active_gift, None, Some(SignalRegion(all_cards)));
        spawn_catalog_load(catalog, shop);
    });

    let on_select = move |alias: String| {
        let mut guard = catalog.write();
        let Some(shop) = &mut *guard else {
            return;
        };
        match shop.render_filtered(&alias) {
            Ok(true) => selected.set(alias),
            Ok(false) => tracing::debug!(%alias, "Tab ignored"),
            Err(e) => tracing::error!("Failed to render {} gifts: {}", alias, e),
        }
    };

    rsx! {
        main { class: "gifts",
            section { class: "gifts__hero",
                h2 { class: "h2 gifts__title", "Achieve health, harmony, and inner strength" }
            }

            CategoryTabs {
                categories: categories.clone(),
                selected: selected(),
                on_select: on_select,
            }

            GiftGrid {
                class: "gifts__list cards".to_string(),
                cards: all_cards(),
                on_click: move |payload| delegate_click(catalog, payload),
            }
        }
    }
}
