//! Home page - hero, about, slider, best gifts and the countdown.
//!
//! The page shows only the best gifts panel, so its catalog has no full
//! list region.

use dioxus::prelude::*;
use giftshop_core::GiftCard;
use giftshop_ui::{Button, GiftGrid};

use crate::app::Route;
use crate::components::{CountdownTimer, GiftSlider};
use crate::context::{
    build_catalog, delegate_click, spawn_catalog_load, use_active_gift, use_viewport, PageCatalog,
    SignalRegion, ABOUT_SECTION, BEST_SECTION,
};

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let active_gift = use_active_gift();
    let best_cards: Signal<Vec<GiftCard>> = use_signal(Vec::new);
    let catalog: Signal<Option<PageCatalog>> = use_signal(|| None);
    let viewport = use_viewport();

    use_drop(move || viewport.drop_anchors(&[ABOUT_SECTION, BEST_SECTION]));

    // Load gifts on mount
    use_effect(move || {
        let shop = build_catalog(active_gift, Some(SignalRegion(best_cards)), None);
        spawn_catalog_load(catalog, shop);
    });

    let explore = move |_: ()| {
        navigator.push(Route::Gifts {});
    };

    rsx! {
        main { class: "home",
            section { class: "hero",
                h1 { class: "h1 hero__title", "Get the perfect gift for yourself" }
                p { class: "hero__text",
                    "Warm wishes and a little magic for the whole team."
                }
                Button { onclick: explore, "Explore gifts" }
            }

            section {
                class: "about",
                id: ABOUT_SECTION,
                onmounted: move |evt| viewport.register_anchor(ABOUT_SECTION, evt.data()),
                h2 { class: "h2 about__title", "Unleash your inner superhero" }
                p { class: "about__text",
                    "This New Year, pick a gift that boosts your productivity, "
                    "health and harmony. Every gift comes with four superpowers."
                }
            }

            GiftSlider {}

            section {
                class: "best",
                id: BEST_SECTION,
                onmounted: move |evt| viewport.register_anchor(BEST_SECTION, evt.data()),
                h2 { class: "h2 best__title", "Best gifts" }
                GiftGrid {
                    class: "best__list cards".to_string(),
                    cards: best_cards(),
                    on_click: move |payload| delegate_click(catalog, payload),
                }
            }

            section { class: "cta",
                h2 { class: "h2 cta__title", "Ready to start your journey?" }
                p { class: "cta__text", "The New Year is coming" }
                CountdownTimer {}
                Button { onclick: explore, "Check the gifts" }
            }
        }
    }
}
