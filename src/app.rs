use std::rc::Rc;

use dioxus::prelude::*;
use giftshop_core::GiftMeta;

use crate::components::{GiftModal, ScrollUpButton, ShopFooter, ShopHeader};
use crate::context::{use_active_gift, Viewport};
use crate::pages::{Gifts, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Home page with the slider, countdown and best gifts
/// - `/gifts` - Full gift list with category tabs
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ShopLayout)]
        #[route("/")]
        Home {},
        #[route("/gifts")]
        Gifts {},
}

/// Root application component.
///
/// Provides global styles, the active gift context and routing.
#[component]
pub fn App() -> Element {
    // The gift shown in the modal, shared by both pages
    let active_gift: Signal<Option<GiftMeta>> = use_signal(|| None);
    use_context_provider(|| active_gift);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Header, footer and overlays around every page.
///
/// The layout is the page's scroll container; it measures its own scroll
/// offset and width for the viewport-dependent widgets.
#[component]
fn ShopLayout() -> Element {
    let active_gift = use_active_gift();
    let viewport = use_context_provider(Viewport::new);
    let mut page: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Re-runs when a section is requested or mounted
    use_effect(move || viewport.flush_pending());

    let measure_scroll = move |_| {
        let Some(page) = page() else { return };
        let mut scroll_top = viewport.scroll_top;
        spawn(async move {
            if let Ok(offset) = page.get_scroll_offset().await {
                scroll_top.set(offset.y);
            }
        });
    };

    let measure_width = move |evt: Event<ResizeData>| {
        if let Ok(size) = evt.data().get_border_box_size() {
            let mut width = viewport.width;
            width.set(size.width);
        }
    };

    rsx! {
        div {
            class: if active_gift().is_some() { "page modal-opened" } else { "page" },
            onmounted: move |evt| page.set(Some(evt.data())),
            onscroll: measure_scroll,
            onresize: measure_width,
            div {
                class: "page__top",
                onmounted: move |evt| {
                    let mut top = viewport.top;
                    top.set(Some(evt.data()));
                },
            }
            ShopHeader {}
            Outlet::<Route> {}
            ShopFooter {}
            ScrollUpButton {}
            GiftModal {}
        }
    }
}
