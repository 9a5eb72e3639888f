//! Scroll-to-top button, shown on narrow viewports once the page is
//! scrolled down.

use dioxus::prelude::*;
use giftshop_core::ScrollUp;
use giftshop_ui::{Button, ButtonVariant};

use crate::context::use_viewport;

#[component]
pub fn ScrollUpButton() -> Element {
    let viewport = use_viewport();
    let rule = ScrollUp::default();
    let visible = rule.is_visible((viewport.scroll_top)(), (viewport.width)());

    rsx! {
        div { class: if visible { "up up--visible" } else { "up" },
            Button {
                variant: ButtonVariant::Round,
                label: "Scroll to top".to_string(),
                onclick: move |_: ()| viewport.scroll_to_top(),
                "\u{2191}"
            }
        }
    }
}
