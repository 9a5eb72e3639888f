//! Gift Modal Component
//!
//! Detail view of the activated gift: picture, description and the four
//! superpowers with their star ratings.

use dioxus::prelude::*;
use giftshop_core::GiftDetail;
use giftshop_ui::StarRating;

use crate::context::use_active_gift;

/// Gift Modal
///
/// Shown while a gift is active. Clicking the backdrop or the close button
/// clears the active gift; clicks inside the dialog are kept.
#[component]
pub fn GiftModal() -> Element {
    let mut active = use_active_gift();

    let Some(meta) = active() else {
        return rsx! {};
    };
    let detail = GiftDetail::from_meta(&meta);
    let header_class = format!("h4 card__header card__header--{}", detail.style_modifier);

    let mut close = move || {
        tracing::debug!("Closing gift modal");
        active.set(None);
    };

    rsx! {
        div {
            class: "modal",
            onclick: move |_| close(),

            div {
                class: "modal__dialog",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    r#type: "button",
                    class: "modal__close",
                    "aria-label": "Close",
                    onclick: move |_| close(),
                    "\u{2715}"
                }

                img {
                    class: "modal__picture",
                    src: "{detail.picture}",
                    alt: "{detail.category}",
                }

                div { class: "modal__text",
                    h4 { class: "{header_class}", "{detail.category}" }
                    h3 { class: "h3", "{detail.name}" }
                    p { class: "card__description", "{detail.description}" }

                    div { class: "card__info",
                        h4 { class: "h4", "Adds superpowers to:" }
                        div { class: "card__superpowers",
                            for row in detail.superpowers.iter() {
                                StarRating { key: "{row.name}", row: row.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}
