//! Shop Footer Component

use dioxus::prelude::*;

use crate::context::{use_viewport, CONTACTS_SECTION};

/// Contact cards shown in the footer
const CONTACTS: [(&str, &str); 3] = [
    ("\u{260E}", "+375 (29) 743-15-77"),
    ("\u{2709}", "gifts@rollingscopes.com"),
    ("\u{2316}", "Christmas Ave, 25, Winter Village"),
];

#[component]
pub fn ShopFooter() -> Element {
    let viewport = use_viewport();

    rsx! {
        footer {
            class: "footer",
            id: CONTACTS_SECTION,
            onmounted: move |evt| viewport.register_anchor(CONTACTS_SECTION, evt.data()),
            div { class: "footer__contacts",
                for (icon, text) in CONTACTS {
                    div { key: "{text}", class: "footer__contact",
                        span { class: "footer__contact-icon", "{icon}" }
                        span { class: "footer__contact-text", "{text}" }
                    }
                }
            }
            p { class: "footer__copyright", "\u{00A9} The Gifts" }
        }
    }
}
