//! Shop Header Component
//!
//! Desktop: logo and horizontal menu links.
//! Mobile: logo and a burger button opening a full-screen menu.

use dioxus::prelude::*;
use giftshop_core::{MenuClick, MenuState};

use crate::app::Route;
use crate::context::{use_viewport, ABOUT_SECTION, BEST_SECTION, CONTACTS_SECTION};

/// Menu entries of the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Gifts,
    About,
    Best,
    Contacts,
}

impl NavLocation {
    pub const ALL: [NavLocation; 4] = [
        NavLocation::Gifts,
        NavLocation::About,
        NavLocation::Best,
        NavLocation::Contacts,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Gifts => "Gifts",
            NavLocation::About => "About",
            NavLocation::Best => "Best",
            NavLocation::Contacts => "Contacts",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Gifts => Route::Gifts {},
            NavLocation::About | NavLocation::Best | NavLocation::Contacts => Route::Home {},
        }
    }

    /// Section scrolled into view after navigating, if any
    pub fn section(&self) -> Option<&'static str> {
        match self {
            NavLocation::Gifts => None,
            NavLocation::About => Some(ABOUT_SECTION),
            NavLocation::Best => Some(BEST_SECTION),
            NavLocation::Contacts => Some(CONTACTS_SECTION),
        }
    }
}

/// Shop header with the collapsible mobile menu
#[component]
pub fn ShopHeader() -> Element {
    let viewport = use_viewport();
    let mut menu = use_signal(MenuState::default);
    let mut click = move |target: MenuClick| {
        let open = menu.write().click(target);
        tracing::debug!(?target, open, "Menu click");
    };

    let is_open = menu().is_open();

    rsx! {
        header { class: if is_open { "header menu-burger-opened" } else { "header" },
            div { class: "header__inner",
                Link { to: Route::Home {}, class: "header__logo",
                    span { class: "header__logo-icon", "\u{1F381}" }
                    span { class: "header__logo-text", "The Gifts" }
                }

                nav {
                    class: "header__menu",
                    onclick: move |_| click(MenuClick::Elsewhere),

                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: "header__link",
                            onclick: move |_| {
                                click(MenuClick::Link);
                                if let Some(section) = location.section() {
                                    viewport.scroll_to_section(section);
                                }
                            },
                            {location.display_name()}
                        }
                    }

                    button {
                        r#type: "button",
                        class: "header__close",
                        "aria-label": "Close menu",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            click(MenuClick::Close);
                        },
                        "\u{2715}"
                    }
                }

                button {
                    r#type: "button",
                    class: "header__burger",
                    "aria-label": "Open menu",
                    "aria-expanded": "{is_open}",
                    onclick: move |_| click(MenuClick::Burger),
                    span { class: "header__burger-line" }
                    span { class: "header__burger-line" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_entries_scroll_to_their_sections() {
        let sections: Vec<_> = NavLocation::ALL.iter().map(NavLocation::section).collect();
        assert_eq!(sections, vec![None, Some("about"), Some("best"), Some("footer")]);
        assert!(NavLocation::ALL[1..]
            .iter()
            .all(|location| location.route() == Route::Home {}));
        assert!(NavLocation::Gifts.route() == Route::Gifts {});
    }
}
