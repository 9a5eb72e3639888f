//! Gift Card Components
//!
//! A single gift card and the grid that hosts a rendered card list.

use dioxus::prelude::*;
use giftshop_core::card::CARD_CLASS;
use giftshop_core::GiftCard;

/// Properties for the GiftCardItem component
#[derive(Clone, PartialEq, Props)]
pub struct GiftCardItemProps {
    /// The rendered card
    pub card: GiftCard,
    /// Handler receiving the card's `data-meta` payload
    pub on_activate: EventHandler<String>,
}

/// Displays one gift card
///
/// The element carries `data-category` and `data-meta` so the markup keeps
/// the same contract as a server-rendered card.
#[component]
pub fn GiftCardItem(props: GiftCardItemProps) -> Element {
    let card = props.card.clone();
    let payload = props.card.payload.clone();
    let on_activate = props.on_activate;
    let header_class = card.header_class();

    rsx! {
        a {
            class: CARD_CLASS,
            href: "#",
            "data-category": "{card.category}",
            "data-meta": "{card.payload}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                evt.stop_propagation();
                on_activate.call(payload.clone());
            },
            img {
                class: "card__picture",
                src: "{card.picture}",
                alt: "{card.category}",
            }
            div { class: "card__text",
                h4 { class: "{header_class}", "{card.category}" }
                h3 { class: "h3 card__subheader", "{card.name}" }
            }
        }
    }
}

/// Properties for the GiftGrid component
#[derive(Clone, PartialEq, Props)]
pub struct GiftGridProps {
    /// Cards in render order
    pub cards: Vec<GiftCard>,
    /// CSS class of the container
    #[props(default = "cards".to_string())]
    pub class: String,
    /// Single click handler for the whole grid
    ///
    /// Receives `Some(payload)` for a click on a card and `None` for a click
    /// anywhere else inside the grid.
    pub on_click: EventHandler<Option<String>>,
}

/// Container of gift cards with one delegated click handler
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GiftGrid {
///         class: "gifts__list",
///         cards: all_cards(),
///         on_click: move |payload: Option<String>| {
///             catalog.read().handle_click(payload.as_deref())
///         }
///     }
/// }
/// ```
#[component]
pub fn GiftGrid(props: GiftGridProps) -> Element {
    let on_click = props.on_click;

    rsx! {
        div {
            class: "{props.class}",
            onclick: move |_| {
                tracing::trace!("Grid click outside any card");
                on_click.call(None);
            },
            for (index, card) in props.cards.iter().enumerate() {
                GiftCardItem {
                    key: "{index}-{card.name}",
                    card: card.clone(),
                    on_activate: move |payload: String| {
                        tracing::debug!(card = index, "Card activated");
                        on_click.call(Some(payload));
                    },
                }
            }
        }
    }
}
