//! Star Rating Component
//!
//! One superpower row of the gift modal: name, raw rating and five
//! snowflake stars.

use dioxus::prelude::*;
use giftshop_core::SuperpowerRow;

/// Snowflake used for every star slot
pub const STAR_GLYPH: &str = "\u{2744}";

/// CSS class of a star slot
pub fn star_class(filled: bool) -> &'static str {
    if filled {
        "card__star"
    } else {
        "card__star card__star--disabled"
    }
}

#[component]
pub fn StarRating(row: SuperpowerRow) -> Element {
    let filled = row.filled();

    rsx! {
        div { class: "card__superpower",
            div { "{row.name}" }
            div { class: "card__rating",
                span { "{row.rating}" }
                div { class: "card__stars", "aria-label": "{filled} of 5",
                    for (slot, filled) in row.stars.iter().enumerate() {
                        span {
                            key: "{slot}",
                            class: star_class(*filled),
                            "{STAR_GLYPH}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_stars_get_modifier() {
        assert_eq!(star_class(true), "card__star");
        assert_eq!(star_class(false), "card__star card__star--disabled");
    }
}
