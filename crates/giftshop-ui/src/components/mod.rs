//! Reusable storefront components
//!
//! Class names follow the page's BEM stylesheet (`card`, `card__picture`,
//! `tabs__item`, ...).

mod button;
mod category_tabs;
mod gift_card;
mod star_rating;

pub use button::*;
pub use category_tabs::*;
pub use gift_card::*;
pub use star_rating::*;
