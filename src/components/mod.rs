//! UI Components of the Gift Shop pages.
//!
//! Page widgets that own state or talk to the page context. Stateless
//! building blocks live in the `giftshop-ui` crate.

mod countdown_timer;
mod footer;
mod gift_modal;
mod header;
mod scroll_up;
mod slider;

pub use countdown_timer::CountdownTimer;
pub use footer::ShopFooter;
pub use gift_modal::GiftModal;
pub use header::ShopHeader;
pub use scroll_up::ScrollUpButton;
pub use slider::GiftSlider;
