//! Gift Shop UI Components
//!
//! This crate provides the Dioxus components shared by the storefront pages:
//! gift cards and the card grid, category tabs, star ratings and buttons.
//!
//! Components are stateless. Catalog state lives in `giftshop-core` and is
//! passed in as plain props; interactions are reported through
//! `EventHandler`s.

pub mod components;

pub use components::*;
