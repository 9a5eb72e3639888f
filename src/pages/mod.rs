//! Page components for the Gift Shop.

mod gifts;
mod home;

pub use gifts::Gifts;
pub use home::Home;
