//! Theme module for the Gift Shop.

mod styles;

pub use styles::GLOBAL_STYLES;
