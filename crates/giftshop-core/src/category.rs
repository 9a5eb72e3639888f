//! Gift categories and the lookup table used for filtering and styling.

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};
use crate::types::Gift;

/// Alias of the catch-all category
pub const ALL_ALIAS: &str = "all";

/// A configured gift category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftCategory {
    /// Display name, matched against [`Gift::category`]
    pub name: String,
    /// Short key used for filtering and as the card style modifier
    pub alias: String,
    /// Picture asset path; empty for the catch-all category
    pub picture: String,
}

impl GiftCategory {
    pub fn new(name: impl Into<String>, alias: impl Into<String>, picture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            picture: picture.into(),
        }
    }
}

/// How a category alias selects gifts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    /// Every gift, in original order
    All,
    /// Gifts whose category equals this display name
    Named(&'a str),
}

impl CategoryFilter<'_> {
    pub fn matches(&self, gift: &Gift) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => gift.category == *name,
        }
    }
}

/// The catch-all category plus the specific ones gifts belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    all: GiftCategory,
    specific: Vec<GiftCategory>,
}

impl CategoryTable {
    pub fn new(all: GiftCategory, specific: Vec<GiftCategory>) -> Self {
        Self { all, specific }
    }

    /// The catch-all category
    pub fn all(&self) -> &GiftCategory {
        &self.all
    }

    /// Specific categories in configuration order
    pub fn specific(&self) -> &[GiftCategory] {
        &self.specific
    }

    /// Catch-all first, then the specific categories
    pub fn iter(&self) -> impl Iterator<Item = &GiftCategory> {
        std::iter::once(&self.all).chain(self.specific.iter())
    }

    /// Resolve an alias to a filter. Unknown aliases give `None`.
    pub fn filter_for(&self, alias: &str) -> Option<CategoryFilter<'_>> {
        if alias == self.all.alias {
            return Some(CategoryFilter::All);
        }
        self.specific
            .iter()
            .find(|category| category.alias == alias)
            .map(|category| CategoryFilter::Named(category.name.as_str()))
    }

    /// Find the specific category a gift belongs to
    ///
    /// # Errors
    ///
    /// [`ShopError::UnknownCategory`] if no specific category carries the
    /// gift's category name.
    pub fn resolve(&self, gift: &Gift) -> ShopResult<&GiftCategory> {
        self.specific
            .iter()
            .find(|category| category.name == gift.category)
            .ok_or_else(|| ShopError::UnknownCategory(gift.category.clone()))
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new(
            GiftCategory::new("All", ALL_ALIAS, ""),
            vec![
                GiftCategory::new("For Work", "work", "assets/common/gifts/gift-for-work.png"),
                GiftCategory::new("For Health", "health", "assets/common/gifts/gift-for-health.png"),
                GiftCategory::new("For Harmony", "harmony", "assets/common/gifts/gift-for-harmony.png"),
            ],
        )
    }
}
