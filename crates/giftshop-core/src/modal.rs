//! Presentation model of the gift detail modal.

use crate::types::{stars_for_rating, GiftMeta, MAX_STARS};

/// One superpower row of the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperpowerRow {
    /// Superpower name, e.g. "live"
    pub name: &'static str,
    /// Rating exactly as the resource provides it
    pub rating: String,
    /// `true` for filled star slots, always [`MAX_STARS`] long
    pub stars: [bool; MAX_STARS],
}

impl SuperpowerRow {
    fn new(name: &'static str, rating: &str) -> Self {
        let filled = stars_for_rating(rating);
        let mut stars = [false; MAX_STARS];
        for (slot, star) in stars.iter_mut().enumerate() {
            *star = slot < filled;
        }

        Self {
            name,
            rating: rating.to_string(),
            stars,
        }
    }

    pub fn filled(&self) -> usize {
        self.stars.iter().filter(|filled| **filled).count()
    }
}

/// Everything the modal shows for one gift
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftDetail {
    pub category: String,
    pub style_modifier: String,
    pub name: String,
    pub description: String,
    pub picture: String,
    pub superpowers: Vec<SuperpowerRow>,
}

impl GiftDetail {
    pub fn from_meta(meta: &GiftMeta) -> Self {
        let superpowers = meta
            .gift
            .superpowers
            .entries()
            .into_iter()
            .map(|(name, rating)| SuperpowerRow::new(name, rating))
            .collect();

        Self {
            category: meta.gift.category.clone(),
            style_modifier: meta.style_modifier.clone(),
            name: meta.gift.name.clone(),
            description: meta.gift.description.clone(),
            picture: meta.picture.clone(),
            superpowers,
        }
    }
}
