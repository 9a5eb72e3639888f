//! Core types for the Gift Shop

use serde::{Deserialize, Serialize};

/// Highest number of stars a single superpower can show
pub const MAX_STARS: usize = 5;

/// Rating points per star
pub const POINTS_PER_STAR: f64 = 100.0;

/// A gift as it appears in the gift resource
///
/// Gifts are immutable once fetched. Duplicates are legal and render
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Category display label, e.g. "For Work"
    pub category: String,
    /// Ratings for the four superpowers
    pub superpowers: Superpowers,
}

impl Gift {
    /// Sum of the four superpower ratings
    pub fn total_superpowers(&self) -> f64 {
        self.superpowers.total()
    }
}

/// Ratings of the four fixed superpowers
///
/// Ratings are kept as the strings the resource provides ("0" to "500" in
/// steps of 100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Superpowers {
    pub live: String,
    pub create: String,
    pub love: String,
    pub dream: String,
}

impl Superpowers {
    /// Superpowers in display order, as `(name, rating)` pairs
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("live", self.live.as_str()),
            ("create", self.create.as_str()),
            ("love", self.love.as_str()),
            ("dream", self.dream.as_str()),
        ]
    }

    /// Sum of all ratings; unparseable ratings count as zero
    pub fn total(&self) -> f64 {
        self.entries()
            .iter()
            .map(|(_, rating)| parse_rating(rating))
            .sum()
    }
}

/// Parse a rating string as a number
///
/// Signs and fractions are accepted ("-100", "150.5"). Anything else,
/// including non-finite values, counts as zero.
pub fn parse_rating(rating: &str) -> f64 {
    rating
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Number of filled stars for a rating string, between 0 and [`MAX_STARS`]
pub fn stars_for_rating(rating: &str) -> usize {
    let stars = (parse_rating(rating) / POINTS_PER_STAR).floor();
    stars.clamp(0.0, MAX_STARS as f64) as usize
}

/// Activation payload for a rendered card
///
/// The gift's own fields are flattened next to the picture and style
/// modifier resolved from its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftMeta {
    #[serde(flatten)]
    pub gift: Gift,
    /// Picture asset path of the gift's category
    pub picture: String,
    /// Style key (the category alias)
    #[serde(rename = "styleModifier")]
    pub style_modifier: String,
}


#[cfg(test)]
mod tests {
    use super::fixtures::gift;
    use super::*;

    #[test]
    fn total_sums_all_four_ratings() {
        let mug = gift("Mug", "For Work", ["100", "200", "300", "400"]);
        assert_eq!(mug.total_superpowers(), 1000.0);
    }

    #[test]
    fn total_ignores_unparseable_ratings() {
        let odd = gift("Odd", "For Work", ["100", "lots", "", " 200 "]);
        assert_eq!(odd.total_superpowers(), 300.0);
    }

    #[test]
    fn ratings_accept_signs_and_fractions() {
        assert_eq!(parse_rating("-100"), -100.0);
        assert_eq!(parse_rating("150.5"), 150.5);
        assert_eq!(parse_rating("+500"), 500.0);
        assert_eq!(parse_rating("NaN"), 0.0);
        assert_eq!(parse_rating("inf"), 0.0);

        let mixed = gift("Mixed", "For Work", ["-100", "150.5", "0", "49.5"]);
        assert_eq!(mixed.total_superpowers(), 100.0);
        assert_eq!(stars_for_rating("-100"), 0);
        assert_eq!(stars_for_rating("150.5"), 1);
    }

    #[test]
    fn huge_ratings_sum_without_overflow() {
        let huge = gift("Huge", "For Work", ["2000000000"; 4]);
        assert_eq!(huge.total_superpowers(), 8_000_000_000.0);
        assert_eq!(stars_for_rating("2000000000"), MAX_STARS);
    }

    #[test]
    fn stars_are_hundreds_capped_at_five() {
        assert_eq!(stars_for_rating("0"), 0);
        assert_eq!(stars_for_rating("300"), 3);
        assert_eq!(stars_for_rating("350"), 3);
        assert_eq!(stars_for_rating("500"), 5);
        assert_eq!(stars_for_rating("900"), 5);
        assert_eq!(stars_for_rating("n/a"), 0);
    }

    #[test]
    fn gift_deserializes_from_resource_shape() {
        let json = r#"{
            "name": "Console.log Guru",
            "description": "Uses console.log like a crystal ball.",
            "category": "For Work",
            "superpowers": { "live": "+500", "create": "+500", "love": "+200", "dream": "+400" }
        }"#;
        let parsed: Gift = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.name, "Console.log Guru");
        assert_eq!(parsed.superpowers.love, "+200");
        // "+500" parses as a plain number
        assert_eq!(parsed.total_superpowers(), 1600.0);
    }

    #[test]
    fn meta_flattens_gift_fields() {
        let meta = GiftMeta {
            gift: gift("Mug", "For Work", ["100", "100", "100", "100"]),
            picture: "gift-for-work.png".to_string(),
            style_modifier: "work".to_string(),
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["name"], "Mug");
        assert_eq!(value["category"], "For Work");
        assert_eq!(value["styleModifier"], "work");
        assert_eq!(value["superpowers"]["dream"], "100");
    }
}
