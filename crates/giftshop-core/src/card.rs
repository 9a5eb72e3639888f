//! Rendered gift cards, their activation payload and the regions they
//! are rendered into.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::category::CategoryTable;
use crate::error::{ShopError, ShopResult};
use crate::types::{Gift, GiftMeta};

/// CSS class of a card element
pub const CARD_CLASS: &str = "card";

/// A gift rendered as a clickable card
///
/// Mirrors the markup contract of a card: `category` is exposed as the
/// `data-category` attribute and `payload` as `data-meta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCard {
    pub category: String,
    pub name: String,
    pub picture: String,
    pub style_modifier: String,
    /// Opaque activation payload, see [`encode_payload`]
    pub payload: String,
}

impl GiftCard {
    /// Render a gift, resolving its picture and style modifier
    ///
    /// # Errors
    ///
    /// [`ShopError::UnknownCategory`] if the gift's category is not in the
    /// table, or a serialization error for the payload.
    pub fn render(gift: &Gift, categories: &CategoryTable) -> ShopResult<Self> {
        let category = categories.resolve(gift)?;
        let meta = GiftMeta {
            gift: gift.clone(),
            picture: category.picture.clone(),
            style_modifier: category.alias.clone(),
        };
        let payload = encode_payload(&meta)?;

        Ok(Self {
            category: gift.category.clone(),
            name: gift.name.clone(),
            picture: meta.picture,
            style_modifier: meta.style_modifier,
            payload,
        })
    }

    /// Class list of the card header, e.g. `card__header card__header--work`
    pub fn header_class(&self) -> String {
        format!(
            "h4 {CARD_CLASS}__header {CARD_CLASS}__header--{}",
            self.style_modifier
        )
    }
}

/// Render a sequence of gifts, failing on the first unknown category
pub fn render_cards<'a>(
    gifts: impl IntoIterator<Item = &'a Gift>,
    categories: &CategoryTable,
) -> ShopResult<Vec<GiftCard>> {
    gifts
        .into_iter()
        .map(|gift| GiftCard::render(gift, categories))
        .collect()
}

/// Serialize a gift meta record into an attribute-safe payload
pub fn encode_payload(meta: &GiftMeta) -> ShopResult<String> {
    let json = serde_json::to_vec(meta)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a payload produced by [`encode_payload`]
pub fn decode_payload(payload: &str) -> ShopResult<GiftMeta> {
    let json = URL_SAFE_NO_PAD
        .decode(payload.trim())
        .map_err(|e| ShopError::Payload(e.to_string()))?;
    serde_json::from_slice(&json).map_err(|e| ShopError::Payload(e.to_string()))
}

/// A container that cards are rendered into
///
/// Rendering replaces the whole content of the region.
pub trait CardRegion {
    fn replace_cards(&mut self, cards: Vec<GiftCard>);
}

impl CardRegion for Vec<GiftCard> {
    fn replace_cards(&mut self, cards: Vec<GiftCard>) {
        *self = cards;
    }
}
