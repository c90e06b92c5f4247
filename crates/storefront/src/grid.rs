//! The shoe grid: one card per shoe, in input order.

use chrono::{DateTime, Utc};

use shoegrid_catalog::Shoe;

use crate::card::ShoeCard;
use crate::theme::Theme;
use crate::view::{Attributes, Element};

pub const GRID_GAP_PX: u32 = 36;
pub const CARD_MIN_WIDTH_PX: u32 = 340;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeGrid {
    cards: Vec<ShoeCard>,
}

impl ShoeGrid {
    /// Classify and format every shoe at `now`. Slugs are expected to be
    /// unique; `Catalog` enforces that on load.
    pub fn new<'a>(shoes: impl IntoIterator<Item = &'a Shoe>, now: DateTime<Utc>) -> Self {
        Self {
            cards: shoes.into_iter().map(|shoe| ShoeCard::new(shoe, now)).collect(),
        }
    }

    pub fn cards(&self) -> &[ShoeCard] {
        &self.cards
    }

    /// Attributes each card receives on its root.
    pub fn card_attributes() -> Attributes {
        Attributes::new()
            .with("class", "shoe-grid__item")
            .with("style", format!("flex: 1; min-width: {CARD_MIN_WIDTH_PX}px"))
    }

    pub fn render(&self, theme: &Theme) -> Element {
        let card_attrs = Self::card_attributes();
        Element::new("div")
            .class("shoe-grid")
            .style(format!("display: flex; flex-wrap: wrap; gap: {GRID_GAP_PX}px"))
            .children(self.cards.iter().map(|card| card.render(theme, &card_attrs)))
    }
}
