use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shoegrid_core::{Cents, DomainError, DomainResult, Entity, Slug};

use crate::variant::{self, Variant};

/// A shoe as listed in the catalog (read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shoe {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    pub price: Cents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Cents>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl Shoe {
    /// Derive the display variant at `now`. Never stored.
    pub fn variant(&self, now: DateTime<Utc>) -> Variant {
        variant::classify(self.sale_price, self.release_date, now)
    }

    /// Link target for this shoe's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Check the record-level invariants.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!("{}: name cannot be empty", self.slug)));
        }

        if self.image_src.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{}: image source cannot be empty",
                self.slug
            )));
        }

        if let Some(sale) = self.sale_price {
            if sale >= self.price {
                return Err(DomainError::invariant(format!(
                    "{}: sale price {} must be below price {}",
                    self.slug,
                    sale.get(),
                    self.price.get()
                )));
            }
        }

        Ok(())
    }
}

impl Entity for Shoe {
    type Id = Slug;

    fn id(&self) -> &Self::Id {
        &self.slug
    }
}
