//! Display variant classification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use shoegrid_core::Cents;

/// How far back a release date may lie and still count as a new release.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The three mutually exclusive ways a shoe can be presented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Banner text shown over the card image, if any.
    pub fn banner_text(&self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just Released!"),
            Variant::Default => None,
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a shoe released at `release_date` is still new at `now`.
///
/// The window is a literal 30 × 24h, inclusive at the boundary. Release dates
/// in the future count as new.
pub fn is_new_shoe(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date) <= Duration::days(NEW_RELEASE_WINDOW_DAYS)
}

/// Classify a shoe. A sale price wins over a recent release date.
pub fn classify(sale_price: Option<Cents>, release_date: DateTime<Utc>, now: DateTime<Utc>) -> Variant {
    if sale_price.is_some() {
        Variant::OnSale
    } else if is_new_shoe(release_date, now) {
        Variant::NewRelease
    } else {
        Variant::Default
    }
}
