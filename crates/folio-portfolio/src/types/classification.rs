//! Categorical labels used for allocation breakdowns.

use serde::{Deserialize, Serialize};

/// Classification labels for a holding.
///
/// Labels are free text as reported by the detail feed or typed into the
/// holdings sheet. Missing labels fall into the default bucket when
/// aggregating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Industry sector (e.g. "Energy").
    pub sector: Option<String>,
    /// Country of listing or domicile.
    pub country: Option<String>,
    /// Credit or analyst rating.
    pub rating: Option<String>,
}

impl Classification {
    /// Creates an empty classification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sector.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the rating.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Fills labels missing here from `other`.
    #[must_use]
    pub fn or(self, other: &Classification) -> Self {
        Self {
            sector: self.sector.or_else(|| other.sector.clone()),
            country: self.country.or_else(|| other.country.clone()),
            rating: self.rating.or_else(|| other.rating.clone()),
        }
    }
}
