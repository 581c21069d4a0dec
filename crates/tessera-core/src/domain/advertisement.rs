//! Advertisement entity (`ADVERTISEMENT`).
//!
//! Stored and reachable through its repository, but not exposed over HTTP.

use super::Column;
use crate::{AdvertisementId, Entity};
use serde::{Deserialize, Serialize};

/// `NAME VARCHAR(200)`
pub const ADVERTISEMENT_NAME: Column = Column::new("NAME", 200);
/// `TYPE VARCHAR(50)`
pub const ADVERTISEMENT_TYPE: Column = Column::new("TYPE", 50);
/// `PRICE VARCHAR(150)`
pub const ADVERTISEMENT_PRICE: Column = Column::new("PRICE", 150);

/// A persisted advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Advertisement {
    pub id: AdvertisementId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Pricing model, stored in the `PRICE` column.
    pub price_model: String,
}

/// An advertisement that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvertisement {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price_model: String,
}

impl NewAdvertisement {
    /// Creates a new advertisement draft.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        price_model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            price_model: price_model.into(),
        }
    }
}

impl Entity for Advertisement {
    type Id = AdvertisementId;
    type Draft = NewAdvertisement;

    const NAME: &'static str = "Advertisement";
    const TABLE: &'static str = "ADVERTISEMENT";
    const COLUMNS: &'static [Column] = &[ADVERTISEMENT_NAME, ADVERTISEMENT_TYPE, ADVERTISEMENT_PRICE];

    fn id(&self) -> AdvertisementId {
        self.id
    }

    fn from_draft(id: AdvertisementId, draft: NewAdvertisement) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            price_model: draft.price_model,
        }
    }

    fn to_draft(&self) -> NewAdvertisement {
        NewAdvertisement::new(self.name.clone(), self.kind.clone(), self.price_model.clone())
    }

    fn column_values(draft: &NewAdvertisement) -> Vec<&str> {
        vec![draft.name.as_str(), draft.kind.as_str(), draft.price_model.as_str()]
    }
}
