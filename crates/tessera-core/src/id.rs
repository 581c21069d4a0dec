//! Typed ID wrappers for persisted entities.
//!
//! Identifiers are generated by the storage layer (`AUTO_INCREMENT`), so the
//! wrappers can only be built from a value the database handed back.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
        #[serde(transparent)]
        pub struct $name(pub i32);

        impl $name {
            /// Wraps a raw database identifier.
            #[must_use]
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }

            /// Returns the raw database identifier.
            #[must_use]
            pub const fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Identifier of a row in `USER_TEST`.
    UserId
);

entity_id!(
    /// Identifier of a row in `INSURANCE_TEST`.
    InsuranceId
);

entity_id!(
    /// Identifier of a row in `ADVERTISEMENT`.
    AdvertisementId
);
