//! User entity (`USER_TEST`).

use super::Column;
use crate::{Entity, UserId};
use serde::{Deserialize, Serialize};

/// `NAME VARCHAR(200)`
pub const USER_NAME: Column = Column::new("NAME", 200);
/// `EMAIL VARCHAR(100)`
pub const USER_EMAIL: Column = Column::new("EMAIL", 100);

/// A persisted user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Storage-generated identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address, stored as given.
    pub email: String,
}

/// A user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl NewUser {
    /// Creates a new user draft.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for User {
    type Id = UserId;
    type Draft = NewUser;

    const NAME: &'static str = "User";
    const TABLE: &'static str = "USER_TEST";
    const COLUMNS: &'static [Column] = &[USER_NAME, USER_EMAIL];

    fn id(&self) -> UserId {
        self.id
    }

    fn from_draft(id: UserId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    fn to_draft(&self) -> NewUser {
        NewUser::new(self.name.clone(), self.email.clone())
    }

    fn column_values(draft: &NewUser) -> Vec<&str> {
        vec![draft.name.as_str(), draft.email.as_str()]
    }
}
