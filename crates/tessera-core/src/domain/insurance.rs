//! Insurance entity (`INSURANCE_TEST`).

use super::Column;
use crate::{Entity, InsuranceId};
use serde::{Deserialize, Serialize};

/// `TYPE VARCHAR(200)`
pub const INSURANCE_TYPE: Column = Column::new("TYPE", 200);
/// `NAME VARCHAR(200)`
pub const INSURANCE_NAME: Column = Column::new("NAME", 200);

/// A persisted insurance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Insurance {
    pub id: InsuranceId,
    /// Insurance type, free text.
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
}

/// An insurance record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct NewInsurance {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewInsurance {
    /// Creates a new insurance draft.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl Entity for Insurance {
    type Id = InsuranceId;
    type Draft = NewInsurance;

    const NAME: &'static str = "Insurance";
    const TABLE: &'static str = "INSURANCE_TEST";
    const COLUMNS: &'static [Column] = &[INSURANCE_TYPE, INSURANCE_NAME];

    fn id(&self) -> InsuranceId {
        self.id
    }

    fn from_draft(id: InsuranceId, draft: NewInsurance) -> Self {
        Self {
            id,
            kind: draft.kind,
            name: draft.name,
        }
    }

    fn to_draft(&self) -> NewInsurance {
        NewInsurance::new(self.name.clone(), self.kind.clone())
    }

    fn column_values(draft: &NewInsurance) -> Vec<&str> {
        vec![draft.kind.as_str(), draft.name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_renamed() {
        let insurance = Insurance::from_draft(InsuranceId::new(2), NewInsurance::new("Basic", "health"));
        let json = serde_json::to_value(&insurance).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 2, "type": "health", "name": "Basic"})
        );
    }

    #[test]
    fn test_draft_deserializes_type() {
        let draft: NewInsurance =
            serde_json::from_value(serde_json::json!({"name": "Basic", "type": "car"})).unwrap();
        assert_eq!(draft.kind, "car");
    }

    #[test]
    fn test_column_values_follow_columns() {
        let draft = NewInsurance::new("Basic", "car");
        assert_eq!(Insurance::column_values(&draft), vec!["car", "Basic"]);
    }
}
