use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value as JsonValue};

use crate::store::PatientCollection;

/// A stored attribute that is expected to be numeric
///
/// Anything that is not a JSON number is kept verbatim so the record
/// serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measurement {
    Number(Number),
    Other(JsonValue),
}

impl Measurement {
    /// Numeric value used for ordering; non-numeric values count as 0
    pub fn sort_key(&self) -> f64 {
        match self {
            Measurement::Number(n) => n.as_f64().unwrap_or(0.0),
            Measurement::Other(_) => 0.0,
        }
    }
}

/// Marks a field as present whenever its key is, even when the value is `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One patient's attributes, as stored in the backing file
///
/// `None` means the key was absent; an explicit `null` is kept and written
/// back as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub height: Option<Measurement>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub weight: Option<Measurement>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub bmi: Option<Measurement>,
    /// Every attribute without a dedicated field (city, age, ...)
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl PatientRecord {
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|name| name.as_deref())
    }

    pub fn measurement(&self, field: SortField) -> Option<&Measurement> {
        match field {
            SortField::Height => self.height.as_ref(),
            SortField::Weight => self.weight.as_ref(),
            SortField::Bmi => self.bmi.as_ref(),
        }
    }

    /// Sort key for `field`; a missing attribute counts as 0
    pub fn sort_key(&self, field: SortField) -> f64 {
        self.measurement(field).map_or(0.0, Measurement::sort_key)
    }
}

/// Attributes a listing may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Height,
    Weight,
    Bmi,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Height, SortField::Weight, SortField::Bmi];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Height => "height",
            SortField::Weight => "weight",
            SortField::Bmi => "bmi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }
}

/// Direction of a sorted listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Response type for the informational endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Response type for GET /view
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ViewResponse {
    /// Patient identifier to record, in file order
    #[schema(value_type = Object)]
    pub data: PatientCollection,
}

/// Response type for GET /patient/{patient_id}
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PatientResponse {
    #[schema(value_type = Object)]
    pub patient: PatientRecord,
}

/// Query parameters for the sort endpoint
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SortQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Response type for GET /sort
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SortResponse {
    #[schema(value_type = Vec<Object>)]
    pub sorted_data: Vec<PatientRecord>,
}
