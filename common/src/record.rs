//! # vPIC Response Model
//!
//! Wire shape of `DecodeVinValues?format=json`:
//!
//! ```json
//! { "Count": 1, "Message": "...", "SearchCriteria": "VIN:...", "Results": [ { "Make": "HONDA", ... } ] }
//! ```
//!
//! Only `Results` and `Message` are consumed. Each record is a flat map of
//! field names to (almost always) string values.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::LookupError;

pub const PLANT_COUNTRY: &str = "Plant Country";
pub const MAKE: &str = "Make";
pub const MODEL_YEAR: &str = "Model Year";
pub const MODEL: &str = "Model";
pub const BODY_CLASS: &str = "Body Class";
pub const VEHICLE_TYPE: &str = "Vehicle Type";
pub const ERROR_CODE: &str = "ErrorCode";
pub const ERROR_TEXT: &str = "ErrorText";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DecodeResponse {
    #[serde(rename = "Results", default, deserialize_with = "null_as_empty")]
    pub results: Vec<DecodeRecord>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl DecodeResponse {
    /// The only record a lookup consumes.
    ///
    /// Fails with [`LookupError::EmptyResults`], carrying the API `Message`,
    /// when there is nothing to decode.
    pub fn first_record(&self) -> Result<&DecodeRecord, LookupError> {
        self.results.first().ok_or_else(|| LookupError::EmptyResults {
            message: self.message.clone(),
        })
    }
}

/// `"Results": null` means the same as a missing or empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DecodeRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DecodeRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DecodeRecord {
    fields: HashMap<String, Value>,
}

impl DecodeRecord {
    /// Returns the value of `name` as text, or `None` when it is missing,
    /// `null` or an empty string.
    pub fn field(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Like [`DecodeRecord::field`] but substitutes `default` for absent values.
    pub fn field_or(&self, name: &str, default: &str) -> String {
        self.field(name).unwrap_or_else(|| default.to_string())
    }
}

impl<K, V> FromIterator<(K, V)> for DecodeRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
