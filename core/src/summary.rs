//! Projection of a vPIC record onto the four displayed fields.

use vinscope_common::display::{NOT_AVAILABLE, VehicleSummary};
use vinscope_common::error::LookupError;
use vinscope_common::record::{
    BODY_CLASS, DecodeRecord, ERROR_CODE, ERROR_TEXT, MAKE, MODEL, MODEL_YEAR, PLANT_COUNTRY,
    VEHICLE_TYPE,
};

/// Code the API uses for a clean decode.
const SUCCESS_CODE: &str = "0";

/// Builds the summary for `record`.
///
/// A non-zero `ErrorCode` wins over every other field, even though the HTTP
/// request itself succeeded.
pub fn summarize(record: &DecodeRecord) -> Result<VehicleSummary, LookupError> {
    if let Some(code) = record.field(ERROR_CODE) {
        if code != SUCCESS_CODE {
            return Err(LookupError::ApiDecode {
                code,
                text: record.field(ERROR_TEXT),
            });
        }
    }

    let make: String = record.field_or(MAKE, NOT_AVAILABLE);

    Ok(VehicleSummary {
        country: record.field_or(PLANT_COUNTRY, NOT_AVAILABLE),
        description: describe(
            &make,
            record.field(MODEL).as_deref(),
            record.field(BODY_CLASS).as_deref(),
            record.field(VEHICLE_TYPE).as_deref(),
        ),
        manufacturer: make,
        model_year: record.field_or(MODEL_YEAR, NOT_AVAILABLE),
    })
}

/// `"<make> <model> (<body class>, <vehicle type>)"`, dropping whatever is
/// missing. Never returns an empty string or `"()"`.
pub fn describe(
    make: &str,
    model: Option<&str>,
    body_class: Option<&str>,
    vehicle_type: Option<&str>,
) -> String {
    let model: &str = model.filter(|m| *m != NOT_AVAILABLE).unwrap_or("");
    let mut description: String = format!("{make} {model}").trim().to_string();

    let details: Vec<&str> = [body_class, vehicle_type]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty() && *part != NOT_AVAILABLE)
        .collect();

    if !details.is_empty() {
        description.push_str(&format!(" ({})", details.join(", ")));
    }

    if description.is_empty() || description == "()" {
        return NOT_AVAILABLE.to_string();
    }

    description
}
