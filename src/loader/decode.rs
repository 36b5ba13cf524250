//! Payload validation and normalization.
//!
//! Turns the raw JSON payload into the working set. Only the top-level shape
//! is fatal: individual records that lack a usable `name` or `type` are dropped
//! silently, and malformed optional fields are treated as absent.

use crate::domain::{Building, Coordinates, LoadError};
use serde_json::Value;

/// Decodes a payload into the working set.
///
/// # Rules
///
/// - The payload must be a JSON array, otherwise [`LoadError::Decode`]
/// - Non-object elements are dropped
/// - `name` and `type` must be strings that are non-empty after trimming;
///   both are stored trimmed
/// - `lat`/`lng` become [`Coordinates`] only when both are numbers
/// - Unknown fields are ignored; record order is preserved
///
/// # Errors
///
/// Returns [`LoadError::Decode`] when the payload is not valid JSON or is not
/// an array.
///
/// # Examples
///
/// ```
/// use campusnav::loader::decode_working_set;
///
/// let working_set = decode_working_set(
///     r#"[{"name": " Grace P. Johnson Stadium", "type": "Athletics"}, {"name": "X"}]"#,
/// )?;
/// assert_eq!(working_set.len(), 1);
/// assert_eq!(working_set[0].name, "Grace P. Johnson Stadium");
/// # Ok::<(), campusnav::LoadError>(())
/// ```
pub fn decode_working_set(payload: &str) -> Result<Vec<Building>, LoadError> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| LoadError::Decode(e.to_string()))?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(LoadError::Decode(format!(
                "expected an array of building records, found {}",
                json_kind(&other)
            )));
        }
    };

    let working_set: Vec<Building> = records.iter().filter_map(building_from_record).collect();

    tracing::debug!(
        received = records.len(),
        kept = working_set.len(),
        dropped = records.len() - working_set.len(),
        "payload decoded"
    );

    Ok(working_set)
}

fn building_from_record(record: &Value) -> Option<Building> {
    let name = required_text(record, "name")?;
    let kind = required_text(record, "type")?;

    let coordinates = match (number(record, "lat"), number(record, "lng")) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };

    Some(Building {
        name,
        kind,
        coordinates,
    })
}

fn required_text(record: &Value, field: &str) -> Option<String> {
    let text = record.get(field)?.as_str()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn number(record: &Value, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_type_is_excluded() {
        let working_set = decode_working_set(r#"[{"name": "X"}]"#).unwrap();
        assert!(working_set.is_empty());
    }

    #[test]
    fn blank_fields_are_excluded_after_trimming() {
        let payload = r#"[
            {"name": "   ", "type": "Academic"},
            {"name": "Moore Hall", "type": "\t"},
            {"name": "", "type": "Academic"}
        ]"#;
        assert!(decode_working_set(payload).unwrap().is_empty());
    }

    #[test]
    fn name_and_type_are_trimmed() {
        let working_set =
            decode_working_set(r#"[{"name": "  Old Main ", "type": " Historic / Student Services  "}]"#)
                .unwrap();
        assert_eq!(working_set[0].name, "Old Main");
        assert_eq!(working_set[0].kind, "Historic / Student Services");
    }

    #[test]
    fn coordinates_require_both_numbers() {
        let payload = r#"[
            {"name": "A", "type": "Academic", "lat": 34.6, "lng": -79.2},
            {"name": "B", "type": "Academic", "lat": 34.6},
            {"name": "C", "type": "Academic", "lat": "34.6", "lng": -79.2},
            {"name": "D", "type": "Academic", "lat": null, "lng": null}
        ]"#;
        let working_set = decode_working_set(payload).unwrap();
        assert_eq!(working_set.len(), 4);
        assert_eq!(working_set[0].coordinates, Some(Coordinates { lat: 34.6, lng: -79.2 }));
        assert!(working_set[1..].iter().all(|b| b.coordinates.is_none()));
    }

    #[test]
    fn non_string_name_and_non_object_records_are_dropped() {
        let payload = r#"[42, "Old Main", null, {"name": 7, "type": "Academic"}, {"name": "Ok", "type": "Dining"}]"#;
        let working_set = decode_working_set(payload).unwrap();
        assert_eq!(working_set, vec![Building::new("Ok", "Dining")]);
    }

    #[test]
    fn record_order_is_preserved() {
        let payload = r#"[{"name": "Zeta", "type": "A"}, {"name": "Alpha", "type": "A"}]"#;
        let names: Vec<_> = decode_working_set(payload)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let err = decode_working_set(r#"{"message": "Welcome"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(ref msg) if msg.contains("an object")));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(
            decode_working_set("<html>502</html>"),
            Err(LoadError::Decode(_))
        ));
    }
}
