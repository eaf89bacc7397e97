use std::any::type_name;

use koan_common::warning::warn_once;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::JsonError;
use crate::record::Record;

/// Serialize `value` to compact JSON text.
///
/// Struct fields keep their declaration order; map entries follow the map's
/// own iteration order.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as JSON.
pub fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize `value` to indented JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as JSON.
pub fn to_text_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Rebuild a value of type `T` from JSON text.
///
/// The text is first parsed into a plain [`Value`] record, then `T` is built
/// from that record. Nothing is shared between calls: each result owns its
/// fields. A struct is only built from a JSON object.
///
/// Object fields that `T` does not declare are dropped, with a warning.
///
/// # Errors
///
/// - [`JsonError::Parse`] if `text` is not valid JSON.
/// - [`JsonError::Shape`] if the record cannot be turned into a `T`
///   (missing field, wrong field type, array where a struct is expected).
pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    // STEP 1: Parse into a plain record.
    let record: Value = serde_json::from_str(text).map_err(|source| JsonError::Parse {
        line: source.line(),
        column: source.column(),
        source,
    })?;

    // STEP 2: Build the typed value from the record, noting skipped fields.
    let mut dropped = Vec::new();
    let value: T = serde_ignored::deserialize(Record(record), |path| {
        dropped.push(path.to_string());
    })
    .map_err(|source| JsonError::Shape {
        target: type_name::<T>(),
        source,
    })?;

    if !dropped.is_empty() {
        warn_once(
            "JSON",
            &format!(
                "ignored fields not declared by `{}`: {}",
                type_name::<T>(),
                dropped.join(", ")
            ),
        );
    }

    Ok(value)
}
