//! Conversion between JSON request payloads and domain records.
//!
//! Every decoder either returns a fully populated record or a
//! [`ValidationError`]; nothing is written anywhere.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{Item, Wishlist};

pub const WISHLIST_NAME_MAX: usize = 40;
pub const ITEM_NAME_MAX: usize = 63;
pub const ITEM_DESCRIPTION_MAX: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid payload: {0}")]
    InvalidPayloadShape(String),

    #[error("Invalid payload: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid payload: {field} must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}

/// Decode a wishlist. `id` in the payload is ignored; the store assigns it.
pub fn wishlist_from_value(value: &Value) -> Result<Wishlist, ValidationError> {
    let fields = as_object(value, "wishlist")?;
    Ok(Wishlist {
        id: None,
        customer_id: required_int(fields, "customer_id")?,
        wishlist_name: required_string(fields, "wishlist_name", WISHLIST_NAME_MAX)?,
    })
}

/// Decode an item owned by `wishlist_id`. A `wishlist_id` in the body never
/// overrides the one supplied by the caller.
pub fn item_from_value(value: &Value, wishlist_id: i32) -> Result<Item, ValidationError> {
    let fields = as_object(value, "item")?;
    Ok(Item {
        id: None,
        wishlist_id,
        product_id: required_int(fields, "product_id")?,
        name: required_string(fields, "name", ITEM_NAME_MAX)?,
        description: optional_string(fields, "description", ITEM_DESCRIPTION_MAX)?,
    })
}

/// The legacy `items` batch accepted on wishlist creation, if any.
pub fn nested_items(value: &Value) -> Result<Option<&[Value]>, ValidationError> {
    let fields = as_object(value, "wishlist")?;
    match fields.get("items") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.as_slice())),
        Some(_) => Err(ValidationError::InvalidPayloadShape(
            "items must be a list".into(),
        )),
    }
}

fn as_object<'a>(value: &'a Value, kind: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::InvalidPayloadShape(format!(
            "{kind} body must be a JSON object"
        ))
    })
}

fn present<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    fields.get(field).filter(|value| !value.is_null())
}

fn required_int(fields: &Map<String, Value>, field: &'static str) -> Result<i32, ValidationError> {
    let value = present(fields, field).ok_or(ValidationError::MissingField(field))?;
    coerce_int(value)
        .ok_or_else(|| ValidationError::InvalidPayloadShape(format!("{field} must be an integer")))
}

fn coerce_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                i32::try_from(n).ok()
            } else {
                let f = number.as_f64()?;
                let in_range = f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX);
                (f.fract() == 0.0 && in_range).then_some(f as i32)
            }
        }
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    }
}

fn required_string(
    fields: &Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = present(fields, field).ok_or(ValidationError::MissingField(field))?;
    string_value(value, field, max)
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    present(fields, field)
        .map(|value| string_value(value, field, max))
        .transpose()
}

fn string_value(value: &Value, field: &'static str, max: usize) -> Result<String, ValidationError> {
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::InvalidPayloadShape(format!("{field} must be a string")))?;
    if text.chars().count() > max {
        return Err(ValidationError::FieldTooLong { field, max });
    }
    Ok(text.to_owned())
}
