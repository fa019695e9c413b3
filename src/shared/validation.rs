use serde::{de, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

use crate::core::error::{AppError, Result};

/// Trim a required text field, rejecting missing or blank values
pub fn require_text(value: Option<&str>, field: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{} is required.", field)))
}

/// Trim an optional text field; blank input becomes `None`
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Serde helper for HTML-form style query strings where an unselected
/// dropdown arrives as `field=` instead of being omitted.
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map(Some).map_err(de::Error::custom),
    }
}
