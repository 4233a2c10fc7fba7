//! Serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field so that an explicit `null` becomes `Some(None)`
/// while an absent field stays `None` (paired with `#[serde(default)]`).
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// `Some` only for present, non-empty strings.
pub(crate) fn truthy(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
