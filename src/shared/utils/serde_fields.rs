//! Field deserializers for request shapes that must tell "omitted" apart from "null".
//!
//! Pair with `#[serde(default)]`:
//! - [`present`]: omitted -> `None`, value -> `Some(v)`, explicit `null` -> error.
//! - nullable fields use `serde_with::rust::double_option` instead:
//!   omitted -> `None`, `null` -> `Some(None)`, value -> `Some(Some(v))`.

use serde::{Deserialize, Deserializer};

/// Deserialize a field that may be omitted but never `null`
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
