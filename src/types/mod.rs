//! Request and response types exchanged with the service.

pub mod analytics;
pub mod chat;
pub mod keys;
pub mod message;

use serde::{Deserialize, Deserializer};

/// Open-ended JSON object for payloads whose shape is not fixed by contract.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Decodes an explicit JSON `null` as the field's default value.
///
/// Pair with `#[serde(default)]` so absent keys default as well.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
