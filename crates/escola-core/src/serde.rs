// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer};

/// Deserialize a nullable field of a partial-update body so that a key sent
/// as `null` is told apart from a missing key.
///
/// Pair with `#[serde(default, deserialize_with = "...")]`: a missing key
/// stays `None`, `null` becomes `Some(None)`, a value becomes `Some(Some(v))`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
