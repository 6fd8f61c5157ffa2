use serde::*;

/// Deserializes a field that TfL sometimes sends as `null`, treating `null`
/// the same as an absent field.
pub fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error> where D: Deserializer<'de>, T: Deserialize<'de> + Default {
    Deserialize::deserialize(d)
        .map(|x: Option<T>| {
            x.unwrap_or_default()
        })
}
