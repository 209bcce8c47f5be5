//! Forgiving deserializers for stored and imported documents.
//!
//! Documents arrive from the editor, from older records and from the import
//! collaborator. A single bad field must never reject the whole document, so
//! these helpers turn wrong-typed or unknown values into `None` / defaults.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// Deserializes any JSON value and keeps it only if it parses as `T`.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like [`lenient`], falling back to `T::default()`.
pub fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Collections: `null`, missing or malformed becomes empty; malformed
/// items are skipped individually.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient")]
        size: Option<f64>,
        #[serde(default, deserialize_with = "lenient_or_default")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_vec")]
        items: Vec<u32>,
    }

    #[test]
    fn test_wrong_types_degrade_instead_of_failing() {
        let probe: Probe =
            serde_json::from_str(r#"{"size": "big", "flag": "yes", "items": null}"#).unwrap();
        assert_eq!(probe.size, None);
        assert!(!probe.flag);
        assert!(probe.items.is_empty());
    }

    #[test]
    fn test_bad_items_are_skipped_individually() {
        let probe: Probe = serde_json::from_str(r#"{"items": [1, "two", 3]}"#).unwrap();
        assert_eq!(probe.items, vec![1, 3]);
        assert_eq!(probe.size, None);
    }
}
