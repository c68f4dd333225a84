//! Serde helpers for fields the API sends as `null` instead of omitting

use serde::{Deserialize, Deserializer};

/// Reads a list that may be missing or `null` as an empty `Vec`.
/// Use with `#[serde(default)]`.
pub fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::vec")]
        ids: Vec<i64>,
    }

    #[test]
    fn test_null_missing_and_present() {
        let null: Holder = serde_json::from_value(json!({"ids": null})).unwrap();
        assert!(null.ids.is_empty());

        let missing: Holder = serde_json::from_value(json!({})).unwrap();
        assert!(missing.ids.is_empty());

        let present: Holder = serde_json::from_value(json!({"ids": [1, 2]})).unwrap();
        assert_eq!(present.ids, vec![1, 2]);
    }

    #[test]
    fn test_wrong_type_still_rejected() {
        assert!(serde_json::from_value::<Holder>(json!({"ids": "1,2"})).is_err());
    }
}
