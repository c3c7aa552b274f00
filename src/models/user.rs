//! The user record: an ordered JSON object of arbitrary nesting depth.
//!
//! The upstream API defines the shape; the client treats it as opaque and
//! only assumes a numeric `id` field for identity. Field order follows the
//! API response (`serde_json` is built with `preserve_order`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Numeric identity of a user record.
pub type UserId = u64;

/// A single record fetched from the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    /// The record's numeric id, if present.
    pub fn id(&self) -> Option<UserId> {
        self.0.get("id").and_then(Value::as_u64)
    }

    /// All fields in API order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Look up a field by leaf key, depth-first in field order.
    ///
    /// A top-level key wins over an equally named nested one because the
    /// walk checks each entry before descending into it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        find(&self.0, key)
    }

    /// Assign `value` to the first field matching `key`, depth-first.
    ///
    /// If no field matches, the value is inserted at the top level, which
    /// is what assigning to an unknown key on the record means upstream.
    pub fn set(&mut self, key: &str, value: Value) {
        if !assign(&mut self.0, key, &value) {
            self.0.insert(key.to_string(), value);
        }
    }
}

impl From<Map<String, Value>> for User {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn find<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    for (k, v) in fields {
        if k == key {
            return Some(v);
        }
        if let Value::Object(child) = v {
            if let Some(found) = find(child, key) {
                return Some(found);
            }
        }
    }
    None
}

fn assign(fields: &mut Map<String, Value>, key: &str, value: &Value) -> bool {
    for (k, v) in fields.iter_mut() {
        if k == key {
            *v = value.clone();
            return true;
        }
        if let Value::Object(child) = v {
            if assign(child, key, value) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> User {
        serde_json::from_value(json!({
            "id": 1,
            "name": "Leanne Graham",
            "address": {
                "street": "Kulas Light",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "company": { "name": "Romaguera-Crona" }
        }))
        .unwrap()
    }

    #[test]
    fn id_reads_numeric_field() {
        assert_eq!(sample().id(), Some(1));
    }

    #[test]
    fn id_missing_or_non_numeric() {
        let user: User = serde_json::from_value(json!({ "name": "x" })).unwrap();
        assert_eq!(user.id(), None);
        let user: User = serde_json::from_value(json!({ "id": "1" })).unwrap();
        assert_eq!(user.id(), None);
    }

    #[test]
    fn get_finds_nested_leaf_depth_first() {
        let user = sample();
        assert_eq!(user.get("lat"), Some(&json!("-37.3159")));
        assert_eq!(user.get("street"), Some(&json!("Kulas Light")));
    }

    #[test]
    fn get_prefers_top_level_over_nested() {
        // "name" exists both at the top level and under "company".
        let user = sample();
        assert_eq!(user.get("name"), Some(&json!("Leanne Graham")));
    }

    #[test]
    fn set_replaces_nested_leaf() {
        let mut user = sample();
        user.set("lat", json!("0.0000"));
        assert_eq!(user.get("lat"), Some(&json!("0.0000")));
        // The nested structure is intact.
        assert_eq!(user.fields()["address"]["geo"]["lat"], json!("0.0000"));
    }

    #[test]
    fn set_unknown_key_inserts_top_level() {
        let mut user = sample();
        user.set("nickname", json!("lee"));
        assert_eq!(user.fields()["nickname"], json!("lee"));
    }

    #[test]
    fn serde_preserves_field_order() {
        let user = sample();
        let keys: Vec<_> = user.fields().keys().cloned().collect();
        assert_eq!(keys, vec!["id", "name", "address", "company"]);
        let back: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
        assert_eq!(back, user);
    }
}
