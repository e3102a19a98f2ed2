//! Tri-state optional field: omitted, explicit `null`, or a value.
//!
//! Optional model fields are declared as
//!
//! ```ignore
//! #[serde(default, skip_serializing_if = "Unset::is_unset")]
//! pub cursor: Unset<i64>,
//! ```
//!
//! so an omitted field never reaches the wire, `Null` serializes as JSON
//! `null`, and a missing key deserializes back to `Unset`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// `Value(T)` must hold something that does not itself serialize to `null`
/// (such as `Value(serde_json::Value::Null)`); on the wire that is
/// indistinguishable from `Null` and decodes back as `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unset<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Unset<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Unset::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Unset::Null)
    }

    pub fn as_ref(&self) -> Unset<&T> {
        match self {
            Unset::Unset => Unset::Unset,
            Unset::Null => Unset::Null,
            Unset::Value(v) => Unset::Value(v),
        }
    }

    /// The value, collapsing both `Unset` and `Null` to `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Unset::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Maps `None` to an explicit `Null`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Unset::Value(v),
            None => Unset::Null,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Unset::Value(v) => Some(v),
            _ => None,
        }
    }
}

// No `T: Default` bound, unlike the derive.
impl<T> Default for Unset<T> {
    fn default() -> Self {
        Unset::Unset
    }
}

impl<T> From<T> for Unset<T> {
    fn from(value: T) -> Self {
        Unset::Value(value)
    }
}

impl<T: Serialize> Serialize for Unset<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reachable when a field forgets `skip_serializing_if`.
            Unset::Unset | Unset::Null => serializer.serialize_none(),
            Unset::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Unset<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Unset::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Page {
        #[serde(default, skip_serializing_if = "Unset::is_unset")]
        cursor: Unset<i64>,
    }

    #[test]
    fn unset_field_is_omitted() {
        let page = Page { cursor: Unset::Unset };
        assert_eq!(serde_json::to_value(&page).unwrap(), json!({}));
    }

    #[test]
    fn null_field_serializes_as_null() {
        let page = Page { cursor: Unset::Null };
        assert_eq!(serde_json::to_value(&page).unwrap(), json!({"cursor": null}));
    }

    #[test]
    fn value_field_serializes_inline() {
        let page = Page { cursor: 20.into() };
        assert_eq!(serde_json::to_value(&page).unwrap(), json!({"cursor": 20}));
    }

    #[test]
    fn deserialize_distinguishes_missing_from_null() {
        let missing: Page = serde_json::from_value(json!({})).unwrap();
        let null: Page = serde_json::from_value(json!({"cursor": null})).unwrap();
        let value: Page = serde_json::from_value(json!({"cursor": 5})).unwrap();
        assert_eq!(missing.cursor, Unset::Unset);
        assert_eq!(null.cursor, Unset::Null);
        assert_eq!(value.cursor, Unset::Value(5));
    }

    #[test]
    fn value_holding_json_null_decodes_as_null() {
        let data: Unset<serde_json::Value> = Unset::Value(serde_json::Value::Null);
        let wire = serde_json::to_value(&data).unwrap();
        assert_eq!(wire, serde_json::Value::Null);
        let back: Unset<serde_json::Value> = serde_json::from_value(wire).unwrap();
        assert_eq!(back, Unset::Null);
    }

    #[test]
    fn value_accessors() {
        let v: Unset<String> = "x".to_string().into();
        assert_eq!(v.value().map(String::as_str), Some("x"));
        assert!(Unset::<i64>::Null.value().is_none());
        assert!(Unset::<i64>::Null.is_null());
        assert_eq!(Unset::from_option(None::<i64>), Unset::Null);
        assert_eq!(Unset::Value(3).into_option(), Some(3));
    }
}
