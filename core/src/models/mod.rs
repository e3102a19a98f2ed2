//! Shared wire models and the JSON mapping contract.
//!
//! # Design
//! Every model is a plain serde struct. Optional fields are [`Unset`] so an
//! omitted field stays off the wire, and each struct carries a flattened
//! `additional_properties` map so keys unknown at definition time survive a
//! decode/encode cycle unchanged.
//!
//! Extras are written after the typed fields, so an extra whose key matches
//! a typed field's wire name replaces that field in the encoded mapping and
//! decodes back into the typed field. Keep extras to keys the model does not
//! declare.
//!
//! [`Unset`]: crate::Unset

mod envelope;
mod validation;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

pub use envelope::ResponseModel;
pub use validation::{HttpValidationError, LocItem, ValidationError};

/// Conversion between a typed model and a string-keyed JSON mapping.
///
/// Implemented for every serde model in the crate.
pub trait WireModel: Serialize + DeserializeOwned {
    /// Encode as a JSON object. Unset fields are absent from the result, and
    /// an extra sharing a typed field's key wins over that field.
    fn to_wire(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // Models are structs with string keys; anything else has no
            // mapping form.
            _ => Map::new(),
        }
    }

    /// Decode from a JSON object. Fails only when a required field is absent
    /// or has the wrong type.
    fn from_wire(map: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

impl<T: Serialize + DeserializeOwned> WireModel for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::douyin_search::FetchGeneralSearch;
    use serde_json::json;

    #[test]
    fn extras_round_trip_alongside_typed_fields() {
        let mut req = FetchGeneralSearch::new("rust");
        req.additional_properties.insert("region".into(), json!("CN"));
        let wire = req.to_wire();
        assert_eq!(Value::Object(wire.clone()), json!({"keyword": "rust", "region": "CN"}));
        assert_eq!(FetchGeneralSearch::from_wire(wire).unwrap(), req);
    }

    #[test]
    fn extra_with_typed_field_key_overrides_it() {
        let mut req = FetchGeneralSearch::new("rust");
        req.additional_properties.insert("keyword".into(), json!("python"));
        let wire = req.to_wire();
        assert_eq!(Value::Object(wire.clone()), json!({"keyword": "python"}));

        let back = FetchGeneralSearch::from_wire(wire).unwrap();
        assert_eq!(back.keyword, "python");
        assert!(back.additional_properties.is_empty());
    }
}
