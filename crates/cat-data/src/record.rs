//! Cat record types served by the fake server.
//!
//! These types define the JSON document the fake server returns. Field names
//! are part of the wire contract and must not be renamed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated cat.
///
/// # Example
///
/// ```
/// use cat_data::CatRecord;
/// use uuid::Uuid;
///
/// let cat = CatRecord {
///     id: Uuid::new_v4(),
///     name: "Luna".to_owned(),
///     breed: "Bengal".to_owned(),
///     age: 4,
/// };
///
/// assert!(cat.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatRecord {
    /// Unique identifier for the cat within its dataset.
    ///
    /// Older fixture files written by the json-server generator used the key
    /// `uuid`; it is still accepted when reading.
    #[serde(alias = "uuid")]
    pub id: Uuid,
    /// Name drawn from [`crate::CAT_NAMES`].
    pub name: String,
    /// Breed drawn from [`crate::CAT_BREEDS`].
    pub breed: String,
    /// Age in years, between [`crate::AGE_MIN`] and [`crate::AGE_MAX`].
    pub age: u8,
}

/// The document served on the cats route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Cats in generation order.
    pub cats: Vec<CatRecord>,
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample_cat() -> CatRecord {
        CatRecord {
            id: Uuid::nil(),
            name: "Milo".to_owned(),
            breed: "Burmese".to_owned(),
            age: 7,
        }
    }

    #[test]
    fn cat_record_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_cat()).expect("serialize");
        let object = value.as_object().expect("object");

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["age", "breed", "id", "name"]);
        assert_eq!(
            object.get("id"),
            Some(&Value::from("00000000-0000-0000-0000-000000000000"))
        );
    }

    #[test]
    fn dataset_wraps_records_under_cats_key() {
        let dataset = Dataset {
            cats: vec![sample_cat()],
        };
        let json = serde_json::to_string(&dataset).expect("serialize");
        assert!(json.starts_with(r#"{"cats":[{"#));
    }

    #[test]
    fn legacy_uuid_key_is_accepted() {
        let json = r#"{
            "uuid": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Oreo",
            "breed": "Bombay",
            "age": 2
        }"#;
        let cat: CatRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(cat.id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "name": "Oreo",
            "breed": "Bombay",
            "age": 2,
            "colour": "black"
        }"#;
        assert!(serde_json::from_str::<CatRecord>(json).is_err());
    }
}
