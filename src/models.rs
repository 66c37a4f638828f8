use std::collections::HashMap;

use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The only geometry the service stores. Anything other than the literal
/// `"Point"` fails deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GeoJsonType {
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    /// `(longitude, latitude)` in that order, exactly two numbers.
    pub coordinates: (f64, f64),
}

/// Caller-supplied place payload. Ids are never accepted from callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub location: Location,
    /// 'B2': 'B1' if B2 shares B1's package. Values resolve in one hop,
    /// never recursively.
    pub parking_zones: HashMap<String, String>,
}

/// A place as persisted, carrying the id the store minted for it.
///
/// BSON spells the id `_id`; responses spell it `id` and render the hex
/// string instead of the raw ObjectId.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredPlace {
    #[serde(alias = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    #[serde(flatten)]
    pub place: Place,
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{doc, from_document, oid::ObjectId};
    use serde_json::{Value, json};

    use super::{GeoJsonType, Place, StoredPlace};

    fn payload() -> Value {
        json!({
            "name": "天河城",
            "address": "Tianhe Rd, Guangzhou",
            "location": {
                "type": "Point",
                "coordinates": [113.343171, 23.0061835]
            },
            "parking_zones": { "B1": "B1", "B2": "B1" }
        })
    }

    #[test]
    fn test_valid_payload() {
        let place: Place = serde_json::from_value(payload()).unwrap();

        assert_eq!(place.name, "天河城");
        assert_eq!(place.location.kind, GeoJsonType::Point);
        assert_eq!(place.location.coordinates, (113.343171, 23.0061835));
        assert_eq!(place.parking_zones["B2"], "B1");
    }

    #[test]
    fn test_rejects_non_point_geometry() {
        let mut value = payload();
        value["location"]["type"] = json!("Polygon");

        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_rejects_wrong_coordinate_arity() {
        let mut value = payload();
        value["location"]["coordinates"] = json!([113.343171]);
        assert!(serde_json::from_value::<Place>(value.clone()).is_err());

        value["location"]["coordinates"] = json!([113.343171, 23.0061835, 7.0]);
        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let mut value = payload();
        value.as_object_mut().unwrap().remove("address");

        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_coordinates() {
        let mut value = payload();
        value["location"]["coordinates"] = json!(["113.3", "23.0"]);

        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_id_serializes_as_hex_string() {
        let id = ObjectId::new();
        let stored = StoredPlace {
            id,
            place: serde_json::from_value(payload()).unwrap(),
        };

        let value = serde_json::to_value(&stored).unwrap();

        assert_eq!(value["id"], json!(id.to_hex()));
        assert!(value.get("_id").is_none());
        assert_eq!(value["name"], "天河城");
        assert_eq!(value["location"]["type"], "Point");
    }

    #[test]
    fn test_reads_bson_underscore_id() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "name": "天河城",
            "address": "Tianhe Rd, Guangzhou",
            "location": { "type": "Point", "coordinates": [113.343171, 23.0061835] },
            "parking_zones": { "B1": "B1" },
        };

        let stored: StoredPlace = from_document(document).unwrap();

        assert_eq!(stored.id, id);
        assert_eq!(stored.place.location.coordinates.0, 113.343171);
    }
}
