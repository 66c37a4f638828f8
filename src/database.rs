//! # MongoDB
//!
//! Document store holding every place record.
//!
//! ## Requirements
//!
//! - One database `findeasy`, one collection `places`
//! - `2dsphere` index on `location` so `$nearSphere` can run
//! - Small dataset, low write volume (writes are switched off entirely in
//!   this version)
//!
//! ## Implementation
//!
//! - The driver's `Client` is cheap to clone and thread safe, so the
//!   collection handle is the only thing request handlers share
//! - Proximity queries use `$nearSphere` with a GeoJSON `$geometry` point
//!   and `$maxDistance` in meters; result ordering (nearest first) comes
//!   from the index itself
use mongodb::{
    Client, Collection, IndexModel,
    bson::{Document, doc},
};

use crate::models::StoredPlace;

pub const DB_NAME: &str = "findeasy";
pub const PLACES_COLLECTION: &str = "places";

pub async fn init_mongo(mongodb_uri: &str) -> Collection<StoredPlace> {
    let client = Client::with_uri_str(mongodb_uri)
        .await
        .expect("Invalid MongoDB URI");

    let places = client.database(DB_NAME).collection(PLACES_COLLECTION);

    // $nearSphere refuses to run without a geospatial index on the field.
    // create_index is idempotent, so this is safe on every boot.
    places
        .create_index(
            IndexModel::builder()
                .keys(doc! { "location": "2dsphere" })
                .build(),
        )
        .await
        .expect("Failed to create 2dsphere index");

    places
}

/// Filter for all places within `max_distance` meters of `(lon, lat)`.
pub fn near_filter(lon: f64, lat: f64, max_distance: f64) -> Document {
    doc! {
        "location": {
            "$nearSphere": {
                "$geometry": {
                    "type": "Point",
                    "coordinates": [lon, lat],
                },
                "$maxDistance": max_distance,
            }
        }
    }
}
