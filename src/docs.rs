//! OpenAPI description of the places API.
//!
//! Served under the `/eefoox` prefix instead of the usual root paths to
//! keep casual crawlers away from the docs.
use utoipa::OpenApi;

use crate::{
    models::{GeoJsonType, Location, Place, StoredPlace},
    routes,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::create_place,
        routes::delete_place,
        routes::get_all_places,
        routes::get_place,
        routes::get_nearby_places,
        routes::generate_download_url,
    ),
    components(schemas(GeoJsonType, Location, Place, StoredPlace)),
    tags(
        (name = "places", description = "Place storage, proximity lookup, and parking map downloads")
    )
)]
pub struct ApiDoc;
