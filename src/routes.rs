use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::Redirect,
};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::{
    database::near_filter,
    error::AppError,
    models::{Place, StoredPlace},
    state::State as AppState,
};

/// Always answers 405. The insert path is switched off, not missing.
#[utoipa::path(
    post,
    path = "/places/",
    tag = "places",
    request_body = Place,
    responses((status = 405, description = "CREATE method is not allowed"))
)]
pub async fn create_place(Json(_place): Json<Place>) -> AppError {
    AppError::MethodDisabled("CREATE")
}

/// Always answers 405, before the id is even looked at.
#[utoipa::path(
    delete,
    path = "/places/{place_id}",
    tag = "places",
    params(("place_id" = String, Path, description = "Place id")),
    responses((status = 405, description = "DELETE method is not allowed"))
)]
pub async fn delete_place(Path(_place_id): Path<String>) -> AppError {
    AppError::MethodDisabled("DELETE")
}

#[utoipa::path(
    get,
    path = "/places/",
    tag = "places",
    responses((status = 200, description = "Every stored place", body = [StoredPlace]))
)]
pub async fn get_all_places(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoredPlace>>, AppError> {
    let places: Vec<StoredPlace> = state.places.find(doc! {}).await?.try_collect().await?;

    for place in &places {
        debug!("fetched {place:?}");
    }

    Ok(Json(places))
}

#[utoipa::path(
    get,
    path = "/places/{place_id}",
    tag = "places",
    params(("place_id" = String, Path, description = "Place id")),
    responses(
        (status = 200, description = "The place", body = StoredPlace),
        (status = 404, description = "Place not found")
    )
)]
pub async fn get_place(
    State(state): State<Arc<AppState>>,
    Path(place_id): Path<String>,
) -> Result<Json<StoredPlace>, AppError> {
    let id = ObjectId::parse_str(&place_id)?;

    let place = state
        .places
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::PlaceNotFound)?;

    Ok(Json(place))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NearQuery {
    pub lat: f64,
    pub lon: f64,
    /// Search radius in meters.
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
}

fn default_max_distance() -> f64 {
    500.0
}

#[utoipa::path(
    get,
    path = "/places_near",
    tag = "places",
    params(NearQuery),
    responses((status = 200, description = "Places within the radius, nearest first", body = [StoredPlace]))
)]
pub async fn get_nearby_places(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearQuery>,
) -> Result<Json<Vec<StoredPlace>>, AppError> {
    let filter = near_filter(query.lon, query.lat, query.max_distance);

    let places: Vec<StoredPlace> = state.places.find(filter).await?.try_collect().await?;

    Ok(Json(places))
}

// TODO: (per user) rate limit
#[utoipa::path(
    get,
    path = "/places/{place_id}/{parking_zone}/download",
    tag = "places",
    params(
        ("place_id" = String, Path, description = "Place id"),
        ("parking_zone" = String, Path, description = "Zone name within the place")
    ),
    responses(
        (status = 307, description = "Redirect to the zone's map package"),
        (status = 400, description = "Parking zone not found"),
        (status = 404, description = "Place not found")
    )
)]
pub async fn generate_download_url(
    State(state): State<Arc<AppState>>,
    Path((place_id, parking_zone)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let id = ObjectId::parse_str(&place_id)?;

    let place = state
        .places
        .find_one(doc! { "_id": id })
        .await?
        .ok_or(AppError::PlaceNotFound)?;

    // Aliased zones store another zone's package name; one lookup resolves
    // both cases, nothing is chased further.
    let package = place
        .place
        .parking_zones
        .get(&parking_zone)
        .ok_or(AppError::ZoneNotFound)?;

    Ok(Redirect::temporary(&download_url(
        &state.config.host_ip,
        &place_id,
        package,
    )))
}

pub fn download_url(host: &str, place_id: &str, package: &str) -> String {
    format!("http://{host}/d/findeasy/places/{place_id}/{package}.zip")
}
