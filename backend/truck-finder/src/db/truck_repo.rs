use crate::error::Result;
use crate::models::FeatureCollection;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;

/// Row filter for the radius lookup. Reprojecting both sides to `geography`
/// makes ST_DWithin measure geodesic meters rather than degrees.
const WITHIN_RADIUS: &str = "ST_DWithin(foodtruck_geom::geography, \
     ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3)";

/// Row filters for the substring lookups. Unanchored and case-insensitive;
/// LIKE metacharacters in the needle reach the matcher uninterpreted.
const APPLICANT_CONTAINS: &str = "applicant ILIKE '%' || $1 || '%'";
const FOOD_ITEMS_CONTAINS: &str = "fooditems ILIKE '%' || $1 || '%'";

/// Wraps a row filter into the aggregate that folds every matched vendor row
/// into one GeoJSON FeatureCollection inside the store: each row becomes a
/// Feature (geometry re-encoded with ST_AsGeoJSON, all columns except the
/// internal id and the raw geometry folded into `properties`), and jsonb_agg
/// collapses the Features into a single document. Exactly one row with one
/// jsonb column comes back; `features` is NULL when nothing matched.
///
/// Filters are module-local constants; user input only ever travels through
/// the positional binds.
fn feature_collection_query(filter: &str) -> String {
    format!(
        r#"
        SELECT jsonb_build_object(
            'type', 'FeatureCollection',
            'features', jsonb_agg(feature)
        ) AS collection
        FROM (
            SELECT jsonb_build_object(
                'type', 'Feature',
                'id', locationid,
                'geometry', ST_AsGeoJSON(foodtruck_geom)::jsonb,
                'properties', to_jsonb(row) - 'gid' - 'foodtruck_geom'
            ) AS feature
            FROM (SELECT * FROM foodtrucks WHERE {filter}) row
        ) features
        "#
    )
}

/// Vendors whose location lies within `radius_meters` (geodesic) of the
/// point (`longitude`, `latitude`).
pub async fn find_by_coordinates(
    pool: &PgPool,
    longitude: f64,
    latitude: f64,
    radius_meters: f64,
) -> Result<FeatureCollection> {
    debug!(
        longitude,
        latitude, radius_meters, "running radius containment lookup"
    );

    let Json(collection): Json<FeatureCollection> =
        sqlx::query_scalar(&feature_collection_query(WITHIN_RADIUS))
            .bind(longitude)
            .bind(latitude)
            .bind(radius_meters)
            .fetch_one(pool)
            .await?;

    Ok(collection)
}

/// Vendors whose owner name contains `applicant`, case-insensitively.
pub async fn find_by_applicant(pool: &PgPool, applicant: &str) -> Result<FeatureCollection> {
    debug!(applicant, "running applicant substring lookup");

    let Json(collection): Json<FeatureCollection> =
        sqlx::query_scalar(&feature_collection_query(APPLICANT_CONTAINS))
            .bind(applicant)
            .fetch_one(pool)
            .await?;

    Ok(collection)
}

/// Vendors whose item list contains `food_item`, case-insensitively.
pub async fn find_by_food_item(pool: &PgPool, food_item: &str) -> Result<FeatureCollection> {
    debug!(food_item, "running food item substring lookup");

    let Json(collection): Json<FeatureCollection> =
        sqlx::query_scalar(&feature_collection_query(FOOD_ITEMS_CONTAINS))
            .bind(food_item)
            .fetch_one(pool)
            .await?;

    Ok(collection)
}
