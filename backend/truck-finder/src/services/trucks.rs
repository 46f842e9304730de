//! Vendor lookup facade: input validation and delegation to the data layer.

use crate::db::truck_repo;
use crate::error::{AppError, Result};
use crate::models::FeatureCollection;
use sqlx::PgPool;

/// Facade over the three vendor lookups. Owns the injected database session
/// and validates scalar inputs before any connection or query step.
#[derive(Clone)]
pub struct TruckFinder {
    pool: PgPool,
}

impl TruckFinder {
    /// The session is injected by the owner. It opens on the first query and
    /// stays open until [`TruckFinder::end_connection`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Vendors within `radius_meters` of (`longitude`, `latitude`).
    ///
    /// An answer with absent `features` is a successful no-match, not an
    /// error.
    pub async fn find_by_coordinates(
        &self,
        longitude: f64,
        latitude: f64,
        radius_meters: f64,
    ) -> Result<FeatureCollection> {
        if !is_present(longitude) || !is_present(latitude) || !is_present(radius_meters) {
            return Err(AppError::InvalidArgument(String::from(
                "parameters long/lat/radius cannot be null.",
            )));
        }

        truck_repo::find_by_coordinates(&self.pool, longitude, latitude, radius_meters).await
    }

    /// Vendors whose owner name contains `applicant`, case-insensitively.
    pub async fn find_by_applicant(&self, applicant: &str) -> Result<FeatureCollection> {
        if applicant.trim().is_empty() {
            return Err(AppError::InvalidArgument(String::from(
                "parameter applicant cannot be null.",
            )));
        }

        truck_repo::find_by_applicant(&self.pool, applicant).await
    }

    /// Vendors whose item list contains `food_item`, case-insensitively.
    pub async fn find_by_food_item(&self, food_item: &str) -> Result<FeatureCollection> {
        if food_item.trim().is_empty() {
            return Err(AppError::InvalidArgument(String::from(
                "parameter fooditem cannot be null.",
            )));
        }

        truck_repo::find_by_food_item(&self.pool, food_item).await
    }

    /// Close the underlying session. Call once at process teardown, after
    /// in-flight lookups have completed.
    pub async fn end_connection(&self) {
        db_session::close_session(&self.pool).await;
    }
}

/// Zero and non-finite values mirror the "missing/falsy" contract of the
/// lookup inputs.
fn is_present(value: f64) -> bool {
    value.is_finite() && value != 0.0
}
