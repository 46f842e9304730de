//! Food-truck finder query engine
//!
//! Library core for locating mobile food vendors in a PostGIS-backed store.
//! Three lookups are exposed (vendors within a radius of a point, vendors
//! whose owner name contains a substring, vendors whose item list contains a
//! substring), and each returns a single GeoJSON FeatureCollection aggregated
//! inside the database. Route wiring and rendering live in the surrounding
//! application, which calls [`TruckFinder`] with plain scalars.

pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, Result};
pub use models::{Feature, FeatureCollection, PointGeometry, TruckProperties};
pub use services::TruckFinder;
