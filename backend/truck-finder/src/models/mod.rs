//! GeoJSON document model for vendor lookups.
//!
//! These structs mirror the aggregate built inside the store: one
//! FeatureCollection per query answer, one Feature per matched vendor row.

use serde::{Deserialize, Serialize};

/// One aggregated query answer, exactly as folded together by the store.
///
/// `features` is `None` when zero rows matched: `jsonb_agg` over an empty
/// set yields SQL NULL, and the field is absent after serialization. Callers
/// must treat "no features" as the no-match case, not expect an empty array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Feature>>,
}

impl FeatureCollection {
    /// Matched features as a slice; empty when nothing matched.
    pub fn features(&self) -> &[Feature] {
        self.features.as_deref().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.features().len()
    }

    pub fn is_empty(&self) -> bool {
        self.features().is_empty()
    }

    /// First matched feature, if any. The surrounding application centers
    /// its map on this one.
    pub fn first(&self) -> Option<&Feature> {
        self.features().first()
    }
}

/// One geographic vendor record: identifier, point geometry, property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    /// Public vendor identifier (`locationid`); absent when the source row
    /// carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub geometry: PointGeometry,
    pub properties: TruckProperties,
}

/// GeoJSON point geometry, `[longitude, latitude]` axis order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: [f64; 2],
}

impl PointGeometry {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Property bag for one vendor row: the known columns of the mobile-vendor
/// permit table, minus the raw geometry and the internal row id. Columns
/// added to the schema later are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TruckProperties {
    pub locationid: Option<i64>,
    pub applicant: Option<String>,
    pub facilitytype: Option<String>,
    pub cnn: Option<i64>,
    pub locationdescription: Option<String>,
    pub address: Option<String>,
    pub blocklot: Option<String>,
    pub block: Option<String>,
    pub lot: Option<String>,
    pub permit: Option<String>,
    pub status: Option<String>,
    pub fooditems: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub schedule: Option<String>,
    pub dayshours: Option<String>,
    pub noisent: Option<String>,
    pub approved: Option<String>,
    pub received: Option<String>,
    pub priorpermit: Option<i64>,
    pub expirationdate: Option<String>,
}
