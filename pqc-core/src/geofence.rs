//! Service area of the city.
//!
//! A position is accepted if it lies within the bounding box of
//! the city or within the radius of one of the named allow-zones
//! outside of it.

use crate::entities::{Distance, MapBbox, MapPoint};

#[derive(Debug, Clone, PartialEq)]
pub struct AllowZone {
    pub name: String,
    pub center: MapPoint,
    pub radius: Distance,
}

impl AllowZone {
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        MapPoint::distance(self.center, pt).is_some_and(|d| d <= self.radius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Geofence {
    pub bbox: MapBbox,
    pub zones: Vec<AllowZone>,
}

pub const PARANAQUE_NORTH: f64 = 14.5050;
pub const PARANAQUE_SOUTH: f64 = 14.4300;
pub const PARANAQUE_EAST: f64 = 121.0600;
pub const PARANAQUE_WEST: f64 = 120.9700;

impl Default for Geofence {
    fn default() -> Self {
        Self {
            bbox: MapBbox::from_edges(
                PARANAQUE_NORTH,
                PARANAQUE_SOUTH,
                PARANAQUE_EAST,
                PARANAQUE_WEST,
            ),
            zones: vec![AllowZone {
                name: "NAIA".to_string(),
                center: MapPoint::from_lat_lng_deg(14.5086, 121.0198),
                radius: Distance::from_meters(2_000.0),
            }],
        }
    }
}

impl Geofence {
    pub fn is_allowed(&self, pt: MapPoint) -> bool {
        if !pt.is_valid() {
            return false;
        }
        self.bbox.contains_point(pt) || self.matching_zone(pt).is_some()
    }

    /// The first allow-zone that covers a position outside of the box.
    pub fn matching_zone(&self, pt: MapPoint) -> Option<&AllowZone> {
        self.zones.iter().find(|z| z.contains_point(pt))
    }
}
