use std::{fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical location on the map.
///
/// Instances are valid by construction, i.e. both coordinates
/// are finite and within their degree ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Invalid map point: {0}")]
    Format(String),
    #[error("Invalid latitude: {0}")]
    Latitude(String),
    #[error("Invalid longitude: {0}")]
    Longitude(String),
}

impl MapPoint {
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        let res = Self::try_from_lat_lng_deg(lat, lng);
        debug_assert!(res.is_some());
        res.unwrap_or(Self { lat, lng })
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) && (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng)
        {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    pub const fn lat_deg(self) -> f64 {
        self.lat
    }

    pub const fn lng_deg(self) -> f64 {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// Great-circle distance between two points (haversine).
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat = lat2_rad - lat1_rad;
        let dlng = lng2_rad - lng1_rad;

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1_rad.cos() * lat2_rad.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_miles(EARTH_RADIUS_MILES * c)
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat: f64 = lat_deg_str
            .trim()
            .parse()
            .map_err(|_| MapPointParseError::Latitude(lat_deg_str.to_string()))?;
        let lng: f64 = lng_deg_str
            .trim()
            .parse()
            .map_err(|_| MapPointParseError::Longitude(lng_deg_str.to_string()))?;
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(MapPointParseError::Latitude(lat_deg_str.to_string()));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(MapPointParseError::Longitude(lng_deg_str.to_string()));
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.to_string()))
        }
    }
}

/// A distance in statute miles.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

pub const EARTH_RADIUS_MILES: f64 = 3958.8;

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_miles(miles: f64) -> Self {
        Self(miles)
    }

    pub const fn to_miles(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}
