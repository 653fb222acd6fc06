//! Flexible input point representations and their canonical resolved form.

use std::collections::HashMap;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GeoProxError;

/// A point on the surface of a celestial body, positioned by geographic
/// coordinates in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;

    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Recognized longitude keys of a [`RawPoint::Keyed`] point, in priority order.
pub const LON_KEYS: [&str; 3] = ["lng", "lon", "longitude"];
/// Recognized latitude keys of a [`RawPoint::Keyed`] point, in priority order.
pub const LAT_KEYS: [&str; 2] = ["lat", "latitude"];
/// Recognized elevation keys of a [`RawPoint::Keyed`] point, in priority order.
pub const ELEVATION_KEYS: [&str; 4] = ["alt", "altitude", "elevation", "elev"];

/// A geographic point in one of the shapes accepted by this crate.
///
/// Deserializes from either a GeoJSON-style position array or a mapping with
/// any of the recognized coordinate keys:
///
/// ```
/// use geoprox::RawPoint;
///
/// let a: RawPoint = serde_json::from_str("[13.408056, 52.518611]")?;
/// let b: RawPoint = serde_json::from_str(r#"{"lat": 52.518611, "lng": 13.408056}"#)?;
/// assert_eq!(a.resolve()?, b.resolve()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPoint {
    /// GeoJSON-style position: `[longitude, latitude]` or
    /// `[longitude, latitude, elevation]`.
    Position(Vec<f64>),
    /// Mapping with keys drawn from [`LON_KEYS`], [`LAT_KEYS`] and
    /// [`ELEVATION_KEYS`].
    Keyed(HashMap<String, f64>),
}

/// Per-axis values of a point after key resolution.
struct Axes {
    lat: Option<f64>,
    lon: Option<f64>,
    elevation: Option<f64>,
}

impl RawPoint {
    /// Creates a point from latitude and longitude values (in degrees).
    pub fn latlon(lat: f64, lon: f64) -> Self {
        Self::Position(vec![lon, lat])
    }

    /// Creates a point from longitude and latitude values (in degrees).
    pub fn lonlat(lon: f64, lat: f64) -> Self {
        Self::latlon(lat, lon)
    }

    /// Creates a point carrying an elevation (in meters) along with latitude
    /// and longitude (in degrees).
    pub fn with_elevation(lat: f64, lon: f64, elevation: f64) -> Self {
        Self::Position(vec![lon, lat, elevation])
    }

    /// Creates a point from any [`GeoPoint`].
    pub fn from_geo_point(point: &impl GeoPoint<Num = f64>) -> Self {
        Self::latlon(point.lat(), point.lon())
    }

    /// Latitude of the point in degrees, if the latitude slot or key is
    /// present.
    pub fn latitude(&self) -> Result<Option<f64>, GeoProxError> {
        Ok(self.axes()?.lat)
    }

    /// Longitude of the point in degrees, if the longitude slot or key is
    /// present.
    pub fn longitude(&self) -> Result<Option<f64>, GeoProxError> {
        Ok(self.axes()?.lon)
    }

    /// Elevation of the point in meters, if the elevation slot or key is
    /// present.
    pub fn elevation(&self) -> Result<Option<f64>, GeoProxError> {
        Ok(self.axes()?.elevation)
    }

    /// Resolves the point into its canonical form.
    ///
    /// Fails with [`GeoProxError::Conversion`] if the point does not provide
    /// both latitude and longitude, or if a keyed point contains none of the
    /// recognized coordinate keys.
    pub fn resolve(&self) -> Result<Coordinate, GeoProxError> {
        let axes = self.axes()?;
        match (axes.lat, axes.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinate {
                lat,
                lon,
                elevation: axes.elevation,
            }),
            _ => Err(GeoProxError::Conversion(
                "point is missing latitude or longitude".into(),
            )),
        }
    }

    /// Resolves each axis of the point. The first matching key of each
    /// synonym set is authoritative; later synonyms are ignored.
    fn axes(&self) -> Result<Axes, GeoProxError> {
        match self {
            RawPoint::Position(slots) => Ok(Axes {
                lat: slots.get(1).copied(),
                lon: slots.first().copied(),
                elevation: slots.get(2).copied(),
            }),
            RawPoint::Keyed(map) => {
                let lat = first_match(map, &LAT_KEYS);
                let lon = first_match(map, &LON_KEYS);
                let elevation = first_match(map, &ELEVATION_KEYS);

                if lat.is_none() && lon.is_none() && elevation.is_none() {
                    return Err(GeoProxError::Conversion(
                        "mapping contains no recognized coordinate keys".into(),
                    ));
                }

                Ok(Axes {
                    lat,
                    lon,
                    elevation,
                })
            }
        }
    }
}

fn first_match(map: &HashMap<String, f64>, synonyms: &[&str]) -> Option<f64> {
    synonyms.iter().find_map(|key| map.get(*key).copied())
}

impl From<[f64; 2]> for RawPoint {
    fn from(lonlat: [f64; 2]) -> Self {
        Self::Position(lonlat.to_vec())
    }
}

impl From<[f64; 3]> for RawPoint {
    fn from(lonlatelev: [f64; 3]) -> Self {
        Self::Position(lonlatelev.to_vec())
    }
}

impl From<Vec<f64>> for RawPoint {
    fn from(position: Vec<f64>) -> Self {
        Self::Position(position)
    }
}

impl From<Coordinate> for RawPoint {
    fn from(coord: Coordinate) -> Self {
        match coord.elevation {
            Some(elevation) => Self::with_elevation(coord.lat, coord.lon, elevation),
            None => Self::latlon(coord.lat, coord.lon),
        }
    }
}

/// Canonical form of a point after coordinate resolution.
///
/// Latitude and longitude are in decimal degrees, elevation in meters.
/// Elevation is present only if the source point supplied it.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
    elevation: Option<f64>,
}

impl Coordinate {
    /// Creates a new coordinate without elevation.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: None,
        }
    }

    /// Creates a new coordinate with an elevation in meters.
    pub fn with_elevation(lat: f64, lon: f64, elevation: f64) -> Self {
        Self {
            lat,
            lon,
            elevation: Some(elevation),
        }
    }

    /// Creates a new coordinate from another point.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
            elevation: None,
        }
    }

    /// Elevation in meters, if the source point supplied one.
    pub fn elevation(&self) -> Option<f64> {
        self.elevation
    }
}

impl GeoPoint for Coordinate {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

/// Creates a new [`RawPoint`] from latitude and longitude values (in degrees).
///
/// ```
/// use geoprox::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.latitude(), Ok(Some(38.0)));
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::RawPoint::latlon($lat, $lon)
    };
}
