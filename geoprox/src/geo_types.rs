//! Interoperability with the `geo-types` crate.

use geo_types::{point, CoordNum};
use num_traits::Float;

use crate::point::{Coordinate, GeoPoint, RawPoint};

impl<T: CoordNum + Float> GeoPoint for geo_types::Point<T> {
    type Num = T;

    fn lat(&self) -> Self::Num {
        self.y()
    }

    fn lon(&self) -> Self::Num {
        self.x()
    }
}

impl From<geo_types::Point<f64>> for RawPoint {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::lonlat(point.x(), point.y())
    }
}

impl From<Coordinate> for geo_types::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        point!(x: coord.lon(), y: coord.lat())
    }
}
