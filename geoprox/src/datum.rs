//! Reference ellipsoid parameters used by the geodesic solver.

/// Shape parameters of a reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    semiminor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984 ellipsoid.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        semiminor: 6_356_752.314245,
        inv_flattening: 298.257223563,
    };

    /// Semi-major axis (equatorial radius) in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Semi-minor axis (polar radius) in meters.
    pub fn semiminor(&self) -> f64 {
        self.semiminor
    }

    /// Inverse flattening `1/f`.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening `f = (a - b) / a`.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
