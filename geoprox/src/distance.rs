//! Geodetic distance engines.

use crate::datum::Datum;
use crate::error::GeoProxError;
use crate::point::{GeoPoint, RawPoint};

/// Convergence tolerance of the iterative geodesic solver, in radians.
const CONVERGENCE_TOLERANCE: f64 = 1e-12;
/// Iteration budget of the geodesic solver.
const MAX_ITERATIONS: u32 = 100;

/// Strategy computing the distance in meters between two geographic points.
///
/// The crate ships two implementations: [`Vincenty`] (ellipsoidal, the
/// default used by all free functions) and [`Haversine`] (spherical).
/// Alternative backends are selected explicitly by constructing the engine
/// and passing it to the `_with` variants of the proximity and ordering
/// operations.
pub trait DistanceEngine {
    /// Distance in meters between `start` and `end`.
    fn distance(&self, start: &RawPoint, end: &RawPoint) -> Result<f64, GeoProxError>;

    /// Checks whether `point` lies strictly within `radius` meters of
    /// `center`. Points exactly on the boundary are outside.
    fn point_in_circle(
        &self,
        point: &RawPoint,
        center: &RawPoint,
        radius: f64,
    ) -> Result<bool, GeoProxError> {
        Ok(self.distance(point, center)? < radius)
    }
}

/// Geodesic distance on a reference ellipsoid, computed with the Vincenty
/// inverse solution (T. Vincenty, 1975).
///
/// The result is rounded to `precision` decimal digits and then quantized to
/// the nearest multiple of `accuracy` meters. With the defaults (accuracy
/// 1 m, precision 0) the result is a whole number of meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vincenty {
    datum: Datum,
    accuracy: f64,
    precision: u32,
}

impl Vincenty {
    /// Creates an engine for the given ellipsoid with default accuracy and
    /// precision.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            accuracy: 1.0,
            precision: 0,
        }
    }

    /// Sets the quantization step of the result, in meters.
    ///
    /// The value is floored before use; a floored value of zero or a
    /// non-finite value falls back to the 1 m default.
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = accuracy;
        self
    }

    /// Sets the number of decimal digits kept in the result.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    fn effective_accuracy(&self) -> f64 {
        let floored = self.accuracy.floor();
        if floored == 0.0 || !floored.is_finite() {
            1.0
        } else {
            floored
        }
    }
}

impl Default for Vincenty {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl DistanceEngine for Vincenty {
    fn distance(&self, start: &RawPoint, end: &RawPoint) -> Result<f64, GeoProxError> {
        let s = start.resolve()?;
        let e = end.resolve()?;

        let a = self.datum.semimajor();
        let b = self.datum.semiminor();
        let f = self.datum.flattening();

        let l = (e.lon() - s.lon()).to_radians();
        let u1 = ((1.0 - f) * s.lat_rad().tan()).atan();
        let u2 = ((1.0 - f) * e.lat_rad().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut iterations_left = MAX_ITERATIONS;
        let (sigma, sin_sigma, cos_sigma, cos_sq_alpha, cos2_sigma_m) = loop {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();
            let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
            .sqrt();

            // Co-incident points.
            if sin_sigma == 0.0 {
                return Ok(0.0);
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
            let mut cos2_sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
            if cos2_sigma_m.is_nan() {
                // Equatorial line: cos²α = 0.
                cos2_sigma_m = 0.0;
            }

            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
            let lambda_prev = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos2_sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)));

            if (lambda - lambda_prev).abs() <= CONVERGENCE_TOLERANCE {
                break (sigma, sin_sigma, cos_sigma, cos_sq_alpha, cos2_sigma_m);
            }

            iterations_left -= 1;
            if iterations_left == 0 {
                return Err(GeoProxError::NotConverged);
            }
        };

        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
        let a_coeff =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let b_coeff = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
        let delta_sigma = b_coeff
            * sin_sigma
            * (cos2_sigma_m
                + b_coeff / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)
                        - b_coeff / 6.0
                            * cos2_sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos2_sigma_m * cos2_sigma_m)));

        // Ellipsoidal precision is applied before elevation blending.
        let mut distance = round_digits(b * a_coeff * (sigma - delta_sigma), self.precision);

        if let (Some(start_elev), Some(end_elev)) = (s.elevation(), e.elevation()) {
            let climb = (end_elev - start_elev).abs();
            distance = (distance * distance + climb * climb).sqrt();
        }

        let accuracy = self.effective_accuracy();
        let scale = 10f64.powi(self.precision as i32);
        Ok((distance * scale / accuracy).round() * accuracy / scale)
    }
}

/// Great-circle distance on a sphere, computed with the haversine formula.
///
/// A cheaper, coarser alternative to [`Vincenty`] (up to ~0.5 % off on the
/// WGS-84 ellipsoid). Ignores elevation and applies no rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius: f64,
}

impl Haversine {
    /// Mean Earth radius in meters.
    pub const MEAN_EARTH_RADIUS: f64 = 6_371_000.0;

    /// Creates an engine for a sphere with the given radius in meters.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::new(Self::MEAN_EARTH_RADIUS)
    }
}

impl DistanceEngine for Haversine {
    fn distance(&self, start: &RawPoint, end: &RawPoint) -> Result<f64, GeoProxError> {
        let s = start.resolve()?;
        let e = end.resolve()?;

        let d_lat = (e.lat() - s.lat()).to_radians();
        let d_lon = (e.lon() - s.lon()).to_radians();
        let h = (d_lat / 2.0).sin().powi(2)
            + s.lat_rad().cos() * e.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
        let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

        Ok(self.radius * central_angle)
    }
}

/// Geodetic distance in meters between two points on the WGS-84 ellipsoid,
/// rounded to whole meters.
///
/// If both points carry an elevation, the elevation difference is blended
/// into the result: `sqrt(planar² + climb²)`.
///
/// ```
/// use geoprox::{distance, latlon};
///
/// let berlin = latlon!(52.518611, 13.408056);
/// let dortmund = latlon!(51.519475, 7.46694444);
/// assert_eq!(distance(&berlin, &dortmund)?, 422_592.0);
/// # Ok::<(), geoprox::GeoProxError>(())
/// ```
pub fn distance(start: &RawPoint, end: &RawPoint) -> Result<f64, GeoProxError> {
    Vincenty::default().distance(start, end)
}

/// Same as [`distance`], with explicit accuracy (quantization step in
/// meters) and precision (decimal digits kept).
pub fn distance_with(
    start: &RawPoint,
    end: &RawPoint,
    accuracy: f64,
    precision: u32,
) -> Result<f64, GeoProxError> {
    Vincenty::default()
        .with_accuracy(accuracy)
        .with_precision(precision)
        .distance(start, end)
}

fn round_digits(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}
