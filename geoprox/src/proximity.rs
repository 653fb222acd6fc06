//! Point-in-circle and point-in-polygon tests.

use crate::distance::{DistanceEngine, Vincenty};
use crate::error::GeoProxError;
use crate::point::{Coordinate, GeoPoint, RawPoint};

/// Checks whether `point` lies strictly within `radius` meters of `center`,
/// measured on the WGS-84 ellipsoid. Points exactly on the boundary are
/// outside.
pub fn is_point_in_circle(
    point: &RawPoint,
    center: &RawPoint,
    radius: f64,
) -> Result<bool, GeoProxError> {
    Vincenty::default().point_in_circle(point, center, radius)
}

/// Checks whether `point` lies inside the closed ring formed by `polygon`.
///
/// Even-odd ray-casting test on longitude/latitude in degree space; the
/// ellipsoid and any elevations are ignored. The ring is implicitly closed
/// (the last vertex connects back to the first) and must not self-intersect.
/// Vertex order matters, but clockwise and counter-clockwise rings are
/// equivalent.
///
/// The edge-crossing comparison is half-open and direction-aware. Do not
/// "simplify" it: the exact inequalities decide how boundary points are
/// classified.
pub fn is_point_in_polygon(point: &RawPoint, polygon: &[RawPoint]) -> Result<bool, GeoProxError> {
    let p = point.resolve()?;
    let ring = polygon
        .iter()
        .map(RawPoint::resolve)
        .collect::<Result<Vec<Coordinate>, _>>()?;

    let mut inside = false;
    let mut j = ring.len().saturating_sub(1);
    for (i, vi) in ring.iter().enumerate() {
        let vj = &ring[j];
        let straddles = (vi.lon() <= p.lon() && p.lon() < vj.lon())
            || (vj.lon() <= p.lon() && p.lon() < vi.lon());
        if straddles
            && p.lat()
                < (vj.lat() - vi.lat()) * (p.lon() - vi.lon()) / (vj.lon() - vi.lon()) + vi.lat()
        {
            inside = !inside;
        }
        j = i;
    }

    Ok(inside)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::latlon;

    fn reference_polygon() -> Vec<RawPoint> {
        [
            (51.513357512, 7.45574331),
            (51.515400598, 7.45518541),
            (51.516241842, 7.456494328),
            (51.516722545, 7.459863183),
            (51.517443592, 7.463232037),
            (51.5177507, 7.464755532),
            (51.517657233, 7.466622349),
            (51.51722995, 7.468317505),
            (51.516816015, 7.47011995),
            (51.516308606, 7.471793648),
            (51.515974782, 7.472437378),
            (51.515413951, 7.472845074),
            (51.514559338, 7.472909447),
            (51.512195717, 7.472651955),
            (51.511127373, 7.47140741),
            (51.51029939, 7.469948288),
            (51.509831973, 7.468446251),
            (51.509978876, 7.462481019),
            (51.510913701, 7.460678574),
            (51.511594777, 7.459434029),
            (51.512396029, 7.457695958),
            (51.513317451, 7.45574331),
        ]
        .iter()
        .map(|&(lat, lon)| RawPoint::latlon(lat, lon))
        .collect()
    }

    #[test]
    fn point_inside_reference_polygon() {
        let inside = latlon!(51.514252208, 7.464905736);
        assert_eq!(is_point_in_polygon(&inside, &reference_polygon()), Ok(true));
    }

    #[test]
    fn point_outside_reference_polygon() {
        let outside = latlon!(51.510539773, 7.454691884);
        assert_eq!(is_point_in_polygon(&outside, &reference_polygon()), Ok(false));
    }

    #[test]
    fn convex_polygon_contains_its_centroid() {
        let square = [
            latlon!(0.0, 0.0),
            latlon!(0.0, 10.0),
            latlon!(10.0, 10.0),
            latlon!(10.0, 0.0),
        ];
        assert_eq!(is_point_in_polygon(&latlon!(5.0, 5.0), &square), Ok(true));
        assert_eq!(is_point_in_polygon(&latlon!(5.0, 25.0), &square), Ok(false));
        assert_eq!(is_point_in_polygon(&latlon!(-20.0, 5.0), &square), Ok(false));
    }

    #[test]
    fn vertex_orientation_does_not_matter() {
        let mut reversed = reference_polygon();
        reversed.reverse();
        let inside = latlon!(51.514252208, 7.464905736);
        assert_eq!(is_point_in_polygon(&inside, &reversed), Ok(true));
    }

    #[test]
    fn empty_polygon_contains_nothing() {
        assert_eq!(is_point_in_polygon(&latlon!(1.0, 1.0), &[]), Ok(false));
    }

    #[test]
    fn unresolvable_vertex_is_rejected() {
        let polygon = [latlon!(0.0, 0.0), RawPoint::Position(vec![1.0])];
        assert_matches!(
            is_point_in_polygon(&latlon!(0.0, 0.0), &polygon),
            Err(GeoProxError::Conversion(_))
        );
    }

    #[test]
    fn circle_membership_is_strict() {
        let center = latlon!(51.4812, 7.4025);
        let point = latlon!(51.5023, 7.3815);
        let d = crate::distance(&point, &center).expect("converges");

        assert_eq!(is_point_in_circle(&point, &center, d + 1.0), Ok(true));
        assert_eq!(is_point_in_circle(&point, &center, d), Ok(false));
        assert_eq!(is_point_in_circle(&point, &center, d - 1.0), Ok(false));
    }
}
