//! Distance-based ordering and nearest-neighbor selection.

use crate::distance::{DistanceEngine, Vincenty};
use crate::error::GeoProxError;
use crate::point::RawPoint;

/// Returns a copy of `candidates` sorted by ascending distance to
/// `reference` on the WGS-84 ellipsoid.
///
/// The sort is stable: candidates at equal distance keep their input order.
/// A candidate whose distance computation does not converge sorts after all
/// convergent candidates.
pub fn order_by_distance(
    reference: &RawPoint,
    candidates: &[RawPoint],
) -> Result<Vec<RawPoint>, GeoProxError> {
    order_by_distance_with(&Vincenty::default(), reference, candidates)
}

/// Same as [`order_by_distance`], with an explicit [`DistanceEngine`].
pub fn order_by_distance_with(
    engine: &impl DistanceEngine,
    reference: &RawPoint,
    candidates: &[RawPoint],
) -> Result<Vec<RawPoint>, GeoProxError> {
    // Each distance is computed exactly once, before sorting, so that tie
    // comparisons cannot reorder equal candidates.
    let mut keyed = candidates
        .iter()
        .map(|candidate| {
            let distance = match engine.distance(reference, candidate) {
                Ok(distance) => distance,
                Err(GeoProxError::NotConverged) => f64::INFINITY,
                Err(other) => return Err(other),
            };
            Ok((distance, candidate.clone()))
        })
        .collect::<Result<Vec<_>, GeoProxError>>()?;

    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, candidate)| candidate).collect())
}

/// Returns the candidate nearest to `reference`.
///
/// Fails with [`GeoProxError::EmptyCandidates`] if `candidates` is empty.
pub fn find_nearest(
    reference: &RawPoint,
    candidates: &[RawPoint],
) -> Result<RawPoint, GeoProxError> {
    find_nearest_with(&Vincenty::default(), reference, candidates)
}

/// Same as [`find_nearest`], with an explicit [`DistanceEngine`].
pub fn find_nearest_with(
    engine: &impl DistanceEngine,
    reference: &RawPoint,
    candidates: &[RawPoint],
) -> Result<RawPoint, GeoProxError> {
    order_by_distance_with(engine, reference, candidates)?
        .into_iter()
        .next()
        .ok_or(GeoProxError::EmptyCandidates)
}
