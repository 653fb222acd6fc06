//! Geodetic distances and spatial relationships between geographic points
//! given in flexible representations.
//!
//! Points are accepted either as GeoJSON-style positions (`[longitude,
//! latitude, elevation?]`) or as mappings using any of the common coordinate
//! key spellings (`lat`/`latitude`, `lng`/`lon`/`longitude`,
//! `alt`/`altitude`/`elevation`/`elev`). All operations normalize their
//! inputs through [`RawPoint`] before doing any math.
//!
//! Distances are geodesics on the WGS-84 ellipsoid solved with the Vincenty
//! inverse formula; proximity tests and nearest-neighbor ordering are built
//! on top of them.
//!
//! ```
//! use geoprox::{distance, find_nearest, latlon};
//!
//! let berlin = latlon!(52.518611, 13.408056);
//! let dortmund = latlon!(51.519475, 7.46694444);
//! let munich = latlon!(48.137154, 11.576124);
//!
//! assert_eq!(distance(&berlin, &dortmund)?, 422_592.0);
//!
//! let nearest = find_nearest(&berlin, &[dortmund.clone(), munich])?;
//! assert_eq!(nearest, dortmund);
//! # Ok::<(), geoprox::GeoProxError>(())
//! ```
//!
//! This is a pure computation library: no I/O, no global state, every
//! operation is a deterministic function of its inputs.

pub mod datum;
pub use datum::*;

mod error;
pub use error::GeoProxError;

mod point;
pub use point::*;

pub mod distance;
pub use distance::*;

pub mod proximity;
pub use proximity::*;

pub mod ordering;
pub use ordering::*;

#[cfg(feature = "geo-types")]
mod geo_types;
