use std::panic::{catch_unwind, AssertUnwindSafe};

use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use crate::error::ClippingError;
use crate::math::polygon_2d::{ring_is_degenerate, signed_area_2d};
use crate::math::{Point2, DEGENERACY_TOLERANCE};

/// Narrow interface over the polygon Boolean backend.
///
/// The merger only ever needs these two operations, so the concrete
/// clipping engine can be swapped without touching callers.
pub trait PolygonClip {
    /// Unions the given closed rings into a set of disjoint output rings,
    /// one per connected region.
    ///
    /// # Errors
    ///
    /// Returns a [`ClippingError`] if any input ring is degenerate, the
    /// backend fails, or the union encloses no area.
    fn union(&self, rings: &[&[Point2]]) -> Result<Vec<Vec<Point2>>, ClippingError>;

    /// Tests whether two closed rings overlap in a region of nonzero
    /// area.
    ///
    /// # Errors
    ///
    /// Returns a [`ClippingError`] if either ring is degenerate or the
    /// backend fails.
    fn intersects(&self, a: &[Point2], b: &[Point2]) -> Result<bool, ClippingError>;
}

/// [`PolygonClip`] backend over the `geo` crate's Boolean operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoClip;

impl PolygonClip for GeoClip {
    fn union(&self, rings: &[&[Point2]]) -> Result<Vec<Vec<Point2>>, ClippingError> {
        let polygons = rings
            .iter()
            .map(|ring| to_polygon(ring))
            .collect::<Result<Vec<_>, _>>()?;
        let (first, rest) = polygons.split_first().ok_or(ClippingError::EmptyResult)?;

        let unioned = contain_panic(|| {
            let mut acc = MultiPolygon::new(vec![first.clone()]);
            for polygon in rest {
                acc = acc.union(&MultiPolygon::new(vec![polygon.clone()]));
            }
            acc
        })?;

        let output: Vec<Vec<Point2>> = unioned
            .0
            .iter()
            .map(exterior_ring)
            .filter(|ring| signed_area_2d(ring).abs() > DEGENERACY_TOLERANCE)
            .collect();
        if output.is_empty() {
            return Err(ClippingError::EmptyResult);
        }
        Ok(output)
    }

    fn intersects(&self, a: &[Point2], b: &[Point2]) -> Result<bool, ClippingError> {
        let subject = to_polygon(a)?;
        let clip = to_polygon(b)?;
        let overlap = contain_panic(|| subject.intersection(&clip))?;
        Ok(overlap
            .0
            .iter()
            .any(|p| signed_area_2d(&exterior_ring(p)).abs() > DEGENERACY_TOLERANCE))
    }
}

fn to_polygon(ring: &[Point2]) -> Result<Polygon<f64>, ClippingError> {
    if ring_is_degenerate(ring) {
        return Err(ClippingError::DegenerateRing(format!(
            "ring with {} points encloses no area",
            ring.len()
        )));
    }
    let coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    // Polygon::new closes the exterior ring itself.
    Ok(Polygon::new(LineString::new(coords), Vec::new()))
}

/// Extracts a polygon's exterior ring, dropping geo's closing duplicate
/// vertex. Interior rings (holes) are not represented in the path model.
fn exterior_ring(polygon: &Polygon<f64>) -> Vec<Point2> {
    let coords = &polygon.exterior().0;
    let open = if coords.len() > 1 && coords.first() == coords.last() {
        &coords[..coords.len() - 1]
    } else {
        &coords[..]
    };
    open.iter().map(|c| Point2::new(c.x, c.y)).collect()
}

fn contain_panic<T>(op: impl FnOnce() -> T) -> Result<T, ClippingError> {
    catch_unwind(AssertUnwindSafe(op)).map_err(|_| ClippingError::BackendPanic)
}
