mod clip;

pub use clip::{GeoClip, PolygonClip};

use crate::error::{OperationError, Result};
use crate::geometry::Path;
use crate::math::Point2;

/// Merges overlapping drawn shapes into consolidated wall geometry.
///
/// All input rings are unioned; each connected region of the result
/// becomes one output path styled after the *first* input, with
/// `blocks_light` OR-ed over every contributor. Portals never survive a
/// merge: output paths always carry `is_portal = false`.
pub struct Merge<'a> {
    paths: &'a [Path],
}

impl<'a> Merge<'a> {
    /// Creates a new merge operation.
    #[must_use]
    pub fn new(paths: &'a [Path]) -> Self {
        Self { paths }
    }

    /// Executes the merge through the given clipping backend.
    ///
    /// A single input path is returned as-is (with `is_portal` stripped)
    /// without touching the backend.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for empty input, or the
    /// backend's `ClippingError` if a ring is malformed or the union
    /// degenerates to nothing.
    pub fn execute(&self, clipper: &dyn PolygonClip) -> Result<Vec<Path>> {
        let Some(first) = self.paths.first() else {
            return Err(OperationError::InvalidInput("no paths to merge".to_owned()).into());
        };

        if self.paths.len() == 1 {
            let mut path = first.clone();
            path.is_portal = false;
            return Ok(vec![path]);
        }

        let rings: Vec<&[Point2]> = self.paths.iter().map(|p| p.points.as_slice()).collect();
        let regions = clipper.union(&rings)?;

        let blocks_light = self.paths.iter().any(|p| p.blocks_light);
        Ok(regions
            .into_iter()
            .map(|points| Path {
                points,
                color: first.color.clone(),
                width: first.width,
                blocks_light,
                is_portal: false,
            })
            .collect())
    }
}

/// Fail-closed merge boundary: consolidates drawn shapes, or reports
/// nothing usable.
///
/// Returns `None` for empty input and for any clipping failure, never a
/// partial result. The editor assigns identities to whatever comes back.
#[must_use]
pub fn merge_shapes(paths: &[Path]) -> Option<Vec<Path>> {
    Merge::new(paths).execute(&GeoClip).ok()
}

/// Tests whether two drawn shapes overlap in a region of nonzero area.
///
/// Conservative on failure: a malformed ring or backend error reads as
/// "no overlap" rather than crashing the caller.
#[must_use]
pub fn paths_intersect(a: &Path, b: &Path) -> bool {
    GeoClip.intersects(&a.points, &b.points).unwrap_or(false)
}
