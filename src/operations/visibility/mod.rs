mod cast;
mod sample;

use crate::error::{OperationError, Result};
use crate::geometry::{MapBounds, Segment, VisibilityPolygon};
use crate::math::Point2;

/// Computes the polygon visible from a light source through a field of
/// occluding wall segments.
///
/// Ray directions are sampled at occluder endpoints (grazing both sides
/// of each), at map corners within reach, and on a coarse full-circle
/// sweep. Each ray stops at its nearest light-blocking hit, or at the
/// sight radius when nothing is in the way. The four map-boundary
/// segments always participate, so sight never escapes the map.
pub struct Visibility {
    light_source: Point2,
    radius: f64,
}

impl Visibility {
    /// Creates a new visibility query.
    #[must_use]
    pub fn new(light_source: Point2, radius: f64) -> Self {
        Self {
            light_source,
            radius,
        }
    }

    /// Executes the query against the given occluders and map bounds.
    ///
    /// Occluders may be empty; the result is then the sampled radius
    /// circle clipped to the map. Vertices come back ordered by ascending
    /// polar angle around the light source, with equal angles keeping
    /// their cast order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `radius` or either
    /// bounds dimension is not positive.
    pub fn execute(&self, segments: &[Segment], bounds: &MapBounds) -> Result<VisibilityPolygon> {
        if self.radius <= 0.0 {
            return Err(
                OperationError::InvalidInput("light radius must be positive".to_owned()).into(),
            );
        }
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Err(OperationError::InvalidInput(
                "map bounds must have positive extent".to_owned(),
            )
            .into());
        }

        let boundary = bounds.boundary_segments();
        let angles = sample::sample_angles(&self.light_source, segments, bounds, self.radius);

        let mut vertices: Vec<(f64, Point2)> = angles
            .into_iter()
            .map(|angle| {
                let vertex =
                    cast::cast_ray(&self.light_source, angle, self.radius, segments, &boundary);
                (angle, vertex)
            })
            .collect();

        // Stable sort: near-duplicate angles keep ray-casting order and
        // are deliberately not deduplicated.
        vertices.sort_by(|(a, _), (b, _)| a.total_cmp(b));

        Ok(VisibilityPolygon::new(
            vertices.into_iter().map(|(_, pt)| pt).collect(),
        ))
    }
}
