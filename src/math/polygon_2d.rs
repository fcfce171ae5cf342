use super::{Point2, DEGENERACY_TOLERANCE};

/// Computes the signed area of a closed polygon ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The ring is
/// implicitly closed: the last vertex connects back to the first.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the ring spans fewer than 3 distinct vertices and
/// therefore cannot enclose any area.
///
/// Vertices closer than [`DEGENERACY_TOLERANCE`] count as coincident.
#[must_use]
pub fn ring_is_degenerate(ring: &[Point2]) -> bool {
    let tol_sq = DEGENERACY_TOLERANCE * DEGENERACY_TOLERANCE;
    let mut distinct: Vec<&Point2> = Vec::new();
    for pt in ring {
        if distinct.iter().all(|q| (*pt - **q).norm_squared() > tol_sq) {
            distinct.push(pt);
            if distinct.len() >= 3 {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!((signed_area_2d(&pts) - 1.0).abs() < DEGENERACY_TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ];
        assert!((signed_area_2d(&pts) + 1.0).abs() < DEGENERACY_TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[]).abs() < DEGENERACY_TOLERANCE);
        assert!(signed_area_2d(&[Point2::new(1.0, 1.0)]).abs() < DEGENERACY_TOLERANCE);
    }

    #[test]
    fn triangle_ring_is_not_degenerate() {
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(!ring_is_degenerate(&ring));
    }

    #[test]
    fn two_point_ring_is_degenerate() {
        let ring = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(ring_is_degenerate(&ring));
    }

    #[test]
    fn repeated_vertices_are_degenerate() {
        // Many vertices, only two distinct locations.
        let ring = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        assert!(ring_is_degenerate(&ring));
    }
}
