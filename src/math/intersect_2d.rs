use super::{Point2, Vector2, DEGENERACY_TOLERANCE, PARAM_TOLERANCE};

/// Parametric 2D ray-segment intersection.
///
/// The ray is `origin + t * dir` with `t >= 0`; the segment runs from `a`
/// to `b` with parameter `u` in `[0, 1]`. Returns `(t, u)` if the ray
/// crosses the segment.
///
/// Parallel or degenerate configurations (zero-length direction or
/// segment, near-zero cross-product denominator) return `None`. Both
/// parameter ranges include a [`PARAM_TOLERANCE`] margin so endpoint
/// grazing still counts as a hit.
#[must_use]
pub fn ray_segment_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    a: &Point2,
    b: &Point2,
) -> Option<(f64, f64)> {
    let seg = b - a;
    if dir.norm_squared() < DEGENERACY_TOLERANCE * DEGENERACY_TOLERANCE
        || seg.norm_squared() < DEGENERACY_TOLERANCE * DEGENERACY_TOLERANCE
    {
        return None;
    }

    let cross = dir.x * seg.y - dir.y * seg.x;
    if cross.abs() < DEGENERACY_TOLERANCE {
        return None;
    }

    let dx = a.x - origin.x;
    let dy = a.y - origin.y;
    let t = (dx * seg.y - dy * seg.x) / cross;
    let u = (dx * dir.y - dy * dir.x) / cross;

    if t >= -PARAM_TOLERANCE && u >= -PARAM_TOLERANCE && u <= 1.0 + PARAM_TOLERANCE {
        Some((t, u))
    } else {
        None
    }
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    Point2::new(origin.x + dir.x * t, origin.y + dir.y * t)
}
