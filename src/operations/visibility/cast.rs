use crate::geometry::Segment;
use crate::math::intersect_2d::{point_at, ray_segment_intersect_2d};
use crate::math::{Point2, Vector2};

/// Casts one ray from `source` at `angle` and returns the polygon vertex
/// for that direction.
///
/// The nearest forward hit among occluders and boundary segments wins; a
/// hit farther than `radius` (or no hit at all) caps the vertex at
/// exactly `radius` along the ray. Segments that do not block light are
/// ignored.
pub(super) fn cast_ray(
    source: &Point2,
    angle: f64,
    radius: f64,
    occluders: &[Segment],
    boundary: &[Segment; 4],
) -> Point2 {
    let dir = Vector2::new(angle.cos(), angle.sin());

    let mut nearest: Option<f64> = None;
    for seg in occluders.iter().chain(boundary.iter()) {
        if !seg.blocks_light {
            continue;
        }
        if let Some((t, _)) = ray_segment_intersect_2d(source, &dir, &seg.a, &seg.b) {
            if nearest.map_or(true, |best| t < best) {
                nearest = Some(t);
            }
        }
    }

    match nearest {
        // A grazing hit may report t marginally below zero; the vertex
        // never sits behind the source.
        Some(t) if t <= radius => point_at(source, &dir, t.max(0.0)),
        _ => point_at(source, &dir, radius),
    }
}
