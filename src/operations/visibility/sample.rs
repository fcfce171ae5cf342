use std::f64::consts::{PI, TAU};

use crate::geometry::{MapBounds, Segment};
use crate::math::Point2;

/// Angular offset of the two perturbed rays cast either side of a corner
/// or occluder endpoint, in radians.
///
/// Grazing both sides of the point resolves the shadow boundary there:
/// one ray stops at the endpoint, its neighbor slips past it.
pub(super) const ANGLE_NUDGE: f64 = 1e-5;

/// Number of evenly spaced rays in the full-circle sweep (one per 2°).
///
/// The sweep rounds the radius boundary wherever no occluder constrains
/// the polygon.
pub(super) const SWEEP_RAYS: usize = 180;

/// Polar angle of `pt` as seen from `source`, in `(-π, π]`.
pub(super) fn polar_angle(source: &Point2, pt: &Point2) -> f64 {
    (pt.y - source.y).atan2(pt.x - source.x)
}

/// Collects the candidate ray angles for one visibility query.
///
/// Light-blocking occluder endpoints inside the map and map corners
/// within `radius` of the source each contribute three samples (the exact
/// angle and its two nudged neighbors); the fixed coarse sweep covers the
/// full circle. Samples are not deduplicated; the caster resolves every
/// one, and the final stable sort keeps equal angles in this order.
pub(super) fn sample_angles(
    source: &Point2,
    segments: &[Segment],
    bounds: &MapBounds,
    radius: f64,
) -> Vec<f64> {
    let mut angles = Vec::with_capacity(segments.len() * 6 + 12 + SWEEP_RAYS);

    for seg in segments {
        if !seg.blocks_light {
            continue;
        }
        for pt in [&seg.a, &seg.b] {
            if bounds.contains(pt) {
                push_nudged(&mut angles, polar_angle(source, pt));
            }
        }
    }

    for corner in bounds.corners() {
        if (corner - *source).norm() <= radius {
            push_nudged(&mut angles, polar_angle(source, &corner));
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let step = TAU / SWEEP_RAYS as f64;
    for i in 0..SWEEP_RAYS {
        #[allow(clippy::cast_precision_loss)]
        let k = i as f64;
        angles.push(-PI + k * step);
    }

    angles
}

fn push_nudged(angles: &mut Vec<f64>, angle: f64) {
    angles.push(angle - ANGLE_NUDGE);
    angles.push(angle);
    angles.push(angle + ANGLE_NUDGE);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_scene_samples_only_the_sweep() {
        let source = Point2::new(50.0, 50.0);
        let bounds = MapBounds::new(100.0, 100.0);
        // Radius too short to reach any corner.
        let angles = sample_angles(&source, &[], &bounds, 10.0);
        assert_eq!(angles.len(), SWEEP_RAYS);
    }

    #[test]
    fn occluder_endpoints_add_three_samples_each() {
        let source = Point2::new(50.0, 50.0);
        let bounds = MapBounds::new(100.0, 100.0);
        let wall = Segment::new(Point2::new(60.0, 40.0), Point2::new(60.0, 60.0), 1.0, true);
        let angles = sample_angles(&source, &[wall], &bounds, 10.0);
        assert_eq!(angles.len(), SWEEP_RAYS + 6);
    }

    #[test]
    fn endpoints_outside_the_map_are_skipped() {
        let source = Point2::new(50.0, 50.0);
        let bounds = MapBounds::new(100.0, 100.0);
        let wall = Segment::new(Point2::new(60.0, 50.0), Point2::new(140.0, 50.0), 1.0, true);
        let angles = sample_angles(&source, &[wall], &bounds, 10.0);
        assert_eq!(angles.len(), SWEEP_RAYS + 3);
    }

    #[test]
    fn non_blocking_segments_are_skipped() {
        let source = Point2::new(50.0, 50.0);
        let bounds = MapBounds::new(100.0, 100.0);
        let portal = Segment::new(Point2::new(60.0, 40.0), Point2::new(60.0, 60.0), 1.0, false);
        let angles = sample_angles(&source, &[portal], &bounds, 10.0);
        assert_eq!(angles.len(), SWEEP_RAYS);
    }

    #[test]
    fn corners_within_radius_are_sampled() {
        let source = Point2::new(5.0, 5.0);
        let bounds = MapBounds::new(100.0, 100.0);
        // Only the origin corner is within reach.
        let angles = sample_angles(&source, &[], &bounds, 10.0);
        assert_eq!(angles.len(), SWEEP_RAYS + 3);
    }

    #[test]
    fn polar_angle_quadrants() {
        let source = Point2::new(0.0, 0.0);
        assert!((polar_angle(&source, &Point2::new(1.0, 0.0))).abs() < 1e-12);
        assert!((polar_angle(&source, &Point2::new(0.0, 1.0)) - PI / 2.0).abs() < 1e-12);
        assert!((polar_angle(&source, &Point2::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }
}
