use crate::math::{Point2, DEGENERACY_TOLERANCE};

use super::Segment;

/// A user-drawn shape: an ordered point sequence with stroke styling and
/// occlusion flags.
///
/// When treated as a polygon the point sequence implicitly closes: the
/// last point connects back to the first. Paths carry no identity; the
/// editor assigns ids to whatever the merger returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub points: Vec<Point2>,
    pub color: String,
    pub width: f64,
    pub blocks_light: bool,
    pub is_portal: bool,
}

impl Path {
    /// Creates a new path.
    #[must_use]
    pub fn new(
        points: Vec<Point2>,
        color: impl Into<String>,
        width: f64,
        blocks_light: bool,
        is_portal: bool,
    ) -> Self {
        Self {
            points,
            color: color.into(),
            width,
            blocks_light,
            is_portal,
        }
    }

    /// Decomposes the implicit closed ring into one occluder [`Segment`]
    /// per edge, each inheriting this path's `width` and `blocks_light`.
    ///
    /// This is the derivation the editor performs before handing wall
    /// geometry to the visibility engine. Paths that do not block light
    /// produce no occluders; zero-length edges are skipped.
    #[must_use]
    pub fn wall_segments(&self) -> Vec<Segment> {
        if !self.blocks_light {
            return Vec::new();
        }
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        let mut segments = Vec::with_capacity(n);
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            if (b - a).norm_squared() < DEGENERACY_TOLERANCE * DEGENERACY_TOLERANCE {
                continue;
            }
            segments.push(Segment::new(a, b, self.width, self.blocks_light));
        }
        segments
    }
}
