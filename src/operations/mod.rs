pub mod merge;
pub mod visibility;

pub use merge::{merge_shapes, paths_intersect, GeoClip, Merge, PolygonClip};
pub use visibility::Visibility;
