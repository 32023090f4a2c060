use smallvec::SmallVec;

use crate::math::{Point3, Ray};

/// A single ray/surface intersection: parameter distance plus the
/// world-space point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub point: Point3,
}

/// Hit list for one primitive. A primitive produces at most two hits, so
/// the inline capacity keeps the hot path off the heap.
pub type Hits = SmallVec<[Hit; 2]>;

pub trait Hittable {
    /// Every intersection with `0 < t` and `t` within `t_max` (epsilon
    /// aligned), ascending by `t`. Boundary contacts — tangents, polygon
    /// edges, rim grazes — are misses. An empty list is a miss, never an
    /// error.
    fn hit(&self, ray: Ray, t_max: f64) -> Hits;
}
