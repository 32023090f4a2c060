use crate::math::{is_zero, Point3, Ray, EPSILON};

/// Shapes that can report a world-space bounding box.
///
/// `None` means unbounded (planes, tubes, groups containing either) and
/// always passes the cull gate.
pub trait HasBoundingBox {
    fn bounding_box(&self) -> Option<AABB>;
}

/// Axis-aligned bounding box used to reject rays before the exact
/// intersection algorithms run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Point3,
    pub max: Point3,
}

impl AABB {
    pub fn new(min: Point3, max: Point3) -> AABB {
        AABB {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Union with another box.
    pub fn expand(self, other: &AABB) -> AABB {
        AABB {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Union with a single point.
    pub fn grow(self, other: Point3) -> AABB {
        AABB {
            min: Point3::new(
                self.min.x.min(other.x),
                self.min.y.min(other.y),
                self.min.z.min(other.z),
            ),
            max: Point3::new(
                self.max.x.max(other.x),
                self.max.y.max(other.y),
                self.max.z.max(other.z),
            ),
        }
    }

    pub fn contains(&self, point: Point3) -> bool {
        let p = point.to_array();
        let min = self.min.to_array();
        let max = self.max.to_array();
        (0..3).all(|axis| p[axis] >= min[axis] - EPSILON && p[axis] <= max[axis] + EPSILON)
    }

    /// Slab test: intersect the per-axis entry/exit intervals of the ray
    /// against `[0, t_max]`. Every comparison carries epsilon slack so the
    /// gate stays conservative — it may pass a ray the exact algorithm
    /// rejects, never the other way around.
    pub fn hit(&self, ray: Ray, t_max: f64) -> bool {
        let origin = ray.origin().to_array();
        let direction = ray.direction().to_array();
        let min = self.min.to_array();
        let max = self.max.to_array();

        let mut t_enter: f64 = 0.0;
        let mut t_exit: f64 = t_max;
        for axis in 0..3 {
            if is_zero(direction[axis]) {
                // parallel to this slab: in or out for the whole ray
                if origin[axis] < min[axis] - EPSILON || origin[axis] > max[axis] + EPSILON {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / direction[axis];
            let mut t0 = (min[axis] - origin[axis]) * inv;
            let mut t1 = (max[axis] - origin[axis]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit + EPSILON {
                return false;
            }
        }
        true
    }
}
