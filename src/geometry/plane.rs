use crate::aabb::{HasBoundingBox, AABB};
use crate::error::{GeometryError, Result};
use crate::hittable::{Hit, Hits, Hittable};
use crate::math::{align_zero, is_zero, Point3, Ray, Vec3};

/// An infinite plane stored as an anchor point plus a unit normal.
#[derive(Clone, Debug)]
pub struct Plane {
    anchor: Point3,
    normal: Vec3,
}

impl Plane {
    /// Fails when `normal` has cancelled down to zero length.
    pub fn new(anchor: Point3, normal: Vec3) -> Result<Plane> {
        Ok(Plane {
            anchor,
            normal: normal.normalized()?,
        })
    }

    /// Plane through three points. The normal is the cross product of the
    /// two edges out of `p0`; coincident or collinear points leave no
    /// usable normal and fail.
    pub fn from_points(p0: Point3, p1: Point3, p2: Point3) -> Result<Plane> {
        let normal = (p1 - p0).cross(p2 - p0);
        if is_zero(normal.norm()) {
            return Err(GeometryError::CollinearPoints);
        }
        Ok(Plane {
            anchor: p0,
            normal: normal.normalized()?,
        })
    }

    #[inline]
    pub fn anchor(&self) -> Point3 {
        self.anchor
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn normal_at(&self, _point: Point3) -> Result<Vec3> {
        Ok(self.normal)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        let mut hits = Hits::new();
        let denom = self.normal * ray.direction();
        if is_zero(denom) {
            // parallel, including a ray lying in the plane
            return hits;
        }
        let t = align_zero((self.anchor - ray.origin()) * self.normal / denom);
        if t <= 0.0 || align_zero(t - t_max) > 0.0 {
            return hits;
        }
        hits.push(Hit {
            t,
            point: ray.point_at_parameter(t),
        });
        hits
    }
}

impl HasBoundingBox for Plane {
    fn bounding_box(&self) -> Option<AABB> {
        None
    }
}
