use crate::aabb::{HasBoundingBox, AABB};
use crate::error::{GeometryError, Result};
use crate::hittable::{Hit, Hits, Hittable};
use crate::math::{align_zero, Point3, Ray, Vec3};

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Result<Sphere> {
        if align_zero(radius) <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Sphere { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point3 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Outward unit normal. The center itself has no normal.
    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        (point - self.center)
            .normalized()
            .map_err(|_| GeometryError::UndefinedNormal)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        let mut hits = Hits::new();
        // project center - origin onto the (unit) direction; the remainder
        // is the squared distance from the center to the ray's line
        let u = self.center - ray.origin();
        let t_mid = u * ray.direction();
        let perp_squared = u.norm_squared() - t_mid * t_mid;
        let half_chord_squared = align_zero(self.radius * self.radius - perp_squared);
        if half_chord_squared <= 0.0 {
            // miss, tangency included
            return hits;
        }
        let half_chord = half_chord_squared.sqrt();
        for t in [t_mid - half_chord, t_mid + half_chord] {
            let t = align_zero(t);
            if t > 0.0 && align_zero(t - t_max) <= 0.0 {
                hits.push(Hit {
                    t,
                    point: ray.point_at_parameter(t),
                });
            }
        }
        hits
    }
}

impl HasBoundingBox for Sphere {
    fn bounding_box(&self) -> Option<AABB> {
        let r = self.radius;
        Some(AABB::new(
            Point3::new(self.center.x - r, self.center.y - r, self.center.z - r),
            Point3::new(self.center.x + r, self.center.y + r, self.center.z + r),
        ))
    }
}
