use crate::aabb::{HasBoundingBox, AABB};
use crate::error::{GeometryError, Result};
use crate::hittable::{Hit, Hits, Hittable};
use crate::math::{align_zero, is_zero, Point3, Ray, Vec3};

/// An infinite cylinder of constant radius around an axis ray.
#[derive(Clone, Debug)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    pub fn new(axis: Ray, radius: f64) -> Result<Tube> {
        if align_zero(radius) <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Tube { axis, radius })
    }

    #[inline]
    pub fn axis(&self) -> Ray {
        self.axis
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed distance of `point`'s axis projection from the axis origin.
    pub(crate) fn axial_offset(&self, point: Point3) -> f64 {
        (point - self.axis.origin()) * self.axis.direction()
    }

    /// Unit normal on the lateral surface: the radial offset from the axis
    /// foot point. A point on the axis itself has no normal.
    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        let foot = self.axis.point_at_parameter(self.axial_offset(point));
        (point - foot)
            .normalized()
            .map_err(|_| GeometryError::UndefinedNormal)
    }
}

impl Hittable for Tube {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        let mut hits = Hits::new();
        let axis_direction = self.axis.direction();
        let direction = ray.direction();
        let offset = ray.origin() - self.axis.origin();

        // components orthogonal to the axis; |perp(o + t*d)|^2 = r^2 is a
        // quadratic in t
        let direction_perp = direction - (direction * axis_direction) * axis_direction;
        let a = direction_perp.norm_squared();
        if is_zero(a) {
            // parallel to the axis: no radial crossing, grazes included
            return hits;
        }
        let offset_perp = offset - (offset * axis_direction) * axis_direction;
        let b = 2.0 * (direction_perp * offset_perp);
        let c = offset_perp.norm_squared() - self.radius * self.radius;

        let discriminant = align_zero(b * b - 4.0 * a * c);
        if discriminant <= 0.0 {
            // miss, tangency included
            return hits;
        }
        let sqrt_discriminant = discriminant.sqrt();
        for t in [
            (-b - sqrt_discriminant) / (2.0 * a),
            (-b + sqrt_discriminant) / (2.0 * a),
        ] {
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

impl HasBoundingBox for Tube {
    fn bounding_box(&self) -> Option<AABB> {
        None
    }
}
