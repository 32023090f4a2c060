use crate::aabb::{HasBoundingBox, AABB};
use crate::error::{GeometryError, Result};
use crate::hittable::{Hits, Hittable};
use crate::math::{align_zero, is_zero, Point3, Ray, Vec3};

use super::{Plane, Tube};

/// A finite tube closed by two capping disks.
#[derive(Clone, Debug)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
    bottom: Plane,
    top: Plane,
}

impl Cylinder {
    pub fn new(axis: Ray, radius: f64, height: f64) -> Result<Cylinder> {
        if align_zero(height) <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(height));
        }
        let tube = Tube::new(axis, radius)?;
        let direction = axis.direction();
        let bottom = Plane::new(axis.origin(), direction)?;
        let top = Plane::new(axis.point_at_parameter(height), direction)?;
        Ok(Cylinder {
            tube,
            height,
            bottom,
            top,
        })
    }

    #[inline]
    pub fn axis(&self) -> Ray {
        self.tube.axis()
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.tube.radius()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Cap normal when the point projects onto a cap plane, lateral tube
    /// normal otherwise. Interior axis points still have no normal.
    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        let axial = self.tube.axial_offset(point);
        if is_zero(axial) {
            return Ok(-self.axis().direction());
        }
        if is_zero(axial - self.height) {
            return Ok(self.axis().direction());
        }
        self.tube.normal_at(point)
    }

    // cap = plane hit restricted to the open disk of the cap radius
    fn cap_hits(&self, cap: &Plane, ray: Ray, t_max: f64, hits: &mut Hits) {
        let radius_squared = self.radius() * self.radius();
        for hit in cap.hit(ray, t_max) {
            let radial_squared = hit.point.distance_squared(cap.anchor());
            if align_zero(radial_squared - radius_squared) < 0.0 {
                hits.push(hit);
            }
        }
    }
}

impl Hittable for Cylinder {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        let mut hits = Hits::new();
        // lateral surface: tube hits clipped to the open axial extent
        for hit in self.tube.hit(ray, t_max) {
            let axial = self.tube.axial_offset(hit.point);
            if align_zero(axial) > 0.0 && align_zero(axial - self.height) < 0.0 {
                hits.push(hit);
            }
        }
        self.cap_hits(&self.bottom, ray, t_max, &mut hits);
        self.cap_hits(&self.top, ray, t_max, &mut hits);
        hits.sort_by(|a, b| a.t.total_cmp(&b.t));
        hits
    }
}

impl HasBoundingBox for Cylinder {
    fn bounding_box(&self) -> Option<AABB> {
        // box of both cap centers, padded by the radius on every axis;
        // loose for slanted axes but never too small
        let r = self.radius();
        let caps = AABB::new(self.bottom.anchor(), self.top.anchor());
        Some(AABB::new(
            Point3::new(caps.min.x - r, caps.min.y - r, caps.min.z - r),
            Point3::new(caps.max.x + r, caps.max.y + r, caps.max.z + r),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // radius 1, caps at x = 0 and x = 2
    fn x_axis_cylinder() -> Cylinder {
        let axis = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();
        Cylinder::new(axis, 1.0, 2.0).unwrap()
    }

    #[test]
    fn non_positive_height_is_rejected() {
        let axis = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();
        assert!(matches!(
            Cylinder::new(axis, 1.0, 0.0),
            Err(GeometryError::NonPositiveHeight(_))
        ));
        assert!(matches!(
            Cylinder::new(axis, -1.0, 2.0),
            Err(GeometryError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn lateral_crossing_inside_the_extent_hits_twice() {
        let cylinder = x_axis_cylinder();
        let ray = Ray::new(Point3::new(1.0, -3.0, 0.0), Vec3::Y).unwrap();
        let hits = cylinder.hit(ray, f64::INFINITY);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].t, 2.0);
        assert_relative_eq!(hits[1].t, 4.0);
    }

    #[test]
    fn lateral_hits_beyond_the_extent_are_clipped() {
        let cylinder = x_axis_cylinder();
        let beyond_top = Ray::new(Point3::new(5.0, -3.0, 0.0), Vec3::Y).unwrap();
        let behind_bottom = Ray::new(Point3::new(-1.0, -3.0, 0.0), Vec3::Y).unwrap();
        assert!(cylinder.hit(beyond_top, f64::INFINITY).is_empty());
        assert!(cylinder.hit(behind_bottom, f64::INFINITY).is_empty());
    }

    #[test]
    fn axial_ray_hits_both_caps() {
        let cylinder = x_axis_cylinder();
        let ray = Ray::new(Point3::new(-1.0, 0.2, 0.0), Vec3::X).unwrap();
        let hits = cylinder.hit(ray, f64::INFINITY);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].t, 1.0);
        assert_relative_eq!(hits[1].t, 3.0);
        assert_relative_eq!(hits[0].point.x, 0.0);
        assert_relative_eq!(hits[1].point.x, 2.0);
    }

    #[test]
    fn slanted_ray_enters_the_side_and_leaves_through_a_cap() {
        let cylinder = x_axis_cylinder();
        // from below, tilted toward +x: in through the side at (1, -1),
        // out through the top cap at (2, 0)
        let ray = Ray::new(
            Point3::new(0.0, -2.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0).unwrap(),
        )
        .unwrap();
        let hits = cylinder.hit(ray, f64::INFINITY);
        assert_eq!(hits.len(), 2);
        assert_relative_eq!(hits[0].point.y, -1.0, epsilon = 1e-9);
        assert_relative_eq!(hits[1].point.x, 2.0, epsilon = 1e-9);
        assert!(hits[0].t < hits[1].t);
    }

    #[test]
    fn cap_rim_and_surface_grazes_miss() {
        let cylinder = x_axis_cylinder();
        // crosses the bottom cap plane exactly on the rim
        let rim = Ray::new(Point3::new(-1.0, 1.0, 0.0), Vec3::X).unwrap();
        assert!(cylinder.hit(rim, f64::INFINITY).is_empty());
        // parallel to the axis on the lateral surface
        let graze = Ray::new(Point3::new(-1.0, 0.0, 1.0), Vec3::X).unwrap();
        assert!(cylinder.hit(graze, f64::INFINITY).is_empty());
    }

    #[test]
    fn cutoff_applies_to_caps_and_sides() {
        let cylinder = x_axis_cylinder();
        let ray = Ray::new(Point3::new(-1.0, 0.2, 0.0), Vec3::X).unwrap();
        assert_eq!(cylinder.hit(ray, 2.0).len(), 1);
        assert!(cylinder.hit(ray, 0.5).is_empty());
    }

    #[test]
    fn normal_selects_cap_or_lateral_surface() {
        let cylinder = x_axis_cylinder();
        let bottom = cylinder.normal_at(Point3::new(0.0, 0.3, 0.0)).unwrap();
        let top = cylinder.normal_at(Point3::new(2.0, 0.0, -0.4)).unwrap();
        let side = cylinder.normal_at(Point3::new(1.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(bottom.x(), -1.0);
        assert_relative_eq!(top.x(), 1.0);
        assert_relative_eq!(side.y(), 1.0);
        assert_eq!(
            cylinder.normal_at(Point3::new(1.0, 0.0, 0.0)).unwrap_err(),
            GeometryError::UndefinedNormal
        );
    }

    #[test]
    fn bounding_box_wraps_caps_and_radius() {
        let cylinder = x_axis_cylinder();
        let aabb = cylinder.bounding_box().unwrap();
        assert_eq!(aabb.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Point3::new(3.0, 1.0, 1.0));
    }
}
