use crate::error::Result;

use super::{Point3, Vec3};

/// A half-line: origin plus unit direction.
///
/// The direction is normalized at construction and stays unit length for
/// the life of the value, so the ray parameter `t` is a euclidean distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    /// Fails when `direction` has cancelled down to zero length.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Ray> {
        Ok(Ray {
            origin,
            direction: direction.normalized()?,
        })
    }

    #[inline]
    pub fn origin(self) -> Point3 {
        self.origin
    }

    #[inline]
    pub fn direction(self) -> Vec3 {
        self.direction
    }

    #[inline]
    pub fn point_at_parameter(self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_is_normalized_at_construction() {
        let ray = Ray::new(
            Point3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 3.0, -4.0).unwrap(),
        )
        .unwrap();
        assert_relative_eq!(ray.direction().norm(), 1.0);
        assert_relative_eq!(ray.direction().y(), 0.6);
        assert_relative_eq!(ray.direction().z(), -0.8);
    }

    #[test]
    fn point_at_parameter_walks_the_ray() {
        let ray = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();
        assert_eq!(ray.point_at_parameter(0.0), Point3::ORIGIN);
        assert_eq!(ray.point_at_parameter(2.5), Point3::new(2.5, 0.0, 0.0));
        let p = Point3::new(4.0, 0.0, 0.0);
        assert_relative_eq!(ray.origin().distance(p), 4.0);
    }

    #[test]
    fn degenerate_direction_is_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Ray::new(Point3::ORIGIN, p - p).is_err());
    }
}
