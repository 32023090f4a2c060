use std::ops::{Add, Sub};

use super::Vec3;

/// An affine position in space. Points have no length; displacements
/// between them are [`Vec3`]s.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn distance_squared(self, other: Point3) -> f64 {
        (self - other).norm_squared()
    }

    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;

    #[inline]
    fn add(self, other: Vec3) -> Point3 {
        Point3::new(self.x + other.x(), self.y + other.y(), self.z + other.z())
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;

    #[inline]
    fn sub(self, other: Vec3) -> Point3 {
        Point3::new(self.x - other.x(), self.y - other.y(), self.z - other.z())
    }
}

impl Sub for Point3 {
    type Output = Vec3;

    // point - point is a displacement, which may legitimately be zero.
    #[inline]
    fn sub(self, other: Point3) -> Vec3 {
        Vec3::new_raw(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
