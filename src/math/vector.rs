use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};

use super::is_zero;

/// A free direction or displacement.
///
/// [`Vec3::new`] rejects a triple whose length rounds to zero, so a vector
/// obtained from a constructor is never degenerate. Arithmetic can still
/// cancel down to zero (`a - a`), which is why [`Vec3::normalized`] stays
/// guarded.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vec3 {
    pub const X: Vec3 = Vec3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Fails with [`GeometryError::DegenerateVector`] when the components
    /// round to the zero vector.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Vec3> {
        let v = Vec3 { x, y, z };
        if is_zero(v.norm()) {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(v)
    }

    // Unchecked constructor for arithmetic results inside the crate.
    #[inline]
    pub(crate) const fn new_raw(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(self) -> f64 {
        self.z
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new_raw(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Fails when the vector has cancelled down to zero length.
    pub fn normalized(self) -> Result<Vec3> {
        let norm = self.norm();
        if is_zero(norm) {
            return Err(GeometryError::DegenerateVector);
        }
        Ok(self / norm)
    }
}

// Dot product, following the `v * v` operator convention.
impl Mul for Vec3 {
    type Output = f64;

    #[inline]
    fn mul(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, other: f64) -> Vec3 {
        Vec3::new_raw(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    #[inline]
    fn mul(self, other: Vec3) -> Vec3 {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, other: f64) -> Vec3 {
        Vec3::new_raw(self.x / other, self.y / other, self.z / other)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new_raw(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new_raw(-self.x, -self.y, -self.z)
    }
}
