//! Shape-specific intersection and normal algorithms, behind one closed
//! variant set.

mod cylinder;
mod plane;
mod polygon;
mod sphere;
mod tube;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use polygon::{Polygon, Triangle};
pub use sphere::Sphere;
pub use tube::Tube;

use crate::aabb::{HasBoundingBox, AABB};
use crate::error::Result;
use crate::hittable::{Hits, Hittable};
use crate::math::{Point3, Ray, Vec3};

/// Every supported shape. The set is closed on purpose: dispatch is a
/// match, and a new shape extends every operation or fails to compile.
#[derive(Clone, Debug)]
pub enum Geometry {
    Plane(Plane),
    Sphere(Sphere),
    Triangle(Triangle),
    Polygon(Polygon),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Geometry {
    /// Unit surface normal at `point`. Fails when the point has no
    /// well-defined normal, e.g. exactly on a tube's axis.
    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        match self {
            Geometry::Plane(plane) => plane.normal_at(point),
            Geometry::Sphere(sphere) => sphere.normal_at(point),
            Geometry::Triangle(triangle) => triangle.normal_at(point),
            Geometry::Polygon(polygon) => polygon.normal_at(point),
            Geometry::Tube(tube) => tube.normal_at(point),
            Geometry::Cylinder(cylinder) => cylinder.normal_at(point),
        }
    }
}

impl Hittable for Geometry {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        match self {
            Geometry::Plane(plane) => plane.hit(ray, t_max),
            Geometry::Sphere(sphere) => sphere.hit(ray, t_max),
            Geometry::Triangle(triangle) => triangle.hit(ray, t_max),
            Geometry::Polygon(polygon) => polygon.hit(ray, t_max),
            Geometry::Tube(tube) => tube.hit(ray, t_max),
            Geometry::Cylinder(cylinder) => cylinder.hit(ray, t_max),
        }
    }
}

impl HasBoundingBox for Geometry {
    fn bounding_box(&self) -> Option<AABB> {
        match self {
            Geometry::Plane(plane) => plane.bounding_box(),
            Geometry::Sphere(sphere) => sphere.bounding_box(),
            Geometry::Triangle(triangle) => triangle.bounding_box(),
            Geometry::Polygon(polygon) => polygon.bounding_box(),
            Geometry::Tube(tube) => tube.bounding_box(),
            Geometry::Cylinder(cylinder) => cylinder.bounding_box(),
        }
    }
}

impl From<Plane> for Geometry {
    fn from(data: Plane) -> Self {
        Geometry::Plane(data)
    }
}

impl From<Sphere> for Geometry {
    fn from(data: Sphere) -> Self {
        Geometry::Sphere(data)
    }
}

impl From<Triangle> for Geometry {
    fn from(data: Triangle) -> Self {
        Geometry::Triangle(data)
    }
}

impl From<Polygon> for Geometry {
    fn from(data: Polygon) -> Self {
        Geometry::Polygon(data)
    }
}

impl From<Tube> for Geometry {
    fn from(data: Tube) -> Self {
        Geometry::Tube(data)
    }
}

impl From<Cylinder> for Geometry {
    fn from(data: Cylinder) -> Self {
        Geometry::Cylinder(data)
    }
}
