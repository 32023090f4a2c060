use crate::aabb::{HasBoundingBox, AABB};
use crate::error::{GeometryError, Result};
use crate::hittable::{Hits, Hittable};
use crate::math::{align_zero, is_zero, Point3, Ray, Vec3};

use super::Plane;

/// Convex planar polygon with consistently wound vertices.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

/// The three-vertex special case, sharing the polygon containment walk.
#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: [Point3; 3],
    plane: Plane,
}

impl Polygon {
    /// Validates the full construction invariant: at least three vertices,
    /// all on the supporting plane of the first three, convex, and wound
    /// one way with no degenerate or collinear consecutive edges.
    pub fn new(vertices: Vec<Point3>) -> Result<Polygon> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()));
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        let normal = plane.normal();
        for vertex in &vertices[3..] {
            if !is_zero((*vertex - vertices[0]) * normal) {
                return Err(GeometryError::NonPlanar);
            }
        }
        let count = vertices.len();
        let mut winding = 0.0;
        for i in 0..count {
            let edge = vertices[(i + 1) % count] - vertices[i];
            let next_edge = vertices[(i + 2) % count] - vertices[(i + 1) % count];
            let turn = align_zero(edge.cross(next_edge) * normal);
            // a zero turn is a degenerate edge or a straight corner
            if turn == 0.0 || (winding != 0.0 && turn.signum() != winding) {
                return Err(GeometryError::NonConvex);
            }
            winding = turn.signum();
        }
        Ok(Polygon { vertices, plane })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        self.plane.normal_at(point)
    }
}

impl Triangle {
    pub fn new(p0: Point3, p1: Point3, p2: Point3) -> Result<Triangle> {
        Ok(Triangle {
            vertices: [p0, p1, p2],
            plane: Plane::from_points(p0, p1, p2)?,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn normal_at(&self, point: Point3) -> Result<Vec3> {
        self.plane.normal_at(point)
    }
}

/// Supporting-plane hit first (which also applies the distance cutoff),
/// then the half-plane walk: the ray is inside iff the signs of
/// `dir . ((v_i - origin) x (v_i+1 - origin))` agree strictly for every
/// edge. Any epsilon-zero sign is an edge or vertex graze and a miss.
fn convex_hit(plane: &Plane, vertices: &[Point3], ray: Ray, t_max: f64) -> Hits {
    let hits = plane.hit(ray, t_max);
    if hits.is_empty() {
        return hits;
    }
    let origin = ray.origin();
    let direction = ray.direction();
    let count = vertices.len();
    let mut winding = 0.0;
    for i in 0..count {
        let a = vertices[i] - origin;
        let b = vertices[(i + 1) % count] - origin;
        let sign = align_zero(direction * a.cross(b));
        if sign == 0.0 || (winding != 0.0 && sign.signum() != winding) {
            return Hits::new();
        }
        winding = sign.signum();
    }
    hits
}

impl Hittable for Polygon {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        convex_hit(&self.plane, &self.vertices, ray, t_max)
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: Ray, t_max: f64) -> Hits {
        convex_hit(&self.plane, &self.vertices, ray, t_max)
    }
}

fn vertex_bounds(vertices: &[Point3]) -> Option<AABB> {
    let first = *vertices.first()?;
    Some(
        vertices[1..]
            .iter()
            .fold(AABB::new(first, first), |aabb, v| aabb.grow(*v)),
    )
}

impl HasBoundingBox for Polygon {
    fn bounding_box(&self) -> Option<AABB> {
        vertex_bounds(&self.vertices)
    }
}

impl HasBoundingBox for Triangle {
    fn bounding_box(&self) -> Option<AABB> {
        vertex_bounds(&self.vertices)
    }
}
