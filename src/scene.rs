//! Scene graph: an arena of geometry leaves and nested groups.
//!
//! Groups reference children by index, so the graph nests arbitrarily
//! without ownership cycles and is plainly shareable across render workers
//! once built. Queries gate every node through its cached bounding box
//! before running the exact algorithms.

use tracing::debug;

use crate::aabb::{HasBoundingBox, AABB};
use crate::geometry::Geometry;
use crate::hittable::Hittable;
use crate::math::{Point3, Ray};

/// Handle to a node in the scene arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One intersection as reported by a scene query: which leaf was hit,
/// where, and how far along the ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SceneHit {
    pub geometry: NodeId,
    pub t: f64,
    pub point: Point3,
}

#[derive(Clone, Debug)]
enum Node {
    Leaf {
        geometry: Geometry,
        bounds: Option<AABB>,
    },
    Group {
        children: Vec<NodeId>,
        bounds: Option<AABB>,
    },
}

impl Node {
    fn bounds(&self) -> Option<AABB> {
        match self {
            Node::Leaf { bounds, .. } | Node::Group { bounds, .. } => *bounds,
        }
    }
}

/// The scene: built once, queried read-only for the duration of a render
/// pass.
#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<Node>,
    culling: bool,
}

impl Scene {
    /// A scene containing just the empty root group.
    pub fn new() -> Scene {
        Scene {
            nodes: vec![Node::Group {
                children: Vec::new(),
                bounds: None,
            }],
            culling: true,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Turn bounding-box culling off (or back on). Queries return the same
    /// hits either way; the gate is purely an optimization.
    pub fn set_culling(&mut self, enabled: bool) {
        self.culling = enabled;
    }

    /// Add a geometry leaf under `parent`. Its bounding box is cached
    /// immediately.
    ///
    /// Panics if `parent` is not a group.
    pub fn add_geometry(&mut self, parent: NodeId, geometry: impl Into<Geometry>) -> NodeId {
        let geometry = geometry.into();
        let bounds = geometry.bounding_box();
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Leaf { geometry, bounds });
        self.attach(parent, id);
        id
    }

    /// Add an empty child group under `parent`.
    ///
    /// Panics if `parent` is not a group.
    pub fn add_group(&mut self, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::Group {
            children: Vec::new(),
            bounds: None,
        });
        self.attach(parent, id);
        id
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        match &mut self.nodes[parent.0] {
            Node::Group { children, .. } => children.push(child),
            Node::Leaf { .. } => panic!("node {parent:?} is not a group"),
        }
    }

    /// The geometry stored at `id`, if `id` names a leaf.
    pub fn geometry(&self, id: NodeId) -> Option<&Geometry> {
        match self.nodes.get(id.0)? {
            Node::Leaf { geometry, .. } => Some(geometry),
            Node::Group { .. } => None,
        }
    }

    /// Number of geometry leaves in the scene.
    pub fn len(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recompute every group's bounding box bottom-up. A group holding an
    /// unbounded member (plane, tube, unbounded subgroup) stays unbounded
    /// and always passes the gate.
    pub fn refresh_bounds(&mut self) {
        self.refresh_node_bounds(self.root());
        debug!(target: "scene", "refreshed bounds for {} nodes", self.nodes.len());
    }

    fn refresh_node_bounds(&mut self, id: NodeId) -> Option<AABB> {
        let children = match &self.nodes[id.0] {
            Node::Leaf { bounds, .. } => return *bounds,
            Node::Group { children, .. } => children.clone(),
        };
        let mut combined: Option<AABB> = None;
        let mut unbounded = children.is_empty();
        for child in children {
            match self.refresh_node_bounds(child) {
                Some(child_bounds) => {
                    combined = Some(match combined {
                        Some(aabb) => aabb.expand(&child_bounds),
                        None => child_bounds,
                    });
                }
                None => unbounded = true,
            }
        }
        let bounds = if unbounded { None } else { combined };
        if let Node::Group {
            bounds: cached, ..
        } = &mut self.nodes[id.0]
        {
            *cached = bounds;
        }
        bounds
    }

    /// All intersections between `ray` and the scene, unordered across
    /// children (each leaf's own hits stay ascending).
    pub fn intersections(&self, ray: Ray) -> Vec<SceneHit> {
        self.intersections_within(ray, f64::INFINITY)
    }

    /// As [`Scene::intersections`], with hits beyond `max_distance`
    /// excluded (epsilon aligned).
    pub fn intersections_within(&self, ray: Ray, max_distance: f64) -> Vec<SceneHit> {
        let mut hits = Vec::new();
        self.collect_hits(self.root(), ray, max_distance, &mut hits);
        hits
    }

    fn collect_hits(&self, id: NodeId, ray: Ray, t_max: f64, out: &mut Vec<SceneHit>) {
        let node = &self.nodes[id.0];
        if self.culling {
            if let Some(bounds) = node.bounds() {
                if !bounds.hit(ray, t_max) {
                    return;
                }
            }
        }
        match node {
            Node::Leaf { geometry, .. } => {
                out.extend(geometry.hit(ray, t_max).into_iter().map(|hit| SceneHit {
                    geometry: id,
                    t: hit.t,
                    point: hit.point,
                }));
            }
            Node::Group { children, .. } => {
                for child in children {
                    self.collect_hits(*child, ray, t_max, out);
                }
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Sphere, Triangle};
    use crate::math::Vec3;

    fn sphere_at(x: f64, radius: f64) -> Sphere {
        Sphere::new(Point3::new(x, 0.0, 0.0), radius).unwrap()
    }

    #[test]
    fn empty_scene_yields_no_hits() {
        let scene = Scene::new();
        let ray = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();
        assert!(scene.intersections(ray).is_empty());
        assert!(scene.is_empty());
    }

    #[test]
    fn group_hits_are_the_union_of_child_hits() {
        let mut scene = Scene::new();
        let root = scene.root();
        let near = scene.add_geometry(root, sphere_at(5.0, 1.0));
        let far = scene.add_geometry(root, sphere_at(10.0, 1.0));
        let ray = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();

        let hits = scene.intersections(ray);
        assert_eq!(hits.len(), 4);
        let near_count = hits.iter().filter(|h| h.geometry == near).count();
        let far_count = hits.iter().filter(|h| h.geometry == far).count();
        assert_eq!(near_count, 2);
        assert_eq!(far_count, 2);

        // per-child hit lists stay ascending in the merged result
        let near_ts: Vec<f64> = hits
            .iter()
            .filter(|h| h.geometry == near)
            .map(|h| h.t)
            .collect();
        assert!(near_ts[0] < near_ts[1]);
    }

    #[test]
    fn nested_groups_are_queried_recursively() {
        let mut scene = Scene::new();
        let root = scene.root();
        let inner = scene.add_group(root);
        let innermost = scene.add_group(inner);
        scene.add_geometry(innermost, sphere_at(5.0, 1.0));
        assert_eq!(scene.len(), 1);

        let ray = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();
        assert_eq!(scene.intersections(ray).len(), 2);
    }

    #[test]
    fn culling_never_changes_the_result() {
        let mut scene = Scene::new();
        let root = scene.root();
        let group = scene.add_group(root);
        scene.add_geometry(group, sphere_at(5.0, 1.0));
        scene.add_geometry(group, sphere_at(-4.0, 0.5));
        scene.add_geometry(
            root,
            Triangle::new(
                Point3::new(2.0, -1.0, -1.0),
                Point3::new(2.0, 1.0, -1.0),
                Point3::new(2.0, 0.0, 1.0),
            )
            .unwrap(),
        );
        scene.refresh_bounds();

        let rays = [
            Ray::new(Point3::ORIGIN, Vec3::X).unwrap(),
            Ray::new(Point3::new(0.0, 0.2, 0.0), Vec3::X).unwrap(),
            Ray::new(Point3::new(-8.0, 0.0, 0.0), Vec3::X).unwrap(),
            Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::Y).unwrap(),
        ];
        for ray in rays {
            let gated = scene.intersections(ray);
            let mut ungated_scene = scene.clone();
            ungated_scene.set_culling(false);
            assert_eq!(gated, ungated_scene.intersections(ray));
        }
    }

    #[test]
    fn unbounded_members_leave_the_group_unbounded_but_queryable() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene.add_geometry(root, sphere_at(5.0, 1.0));
        scene.add_geometry(root, Plane::new(Point3::new(0.0, 0.0, -3.0), Vec3::Z).unwrap());
        scene.refresh_bounds();

        let ray = Ray::new(Point3::ORIGIN, -Vec3::Z).unwrap();
        let hits = scene.intersections(ray);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].point, Point3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn distance_cutoff_limits_scene_hits() {
        let mut scene = Scene::new();
        let root = scene.root();
        scene.add_geometry(root, sphere_at(5.0, 1.0));
        scene.refresh_bounds();

        let ray = Ray::new(Point3::ORIGIN, Vec3::X).unwrap();
        assert_eq!(scene.intersections_within(ray, 4.5).len(), 1);
        assert_eq!(scene.intersections_within(ray, 3.0).len(), 0);
        assert_eq!(scene.intersections_within(ray, 6.0).len(), 2);
    }

    #[test]
    fn box_gate_is_conservative_for_random_shapes() {
        use crate::geometry::Cylinder;
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let random_vec = |rng: &mut StdRng| loop {
            if let Ok(v) = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ) {
                return v;
            }
        };

        for _ in 0..300 {
            let center = Point3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let shape: Geometry = match rng.gen_range(0..3) {
                0 => Sphere::new(center, rng.gen_range(0.2..2.0)).unwrap().into(),
                1 => {
                    let axis = Ray::new(center, random_vec(&mut rng)).unwrap();
                    Cylinder::new(axis, rng.gen_range(0.2..2.0), rng.gen_range(0.5..3.0))
                        .unwrap()
                        .into()
                }
                _ => {
                    let spread = random_vec(&mut rng);
                    match Triangle::new(center, center + spread, center + spread.cross(Vec3::Z))
                    {
                        Ok(triangle) => triangle.into(),
                        Err(_) => continue,
                    }
                }
            };
            let bounds = shape.bounding_box().unwrap();
            for _ in 0..20 {
                let origin = Point3::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                );
                let ray = Ray::new(origin, random_vec(&mut rng)).unwrap();
                if !shape.hit(ray, f64::INFINITY).is_empty() {
                    assert!(
                        bounds.hit(ray, f64::INFINITY),
                        "gate rejected a ray the exact algorithm accepts"
                    );
                }
            }
        }
    }

    #[test]
    fn geometry_lookup_distinguishes_leaves_from_groups() {
        let mut scene = Scene::new();
        let root = scene.root();
        let group = scene.add_group(root);
        let leaf = scene.add_geometry(group, sphere_at(0.0, 1.0));
        assert!(scene.geometry(leaf).is_some());
        assert!(scene.geometry(group).is_none());
        assert!(scene.geometry(root).is_none());
    }
}
