pub use crate::aabb::{HasBoundingBox, AABB};
pub use crate::error::{GeometryError, Result};
pub use crate::geometry::{Cylinder, Geometry, Plane, Polygon, Sphere, Triangle, Tube};
pub use crate::hittable::{Hit, Hits, Hittable};
pub use crate::math::{align_zero, is_zero, Point3, Ray, Vec3, EPSILON};
pub use crate::renderer::{render, Film, PixelDispatcher, RenderSettings};
pub use crate::scene::{NodeId, Scene, SceneHit};
