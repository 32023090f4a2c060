//! Ray/geometry intersection core with a concurrent pixel dispatcher.
//!
//! The crate answers two questions for a renderer: which geometry does a
//! ray hit, where, within what distance — and which worker shades which
//! pixel. Shading, camera ray generation, and image encoding live with the
//! embedding renderer.

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod hittable;
pub mod math;
pub mod prelude;
pub mod renderer;
pub mod scene;
