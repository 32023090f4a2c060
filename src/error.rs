//! Error types for geometry construction and surface queries.

use thiserror::Error;

/// Errors raised while validating geometry or querying a surface.
///
/// Construction-time invariants fail here, eagerly, so intersection code
/// never has to cope with degenerate shapes. A ray that simply misses is
/// never an error.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    /// All vector components are within epsilon of zero.
    #[error("vector components are all within epsilon of zero")]
    DegenerateVector,

    /// The three points defining a plane are coincident or collinear.
    #[error("plane points are coincident or collinear")]
    CollinearPoints,

    /// A polygon was given fewer than three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A polygon vertex does not lie on the supporting plane.
    #[error("polygon vertices are not coplanar")]
    NonPlanar,

    /// Polygon edges are degenerate, collinear, or wound inconsistently.
    #[error("polygon is not convex with consistent winding")]
    NonConvex,

    /// A radial shape was given a non-positive radius.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// A finite cylinder was given a non-positive height.
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    /// The queried point has no well-defined surface normal,
    /// e.g. it lies exactly on a tube's axis.
    #[error("surface normal is undefined at the queried point")]
    UndefinedNormal,
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
