//! # floorscan algorithms
//!
//! Geometry for turning a room scan into a floor-plan outline.
//!
//! The outline pipeline selects floor-level vertices, projects them onto the
//! XZ plane, wraps them in a convex hull and simplifies the hull with
//! Ramer–Douglas–Peucker. Every step is a pure function over in-memory data.

pub mod point_ops;
pub mod convex_hull;
pub mod simplify;
pub mod floor;
pub mod outline;

// Re-export commonly used items
pub use point_ops::*;
pub use convex_hull::*;
pub use simplify::*;
pub use floor::*;
pub use outline::*;
