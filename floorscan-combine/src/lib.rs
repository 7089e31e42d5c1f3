//! Multi-scan scene combination
//!
//! Places several room scans into one composite scene according to their
//! 2D canvas placements, then hands the result to a writer.
//!
//! ```text
//! paths + transforms -> load assets -> resolve poses -> clone into scan_<i>
//!                    -> composite root -> write
//! ```

pub mod collaborator;
pub mod combiner;
pub mod composite;
pub mod config;
pub mod pipeline;

pub use collaborator::*;
pub use combiner::*;
pub use composite::*;
pub use config::*;
pub use pipeline::*;
