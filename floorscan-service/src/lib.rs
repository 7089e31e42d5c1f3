//! Boundary layer for floorscan
//!
//! Turns JSON requests into typed calls, runs the CPU-bound pipelines on the
//! blocking thread pool and reports failures as structured [`ErrorReport`]s
//! with stable codes.

pub mod combine;
pub mod config;
pub mod outline;
pub mod output;
pub mod report;
pub mod request;

pub use combine::CombineService;
pub use config::ServiceConfig;
pub use outline::{extract_outline_from_path, OutlineService};
pub use output::{generate_output_path, generate_output_path_at};
pub use report::ErrorReport;
pub use request::{CombineRequest, OutlineRequest};
