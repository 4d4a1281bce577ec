//! Application services (use case orchestration).

pub mod build_service;
pub mod scaffold_service;

pub use build_service::BuildService;
pub use scaffold_service::{PackageManager, ScaffoldOptions, ScaffoldService};
