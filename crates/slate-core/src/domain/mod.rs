//! Core domain layer for Slate.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and subprocess concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod build;
pub mod error;
pub mod overlay;
pub mod source;
pub mod theme_name;

// Re-exports for convenience
pub use build::{BuildMode, BundlerConfig};
pub use error::{DomainError, ErrorCategory};
pub use overlay::ConfigOverlay;
pub use source::{EXCLUDED_DIRS, MANIFEST_MARKER, RemoteSource, SourceDescriptor};
pub use theme_name::ThemeName;
