//! Slate Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Slate
//! theme tooling, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            slate-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, BuildService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │   (Driven: Filesystem, CommandRunner)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     slate-adapters (Infrastructure)     │
//! │  (LocalFilesystem, SystemRunner, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ThemeName, SourceDescriptor, BuildMode)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slate_core::application::{ScaffoldOptions, ScaffoldService};
//!
//! // Use application service (with injected adapters)
//! let service = ScaffoldService::new(filesystem, runner, overlay);
//! service.scaffold("my-theme", "shopify/starter-theme", root, &ScaffoldOptions::default())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BuildService, ScaffoldOptions, ScaffoldService,
        ports::{CommandRunner, CommandStatus, DirEntry, EntryKind, Filesystem, OutputMode},
    };
    pub use crate::domain::{
        BuildMode, BundlerConfig, ConfigOverlay, EXCLUDED_DIRS, MANIFEST_MARKER, RemoteSource,
        SourceDescriptor, ThemeName,
    };
    pub use crate::error::{SlateError, SlateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
