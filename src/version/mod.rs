//! Version layer: fetching package versions and picking the latest stable one
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Resolver   │────▶│UpdateRecord │
//! │  (fetch)    │     │  (decide)   │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   Stable    │
//! │ (packagist) │     │(version cmp)│
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching versions from remote sources
//! - [`registries`]: Concrete registry implementations (Packagist)
//! - [`resolver`]: Turns a fetch outcome into an update record or a reason
//! - [`stable`]: Stable version grammar and ordering
//! - [`error`]: Error types for registry and version operations
//! - [`types`]: Common types like `PackageVersions`

pub mod error;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod stable;
pub mod types;
