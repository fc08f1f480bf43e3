//! Manifest parser layer
//! - types.rs: Dependency
//! - composer_json.rs: composer.json loader

pub mod composer_json;
pub mod types;

pub use composer_json::{ComposerManifest, ManifestError, load_manifest};
pub use types::Dependency;
