//! Registry implementations for fetching package versions

pub mod packagist;

pub use packagist::PackagistRegistry;
