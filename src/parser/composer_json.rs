//! composer.json loader

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::parser::types::Dependency;

/// Error type for loading the manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error(
        "The composer.json file '{}' was not found. \nYou can use --composer-file-path /path/to/your/composer.json \nOr use export COMPOSER_FILE_PATH=/path/to/your/composer.json",
        .0.display()
    )]
    NotFound(PathBuf),

    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The parts of composer.json this tool reads.
///
/// Both maps keep the order in which entries appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ComposerManifest {
    pub require: IndexMap<String, String>,
    #[serde(default, rename = "require-dev")]
    pub require_dev: IndexMap<String, String>,
}

impl ComposerManifest {
    /// Parse manifest content. `require` is mandatory.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Declared dependencies in manifest order, `require-dev` appended when asked
    pub fn dependencies(&self, include_dev: bool) -> Vec<Dependency> {
        let dev = include_dev.then_some(&self.require_dev);

        self.require
            .iter()
            .chain(dev.into_iter().flatten())
            .map(|(name, version)| Dependency::new(name, version))
            .collect()
    }
}

/// Read and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> Result<ComposerManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ManifestError::NotFound(path.to_path_buf())
        } else {
            ManifestError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let manifest = ComposerManifest::parse(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Loaded {:?}: {} require, {} require-dev",
        path,
        manifest.require.len(),
        manifest.require_dev.len()
    );

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn dependencies_preserve_manifest_order() {
        let manifest = ComposerManifest::parse(
            r#"{
                "name": "acme/app",
                "require": {
                    "php": "^8.1",
                    "ext-json": "*",
                    "zeta/last": "^1.0",
                    "guzzlehttp/guzzle": "^7.0"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            manifest.dependencies(false),
            vec![
                Dependency::new("php", "^8.1"),
                Dependency::new("ext-json", "*"),
                Dependency::new("zeta/last", "^1.0"),
                Dependency::new("guzzlehttp/guzzle", "^7.0"),
            ]
        );
    }

    #[test]
    fn dependencies_append_require_dev_only_when_requested() {
        let manifest = ComposerManifest::parse(
            r#"{
                "require": {"monolog/monolog": "^3.0"},
                "require-dev": {"phpunit/phpunit": "^10.5"}
            }"#,
        )
        .unwrap();

        assert_eq!(
            manifest.dependencies(false),
            vec![Dependency::new("monolog/monolog", "^3.0")]
        );
        assert_eq!(
            manifest.dependencies(true),
            vec![
                Dependency::new("monolog/monolog", "^3.0"),
                Dependency::new("phpunit/phpunit", "^10.5"),
            ]
        );
    }

    #[test]
    fn parse_accepts_empty_require() {
        let manifest = ComposerManifest::parse(r#"{"require": {}}"#).unwrap();

        assert!(manifest.dependencies(true).is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("{not json")]
    #[case(r#"{"name": "acme/app"}"#)] // missing require
    #[case(r#"{"require": ["a/b"]}"#)] // require is not a mapping
    #[case(r#"{"require": {"a/b": 1}}"#)] // constraint is not a string
    #[case(r#"["require"]"#)]
    fn parse_rejects_malformed_manifest(#[case] content: &str) {
        assert!(ComposerManifest::parse(content).is_err());
    }

    #[test]
    fn load_manifest_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("composer.json");
        fs::write(&path, r#"{"require": {"acme/lib": "^1.0"}}"#).unwrap();

        let manifest = load_manifest(&path).unwrap();

        assert_eq!(
            manifest.dependencies(false),
            vec![Dependency::new("acme/lib", "^1.0")]
        );
    }

    #[test]
    fn load_manifest_returns_not_found_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("composer.json");

        let result = load_manifest(&path);

        assert!(matches!(result, Err(ManifestError::NotFound(p)) if p == path));
    }

    #[test]
    fn load_manifest_returns_parse_error_for_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("composer.json");
        fs::write(&path, r#"{"require": "#).unwrap();

        let result = load_manifest(&path);

        assert!(matches!(result, Err(ManifestError::Parse { .. })));
    }
}
