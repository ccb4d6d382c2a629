//! Configuration loader with path-ordered merging.
//!
//! Each path is either a file, read as one source, or a directory whose
//! immediate entries ending in the config extension are read in lexical
//! order. All sources are merged left to right.

use super::decode::decode;
use super::merge::merge;
use super::types::{CONFIG_EXTENSION, Configuration};
use crate::error::{ConfigError, ConfigResult};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader that resolves paths into ordered sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Suffix a directory entry must end with to be read.
    extension: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader recognizing `.json` files inside directories.
    pub fn new() -> Self {
        Self::with_extension(CONFIG_EXTENSION)
    }

    /// Loader recognizing a different file suffix inside directories.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// The suffix this loader looks for.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Resolve `paths` into the ordered list of files that would be read.
    ///
    /// Files named directly are always included regardless of extension.
    pub fn resolve<P: AsRef<Path>>(&self, paths: &[P]) -> ConfigResult<Vec<PathBuf>> {
        let mut sources = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let meta =
                fs::metadata(path).map_err(|e| ConfigError::path_not_found(path, e))?;

            if meta.is_file() {
                sources.push(path.to_path_buf());
            } else if meta.is_dir() {
                sources.extend(self.resolve_dir(path)?);
            } else {
                return Err(ConfigError::path_not_found(
                    path,
                    std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "not a regular file or directory",
                    ),
                ));
            }
        }

        Ok(sources)
    }

    /// Matching entries of one directory, sorted by file name.
    fn resolve_dir(&self, dir: &Path) -> ConfigResult<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| ConfigError::path_not_found(dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::path_not_found(dir, e))?;
            let name = entry.file_name();

            if !name.to_string_lossy().ends_with(&self.extension) {
                debug!("Skipping non-config entry: {}", entry.path().display());
                continue;
            }

            // Follows symlinks so a linked config file still counts.
            let is_file = fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file {
                debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            names.push(name);
        }

        // OsString ordering is byte-wise, so uppercase sorts before lowercase.
        names.sort();

        Ok(names.into_iter().map(|name| dir.join(name)).collect())
    }

    /// Read a single source file.
    pub fn load_file(&self, path: &Path) -> ConfigResult<Configuration> {
        let file = fs::File::open(path).map_err(|e| ConfigError::path_not_found(path, e))?;
        decode(BufReader::new(file)).map_err(|e| e.with_path(path))
    }

    /// Load and merge every source reachable from `paths`.
    ///
    /// Stops at the first missing path or malformed source.
    pub fn load<P: AsRef<Path>>(&self, paths: &[P]) -> ConfigResult<Configuration> {
        let sources = self.resolve(paths)?;

        let mut config = Configuration::default();
        for source in &sources {
            debug!("Loading config source: {}", source.display());
            config = merge(config, self.load_file(source)?);
        }

        info!(sources = sources.len(), "Loaded agent configuration");
        Ok(config)
    }
}

/// Load and merge `paths` with the default `.json` loader.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> ConfigResult<Configuration> {
    ConfigLoader::new().load(paths)
}
