// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Content resource resolution.
//!
//! This module provides the [`ResourceResolver`] trait and the filesystem
//! implementation used to open files from an application's deployed content.
//!
//! # Resolver Implementations
//!
//! - [`FileSystemResolver`]: Opens resources below a root directory
//! - [`MemoryResourceResolver`](crate::MemoryResourceResolver): Serves
//!   resources from in-memory storage (testing, embedded content)
//!
//! # Resource Paths
//!
//! Resource paths are content-relative and use `/` separators. A leading `/`
//! denotes the content root, so `/src/Page.java` and `src/Page.java` name the
//! same resource.
//!
//! # Custom Resolvers
//!
//! Implement [`ResourceResolver`] for other content stores (archives,
//! databases, etc.).

use std::io::{BufRead, Read};
use std::path::Path;

use crate::error::{PageKitError, Result};

#[cfg(feature = "filesystem")]
use std::fs;
#[cfg(feature = "filesystem")]
use std::path::{Component, PathBuf};

/// Converts a Path to a normalized string with forward slashes.
#[inline]
pub fn path_to_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// An open resource. Dropping it releases the underlying handle.
pub type ResourceReader = Box<dyn BufRead + Send>;

/// Trait for opening content resources.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single resolver
/// can be shared by concurrent requests.
pub trait ResourceResolver: Send + Sync + 'static {
    /// Opens the resource at `path`.
    ///
    /// Returns `Ok(None)` when no such resource exists. Errors are reserved
    /// for resources that exist but cannot be opened, or for paths that are
    /// not allowed.
    fn open(&self, path: &str) -> Result<Option<ResourceReader>>;

    /// Creates a boxed clone (for use in shared server state).
    fn clone_box(&self) -> Box<dyn ResourceResolver>;

    /// Reads the whole resource at `path` into a string.
    fn read_to_string(&self, path: &str) -> Result<String> {
        let mut reader = self
            .open(path)?
            .ok_or_else(|| PageKitError::NotFound(path.to_string()))?;
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| PageKitError::io(path, e))?;
        Ok(content)
    }
}

impl Clone for Box<dyn ResourceResolver> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Filesystem-based resource resolver.
///
/// Opens resources relative to a root directory. Paths that leave the root,
/// either lexically (`../`) or through symlinks, are rejected.
///
/// # Examples
///
/// ```rust,ignore
/// use pagekit::{FileSystemResolver, ResourceResolver};
///
/// let resolver = FileSystemResolver::new("./web");
/// let reader = resolver.open("/index.htm")?;
/// ```
#[cfg(feature = "filesystem")]
#[derive(Debug, Clone)]
pub struct FileSystemResolver {
    /// The content root directory.
    pub root_dir: String,
}

#[cfg(feature = "filesystem")]
impl FileSystemResolver {
    /// Creates a new filesystem resolver with the given root directory.
    pub fn new<P: AsRef<Path>>(root_dir: P) -> Self {
        Self {
            root_dir: path_to_string(root_dir.as_ref()),
        }
    }

    fn resolve_path(&self, path: &str) -> Result<PathBuf> {
        let relative = path.trim_start_matches('/');
        let mut resolved = PathBuf::from(&self.root_dir);
        for comp in Path::new(relative).components() {
            match comp {
                Component::Normal(seg) => resolved.push(seg),
                Component::CurDir => {}
                _ => {
                    return Err(PageKitError::Resolution(format!(
                        "Path '{}' escapes the content root",
                        path
                    )))
                }
            }
        }
        Ok(resolved)
    }

    // Symlinks may still point outside of the root
    fn check_within_root(&self, path: &str, resolved: &Path) -> Result<()> {
        let canonical_path = fs::canonicalize(resolved).map_err(|e| PageKitError::io(path, e))?;
        let canonical_root = fs::canonicalize(&self.root_dir).map_err(|e| {
            PageKitError::Resolution(format!(
                "Failed to canonicalize root '{}': {}",
                self.root_dir, e
            ))
        })?;

        if !canonical_path.starts_with(&canonical_root) {
            return Err(PageKitError::Resolution(format!(
                "Path '{}' escapes the content root",
                path
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "filesystem")]
impl ResourceResolver for FileSystemResolver {
    fn open(&self, path: &str) -> Result<Option<ResourceReader>> {
        let resolved = self.resolve_path(path)?;
        if !resolved.is_file() {
            tracing::debug!("No resource at {}", resolved.display());
            return Ok(None);
        }
        self.check_within_root(path, &resolved)?;

        let file = fs::File::open(&resolved).map_err(|e| PageKitError::io(path, e))?;
        tracing::debug!("Opened resource {} from {}", path, resolved.display());
        Ok(Some(Box::new(std::io::BufReader::new(file))))
    }

    fn clone_box(&self) -> Box<dyn ResourceResolver> {
        Box::new(self.clone())
    }
}
