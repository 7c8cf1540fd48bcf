// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use crate::error::Result;
use crate::resolver::{ResourceReader, ResourceResolver};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex, MutexGuard};

/// Memory-based resource resolver that stores content in memory.
///
/// Clones share the same storage, so resources added after a clone was
/// handed to a server are visible to it.
#[derive(Clone, Default)]
pub struct MemoryResourceResolver {
    resources: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryResourceResolver {
    /// Create a new memory resource resolver
    pub fn new() -> Self {
        Self::default()
    }

    fn resources(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.resources.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn key(path: &str) -> &str {
        path.trim_start_matches('/')
    }

    /// Add a resource to the memory resolver
    pub fn add_resource(&self, path: &str, content: &str) {
        self.resources()
            .insert(Self::key(path).to_string(), content.to_string());
    }

    /// Remove a resource from the memory resolver
    pub fn remove_resource(&self, path: &str) {
        self.resources().remove(Self::key(path));
    }

    /// Returns true if a resource is stored under `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.resources().contains_key(Self::key(path))
    }

    /// Clear all resources
    pub fn clear(&self) {
        self.resources().clear();
    }
}

impl ResourceResolver for MemoryResourceResolver {
    fn open(&self, path: &str) -> Result<Option<ResourceReader>> {
        let content = self.resources().get(Self::key(path)).cloned();
        Ok(content.map(|c| Box::new(Cursor::new(c.into_bytes())) as ResourceReader))
    }

    fn clone_box(&self) -> Box<dyn ResourceResolver> {
        Box::new(self.clone())
    }
}
