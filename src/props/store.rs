// CLASSIFICATION: COMMUNITY
// Filename: store.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-18

//! Read-only property lookups used by template expansion.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error::BootResult;
use crate::util::fs::read_file;

/// Read-only property service.
pub trait PropertyStore {
    /// Value of `name`, or `default` when unset.
    fn get(&self, name: &str, default: &str) -> String;
}

impl<S: PropertyStore + ?Sized> PropertyStore for &S {
    fn get(&self, name: &str, default: &str) -> String {
        (**self).get(name, default)
    }
}

/// In-memory property table.
#[derive(Clone, Debug, Default)]
pub struct MapPropertyStore {
    props: HashMap<String, String>,
}

impl MapPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapPropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (k, v) in iter {
            store.set(k, v);
        }
        store
    }
}

impl PropertyStore for MapPropertyStore {
    fn get(&self, name: &str, default: &str) -> String {
        self.props
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

/// Properties loaded from a `build.prop` style file.
///
/// One `key=value` per line; blank lines and `#` comments are skipped. Only
/// the first `=` separates, so values may contain `=`. Later lines win.
#[derive(Clone, Debug, Default)]
pub struct FilePropertyStore {
    inner: MapPropertyStore,
}

impl FilePropertyStore {
    pub fn load(path: &Path) -> BootResult<Self> {
        let data = read_file(path)?;
        Ok(Self::parse(&data))
    }

    pub fn parse(data: &str) -> Self {
        let mut inner = MapPropertyStore::new();
        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((k, v)) if !k.trim().is_empty() => inner.set(k.trim(), v.trim()),
                _ => debug!("skipping malformed property line {}: {line:?}", lineno + 1),
            }
        }
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl PropertyStore for FilePropertyStore {
    fn get(&self, name: &str, default: &str) -> String {
        self.inner.get(name, default)
    }
}
