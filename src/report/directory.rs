//! Memoizing boxer/official name directory
//!
//! The report only needs each display name once per render, but the same
//! boxer can appear on several lines. The directory memoizes lookups for
//! the lifetime of one render; its owner decides when it is dropped.

use ahash::AHashMap;
use parking_lot::RwLock;

/// Fallback shown when no display name can be resolved
pub const UNKNOWN_NAME: &str = "N/D";

type NameSource = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Explicit memoizing id -> display-name lookup.
///
/// Names can be preloaded in bulk (host-supplied map) or fetched lazily
/// through an optional source closure; either way each id is resolved at
/// most once.
#[derive(Default)]
pub struct NameDirectory {
    cache: RwLock<AHashMap<String, String>>,
    source: Option<NameSource>,
}

impl NameDirectory {
    /// Empty directory with no lazy source
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory that consults `source` on a cache miss
    pub fn with_source(source: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            cache: RwLock::new(AHashMap::new()),
            source: Some(Box::new(source)),
        }
    }

    /// Bulk-load id/name pairs
    pub fn preload(&self, names: impl IntoIterator<Item = (String, String)>) {
        let mut cache = self.cache.write();
        for (id, name) in names {
            cache.insert(id, name);
        }
    }

    /// Resolve an id to a display name, memoizing source fetches.
    ///
    /// Unknown ids resolve to [`UNKNOWN_NAME`]; the miss itself is not
    /// cached so a later preload can still fill it in.
    pub fn resolve(&self, id: &str) -> String {
        {
            let cache = self.cache.read();
            if let Some(name) = cache.get(id) {
                return name.clone();
            }
        }

        if let Some(source) = &self.source {
            if let Some(name) = source(id) {
                let mut cache = self.cache.write();
                cache.insert(id.to_string(), name.clone());
                return name;
            }
        }

        UNKNOWN_NAME.to_string()
    }

    /// Number of memoized names
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}
