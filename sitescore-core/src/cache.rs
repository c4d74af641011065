//! Read-only caching of loaded layers.
//!
//! Loading layers from disk is far slower than scoring a site, so callers
//! that score many sites keep one [`SiteLayers`] snapshot in a
//! [`LayerCache`]. The snapshot is only replaced when [`LayerCache::refresh`]
//! is called; readers already holding an [`Arc`] keep the layers they were
//! given.

use std::sync::{Arc, PoisonError, RwLock};

use crate::SiteLayers;

/// Produce a fresh set of layers.
///
/// # Examples
/// ```
/// use std::convert::Infallible;
/// use sitescore_core::{LayerCache, LayerSource, RoadLayer, SiteLayers, ZoneLayer};
///
/// struct EmptySource;
///
/// impl LayerSource for EmptySource {
///     type Error = Infallible;
///
///     fn load(&self) -> Result<SiteLayers, Self::Error> {
///         Ok(SiteLayers::new(
///             Vec::new(),
///             ZoneLayer::default(),
///             ZoneLayer::default(),
///             RoadLayer::default(),
///         ))
///     }
/// }
///
/// let cache = LayerCache::new(EmptySource);
/// let first = cache.layers()?;
/// let second = cache.layers()?;
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// # Ok::<(), Infallible>(())
/// ```
pub trait LayerSource: Send + Sync {
    /// Error raised when loading fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every layer.
    ///
    /// # Errors
    /// Implementations return their own error when a layer cannot be read.
    fn load(&self) -> Result<SiteLayers, Self::Error>;
}

/// Lazily loaded, manually refreshed snapshot of a [`LayerSource`].
#[derive(Debug)]
pub struct LayerCache<S> {
    source: S,
    snapshot: RwLock<Option<Arc<SiteLayers>>>,
}

impl<S: LayerSource> LayerCache<S> {
    /// Wrap `source` without loading anything yet.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            snapshot: RwLock::new(None),
        }
    }

    /// Current snapshot, loading it on first use.
    ///
    /// # Errors
    /// Propagates the source's error when the first load fails; a later call
    /// retries.
    pub fn layers(&self) -> Result<Arc<SiteLayers>, S::Error> {
        if let Some(layers) = self.cached() {
            return Ok(layers);
        }
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(layers) = guard.as_ref() {
            return Ok(Arc::clone(layers));
        }
        let layers = Arc::new(self.source.load()?);
        log::debug!("loaded site layers into cache");
        *guard = Some(Arc::clone(&layers));
        Ok(layers)
    }

    /// Reload from the source and replace the snapshot.
    ///
    /// On failure the previous snapshot, if any, stays in place.
    ///
    /// # Errors
    /// Propagates the source's error.
    pub fn refresh(&self) -> Result<Arc<SiteLayers>, S::Error> {
        let layers = Arc::new(self.source.load()?);
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&layers));
        log::debug!("refreshed cached site layers");
        Ok(layers)
    }

    /// Whether a snapshot is currently held.
    pub fn is_loaded(&self) -> bool {
        self.cached().is_some()
    }

    /// Underlying source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn cached(&self) -> Option<Arc<SiteLayers>> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemorySource;
    use rstest::{fixture, rstest};

    #[fixture]
    fn cache() -> LayerCache<MemorySource> {
        LayerCache::new(MemorySource::default())
    }

    #[rstest]
    fn loads_lazily_once(cache: LayerCache<MemorySource>) {
        assert!(!cache.is_loaded());
        assert_eq!(cache.source().loads(), 0);

        let Ok(first) = cache.layers();
        let Ok(second) = cache.layers();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.source().loads(), 1);
    }

    #[rstest]
    fn refresh_replaces_snapshot_and_keeps_old_readers(cache: LayerCache<MemorySource>) {
        let Ok(before) = cache.layers();
        let Ok(refreshed) = cache.refresh();
        let Ok(after) = cache.layers();

        assert!(!Arc::ptr_eq(&before, &refreshed));
        assert!(Arc::ptr_eq(&refreshed, &after));
        assert_eq!(before.businesses().len(), after.businesses().len());
        assert_eq!(cache.source().loads(), 2);
    }

    #[rstest]
    fn cache_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LayerCache<MemorySource>>();
        assert_send_sync::<SiteLayers>();
    }
}
