use std::cell::RefCell;

use thread_local::ThreadLocal;
use torusfft_backend::ComplexKernel;
use torusfft_utils::Map;

use crate::engine::TorusFftEngine;

/// Explicit engine registry: one [`TorusFftEngine`] per (thread, ring
/// dimension), created lazily on first use and living for the thread's
/// lifetime.
///
/// Engines are never shared across threads, so no locking is needed and
/// scratch memory is contended only sequentially within one thread. The
/// cache itself is `Sync` and is meant to be owned by the caller (e.g.
/// behind an `Arc`) rather than hidden in global state.
pub struct EngineCache<K: ComplexKernel + Send> {
    engines: ThreadLocal<RefCell<Map<usize, TorusFftEngine<K>>>>,
}

impl<K: ComplexKernel + Send> EngineCache<K> {
    pub fn new() -> Self {
        Self {
            engines: ThreadLocal::new(),
        }
    }

    /// Runs `f` on this thread's engine for ring dimension `n`,
    /// constructing the engine on first use.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two >= 4 (engine construction).
    pub fn with_engine<R>(&self, n: usize, f: impl FnOnce(&mut TorusFftEngine<K>) -> R) -> R {
        let cell: &RefCell<Map<usize, TorusFftEngine<K>>> =
            self.engines.get_or(|| RefCell::new(Map::new()));
        let mut map = cell.borrow_mut();
        let engine: &mut TorusFftEngine<K> = map.or_insert_with(n, || TorusFftEngine::new(n));
        f(engine)
    }
}

impl<K: ComplexKernel + Send> Default for EngineCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
