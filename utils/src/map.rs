use std::hash::Hash;

use fnv::FnvHashMap;

/// Thin wrapper around an FNV-hashed map. Keys are small integers
/// (ring dimensions), where FNV beats SipHash.
pub struct Map<K, V>(pub FnvHashMap<K, V>);

impl<K: Eq + Hash, V> Map<K, V> {
    pub fn new() -> Self {
        Self(FnvHashMap::<K, V>::default())
    }

    pub fn insert(&mut self, k: K, data: V) -> Option<V> {
        self.0.insert(k, data)
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.0.get(k)
    }

    pub fn get_mut(&mut self, k: &K) -> Option<&mut V> {
        self.0.get_mut(k)
    }

    pub fn or_insert_with(&mut self, k: K, f: impl FnOnce() -> V) -> &mut V {
        self.0.entry(k).or_insert_with(f)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
