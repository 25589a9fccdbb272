use std::{
    fmt::Debug,
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash},
};

use crate::sets::ContainerError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 16;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// SipHash with fixed keys: the same keys always land in the same buckets,
/// which keeps snapshot order (and therefore seeded games) reproducible.
pub type DeterministicState = BuildHasherDefault<DefaultHasher>;

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    /// full hash of `key`, kept so that rehashing never calls the hasher again
    hash: u64,
    key: K,
    value: V,
    next: Link<K, V>,
}

#[inline]
fn bucket_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    (0..capacity).map(|_| None).collect()
}

/// A hash map built on separate chaining.
///
/// Each bucket is a singly linked chain of nodes. The bucket of a key is its hash
/// modulo the current capacity.
///
/// # Resize policy
/// - After an insertion of a new key, if `len >= load_factor * capacity`, the capacity
///   doubles and every node is rehashed into a fresh bucket array.
/// - After a removal, if `len < capacity * load_factor / 4`, the capacity halves.
/// - The capacity never drops below 1.
///
/// Keys are compared by value (`Eq`), never by identity.
pub struct ChainedMap<K, V, S = DeterministicState> {
    buckets: Vec<Link<K, V>>,
    len: usize,
    load_factor: f64,
    hasher: S,
}

impl<K: Hash + Eq, V> ChainedMap<K, V> {
    /// Creates an empty map with capacity 16 and load factor 0.75.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty map with the given initial capacity and the default load factor.
    /// A capacity of 0 is rounded up to 1.
    pub fn with_capacity(capacity: usize) -> Self {
        ChainedMap {
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
            hasher: DeterministicState::default(),
        }
    }

    /// Creates an empty map with the given initial capacity and load factor.
    ///
    /// # Errors
    /// [`ContainerError::InvalidLoadFactor`] if `load_factor` is not finite and strictly positive.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<Self, ContainerError> {
        Self::with_hasher(capacity, load_factor, DeterministicState::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> ChainedMap<K, V, S> {
    /// Creates an empty map hashing its keys with `hasher`.
    ///
    /// # Errors
    /// [`ContainerError::InvalidLoadFactor`] if `load_factor` is not finite and strictly positive.
    pub fn with_hasher(
        capacity: usize,
        load_factor: f64,
        hasher: S,
    ) -> Result<Self, ContainerError> {
        if !(load_factor.is_finite() && load_factor > 0.0) {
            return Err(ContainerError::InvalidLoadFactor(load_factor));
        }
        Ok(ChainedMap {
            buckets: empty_buckets(capacity.max(1)),
            len: 0,
            load_factor,
            hasher,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets currently allocated.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    fn hash_key(&self, key: &K) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Inserts `value` under `key`, returning the value previously stored there.
    ///
    /// # Returns
    /// `Some(previous)` if the key was present (the value is overwritten), `None` otherwise
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_key(&key);
        let capacity = self.buckets.len();
        let index = bucket_index(hash, capacity);

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            // a node only counts as a match if it still belongs to this bucket
            // under the current capacity
            if bucket_index(node.hash, capacity) == index && node.hash == hash && node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
            cursor = node.next.as_deref_mut();
        }

        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(Node {
            hash,
            key,
            value,
            next: head,
        }));
        self.len += 1;

        if self.len as f64 >= self.load_factor * capacity as f64 {
            self.resize(capacity * 2);
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_key(key);
        let mut cursor = self.buckets[bucket_index(hash, self.buckets.len())].as_deref();
        while let Some(node) = cursor {
            if node.hash == hash && node.key == *key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_key(key);
        let index = bucket_index(hash, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(node) = cursor {
            if node.hash == hash && node.key == *key {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// A successful removal may halve the capacity (see the type-level docs).
    /// A miss leaves the map untouched.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_key(key);
        let index = bucket_index(hash, self.buckets.len());

        // unlink the whole chain and push back every node except the match.
        // chains are unordered so the reversal is harmless.
        let mut rest = self.buckets[index].take();
        let mut removed = None;
        while let Some(mut node) = rest {
            rest = node.next.take();
            if removed.is_none() && node.hash == hash && node.key == *key {
                removed = Some(node.value);
            } else {
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }

        if removed.is_some() {
            self.len -= 1;
            let capacity = self.buckets.len();
            if capacity > 1 && (self.len as f64) < capacity as f64 * self.load_factor / 4.0 {
                self.resize(capacity / 2);
            }
        }
        removed
    }

    fn resize(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for mut chain in old_buckets {
            while let Some(mut node) = chain {
                chain = node.next.take();
                let index = bucket_index(node.hash, new_capacity);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }
    }
}

impl<K, V, S> ChainedMap<K, V, S> {
    /// Borrowing iterator over all entries, in no particular order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
            remaining: self.len,
        }
    }

    /// Snapshot of all keys. Later changes to the map are not reflected.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Snapshot of all values. Later changes to the map are not reflected.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Snapshot of all entries. Later changes to the map are not reflected.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Length of the longest chain. Useful to judge the quality of a hasher.
    pub fn max_depth(&self) -> usize {
        self.buckets
            .iter()
            .map(|bucket| {
                let mut depth = 0;
                let mut cursor = bucket.as_deref();
                while let Some(node) = cursor {
                    depth += 1;
                    cursor = node.next.as_deref();
                }
                depth
            })
            .max()
            .unwrap_or(0)
    }

    /// Drops every entry. The capacity and load factor are kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            // iterative unlinking; dropping a long chain recursively could blow the stack
            let mut chain = bucket.take();
            while let Some(mut node) = chain {
                chain = node.next.take();
            }
        }
        self.len = 0;
    }
}

impl<K, V, S> Drop for ChainedMap<K, V, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Hash + Eq, V> Default for ChainedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug, S> Debug for ChainedMap<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for ChainedMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

/// Iterator returned by [`ChainedMap::iter`].
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Link<K, V>>,
    node: Option<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some((&node.key, &node.value));
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a ChainedMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
