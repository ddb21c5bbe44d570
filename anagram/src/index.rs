use crate::bucket::BucketArray;
use crate::canonical::{filter_letters, CanonicalKey};
use crate::config::IndexConfig;
use crate::error::IndexError;
use crate::rehash::RehashPolicy;
use log::{debug, trace};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// A hash table that groups words by anagram equivalence.
///
/// Words are stored lowercased with non-letters removed, and any spelling of the
/// same letters retrieves all of them, in the order they were inserted.
/// The bucket array grows as the table fills, up to a fixed `max_buckets`;
/// past that, chains just get longer.
pub struct AnagramIndex {
    buckets: BucketArray,
    policy: RehashPolicy,

    /// Every `insert` call, including words that had no letters to store
    insert_count: usize,

    /// Words actually stored
    len: usize,
}

/// Point-in-time summary of an index's shape
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct IndexStats {
    pub buckets: usize,
    pub max_buckets: usize,
    pub insert_count: usize,
    pub stored: usize,
    pub allocated_chains: usize,
    pub longest_chain: usize,
    pub load_factor: f32,
    pub max_load_factor: f32,
}

impl AnagramIndex {
    pub fn new(max_buckets: usize) -> Result<Self, IndexError> {
        Self::with_config(IndexConfig::new(max_buckets))
    }

    pub fn with_config(config: IndexConfig) -> Result<Self, IndexError> {
        config.validate()?;
        Ok(AnagramIndex {
            buckets: BucketArray::new(config.starting_buckets()),
            policy: RehashPolicy::from(&config),
            insert_count: 0,
            len: 0,
        })
    }

    /// Add a word. Words without any ASCII letters are counted towards the
    /// load factor but not stored.
    pub fn insert(&mut self, word: &str) {
        self.insert_count += 1;
        self.maybe_rehash();

        let filtered = filter_letters(word);
        if filtered.is_empty() {
            trace!("dropping {:?}: no letters", word);
            return;
        }
        let key = CanonicalKey::new(&filtered);
        self.buckets.push(&key, filtered);
        self.len += 1;
    }

    /// Call `visit` on every stored word made of the same letters as `query`.
    /// Does nothing if `visit` is `None` or `query` has no letters.
    pub fn lookup<F>(&self, query: &str, visit: Option<F>)
    where
        F: FnMut(&str),
    {
        if let Some(visit) = visit {
            self.anagrams(query).for_each(visit);
        }
    }

    pub fn lookup_each<F>(&self, query: &str, visit: F)
    where
        F: FnMut(&str),
    {
        self.lookup(query, Some(visit))
    }

    /// Iterate over the stored anagrams of `query`, in insertion order
    pub fn anagrams(&self, query: &str) -> Anagrams<'_> {
        let key = CanonicalKey::new(query);
        let chain: &[String] = if key.is_empty() {
            &[]
        } else {
            self.buckets.chain_for(&key)
        };
        Anagrams {
            key,
            chain: chain.iter(),
        }
    }

    fn maybe_rehash(&mut self) {
        let old_count = self.buckets.len();
        if let Some(new_count) = self.policy.grow_to(old_count, self.insert_count) {
            debug!(
                "rehashing {} words: {} -> {} buckets ({} inserts)",
                self.len, old_count, new_count, self.insert_count
            );
            let buckets = std::mem::replace(&mut self.buckets, BucketArray::new(1));
            self.buckets = buckets.redistribute(new_count);
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn max_buckets(&self) -> usize {
        self.policy.max_buckets()
    }

    pub fn insert_count(&self) -> usize {
        self.insert_count
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `insert_count / bucket_count`, the figure the rehash policy checks
    pub fn load_factor(&self) -> f32 {
        self.insert_count as f32 / self.buckets.len() as f32
    }

    /// All stored words, grouped by bucket
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.entries()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            buckets: self.bucket_count(),
            max_buckets: self.max_buckets(),
            insert_count: self.insert_count,
            stored: self.len,
            allocated_chains: self.buckets.allocated_chains(),
            longest_chain: self.buckets.longest_chain(),
            load_factor: self.load_factor(),
            max_load_factor: self.policy.max_load_factor(),
        }
    }
}

impl<S: AsRef<str>> Extend<S> for AnagramIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl fmt::Debug for AnagramIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnagramIndex")
            .field("buckets", &self.buckets)
            .field("max_buckets", &self.max_buckets())
            .field("insert_count", &self.insert_count)
            .field("len", &self.len)
            .finish()
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words ({} inserts) in {}/{} buckets, {} chains allocated, longest chain {}, load factor {:.2} (max {:.2})",
            self.stored,
            self.insert_count,
            self.buckets,
            self.max_buckets,
            self.allocated_chains,
            self.longest_chain,
            self.load_factor,
            self.max_load_factor
        )
    }
}

/// Stored words sharing a query's letters. See `AnagramIndex::anagrams`.
pub struct Anagrams<'a> {
    key: CanonicalKey,
    chain: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Anagrams<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let key = &self.key;
        self.chain
            .by_ref()
            .find(|word| CanonicalKey::new(word) == *key)
            .map(String::as_str)
    }
}
