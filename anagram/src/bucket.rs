use crate::canonical::CanonicalKey;
use ahash::AHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Words routed to the same bucket, in insertion order
pub type Chain = Vec<String>;

/// Fixed-size array of lazily allocated chains.
/// A word lives in chain `hash(canonical key) % len()`.
#[derive(Clone, PartialEq, Eq)]
pub struct BucketArray {
    chains: Box<[Option<Chain>]>,
}

/// Deterministic for a given key; `AHasher::default()` uses fixed keys,
/// so the same key routes identically across inserts, lookups and rehashes.
fn hash_key(key: &CanonicalKey) -> u64 {
    let mut hasher = AHasher::default();
    key.as_str().hash(&mut hasher);
    hasher.finish()
}

impl BucketArray {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0);
        BucketArray {
            chains: vec![None; bucket_count].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn bucket_for(&self, key: &CanonicalKey) -> usize {
        (hash_key(key) % self.chains.len() as u64) as usize
    }

    /// Append `word` to the chain selected by `key`, allocating it on first use.
    /// `key` must be the canonical form of `word`.
    pub fn push(&mut self, key: &CanonicalKey, word: String) {
        debug_assert_eq!(&CanonicalKey::new(&word), key);
        let bucket = self.bucket_for(key);
        self.chains[bucket].get_or_insert_with(Vec::new).push(word);
    }

    pub fn chain(&self, bucket: usize) -> Option<&[String]> {
        self.chains.get(bucket)?.as_deref()
    }

    /// The only chain that can hold anagrams of `key`; empty if it was never allocated
    pub fn chain_for(&self, key: &CanonicalKey) -> &[String] {
        self.chain(self.bucket_for(key)).unwrap_or(&[])
    }

    /// Number of chains that have been allocated
    pub fn allocated_chains(&self) -> usize {
        self.chains.iter().filter(|c| c.is_some()).count()
    }

    pub fn longest_chain(&self) -> usize {
        self.chains
            .iter()
            .map(|c| c.as_ref().map_or(0, Vec::len))
            .max()
            .unwrap_or(0)
    }

    /// All stored words, bucket by bucket, each chain in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.chains
            .iter()
            .flatten()
            .flat_map(|chain| chain.iter().map(String::as_str))
    }

    /// Move every word into a fresh array of `bucket_count` buckets.
    /// Buckets are drained in index order, so words that share a destination
    /// keep their relative insertion order.
    pub fn redistribute(self, bucket_count: usize) -> BucketArray {
        let mut resized = BucketArray::new(bucket_count);
        for chain in self.chains.into_vec().into_iter().flatten() {
            for word in chain {
                let key = CanonicalKey::new(&word);
                resized.push(&key, word);
            }
        }
        resized
    }
}

impl fmt::Debug for BucketArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketArray")
            .field("buckets", &self.len())
            .field("allocated", &self.allocated_chains())
            .field("longest_chain", &self.longest_chain())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn push_word(buckets: &mut BucketArray, word: &str) {
        buckets.push(&CanonicalKey::new(word), word.to_string());
    }

    #[test]
    fn chains_are_lazy() {
        let mut buckets = BucketArray::new(8);
        assert_eq!(buckets.allocated_chains(), 0);
        assert!((0..8).all(|i| buckets.chain(i).is_none()));
        assert_eq!(buckets.chain(8), None);

        push_word(&mut buckets, "stop");
        assert_eq!(buckets.allocated_chains(), 1);
        let bucket = buckets.bucket_for(&CanonicalKey::new("stop"));
        assert_eq!(buckets.chain(bucket), Some(&["stop".to_string()][..]));
    }

    #[test]
    fn anagrams_share_a_chain() {
        let mut buckets = BucketArray::new(13);
        for word in &["stop", "tops", "pots"] {
            push_word(&mut buckets, word);
        }
        assert_eq!(
            buckets.chain_for(&CanonicalKey::new("spot")),
            &["stop", "tops", "pots"]
        );
        assert_eq!(buckets.longest_chain(), 3);
    }

    #[test]
    fn single_bucket_holds_everything() {
        let mut buckets = BucketArray::new(1);
        for word in &["cat", "dog", "act"] {
            push_word(&mut buckets, word);
        }
        assert_eq!(buckets.entries().collect::<Vec<_>>(), vec!["cat", "dog", "act"]);
    }

    #[test]
    fn redistribute_keeps_every_word_reachable() {
        let words: Vec<String> = (0..200)
            .map(|i: usize| {
                (0..5)
                    .map(|j| char::from(b'a' + ((i * 7 + j * 3) % 26) as u8))
                    .collect()
            })
            .collect();

        let mut buckets = BucketArray::new(3);
        for word in &words {
            push_word(&mut buckets, word);
        }
        let buckets = buckets.redistribute(64);
        assert_eq!(buckets.len(), 64);
        assert_eq!(buckets.entries().count(), words.len());
        for word in &words {
            let key = CanonicalKey::new(word);
            assert!(buckets.chain_for(&key).contains(word));
        }
    }

    #[test]
    fn redistribute_preserves_chain_order() {
        let mut buckets = BucketArray::new(2);
        for word in &["stop", "cat", "tops", "act", "pots"] {
            push_word(&mut buckets, word);
        }
        let buckets = buckets.redistribute(20);
        let stops: Vec<&str> = buckets
            .chain_for(&CanonicalKey::new("opts"))
            .iter()
            .map(String::as_str)
            .filter(|w| CanonicalKey::new(w).as_str() == "opst")
            .collect();
        assert_eq!(stops, vec!["stop", "tops", "pots"]);
    }
}
