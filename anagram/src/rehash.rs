use crate::config::IndexConfig;

/// Decides when the bucket array grows and to what size.
/// Growth doubles the bucket count, clamped to `max_buckets`, and never shrinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RehashPolicy {
    max_buckets: usize,
    max_load_factor: f32,
}

impl RehashPolicy {
    pub fn new(max_buckets: usize, max_load_factor: f32) -> Self {
        RehashPolicy {
            max_buckets,
            max_load_factor,
        }
    }

    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    pub fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// `entries` must already include the item about to be placed.
    /// Returns the new bucket count if the array should grow, `None` otherwise.
    pub fn grow_to(&self, buckets: usize, entries: usize) -> Option<usize> {
        // Compared in f32: 7 entries over 10 buckets is exactly 0.7 and must not trigger
        if buckets < self.max_buckets && entries as f32 / buckets as f32 > self.max_load_factor {
            Some(buckets.saturating_mul(2).min(self.max_buckets))
        } else {
            None
        }
    }
}

impl From<&IndexConfig> for RehashPolicy {
    fn from(config: &IndexConfig) -> Self {
        RehashPolicy::new(config.max_buckets, config.max_load_factor)
    }
}
