use crate::error::IndexError;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// Sizing parameters for an `AnagramIndex`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct IndexConfig {
    /// Hard ceiling on the bucket count. Never changes after construction.
    pub max_buckets: usize,

    /// Bucket count the index starts with, clamped to `max_buckets`
    pub initial_buckets: usize,

    /// The bucket array grows once `entries / buckets` strictly exceeds this
    pub max_load_factor: f32,
}

impl IndexConfig {
    pub const DEFAULT_MAX_BUCKETS: usize = 50_000;
    pub const DEFAULT_INITIAL_BUCKETS: usize = 10;
    pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.7;

    pub fn new(max_buckets: usize) -> Self {
        IndexConfig {
            max_buckets,
            ..Default::default()
        }
    }

    pub fn with_initial_buckets(mut self, initial_buckets: usize) -> Self {
        self.initial_buckets = initial_buckets;
        self
    }

    pub fn with_max_load_factor(mut self, max_load_factor: f32) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Number of buckets a fresh index is allocated with
    pub fn starting_buckets(&self) -> usize {
        self.initial_buckets.min(self.max_buckets)
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.max_buckets == 0 {
            return Err(IndexError::invalid_configuration(
                "max_buckets must be positive",
            ));
        }
        if self.initial_buckets == 0 {
            return Err(IndexError::invalid_configuration(
                "initial_buckets must be positive",
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(IndexError::invalid_configuration(format!(
                "max_load_factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            max_buckets: Self::DEFAULT_MAX_BUCKETS,
            initial_buckets: Self::DEFAULT_INITIAL_BUCKETS,
            max_load_factor: Self::DEFAULT_MAX_LOAD_FACTOR,
        }
    }
}
