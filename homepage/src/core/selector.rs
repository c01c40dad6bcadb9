//! Deterministic rotation selector
//!
//! Picks a subset of items that stays identical for the whole of a time window
//! and changes when the window rolls over. The window index seeds a linear
//! congruential generator driving a Fisher–Yates shuffle, so a given bucket
//! always produces the same permutation.
//!
//! The recurrence is `seed = (seed * 1664525 + 1013904223) mod 2^32`, computed
//! in wrapping `u32` arithmetic. That equals the exact modular result for any
//! initial seed, which keeps selections stable across restarts and deployments.

use std::time::Duration;

use chrono::Utc;
use shared::HomeConfig;

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Linear congruential generator over `u32`
#[derive(Debug, Clone, Copy)]
struct Lcg(u32);

impl Lcg {
    fn from_bucket(bucket: u64) -> Self {
        // Truncation is the first `mod 2^32` of the recurrence
        Self(bucket as u32)
    }

    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
        self.0
    }
}

/// Milliseconds since the Unix epoch, clamped at zero
pub fn now_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Index of the rotation window containing `now_ms`.
///
/// A zero-length window has no meaningful index; it maps to bucket 0.
pub fn window_bucket(now_ms: u64, window_ms: u64) -> u64 {
    now_ms.checked_div(window_ms).unwrap_or(0)
}

/// Permute a copy of `items` with the bucket-seeded shuffle
pub fn seeded_shuffle<T: Clone>(items: &[T], bucket: u64) -> Vec<T> {
    let mut shuffled = items.to_vec();
    let mut rng = Lcg::from_bucket(bucket);

    for i in (1..shuffled.len()).rev() {
        let j = rng.next() as usize % (i + 1);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Pick `count` items for the window containing `now_ms`
pub fn select_at<T: Clone>(items: &[T], count: usize, window_ms: u64, now_ms: u64) -> Vec<T> {
    if items.len() <= count {
        return items.to_vec();
    }

    let mut picked = seeded_shuffle(items, window_bucket(now_ms, window_ms));
    picked.truncate(count);
    picked
}

/// Pick `count` items for the current window
pub fn select<T: Clone>(items: &[T], count: usize, window_ms: u64) -> Vec<T> {
    select_at(items, count, window_ms, now_ms())
}

/// Selector bound to the configured display count and window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationSelector {
    count: usize,
    window_ms: u64,
}

impl RotationSelector {
    pub fn new(count: usize, window: Duration) -> Self {
        Self {
            count,
            window_ms: u64::try_from(window.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn from_config(config: &HomeConfig) -> Self {
        Self {
            count: config.home_count,
            window_ms: config.rotate_window_ms,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }

    pub fn bucket_at(&self, now_ms: u64) -> u64 {
        window_bucket(now_ms, self.window_ms)
    }

    pub fn select_at<T: Clone>(&self, items: &[T], now_ms: u64) -> Vec<T> {
        select_at(items, self.count, self.window_ms, now_ms)
    }

    pub fn select<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.select_at(items, now_ms())
    }
}
