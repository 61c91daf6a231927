//! Sliding-window tick-rate estimator.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Width of one aggregation bucket.
pub const BUCKET_PERIOD: Duration = Duration::from_millis(250);

/// Number of buckets in the trailing window (~1 s of history).
pub const WINDOW_BUCKETS: usize = 4;

/// Counts frames into fixed 250 ms buckets and reports the average rate
/// over the trailing window whenever a bucket closes.
#[derive(Debug)]
pub struct FpsSampler {
    buckets: VecDeque<u32>,
    last_roll: Instant,
    rate: Option<f32>,
}

impl FpsSampler {
    pub fn new(now: Instant) -> Self {
        let mut buckets = VecDeque::with_capacity(WINDOW_BUCKETS);
        buckets.push_back(0);
        Self {
            buckets,
            last_roll: now,
            rate: None,
        }
    }

    /// Counts one rendered frame into the current bucket.
    pub fn tick(&mut self) {
        if let Some(bucket) = self.buckets.back_mut() {
            *bucket += 1;
        }
    }

    /// Rolls the window once per elapsed bucket period, catching up one
    /// period at a time after a stall.
    pub fn advance(&mut self, now: Instant) {
        while now.duration_since(self.last_roll) >= BUCKET_PERIOD {
            self.roll();
            self.last_roll += BUCKET_PERIOD;
        }
    }

    fn roll(&mut self) {
        let total: u32 = self.buckets.iter().sum();
        let span = self.buckets.len() as f32 * BUCKET_PERIOD.as_secs_f32();
        self.rate = Some(total as f32 / span);
        if self.buckets.len() == WINDOW_BUCKETS {
            self.buckets.pop_front();
        }
        self.buckets.push_back(0);
    }

    /// Most recently reported rate; `None` until the first bucket closes.
    pub fn rate(&self) -> Option<f32> {
        self.rate
    }
}
