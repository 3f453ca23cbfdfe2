//! Dispatch timing utilities.
//!
//! `dragover` is delivered continuously while the pointer moves, and every
//! delivery runs caller predicates and data producers synchronously. These
//! helpers make slow callbacks visible.
//!
//! Enable detailed tracing with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! pagedrop = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn move_to(&mut self, point: Point) {
//!     profile_scope!("surface_move");
//!     // ... dispatch ...
//! }
//! ```

use std::collections::VecDeque;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

use crate::constants::DISPATCH_SAMPLE_COUNT;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Operation Statistics
// ============================================================================

/// Rolling timing statistics for one kind of operation.
#[derive(Debug, Clone)]
pub struct OperationStats {
    samples: VecDeque<f64>,
    count: u64,
    min_ms: f64,
    max_ms: f64,
    sum_ms: f64,
}

impl Default for OperationStats {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(DISPATCH_SAMPLE_COUNT),
            count: 0,
            min_ms: f64::MAX,
            max_ms: 0.0,
            sum_ms: 0.0,
        }
    }
}

impl OperationStats {
    /// Record a new timing sample.
    pub fn record(&mut self, ms: f64) {
        if self.samples.len() >= DISPATCH_SAMPLE_COUNT {
            if let Some(old) = self.samples.pop_front() {
                self.sum_ms -= old;
            }
        }
        self.samples.push_back(ms);
        self.sum_ms += ms;
        self.count += 1;
        self.min_ms = self.min_ms.min(ms);
        self.max_ms = self.max_ms.max(ms);
    }

    /// Average over the retained samples.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_ms / self.samples.len() as f64
        }
    }

    pub fn p95(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let mut sorted: Vec<f64> = self.samples.iter().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let idx = ((sorted.len() as f64) * 0.95).floor() as usize;
        sorted.get(idx.min(sorted.len() - 1)).copied().unwrap_or(0.0)
    }

    /// Total number of samples ever recorded.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    pub fn min_ms(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min_ms)
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports on drop when it exceeds its threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer used by `profile_scope!` (1ms threshold).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

/// Measure execution time and log if it exceeds the threshold.
#[inline]
pub fn measure_and_log<T, F: FnOnce() -> T>(name: &str, threshold_ms: f64, f: F) -> (T, f64) {
    let (result, elapsed_ms) = measure(f);
    if elapsed_ms > threshold_ms {
        warn!(
            operation = name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", threshold_ms),
            "Slow operation"
        );
    }
    (result, elapsed_ms)
}
