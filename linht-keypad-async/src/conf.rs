//! Driver configuration parameters.

use embassy_time::Duration;

/// Configuration parameters for the keypad poll loop.
#[derive(Debug, Clone, Copy)]
pub struct KeypadConfig {
    /// Interval between scan ticks. Debounce quality is bounded by this
    /// period: a level must still hold at the next tick to be observed, so
    /// bounces shorter than one interval are never reported.
    pub poll_interval: Duration,
    /// Settle time, in microseconds, between driving a row active and
    /// sampling the columns. Zero skips the delay entirely; slow or heavily
    /// filtered row lines may need a few microseconds here.
    pub settle_us: u32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(20),
            settle_us: 0,
        }
    }
}
