//! The keypad controller: periodic scan, change detection, event emission.

use core::convert::Infallible;

use embassy_time::{Duration, Timer};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;
use log::info;

use crate::conf::KeypadConfig;
use crate::discrete::DiscreteInput;
use crate::err::{ConfigError, PinError};
use crate::event::{KeyCode, KeyEventSink};
use crate::keymap::Keymap;
use crate::scan::MatrixScanner;

/// Maximum number of discrete auxiliary channels per controller.
pub const MAX_DISCRETE: usize = 4;

/// A controller for a GPIO matrix keypad with optional discrete inputs.
///
/// One instance owns all scan state: the last committed matrix bitmask and
/// one latch per discrete channel. Nothing else may touch that state; every
/// observation of it leaves the controller as an event through the sink.
/// Drive the controller from a single task via [`run`](Self::run), or call
/// [`poll_once`](Self::poll_once) from your own periodic scheduler; either
/// way ticks must not overlap.
pub struct KeypadController<
    RowPin: OutputPin<Error = PinErrorType>,
    ColPin: InputPin<Error = PinErrorType>,
    AuxPin: InputPin<Error = PinErrorType>,
    Delay: DelayNs,
    PinErrorType: embedded_hal::digital::Error,
    const ROWS: usize,
    const COLS: usize,
> {
    scanner: MatrixScanner<RowPin, ColPin, Delay, PinErrorType, ROWS, COLS>,
    keymap: Keymap<ROWS, COLS>,
    discrete: Vec<DiscreteInput<AuxPin, PinErrorType>, MAX_DISCRETE>,
    last_state: u32,
    poll_interval: Duration,
}

impl<
        RowPin: OutputPin<Error = PinErrorType>,
        ColPin: InputPin<Error = PinErrorType>,
        AuxPin: InputPin<Error = PinErrorType>,
        Delay: DelayNs,
        PinErrorType: embedded_hal::digital::Error,
        const ROWS: usize,
        const COLS: usize,
    > KeypadController<RowPin, ColPin, AuxPin, Delay, PinErrorType, ROWS, COLS>
{
    /// Creates a controller from the configured lines and keymap.
    ///
    /// The row and column line counts must match the declared geometry
    /// exactly; a mismatch is fatal and no scan loop is ever armed. All
    /// keys start out released.
    pub fn new(
        config: KeypadConfig,
        keymap: Keymap<ROWS, COLS>,
        rows: Vec<RowPin, ROWS>,
        cols: Vec<ColPin, COLS>,
        discrete: Vec<DiscreteInput<AuxPin, PinErrorType>, MAX_DISCRETE>,
        delay: Delay,
    ) -> Result<Self, ConfigError> {
        let scanner = MatrixScanner::new(rows, cols, config.settle_us, delay)?;
        for channel in &discrete {
            info!(
                "Discrete channel {:?} configured with {} source line(s)",
                channel.code(),
                channel.source_count()
            );
        }
        Ok(Self {
            scanner,
            keymap,
            discrete,
            last_state: 0,
            poll_interval: config.poll_interval,
        })
    }

    /// Every keycode this controller may ever report: mapped matrix
    /// positions in row-major order, then discrete channels.
    ///
    /// Intended for one-time registration with the event sink before the
    /// scan loop starts.
    pub fn capabilities(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keymap
            .codes()
            .chain(self.discrete.iter().map(|channel| channel.code()))
    }

    /// The last committed matrix state, one bit per position. Diagnostic.
    pub fn pressed_mask(&self) -> u32 {
        self.last_state
    }

    /// Runs one complete tick: scan, diff, emit, commit.
    ///
    /// Matrix transitions are reported in ascending bit-index order,
    /// followed by any discrete channel transitions, followed by a single
    /// [`sync`](KeyEventSink::sync) if anything was reported at all. A tick
    /// that observes no change reports nothing, not even the sync.
    pub fn poll_once<Sink: KeyEventSink>(
        &mut self,
        sink: &mut Sink,
    ) -> Result<(), PinError<PinErrorType>> {
        let current = self.scanner.scan()?;
        let mut any_changed = false;

        let changed = current ^ self.last_state;
        if changed != 0 {
            for row in 0..ROWS {
                for col in 0..COLS {
                    let bit = Keymap::<ROWS, COLS>::bit_index(row, col);
                    if (changed >> bit) & 1 == 0 {
                        continue;
                    }
                    // Positions without a mapped key toggle silently.
                    let Some(code) = self.keymap.code_at(row, col) else {
                        continue;
                    };
                    sink.report_key(code, (current >> bit) & 1 != 0);
                    any_changed = true;
                }
            }
        }
        // The new snapshot becomes the baseline even when every changed
        // position was unmapped.
        self.last_state = current;

        for channel in self.discrete.iter_mut() {
            let level = channel.level().map_err(PinError::Input)?;
            if level != channel.latch() {
                // Inverted on purpose: downstream consumers of these
                // channels expect the released level while the line is
                // asserted, and the matrix-style polarity would break them.
                sink.report_key(channel.code(), !level);
                channel.commit(level);
                any_changed = true;
            }
        }

        if any_changed {
            sink.sync();
        }
        Ok(())
    }

    /// Polls forever at the configured interval.
    ///
    /// The timer is re-armed only after a tick has fully completed,
    /// including its commit step, so ticks never overlap. A tick itself
    /// never suspends; dropping the returned future therefore stops the
    /// loop cleanly between ticks, with no key state left half-committed.
    pub async fn run<Sink: KeyEventSink>(
        &mut self,
        sink: &mut Sink,
    ) -> Result<Infallible, PinError<PinErrorType>> {
        loop {
            Timer::after(self.poll_interval).await;
            self.poll_once(sink)?;
        }
    }
}
