//! Matrix scanning: one electrical snapshot of the key grid per call.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use heapless::Vec;
use log::error;

use crate::err::{ConfigError, PinError};

/// Drives the row lines and samples the column lines of the key matrix.
///
/// Rows idle high and are driven low one at a time; a column reading low
/// while its row is active means the key at that intersection is closed
/// (columns are pulled up externally). Exactly one row is ever active at an
/// instant, so multiple closed contacts cannot short two driven lines
/// together.
pub struct MatrixScanner<
    RowPin: OutputPin<Error = PinErrorType>,
    ColPin: InputPin<Error = PinErrorType>,
    Delay: DelayNs,
    PinErrorType: embedded_hal::digital::Error,
    const ROWS: usize,
    const COLS: usize,
> {
    rows: Vec<RowPin, ROWS>,
    cols: Vec<ColPin, COLS>,
    delay: Delay,
    settle_us: u32,
}

impl<
        RowPin: OutputPin<Error = PinErrorType>,
        ColPin: InputPin<Error = PinErrorType>,
        Delay: DelayNs,
        PinErrorType: embedded_hal::digital::Error,
        const ROWS: usize,
        const COLS: usize,
    > MatrixScanner<RowPin, ColPin, Delay, PinErrorType, ROWS, COLS>
{
    /// Creates a scanner from the configured row and column lines.
    ///
    /// The number of lines must match the declared geometry exactly; a
    /// mismatch is a fatal configuration error and the scan loop is never
    /// armed.
    pub fn new(
        rows: Vec<RowPin, ROWS>,
        cols: Vec<ColPin, COLS>,
        settle_us: u32,
        delay: Delay,
    ) -> Result<Self, ConfigError> {
        const {
            assert!(ROWS * COLS <= u32::BITS as usize, "matrix exceeds the scan state word");
        }
        if rows.len() != ROWS {
            error!("Expected {} row lines, got {}", ROWS, rows.len());
            return Err(ConfigError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }
        if cols.len() != COLS {
            error!("Expected {} column lines, got {}", COLS, cols.len());
            return Err(ConfigError::ColCount {
                expected: COLS,
                found: cols.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            delay,
            settle_us,
        })
    }

    /// Samples the full matrix once, independent of any previous scan.
    ///
    /// Returns a bitmask with one bit per matrix position at
    /// `row * COLS + col`; a set bit means the key is currently pressed.
    pub fn scan(&mut self) -> Result<u32, PinError<PinErrorType>> {
        let mut state = 0u32;
        for (r, row) in self.rows.iter_mut().enumerate() {
            row.set_low().map_err(PinError::Output)?;
            if self.settle_us > 0 {
                self.delay.delay_us(self.settle_us);
            }
            for (c, col) in self.cols.iter_mut().enumerate() {
                if col.is_low().map_err(PinError::Input)? {
                    state |= 1 << (r * COLS + c);
                }
            }
            // Release the row before the next one goes active.
            row.set_high().map_err(PinError::Output)?;
        }
        Ok(state)
    }
}
