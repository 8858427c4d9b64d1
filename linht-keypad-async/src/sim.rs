//! In-memory line fakes and a recording event sink for the unit tests.

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use heapless::Vec;

use crate::event::{KeyCode, KeyEventSink};

/// Simulated electrical state of a key matrix.
///
/// Tracks which contacts are closed and which row line is currently driven.
/// Driving a second row while one is already active is an electrical bug in
/// the scanner, so the fake panics on it.
pub struct SimMatrix<const ROWS: usize, const COLS: usize> {
    pressed: [[bool; COLS]; ROWS],
    active_row: Option<usize>,
}

impl<const ROWS: usize, const COLS: usize> SimMatrix<ROWS, COLS> {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            pressed: [[false; COLS]; ROWS],
            active_row: None,
        }))
    }

    pub fn press(&mut self, row: usize, col: usize) {
        self.pressed[row][col] = true;
    }

    pub fn release(&mut self, row: usize, col: usize) {
        self.pressed[row][col] = false;
    }

    pub fn active_row(&self) -> Option<usize> {
        self.active_row
    }
}

/// A row drive line attached to a [`SimMatrix`].
pub struct RowLine<const ROWS: usize, const COLS: usize> {
    index: usize,
    sim: Rc<RefCell<SimMatrix<ROWS, COLS>>>,
}

impl<const ROWS: usize, const COLS: usize> ErrorType for RowLine<ROWS, COLS> {
    type Error = Infallible;
}

impl<const ROWS: usize, const COLS: usize> OutputPin for RowLine<ROWS, COLS> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut sim = self.sim.borrow_mut();
        assert!(
            sim.active_row.is_none(),
            "row {} driven while row {:?} is still active",
            self.index,
            sim.active_row
        );
        sim.active_row = Some(self.index);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut sim = self.sim.borrow_mut();
        if sim.active_row == Some(self.index) {
            sim.active_row = None;
        }
        Ok(())
    }
}

/// A column sense line attached to a [`SimMatrix`]. Reads low when the key
/// at the intersection with the active row is closed.
pub struct ColLine<const ROWS: usize, const COLS: usize> {
    index: usize,
    sim: Rc<RefCell<SimMatrix<ROWS, COLS>>>,
}

impl<const ROWS: usize, const COLS: usize> ColLine<ROWS, COLS> {
    fn closed(&self) -> bool {
        let sim = self.sim.borrow();
        match sim.active_row {
            Some(row) => sim.pressed[row][self.index],
            None => false,
        }
    }
}

impl<const ROWS: usize, const COLS: usize> ErrorType for ColLine<ROWS, COLS> {
    type Error = Infallible;
}

impl<const ROWS: usize, const COLS: usize> InputPin for ColLine<ROWS, COLS> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.closed())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.closed())
    }
}

/// Builds the full set of row and column lines for a simulated matrix.
pub fn matrix_lines<const ROWS: usize, const COLS: usize>(
    sim: &Rc<RefCell<SimMatrix<ROWS, COLS>>>,
) -> (Vec<RowLine<ROWS, COLS>, ROWS>, Vec<ColLine<ROWS, COLS>, COLS>) {
    let rows = (0..ROWS)
        .map(|index| RowLine {
            index,
            sim: sim.clone(),
        })
        .collect();
    let cols = (0..COLS)
        .map(|index| ColLine {
            index,
            sim: sim.clone(),
        })
        .collect();
    (rows, cols)
}

/// A free-standing boolean input line with a shared handle to flip it.
pub struct LevelLine {
    level: Rc<Cell<bool>>,
}

impl LevelLine {
    pub fn new(initial: bool) -> (Self, Rc<Cell<bool>>) {
        let level = Rc::new(Cell::new(initial));
        (
            Self {
                level: level.clone(),
            },
            level,
        )
    }
}

impl ErrorType for LevelLine {
    type Error = Infallible;
}

impl InputPin for LevelLine {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.level.get())
    }
}

/// A delay provider that does nothing.
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// A delay provider that counts invocations instead of sleeping.
pub struct CountingDelay {
    pub calls: Rc<Cell<u32>>,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls.set(self.calls.get() + 1);
    }

    fn delay_us(&mut self, _us: u32) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// What a [`Recorder`] saw, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkEntry {
    Key(KeyCode, bool),
    Sync,
}

/// An event sink that records everything it receives.
#[derive(Default)]
pub struct Recorder {
    pub entries: std::vec::Vec<SinkEntry>,
}

impl Recorder {
    /// Drains the recorded entries, leaving the recorder empty.
    pub fn take(&mut self) -> std::vec::Vec<SinkEntry> {
        core::mem::take(&mut self.entries)
    }
}

impl KeyEventSink for Recorder {
    fn report_key(&mut self, code: KeyCode, pressed: bool) {
        self.entries.push(SinkEntry::Key(code, pressed));
    }

    fn sync(&mut self) {
        self.entries.push(SinkEntry::Sync);
    }
}
