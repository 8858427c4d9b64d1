//! Error types for the keypad driver.

use core::fmt::{self, Debug};

/// A fatal configuration error detected before the scan loop is armed.
///
/// The driver refuses to start with a mismatched line set; there is no
/// partial or degraded mode of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The number of row lines does not match the declared row count.
    RowCount { expected: usize, found: usize },
    /// The number of column lines does not match the declared column count.
    ColCount { expected: usize, found: usize },
}

/// An error related to GPIO line operations.
///
/// With infallible HAL pins this is never constructed; the type exists
/// because the `embedded-hal` digital traits are fallible.
pub enum PinError<TPINERR> {
    /// An error occurred while driving a row output line.
    Output(TPINERR),
    /// An error occurred while sampling a column or auxiliary input line.
    Input(TPINERR),
}

impl<TPINERR: Debug> Debug for PinError<TPINERR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output(err) => write!(f, "Output({err:?})"),
            Self::Input(err) => write!(f, "Input({err:?})"),
        }
    }
}
