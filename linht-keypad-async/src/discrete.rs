//! Discrete auxiliary inputs outside the row/column matrix.

use embedded_hal::digital::InputPin;

use crate::event::KeyCode;

/// An auxiliary input channel, debounced by the same poll interval as the
/// matrix.
///
/// A channel is backed by one physical line, or by two redundant lines
/// combined with OR: the channel is active whenever either source is
/// active. On the reference hardware the push-to-talk channel merges the
/// internal button with the external jack this way. Channels absent from a
/// given unit are simply never configured; they take no part in scanning or
/// capability advertisement.
pub struct DiscreteInput<AuxPin: InputPin<Error = PinErrorType>, PinErrorType> {
    code: KeyCode,
    primary: AuxPin,
    secondary: Option<AuxPin>,
    last: bool,
}

impl<AuxPin: InputPin<Error = PinErrorType>, PinErrorType> DiscreteInput<AuxPin, PinErrorType> {
    /// Creates a single-source channel reporting `code`.
    pub fn new(code: KeyCode, source: AuxPin) -> Self {
        Self {
            code,
            primary: source,
            secondary: None,
            last: false,
        }
    }

    /// Creates a channel whose level is the OR of two redundant sources.
    pub fn with_secondary(code: KeyCode, primary: AuxPin, secondary: AuxPin) -> Self {
        Self {
            code,
            primary,
            secondary: Some(secondary),
            last: false,
        }
    }

    /// The symbolic key this channel reports.
    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// Number of physical source lines backing this channel.
    pub fn source_count(&self) -> usize {
        if self.secondary.is_some() {
            2
        } else {
            1
        }
    }

    /// Samples the combined logical level. Both sources are always read.
    pub(crate) fn level(&mut self) -> Result<bool, PinErrorType> {
        let primary = self.primary.is_high()?;
        let secondary = match &mut self.secondary {
            Some(pin) => pin.is_high()?,
            None => false,
        };
        Ok(primary || secondary)
    }

    /// The last committed level for this channel.
    pub(crate) fn latch(&self) -> bool {
        self.last
    }

    /// Commits a freshly observed level as the new baseline.
    pub(crate) fn commit(&mut self, level: bool) {
        self.last = level;
    }
}
