//! Symbolic key identifiers and the event sink boundary.

/// A symbolic key reported by the keypad driver.
///
/// Covers every position of the reference 5x4 front panel plus the discrete
/// auxiliary channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Up,
    Down,
    Esc,
    Left,
    Right,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    /// The `*` key.
    Asterisk,
    /// The `\` key.
    Backslash,
    /// The combined push-to-talk channel (internal button OR external jack).
    Ptt,
    /// The discrete option button on the side of the unit.
    Opt,
}

/// Consumer side of the driver.
///
/// The controller calls [`report_key`](Self::report_key) once per observed
/// edge and [`sync`](Self::sync) once at the end of any tick that produced
/// at least one event, so a batch of same-tick events can be treated as one
/// consistent snapshot. A tick that observes no change calls neither.
pub trait KeyEventSink {
    /// Report a single key transition.
    fn report_key(&mut self, code: KeyCode, pressed: bool);

    /// Mark the end of a batch of same-tick events.
    fn sync(&mut self);
}
