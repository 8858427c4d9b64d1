//! An asynchronous, `no_std` driver for the GPIO key matrix and discrete
//! push-to-talk inputs on the LinHT handheld front panel.
//!
//! The driver polls the matrix at a fixed interval (20 ms by default) and
//! reports only edges: each tick it drives every row line active in turn,
//! samples the column lines into a bitmask, diffs the result against the
//! previously committed state, and hands one event per changed key to a
//! [`KeyEventSink`](event::KeyEventSink). Discrete auxiliary inputs, such as
//! the push-to-talk button and its external line, are sampled in the same
//! tick; a two-source channel is active whenever either line is active.
//! Debouncing falls out of the poll interval itself, so there is no per-key
//! counter state.
//!
//! The driver is written entirely against `embedded-hal` 1.0 digital traits
//! and works with any HAL that implements them. The poll loop is driven by
//! `embassy-time`; [`embassy_time::Delay`] can be used for the optional
//! inter-row settle delay.
//!
//! # Usage
//!
//! ```rust,ignore
//! use embassy_time::Delay;
//! use heapless::Vec;
//! use linht_keypad_async::conf::KeypadConfig;
//! use linht_keypad_async::discrete::DiscreteInput;
//! use linht_keypad_async::event::KeyCode;
//! use linht_keypad_async::keymap::DEFAULT_5X4;
//! use linht_keypad_async::keypad::KeypadController;
//!
//! // Row lines as push-pull outputs (idle high), column lines as inputs
//! // with pull-ups, collected from your HAL of choice.
//! let rows: Vec<_, 5> = row_pins.into_iter().collect();
//! let cols: Vec<_, 4> = col_pins.into_iter().collect();
//!
//! // The internal PTT button and the external PTT jack feed one channel.
//! let mut discrete = Vec::new();
//! let _ = discrete.push(DiscreteInput::with_secondary(KeyCode::Ptt, ptt, ext_ptt));
//! let _ = discrete.push(DiscreteInput::new(KeyCode::Opt, opt));
//!
//! let mut keypad = KeypadController::new(
//!     KeypadConfig::default(),
//!     DEFAULT_5X4,
//!     rows,
//!     cols,
//!     discrete,
//!     Delay,
//! )?;
//!
//! // Register every key the controller may ever emit, then poll forever.
//! for code in keypad.capabilities() {
//!     sink.register(code);
//! }
//! keypad.run(&mut sink).await?;
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod conf;
pub mod discrete;
pub mod err;
pub mod event;
pub mod keymap;
pub mod keypad;
pub mod scan;

#[cfg(test)]
pub(crate) mod sim;
