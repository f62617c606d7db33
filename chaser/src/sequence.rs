// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Round-robin LED sequencer.
//!
//! All LEDs are lit at startup. Each step waits, re-lights the LED that was dark, and darkens the
//! next one, so a single "off" pulse walks around the ring forever:
//!
//! ```text
//! step:   1     2     3     4     5 ...
//! dark:   0     1     2     3     0 ...
//! ```
//!
//! Works in `no_std` and does not allocate memory.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::led::{ActiveLevel, Led};

/// Default delay before each step, in milliseconds.
pub const STEP_MS: u32 = 200;

/// Walks a single dark LED around a ring of `N` lit LEDs.
///
/// A ring needs at least one LED; an empty one does not build:
///
/// ```compile_fail
/// use core::convert::Infallible;
/// use chaser::{ActiveLevel, Chaser};
/// use embedded_hal::digital::{ErrorType, OutputPin};
///
/// struct Pin;
///
/// impl ErrorType for Pin {
///     type Error = Infallible;
/// }
///
/// impl OutputPin for Pin {
///     fn set_low(&mut self) -> Result<(), Infallible> {
///         Ok(())
///     }
///     fn set_high(&mut self) -> Result<(), Infallible> {
///         Ok(())
///     }
/// }
///
/// let _ = Chaser::<Pin, 0>::new([], ActiveLevel::High);
/// ```
pub struct Chaser<PIN: OutputPin, const N: usize> {
    leds: [Led<PIN>; N],
    /// Index of the LED the next step darkens
    cursor: usize,
    /// Index of the LED currently dark
    dark: Option<usize>,
    step_ms: u32,
}

impl<PIN: OutputPin, const N: usize> Chaser<PIN, N> {
    const NON_EMPTY: () = assert!(N > 0, "a chaser needs at least one LED");

    /// Wrap raw output pins and light all of them, in index order.
    pub fn new(pins: [PIN; N], active: ActiveLevel) -> Result<Self, PIN::Error> {
        Self::from_leds(pins.map(|pin| Led::wrap(pin, active)))
    }

    /// Light a set of already-wrapped LEDs, in index order.
    pub fn from_leds(mut leds: [Led<PIN>; N]) -> Result<Self, PIN::Error> {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        for led in leds.iter_mut() {
            led.on()?;
        }

        Ok(Self {
            leds,
            cursor: 0,
            dark: None,
            step_ms: STEP_MS,
        })
    }

    /// Set the delay waited before each step.
    pub fn with_step_ms(mut self, step_ms: u32) -> Self {
        self.step_ms = step_ms;
        self
    }

    /// Move the dark LED one position forward without waiting.
    ///
    /// The previous LED is re-lit before the next one is darkened. On the first step the
    /// "previous" LED is the last one, which is already lit. If a write fails the cursor does not
    /// move, so calling again retries the same step.
    pub fn advance(&mut self) -> Result<(), PIN::Error> {
        let prev = (self.cursor + N - 1) % N;

        self.leds[prev].on()?;
        self.dark = None;

        self.leds[self.cursor].off()?;
        self.dark = Some(self.cursor);

        self.cursor = (self.cursor + 1) % N;
        Ok(())
    }

    /// Wait one step period, then advance.
    pub fn step<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), PIN::Error> {
        delay.delay_ms(self.step_ms);
        self.advance()
    }

    /// Step forever. Only returns if a pin write fails.
    pub fn run<D: DelayNs>(&mut self, delay: &mut D) -> Result<Infallible, PIN::Error> {
        loop {
            self.step(delay)?;
        }
    }

    /// Index of the LED currently dark, or `None` before the first step.
    #[inline]
    pub fn dark(&self) -> Option<usize> {
        self.dark
    }

    /// Index of the LED the next step darkens.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    pub fn leds(&self) -> &[Led<PIN>; N] {
        &self.leds
    }

    pub fn release(self) -> [Led<PIN>; N] {
        self.leds
    }
}
