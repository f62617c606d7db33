// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debug terminal on the board's console USART.
//!
//! Only TX is used: the firmware announces itself once at boot and never reads. Attach with any
//! serial terminal at [`BAUD_RATE`](crate::config::BAUD_RATE), 8N1.

use core::fmt::{self, Write};
use nb::block;

use chaser::{Banner, Version};
use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    /// Keep the TX half; RX is dropped.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    /// Print the version line and LED names, then wait for the bytes to leave the shift register.
    pub fn banner(&mut self, version: &Version, leds: &[&str]) {
        let _ = write!(self, "{}", Banner { version, leds });
        let _ = block!(self.tx.flush());
    }
}

impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            block!(self.tx.write(b)).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
