// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking SysTick delay exposed as `embedded_hal::delay::DelayNs`.

use cortex_m::{delay::Delay, peripheral::SYST};
use embedded_hal::delay::DelayNs;

pub struct SysTickDelay {
    delay: Delay,
}

impl SysTickDelay {
    /// `sysclk_hz` must be the core clock the SysTick counts.
    pub fn new(syst: SYST, sysclk_hz: u32) -> Self {
        Self {
            delay: Delay::new(syst, sysclk_hz),
        }
    }
}

impl DelayNs for SysTickDelay {
    // SysTick resolution is 1 us; round up so we never wait less than asked.
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
