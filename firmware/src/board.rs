// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One-shot board bring-up.

use stm32f7xx_hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};

use crate::config::BAUD_RATE;
use crate::hw::pins::{BoardPins, DebugUsart};
use crate::hw::{LedPin, SysTickDelay, Usart};

/// Everything the chaser programs need, ready to use.
pub struct Board {
    /// Chase-ordered LED outputs
    pub leds: [LedPin; 4],
    pub usart: Usart<DebugUsart>,
    pub delay: SysTickDelay,
}

impl Board {
    /// Take the peripherals, configure clocks, LED outputs, the debug USART and SysTick.
    ///
    /// Panics if called more than once.
    pub fn init() -> Self {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks
        let rcc = dp.RCC.constrain();
        let clocks = rcc.cfgr.freeze();

        // GPIO
        #[cfg(feature = "rev1")]
        let (pins, usart) = (BoardPins::new(dp.GPIOB, dp.GPIOC, dp.GPIOD), dp.USART3);
        #[cfg(all(feature = "rev2", not(feature = "rev1")))]
        let (pins, usart) = (BoardPins::new(dp.GPIOA, dp.GPIOD), dp.USART1);

        // Debug USART
        let usart_cfg = Config {
            baud_rate: BAUD_RATE.bps(),
            ..Default::default()
        };
        let serial = Serial::new(usart, (pins.debug.tx, pins.debug.rx), &clocks, usart_cfg);

        // SysTick delay from cortex-m, needs core clock in Hz (u32)
        let delay = SysTickDelay::new(cp.SYST, clocks.sysclk().raw());

        Self {
            leds: pins.leds.erase(),
            usart: Usart::new(serial),
            delay,
        }
    }
}
