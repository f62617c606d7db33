// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for hardware revision 2 (carrier board).

use chaser::ActiveLevel;
use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

use super::gpio::LedPin;

pub const HW_REVISION: u8 = 2;

pub const LED_ACTIVE: ActiveLevel = ActiveLevel::High;

pub const LED_LABELS: [&str; 4] = ["D1 (PD8)", "D2 (PD9)", "D3 (PD10)", "D4 (PD11)"];

pub type DebugUsart = pac::USART1;

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub debug: DebugPins,
}

pub struct LedPins {
    pub led1: gpiod::PD8<Output<PushPull>>,
    pub led2: gpiod::PD9<Output<PushPull>>,
    pub led3: gpiod::PD10<Output<PushPull>>,
    pub led4: gpiod::PD11<Output<PushPull>>,
}

// USART1 TX/RX
pub struct DebugPins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

impl LedPins {
    pub fn erase(self) -> [LedPin; 4] {
        [
            LedPin::new(self.led1),
            LedPin::new(self.led2),
            LedPin::new(self.led3),
            LedPin::new(self.led4),
        ]
    }
}

impl BoardPins {
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();

        Self {
            leds: LedPins {
                led1: gpiod.pd8.into_push_pull_output(),
                led2: gpiod.pd9.into_push_pull_output(),
                led3: gpiod.pd10.into_push_pull_output(),
                led4: gpiod.pd11.into_push_pull_output(),
            },

            debug: DebugPins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },
        }
    }
}
