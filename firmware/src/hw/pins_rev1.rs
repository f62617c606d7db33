// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for hardware revision 1 (STM32F767ZI Nucleo bring-up).

use chaser::ActiveLevel;
use stm32f7xx_hal::{
    gpio::{gpiob, gpioc, gpiod, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

use super::gpio::LedPin;

pub const HW_REVISION: u8 = 1;

pub const LED_ACTIVE: ActiveLevel = ActiveLevel::High;

/// Silkscreen / pin names, in chase order.
pub const LED_LABELS: [&str; 4] = ["LD1 (PB0)", "LD2 (PB7)", "LD3 (PB14)", "PC7"];

/// USART wired to the ST-LINK virtual COM port.
pub type DebugUsart = pac::USART3;

/// All board pins. Construct this once at startup using:
///
/// ```rust
/// let pins = BoardPins::new(dp.GPIOB, dp.GPIOC, dp.GPIOD);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub debug: DebugPins,
}

pub struct LedPins {
    pub led1: gpiob::PB0<Output<PushPull>>,  // LD1 green
    pub led2: gpiob::PB7<Output<PushPull>>,  // LD2 blue
    pub led3: gpiob::PB14<Output<PushPull>>, // LD3 red
    pub led4: gpioc::PC7<Output<PushPull>>,  // CN7 header
}

/// USART3 TX/RX
pub struct DebugPins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

impl LedPins {
    /// Erase the pin types so the LEDs fit in one array, in chase order.
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
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpiob: pac::GPIOB, gpioc: pac::GPIOC, gpiod: pac::GPIOD) -> Self {
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();

        Self {
            leds: LedPins {
                led1: gpiob.pb0.into_push_pull_output(),
                led2: gpiob.pb7.into_push_pull_output(),
                led3: gpiob.pb14.into_push_pull_output(),
                led4: gpioc.pc7.into_push_pull_output(),
            },

            debug: DebugPins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },
        }
    }
}
