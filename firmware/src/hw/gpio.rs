// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Type-erased push-pull output usable through the `embedded-hal` 1.0 traits.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f7xx_hal::gpio::{self, ErasedPin, Output, PushPull};

/// Any push-pull output pin, with the port and pin number moved to runtime so that pins from
/// different ports share one type.
pub struct LedPin {
    pin: ErasedPin<Output<PushPull>>,
}

impl LedPin {
    pub fn new<const P: char, const N: u8>(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self { pin: pin.erase() }
    }
}

impl ErrorType for LedPin {
    type Error = Infallible;
}

impl OutputPin for LedPin {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high();
        Ok(())
    }
}
