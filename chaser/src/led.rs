// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! LED abstraction over any `embedded-hal` output pin.

use embedded_hal::digital::OutputPin;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(pin: PIN, active: ActiveLevel) -> Result<Self, PIN::Error> {
        let mut led = Self::wrap(pin, active);
        led.off()?;
        Ok(led)
    }

    /// Adopt a pin without writing to it. The LED is assumed OFF until the first write.
    pub fn wrap(pin: PIN, active: ActiveLevel) -> Self {
        Self {
            pin,
            active,
            is_on: false,
        }
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) -> Result<(), PIN::Error> {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high()?,
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low()?,
        }
        self.is_on = on;
        Ok(())
    }

    #[inline]
    pub fn on(&mut self) -> Result<(), PIN::Error> {
        self.set(true)
    }

    #[inline]
    pub fn off(&mut self) -> Result<(), PIN::Error> {
        self.set(false)
    }

    pub fn toggle(&mut self) -> Result<(), PIN::Error> {
        self.set(!self.is_on)
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    #[inline]
    pub fn active(&self) -> ActiveLevel {
        self.active
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

impl<PIN: OutputPin> Led<PIN> {
    pub fn active_high(pin: PIN) -> Result<Self, PIN::Error> {
        Self::new(pin, ActiveLevel::High)
    }
    pub fn active_low(pin: PIN) -> Result<Self, PIN::Error> {
        Self::new(pin, ActiveLevel::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Bus, Level};

    #[test]
    fn new_drives_led_off() {
        let bus = Bus::new();
        let led = Led::active_high(bus.pin(0)).unwrap();
        assert!(!led.is_on());
        assert_eq!(bus.writes(), vec![(0, Level::Low)]);

        let bus = Bus::new();
        let led = Led::active_low(bus.pin(0)).unwrap();
        assert!(!led.is_on());
        assert_eq!(bus.writes(), vec![(0, Level::High)]);
    }

    #[test]
    fn wrap_does_not_touch_pin() {
        let bus = Bus::new();
        let led = Led::wrap(bus.pin(3), ActiveLevel::High);
        assert!(!led.is_on());
        assert_eq!(led.active(), ActiveLevel::High);
        assert!(bus.writes().is_empty());
    }

    #[test]
    fn active_low_inverts_levels() {
        let bus = Bus::new();
        let mut led = Led::wrap(bus.pin(1), ActiveLevel::Low);
        led.on().unwrap();
        assert!(led.is_on());
        assert_eq!(bus.level(1), Some(Level::Low));

        led.off().unwrap();
        assert_eq!(bus.level(1), Some(Level::High));
    }

    #[test]
    fn toggle_flips_state() {
        let bus = Bus::new();
        let mut led = Led::wrap(bus.pin(0), ActiveLevel::High);
        led.toggle().unwrap();
        assert!(led.is_on());
        assert_eq!(bus.level(0), Some(Level::High));

        led.toggle().unwrap();
        assert!(!led.is_on());
        assert_eq!(bus.level(0), Some(Level::Low));
    }

    #[test]
    fn failed_write_keeps_state() {
        let bus = Bus::new();
        let mut led = Led::wrap(bus.pin(2), ActiveLevel::High);
        bus.fail_writes(true);
        assert!(led.on().is_err());
        assert!(!led.is_on());
    }
}
