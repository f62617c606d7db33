//! Recording mocks for `OutputPin` and `DelayNs`.
//!
//! All pins and delays created from one [`Bus`] append to a shared timeline so tests can assert
//! on the exact order of writes and waits.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Level {
    High,
    Low,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Write(usize, Level),
    DelayMs(u32),
}

#[derive(Debug, Default)]
struct State {
    events: Vec<Event>,
    /// Writes allowed before every further write fails; `None` means unlimited
    writes_left: Option<usize>,
}

/// Shared timeline for a set of mock pins and delays.
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<State>>);

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, id: usize) -> MockPin {
        MockPin {
            id,
            bus: self.clone(),
        }
    }

    pub fn pins<const N: usize>(&self) -> [MockPin; N] {
        core::array::from_fn(|id| self.pin(id))
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay { bus: self.clone() }
    }

    /// Make every subsequent pin write fail, or stop failing.
    pub fn fail_writes(&self, fail: bool) {
        self.0.borrow_mut().writes_left = fail.then_some(0);
    }

    /// Let the next `n` pin writes succeed, then fail every one after.
    pub fn fail_after(&self, n: usize) {
        self.0.borrow_mut().writes_left = Some(n);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    pub fn writes(&self) -> Vec<(usize, Level)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Write(id, level) => Some((id, level)),
                Event::DelayMs(_) => None,
            })
            .collect()
    }

    /// Last level written to pin `id`, if any.
    pub fn level(&self, id: usize) -> Option<Level> {
        self.writes()
            .into_iter()
            .rev()
            .find(|(pin, _)| *pin == id)
            .map(|(_, level)| level)
    }

    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }
}

#[derive(Debug, Eq, PartialEq)]
pub struct MockError;

impl digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockPin {
    id: usize,
    bus: Bus,
}

impl MockPin {
    fn write(&mut self, level: Level) -> Result<(), MockError> {
        let mut state = self.bus.0.borrow_mut();
        match &mut state.writes_left {
            Some(0) => return Err(MockError),
            Some(n) => *n -= 1,
            None => {}
        }
        state.events.push(Event::Write(self.id, level));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(Level::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(Level::High)
    }
}

pub struct MockDelay {
    bus: Bus,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.bus.0.borrow_mut().events.push(Event::DelayMs(ms));
    }
}
