// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers and per-revision pin maps.

#[cfg(all(feature = "rev1", feature = "rev2"))]
compile_error!("features `rev1` and `rev2` are mutually exclusive");

#[cfg(not(any(feature = "rev1", feature = "rev2")))]
compile_error!("select a hardware revision with `--features rev1` or `--features rev2`");

pub mod delay;
pub mod gpio;
pub mod usart;

#[cfg(feature = "rev1")]
#[path = "pins_rev1.rs"]
pub mod pins;

#[cfg(all(feature = "rev2", not(feature = "rev1")))]
#[path = "pins_rev2.rs"]
pub mod pins;

pub use delay::SysTickDelay;
pub use gpio::LedPin;
pub use usart::Usart;
