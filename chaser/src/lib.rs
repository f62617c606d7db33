// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Chaser
//!
//! Board-independent logic for the LED chaser bring-up firmware. Nothing here touches a HAL
//! directly; everything is generic over the `embedded-hal` 1.0 traits so it can be unit tested on
//! the host.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`led`] | Single LED wrapper aware of active-high / active-low wiring |
//! | [`sequence`] | Round-robin "one LED off" sequencer |
//! | [`version`] | Version banner built from compile-time constants |
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p chaser
//! ```

#![cfg_attr(not(test), no_std)]

pub mod led;
pub mod sequence;
pub mod version;

#[cfg(test)]
mod mock;

pub use led::{ActiveLevel, Led};
pub use sequence::{Chaser, STEP_MS};
pub use version::{Banner, Version};
