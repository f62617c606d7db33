// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration.

use chaser::Version;

use crate::hw::pins::HW_REVISION;

/// Debug terminal baud rate (8N1).
pub const BAUD_RATE: u32 = 115_200;

pub const VERSION: Version = Version::new(
    env!("CARGO_PKG_NAME"),
    env!("CARGO_PKG_VERSION"),
    HW_REVISION,
);
