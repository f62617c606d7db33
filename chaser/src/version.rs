// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Firmware version banner.

use core::fmt;

/// Firmware identity, printed once at boot.
///
/// Formats as `"{name} v{firmware} (hw rev {hw_revision})"`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Version {
    pub name: &'static str,
    pub firmware: &'static str,
    pub hw_revision: u8,
}

impl Version {
    pub const fn new(name: &'static str, firmware: &'static str, hw_revision: u8) -> Self {
        Self {
            name,
            firmware,
            hw_revision,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} (hw rev {})",
            self.name, self.firmware, self.hw_revision
        )
    }
}

/// Boot banner: the version line followed by the LED names in chase order.
///
/// Lines end in CRLF so raw serial terminals render them correctly.
pub struct Banner<'a> {
    pub version: &'a Version,
    pub leds: &'a [&'a str],
}

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\nLEDs:", self.version)?;
        for led in self.leds {
            write!(f, " {}", led)?;
        }
        f.write_str("\r\n")
    }
}
