// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # LED Chaser Firmware
//!
//! Bring-up firmware for the STM32F767 boards. It lights four LEDs and walks a single dark LED
//! around them every 200 ms, which is enough to confirm the MCU boots, the clock tree runs and
//! each LED is wired to the pin we think it is.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Pin maps per hardware revision, GPIO / delay adapters, debug USART |
//! | [`board`] | One-shot peripheral bring-up |
//! | [`config`] | Compile-time constants |
//!
//! The sequencing itself lives in the host-testable `chaser` crate.
//!
//! ## Getting Started
//!
//! Flash the board (hardware revision 1 is the default):
//!
//! ```bash
//! cd firmware
//! cargo run --release --bin led-chaser
//! cargo run --release --bin led-chaser --no-default-features --features rev2
//! ```
//!
//! `led-chaser` prints a version banner on the debug terminal at boot; `led-chaser-quiet` prints
//! nothing.
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod board;
pub mod config;
pub mod hw;

pub use board::Board;
