#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use chaser::Chaser;
use led_chaser::{hw::pins::LED_ACTIVE, Board};

#[entry]
fn main() -> ! {
    // USART stays configured so a terminal can stay attached across reflashes.
    let Board {
        leds,
        usart: _usart,
        mut delay,
    } = Board::init();

    let mut chaser = match Chaser::new(leds, LED_ACTIVE) {
        Ok(chaser) => chaser,
        Err(never) => match never {},
    };

    match chaser.run(&mut delay) {
        Ok(never) | Err(never) => match never {},
    }
}
