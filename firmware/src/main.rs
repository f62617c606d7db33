#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use chaser::Chaser;
use led_chaser::{
    config::VERSION,
    hw::pins::{LED_ACTIVE, LED_LABELS},
    Board,
};

#[entry]
fn main() -> ! {
    let Board {
        leds,
        mut usart,
        mut delay,
    } = Board::init();

    // All LEDs on
    let mut chaser = match Chaser::new(leds, LED_ACTIVE) {
        Ok(chaser) => chaser,
        Err(never) => match never {},
    };

    usart.banner(&VERSION, &LED_LABELS);

    match chaser.run(&mut delay) {
        Ok(never) | Err(never) => match never {},
    }
}
