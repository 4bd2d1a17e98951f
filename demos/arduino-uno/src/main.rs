#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use panic_halt as _;
use sevseg::{Config, Polarity, SevSeg};

const NUM_DIGITS: usize = 2;
const REFRESHES_PER_STEP: u16 = 200; // ~200 ms at one refresh per ms

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let digits = [
        pins.d3.into_output().downgrade(),
        pins.d2.into_output().downgrade(),
    ];
    let segments = [
        pins.d4.into_output().downgrade(),  // A
        pins.d5.into_output().downgrade(),  // B
        pins.d6.into_output().downgrade(),  // C
        pins.d7.into_output().downgrade(),  // D
        pins.d8.into_output().downgrade(),  // E
        pins.d9.into_output().downgrade(),  // F
        pins.d10.into_output().downgrade(), // G
        pins.d11.into_output().downgrade(), // DP
    ];
    let config = Config {
        polarity: Polarity::CommonCathode,
        leading_zeros: true,
    };
    let mut display: SevSeg<_, _, NUM_DIGITS> = SevSeg::new(config, digits, segments).unwrap();

    ufmt::uwriteln!(&mut serial, "Testing segments...").unwrap_infallible();
    let mut delay = arduino_hal::Delay::new();
    display.display_test(&mut delay, 100).unwrap();

    ufmt::uwriteln!(&mut serial, "Scrolling text...").unwrap_infallible();
    display.set_text("Hello rUSt").unwrap();
    for _ in 0..(10 + NUM_DIGITS) * 2 {
        for _ in 0..REFRESHES_PER_STEP {
            display.refresh().unwrap();
            arduino_hal::delay_ms(1);
        }
        display.scroll_text_left();
    }

    ufmt::uwriteln!(&mut serial, "Counting up...").unwrap_infallible();
    let mut counter: i8 = -9;
    loop {
        display.set_number(counter).unwrap();
        for _ in 0..REFRESHES_PER_STEP {
            display.refresh().unwrap();
            arduino_hal::delay_ms(1);
        }
        counter = if counter >= 99 { -9 } else { counter + 1 };
    }
}
