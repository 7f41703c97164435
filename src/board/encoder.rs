//! Quadrature encoder on two GPIOs.
//!
//! An interrupt-priority task decodes every A/B edge into a shared raw
//! count; the main loop only reads and resets it. Both sides go through a
//! critical section, so a strip push never loses an edge.

use core::cell::Cell;
use defmt::debug;
use embassy_futures::select::select;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use ws2812_tester::input::{QuadratureCounter, QuadratureDecoder};

/// Raw quarter-step count written by [`quadrature_task`].
static RAW_COUNT: Mutex<CriticalSectionRawMutex, Cell<i32>> = Mutex::new(Cell::new(0));

/// Main-loop handle to [`RAW_COUNT`].
pub struct SharedCounter;

impl QuadratureCounter for SharedCounter {
    fn read(&mut self) -> i32 {
        RAW_COUNT.lock(|count| count.get())
    }

    fn write(&mut self, value: i32) {
        RAW_COUNT.lock(|count| count.set(value));
    }
}

#[embassy_executor::task]
pub async fn quadrature_task(a: AnyPin, b: AnyPin) {
    let mut a = Input::new(a, Pull::Up);
    let mut b = Input::new(b, Pull::Up);
    let mut decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
    debug!("Encoder: decoder running");

    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;

        let step = decoder.step(a.is_high(), b.is_high());
        if step != 0 {
            RAW_COUNT.lock(|count| count.set(count.get().saturating_add(i32::from(step))));
        }
    }
}
