//! WS2812 driver for the 5×5 LED matrix, using the RMT peripheral.

extern crate alloc;

use embassy_time::{
    Duration,
    Timer,
};
use esp_hal::{
    Blocking,
    gpio::Level,
    rmt::{
        PulseCode,
        Tx,
    },
};
use palette::Srgb;

use crate::matrix::{
    CELL_COUNT,
    wire_bytes,
};

/// WS2812 matrix driver.
///
/// Holds an in-memory framebuffer that is flushed to hardware in one
/// transmission with [`update`](Leds::update).
pub struct Leds<'a> {
    channel: Option<esp_hal::rmt::Channel<'a, Blocking, Tx>>,
    framebuffer: [Srgb<u8>; CELL_COUNT],
}

impl<'a> Leds<'a> {
    pub const fn new(channel: esp_hal::rmt::Channel<'a, Blocking, Tx>) -> Self {
        Self {
            channel: Some(channel),
            framebuffer: [Srgb::new(0, 0, 0); CELL_COUNT],
        }
    }

    /// Flush the framebuffer to the matrix, every cell in index order.
    pub async fn update(&mut self) {
        let Some(channel) = self.channel.take() else {
            error!("RMT channel lost during previous transmission");
            return;
        };

        let pulses = wire_bytes(&self.framebuffer)
            .flat_map(Self::byte_to_pulses)
            .chain(core::iter::once(PulseCode::end_marker()))
            .collect::<alloc::vec::Vec<_>>();

        let transaction = match channel.transmit(&pulses) {
            Ok(t) => t,
            Err(e) => {
                error!("RMT transmit failed: {}", e);
                return;
            }
        };

        self.channel = Some(match transaction.wait() {
            Ok(ch) => ch,
            Err((err, ch)) => {
                error!("RMT transaction failed: {}", err);
                ch
            }
        });

        // WS2812 reset time
        Timer::after(Duration::from_micros(50)).await;
    }

    /// Replace the framebuffer with a composed frame.
    pub fn show(&mut self, frame: &[Srgb<u8>; CELL_COUNT]) {
        self.framebuffer = *frame;
    }

    /// Turn all cells off.
    pub fn clear(&mut self) {
        self.framebuffer.fill(Srgb::new(0, 0, 0));
    }

    // ── Internal helpers ────────────────────────────────────────────────

    /// WS2812 bit timing at 40 MHz RMT clock.
    const fn bit_to_pulse(bit: bool) -> PulseCode {
        if bit {
            // '1': 0.8 µs high (32 ticks), 0.45 µs low (18 ticks)
            PulseCode::new(Level::High, 32, Level::Low, 18)
        } else {
            // '0': 0.4 µs high (16 ticks), 0.85 µs low (34 ticks)
            PulseCode::new(Level::High, 16, Level::Low, 34)
        }
    }

    fn byte_to_pulses(byte: u8) -> [PulseCode; 8] {
        let mut pulses = [PulseCode::default(); 8];
        for (i, pulse) in pulses.iter_mut().enumerate() {
            *pulse = Self::bit_to_pulse((byte >> (7 - i)) & 1 != 0);
        }
        pulses
    }
}
