//! Piezo buzzer driven as a square wave from a GPIO.

use embassy_time::Timer;
use esp_hal::gpio::{
    Level,
    Output,
    OutputConfig,
};

use crate::{
    BuzzerResources,
    tone::Tone,
};

/// Piezo on a plain output pin.
pub struct Buzzer {
    pin: Output<'static>,
}

impl From<BuzzerResources<'static>> for Buzzer {
    fn from(res: BuzzerResources<'static>) -> Self {
        Self {
            pin: Output::new(res.pin, Level::Low, OutputConfig::default()),
        }
    }
}

impl Buzzer {
    pub fn off(&mut self) {
        self.pin.set_low();
    }

    /// Toggle the pin for the length of `tone`, then go quiet.
    ///
    /// Each half period is an async timer wait, so other tasks keep running
    /// while the tone plays.
    pub async fn play(&mut self, tone: Tone) {
        let Some(half_period) = tone.half_period() else {
            Timer::after(tone.duration()).await;
            return;
        };

        for _ in 0..tone.cycles() {
            self.pin.set_high();
            Timer::after(half_period).await;
            self.pin.set_low();
            Timer::after(half_period).await;
        }
        self.off();
    }
}
