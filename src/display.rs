//! SSD1306 display driver — 128×64 monochrome OLED over async I2C.

use esp_hal::{
    Async,
    i2c::master::{
        Config,
        I2c,
    },
    time::Rate,
};
use ssd1306::{
    I2CDisplayInterface,
    Ssd1306Async,
    mode::{
        BufferedGraphicsModeAsync,
        DisplayConfigAsync,
    },
    prelude::*,
};

use crate::{
    DisplayResources,
    screen::{
        self,
        View,
    },
};

type Panel<'a> = Ssd1306Async<
    I2CInterface<I2c<'a, Async>>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// The game's OLED, holding a frame buffer that is pushed with one flush
/// per view.
pub struct Display<'a> {
    panel: Panel<'a>,
}

impl<'a> Display<'a> {
    /// Bring up I2C and the panel. Failure here is fatal.
    pub async fn new(res: DisplayResources<'a>) -> Self {
        let i2c = I2c::new(res.i2c, Config::default().with_frequency(Rate::from_khz(400)))
            .expect("I2C0 init failed")
            .with_sda(res.sda)
            .with_scl(res.scl)
            .into_async();

        let interface = I2CDisplayInterface::new(i2c);
        let mut panel = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init().await.expect("SSD1306 init failed");

        Self { panel }
    }

    /// Draw `view` into the frame buffer and send it to the panel.
    pub async fn show(&mut self, view: View) {
        if let Err(e) = screen::draw(&mut self.panel, view) {
            error!("draw {} failed: {}", view, defmt::Debug2Format(&e));
            return;
        }
        if let Err(e) = self.panel.flush().await {
            error!("SSD1306 flush failed: {}", defmt::Debug2Format(&e));
        }
    }
}
