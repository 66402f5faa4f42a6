//! Analog joystick on ADC1.

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    peripherals::{
        ADC1,
        GPIO1,
        GPIO2,
    },
};

use crate::{
    JoystickResources,
    joystick::ADC_FULL_SCALE,
};

/// Both joystick axes, read with one-shot conversions.
pub struct Joystick<'d> {
    adc: Adc<'d, ADC1<'d>, Blocking>,
    x: AdcPin<GPIO1<'d>, ADC1<'d>>,
    y: AdcPin<GPIO2<'d>, ADC1<'d>>,
}

impl<'d> From<JoystickResources<'d>> for Joystick<'d> {
    fn from(res: JoystickResources<'d>) -> Self {
        let mut config = AdcConfig::new();
        // 11 dB covers the full 0–3.3 V swing of the pots.
        let x = config.enable_pin(res.x, Attenuation::_11dB);
        let y = config.enable_pin(res.y, Attenuation::_11dB);
        let adc = Adc::new(res.adc, config);
        Self { adc, x, y }
    }
}

impl Joystick<'_> {
    /// Read `(x, y)`, each `0..=4095`. A failed conversion reads as centred.
    pub fn read(&mut self) -> (u16, u16) {
        let x = nb::block!(self.adc.read_oneshot(&mut self.x)).unwrap_or_else(|_| {
            warn!("joystick X conversion failed");
            ADC_FULL_SCALE / 2
        });
        let y = nb::block!(self.adc.read_oneshot(&mut self.y)).unwrap_or_else(|_| {
            warn!("joystick Y conversion failed");
            ADC_FULL_SCALE / 2
        });
        (x.min(ADC_FULL_SCALE), y.min(ADC_FULL_SCALE))
    }
}
