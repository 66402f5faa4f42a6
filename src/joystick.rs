//! Joystick sampling: raw ADC counts to a steady lane, and menu selection.
//!
//! The X axis drives the player lane through an exponential moving average,
//! which keeps the token from flickering between neighbouring lanes on a
//! noisy pot. The Y axis only picks the menu entry and has a wide dead band.

use crate::{
    config::{
        JOYSTICK_RAW_MAX,
        JOYSTICK_RAW_MIN,
        MENU_ABOUT_BELOW,
        MENU_PLAY_ABOVE,
        SMOOTHING_FACTOR,
    },
    lane::Lane,
};

/// Full-scale reading of the 12-bit ADC.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Raw range that maps onto lanes 1 and 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickCalibration {
    min: u16,
    max: u16,
}

impl JoystickCalibration {
    /// Calibration covering `min..=max`. A degenerate range falls back to
    /// the full ADC scale.
    pub const fn new(min: u16, max: u16) -> Self {
        if min < max {
            Self { min, max }
        } else {
            Self {
                min: 0,
                max: ADC_FULL_SCALE,
            }
        }
    }

    pub const fn min(&self) -> u16 {
        self.min
    }

    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Affine map of `raw` onto `1.0..=5.0`, rounded to the nearest lane
    /// number. Readings outside the calibration land outside `1..=5`.
    pub fn map(&self, raw: u16) -> i32 {
        // `new` keeps min < max, so the span is at least one count.
        let span = f32::from(self.max.saturating_sub(self.min).max(1));
        let lanes = (Lane::MAX.get() - Lane::MIN.get()) as f32;
        let scaled = (f32::from(raw) - f32::from(self.min)) * lanes / span + f32::from(Lane::MIN.get());
        libm::roundf(scaled) as i32
    }
}

impl Default for JoystickCalibration {
    fn default() -> Self {
        Self::new(JOYSTICK_RAW_MIN, JOYSTICK_RAW_MAX)
    }
}

/// Turns raw X-axis readings into a lane, one sample per main-loop tick.
#[derive(Clone, Debug)]
pub struct LaneSampler {
    calibration: JoystickCalibration,
    alpha: f32,
    smoothed: f32,
}

impl LaneSampler {
    pub fn new(calibration: JoystickCalibration) -> Self {
        Self::starting_at(calibration, Lane::CENTER)
    }

    /// Sampler whose average starts on `lane`.
    pub fn starting_at(calibration: JoystickCalibration, lane: Lane) -> Self {
        Self {
            calibration,
            alpha: SMOOTHING_FACTOR,
            smoothed: f32::from(lane.get()),
        }
    }

    /// Feed one raw reading and return the lane it settles on.
    pub fn sample(&mut self, raw: u16) -> Lane {
        let mapped = self.calibration.map(raw) as f32;
        self.smoothed += (mapped - self.smoothed) * self.alpha;
        let lane = Lane::saturating(libm::roundf(self.smoothed) as i32);
        trace!("joystick raw={} mapped={} lane={}", raw, mapped, lane.get());
        lane
    }

    /// Current moving average, before rounding.
    pub const fn smoothed(&self) -> f32 {
        self.smoothed
    }
}

impl Default for LaneSampler {
    fn default() -> Self {
        Self::new(JoystickCalibration::default())
    }
}

/// Entry highlighted on the menu screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuSelection {
    #[default]
    Play,
    About,
}

impl MenuSelection {
    /// Selection after reading `y`: stick up picks Play, stick down picks
    /// About, anything between keeps `current`.
    pub const fn from_y(y: u16, current: Self) -> Self {
        if y > MENU_PLAY_ABOVE {
            Self::Play
        } else if y < MENU_ABOUT_BELOW {
            Self::About
        } else {
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calibration_endpoints_map_to_outer_lanes() {
        let cal = JoystickCalibration::default();
        assert_eq!(cal.map(JOYSTICK_RAW_MIN), 1);
        assert_eq!(cal.map(JOYSTICK_RAW_MAX), 5);
        assert_eq!(cal.map((JOYSTICK_RAW_MIN + JOYSTICK_RAW_MAX) / 2), 3);
    }

    #[test]
    fn degenerate_calibration_uses_full_scale() {
        let cal = JoystickCalibration::new(100, 100);
        assert_eq!(cal, JoystickCalibration::new(0, ADC_FULL_SCALE));
    }

    #[test]
    fn inverted_calibration_never_panics() {
        let cal = JoystickCalibration::new(3000, 1000);
        assert_eq!((cal.min(), cal.max()), (0, ADC_FULL_SCALE));
        let mut sampler = LaneSampler::new(cal);
        for raw in [0, 1000, 2000, 3000, ADC_FULL_SCALE] {
            assert!((1..=5).contains(&sampler.sample(raw).get()));
        }
    }

    #[test]
    fn every_raw_reading_yields_a_valid_lane() {
        // Narrow calibration so both ends of the ADC fall outside it.
        let cal = JoystickCalibration::new(1000, 3000);
        let mut sampler = LaneSampler::new(cal);
        for raw in (0..=ADC_FULL_SCALE).chain((0..=ADC_FULL_SCALE).rev()) {
            let lane = sampler.sample(raw);
            assert!((1..=5).contains(&lane.get()), "raw {raw} gave {lane:?}");
        }
    }

    #[test]
    fn extremes_saturate_to_edge_lanes() {
        let cal = JoystickCalibration::new(1000, 3000);
        let mut low = LaneSampler::new(cal);
        let mut high = LaneSampler::new(cal);
        for _ in 0..20 {
            low.sample(0);
            high.sample(ADC_FULL_SCALE);
        }
        assert_eq!(low.sample(0), Lane::MIN);
        assert_eq!(high.sample(ADC_FULL_SCALE), Lane::MAX);
    }

    #[test]
    fn average_converges_geometrically() {
        let cal = JoystickCalibration::default();
        let mut sampler = LaneSampler::starting_at(cal, Lane::MIN);
        let target = 5.0_f32;
        let start_error = (sampler.smoothed() - target).abs();

        for k in 1..=10 {
            sampler.sample(JOYSTICK_RAW_MAX);
            let bound = start_error * (1.0 - SMOOTHING_FACTOR).powi(k) + 1e-4;
            let error = (sampler.smoothed() - target).abs();
            assert!(error <= bound, "tick {k}: error {error} > bound {bound}");
        }
        assert!((sampler.smoothed() - target).abs() < 0.5);
        assert_eq!(sampler.sample(JOYSTICK_RAW_MAX), Lane::MAX);
    }

    #[test]
    fn single_spike_is_not_followed_all_the_way() {
        let cal = JoystickCalibration::default();
        let mut sampler = LaneSampler::starting_at(cal, Lane::MIN);
        // One full-scale reading moves the average to 1 + 4 * 0.8 = 4.2.
        assert_eq!(sampler.sample(JOYSTICK_RAW_MAX).get(), 4);
        assert_eq!(sampler.sample(JOYSTICK_RAW_MAX), Lane::MAX);
    }

    #[test]
    fn menu_bands_with_dead_zone() {
        use MenuSelection::*;
        assert_eq!(MenuSelection::from_y(4095, About), Play);
        assert_eq!(MenuSelection::from_y(0, Play), About);
        assert_eq!(MenuSelection::from_y(2048, About), About);
        assert_eq!(MenuSelection::from_y(2048, Play), Play);
        assert_eq!(MenuSelection::from_y(MENU_PLAY_ABOVE, About), About);
        assert_eq!(MenuSelection::from_y(MENU_ABOUT_BELOW, Play), Play);
    }
}
