//! Square-wave tone description, played by the buzzer task.

use embassy_time::Duration;

/// A tone to emit: frequency and how long to keep it up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    /// Time the output stays at each level. `None` for a silent tone.
    pub const fn half_period(&self) -> Option<Duration> {
        if self.frequency_hz == 0 {
            return None;
        }
        Some(Duration::from_micros(500_000 / self.frequency_hz as u64))
    }

    /// Number of full periods that fit in the tone's duration.
    pub const fn cycles(&self) -> u32 {
        ((self.frequency_hz as u64 * self.duration_ms as u64) / 1000) as u32
    }

    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_period_of_a_kilohertz_tone_is_500us() {
        let tone = Tone::new(1000, 10);
        assert_eq!(tone.half_period(), Some(Duration::from_micros(500)));
        assert_eq!(tone.cycles(), 10);
    }

    #[test]
    fn zero_frequency_is_silent() {
        let rest = Tone::new(0, 100);
        assert_eq!(rest.half_period(), None);
        assert_eq!(rest.cycles(), 0);
        assert_eq!(rest.duration(), Duration::from_millis(100));
    }
}
