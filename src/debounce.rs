//! Minimum-interval filter for button presses.
//!
//! A press is accepted only if at least the debounce window has passed since
//! the last *accepted* press of the same button. Rejected edges are dropped,
//! never deferred.

use embassy_time::{
    Duration,
    Instant,
};

use crate::event::Button;

/// Per-button acceptance clock.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Duration,
    last_accepted: [Option<Instant>; Button::COUNT],
}

impl Debouncer {
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: [None; Button::COUNT],
        }
    }

    /// Decide whether an edge on `button` seen at `now` is a new press.
    pub fn accept(&mut self, button: Button, now: Instant) -> bool {
        let window = self.window;
        let slot = &mut self.last_accepted[button.index()];
        let accepted = match *slot {
            None => true,
            Some(last) => now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= window),
        };
        if accepted {
            *slot = Some(now);
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEBOUNCE_WINDOW;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn first_press_is_always_accepted() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::A, at(0)));
    }

    #[test]
    fn press_inside_window_is_dropped() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::A, at(1_000)));
        assert!(!debouncer.accept(Button::A, at(1_100)));
        assert!(!debouncer.accept(Button::A, at(1_499)));
    }

    #[test]
    fn press_at_window_boundary_is_accepted() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::A, at(1_000)));
        assert!(debouncer.accept(Button::A, at(1_500)));
    }

    #[test]
    fn rejected_edges_do_not_extend_the_window() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::B, at(0)));
        assert!(!debouncer.accept(Button::B, at(400)));
        // Measured from the accepted press at 0, not the rejected one at 400.
        assert!(debouncer.accept(Button::B, at(500)));
    }

    #[test]
    fn buttons_have_independent_clocks() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::A, at(0)));
        assert!(debouncer.accept(Button::B, at(50)));
        assert!(!debouncer.accept(Button::A, at(100)));
        assert!(!debouncer.accept(Button::B, at(120)));
    }

    #[test]
    fn near_simultaneous_presses_on_both_buttons_are_kept() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::A, at(0)));
        assert!(debouncer.accept(Button::B, at(5)));
    }

    #[test]
    fn clock_going_backwards_is_rejected() {
        let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
        assert!(debouncer.accept(Button::A, at(2_000)));
        assert!(!debouncer.accept(Button::A, at(1_000)));
    }
}
