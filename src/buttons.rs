//! The A and B push buttons.
//!
//! Both lines idle high and pull low on press. A press is a falling edge that
//! is still low after the contact settle time; the caller then applies the
//! acceptance window with a [`Debouncer`](crate::Debouncer).
//!
//! Each line is watched on its own. A press on one button is never lost
//! while the other is still settling.

use embassy_time::Timer;
use esp_hal::gpio::{
    Input,
    InputConfig,
    Pull,
};

use crate::{
    ButtonResources,
    config::CONTACT_SETTLE,
};

/// Both buttons, ready for async edge detection.
pub struct Buttons {
    pub a: Input<'static>,
    pub b: Input<'static>,
}

impl From<ButtonResources<'static>> for Buttons {
    fn from(res: ButtonResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Self {
            a: Input::new(res.a, pull_up),
            b: Input::new(res.b, pull_up),
        }
    }
}

/// Wait for a falling edge on `input` that stays low through the settle time.
pub async fn settled_press(input: &mut Input<'_>) {
    loop {
        input.wait_for_falling_edge().await;
        Timer::after(CONTACT_SETTLE).await;
        if input.is_low() {
            return;
        }
    }
}
