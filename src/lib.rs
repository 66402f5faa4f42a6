//! # space_war
//!
//! Space War: a single-player lane shooter for an ESP32-S3 board with a 5×5
//! WS2812 matrix, an analog joystick, two buttons and a 128×64 SSD1306.
//!
//! The joystick moves the player token across five lanes at the bottom of the
//! matrix, an enemy token drifts randomly across the top, and button B fires.
//! A shot scores when the enemy is in the player's lane or next to it.
//!
//! The crate has two halves:
//! - **Game core** (always built, host-testable): [`Lane`], the joystick
//!   [`LaneSampler`], the press [`Debouncer`], the [`Game`] state machine,
//!   the [`LedMatrix`] layer model and the [`screen`] renderer.
//! - **Board support** (`board` feature): pin map, WS2812 driver, buttons,
//!   joystick ADC, SSD1306 display and buzzer.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = space_war::init();
//! let resources = space_war::split_resources!(peripherals);
//!
//! let display = space_war::Display::new(resources.display).await;
//! let buttons: space_war::Buttons = resources.buttons.into();
//! let leds: space_war::Leds = resources.leds.into();
//! ```

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod debounce;
pub mod event;
pub mod game;
pub mod joystick;
pub mod lane;
pub mod matrix;
pub mod screen;
pub mod tone;

#[cfg(feature = "board")]
mod board;
#[cfg(feature = "board")]
mod buttons;
#[cfg(feature = "board")]
mod buzzer;
#[cfg(feature = "board")]
mod display;
#[cfg(feature = "board")]
mod leds;
#[cfg(feature = "board")]
mod stick;

#[cfg(feature = "board")]
pub use board::*;
#[cfg(feature = "board")]
pub use buttons::{
    Buttons,
    settled_press,
};
#[cfg(feature = "board")]
pub use buzzer::Buzzer;
#[cfg(feature = "board")]
pub use display::Display;
#[cfg(feature = "board")]
pub use leds::Leds;
#[cfg(feature = "board")]
pub use stick::Joystick;

pub use debounce::Debouncer;
pub use event::{
    Button,
    Event,
    EventChannel,
};
pub use game::{
    Game,
    GameState,
    Redraw,
};
pub use joystick::{
    JoystickCalibration,
    LaneSampler,
    MenuSelection,
};
pub use lane::Lane;
pub use matrix::{
    CELL_COUNT,
    Layer,
    LedMatrix,
};
pub use screen::View;
pub use tone::Tone;

/// StaticCell helper — allocates a value into a `static` exactly once.
#[cfg(feature = "board")]
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}
