//! Messages from the input sources to the game task.

use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::Channel,
};

use crate::config::EVENT_QUEUE_DEPTH;

/// The two push buttons.
///
/// A confirms menu entries, B fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
}

impl Button {
    pub const COUNT: usize = 2;

    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// One input occurrence, applied to the game in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A debounced press.
    ButtonPressed(Button),
    /// The periodic enemy timer fired.
    TickElapsed,
    /// Raw joystick reading for this main-loop iteration.
    JoystickSample { x: u16, y: u16 },
}

/// Queue shared by all producers; the game task is its only consumer.
pub type EventChannel = Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_DEPTH>;
