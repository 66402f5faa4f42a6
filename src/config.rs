//! Compile-time tuning for the game and its inputs.

use embassy_time::Duration;
use palette::Srgb;

use crate::tone::Tone;

// ── Timing ──────────────────────────────────────────────────────────────────

/// Minimum time between two accepted presses of the same button.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// How long a line must stay low after a falling edge to count as a press.
pub const CONTACT_SETTLE: Duration = Duration::from_millis(20);

/// Period of the enemy-movement tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Joystick sampling period; sets the input and display refresh rate.
pub const LOOP_PERIOD: Duration = Duration::from_millis(30);

/// How long a shot trace (and a hit flash) stays on the matrix.
pub const SHOT_VISIBLE: Duration = Duration::from_millis(150);

// ── Input ───────────────────────────────────────────────────────────────────

/// Exponential smoothing weight given to each new joystick sample.
pub const SMOOTHING_FACTOR: f32 = 0.8;

/// Lowest reading the joystick's X axis reports in practice.
pub const JOYSTICK_RAW_MIN: u16 = 29;
/// Highest reading the joystick's X axis reports in practice.
pub const JOYSTICK_RAW_MAX: u16 = 4081;

/// Y above this selects "Play" in the menu.
pub const MENU_PLAY_ABOVE: u16 = 3000;
/// Y below this selects "About" in the menu.
pub const MENU_ABOUT_BELOW: u16 = 1000;

// ── Output ──────────────────────────────────────────────────────────────────

pub const PLAYER_COLOR: Srgb<u8> = Srgb::new(0, 80, 80);
pub const ENEMY_COLOR: Srgb<u8> = Srgb::new(80, 80, 0);
pub const SHOT_COLOR: Srgb<u8> = Srgb::new(80, 0, 0);
pub const HIT_FLASH_COLOR: Srgb<u8> = Srgb::new(80, 80, 80);

pub const FIRE_TONE: Tone = Tone::new(880, 40);
pub const HIT_TONE: Tone = Tone::new(1760, 80);

/// Capacity of the event queue feeding the game task.
pub const EVENT_QUEUE_DEPTH: usize = 16;

/// Capacity of the fire-and-forget tone queue.
pub const TONE_QUEUE_DEPTH: usize = 2;
