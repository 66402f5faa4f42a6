//! Space War firmware.
//!
//! Three producers feed one event queue:
//! - `input_task` samples the joystick every main-loop period,
//! - one `button_task` per button reports debounced presses of A (confirm)
//!   and B (fire),
//! - `tick_task` fires the enemy timer once per second.
//!
//! `game_task` is the only consumer and the only task that touches the LED
//! matrix and the display, so game state has a single writer.

#![no_std]
#![no_main]

use defmt::{
    info,
    trace,
    warn,
};
use embassy_executor::Spawner;
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::Channel,
};
use embassy_time::{
    Duration,
    Instant,
    Ticker,
    Timer,
};
use esp_backtrace as _;
use esp_hal::{
    gpio::Input,
    timer::timg::TimerGroup,
};
use esp_println as _;
#[allow(clippy::wildcard_imports)]
use space_war::*;
use space_war::config::{
    DEBOUNCE_WINDOW,
    LOOP_PERIOD,
    SHOT_VISIBLE,
    TICK_PERIOD,
    TONE_QUEUE_DEPTH,
};

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

static EVENTS: EventChannel = EventChannel::new();

static TONES: Channel<CriticalSectionRawMutex, Tone, TONE_QUEUE_DEPTH> = Channel::new();

#[embassy_executor::task]
async fn input_task(joystick: &'static mut Joystick<'static>) {
    info!("Input task started");
    loop {
        let (x, y) = joystick.read();
        if EVENTS.try_send(Event::JoystickSample { x, y }).is_err() {
            warn!("event queue full, joystick sample dropped");
        }
        Timer::after(LOOP_PERIOD).await;
    }
}

#[embassy_executor::task(pool_size = 2)]
async fn button_task(input: &'static mut Input<'static>, button: Button) {
    info!("Button {} task started", button);
    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW);
    loop {
        settled_press(input).await;
        if debouncer.accept(button, Instant::now()) {
            info!("Button {} pressed", button);
            EVENTS.send(Event::ButtonPressed(button)).await;
        } else {
            trace!("Button {} bounce ignored", button);
        }
    }
}

#[embassy_executor::task]
async fn tick_task() {
    info!("Tick task started");
    let mut ticker = Ticker::every(TICK_PERIOD);
    loop {
        ticker.next().await;
        EVENTS.send(Event::TickElapsed).await;
    }
}

#[embassy_executor::task]
async fn buzzer_task(buzzer: &'static mut Buzzer) {
    info!("Buzzer task started");
    buzzer.off();
    loop {
        let tone = TONES.receive().await;
        buzzer.play(tone).await;
    }
}

/// Push one redraw to the peripherals.
async fn apply(redraw: Redraw, game: &Game, leds: &mut Leds<'static>, display: &mut Display<'static>) {
    if let Some(tone) = redraw.tone {
        TONES.try_send(tone).ok();
    }
    if redraw.leds {
        leds.show(&game.matrix().frame());
        leds.update().await;
    }
    if let Some(view) = redraw.view {
        display.show(view).await;
    }
}

#[embassy_executor::task]
async fn game_task(
    leds: &'static mut Leds<'static>,
    display: &'static mut Display<'static>,
    seed: u32,
) {
    info!("Space War started");
    let mut game = Game::new(seed);
    apply(game.initial_redraw(), &game, leds, display).await;

    loop {
        let event = EVENTS.receive().await;
        let redraw = game.handle(event);
        apply(redraw, &game, leds, display).await;

        if redraw.shot {
            Timer::after(SHOT_VISIBLE).await;
            let cleared = game.end_shot();
            apply(cleared, &game, leds, display).await;
        }
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = space_war::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let leds = mk_static!(Leds<'static>, resources.leds.into());
    leds.clear();
    leds.update().await;

    let display = mk_static!(Display<'static>, Display::new(resources.display).await);
    let Buttons { a, b } = Buttons::from(resources.buttons);
    let button_a = mk_static!(Input<'static>, a);
    let button_b = mk_static!(Input<'static>, b);
    let joystick = mk_static!(Joystick<'static>, resources.joystick.into());
    let buzzer = mk_static!(Buzzer, resources.buzzer.into());

    spawner.must_spawn(game_task(leds, display, random_seed()));
    spawner.must_spawn(input_task(joystick));
    spawner.must_spawn(button_task(button_a, Button::A));
    spawner.must_spawn(button_task(button_b, Button::B));
    spawner.must_spawn(tick_task());
    spawner.must_spawn(buzzer_task(buzzer));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
