//! Pin map and board bring-up.

use esp_hal::{
    Blocking,
    assign_resources,
    clock::{
        Clock,
        CpuClock,
    },
    rmt::{
        Rmt,
        Tx,
        TxChannelConfig,
        TxChannelCreator as _,
    },
    rom,
    time::Rate,
};

use crate::Leds;

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            sda: GPIO8,
            scl: GPIO9,
            i2c: I2C0,
        },
        buttons: ButtonResources<'d> {
            a: GPIO13,
            b: GPIO38,
        },
        joystick: JoystickResources<'d> {
            x: GPIO1,
            y: GPIO2,
            adc: ADC1,
        },
        leds: LedResources<'d> {
            io: GPIO18,
            rmt: RMT,
        },
        buzzer: BuzzerResources<'d> {
            pin: GPIO20,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Minimal CPU clock switcher for ESP32-S3.
///
/// Steps through an intermediate frequency before reaching the target,
/// which is required by the hardware.
fn set_cpu_clock(cpu_clock_speed: CpuClock) {
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .sysclk_conf()
        .modify(|_, w| unsafe { w.soc_clk_sel().bits(1) });
    let _ = esp_hal::peripherals::SYSTEM::regs()
        .cpu_per_conf()
        .modify(|_, w| unsafe {
            let _ = w.pll_freq_sel().set_bit();
            w.cpuperiod_sel().bits(match cpu_clock_speed {
                CpuClock::_80MHz => 0,
                CpuClock::_160MHz => 1,
                CpuClock::_240MHz => 2,
                _ => panic!("Unsupported CPU clock speed"),
            })
        });

    rom::ets_update_cpu_frequency_rom(cpu_clock_speed.frequency().as_mhz());
}

/// Initialise the board and return the raw peripheral set.
///
/// Call this once at the top of `main`, then break the peripherals into
/// typed groups with [`split_resources!`].
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    set_cpu_clock(CpuClock::_160MHz);
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

/// Seed for the enemy's random walk, from the hardware RNG.
pub fn random_seed() -> u32 {
    esp_hal::rng::Rng::new().random()
}

// ── Resource → peripheral conversions ───────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl<'a> From<LedResources<'a>> for esp_hal::rmt::Channel<'a, Blocking, Tx> {
    fn from(res: LedResources<'a>) -> Self {
        let rmt = Rmt::new(res.rmt, Rate::from_mhz(40)).expect("RMT init failed");
        let tx_config = TxChannelConfig::default().with_clk_divider(1);
        rmt.channel0
            .configure_tx(res.io, tx_config)
            .expect("RMT channel 0 config failed")
    }
}

impl<'a> From<LedResources<'a>> for Leds<'a> {
    fn from(res: LedResources<'a>) -> Self {
        Leds::new(res.into())
    }
}
