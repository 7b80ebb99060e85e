//! RoboEyes Display Firmware
//!
//! Animated robot eyes on a 128x64 SH1106 OLED module (STM32F042K6).
//! Eye commands arrive over UART; while the link is quiet the eyes cycle
//! through a built-in showcase of moods and animations.

#![no_std]
#![no_main]

mod sh1106;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::mode::Async;
use embassy_stm32::peripherals::{I2C1, USART2};
use embassy_stm32::usart::{self, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Ticker, Timer};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use {defmt_rtt as _, panic_probe as _};

use crate::sh1106::Sh1106;
use roboeyes_core::config::AutoMotion;
use roboeyes_core::traits::RngSource;
use roboeyes_core::{Clock, Engine, EyesConfig, Showcase};
use roboeyes_display::{GraphicsCanvas, Palette};
use roboeyes_protocol::{EyeCommand, FrameParser};

bind_interrupts!(struct Irqs {
    USART2 => usart::InterruptHandler<USART2>;
    I2C1 => i2c::EventInterruptHandler<I2C1>, i2c::ErrorInterruptHandler<I2C1>;
});

type Display = Sh1106<I2c<'static, Async, i2c::Master>>;

/// Commands decoded from the UART link, consumed by the eyes task
static COMMANDS: Channel<CriticalSectionRawMutex, EyeCommand, 8> = Channel::new();

/// How often the eyes task wakes up; the engine throttles to its frame rate
const POLL_MS: u64 = 1;

/// Millisecond clock backed by the embassy time driver
struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u32 {
        // Wraps after ~49 days; the engine compares instants with wrapping math
        Instant::now().as_millis() as u32
    }
}

fn eyes_config() -> EyesConfig {
    let mut config = EyesConfig::for_screen(sh1106::WIDTH as u16, sh1106::HEIGHT as u16);
    config.autoblink = AutoMotion::new(true, 3, 2);
    config.idle = AutoMotion::new(true, 2, 2);
    config
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("RoboEyes Display Firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.timeout = Duration::from_millis(100);

    let i2c = I2c::new(
        p.I2C1, p.PB6, p.PB7, Irqs, p.DMA1_CH2, p.DMA1_CH3, i2c_config,
    );

    let mut display = Sh1106::new(i2c);
    match display.init().await {
        Ok(()) => info!("OLED initialized"),
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }

    // Setup UART for commands (PA2=TX, PA3=RX on F042K6)
    let mut uart_config = usart::Config::default();
    uart_config.baudrate = 115200;

    let uart = unwrap!(Uart::new(
        p.USART2,
        p.PA3, // RX
        p.PA2, // TX
        Irqs,
        p.DMA1_CH4,
        p.DMA1_CH5,
        uart_config,
    ));

    // Nothing is sent back to the host
    let (_tx, rx) = uart.split();

    unwrap!(spawner.spawn(uart_rx_task(rx)));
    unwrap!(spawner.spawn(eyes_task(display)));

    info!("All tasks spawned");
}

/// UART receive task - decodes eye commands from the host
#[embassy_executor::task]
async fn uart_rx_task(mut rx: usart::UartRx<'static, Async>) {
    info!("UART RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(()) => match parser.feed(buf[0]) {
                Ok(Some(frame)) => match EyeCommand::from_frame(&frame) {
                    Ok(cmd) => COMMANDS.send(cmd).await,
                    Err(e) => warn!("Failed to parse command: {:?}", e),
                },
                Ok(None) => {}
                Err(e) => warn!("Frame error: {:?}", e),
            },
            Err(e) => {
                warn!("UART read error: {:?}", e);
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}

/// Eyes task - runs the animation engine and flushes finished frames
#[embassy_executor::task]
async fn eyes_task(display: Display) {
    info!("Eyes task started");

    let canvas = GraphicsCanvas::new(display, Palette::MONOCHROME);
    let rng = RngSource::new(SmallRng::seed_from_u64(Instant::now().as_ticks()));

    let mut eyes = match Engine::new(eyes_config(), canvas, UptimeClock, rng) {
        Ok(eyes) => eyes,
        Err(e) => {
            error!("Invalid eyes configuration: {:?}", e);
            return;
        }
    };

    let mut showcase = Showcase::new(UptimeClock.now_ms());
    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS));

    loop {
        while let Ok(cmd) = COMMANDS.try_receive() {
            // Host traffic pauses the showcase
            showcase.hold(UptimeClock.now_ms());
            if let Err(e) = eyes.apply(&cmd) {
                warn!("Rejected command {:?}: {:?}", cmd, e);
            }
        }

        if let Some(cmd) = showcase.poll(UptimeClock.now_ms()) {
            trace!("Showcase step {:?}", cmd);
            if let Err(e) = eyes.apply(&cmd) {
                warn!("Showcase command rejected: {:?}", e);
            }
        }

        eyes.tick();
        let canvas = eyes.canvas_mut();
        if canvas.take_frame() {
            if let Err(e) = canvas.target_mut().flush().await {
                warn!("Display flush failed: {:?}", e);
            }
        }

        ticker.next().await;
    }
}
