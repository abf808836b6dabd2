// Strip Task - Schaltet eine LED ein und zeigt den Frame periodisch an
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use embedded_hal::digital::{OutputPin, PinState};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::rmt::PulseCode;
use esp_hal_smartled::smart_led_buffer;
use static_cell::StaticCell;
use strip_core::{FrameSink, PixelBuffer, StripDriver, StripError};

use crate::config::{
    FRAMES_PER_SECOND, LED_COUNT, LIGHT_COLOR, LIGHT_INDEX, POWER_INDICATOR_GPIO_PIN,
    RMT_CLOCK_MHZ, STRIP_CONFIG,
};
use crate::hal::{RMT_BUFFER_SIZE, RmtFrameSink};

/// Strip Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// - Setzt `LIGHT_INDEX` auf `LIGHT_COLOR`, alle anderen LEDs bleiben aus
/// - Zeigt den Frame mit `FRAMES_PER_SECOND` an
/// - Schaltet die Power-Indicator-LED, solange das Budget die Helligkeit drosselt
///
/// # Trait-basierte Abstraktion
/// `S: FrameSink` und `P: OutputPin` ermöglichen Hardware (RMT, GPIO)
/// oder Mocks.
///
/// # Parameter
/// - `driver`: konfigurierter StripDriver
/// - `indicator`: Ausgang für die Power-Indicator-LED
pub async fn strip_logic<S: FrameSink, P: OutputPin>(
    mut driver: StripDriver<S, LED_COUNT>,
    mut indicator: P,
) {
    let mut buffer = PixelBuffer::<LED_COUNT>::new();
    let mut limited = false;
    let frame_time = Duration::from_hz(FRAMES_PER_SECOND);

    loop {
        match driver.set_and_show(&mut buffer, LIGHT_INDEX, LIGHT_COLOR) {
            Ok(()) => {
                let now_limited = driver.last_report().is_some_and(|report| report.limited);
                if now_limited != limited {
                    limited = now_limited;
                    if let Some(report) = driver.last_report() {
                        info!("Power limit changed: {}", report);
                    }
                    if indicator.set_state(PinState::from(limited)).is_err() {
                        warn!("Failed to drive power indicator");
                    }
                }
            }
            Err(StripError::Index(e)) => {
                // Programmierfehler in der Konfiguration - nicht wiederholen
                error!("Invalid pixel index: {}", e);
                return;
            }
            Err(StripError::Transmission(e)) => {
                // Kein Retry hier, der nächste Frame versucht es erneut
                error!("Failed to show frame: {}", e);
            }
        }

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(frame_time).await;
    }
}

/// Strip Task - Embassy Task für die Frame-Loop
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `strip_logic()` Funktion auf.
///
/// # Parameter
/// - `data_pin`: GPIO8 Peripheral für die Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `indicator_pin`: GPIO15 Peripheral für die Power-Indicator-LED
#[embassy_executor::task]
pub async fn strip_task(
    data_pin: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    indicator_pin: esp_hal::peripherals::GPIO15<'static>,
) {
    // Buffer für die RMT-Pulse des ganzen Strips (zu groß für den Task-Stack)
    static RMT_BUFFER: StaticCell<[PulseCode; RMT_BUFFER_SIZE]> = StaticCell::new();
    let rmt_buffer = RMT_BUFFER.init_with(|| smart_led_buffer!(LED_COUNT));

    let sink = match RmtFrameSink::new(data_pin, rmt_peripheral, RMT_CLOCK_MHZ, rmt_buffer) {
        Ok(sink) => sink,
        Err(e) => {
            error!("Failed to initialize RMT: {}", e);
            return;
        }
    };

    let indicator = Output::new(indicator_pin, Level::Low, OutputConfig::default());
    info!(
        "Strip: {} LEDs, {}, power indicator on GPIO{}",
        LED_COUNT, STRIP_CONFIG, POWER_INDICATOR_GPIO_PIN
    );

    let driver = StripDriver::with_config(sink, STRIP_CONFIG);
    strip_logic(driver, indicator).await;
}
