// RMT Frame Sink - schreibt kodierte Frames über das RMT Peripheral
//
// Implementiert den FrameSink-Trait aus strip-core für WS2812 LEDs.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;
use strip_core::{FrameSink, TransmissionError};

use crate::config::LED_COUNT;

/// Buffer-Größe für den ganzen Strip (3 Farben * 8 Bits pro LED + 1 Reset)
pub const RMT_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

/// Real Hardware Frame Sink
///
/// Nutzt das ESP32 RMT Peripheral für das WS2812-Timing.
///
/// Der SmartLedsAdapter sendet jedes RGB8 als G, R, B. Die Bytes kommen aber
/// bereits in Kanal-Reihenfolge aus dem StripDriver, deshalb wird beim
/// Zurückwandeln in RGB8 getauscht, damit auf der Leitung exakt die
/// Frame-Bytes landen.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtFrameSink<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
}

impl<'a> RmtFrameSink<'a> {
    /// Erstellt einen neuen RmtFrameSink
    ///
    /// # Parameter
    /// - `data_pin`: GPIO8 Peripheral für die Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für die Pulse (erstellt mit smart_led_buffer!(LED_COUNT))
    ///
    /// # Fehlerbehandlung
    /// Gibt `TransmissionError::NotReady` zurück wenn das RMT nicht
    /// initialisiert werden kann.
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, TransmissionError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| TransmissionError::NotReady)?;

        let led = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Ok(Self { led })
    }
}

impl FrameSink for RmtFrameSink<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransmissionError> {
        if bytes.len() % 3 != 0 || bytes.len() > LED_COUNT * 3 {
            return Err(TransmissionError::WriteFailed);
        }

        // Adapter sendet (g, r, b) → (bytes[0], bytes[1], bytes[2])
        let wire_order = bytes.chunks_exact(3).map(|chunk| RGB8 {
            r: chunk[1],
            g: chunk[0],
            b: chunk[2],
        });

        self.led
            .write(wire_order)
            .map_err(|_| TransmissionError::WriteFailed)
    }
}
