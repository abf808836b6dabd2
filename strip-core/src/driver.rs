//! Strip-Driver: Korrektur, Power-Limit und Übertragung
//!
//! Besitzt die Konfiguration und den Sink, leiht den Pixel-Buffer
//! nur während `show()`.

use crate::buffer::PixelBuffer;
use crate::config::StripConfig;
use crate::error::StripError;
use crate::logic::{channel_scales, encode_pixel, estimate_milliamps, limit_brightness};
use crate::traits::{FrameSink, TransmissionError};
use crate::types::{ChannelOrder, CorrectionProfile, Pixel, PowerBudget, PowerModel, ShowReport};

/// Treiber für einen Strip mit `N` LEDs
///
/// Kein Zustandsautomat: jeder `show()`-Aufruf ist eine reine
/// Transformation Buffer → Bytes, abgesehen von der statischen Konfiguration.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `S: FrameSink` ermöglicht:
/// - Real Hardware (RmtFrameSink) im Production-Code
/// - Mock Implementation (MockSink) in Tests
pub struct StripDriver<S: FrameSink, const N: usize> {
    sink: S,
    config: StripConfig,
    /// Scratch-Buffer für den kodierten Frame (3 Bytes pro LED)
    frame: [[u8; 3]; N],
    last_report: Option<ShowReport>,
}

impl<S: FrameSink, const N: usize> StripDriver<S, N> {
    /// Erstellt einen Driver mit Default-Konfiguration (RGB, keine Korrektur,
    /// volle Helligkeit, kein Budget)
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, StripConfig::default())
    }

    pub fn with_config(sink: S, config: StripConfig) -> Self {
        Self {
            sink,
            config,
            frame: [[0; 3]; N],
            last_report: None,
        }
    }

    /// Setzt Kanal-Reihenfolge und Farbkorrektur
    pub fn configure(&mut self, channel_order: ChannelOrder, correction: CorrectionProfile) {
        self.config.channel_order = channel_order;
        self.config.correction = correction;
    }

    /// Setzt die globale Helligkeit (0-255)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.config.brightness = brightness;
    }

    /// Setzt die Helligkeit aus einem beliebigen Integer, begrenzt auf [0, 255]
    pub fn set_brightness_clamped(&mut self, brightness: i32) {
        self.set_brightness(brightness.clamp(0, 255) as u8);
    }

    pub fn brightness(&self) -> u8 {
        self.config.brightness
    }

    pub fn set_power_budget(&mut self, volts: u8, max_milliamps: u32) {
        self.config.power_budget = Some(PowerBudget::new(volts, max_milliamps));
    }

    pub fn clear_power_budget(&mut self) {
        self.config.power_budget = None;
    }

    pub fn set_power_model(&mut self, model: PowerModel) {
        self.config.power_model = model;
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Geschätzter Strom für `buffer` bei gespeicherter Helligkeit, ohne Limit
    pub fn estimate_milliamps(&self, buffer: &PixelBuffer<N>) -> u32 {
        let scales = channel_scales(self.config.correction, self.config.brightness);
        estimate_milliamps(buffer.as_slice(), scales, &self.config.power_model)
    }

    /// Überträgt einen kompletten Frame
    ///
    /// Ablauf:
    /// 1. Korrektur × Helligkeit pro Kanal
    /// 2. Strom abschätzen, bei Überschreitung des Budgets die Helligkeit
    ///    nur für diesen Frame gleichmäßig reduzieren
    /// 3. Alle Pixel in Kanal-Reihenfolge kodieren
    /// 4. Frame mit einem einzigen `write()` an den Sink übergeben
    ///
    /// # Fehlerbehandlung
    /// Gibt den `TransmissionError` des Sinks zurück. Kein automatischer
    /// Retry, `last_report()` bleibt dann unverändert.
    pub fn show(&mut self, buffer: &PixelBuffer<N>) -> Result<(), TransmissionError> {
        let StripConfig {
            channel_order,
            correction,
            brightness,
            power_budget,
            power_model,
            ..
        } = self.config;

        let (applied, estimated_milliamps) = match power_budget {
            Some(budget) => {
                let limit = limit_brightness(
                    buffer.as_slice(),
                    correction,
                    brightness,
                    &power_model,
                    budget.max_milliamps,
                );
                (limit.brightness, limit.estimated_milliamps)
            }
            None => (
                brightness,
                estimate_milliamps(
                    buffer.as_slice(),
                    channel_scales(correction, brightness),
                    &power_model,
                ),
            ),
        };
        // Auch bei Helligkeit 0 gedrosselt, wenn schon die Grundlast das Budget sprengt
        let limited = applied < brightness
            || power_budget.is_some_and(|budget| estimated_milliamps > budget.max_milliamps);

        #[cfg(feature = "defmt")]
        if limited {
            match power_budget {
                Some(budget) if estimated_milliamps > budget.max_milliamps => defmt::warn!(
                    "Power budget {} mA below fixed draw {} mA, sending dark frame",
                    budget.max_milliamps,
                    estimated_milliamps
                ),
                _ => defmt::debug!(
                    "Power limit: brightness {} -> {} ({} mA)",
                    brightness,
                    applied,
                    estimated_milliamps
                ),
            }
        }

        let scales = channel_scales(correction, applied);
        for (slot, pixel) in self.frame.iter_mut().zip(buffer.iter()) {
            *slot = encode_pixel(*pixel, scales, channel_order);
        }

        self.sink.write(self.frame.as_flattened())?;

        self.last_report = Some(ShowReport {
            requested_brightness: brightness,
            applied_brightness: applied,
            estimated_milliamps,
            limited,
        });
        Ok(())
    }

    /// Setzt ein Pixel und zeigt den Buffer sofort an
    pub fn set_and_show(
        &mut self,
        buffer: &mut PixelBuffer<N>,
        index: usize,
        pixel: Pixel,
    ) -> Result<(), StripError> {
        buffer.set(index, pixel)?;
        self.show(buffer)?;
        Ok(())
    }

    /// Schaltet alle LEDs aus (sendet einen schwarzen Frame)
    ///
    /// Der Buffer der Anwendung wird dabei nicht verändert.
    pub fn clear(&mut self) -> Result<(), TransmissionError> {
        self.show(&PixelBuffer::new())
    }

    /// Ergebnis des letzten erfolgreichen `show()`
    pub fn last_report(&self) -> Option<ShowReport> {
        self.last_report
    }

    /// Zuletzt kodierter Frame (Übertragungs-Reihenfolge, 3 × N Bytes)
    pub fn frame_bytes(&self) -> &[u8] {
        self.frame.as_flattened()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
