//! Hardware Abstraction Traits
//!
//! Diese Traits definieren die Schnittstelle zum LED-Bus
//! ohne konkrete Implementierung.

use derive_more::{Display, Error};

/// Fehler-Typ für die Frame-Übertragung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmissionError {
    /// Hardware (noch) nicht bereit
    #[display("LED bus not ready")]
    NotReady,
    /// Schreiben hat zu lange gedauert
    #[display("timeout while writing frame")]
    Timeout,
    /// Allgemeiner Schreibfehler auf dem Bus
    #[display("LED bus write failed")]
    WriteFailed,
}

/// Trait für den Byte-Stream zum LED-Strip
///
/// Abstrahiert den Daten-Pin/das Protokoll (WS2812 clockless, APA102 clocked, ...).
/// Ein Aufruf von `write` bekommt immer einen kompletten Frame.
///
/// # Implementierungen
/// - **Production:** RmtFrameSink (ESP32 RMT Peripheral, in strip-firmware)
/// - **Testing:** MockSink (in-memory Mock, in strip-tests)
pub trait FrameSink {
    /// Schreibt einen kompletten Frame auf den Bus
    ///
    /// # Fehlerbehandlung
    /// Gibt einen `TransmissionError` zurück wenn der Bus-Zugriff fehlschlägt.
    /// Der Aufrufer entscheidet über einen erneuten Versuch.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransmissionError>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransmissionError> {
        (**self).write(bytes)
    }
}
