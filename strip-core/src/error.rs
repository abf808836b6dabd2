//! Fehler-Typen für Buffer-Zugriff und Übertragung

use derive_more::{Display, Error, From};

use crate::traits::TransmissionError;

/// Pixel-Index außerhalb von `[0, N-1]`
///
/// Programmierfehler: nicht abfangen und wiederholen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("pixel index {index} out of range for strip of {len} LEDs")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// Sammel-Fehler für Aufrufer die Buffer-Zugriff und `show()` kombinieren
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    #[display("{_0}")]
    Index(IndexError),
    #[display("{_0}")]
    Transmission(TransmissionError),
}
