// Library-Root: Hardware-Glue für den Single-Light Sketch
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von strip-core
pub use strip_core::{
    ChannelOrder, CorrectionProfile, FrameSink, Pixel, PixelBuffer, ShowReport, StripConfig,
    StripDriver, StripError, TransmissionError,
};
