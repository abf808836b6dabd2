//! Strip Core - Platform-agnostic Frame-Buffer und Output-Stufe
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert den Pixel-Buffer, die Helligkeits-/Power-Logik und den
//! `FrameSink`-Trait, den die Firmware (oder ein Test-Mock) implementiert.

#![no_std]

pub mod buffer;
pub mod config;
pub mod driver;
pub mod error;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use buffer::PixelBuffer;
pub use config::StripConfig;
pub use driver::StripDriver;
pub use error::{IndexError, StripError};
pub use logic::{PowerLimit, limit_brightness, scale8};
pub use rgb::RGB8;
pub use traits::{FrameSink, TransmissionError};
pub use types::{
    ChannelOrder, CorrectionProfile, ParseChannelOrderError, Pixel, PowerBudget, PowerModel,
    ShowReport,
};
