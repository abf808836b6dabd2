//! Strip-Konfiguration
//!
//! Einmal beim Start gesetzt, selten geändert.

use crate::types::{ChannelOrder, CorrectionProfile, PowerBudget, PowerModel};

/// Statische Parameter eines `StripDriver`
///
/// Die LED-Anzahl ist kein Feld: sie steckt im Typ (`PixelBuffer<N>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Daten-Pin bzw. Bus-Kennung (nur informativ, der Sink kennt die Hardware)
    pub data_pin: u8,
    pub channel_order: ChannelOrder,
    pub correction: CorrectionProfile,
    /// Globale Helligkeit (0-255)
    pub brightness: u8,
    /// `None` = keine Strom-Begrenzung
    pub power_budget: Option<PowerBudget>,
    pub power_model: PowerModel,
}

impl StripConfig {
    pub const fn new(data_pin: u8) -> Self {
        Self {
            data_pin,
            channel_order: ChannelOrder::Rgb,
            correction: CorrectionProfile::UNCORRECTED,
            brightness: 255,
            power_budget: None,
            power_model: PowerModel::WS2812,
        }
    }

    pub const fn with_channel_order(mut self, channel_order: ChannelOrder) -> Self {
        self.channel_order = channel_order;
        self
    }

    pub const fn with_correction(mut self, correction: CorrectionProfile) -> Self {
        self.correction = correction;
        self
    }

    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    pub const fn with_power_budget(mut self, volts: u8, max_milliamps: u32) -> Self {
        self.power_budget = Some(PowerBudget::new(volts, max_milliamps));
        self
    }

    pub const fn with_power_model(mut self, power_model: PowerModel) -> Self {
        self.power_model = power_model;
        self
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
