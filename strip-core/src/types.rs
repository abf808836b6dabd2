//! Core Types für die LED-Strip-Ausgabe
//!
//! Datenstrukturen ohne Hardware-Dependencies

use derive_more::{Display, Error};
use rgb::RGB8;

/// Ein Pixel: drei 8-Bit-Kanäle (Rot, Grün, Blau)
///
/// Value-Type (`Copy`), wird nie in-place verändert.
pub type Pixel = RGB8;

// ============================================================================
// Kanal-Reihenfolge
// ============================================================================

/// Physikalische Verdrahtungs-Reihenfolge der Farbkanäle
///
/// Wird erst beim Senden als Byte-Remap angewendet, der Buffer bleibt RGB.
/// WS2812-Strips sind typischerweise [`ChannelOrder::Grb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ChannelOrder {
    /// Alle sechs Permutationen
    pub const ALL: [ChannelOrder; 6] = [
        Self::Rgb,
        Self::Rbg,
        Self::Grb,
        Self::Gbr,
        Self::Brg,
        Self::Bgr,
    ];

    /// Ordnet die Kanäle eines Pixels in Übertragungs-Reihenfolge an
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use rgb::RGB8;
    /// # use strip_core::ChannelOrder;
    /// let red = RGB8 { r: 255, g: 0, b: 0 };
    /// assert_eq!(ChannelOrder::Grb.arrange(red), [0, 255, 0]);
    /// ```
    pub const fn arrange(self, pixel: Pixel) -> [u8; 3] {
        let Pixel { r, g, b } = pixel;
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Rbg => "RBG",
            Self::Grb => "GRB",
            Self::Gbr => "GBR",
            Self::Brg => "BRG",
            Self::Bgr => "BGR",
        }
    }
}

/// Fehler beim Parsen einer Kanal-Reihenfolge aus einem String
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[display("unknown channel order (expected a permutation of RGB)")]
pub struct ParseChannelOrderError;

impl core::convert::TryFrom<&str> for ChannelOrder {
    type Error = ParseChannelOrderError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(name))
            .ok_or(ParseChannelOrderError)
    }
}

impl core::str::FromStr for ChannelOrder {
    type Err = ParseChannelOrderError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::try_from(name)
    }
}

impl core::fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Farbkorrektur
// ============================================================================

/// Multiplikative Farbkorrektur pro Kanal
///
/// Faktoren als 8-Bit Fixed-Point: 255 = 100%, 0 = 0%.
/// Gleicht die Farbtemperatur-Abweichung der physikalischen LEDs aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CorrectionProfile {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl CorrectionProfile {
    /// Keine Korrektur (alle Kanäle 100%)
    pub const UNCORRECTED: Self = Self::from_rgb(0xFF_FF_FF);

    /// Typischer SMD5050 LED-Strip (R 100%, G 69%, B 94%)
    pub const TYPICAL_LED_STRIP: Self = Self::from_rgb(0xFF_B0_F0);

    /// Typische 8mm "Pixel-String" LEDs (R 100%, G 88%, B 55%)
    pub const TYPICAL_PIXEL_STRING: Self = Self::from_rgb(0xFF_E0_8C);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Erstellt eine Korrektur aus einem u32-Farbwert (0xRRGGBB)
    ///
    /// Beispiel: `0xFFAA78` skaliert R mit 100%, G mit 67%, B mit 47%
    pub const fn from_rgb(color: u32) -> Self {
        Self {
            red: ((color >> 16) & 0xFF) as u8,
            green: ((color >> 8) & 0xFF) as u8,
            blue: (color & 0xFF) as u8,
        }
    }

    /// Prüft ob die Korrektur aktiv ist (nicht alle Kanäle auf 100%)
    pub const fn is_active(&self) -> bool {
        self.red != 255 || self.green != 255 || self.blue != 255
    }
}

impl Default for CorrectionProfile {
    fn default() -> Self {
        Self::UNCORRECTED
    }
}

// ============================================================================
// Power-Budget und Strom-Modell
// ============================================================================

/// Versorgungs-Grenzen des Strips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerBudget {
    pub volts: u8,
    pub max_milliamps: u32,
}

impl PowerBudget {
    pub const fn new(volts: u8, max_milliamps: u32) -> Self {
        Self {
            volts,
            max_milliamps,
        }
    }

    /// Maximale Leistung in Milliwatt (V × mA)
    pub const fn max_milliwatts(&self) -> u32 {
        (self.volts as u32).saturating_mul(self.max_milliamps)
    }
}

/// Strom-Modell für die Abschätzung eines Frames
///
/// Tabelle von Erfahrungswerten, keine exakte Physik. Ein voll
/// ausgesteuerter Kanal zieht `*_ma`, jede LED zusätzlich `idle_ma`
/// (auch wenn sie dunkel ist), dazu kommt der Controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerModel {
    pub red_ma: u32,
    pub green_ma: u32,
    pub blue_ma: u32,
    pub idle_ma: u32,
    pub controller_ma: u32,
}

impl PowerModel {
    /// WS2812 / WS2812B bei 5V
    pub const WS2812: Self = Self {
        red_ma: 16,
        green_ma: 11,
        blue_ma: 15,
        idle_ma: 1,
        controller_ma: 25,
    };
}

impl Default for PowerModel {
    fn default() -> Self {
        Self::WS2812
    }
}

// ============================================================================
// Show-Report
// ============================================================================

/// Ergebnis des letzten erfolgreichen `show()`
///
/// `limited` entspricht der Power-Indicator-LED: true wenn der Frame bei der
/// angeforderten Helligkeit das Budget überschritten hätte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShowReport {
    pub requested_brightness: u8,
    pub applied_brightness: u8,
    pub estimated_milliamps: u32,
    pub limited: bool,
}
