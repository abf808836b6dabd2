// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use strip_core::{ChannelOrder, CorrectionProfile, Pixel, StripConfig};

// ============================================================================
// LED-Strip Konfiguration
// ============================================================================

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = 298;

/// GPIO-Pin für die Datenleitung des Strips (WS2812)
pub const LED_GPIO_PIN: u8 = 8;

/// Kanal-Reihenfolge der WS2812 LEDs
pub const LED_CHANNEL_ORDER: ChannelOrder = ChannelOrder::Grb;

/// Farbkorrektur für SMD5050 Strips
pub const LED_CORRECTION: CorrectionProfile = CorrectionProfile::TYPICAL_LED_STRIP;

/// Helligkeits-Level für den Strip (0-255)
pub const LED_BRIGHTNESS: u8 = 40;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Power-Budget
// ============================================================================

/// Versorgungsspannung des Netzteils
pub const SUPPLY_VOLTS: u8 = 5;

/// Maximaler Strom des Netzteils in mA
pub const SUPPLY_MAX_MILLIAMPS: u32 = 1500;

/// GPIO-Pin für die Power-Indicator-LED (an solange der Strip gedrosselt wird)
/// GPIO12/13 sind auf dem ESP32-C6 mit USB-JTAG belegt
pub const POWER_INDICATOR_GPIO_PIN: u8 = 15;

// ============================================================================
// Ablauf
// ============================================================================

/// Wartezeit nach dem Einschalten, bevor der Strip angesteuert wird
pub const POWER_UP_DELAY_MS: u64 = 2000;

/// Bildwiederholrate der Frame-Loop
pub const FRAMES_PER_SECOND: u64 = 120;

/// Index der LED, die eingeschaltet wird (0-basiert, also die zweite LED)
pub const LIGHT_INDEX: usize = 1;

/// Farbe der LED (nahe am Blau des MakerBarn-Logos)
pub const LIGHT_COLOR: Pixel = Pixel {
    r: 74,
    g: 189,
    b: 224,
};

/// Komplette Strip-Konfiguration aus den Konstanten oben
pub const STRIP_CONFIG: StripConfig = StripConfig::new(LED_GPIO_PIN)
    .with_channel_order(LED_CHANNEL_ORDER)
    .with_correction(LED_CORRECTION)
    .with_brightness(LED_BRIGHTNESS)
    .with_power_budget(SUPPLY_VOLTS, SUPPLY_MAX_MILLIAMPS);
