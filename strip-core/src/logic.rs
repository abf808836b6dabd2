//! Pure Business Logic Functions
//!
//! Helligkeit, Farbkorrektur und Strom-Abschätzung ohne
//! Hardware-Dependencies (testbar!)

use crate::types::{ChannelOrder, CorrectionProfile, Pixel, PowerModel};

/// Skaliert einen 8-Bit-Wert mit einem Faktor (0-255 = 0.0-1.0)
///
/// `scale8(x, 255) == x` und `scale8(x, 0) == 0`, abgerundet dazwischen.
///
/// # Beispiele
///
/// ```
/// # use strip_core::scale8;
/// assert_eq!(scale8(200, 255), 200);
/// assert_eq!(scale8(189, 40), 29);
/// ```
#[inline]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * scale as u16) / 255) as u8
}

/// Kombiniert Farbkorrektur und globale Helligkeit zu einem Faktor pro Kanal
pub const fn channel_scales(correction: CorrectionProfile, brightness: u8) -> Pixel {
    Pixel {
        r: scale8(correction.red, brightness),
        g: scale8(correction.green, brightness),
        b: scale8(correction.blue, brightness),
    }
}

/// Wendet die Kanal-Faktoren aus [`channel_scales`] auf ein Pixel an
#[inline]
pub const fn apply_scales(pixel: Pixel, scales: Pixel) -> Pixel {
    Pixel {
        r: scale8(pixel.r, scales.r),
        g: scale8(pixel.g, scales.g),
        b: scale8(pixel.b, scales.b),
    }
}

/// Korrigiertes Pixel in Übertragungs-Reihenfolge
#[inline]
pub const fn encode_pixel(pixel: Pixel, scales: Pixel, order: ChannelOrder) -> [u8; 3] {
    order.arrange(apply_scales(pixel, scales))
}

/// Geschätzter Strom (mA) für `pixels` nach Anwendung von `scales`
///
/// Controller + Grundlast pro LED + Summe der Kanäle. Der variable Anteil
/// wird exakt in mA/255 aufsummiert und erst am Ende aufgerundet.
pub fn estimate_milliamps(pixels: &[Pixel], scales: Pixel, model: &PowerModel) -> u32 {
    let (mut red, mut green, mut blue) = (0u64, 0u64, 0u64);
    for pixel in pixels {
        let corrected = apply_scales(*pixel, scales);
        red += u64::from(corrected.r);
        green += u64::from(corrected.g);
        blue += u64::from(corrected.b);
    }

    let variable = red * u64::from(model.red_ma)
        + green * u64::from(model.green_ma)
        + blue * u64::from(model.blue_ma);
    let fixed = u64::from(model.controller_ma) + u64::from(model.idle_ma) * pixels.len() as u64;

    u32::try_from(fixed + variable.div_ceil(255)).unwrap_or(u32::MAX)
}

/// Ergebnis der Power-Limitierung für einen Frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerLimit {
    /// Tatsächlich verwendete Helligkeit (<= angefragte)
    pub brightness: u8,
    /// Geschätzter Strom bei `brightness`
    pub estimated_milliamps: u32,
}

/// Bestimmt die Helligkeit, mit der ein Frame das Budget einhält
///
/// Liegt der Frame bei `brightness` innerhalb von `max_milliamps`, bleibt die
/// Helligkeit unverändert. Sonst wird sie gleichmäßig für alle Pixel
/// reduziert: Startwert ist `brightness × Budget / Schätzung` (nur auf den
/// variablen Anteil), danach die größte Helligkeit, die noch passt.
///
/// Reicht schon die Grundlast nicht (Budget < Controller + Idle), ist das
/// Ergebnis Helligkeit 0.
pub fn limit_brightness(
    pixels: &[Pixel],
    correction: CorrectionProfile,
    brightness: u8,
    model: &PowerModel,
    max_milliamps: u32,
) -> PowerLimit {
    let estimate_at =
        |level: u8| estimate_milliamps(pixels, channel_scales(correction, level), model);

    let requested = estimate_at(brightness);
    if requested <= max_milliamps {
        return PowerLimit {
            brightness,
            estimated_milliamps: requested,
        };
    }

    let fixed = estimate_at(0);
    if fixed > max_milliamps {
        return PowerLimit {
            brightness: 0,
            estimated_milliamps: fixed,
        };
    }

    // requested > max_milliamps >= fixed, also ist der Nenner > 0 und guess < brightness
    let guess = u64::from(brightness) * u64::from(max_milliamps - fixed)
        / u64::from(requested - fixed);
    let guess = u8::try_from(guess).unwrap_or(brightness - 1);

    // Monotone Suche: estimate_at(low) passt immer, brightness passt nicht
    let (mut low, mut high) = if estimate_at(guess) <= max_milliamps {
        (guess, brightness - 1)
    } else {
        (0, guess.saturating_sub(1))
    };
    while low < high {
        let mid = low + (high - low).div_ceil(2);
        if estimate_at(mid) <= max_milliamps {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    PowerLimit {
        brightness: low,
        estimated_milliamps: estimate_at(low),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Pixel = Pixel {
        r: 74,
        g: 189,
        b: 224,
    };
    const WHITE: Pixel = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_scale8_identity_and_zero() {
        for value in 0..=255u8 {
            assert_eq!(scale8(value, 255), value);
            assert_eq!(scale8(value, 0), 0);
        }
    }

    #[test]
    fn test_channel_scales_combines_correction_and_brightness() {
        let scales = channel_scales(CorrectionProfile::TYPICAL_LED_STRIP, 255);
        assert_eq!(scales, Pixel { r: 255, g: 0xB0, b: 0xF0 });

        let scales = channel_scales(CorrectionProfile::UNCORRECTED, 40);
        assert_eq!(scales, Pixel { r: 40, g: 40, b: 40 });
    }

    #[test]
    fn test_encode_pixel_brightness_40() {
        let scales = channel_scales(CorrectionProfile::UNCORRECTED, 40);
        assert_eq!(encode_pixel(BLUE, scales, ChannelOrder::Rgb), [11, 29, 35]);
        assert_eq!(encode_pixel(BLUE, scales, ChannelOrder::Grb), [29, 11, 35]);
    }

    #[test]
    fn test_estimate_dark_strip_is_fixed_overhead() {
        let pixels = [Pixel::default(); 10];
        let scales = channel_scales(CorrectionProfile::UNCORRECTED, 255);
        let estimate = estimate_milliamps(&pixels, scales, &PowerModel::WS2812);
        assert_eq!(estimate, 25 + 10);
    }

    #[test]
    fn test_estimate_full_white() {
        let pixels = [WHITE; 10];
        let scales = channel_scales(CorrectionProfile::UNCORRECTED, 255);
        let estimate = estimate_milliamps(&pixels, scales, &PowerModel::WS2812);
        // 25 Controller + 10 × (1 idle + 16 + 11 + 15)
        assert_eq!(estimate, 25 + 10 * 43);
    }

    #[test]
    fn test_limit_within_budget_keeps_brightness() {
        let pixels = [WHITE; 10];
        let limit = limit_brightness(
            &pixels,
            CorrectionProfile::UNCORRECTED,
            200,
            &PowerModel::WS2812,
            10_000,
        );
        assert_eq!(limit.brightness, 200);
    }

    #[test]
    fn test_limit_reduces_to_largest_fitting_brightness() {
        let pixels = [WHITE; 10];
        let limit = limit_brightness(
            &pixels,
            CorrectionProfile::UNCORRECTED,
            255,
            &PowerModel::WS2812,
            200,
        );
        assert!(limit.brightness < 255);
        assert!(limit.estimated_milliamps <= 200);

        // Eine Stufe heller passt nicht mehr
        let brighter = estimate_milliamps(
            &pixels,
            channel_scales(CorrectionProfile::UNCORRECTED, limit.brightness + 1),
            &PowerModel::WS2812,
        );
        assert!(brighter > 200);
    }

    #[test]
    fn test_limit_below_fixed_overhead_goes_dark() {
        let pixels = [WHITE; 10];
        let limit = limit_brightness(
            &pixels,
            CorrectionProfile::UNCORRECTED,
            255,
            &PowerModel::WS2812,
            20,
        );
        assert_eq!(limit.brightness, 0);
        assert_eq!(limit.estimated_milliamps, 35);
    }
}
