//! Pixel-Buffer mit fester Länge
//!
//! Hält den gewünschten Zustand des Strips. Reiner Speicher, kein I/O.

use crate::error::IndexError;
use crate::types::Pixel;

/// Geordnete Folge von `N` Pixeln (N = Anzahl physikalischer LEDs)
///
/// Wird einmal beim Start angelegt und danach nur in-place verändert.
/// Der `StripDriver` leiht den Buffer während `show()` nur lesend aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Pixel; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Anzahl der LEDs
    pub const LEN: usize = N;

    /// Erstellt einen schwarzen Buffer
    pub const fn new() -> Self {
        Self::filled(Pixel { r: 0, g: 0, b: 0 })
    }

    /// Erstellt einen Buffer mit einer einzigen Farbe
    pub const fn filled(pixel: Pixel) -> Self {
        Self { pixels: [pixel; N] }
    }

    /// Schreibt `pixel` an Position `index`
    ///
    /// # Fehlerbehandlung
    /// Gibt `IndexError` zurück wenn `index >= N`, der Buffer bleibt unverändert.
    pub fn set(&mut self, index: usize, pixel: Pixel) -> Result<(), IndexError> {
        let slot = self
            .pixels
            .get_mut(index)
            .ok_or(IndexError { index, len: N })?;
        *slot = pixel;
        Ok(())
    }

    /// Liest das Pixel an Position `index`
    pub fn get(&self, index: usize) -> Result<Pixel, IndexError> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(IndexError { index, len: N })
    }

    pub const fn size(&self) -> usize {
        N
    }

    /// Setzt alle Pixel auf dieselbe Farbe
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels = [pixel; N];
    }

    /// Setzt alle Pixel auf Schwarz
    pub fn clear(&mut self) {
        self.fill(Pixel::default());
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    pub const fn as_slice(&self) -> &[Pixel] {
        &self.pixels
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[Pixel; N]> for PixelBuffer<N> {
    fn from(pixels: [Pixel; N]) -> Self {
        Self { pixels }
    }
}

impl<const N: usize> From<PixelBuffer<N>> for [Pixel; N] {
    fn from(buffer: PixelBuffer<N>) -> Self {
        buffer.pixels
    }
}

impl<'a, const N: usize> IntoIterator for &'a PixelBuffer<N> {
    type Item = &'a Pixel;
    type IntoIter = core::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
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

    #[test]
    fn test_new_buffer_is_black() {
        let buffer = PixelBuffer::<10>::new();
        assert!(buffer.iter().all(|pixel| *pixel == Pixel::default()));
        assert_eq!(buffer.size(), 10);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut buffer = PixelBuffer::<10>::new();
        for index in 0..10 {
            let pixel = Pixel {
                r: index as u8,
                g: 255 - index as u8,
                b: 7,
            };
            buffer.set(index, pixel).unwrap();
            assert_eq!(buffer.get(index), Ok(pixel));
        }
    }

    #[test]
    fn test_set_out_of_range_leaves_buffer_untouched() {
        let mut buffer = PixelBuffer::<1>::new();
        assert_eq!(buffer.set(1, BLUE), Err(IndexError { index: 1, len: 1 }));
        assert_eq!(buffer, PixelBuffer::<1>::new());
    }

    #[test]
    fn test_get_out_of_range() {
        let buffer = PixelBuffer::<298>::new();
        assert_eq!(buffer.get(298), Err(IndexError { index: 298, len: 298 }));
        assert_eq!(
            buffer.get(usize::MAX),
            Err(IndexError {
                index: usize::MAX,
                len: 298
            })
        );
    }

    #[test]
    fn test_fill_and_clear() {
        let mut buffer = PixelBuffer::<4>::new();
        buffer.fill(BLUE);
        assert_eq!(buffer.as_slice(), &[BLUE; 4]);
        buffer.clear();
        assert_eq!(buffer, PixelBuffer::default());
    }
}
