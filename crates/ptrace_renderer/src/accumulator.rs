//! Sample accumulation buffer.
//!
//! Pixels store a running colour sum and a sample count rather than a final
//! value, so partial renders from any number of workers can be summed in any
//! order and read back as averages at any time.

use std::ops::AddAssign;
use std::path::Path;

use ptrace_core::{colour_to_bytes, Color};

use crate::{RenderError, RenderResult};

/// Image whose pixels average every sample added to them.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulableImage {
    width: u32,
    height: u32,
    colours: Vec<Color>,
    sample_counts: Vec<u32>,
}

impl AccumulableImage {
    /// Create an image with no samples.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            colours: vec![Color::ZERO; len],
            sample_counts: vec![0; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} image",
            x,
            y,
            self.width,
            self.height
        );
        pixel_offset(self.width, x, y)
    }

    /// Add `count` samples of `colour` to pixel (x, y).
    pub fn add_samples(&mut self, x: u32, y: u32, colour: Color, count: u32) {
        let i = self.index(x, y);
        self.colours[i] += colour * count as f64;
        self.sample_counts[i] += count;
    }

    /// Average colour at (x, y); black before any sample lands.
    pub fn get(&self, x: u32, y: u32) -> Color {
        let i = self.index(x, y);
        self.colours[i] / self.sample_counts[i].max(1) as f64
    }

    /// Number of samples accumulated at (x, y).
    pub fn sample_count(&self, x: u32, y: u32) -> u32 {
        self.sample_counts[self.index(x, y)]
    }

    /// Number of samples accumulated over the whole image.
    pub fn total_sample_count(&self) -> u64 {
        self.sample_counts.iter().map(|&c| c as u64).sum()
    }

    /// Display bytes of the averaged colour at (x, y).
    pub fn bytes_at(&self, x: u32, y: u32) -> [u8; 3] {
        colour_to_bytes(self.get(x, y))
    }

    /// Add every sum and count of `other` into this image.
    pub fn merge(&mut self, other: &AccumulableImage) -> RenderResult<()> {
        if (self.width, self.height) != (other.width, other.height) {
            return Err(RenderError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }

        for (dst, src) in self.colours.iter_mut().zip(&other.colours) {
            *dst += *src;
        }
        for (dst, src) in self.sample_counts.iter_mut().zip(&other.sample_counts) {
            *dst += *src;
        }
        Ok(())
    }

    /// Merge a smaller image whose top-left corner sits at (x, y).
    pub fn merge_at(&mut self, fragment: &AccumulableImage, x: u32, y: u32) -> RenderResult<()> {
        let fits = x.checked_add(fragment.width).map_or(false, |end| end <= self.width)
            && y.checked_add(fragment.height).map_or(false, |end| end <= self.height);
        if !fits {
            return Err(RenderError::FragmentOutOfBounds {
                offset: (x, y),
                size: (fragment.width, fragment.height),
                bounds: (self.width, self.height),
            });
        }

        for local_y in 0..fragment.height {
            for local_x in 0..fragment.width {
                let src = fragment.index(local_x, local_y);
                let dst = self.index(x + local_x, y + local_y);
                self.colours[dst] += fragment.colours[src];
                self.sample_counts[dst] += fragment.sample_counts[src];
            }
        }
        Ok(())
    }

    /// Convert to an 8-bit RGB buffer (for display or saving).
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.bytes_at(x, y)))
    }

    /// Encode the averaged image; the format follows the file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgb_image().save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Row-major offset of (x, y), computed in `usize` so large frames don't wrap.
#[inline]
fn pixel_offset(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl AddAssign<&AccumulableImage> for AccumulableImage {
    /// Panics if the dimensions differ; use [`AccumulableImage::merge`] to
    /// handle that case.
    fn add_assign(&mut self, other: &AccumulableImage) {
        if let Err(err) = self.merge(other) {
            panic!("{}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    #[test]
    fn test_new_image_is_black() {
        let img = AccumulableImage::new(12, 8);
        assert_eq!(img.width(), 12);
        assert_eq!(img.height(), 8);

        for (x, y) in positions(12, 8) {
            assert_eq!(img.get(x, y), Color::ZERO);
            assert_eq!(img.bytes_at(x, y), [0, 0, 0]);
            assert_eq!(img.sample_count(x, y), 0);
        }
        assert_eq!(img.total_sample_count(), 0);
    }

    #[test]
    fn test_add_samples_averages() {
        let mut img = AccumulableImage::new(2, 2);
        img.add_samples(1, 0, Color::new(1.0, 0.0, 0.0), 1);
        img.add_samples(1, 0, Color::new(0.0, 1.0, 0.0), 3);

        assert_eq!(img.sample_count(1, 0), 4);
        let c = img.get(1, 0);
        assert!((c - Color::new(0.25, 0.75, 0.0)).length() < 1e-12);
        assert_eq!(img.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_merge_doubles_history() {
        let colour = Color::new(0.1, 0.5, 0.9);
        let mut img = AccumulableImage::new(12, 8);
        let mut img2 = AccumulableImage::new(12, 8);

        for (x, y) in positions(12, 8) {
            let samples = x + y + 1;
            img.add_samples(x, y, colour, samples);
            img2.add_samples(x, y, colour, samples);
        }

        img2 += &img;

        for (x, y) in positions(12, 8) {
            let samples = x + y + 1;
            assert!((img.get(x, y) - colour).length() < 1e-12);
            assert!((img2.get(x, y) - colour).length() < 1e-12);
            assert_eq!(img.bytes_at(x, y), colour_to_bytes(colour));
            assert_eq!(img2.bytes_at(x, y), colour_to_bytes(colour));
            assert_eq!(img.sample_count(x, y), samples);
            assert_eq!(img2.sample_count(x, y), samples * 2);
        }
        assert_eq!(img2.total_sample_count(), img.total_sample_count() * 2);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let mut a = AccumulableImage::new(3, 3);
        let mut b = AccumulableImage::new(3, 3);
        a.add_samples(0, 0, Color::ONE, 2);
        b.add_samples(2, 1, Color::new(0.5, 0.0, 0.0), 1);

        let mut ab = a.clone();
        ab.merge(&b).unwrap();
        let mut ba = b.clone();
        ba.merge(&a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_merge_dimension_mismatch() {
        let mut a = AccumulableImage::new(4, 4);
        let b = AccumulableImage::new(4, 5);
        assert!(matches!(
            a.merge(&b),
            Err(RenderError::DimensionMismatch { expected: (4, 4), actual: (4, 5) })
        ));
    }

    #[test]
    #[should_panic]
    fn test_add_assign_dimension_mismatch_panics() {
        let mut a = AccumulableImage::new(4, 4);
        a += &AccumulableImage::new(5, 4);
    }

    #[test]
    fn test_merge_at() {
        let mut full = AccumulableImage::new(8, 6);
        let mut fragment = AccumulableImage::new(3, 2);
        fragment.add_samples(0, 0, Color::ONE, 1);
        fragment.add_samples(2, 1, Color::new(0.0, 0.5, 0.0), 2);

        full.merge_at(&fragment, 5, 4).unwrap();
        assert_eq!(full.get(5, 4), Color::ONE);
        assert_eq!(full.sample_count(7, 5), 2);
        assert_eq!(full.total_sample_count(), 3);

        assert!(matches!(
            full.merge_at(&fragment, 6, 4),
            Err(RenderError::FragmentOutOfBounds { .. })
        ));
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_pixel_panics() {
        let mut img = AccumulableImage::new(4, 4);
        img.add_samples(4, 0, Color::ONE, 1);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_pixel_offset_past_u32() {
        let offset = pixel_offset(70_000, 69_999, 70_000);
        assert_eq!(offset, 70_000 * 70_000 + 69_999);
        assert!(offset > u32::MAX as usize);
    }

    #[test]
    fn test_to_rgb_image() {
        let mut img = AccumulableImage::new(2, 1);
        img.add_samples(1, 0, Color::new(2.0, 0.0, 1.0), 1);
        let rgb = img.to_rgb_image();
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 0, 255]);
    }
}
