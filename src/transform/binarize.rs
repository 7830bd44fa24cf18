use image::RgbaImage;

use crate::transform::traits::{PixelTransform, map_pixels};

/// Where a channel value of exactly 128 lands when snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// `< 128` -> 0, `>= 128` -> 255. Every channel ends in {0, 255}.
    Inclusive,
    /// `< 128` -> 0, `> 128` -> 255, 128 is kept as a third bucket.
    Exclusive,
}

const MIDPOINT: u8 = 128;

#[inline(always)]
pub fn binarize_channel(value: u8, threshold: Threshold) -> u8 {
    match (value.cmp(&MIDPOINT), threshold) {
        (std::cmp::Ordering::Less, _) => 0,
        (std::cmp::Ordering::Equal, Threshold::Exclusive) => MIDPOINT,
        _ => 255,
    }
}

/// Snap every channel of every pixel, alpha included, so that anti-aliased
/// edges become exact matches for the canonical colours.
pub fn binarize(image: &mut RgbaImage, threshold: Threshold) -> usize {
    map_pixels(image, |mut pixel| {
        pixel
            .0
            .iter_mut()
            .for_each(|channel| *channel = binarize_channel(*channel, threshold));
        pixel
    })
}

#[derive(Debug, Clone, Copy)]
pub struct Binarize {
    pub threshold: Threshold,
}

impl PixelTransform for Binarize {
    fn apply(&mut self, image: &mut RgbaImage) -> usize {
        binarize(image, self.threshold)
    }
}
