use image::RgbaImage;

/// Core trait for rewriting the pixels of an image in place.
pub trait PixelTransform {
    /// Apply the transform, returning how many pixels changed value.
    fn apply(&mut self, image: &mut RgbaImage) -> usize;
}

/// Run `map` over every pixel and count the ones it changed.
#[inline]
pub(crate) fn map_pixels<F>(image: &mut RgbaImage, mut map: F) -> usize
where
    F: FnMut(image::Rgba<u8>) -> image::Rgba<u8>,
{
    image.pixels_mut().fold(0, |changed, pixel| {
        let mapped = map(*pixel);
        if mapped == *pixel {
            changed
        } else {
            *pixel = mapped;
            changed + 1
        }
    })
}
