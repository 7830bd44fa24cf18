use image::RgbaImage;

use crate::transform::traits::PixelTransform;

/// Extension trait that enables pipeline chaining
pub trait PipeableTransform: PixelTransform + Sized {
    /// Chain this transform with another, creating a pipeline
    ///
    /// # Example
    /// ```ignore
    ///
    /// // Create a pipeline: anti-aliased -> binary -> encoded
    /// let mut pipeline = Binarize { threshold }.pipe(PartRemap { roles });
    ///
    /// // Use it as a single transform
    /// pipeline.apply(&mut image);
    /// ```
    fn pipe<T>(self, next: T) -> Pipeline<Self, T>
    where
        T: PixelTransform,
    {
        Pipeline { t1: self, t2: next }
    }
}

// Blanket implementation: all PixelTransforms are automatically pipeable
impl<T: PixelTransform> PipeableTransform for T {}

/// A pipeline that runs two transforms back to back over the same image.
///
/// The reported change count is the last stage's, since earlier stages only
/// prepare the image for it.
pub struct Pipeline<T1, T2>
where
    T1: PixelTransform,
    T2: PixelTransform,
{
    t1: T1,
    t2: T2,
}

impl<T1, T2> PixelTransform for Pipeline<T1, T2>
where
    T1: PixelTransform,
    T2: PixelTransform,
{
    #[inline(always)]
    fn apply(&mut self, image: &mut RgbaImage) -> usize {
        self.t1.apply(image);
        self.t2.apply(image)
    }
}
