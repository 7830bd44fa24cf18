mod binarize;
mod pipe;
mod remap;
mod traits;

pub use binarize::{Binarize, Threshold, binarize, binarize_channel};
pub use remap::{ButtonRemap, PartRemap, remap_button_pixel, remap_pixel};

pub mod prelude {
    pub use super::pipe::{PipeableTransform, Pipeline};
    pub use super::traits::PixelTransform;
    pub use super::{Binarize, ButtonRemap, PartRemap, Threshold};
}
