use image::{
    ImageReader, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};
use std::{fs::File, io::BufWriter, path::Path};

use crate::error::ColourIdError;

/// Read any decodable image and widen it to RGBA8.
pub fn read_rgba_image(path: &Path) -> crate::error::Result<RgbaImage> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(image.to_rgba8())
}

/// Write an RGBA8 buffer as a lossless png, replacing whatever is at `path`.
pub fn write_png(image: &RgbaImage, path: &Path) -> crate::error::Result {
    let file = &mut BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(file, CompressionType::Default, FilterType::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(ColourIdError::ImageEncode)?;
    Ok(())
}
