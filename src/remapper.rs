use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    error::Result,
    palette::{ButtonStyle, RoleTable},
    registry::UsedColourRegistry,
    transform::prelude::*,
    utils::image::{read_rgba_image, write_png},
};

/// Outcome of rewriting one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Pixels that ended up with a different value than after binarization.
    pub remapped: usize,
}

/// Encode a part silhouette in place.
///
/// The black and white targets are claimed before the file is opened, so a
/// duplicate never produces output.
pub fn transform_part(
    path: &Path,
    roles: &RoleTable,
    registry: &mut UsedColourRegistry,
) -> Result<TransformReport> {
    registry.claim(path, roles)?;

    let pipeline = Binarize {
        threshold: Threshold::Inclusive,
    }
    .pipe(PartRemap { roles: *roles });

    apply_to_file(pipeline, path, path)
}

/// Encode a button into `destination`, leaving the source as it is.
pub fn transform_button(
    path: &Path,
    destination: &Path,
    style: &ButtonStyle,
) -> Result<TransformReport> {
    let pipeline = Binarize {
        threshold: Threshold::Exclusive,
    }
    .pipe(ButtonRemap { style: *style });

    apply_to_file(pipeline, path, destination)
}

fn apply_to_file<T: PixelTransform>(
    mut transform: T,
    source: &Path,
    destination: &Path,
) -> Result<TransformReport> {
    let mut image = read_rgba_image(source)?;
    debug!(
        "loaded {} ({}x{})",
        source.display(),
        image.width(),
        image.height()
    );

    let remapped = transform.apply(&mut image);
    write_png(&image, destination)?;

    Ok(TransformReport {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        remapped,
    })
}
