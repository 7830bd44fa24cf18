use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use rand::Rng;

use crate::utils::{image::read_rgba_image, pixel::Colour};

pub fn gen_random_image(size: u32) -> RgbaImage {
    let mut rng = rand::rng();
    RgbaImage::from_fn(size, size, |_, _| Rgba(rng.random::<[u8; 4]>()))
}

/// Anti-aliased black on white with a transparent border, like the
/// exported part silhouettes.
pub fn gen_silhouette(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let edge = x == 0 || y == 0 || x == size - 1 || y == size - 1;
        if edge {
            Rgba([0, 0, 0, 0])
        } else if x < size / 2 {
            Rgba([12, 8, 20, 250])
        } else {
            Rgba([240, 251, 233, 255])
        }
    })
}

/// Fresh, empty directory private to one test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("colour_id-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn pixel_at(path: &Path, x: u32, y: u32) -> Colour {
    Colour::from(*read_rgba_image(path).unwrap().get_pixel(x, y))
}
