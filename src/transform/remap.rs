use image::RgbaImage;

use crate::{
    palette::{ButtonStyle, ColourKey, RoleTable},
    transform::traits::{PixelTransform, map_pixels},
    utils::pixel::Colour,
};

/// Replace a canonical colour by its role's target. Any other value, notably
/// transparent pixels, passes through untouched.
#[inline]
pub fn remap_pixel(pixel: Colour, roles: &RoleTable) -> Colour {
    match ColourKey::of(pixel) {
        Some(key) => roles.target(key),
        None => pixel,
    }
}

/// Button encoding. Every output pixel is either fully transparent or one of
/// the style's four colours.
#[inline]
pub fn remap_button_pixel(pixel: Colour, style: &ButtonStyle) -> Colour {
    if !pixel.is_opaque() {
        return Colour::TRANSPARENT;
    }
    if pixel == style.accent.canonical() {
        return style.fill;
    }
    if pixel == Colour::WHITE {
        return style.highlight;
    }
    style.outline
}

#[derive(Debug, Clone, Copy)]
pub struct PartRemap {
    pub roles: RoleTable,
}

impl PixelTransform for PartRemap {
    fn apply(&mut self, image: &mut RgbaImage) -> usize {
        map_pixels(image, |pixel| {
            remap_pixel(Colour::from(pixel), &self.roles).into()
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonRemap {
    pub style: ButtonStyle,
}

impl PixelTransform for ButtonRemap {
    fn apply(&mut self, image: &mut RgbaImage) -> usize {
        map_pixels(image, |pixel| {
            remap_button_pixel(Colour::from(pixel), &self.style).into()
        })
    }
}
