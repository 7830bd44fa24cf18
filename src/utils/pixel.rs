use std::fmt::Display;

/// A single RGBA8 pixel value. Two colours are the same only if all four
/// channels match.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::opaque(0, 0, 0);
    pub const WHITE: Colour = Colour::opaque(255, 255, 255);
    pub const RED: Colour = Colour::opaque(255, 0, 0);
    pub const GREEN: Colour = Colour::opaque(0, 255, 0);
    pub const BLUE: Colour = Colour::opaque(0, 0, 255);
    pub const TRANSPARENT: Colour = Colour::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    pub const fn from_u8_array(value: &[u8; 4]) -> Colour {
        Colour::new(value[0], value[1], value[2], value[3])
    }

    pub const fn to_u8_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// `#rrggbbaa`, lower case.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Colour::from_u8_array(&pixel.0)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(colour: Colour) -> Self {
        image::Rgba(colour.to_u8_array())
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
