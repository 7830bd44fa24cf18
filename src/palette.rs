use std::fmt::Display;

use crate::utils::pixel::Colour;

/// Semantic role a pixel plays in a source asset, identified by its exact
/// canonical colour after binarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourKey {
    Black,
    White,
    Red,
    Green,
    Blue,
}

impl ColourKey {
    pub const ALL: [ColourKey; 5] = [
        ColourKey::Black,
        ColourKey::White,
        ColourKey::Red,
        ColourKey::Green,
        ColourKey::Blue,
    ];

    pub const fn canonical(self) -> Colour {
        match self {
            ColourKey::Black => Colour::BLACK,
            ColourKey::White => Colour::WHITE,
            ColourKey::Red => Colour::RED,
            ColourKey::Green => Colour::GREEN,
            ColourKey::Blue => Colour::BLUE,
        }
    }

    /// Role whose canonical colour is exactly `colour`, if any.
    pub fn of(colour: Colour) -> Option<ColourKey> {
        ColourKey::ALL
            .into_iter()
            .find(|key| key.canonical() == colour)
    }
}

impl Display for ColourKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColourKey::Black => "black",
            ColourKey::White => "white",
            ColourKey::Red => "red",
            ColourKey::Green => "green",
            ColourKey::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Per-asset mapping from role to target colour. Unbound roles map to their
/// own canonical colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTable {
    targets: [Colour; 5],
}

impl RoleTable {
    pub const fn identity() -> Self {
        RoleTable {
            targets: [
                ColourKey::Black.canonical(),
                ColourKey::White.canonical(),
                ColourKey::Red.canonical(),
                ColourKey::Green.canonical(),
                ColourKey::Blue.canonical(),
            ],
        }
    }

    /// Shorthand for the bike part encoding: only black and white are bound.
    pub const fn black_white(black: Colour, white: Colour) -> Self {
        RoleTable::identity()
            .bind(ColourKey::Black, black)
            .bind(ColourKey::White, white)
    }

    pub const fn bind(mut self, key: ColourKey, target: Colour) -> Self {
        self.targets[key as usize] = target;
        self
    }

    #[inline]
    pub const fn target(&self, key: ColourKey) -> Colour {
        self.targets[key as usize]
    }

    /// Roles whose target differs from their canonical colour.
    pub fn bound(&self) -> impl Iterator<Item = (ColourKey, Colour)> + '_ {
        ColourKey::ALL
            .into_iter()
            .map(|key| (key, self.target(key)))
            .filter(|(key, target)| key.canonical() != *target)
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        RoleTable::identity()
    }
}

pub const BUTTON_RED: Colour = Colour::opaque(209, 0, 0);
pub const BUTTON_GREY: Colour = Colour::opaque(165, 165, 165);
pub const BACK_BUTTON_GREEN: Colour = Colour::opaque(0, 209, 0);
pub const BACK_BUTTON_GREY: Colour = Colour::opaque(166, 166, 166);

/// Fixed accent colours of one UI button family. Only `outline` is chosen
/// per asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Role of the solid button fill in the source asset.
    pub accent: ColourKey,
    pub fill: Colour,
    pub highlight: Colour,
    pub outline: Colour,
}

impl ButtonStyle {
    pub const fn explode(outline: Colour) -> Self {
        ButtonStyle {
            accent: ColourKey::Red,
            fill: BUTTON_RED,
            highlight: BUTTON_GREY,
            outline,
        }
    }

    pub const fn back(outline: Colour) -> Self {
        ButtonStyle {
            accent: ColourKey::Green,
            fill: BACK_BUTTON_GREEN,
            highlight: BACK_BUTTON_GREY,
            outline,
        }
    }
}
