//! The built-in asset table.
//!
//! Colours are RGBA as stored on disk. Parts use a near-black / near-white
//! pair that differs from every other part; the renderer reads them back
//! through [crate::hit_test::LabelTable].

use crate::{
    palette::{ButtonStyle, RoleTable},
    utils::pixel::Colour,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Overwritten in place. Its black and white targets are claimed in the
    /// run's registry.
    Part(RoleTable),
    /// Written next to the source under the configured suffix. Re-running on
    /// its own output gives a different image, so the source is never touched.
    Button(ButtonStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetJob {
    /// Name the renderer reports when one of this asset's colours is hit.
    pub label: &'static str,
    /// Relative to the configured asset root.
    pub path: &'static str,
    pub kind: AssetKind,
}

impl AssetJob {
    pub const fn part(
        label: &'static str,
        path: &'static str,
        black: Colour,
        white: Colour,
    ) -> Self {
        AssetJob {
            label,
            path,
            kind: AssetKind::Part(RoleTable::black_white(black, white)),
        }
    }

    pub const fn button(label: &'static str, path: &'static str, style: ButtonStyle) -> Self {
        AssetJob {
            label,
            path,
            kind: AssetKind::Button(style),
        }
    }

    /// Every colour this job can write, transparent excluded.
    pub fn targets(&self) -> Vec<Colour> {
        match &self.kind {
            AssetKind::Part(roles) => roles.bound().map(|(_, colour)| colour).collect(),
            AssetKind::Button(style) => vec![style.fill, style.highlight, style.outline],
        }
    }
}

const fn c(r: u8, g: u8, b: u8) -> Colour {
    Colour::opaque(r, g, b)
}

pub const EXPLODE_OUTLINE: Colour = c(2, 3, 2);
pub const BACK_OUTLINE: Colour = c(3, 3, 2);

pub const BIKE_PARTS: [AssetJob; 15] = [
    AssetJob::part("frame", "bike/frame.png", c(1, 0, 0), c(254, 255, 255)),
    AssetJob::part("fork", "bike/fork.png", c(0, 1, 0), c(255, 254, 255)),
    AssetJob::part("seat", "bike/seat.png", c(1, 1, 0), c(254, 254, 255)),
    AssetJob::part("stem", "bike/stem.png", c(0, 0, 1), c(255, 255, 254)),
    AssetJob::part("handlebars", "bike/handlebars.png", c(1, 0, 1), c(254, 255, 254)),
    AssetJob::part("headset", "bike/headset.png", c(0, 1, 1), c(255, 254, 254)),
    AssetJob::part("brake", "bike/brake.png", c(1, 1, 1), c(254, 254, 254)),
    AssetJob::part("wheel", "bike/wheel.png", c(2, 1, 1), c(253, 254, 254)),
    AssetJob::part("chainring", "bike/chainring.png", c(1, 2, 1), c(254, 253, 254)),
    AssetJob::part("cassette", "bike/cassette.png", c(2, 2, 1), c(253, 253, 254)),
    AssetJob::part("chain", "bike/chain.png", c(1, 1, 2), c(254, 254, 253)),
    AssetJob::part("derailleur", "bike/derailleur.png", c(2, 1, 2), c(253, 254, 253)),
    AssetJob::part(
        "derailleur_hanger",
        "bike/derailleur_hanger.png",
        c(1, 2, 2),
        c(254, 253, 253),
    ),
    AssetJob::part("crank", "bike/crank.png", c(2, 2, 2), c(253, 253, 253)),
    AssetJob::part("pedal", "bike/pedal.png", c(3, 2, 2), c(252, 253, 253)),
];

pub const BUTTONS: [AssetJob; 3] = [
    AssetJob::button(
        "explode",
        "icons/button_unpressed.png",
        ButtonStyle::explode(EXPLODE_OUTLINE),
    ),
    AssetJob::button(
        "explode",
        "icons/button_pressed.png",
        ButtonStyle::explode(EXPLODE_OUTLINE),
    ),
    AssetJob::button("back", "icons/back.png", ButtonStyle::back(BACK_OUTLINE)),
];

/// Parts first, then buttons, in the order they are processed.
pub fn default_manifest() -> Vec<AssetJob> {
    BIKE_PARTS.iter().chain(BUTTONS.iter()).copied().collect()
}
