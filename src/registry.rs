use std::{collections::HashSet, path::Path};

use crate::{
    error::{ColourIdError, Result},
    palette::{ColourKey, RoleTable},
    utils::pixel::Colour,
};

/// Black and white targets already handed out during one batch run.
///
/// Every part's black and white encodings must be unique across the whole
/// asset set, otherwise hit-testing cannot tell the parts apart.
#[derive(Debug, Default)]
pub struct UsedColourRegistry {
    black: HashSet<Colour>,
    white: HashSet<Colour>,
}

impl UsedColourRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the black and white targets of `roles` for `path`.
    ///
    /// Nothing is recorded when either target is already taken.
    pub fn claim(&mut self, path: &Path, roles: &RoleTable) -> Result {
        let black = roles.target(ColourKey::Black);
        let white = roles.target(ColourKey::White);

        for (role, colour, used) in [
            (ColourKey::Black, black, &self.black),
            (ColourKey::White, white, &self.white),
        ] {
            if used.contains(&colour) {
                return Err(ColourIdError::DuplicateColour {
                    role,
                    path: path.to_path_buf(),
                    colour,
                });
            }
        }

        self.black.insert(black);
        self.white.insert(white);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.black.len()
    }

    pub fn is_empty(&self) -> bool {
        self.black.is_empty()
    }
}
