// SPDX-License-Identifier: MPL-2.0

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

#[derive(Debug, Clone, CosmicConfigEntry, Eq, PartialEq)]
#[version = 1]
pub struct Config {
    /// Directory searched for `<item>.<ext>` image files
    pub asset_dir: String,
    /// Image identifiers shown in the carousel, in display order
    pub items: Vec<String>,
    /// Height of the region allocated to the carousel. Values above
    /// [`MAX_CAROUSEL_HEIGHT`] are clamped.
    pub carousel_height: u16,
}

/// Tallest region in which the enlarged center cell still fits its strip:
/// `1.2 * (h - 70) <= h - 30`.
pub const MAX_CAROUSEL_HEIGHT: u16 = 270;

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_dir: String::from("resources/images"),
            items: ["France", "Egypt", "India", "Australia", "USA"]
                .into_iter()
                .map(String::from)
                .collect(),
            carousel_height: 250,
        }
    }
}

impl Config {
    /// Carousel height actually allocated, capped at [`MAX_CAROUSEL_HEIGHT`].
    pub fn carousel_height(&self) -> f32 {
        f32::from(self.carousel_height.min(MAX_CAROUSEL_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_height_is_capped() {
        let mut config = Config::default();
        assert_eq!(config.carousel_height(), 250.0);

        config.carousel_height = 400;
        assert_eq!(config.carousel_height(), 270.0);

        // Too small is left alone; the carousel reports it.
        config.carousel_height = 50;
        assert_eq!(config.carousel_height(), 50.0);
    }

    #[test]
    fn test_enlarged_cell_fits_at_max_height() {
        let height = f32::from(MAX_CAROUSEL_HEIGHT);

        assert!(1.2 * (height - 70.0) <= height - 30.0);
        assert!(1.2 * (height + 1.0 - 70.0) > height + 1.0 - 30.0);
    }
}
