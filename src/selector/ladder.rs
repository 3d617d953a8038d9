//! Candidate ladder of square icon sizes and the selection rule over it

use crate::utils::error::IcoForgeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of a source image or of an ICO frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub width: u32,
    pub height: u32,
}

impl Dimension {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimension {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Largest frame side an ICO directory entry can describe
pub const MAX_ICO_SIDE: u32 = 256;

/// Sizes embedded into every icon, largest first
pub const DEFAULT_LADDER: [Dimension; 5] = [
    Dimension::square(256),
    Dimension::square(128),
    Dimension::square(64),
    Dimension::square(32),
    Dimension::square(16),
];

/// Ordered, strictly descending-by-width list of candidate frame sizes.
///
/// The ladder is fixed for the lifetime of a run. It defaults to
/// [`DEFAULT_LADDER`] and can be replaced through the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeLadder {
    entries: Vec<Dimension>,
}

impl SizeLadder {
    /// Build a ladder, rejecting empty lists, zero sides and ordering violations
    pub fn new(entries: Vec<Dimension>) -> Result<Self, IcoForgeError> {
        if entries.is_empty() {
            return Err(IcoForgeError::InvalidConfig(
                "size ladder must contain at least one entry".to_string(),
            ));
        }

        if let Some(bad) = entries.iter().find(|d| d.width == 0 || d.height == 0) {
            return Err(IcoForgeError::InvalidConfig(format!(
                "size ladder entry {} has a zero side",
                bad
            )));
        }

        if let Some(bad) = entries
            .iter()
            .find(|d| d.width > MAX_ICO_SIDE || d.height > MAX_ICO_SIDE)
        {
            return Err(IcoForgeError::InvalidConfig(format!(
                "size ladder entry {} exceeds the ICO limit of {} pixels",
                bad, MAX_ICO_SIDE
            )));
        }

        if let Some(pair) = entries.windows(2).find(|w| w[0].width <= w[1].width) {
            return Err(IcoForgeError::InvalidConfig(format!(
                "size ladder must be strictly descending by width ({} is followed by {})",
                pair[0], pair[1]
            )));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Dimension] {
        &self.entries
    }

    /// Smallest candidate, used when the source is narrower than every entry
    pub fn smallest(&self) -> Dimension {
        // `new` guarantees at least one entry
        self.entries[self.entries.len() - 1]
    }

    /// Select the frames to embed for a source of the given width.
    ///
    /// Returns the ladder suffix starting at the first entry whose width is
    /// `<= source_width`. A source narrower than every entry gets the
    /// smallest entry only. The result is never empty.
    pub fn select(&self, source_width: u32) -> &[Dimension] {
        let start = self
            .entries
            .iter()
            .position(|d| d.width <= source_width)
            .unwrap_or(self.entries.len() - 1);
        &self.entries[start..]
    }
}

impl Default for SizeLadder {
    fn default() -> Self {
        Self {
            entries: DEFAULT_LADDER.to_vec(),
        }
    }
}

/// Select frame sizes from the default ladder
pub fn select_sizes(source_width: u32) -> Vec<Dimension> {
    SizeLadder::default().select(source_width).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn squares(sides: &[u32]) -> Vec<Dimension> {
        sides.iter().map(|&s| Dimension::square(s)).collect()
    }

    #[test]
    fn test_full_ladder_for_large_sources() {
        assert_eq!(select_sizes(256), squares(&[256, 128, 64, 32, 16]));
        assert_eq!(select_sizes(4096), squares(&[256, 128, 64, 32, 16]));
    }

    #[test]
    fn test_first_entry_not_wider_than_source() {
        assert_eq!(select_sizes(100), squares(&[64, 32, 16]));
        assert_eq!(select_sizes(255), squares(&[128, 64, 32, 16]));
    }

    #[test]
    fn test_boundary_width_is_included() {
        assert_eq!(select_sizes(32), squares(&[32, 16]));
        assert_eq!(select_sizes(16), squares(&[16]));
        assert_eq!(select_sizes(128), squares(&[128, 64, 32, 16]));
    }

    #[test]
    fn test_narrow_source_falls_back_to_smallest() {
        assert_eq!(select_sizes(10), squares(&[16]));
        assert_eq!(select_sizes(1), squares(&[16]));
        assert_eq!(select_sizes(0), squares(&[16]));
    }

    #[test]
    fn test_custom_ladder() {
        let ladder = SizeLadder::new(squares(&[48, 24])).unwrap();
        assert_eq!(ladder.select(30), &squares(&[24])[..]);
        assert_eq!(ladder.select(10), &squares(&[24])[..]);
        assert_eq!(ladder.select(48), &squares(&[48, 24])[..]);
        assert_eq!(ladder.smallest(), Dimension::square(24));
    }

    #[test]
    fn test_rejects_invalid_ladders() {
        assert!(SizeLadder::new(vec![]).is_err());
        assert!(SizeLadder::new(squares(&[16, 32])).is_err());
        assert!(SizeLadder::new(squares(&[32, 32])).is_err());
        assert!(SizeLadder::new(vec![Dimension::new(32, 0)]).is_err());
        assert!(SizeLadder::new(squares(&[512, 256])).is_err());
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::square(64).to_string(), "(64, 64)");
        assert_eq!(Dimension::from((3, 4)).to_string(), "(3, 4)");
    }

    proptest! {
        #[test]
        fn prop_selection_is_nonempty_suffix(width in any::<u32>()) {
            let ladder = SizeLadder::default();
            let picked = ladder.select(width);
            prop_assert!(!picked.is_empty());
            prop_assert!(ladder.entries().ends_with(picked));
            prop_assert_eq!(*picked.last().unwrap(), ladder.smallest());
        }

        #[test]
        fn prop_first_pick_fits_source_unless_fallback(width in 16u32..10_000) {
            let picked = select_sizes(width);
            prop_assert!(picked[0].width <= width);
            let skipped = DEFAULT_LADDER.len() - picked.len();
            prop_assert!(DEFAULT_LADDER[..skipped].iter().all(|d| d.width > width));
        }
    }
}
