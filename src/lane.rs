//! Lane positions shared by the player, the enemy and the shot trace.

/// Number of lanes across the matrix.
pub const LANE_COUNT: usize = 5;

/// A lane in `1..=5`.
///
/// Every constructor saturates, so a `Lane` can always be used to index the
/// per-lane cell tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Lane(u8);

impl Lane {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(LANE_COUNT as u8);
    pub const CENTER: Self = Self(3);

    /// Exact lane, or `None` when `n` is outside `1..=5`.
    pub const fn new(n: u8) -> Option<Self> {
        if n >= Self::MIN.0 && n <= Self::MAX.0 {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Nearest lane to `n`.
    pub const fn saturating(n: i32) -> Self {
        if n < Self::MIN.0 as i32 {
            Self::MIN
        } else if n > Self::MAX.0 as i32 {
            Self::MAX
        } else {
            Self(n as u8)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for table lookups.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Move by `delta` lanes, stopping at the edges.
    pub const fn step(self, delta: i32) -> Self {
        Self::saturating((self.0 as i32).saturating_add(delta))
    }

    /// Whether `other` is within one lane of `self`.
    pub const fn is_adjacent_or_same(self, other: Self) -> bool {
        self.0.abs_diff(other.0) <= 1
    }
}

impl Default for Lane {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Lane::new(0), None);
        assert_eq!(Lane::new(6), None);
        assert_eq!(Lane::new(1).map(Lane::get), Some(1));
        assert_eq!(Lane::new(5).map(Lane::get), Some(5));
    }

    #[test]
    fn saturating_clamps_both_ends() {
        assert_eq!(Lane::saturating(i32::MIN), Lane::MIN);
        assert_eq!(Lane::saturating(-3), Lane::MIN);
        assert_eq!(Lane::saturating(4).get(), 4);
        assert_eq!(Lane::saturating(99), Lane::MAX);
        assert_eq!(Lane::saturating(i32::MAX), Lane::MAX);
    }

    #[test]
    fn step_absorbs_pushes_against_the_wall() {
        assert_eq!(Lane::MIN.step(-1), Lane::MIN);
        assert_eq!(Lane::MAX.step(1), Lane::MAX);
        assert_eq!(Lane::CENTER.step(1).get(), 4);
        assert_eq!(Lane::CENTER.step(-1).get(), 2);
    }

    #[test]
    fn index_is_zero_based() {
        assert_eq!(Lane::MIN.index(), 0);
        assert_eq!(Lane::MAX.index(), LANE_COUNT - 1);
    }
}
